//! Warning endpoints: issue, list, resolve

use crate::error::ServiceError;
use crate::middleware::Requester;
use crate::warnings::{self, IssueWarning};
use actix_web::{get, post, web, HttpResponse};
use sea_orm::DatabaseConnection;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(issue_warning)
        .service(view_student_warnings)
        .service(resolve_warning);
}

/// POST /warnings - Issue a warning against a linked student
#[post("/warnings")]
async fn issue_warning(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
    payload: web::Json<IssueWarning>,
) -> Result<HttpResponse, ServiceError> {
    let mentor_id = requester.mentor_id()?;

    let (warning, student) =
        warnings::issue_warning(db.get_ref(), mentor_id, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Warning issued successfully",
        "warning": warning,
        "student": student,
    })))
}

/// GET /warnings/{studentId} - A student's warnings with counts
///
/// Students may fetch their own; mentors those of linked students.
#[get("/warnings/{student_id}")]
async fn view_student_warnings(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
    student_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let warnings =
        warnings::get_student_warnings(db.get_ref(), &requester, *student_id).await?;

    Ok(HttpResponse::Ok().json(warnings))
}

/// POST /warnings/{warningId}/resolve - Mark a warning resolved
#[post("/warnings/{warning_id}/resolve")]
async fn resolve_warning(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
    warning_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let mentor_id = requester.mentor_id()?;

    let warning = warnings::resolve_warning(db.get_ref(), mentor_id, *warning_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Warning resolved",
        "warning": warning,
    })))
}
