//! Task review endpoint

use crate::assignments::{self, ReviewTask};
use crate::error::ServiceError;
use crate::middleware::Requester;
use actix_web::{put, web, HttpResponse};
use sea_orm::DatabaseConnection;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(review_task);
}

/// PUT /tasks/{taskId}/review - Approve or reject a submitted assignment
#[put("/tasks/{task_id}/review")]
async fn review_task(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
    task_id: web::Path<i32>,
    payload: web::Json<ReviewTask>,
) -> Result<HttpResponse, ServiceError> {
    let mentor_id = requester.mentor_id()?;

    let assignment =
        assignments::review_task(db.get_ref(), mentor_id, *task_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Task reviewed successfully",
        "assignment": assignment,
    })))
}
