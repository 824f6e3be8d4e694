//! Student-facing endpoints: dashboard, assigned tasks, progress, submission

use crate::assignments::{self, SubmitTask};
use crate::dashboard;
use crate::error::ServiceError;
use crate::middleware::Requester;
use actix_web::{get, post, web, HttpResponse};
use sea_orm::DatabaseConnection;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_dashboard)
        .service(view_tasks)
        .service(view_progress)
        .service(submit_task);
}

/// GET /students/dashboard - Own profile with task statistics
#[get("/students/dashboard")]
async fn view_dashboard(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ServiceError> {
    let student_id = requester.student_id()?;

    let dashboard = dashboard::student_dashboard(db.get_ref(), student_id).await?;

    Ok(HttpResponse::Ok().json(dashboard))
}

/// GET /students/tasks - Own assignments, newest first
#[get("/students/tasks")]
async fn view_tasks(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ServiceError> {
    let student_id = requester.student_id()?;

    let tasks = assignments::get_student_tasks(db.get_ref(), student_id).await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// GET /students/progress - Per-status counts and completion percentage
#[get("/students/progress")]
async fn view_progress(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ServiceError> {
    let student_id = requester.student_id()?;

    let progress = dashboard::student_progress(db.get_ref(), student_id).await?;

    Ok(HttpResponse::Ok().json(progress))
}

/// POST /students/tasks/{taskId}/submit - Submit work for an assigned task
#[post("/students/tasks/{task_id}/submit")]
async fn submit_task(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
    task_id: web::Path<i32>,
    payload: web::Json<SubmitTask>,
) -> Result<HttpResponse, ServiceError> {
    let student_id = requester.student_id()?;

    let assignment =
        assignments::submit_task(db.get_ref(), student_id, *task_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Task submitted successfully",
        "assignment": assignment,
    })))
}
