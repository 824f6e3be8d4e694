//! Mentor-facing endpoints: dashboard, roster, task assignment

use crate::assignments::{self, AssignTask};
use crate::dashboard;
use crate::error::ServiceError;
use crate::middleware::Requester;
use crate::roster::{self, CreateStudent, UpdateStudent};
use actix_web::{get, post, put, web, HttpResponse};
use sea_orm::DatabaseConnection;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_dashboard)
        .service(view_students)
        .service(create_student)
        .service(update_student)
        .service(assign_task);
}

/// GET /mentors/dashboard - Mentor profile with summary stats
#[get("/mentors/dashboard")]
async fn view_dashboard(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ServiceError> {
    let mentor_id = requester.mentor_id()?;

    let dashboard = dashboard::mentor_dashboard(db.get_ref(), mentor_id).await?;

    Ok(HttpResponse::Ok().json(dashboard))
}

/// GET /mentors/students - Roster of actively linked students
#[get("/mentors/students")]
async fn view_students(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ServiceError> {
    let mentor_id = requester.mentor_id()?;

    let students = dashboard::mentor_students(db.get_ref(), mentor_id).await?;

    Ok(HttpResponse::Ok().json(students))
}

/// POST /mentors/students - Create a student and link them to the caller
#[post("/mentors/students")]
async fn create_student(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
    payload: web::Json<CreateStudent>,
) -> Result<HttpResponse, ServiceError> {
    let mentor_id = requester.mentor_id()?;

    let (student, link) =
        roster::create_student(db.get_ref(), mentor_id, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Student created successfully",
        "student": student,
        "link": link,
    })))
}

/// PUT /mentors/students/{studentId} - Update a linked student's profile
#[put("/mentors/students/{student_id}")]
async fn update_student(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
    student_id: web::Path<i32>,
    payload: web::Json<UpdateStudent>,
) -> Result<HttpResponse, ServiceError> {
    let mentor_id = requester.mentor_id()?;

    let student =
        roster::update_student(db.get_ref(), mentor_id, *student_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Student updated successfully",
        "student": student,
    })))
}

/// POST /mentors/tasks/assign - Assign a task from an owned course
#[post("/mentors/tasks/assign")]
async fn assign_task(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
    payload: web::Json<AssignTask>,
) -> Result<HttpResponse, ServiceError> {
    let mentor_id = requester.mentor_id()?;

    let assignment =
        assignments::assign_task(db.get_ref(), mentor_id, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Task assigned to student successfully",
        "assignment": assignment,
    })))
}
