//! Notification endpoints: list, send, read-state transitions

use crate::error::ServiceError;
use crate::middleware::Requester;
use crate::notifications::{self, NotificationType};
use actix_web::{get, post, web, HttpResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

pub(super) fn configure(conf: &mut actix_web::web::ServiceConfig) {
    conf.service(view_notifications)
        .service(send_notification)
        .service(unread_count)
        .service(mark_read)
        .service(mark_all_read);
}

#[derive(Deserialize)]
struct SendNotification {
    user_id: i32,
    message: String,
    #[serde(rename = "type")]
    type_: String,
    related_id: Option<i32>,
}

/// GET /notifications - The caller's notifications, newest first
#[get("/notifications")]
async fn view_notifications(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ServiceError> {
    let notifications = notifications::get_notifications(db.get_ref(), requester.id).await?;

    Ok(HttpResponse::Ok().json(notifications))
}

/// POST /notifications - Send a notification to a user (mentor-originated)
#[post("/notifications")]
async fn send_notification(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
    payload: web::Json<SendNotification>,
) -> Result<HttpResponse, ServiceError> {
    requester.mentor_id()?;

    let payload = payload.into_inner();

    if payload.message.trim().is_empty() {
        return Err(ServiceError::Validation("message is required".to_string()));
    }

    let notification_type = NotificationType::from_str(&payload.type_)
        .ok_or_else(|| ServiceError::Validation("unknown notification type".to_string()))?;

    let notification = notifications::create_notification(
        db.get_ref(),
        payload.user_id,
        payload.message,
        notification_type,
        payload.related_id,
    )
    .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Notification sent",
        "notification": notification,
    })))
}

/// GET /notifications/unread-count - Unread badge count for the caller
#[get("/notifications/unread-count")]
async fn unread_count(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ServiceError> {
    let count = notifications::count_unread(db.get_ref(), requester.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "unread_count": count,
    })))
}

/// POST /notifications/{id}/read - Mark one of the caller's notifications read
#[post("/notifications/{id}/read")]
async fn mark_read(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
    notification_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let notification =
        notifications::mark_notification_read(db.get_ref(), *notification_id, requester.id)
            .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Notification marked as read",
        "notification": notification,
    })))
}

/// POST /notifications/mark-all-read - Mark all the caller's notifications read
#[post("/notifications/mark-all-read")]
async fn mark_all_read(
    requester: Requester,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ServiceError> {
    notifications::mark_all_read(db.get_ref(), requester.id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "All notifications marked as read",
    })))
}
