//! Notification service
//!
//! Creation plus the one-way unread → read transition. There is no
//! un-reading operation.

pub mod types;

use crate::error::{ServiceError, ServiceResult};
use crate::orm::notifications;
use sea_orm::sea_query::Expr;
use sea_orm::{entity::*, query::*, DatabaseConnection};

pub use types::NotificationType;

/// Create a notification for a user. Unconditional; starts unread.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
    message: String,
    notification_type: NotificationType,
    related_id: Option<i32>,
) -> ServiceResult<notifications::Model> {
    let notification = notifications::ActiveModel {
        user_id: Set(user_id),
        type_: Set(notification_type.as_str().to_string()),
        message: Set(message),
        related_id: Set(related_id),
        is_read: Set(false),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(notification.insert(db).await?)
}

/// Mark a single notification as read.
///
/// A missing row and a row owned by someone else are indistinguishable to
/// the caller: both are a 404, so existence of other users' notifications
/// never leaks.
pub async fn mark_notification_read(
    db: &DatabaseConnection,
    notification_id: i32,
    user_id: i32,
) -> ServiceResult<notifications::Model> {
    let notification = notifications::Entity::find_by_id(notification_id)
        .one(db)
        .await?;

    let notification = match notification {
        Some(n) if n.user_id == user_id => n,
        _ => {
            return Err(ServiceError::NotFound(
                "Notification not found".to_string(),
            ))
        }
    };

    if notification.is_read {
        return Ok(notification);
    }

    let mut active: notifications::ActiveModel = notification.into();
    active.is_read = Set(true);
    active.read_at = Set(Some(chrono::Utc::now().naive_utc()));

    Ok(active.update(db).await?)
}

/// Mark all of a user's unread notifications as read. Idempotent; `read_at`
/// is set here too so single and bulk paths agree.
pub async fn mark_all_read(db: &DatabaseConnection, user_id: i32) -> ServiceResult<()> {
    notifications::Entity::update_many()
        .col_expr(notifications::Column::IsRead, Expr::value(true))
        .col_expr(
            notifications::Column::ReadAt,
            Expr::value(chrono::Utc::now().naive_utc()),
        )
        .filter(notifications::Column::UserId.eq(user_id))
        .filter(notifications::Column::IsRead.eq(false))
        .exec(db)
        .await?;

    Ok(())
}

/// Fetch all notifications for a user, newest first.
pub async fn get_notifications(
    db: &DatabaseConnection,
    user_id: i32,
) -> ServiceResult<Vec<notifications::Model>> {
    Ok(notifications::Entity::find()
        .filter(notifications::Column::UserId.eq(user_id))
        .order_by_desc(notifications::Column::CreatedAt)
        .all(db)
        .await?)
}

/// Count unread notifications for a user.
pub async fn count_unread(db: &DatabaseConnection, user_id: i32) -> ServiceResult<i64> {
    let count = notifications::Entity::find()
        .filter(notifications::Column::UserId.eq(user_id))
        .filter(notifications::Column::IsRead.eq(false))
        .count(db)
        .await?;

    Ok(count as i64)
}
