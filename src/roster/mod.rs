//! Roster management
//!
//! Mentors provision their own students. Creating a student also creates
//! the active link, in one transaction, so the new student is immediately
//! assignable.

use crate::authorization;
use crate::error::{ServiceError, ServiceResult};
use crate::orm::{mentor_students, students};
use sea_orm::{entity::*, query::*, DatabaseConnection, TransactionTrait};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudent {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    pub photo: Option<String>,
    pub social_links: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudent {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub photo: Option<String>,
    pub social_links: Option<String>,
    #[validate(range(min = 0, max = 100, message = "progress must be between 0 and 100"))]
    pub progress: Option<i32>,
}

fn validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "invalid payload".to_string())
}

/// Create a student and the active mentor link together.
pub async fn create_student(
    db: &DatabaseConnection,
    mentor_id: i32,
    payload: CreateStudent,
) -> ServiceResult<(students::Model, mentor_students::Model)> {
    payload
        .validate()
        .map_err(|e| ServiceError::Validation(validation_message(&e)))?;

    let existing = students::Entity::find()
        .filter(students::Column::Email.eq(payload.email.clone()))
        .one(db)
        .await?;

    if existing.is_some() {
        return Err(ServiceError::Conflict(
            "A student with this email already exists".to_string(),
        ));
    }

    let now = chrono::Utc::now().naive_utc();
    let txn = db.begin().await?;

    let student = students::ActiveModel {
        name: Set(payload.name),
        email: Set(payload.email),
        photo: Set(payload.photo),
        social_links: Set(payload.social_links),
        progress: Set(0),
        warning_count: Set(0),
        warning_status: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let link = mentor_students::ActiveModel {
        mentor_id: Set(mentor_id),
        student_id: Set(student.id),
        is_active: Set(true),
        assigned_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok((student, link))
}

/// Update profile fields of a linked student.
pub async fn update_student(
    db: &DatabaseConnection,
    mentor_id: i32,
    student_id: i32,
    payload: UpdateStudent,
) -> ServiceResult<students::Model> {
    payload
        .validate()
        .map_err(|e| ServiceError::Validation(validation_message(&e)))?;

    authorization::ensure_active_link(db, mentor_id, student_id).await?;

    let student = students::Entity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Student not found".to_string()))?;

    let mut active: students::ActiveModel = student.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(photo) = payload.photo {
        active.photo = Set(Some(photo));
    }
    if let Some(links) = payload.social_links {
        active.social_links = Set(Some(links));
    }
    if let Some(progress) = payload.progress {
        active.progress = Set(progress);
    }
    active.updated_at = Set(chrono::Utc::now().naive_utc());

    Ok(active.update(db).await?)
}
