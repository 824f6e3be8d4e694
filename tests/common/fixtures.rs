//! Test fixtures for creating test data
#![allow(dead_code)]

use chrono::{NaiveDateTime, Utc};
use mentorhub::orm::{
    courses, mentor_students, mentors, notifications, students, task_assignments, tasks, warnings,
};
use sea_orm::{entity::*, ActiveValue::Set, DatabaseConnection, DbErr};

pub async fn create_mentor(db: &DatabaseConnection, name: &str) -> Result<mentors::Model, DbErr> {
    mentors::ActiveModel {
        name: Set(name.to_string()),
        email: Set(format!("{}@example.com", name)),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_student(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
) -> Result<students::Model, DbErr> {
    let now = Utc::now().naive_utc();
    students::ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        progress: Set(0),
        warning_count: Set(0),
        warning_status: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_link(
    db: &DatabaseConnection,
    mentor_id: i32,
    student_id: i32,
    is_active: bool,
) -> Result<mentor_students::Model, DbErr> {
    mentor_students::ActiveModel {
        mentor_id: Set(mentor_id),
        student_id: Set(student_id),
        is_active: Set(is_active),
        assigned_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn deactivate_link(db: &DatabaseConnection, link_id: i32) -> Result<(), DbErr> {
    let link = mentor_students::Entity::find_by_id(link_id)
        .one(db)
        .await?
        .expect("link fixture should exist");
    let mut link: mentor_students::ActiveModel = link.into();
    link.is_active = Set(false);
    link.update(db).await?;
    Ok(())
}

pub async fn create_course(
    db: &DatabaseConnection,
    mentor_id: i32,
    title: &str,
) -> Result<courses::Model, DbErr> {
    courses::ActiveModel {
        mentor_id: Set(mentor_id),
        title: Set(title.to_string()),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_task(
    db: &DatabaseConnection,
    course_id: i32,
    title: &str,
) -> Result<tasks::Model, DbErr> {
    tasks::ActiveModel {
        course_id: Set(course_id),
        title: Set(title.to_string()),
        description: Set(format!("Do the work for {}", title)),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Insert an assignment row directly, bypassing the service, for tests that
/// need a specific starting state.
pub async fn create_assignment(
    db: &DatabaseConnection,
    task_id: i32,
    student_id: i32,
    status: &str,
) -> Result<task_assignments::Model, DbErr> {
    task_assignments::ActiveModel {
        task_id: Set(task_id),
        student_id: Set(student_id),
        status: Set(status.to_string()),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Insert a warning row directly with an explicit timestamp so ordering
/// assertions are deterministic.
pub async fn create_warning_at(
    db: &DatabaseConnection,
    student_id: i32,
    mentor_id: i32,
    title: &str,
    status: &str,
    created_at: NaiveDateTime,
) -> Result<warnings::Model, DbErr> {
    warnings::ActiveModel {
        student_id: Set(student_id),
        mentor_id: Set(mentor_id),
        title: Set(title.to_string()),
        remark: Set("fixture remark".to_string()),
        level: Set("LOW".to_string()),
        status: Set(status.to_string()),
        created_at: Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Insert a notification row directly with an explicit timestamp.
pub async fn create_notification_at(
    db: &DatabaseConnection,
    user_id: i32,
    message: &str,
    created_at: NaiveDateTime,
) -> Result<notifications::Model, DbErr> {
    notifications::ActiveModel {
        user_id: Set(user_id),
        type_: Set("OTHER".to_string()),
        message: Set(message.to_string()),
        related_id: Set(None),
        is_read: Set(false),
        created_at: Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
