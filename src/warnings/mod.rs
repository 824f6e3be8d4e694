//! Warning service
//!
//! Disciplinary records tied to the mentor-student link. Issuing a warning
//! bumps the student's aggregate counter, which only ever goes up; resolving
//! the last active warning clears the derived status label.

use crate::authorization;
use crate::error::{ServiceError, ServiceResult};
use crate::middleware::Requester;
use crate::notifications::{self, NotificationType};
use crate::orm::{mentors, students, warnings};
use sea_orm::sea_query::Expr;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl WarningLevel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "LOW" => Some(Self::Low),
            "MEDIUM" => Some(Self::Medium),
            "HIGH" => Some(Self::High),
            "CRITICAL" => Some(Self::Critical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningStatus {
    Active,
    Resolved,
}

impl WarningStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "ACTIVE",
            Self::Resolved => "RESOLVED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(Self::Active),
            "RESOLVED" => Some(Self::Resolved),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IssueWarning {
    pub student_id: i32,
    pub title: String,
    pub remark: String,
    pub level: String,
}

/// Warning as returned to clients, with a summary of the issuing mentor.
#[derive(Debug, Serialize)]
pub struct WarningView {
    pub id: i32,
    pub student_id: i32,
    pub mentor_id: i32,
    pub title: String,
    pub remark: String,
    pub level: String,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
    pub mentor: Option<MentorSummary>,
}

#[derive(Debug, Serialize)]
pub struct MentorSummary {
    pub id: i32,
    pub name: String,
    pub photo: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WarningCounts {
    pub active: i64,
    pub resolved: i64,
}

#[derive(Debug, Serialize)]
pub struct StudentWarnings {
    pub warnings: Vec<WarningView>,
    pub counts: WarningCounts,
}

/// Issue a warning against a linked student.
///
/// Creates the warning, increments the student's warning_count by exactly
/// one, and marks the student's derived warning_status ACTIVE. Returns the
/// warning together with the refreshed student row.
pub async fn issue_warning(
    db: &DatabaseConnection,
    mentor_id: i32,
    payload: IssueWarning,
) -> ServiceResult<(warnings::Model, students::Model)> {
    let IssueWarning {
        student_id,
        title,
        remark,
        level,
    } = payload;

    if title.trim().is_empty() || remark.trim().is_empty() || level.trim().is_empty() {
        return Err(ServiceError::Validation(
            "student_id, title, remark and level are required".to_string(),
        ));
    }

    let level = WarningLevel::from_str(&level).ok_or_else(|| {
        ServiceError::Validation("level must be one of LOW, MEDIUM, HIGH, CRITICAL".to_string())
    })?;

    authorization::ensure_active_link(db, mentor_id, student_id).await?;

    let warning = warnings::ActiveModel {
        student_id: Set(student_id),
        mentor_id: Set(mentor_id),
        title: Set(title.clone()),
        remark: Set(remark),
        level: Set(level.as_str().to_string()),
        status: Set(WarningStatus::Active.as_str().to_string()),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    // Single-statement increment so concurrent issues never lose a count.
    students::Entity::update_many()
        .col_expr(
            students::Column::WarningCount,
            Expr::col(students::Column::WarningCount).add(1),
        )
        .col_expr(
            students::Column::WarningStatus,
            Expr::value(WarningStatus::Active.as_str()),
        )
        .col_expr(
            students::Column::UpdatedAt,
            Expr::value(chrono::Utc::now().naive_utc()),
        )
        .filter(students::Column::Id.eq(student_id))
        .exec(db)
        .await?;

    let student = students::Entity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::Custom(format!("student {} vanished mid-warning", student_id)))?;

    if let Err(err) = notifications::create_notification(
        db,
        student_id,
        format!("Warning issued: {}", title),
        NotificationType::WarningIssued,
        Some(warning.id),
    )
    .await
    {
        log::warn!(
            "failed to notify student {} of warning {}: {}",
            student_id,
            warning.id,
            err
        );
    }

    Ok((warning, student))
}

/// Fetch a student's warnings, newest first, with active/resolved counts.
///
/// Gated by the role+link rules: students see only their own, mentors only
/// their linked students'.
pub async fn get_student_warnings(
    db: &DatabaseConnection,
    requester: &Requester,
    student_id: i32,
) -> ServiceResult<StudentWarnings> {
    students::Entity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Student not found".to_string()))?;

    authorization::ensure_can_act_on_student(db, requester, student_id).await?;

    let rows = warnings::Entity::find()
        .filter(warnings::Column::StudentId.eq(student_id))
        .find_also_related(mentors::Entity)
        .order_by_desc(warnings::Column::CreatedAt)
        .all(db)
        .await?;

    let mut active = 0;
    let mut resolved = 0;
    let warnings = rows
        .into_iter()
        .map(|(warning, mentor)| {
            match WarningStatus::from_str(&warning.status) {
                Some(WarningStatus::Resolved) => resolved += 1,
                _ => active += 1,
            }
            WarningView {
                id: warning.id,
                student_id: warning.student_id,
                mentor_id: warning.mentor_id,
                title: warning.title,
                remark: warning.remark,
                level: warning.level,
                status: warning.status,
                created_at: warning.created_at,
                mentor: mentor.map(|m| MentorSummary {
                    id: m.id,
                    name: m.name,
                    photo: m.photo,
                }),
            }
        })
        .collect();

    Ok(StudentWarnings {
        warnings,
        counts: WarningCounts { active, resolved },
    })
}

/// Resolve a warning. Any mentor with an active link to the warning's
/// student may do so; resolving an already-resolved warning is a no-op.
/// The student's warning_count is never decremented.
pub async fn resolve_warning(
    db: &DatabaseConnection,
    mentor_id: i32,
    warning_id: i32,
) -> ServiceResult<warnings::Model> {
    let warning = warnings::Entity::find_by_id(warning_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Warning not found".to_string()))?;

    authorization::ensure_active_link(db, mentor_id, warning.student_id).await?;

    if WarningStatus::from_str(&warning.status) == Some(WarningStatus::Resolved) {
        return Ok(warning);
    }

    let student_id = warning.student_id;
    let mut active: warnings::ActiveModel = warning.into();
    active.status = Set(WarningStatus::Resolved.as_str().to_string());
    let warning = active.update(db).await?;

    let remaining_active = warnings::Entity::find()
        .filter(warnings::Column::StudentId.eq(student_id))
        .filter(warnings::Column::Status.eq(WarningStatus::Active.as_str()))
        .count(db)
        .await?;

    if remaining_active == 0 {
        if let Some(student) = students::Entity::find_by_id(student_id).one(db).await? {
            let mut student: students::ActiveModel = student.into();
            student.warning_status = Set(None);
            student.updated_at = Set(chrono::Utc::now().naive_utc());
            student.update(db).await?;
        }
    }

    Ok(warning)
}
