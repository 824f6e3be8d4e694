//! Task assignment service
//!
//! Assigning a task instantiates it for one student; the resulting record
//! moves through PENDING → SUBMITTED → {APPROVED, REJECTED}. Approved and
//! rejected are terminal; a submitted assignment may be resubmitted.

use crate::authorization;
use crate::error::{ServiceError, ServiceResult};
use crate::notifications::{self, NotificationType};
use crate::orm::{courses, students, task_assignments, tasks};
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};

/// Submission/review states of a task assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    Submitted,
    Approved,
    Rejected,
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Submitted => "SUBMITTED",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "SUBMITTED" => Some(Self::Submitted),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// No transition leaves a reviewed assignment.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Submission is legal from PENDING and, as a resubmission, SUBMITTED.
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Pending | Self::Submitted)
    }

    /// Review is legal only from SUBMITTED; a pending assignment has
    /// nothing to review.
    pub fn can_review(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

#[derive(Debug, Deserialize)]
pub struct AssignTask {
    pub task_id: i32,
    pub student_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct SubmitTask {
    pub github_link: Option<String>,
    pub hosted_link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewTask {
    pub student_id: i32,
    pub status: String,
    pub remark: String,
}

/// An assignment joined with its task and course titles, as students see it.
#[derive(Debug, Serialize)]
pub struct StudentTaskView {
    pub assignment_id: i32,
    pub task_id: i32,
    pub title: String,
    pub description: String,
    pub doc_link: Option<String>,
    pub course_id: i32,
    pub course_title: String,
    pub status: String,
    pub github_link: Option<String>,
    pub hosted_link: Option<String>,
    pub review_remark: Option<String>,
    pub submitted_at: Option<chrono::NaiveDateTime>,
    pub reviewed_at: Option<chrono::NaiveDateTime>,
    pub created_at: chrono::NaiveDateTime,
}

fn is_unique_violation(err: &DbErr) -> bool {
    let msg = err.to_string().to_lowercase();
    msg.contains("unique") || msg.contains("duplicate key")
}

/// Assign a task from one of the mentor's own courses to a linked student.
pub async fn assign_task(
    db: &DatabaseConnection,
    mentor_id: i32,
    payload: AssignTask,
) -> ServiceResult<task_assignments::Model> {
    let AssignTask {
        task_id,
        student_id,
    } = payload;

    let (task, course) = tasks::Entity::find_by_id(task_id)
        .find_also_related(courses::Entity)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Task not found".to_string()))?;

    let course = course.ok_or_else(|| ServiceError::NotFound("Course not found".to_string()))?;

    if course.mentor_id != mentor_id {
        return Err(ServiceError::Authorization(
            "You can only assign tasks from your own courses".to_string(),
        ));
    }

    authorization::ensure_active_link(db, mentor_id, student_id).await?;

    let existing = task_assignments::Entity::find()
        .filter(task_assignments::Column::TaskId.eq(task_id))
        .filter(task_assignments::Column::StudentId.eq(student_id))
        .one(db)
        .await?;

    if existing.is_some() {
        return Err(ServiceError::Conflict(
            "This task is already assigned to this student".to_string(),
        ));
    }

    let assignment = task_assignments::ActiveModel {
        task_id: Set(task_id),
        student_id: Set(student_id),
        status: Set(TaskStatus::Pending.as_str().to_string()),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    // A concurrent assign for the same pair loses the race at the unique
    // index; surface it as the same conflict the pre-check produces.
    let assignment = assignment.insert(db).await.map_err(|err| {
        if is_unique_violation(&err) {
            ServiceError::Conflict("This task is already assigned to this student".to_string())
        } else {
            ServiceError::Database(err)
        }
    })?;

    if let Err(err) = notifications::create_notification(
        db,
        student_id,
        format!("New task assigned: {}", task.title),
        NotificationType::TaskAssigned,
        Some(task.id),
    )
    .await
    {
        log::warn!(
            "failed to notify student {} of assignment {}: {}",
            student_id,
            assignment.id,
            err
        );
    }

    Ok(assignment)
}

/// Submit work for an assigned task.
pub async fn submit_task(
    db: &DatabaseConnection,
    student_id: i32,
    task_id: i32,
    payload: SubmitTask,
) -> ServiceResult<task_assignments::Model> {
    let SubmitTask {
        github_link,
        hosted_link,
    } = payload;

    if github_link.as_deref().map_or(true, str::is_empty)
        && hosted_link.as_deref().map_or(true, str::is_empty)
    {
        return Err(ServiceError::Validation(
            "At least one of github_link or hosted_link is required".to_string(),
        ));
    }

    let assignment = task_assignments::Entity::find()
        .filter(task_assignments::Column::TaskId.eq(task_id))
        .filter(task_assignments::Column::StudentId.eq(student_id))
        .one(db)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound("Task assignment not found for this student".to_string())
        })?;

    let status = TaskStatus::from_str(&assignment.status)
        .ok_or_else(|| DbErr::Custom(format!("corrupt assignment status: {}", assignment.status)))?;

    if !status.can_submit() {
        return Err(ServiceError::Conflict(
            "This assignment has already been reviewed".to_string(),
        ));
    }

    let mut active: task_assignments::ActiveModel = assignment.into();
    if let Some(link) = github_link {
        active.github_link = Set(Some(link));
    }
    if let Some(link) = hosted_link {
        active.hosted_link = Set(Some(link));
    }
    active.status = Set(TaskStatus::Submitted.as_str().to_string());
    active.submitted_at = Set(Some(chrono::Utc::now().naive_utc()));

    Ok(active.update(db).await?)
}

/// Approve or reject a submitted assignment, recording the reviewer's remark.
pub async fn review_task(
    db: &DatabaseConnection,
    mentor_id: i32,
    task_id: i32,
    payload: ReviewTask,
) -> ServiceResult<task_assignments::Model> {
    let ReviewTask {
        student_id,
        status,
        remark,
    } = payload;

    let verdict = TaskStatus::from_str(&status)
        .filter(TaskStatus::is_terminal)
        .ok_or_else(|| {
            ServiceError::Validation("status must be APPROVED or REJECTED".to_string())
        })?;

    let (task, course) = tasks::Entity::find_by_id(task_id)
        .find_also_related(courses::Entity)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Task not found".to_string()))?;

    let course = course.ok_or_else(|| ServiceError::NotFound("Course not found".to_string()))?;

    if course.mentor_id != mentor_id {
        return Err(ServiceError::Authorization(
            "You can only review tasks from your own courses".to_string(),
        ));
    }

    let assignment = task_assignments::Entity::find()
        .filter(task_assignments::Column::TaskId.eq(task_id))
        .filter(task_assignments::Column::StudentId.eq(student_id))
        .one(db)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound("Task assignment not found for this student".to_string())
        })?;

    let current = TaskStatus::from_str(&assignment.status)
        .ok_or_else(|| DbErr::Custom(format!("corrupt assignment status: {}", assignment.status)))?;

    if !current.can_review() {
        let message = if current.is_terminal() {
            "This assignment has already been reviewed"
        } else {
            "This assignment has not been submitted yet"
        };
        return Err(ServiceError::Conflict(message.to_string()));
    }

    let mut active: task_assignments::ActiveModel = assignment.into();
    active.status = Set(verdict.as_str().to_string());
    active.review_remark = Set(Some(remark));
    active.reviewed_at = Set(Some(chrono::Utc::now().naive_utc()));

    let updated = active.update(db).await?;

    if let Err(err) = notifications::create_notification(
        db,
        student_id,
        format!("Your submission for \"{}\" was {}", task.title, verdict.as_str()),
        NotificationType::TaskReviewed,
        Some(task.id),
    )
    .await
    {
        log::warn!(
            "failed to notify student {} of review on task {}: {}",
            student_id,
            task.id,
            err
        );
    }

    Ok(updated)
}

/// All assignments for a student, newest first, joined with task and course.
pub async fn get_student_tasks(
    db: &DatabaseConnection,
    student_id: i32,
) -> ServiceResult<Vec<StudentTaskView>> {
    students::Entity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Student not found".to_string()))?;

    let rows = task_assignments::Entity::find()
        .filter(task_assignments::Column::StudentId.eq(student_id))
        .find_also_related(tasks::Entity)
        .order_by_desc(task_assignments::Column::CreatedAt)
        .all(db)
        .await?;

    let course_ids: Vec<i32> = rows
        .iter()
        .filter_map(|(_, task)| task.as_ref().map(|t| t.course_id))
        .collect();

    let course_titles: std::collections::HashMap<i32, String> = if course_ids.is_empty() {
        Default::default()
    } else {
        courses::Entity::find()
            .filter(courses::Column::Id.is_in(course_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.title))
            .collect()
    };

    let views = rows
        .into_iter()
        .filter_map(|(assignment, task)| {
            let task = task?;
            let course_title = course_titles.get(&task.course_id).cloned()?;
            Some(StudentTaskView {
                assignment_id: assignment.id,
                task_id: task.id,
                title: task.title,
                description: task.description,
                doc_link: task.doc_link,
                course_id: task.course_id,
                course_title,
                status: assignment.status,
                github_link: assignment.github_link,
                hosted_link: assignment.hosted_link,
                review_remark: assignment.review_remark,
                submitted_at: assignment.submitted_at,
                reviewed_at: assignment.reviewed_at,
                created_at: assignment.created_at,
            })
        })
        .collect();

    Ok(views)
}
