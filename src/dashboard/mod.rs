//! Read-only dashboard aggregators
//!
//! Summary statistics over students, links, and assignments. Nothing here
//! mutates the store.

use crate::assignments::TaskStatus;
use crate::error::{ServiceError, ServiceResult};
use crate::orm::{mentor_students, mentors, students, task_assignments};
use sea_orm::{entity::*, query::*, DatabaseConnection};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MentorProfile {
    pub name: String,
    pub photo: Option<String>,
    pub contact: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MentorStats {
    pub total_students: i64,
}

#[derive(Debug, Serialize)]
pub struct MentorDashboard {
    pub mentor: MentorProfile,
    pub stats: MentorStats,
}

#[derive(Debug, Serialize)]
pub struct StudentSummary {
    pub student_id: i32,
    pub name: String,
    pub photo: Option<String>,
    pub progress: i32,
    pub warning_status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TaskStats {
    pub total_tasks: i64,
    pub pending: i64,
    pub submitted: i64,
    pub approved: i64,
    pub rejected: i64,
    pub completion_percentage: i64,
}

#[derive(Debug, Serialize)]
pub struct StudentDashboard {
    pub student_id: i32,
    pub name: String,
    pub photo: Option<String>,
    pub progress: i32,
    pub warning_count: i32,
    pub warning_status: Option<String>,
    pub task_stats: TaskStats,
}

/// Mentor profile plus the count of actively linked students.
pub async fn mentor_dashboard(
    db: &DatabaseConnection,
    mentor_id: i32,
) -> ServiceResult<MentorDashboard> {
    let mentor = mentors::Entity::find_by_id(mentor_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Mentor not found".to_string()))?;

    let total_students = mentor_students::Entity::find()
        .filter(mentor_students::Column::MentorId.eq(mentor_id))
        .filter(mentor_students::Column::IsActive.eq(true))
        .count(db)
        .await?;

    Ok(MentorDashboard {
        mentor: MentorProfile {
            name: mentor.name,
            photo: mentor.photo,
            contact: mentor.contact,
            bio: mentor.bio,
        },
        stats: MentorStats {
            total_students: total_students as i64,
        },
    })
}

/// Roster of students actively linked to a mentor.
pub async fn mentor_students(
    db: &DatabaseConnection,
    mentor_id: i32,
) -> ServiceResult<Vec<StudentSummary>> {
    let rows = mentor_students::Entity::find()
        .filter(mentor_students::Column::MentorId.eq(mentor_id))
        .filter(mentor_students::Column::IsActive.eq(true))
        .find_also_related(students::Entity)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|(_, student)| {
            let student = student?;
            Some(StudentSummary {
                student_id: student.id,
                name: student.name,
                photo: student.photo,
                progress: student.progress,
                warning_status: student.warning_status,
            })
        })
        .collect())
}

/// Per-status assignment counts and completion percentage for one student.
///
/// Completion is the share of approved assignments, rounded; zero when the
/// student has no assignments at all.
pub async fn student_progress(db: &DatabaseConnection, student_id: i32) -> ServiceResult<TaskStats> {
    students::Entity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Student not found".to_string()))?;

    let assignments = task_assignments::Entity::find()
        .filter(task_assignments::Column::StudentId.eq(student_id))
        .all(db)
        .await?;

    let mut stats = TaskStats {
        total_tasks: assignments.len() as i64,
        pending: 0,
        submitted: 0,
        approved: 0,
        rejected: 0,
        completion_percentage: 0,
    };

    for assignment in &assignments {
        match TaskStatus::from_str(&assignment.status) {
            Some(TaskStatus::Pending) | None => stats.pending += 1,
            Some(TaskStatus::Submitted) => stats.submitted += 1,
            Some(TaskStatus::Approved) => stats.approved += 1,
            Some(TaskStatus::Rejected) => stats.rejected += 1,
        }
    }

    if stats.total_tasks > 0 {
        stats.completion_percentage =
            (stats.approved * 100 + stats.total_tasks / 2) / stats.total_tasks;
    }

    Ok(stats)
}

/// Student profile plus task statistics.
pub async fn student_dashboard(
    db: &DatabaseConnection,
    student_id: i32,
) -> ServiceResult<StudentDashboard> {
    let student = students::Entity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Student not found".to_string()))?;

    let task_stats = student_progress(db, student_id).await?;

    Ok(StudentDashboard {
        student_id: student.id,
        name: student.name,
        photo: student.photo,
        progress: student.progress,
        warning_count: student.warning_count,
        warning_status: student.warning_status,
        task_stats,
    })
}
