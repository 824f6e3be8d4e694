//! Authorization rules over the mentor-student link table
//!
//! Mentors act on a student only through an active link; students act only
//! on themselves. Checks query the store on every call so they always see
//! the current link state.

use crate::error::{ServiceError, ServiceResult};
use crate::middleware::{Requester, Role};
use crate::orm::mentor_students;
use sea_orm::{entity::*, query::*, DatabaseConnection};

/// True iff an active mentor-student link exists for the pair.
pub async fn active_link_exists(
    db: &DatabaseConnection,
    mentor_id: i32,
    student_id: i32,
) -> ServiceResult<bool> {
    let link = mentor_students::Entity::find()
        .filter(mentor_students::Column::MentorId.eq(mentor_id))
        .filter(mentor_students::Column::StudentId.eq(student_id))
        .filter(mentor_students::Column::IsActive.eq(true))
        .one(db)
        .await?;

    Ok(link.is_some())
}

/// Require an active link between a mentor and a student.
pub async fn ensure_active_link(
    db: &DatabaseConnection,
    mentor_id: i32,
    student_id: i32,
) -> ServiceResult<()> {
    if active_link_exists(db, mentor_id, student_id).await? {
        Ok(())
    } else {
        Err(ServiceError::Authorization(
            "This student is not currently assigned to you as a mentor".to_string(),
        ))
    }
}

/// Decide whether the requester may act on the target student's records.
pub async fn ensure_can_act_on_student(
    db: &DatabaseConnection,
    requester: &Requester,
    student_id: i32,
) -> ServiceResult<()> {
    match requester.role {
        Role::Mentor => {
            if active_link_exists(db, requester.id, student_id).await? {
                Ok(())
            } else {
                Err(ServiceError::Authorization(
                    "Access denied. You can only view records for students assigned to you."
                        .to_string(),
                ))
            }
        }
        Role::Student => {
            if requester.id == student_id {
                Ok(())
            } else {
                Err(ServiceError::Authorization(
                    "Access denied. You can only view your own records.".to_string(),
                ))
            }
        }
    }
}
