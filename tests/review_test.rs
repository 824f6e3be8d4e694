//! Review tests: SUBMITTED-only reviews, verdict validation, course
//! ownership, terminal states, and the review notification.
mod common;

use common::{database::*, fixtures::*};
use mentorhub::assignments::{self, ReviewTask, TaskStatus};
use mentorhub::error::ServiceError;
use mentorhub::orm::notifications;
use sea_orm::{entity::*, query::*};

struct Seeded {
    mentor_id: i32,
    student_id: i32,
    task_id: i32,
}

async fn seed(db: &sea_orm::DatabaseConnection, status: TaskStatus) -> Seeded {
    let mentor = create_mentor(db, "mira").await.expect("mentor");
    let student = create_student(db, "sam", "sam@example.com")
        .await
        .expect("student");
    create_link(db, mentor.id, student.id, true).await.expect("link");
    let course = create_course(db, mentor.id, "Rust 101").await.expect("course");
    let task = create_task(db, course.id, "Build a CLI").await.expect("task");
    create_assignment(db, task.id, student.id, status.as_str())
        .await
        .expect("assignment");
    Seeded {
        mentor_id: mentor.id,
        student_id: student.id,
        task_id: task.id,
    }
}

#[actix_rt::test]
async fn review_approves_submitted_work() {
    let db = setup_test_database().await.expect("db setup");
    let seeded = seed(&db, TaskStatus::Submitted).await;

    let assignment = assignments::review_task(
        &db,
        seeded.mentor_id,
        seeded.task_id,
        ReviewTask {
            student_id: seeded.student_id,
            status: "APPROVED".to_string(),
            remark: "Clean work".to_string(),
        },
    )
    .await
    .expect("review should succeed");

    assert_eq!(assignment.status, TaskStatus::Approved.as_str());
    assert_eq!(assignment.review_remark.as_deref(), Some("Clean work"));
    assert!(assignment.reviewed_at.is_some());

    let note = notifications::Entity::find()
        .filter(notifications::Column::UserId.eq(seeded.student_id))
        .filter(notifications::Column::Type.eq("TASK_REVIEWED"))
        .one(&db)
        .await
        .expect("query")
        .expect("student should be notified of the verdict");
    assert!(note.message.contains("APPROVED"));
}

#[actix_rt::test]
async fn review_rejects_submitted_work() {
    let db = setup_test_database().await.expect("db setup");
    let seeded = seed(&db, TaskStatus::Submitted).await;

    let assignment = assignments::review_task(
        &db,
        seeded.mentor_id,
        seeded.task_id,
        ReviewTask {
            student_id: seeded.student_id,
            status: "REJECTED".to_string(),
            remark: "Missing tests".to_string(),
        },
    )
    .await
    .expect("review should succeed");

    assert_eq!(assignment.status, TaskStatus::Rejected.as_str());
}

#[actix_rt::test]
async fn review_verdict_must_be_terminal() {
    let db = setup_test_database().await.expect("db setup");
    let seeded = seed(&db, TaskStatus::Submitted).await;

    for bogus in ["PENDING", "SUBMITTED", "DONE"] {
        let err = assignments::review_task(
            &db,
            seeded.mentor_id,
            seeded.task_id,
            ReviewTask {
                student_id: seeded.student_id,
                status: bogus.to_string(),
                remark: "x".to_string(),
            },
        )
        .await
        .expect_err("non-verdict statuses must be rejected");
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}

#[actix_rt::test]
async fn pending_work_cannot_be_reviewed() {
    let db = setup_test_database().await.expect("db setup");
    let seeded = seed(&db, TaskStatus::Pending).await;

    // APPROVED is never set straight from PENDING.
    let err = assignments::review_task(
        &db,
        seeded.mentor_id,
        seeded.task_id,
        ReviewTask {
            student_id: seeded.student_id,
            status: "APPROVED".to_string(),
            remark: "x".to_string(),
        },
    )
    .await
    .expect_err("pending work has nothing to review");
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[actix_rt::test]
async fn reviewed_work_cannot_be_reviewed_again() {
    let db = setup_test_database().await.expect("db setup");
    let seeded = seed(&db, TaskStatus::Rejected).await;

    let err = assignments::review_task(
        &db,
        seeded.mentor_id,
        seeded.task_id,
        ReviewTask {
            student_id: seeded.student_id,
            status: "APPROVED".to_string(),
            remark: "x".to_string(),
        },
    )
    .await
    .expect_err("terminal states stay terminal");
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[actix_rt::test]
async fn only_the_course_owner_may_review() {
    let db = setup_test_database().await.expect("db setup");
    let seeded = seed(&db, TaskStatus::Submitted).await;
    let outsider = create_mentor(&db, "nate").await.expect("mentor");

    let err = assignments::review_task(
        &db,
        outsider.id,
        seeded.task_id,
        ReviewTask {
            student_id: seeded.student_id,
            status: "APPROVED".to_string(),
            remark: "x".to_string(),
        },
    )
    .await
    .expect_err("reviewing someone else's course must fail");
    assert!(matches!(err, ServiceError::Authorization(_)));
}
