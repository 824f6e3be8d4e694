//! Test database setup and management
//!
//! Each test gets its own in-memory SQLite store with the full schema, so
//! suites are isolated and need no external database.
#![allow(dead_code)]

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement,
};

const SCHEMA: &[&str] = &[
    "CREATE TABLE mentors (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        photo TEXT,
        contact TEXT,
        bio TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        photo TEXT,
        social_links TEXT,
        progress INTEGER NOT NULL DEFAULT 0,
        warning_count INTEGER NOT NULL DEFAULT 0,
        warning_status TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
    "CREATE TABLE mentor_students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        mentor_id INTEGER NOT NULL REFERENCES mentors (id) ON DELETE CASCADE,
        student_id INTEGER NOT NULL REFERENCES students (id) ON DELETE CASCADE,
        is_active INTEGER NOT NULL DEFAULT 1,
        assigned_at TEXT NOT NULL
    )",
    "CREATE TABLE courses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        mentor_id INTEGER NOT NULL REFERENCES mentors (id) ON DELETE CASCADE,
        title TEXT NOT NULL,
        description TEXT,
        url TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        course_id INTEGER NOT NULL REFERENCES courses (id) ON DELETE CASCADE,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        doc_link TEXT,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE task_assignments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        task_id INTEGER NOT NULL REFERENCES tasks (id) ON DELETE CASCADE,
        student_id INTEGER NOT NULL REFERENCES students (id) ON DELETE CASCADE,
        status TEXT NOT NULL,
        github_link TEXT,
        hosted_link TEXT,
        review_remark TEXT,
        submitted_at TEXT,
        reviewed_at TEXT,
        created_at TEXT NOT NULL,
        UNIQUE (task_id, student_id)
    )",
    "CREATE TABLE warnings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        student_id INTEGER NOT NULL REFERENCES students (id) ON DELETE CASCADE,
        mentor_id INTEGER NOT NULL REFERENCES mentors (id) ON DELETE CASCADE,
        title TEXT NOT NULL,
        remark TEXT NOT NULL,
        level TEXT NOT NULL,
        status TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE TABLE notifications (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        type TEXT NOT NULL,
        message TEXT NOT NULL,
        related_id INTEGER,
        is_read INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        read_at TEXT
    )",
];

/// Connect to a fresh in-memory database and create the schema.
///
/// max_connections must stay at 1: every pooled connection to
/// `sqlite::memory:` would otherwise get its own empty database.
pub async fn setup_test_database() -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await?;

    for ddl in SCHEMA {
        db.execute(Statement::from_string(DbBackend::Sqlite, ddl.to_string()))
            .await?;
    }

    Ok(db)
}
