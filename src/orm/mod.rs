//! SeaORM entities for the relational store

pub mod courses;
pub mod mentor_students;
pub mod mentors;
pub mod notifications;
pub mod students;
pub mod task_assignments;
pub mod tasks;
pub mod warnings;
