//! SeaORM entity for the students table
//!
//! `warning_count` only ever increments; `warning_status` is a derived label
//! maintained by the warning service.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub photo: Option<String>,
    pub social_links: Option<String>,
    pub progress: i32,
    pub warning_count: i32,
    pub warning_status: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mentor_students::Entity")]
    MentorStudents,
    #[sea_orm(has_many = "super::task_assignments::Entity")]
    TaskAssignments,
    #[sea_orm(has_many = "super::warnings::Entity")]
    Warnings,
}

impl Related<super::mentor_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MentorStudents.def()
    }
}

impl Related<super::task_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaskAssignments.def()
    }
}

impl Related<super::warnings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warnings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
