//! SeaORM entity for the mentors table
//!
//! Mentors are provisioned out-of-band and mutated rarely.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "mentors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub photo: Option<String>,
    pub contact: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::courses::Entity")]
    Courses,
    #[sea_orm(has_many = "super::mentor_students::Entity")]
    MentorStudents,
    #[sea_orm(has_many = "super::warnings::Entity")]
    Warnings,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::mentor_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MentorStudents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
