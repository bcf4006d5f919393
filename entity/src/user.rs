//! User entity with its role attachment.
//!
//! The role is an explicit tagged enum column set at registration and never
//! changed afterwards, rather than being inferred from which profile row
//! happens to exist for the user.

use sea_orm::entity::prelude::*;

/// Role a user holds on the platform. Mutually exclusive and immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum UserRole {
    #[sea_orm(string_value = "student")]
    Student,
    #[sea_orm(string_value = "mentor")]
    Mentor,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub role: UserRole,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::student_profile::Entity")]
    StudentProfile,
    #[sea_orm(has_one = "super::mentor_profile::Entity")]
    MentorProfile,
}

impl ActiveModelBehavior for ActiveModel {}
