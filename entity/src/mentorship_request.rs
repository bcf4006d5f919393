//! Mentorship request entity and its status state machine column.
//!
//! A request starts `pending` and ends in `accepted` or `declined`; the two
//! terminal states are never left again. The active-request invariants
//! (per pair and per student) are enforced in the service layer and by a
//! partial unique index created in the migration crate.

use sea_orm::entity::prelude::*;

/// Lifecycle state of a mentorship request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RequestStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "declined")]
    Declined,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mentorship_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub mentor_id: i32,
    pub status: RequestStatus,
    /// Student's reason for requesting mentorship.
    #[sea_orm(column_type = "Text")]
    pub message: String,
    /// Mentor's reason for declining the request. Blank for auto-declines.
    #[sea_orm(column_type = "Text")]
    pub rejection_reason: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::MentorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Mentor,
}

impl ActiveModelBehavior for ActiveModel {}
