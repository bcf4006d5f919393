//! Mentorship request data repository for database operations.
//!
//! This module provides the `MentorshipRequestRepository` for managing mentorship
//! request records: creation, status transitions, listings and the active-request
//! queries backing the service-layer invariants. The accept transition runs its
//! cascade inside a single transaction so a partial failure never leaves a student
//! with a half-declined set of competing requests.

use chrono::Utc;
use entity::mentorship_request::RequestStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::request::{CreateRequestParam, MentorshipRequest};

/// Repository providing database operations for mentorship requests.
pub struct MentorshipRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MentorshipRequestRepository<'a> {
    /// Creates a new MentorshipRequestRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MentorshipRequestRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new pending mentorship request.
    ///
    /// Precondition checks (roles, duplicate active request) belong to the
    /// service layer; the partial unique index on active requests backstops
    /// the duplicate check at the store.
    ///
    /// # Arguments
    /// - `param` - Create parameters including student, mentor and message
    ///
    /// # Returns
    /// - `Ok(MentorshipRequest)` - The created pending request
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateRequestParam) -> Result<MentorshipRequest, DbErr> {
        let now = Utc::now();
        let entity = entity::mentorship_request::ActiveModel {
            student_id: ActiveValue::Set(param.student_id),
            mentor_id: ActiveValue::Set(param.mentor_id),
            status: ActiveValue::Set(RequestStatus::Pending),
            message: ActiveValue::Set(param.message),
            rejection_reason: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MentorshipRequest::from_entity(entity))
    }

    /// Finds a mentorship request by its id.
    ///
    /// # Arguments
    /// - `request_id` - Database id of the request
    ///
    /// # Returns
    /// - `Ok(Some(MentorshipRequest))` - Request found
    /// - `Ok(None)` - No request with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, request_id: i32) -> Result<Option<MentorshipRequest>, DbErr> {
        let entity = entity::prelude::MentorshipRequest::find_by_id(request_id)
            .one(self.db)
            .await?;

        Ok(entity.map(MentorshipRequest::from_entity))
    }

    /// Checks whether a student has any active (pending or accepted) request.
    ///
    /// # Arguments
    /// - `student_id` - Id of the student user
    ///
    /// # Returns
    /// - `Ok(true)` - The student has at least one pending or accepted request
    /// - `Ok(false)` - The student has no active request
    /// - `Err(DbErr)` - Database error during count query
    pub async fn has_active_request(&self, student_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::MentorshipRequest::find()
            .filter(entity::mentorship_request::Column::StudentId.eq(student_id))
            .filter(
                entity::mentorship_request::Column::Status
                    .is_in([RequestStatus::Pending, RequestStatus::Accepted]),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Accepts a request and declines the student's other pending requests.
    ///
    /// Runs in a single transaction: every other pending request of the same
    /// student is transitioned to declined with a blank rejection reason, then
    /// the target request is set to accepted. On any failure the whole cascade
    /// rolls back and the request stays pending.
    ///
    /// # Arguments
    /// - `request_id` - Id of the request to accept
    /// - `student_id` - Id of the student whose competing requests are declined
    ///
    /// # Returns
    /// - `Ok(MentorshipRequest)` - The accepted request
    /// - `Err(DbErr)` - Database error; no rows were changed
    pub async fn accept_with_cascade(
        &self,
        request_id: i32,
        student_id: i32,
    ) -> Result<MentorshipRequest, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        // Decline competitors first so the store-level uniqueness of active
        // requests is never violated mid-transaction.
        entity::prelude::MentorshipRequest::update_many()
            .filter(entity::mentorship_request::Column::StudentId.eq(student_id))
            .filter(entity::mentorship_request::Column::Status.eq(RequestStatus::Pending))
            .filter(entity::mentorship_request::Column::Id.ne(request_id))
            .col_expr(
                entity::mentorship_request::Column::Status,
                Expr::value(RequestStatus::Declined),
            )
            .col_expr(entity::mentorship_request::Column::UpdatedAt, Expr::value(now))
            .exec(&txn)
            .await?;

        let accepted = entity::mentorship_request::ActiveModel {
            id: ActiveValue::Unchanged(request_id),
            status: ActiveValue::Set(RequestStatus::Accepted),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        txn.commit().await?;

        Ok(MentorshipRequest::from_entity(accepted))
    }

    /// Declines a request and stores the mentor's rejection reason.
    ///
    /// # Arguments
    /// - `request_id` - Id of the request to decline
    /// - `rejection_reason` - Mentor's reason for declining, possibly empty
    ///
    /// # Returns
    /// - `Ok(MentorshipRequest)` - The declined request
    /// - `Err(DbErr)` - Database error during update
    pub async fn decline(
        &self,
        request_id: i32,
        rejection_reason: String,
    ) -> Result<MentorshipRequest, DbErr> {
        let entity = entity::mentorship_request::ActiveModel {
            id: ActiveValue::Unchanged(request_id),
            status: ActiveValue::Set(RequestStatus::Declined),
            rejection_reason: ActiveValue::Set(rejection_reason),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(MentorshipRequest::from_entity(entity))
    }

    /// Lists all requests sent by a student, newest first.
    ///
    /// # Arguments
    /// - `student_id` - Id of the student user
    ///
    /// # Returns
    /// - `Ok(Vec<MentorshipRequest>)` - The student's requests across all statuses
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_by_student(&self, student_id: i32) -> Result<Vec<MentorshipRequest>, DbErr> {
        let entities = entity::prelude::MentorshipRequest::find()
            .filter(entity::mentorship_request::Column::StudentId.eq(student_id))
            .order_by_desc(entity::mentorship_request::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(MentorshipRequest::from_entity)
            .collect())
    }

    /// Lists all requests targeting a mentor, newest first.
    ///
    /// # Arguments
    /// - `mentor_id` - Id of the mentor user
    ///
    /// # Returns
    /// - `Ok(Vec<MentorshipRequest>)` - The mentor's incoming requests across all statuses
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_by_mentor(&self, mentor_id: i32) -> Result<Vec<MentorshipRequest>, DbErr> {
        let entities = entity::prelude::MentorshipRequest::find()
            .filter(entity::mentorship_request::Column::MentorId.eq(mentor_id))
            .order_by_desc(entity::mentorship_request::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(MentorshipRequest::from_entity)
            .collect())
    }

    /// Checks whether an accepted request links the given student and mentor.
    ///
    /// # Arguments
    /// - `student_id` - Id of the student user
    /// - `mentor_id` - Id of the mentor user
    ///
    /// # Returns
    /// - `Ok(true)` - An accepted request links the pair
    /// - `Ok(false)` - No accepted request between the pair
    /// - `Err(DbErr)` - Database error during count query
    pub async fn accepted_link_exists(
        &self,
        student_id: i32,
        mentor_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::MentorshipRequest::find()
            .filter(entity::mentorship_request::Column::StudentId.eq(student_id))
            .filter(entity::mentorship_request::Column::MentorId.eq(mentor_id))
            .filter(entity::mentorship_request::Column::Status.eq(RequestStatus::Accepted))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts how many accepted mentees a mentor currently has.
    ///
    /// # Arguments
    /// - `mentor_id` - Id of the mentor user
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of accepted requests targeting the mentor
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_accepted_by_mentor(&self, mentor_id: i32) -> Result<u64, DbErr> {
        entity::prelude::MentorshipRequest::find()
            .filter(entity::mentorship_request::Column::MentorId.eq(mentor_id))
            .filter(entity::mentorship_request::Column::Status.eq(RequestStatus::Accepted))
            .count(self.db)
            .await
    }
}
