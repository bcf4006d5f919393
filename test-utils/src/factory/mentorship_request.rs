//! Mentorship request factory for creating test request entities.
//!
//! The factory inserts requests directly at the store level, bypassing the
//! service-layer invariants. Tests use this to construct states the public
//! API would reject, such as two simultaneously pending requests for one
//! student in the cascade regression scenario.

use chrono::Utc;
use entity::mentorship_request::RequestStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test mentorship requests with customizable fields.
///
/// Provides a builder pattern for creating request entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::mentorship_request::MentorshipRequestFactory;
/// use entity::mentorship_request::RequestStatus;
///
/// let request = MentorshipRequestFactory::new(&db, student.id, mentor.id)
///     .status(RequestStatus::Accepted)
///     .build()
///     .await?;
/// ```
pub struct MentorshipRequestFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    mentor_id: i32,
    status: RequestStatus,
    message: String,
    rejection_reason: String,
}

impl<'a> MentorshipRequestFactory<'a> {
    /// Creates a new MentorshipRequestFactory with default values.
    ///
    /// Defaults:
    /// - status: `RequestStatus::Pending`
    /// - message: `"Please mentor me"`
    /// - rejection_reason: empty
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `student_id` - ID of the requesting student user
    /// - `mentor_id` - ID of the target mentor user
    ///
    /// # Returns
    /// - `MentorshipRequestFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, student_id: i32, mentor_id: i32) -> Self {
        Self {
            db,
            student_id,
            mentor_id,
            status: RequestStatus::Pending,
            message: "Please mentor me".to_string(),
            rejection_reason: String::new(),
        }
    }

    /// Sets the lifecycle status for the request.
    ///
    /// # Arguments
    /// - `status` - Request status (pending, accepted or declined)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the student's request message.
    ///
    /// # Arguments
    /// - `message` - Free-text reason for requesting mentorship
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the mentor's rejection reason.
    ///
    /// # Arguments
    /// - `rejection_reason` - Free-text reason for declining
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn rejection_reason(mut self, rejection_reason: impl Into<String>) -> Self {
        self.rejection_reason = rejection_reason.into();
        self
    }

    /// Builds and inserts the request entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mentorship_request::Model)` - Created request entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mentorship_request::Model, DbErr> {
        let now = Utc::now();
        entity::mentorship_request::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            mentor_id: ActiveValue::Set(self.mentor_id),
            status: ActiveValue::Set(self.status),
            message: ActiveValue::Set(self.message),
            rejection_reason: ActiveValue::Set(self.rejection_reason),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
