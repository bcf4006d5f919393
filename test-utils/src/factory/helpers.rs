//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use entity::mentorship_request::RequestStatus;
use entity::user::UserRole;
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{
    mentor_profile::MentorProfileFactory, mentorship_request::MentorshipRequestFactory,
    student_profile::StudentProfileFactory, user::UserFactory,
};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a student user together with their profile.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, profile))` - Created user and student profile entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::student_profile::Model), DbErr> {
    let user = UserFactory::new(db).role(UserRole::Student).build().await?;
    let profile = StudentProfileFactory::new(db, user.id).build().await?;
    Ok((user, profile))
}

/// Creates a mentor user together with their profile.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, profile))` - Created user and mentor profile entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_mentor(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::mentor_profile::Model), DbErr> {
    let user = UserFactory::new(db).role(UserRole::Mentor).build().await?;
    let profile = MentorProfileFactory::new(db, user.id).build().await?;
    Ok((user, profile))
}

/// Creates a matched student/mentor pair linked by an accepted request.
///
/// This is the precondition for the messaging paths: both users exist with
/// their profiles and a single accepted mentorship request connects them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((student, mentor, request))` - The two user entities and the accepted request
/// - `Err(DbErr)` - Database error during creation
pub async fn create_matched_pair(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::mentorship_request::Model,
    ),
    DbErr,
> {
    let (student, _) = create_student(db).await?;
    let (mentor, _) = create_mentor(db).await?;

    let request = MentorshipRequestFactory::new(db, student.id, mentor.id)
        .status(RequestStatus::Accepted)
        .build()
        .await?;

    Ok((student, mentor, request))
}
