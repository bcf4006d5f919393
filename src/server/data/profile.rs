//! Profile data repository for database operations.
//!
//! This module provides the `ProfileRepository` for reading role-specific profile
//! summaries. Profile CRUD itself lives with an external collaborator; this service
//! only reads summaries to enrich request listings with counterpart details.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::user::ProfileSummary;

/// Repository providing read access to student and mentor profiles.
pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    /// Creates a new ProfileRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ProfileRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets student profile summaries for the given user ids.
    ///
    /// Users without a profile row are simply absent from the result; callers
    /// treat a missing summary as "no profile yet".
    ///
    /// # Arguments
    /// - `user_ids` - Ids of the users whose student profiles to fetch
    ///
    /// # Returns
    /// - `Ok(Vec<ProfileSummary>)` - Summaries for users that have a student profile
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_student_summaries(
        &self,
        user_ids: &[i32],
    ) -> Result<Vec<ProfileSummary>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::StudentProfile::find()
            .filter(entity::student_profile::Column::UserId.is_in(user_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ProfileSummary::from_student_entity)
            .collect())
    }

    /// Gets mentor profile summaries for the given user ids.
    ///
    /// # Arguments
    /// - `user_ids` - Ids of the users whose mentor profiles to fetch
    ///
    /// # Returns
    /// - `Ok(Vec<ProfileSummary>)` - Summaries for users that have a mentor profile
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_mentor_summaries(
        &self,
        user_ids: &[i32],
    ) -> Result<Vec<ProfileSummary>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::MentorProfile::find()
            .filter(entity::mentor_profile::Column::UserId.is_in(user_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ProfileSummary::from_mentor_entity)
            .collect())
    }
}
