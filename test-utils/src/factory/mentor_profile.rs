//! Mentor profile factory for creating test profile entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test mentor profiles with customizable fields.
///
/// Provides a builder pattern for creating mentor profile entities with
/// default values that can be overridden as needed for specific test
/// scenarios.
pub struct MentorProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    bio: String,
    experience_years: i32,
    expertise_tags: serde_json::Value,
}

impl<'a> MentorProfileFactory<'a> {
    /// Creates a new MentorProfileFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Mentor {id}"` where id is auto-incremented
    /// - bio: `"Test mentor bio"`
    /// - experience_years: `5`
    /// - expertise_tags: `["backend"]`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the user this profile belongs to
    ///
    /// # Returns
    /// - `MentorProfileFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Mentor {}", id),
            bio: "Test mentor bio".to_string(),
            experience_years: 5,
            expertise_tags: json!(["backend"]),
        }
    }

    /// Sets the display name for the profile.
    ///
    /// # Arguments
    /// - `name` - Display name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the expertise tags for the profile.
    ///
    /// # Arguments
    /// - `expertise_tags` - JSON array of tag strings
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn expertise_tags(mut self, expertise_tags: serde_json::Value) -> Self {
        self.expertise_tags = expertise_tags;
        self
    }

    /// Builds and inserts the mentor profile entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mentor_profile::Model)` - Created profile entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mentor_profile::Model, DbErr> {
        let now = Utc::now();
        entity::mentor_profile::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            bio: ActiveValue::Set(self.bio),
            experience_years: ActiveValue::Set(self.experience_years),
            expertise_tags: ActiveValue::Set(self.expertise_tags),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
