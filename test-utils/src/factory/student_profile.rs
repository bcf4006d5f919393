//! Student profile factory for creating test profile entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test student profiles with customizable fields.
///
/// Provides a builder pattern for creating student profile entities with
/// default values that can be overridden as needed for specific test
/// scenarios.
pub struct StudentProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    bio: String,
    year_level: i32,
    tech_stack: serde_json::Value,
}

impl<'a> StudentProfileFactory<'a> {
    /// Creates a new StudentProfileFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {id}"` where id is auto-incremented
    /// - bio: `"Test student bio"`
    /// - year_level: `1`
    /// - tech_stack: `["rust"]`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the user this profile belongs to
    ///
    /// # Returns
    /// - `StudentProfileFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Student {}", id),
            bio: "Test student bio".to_string(),
            year_level: 1,
            tech_stack: json!(["rust"]),
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

    /// Sets the tech stack tags for the profile.
    ///
    /// # Arguments
    /// - `tech_stack` - JSON array of tool names
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn tech_stack(mut self, tech_stack: serde_json::Value) -> Self {
        self.tech_stack = tech_stack;
        self
    }

    /// Builds and inserts the student profile entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student_profile::Model)` - Created profile entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student_profile::Model, DbErr> {
        let now = Utc::now();
        entity::student_profile::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            bio: ActiveValue::Set(self.bio),
            year_level: ActiveValue::Set(self.year_level),
            tech_stack: ActiveValue::Set(self.tech_stack),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
