//! User domain models.
//!
//! Provides domain models for platform users and their role-specific profile
//! summaries. The role attachment is carried as the entity-level enum; DTO
//! conversion maps it to the API representation.

use chrono::{DateTime, Utc};
use entity::user::UserRole;

use crate::model::user::{ProfileSummaryDto, RoleDto, UserDto};

/// Platform user with their role attachment.
///
/// The role is mutually exclusive and immutable after registration; all
/// role-dependent authorization decisions read this field rather than
/// checking which profile row exists.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Database id of the user.
    pub id: i32,
    /// Unique login name of the user.
    pub username: String,
    /// Role attachment (student or mentor).
    pub role: UserRole,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            role: match self.role {
                UserRole::Student => RoleDto::Student,
                UserRole::Mentor => RoleDto::Mentor,
            },
            created_at: self.created_at,
        }
    }

    /// Whether this user holds the student role.
    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }

    /// Whether this user holds the mentor role.
    pub fn is_mentor(&self) -> bool {
        self.role == UserRole::Mentor
    }
}

/// Role-specific profile summary (name, bio, tags) used to enrich request
/// listings with the counterpart's details.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    /// Id of the user the profile belongs to.
    pub user_id: i32,
    /// Display name from the profile.
    pub name: String,
    /// Free-text bio from the profile.
    pub bio: String,
    /// Tech stack (students) or expertise tags (mentors).
    pub tags: Vec<String>,
}

impl ProfileSummary {
    /// Builds a summary from a student profile entity.
    pub fn from_student_entity(entity: entity::student_profile::Model) -> Self {
        Self {
            user_id: entity.user_id,
            name: entity.name,
            bio: entity.bio,
            tags: json_string_array(&entity.tech_stack),
        }
    }

    /// Builds a summary from a mentor profile entity.
    pub fn from_mentor_entity(entity: entity::mentor_profile::Model) -> Self {
        Self {
            user_id: entity.user_id,
            name: entity.name,
            bio: entity.bio,
            tags: json_string_array(&entity.expertise_tags),
        }
    }

    /// Converts the summary to a DTO for API responses.
    pub fn into_dto(self) -> ProfileSummaryDto {
        ProfileSummaryDto {
            user_id: self.user_id,
            name: self.name,
            bio: self.bio,
            tags: self.tags,
        }
    }
}

/// Extracts the string elements of a JSON array column, ignoring anything
/// that is not a string.
fn json_string_array(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
