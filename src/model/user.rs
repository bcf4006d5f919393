use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role attachment of a user as exposed over the API.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum RoleDto {
    Student,
    Mentor,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub role: RoleDto,
    pub created_at: DateTime<Utc>,
}

/// Role-specific profile summary used to enrich request listings.
#[derive(Serialize, Deserialize, Clone)]
pub struct ProfileSummaryDto {
    pub user_id: i32,
    pub name: String,
    pub bio: String,
    pub tags: Vec<String>,
}

/// Login payload. Credential verification is the identity provider's job;
/// this surface only establishes the session for an existing user.
#[derive(Serialize, Deserialize, Clone)]
pub struct LoginDto {
    pub username: String,
}
