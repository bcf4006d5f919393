use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::ProfileSummaryDto;

/// Lifecycle status of a mentorship request as exposed over the API.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatusDto {
    Pending,
    Accepted,
    Declined,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct MentorshipRequestDto {
    pub id: i32,
    pub student_id: i32,
    pub mentor_id: i32,
    pub status: RequestStatusDto,
    pub message: String,
    pub rejection_reason: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request listing entry enriched with the counterpart's profile summary:
/// the mentor's summary for student listings, the student's for mentor
/// listings. The summary is absent when the counterpart has no profile row.
#[derive(Serialize, Deserialize, Clone)]
pub struct EnrichedRequestDto {
    #[serde(flatten)]
    pub request: MentorshipRequestDto,
    pub counterpart: Option<ProfileSummaryDto>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CreateRequestDto {
    pub mentor_id: i32,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct DeclineRequestDto {
    #[serde(default)]
    pub rejection_reason: String,
}
