//! Mentorship request domain models and parameters.
//!
//! The request lifecycle is pending → accepted | declined, with both terminal
//! states stable. Parameter types carry the acting user's id so the service
//! layer can enforce who may perform each transition.

use chrono::{DateTime, Utc};
use entity::mentorship_request::RequestStatus;

use crate::{
    model::request::{EnrichedRequestDto, MentorshipRequestDto, RequestStatusDto},
    server::model::user::ProfileSummary,
};

/// A mentorship request from a student to a mentor.
#[derive(Debug, Clone, PartialEq)]
pub struct MentorshipRequest {
    /// Database id of the request.
    pub id: i32,
    /// Id of the requesting student user.
    pub student_id: i32,
    /// Id of the target mentor user.
    pub mentor_id: i32,
    /// Current lifecycle status.
    pub status: RequestStatus,
    /// Student's reason for requesting mentorship.
    pub message: String,
    /// Mentor's reason for declining. Blank for pending, accepted and
    /// cascade-declined requests.
    pub rejection_reason: String,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
    /// When the request last changed state.
    pub updated_at: DateTime<Utc>,
}

impl MentorshipRequest {
    /// Converts an entity model to a request domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `MentorshipRequest` - The converted request domain model
    pub fn from_entity(entity: entity::mentorship_request::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            mentor_id: entity.mentor_id,
            status: entity.status,
            message: entity.message,
            rejection_reason: entity.rejection_reason,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the request domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `MentorshipRequestDto` - The converted request DTO
    pub fn into_dto(self) -> MentorshipRequestDto {
        MentorshipRequestDto {
            id: self.id,
            student_id: self.student_id,
            mentor_id: self.mentor_id,
            status: match self.status {
                RequestStatus::Pending => RequestStatusDto::Pending,
                RequestStatus::Accepted => RequestStatusDto::Accepted,
                RequestStatus::Declined => RequestStatusDto::Declined,
            },
            message: self.message,
            rejection_reason: self.rejection_reason,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A request paired with the counterpart's profile summary for listings:
/// the mentor's summary when a student lists their sent requests, the
/// student's when a mentor lists their inbox.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRequest {
    /// The request itself.
    pub request: MentorshipRequest,
    /// Profile summary of the counterpart, if they have a profile row.
    pub counterpart: Option<ProfileSummary>,
}

impl EnrichedRequest {
    /// Converts the enriched request to a DTO for API responses.
    pub fn into_dto(self) -> EnrichedRequestDto {
        EnrichedRequestDto {
            request: self.request.into_dto(),
            counterpart: self.counterpart.map(ProfileSummary::into_dto),
        }
    }
}

/// Parameters for creating a mentorship request.
#[derive(Debug, Clone)]
pub struct CreateRequestParam {
    /// Id of the acting user, who must hold the student role.
    pub student_id: i32,
    /// Id of the target user, who must hold the mentor role.
    pub mentor_id: i32,
    /// Student's free-text reason for requesting mentorship.
    pub message: String,
}
