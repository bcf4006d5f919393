//! Mentorship request lifecycle service.
//!
//! Implements the request state machine: who may request whom, the single
//! active request invariant, and the accept/decline transitions including the
//! cascade that auto-declines competing requests.

use std::collections::HashMap;

use entity::mentorship_request::RequestStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        profile::ProfileRepository, request::MentorshipRequestRepository, user::UserRepository,
    },
    error::{request::RequestError, AppError},
    model::{
        request::{CreateRequestParam, EnrichedRequest, MentorshipRequest},
        user::{ProfileSummary, User},
    },
};

pub struct MentorshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MentorshipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending mentorship request from a student to a mentor.
    ///
    /// Enforces the role pairing (student requests mentor) and the invariant
    /// that a student holds at most one active request across all mentors.
    ///
    /// # Arguments
    /// - `student` - The authenticated acting user
    /// - `mentor_id` - Id of the target user
    /// - `message` - Student's reason for requesting mentorship
    ///
    /// # Returns
    /// - `Ok(MentorshipRequest)` - The created pending request
    /// - `Err(AppError::RequestErr(RoleMismatch))` - Actor is not a student or target is not a mentor
    /// - `Err(AppError::NotFound)` - Target user does not exist
    /// - `Err(AppError::RequestErr(DuplicateActiveRequest))` - Student already has an active request
    pub async fn create_request(
        &self,
        student: &User,
        mentor_id: i32,
        message: String,
    ) -> Result<MentorshipRequest, AppError> {
        let user_repo = UserRepository::new(self.db);
        let request_repo = MentorshipRequestRepository::new(self.db);

        if !student.is_student() {
            return Err(RequestError::RoleMismatch(
                "Only students can send mentorship requests".to_string(),
            )
            .into());
        }

        let Some(mentor) = user_repo.find_by_id(mentor_id).await? else {
            return Err(AppError::NotFound("Mentor not found".to_string()));
        };

        if !mentor.is_mentor() {
            return Err(RequestError::RoleMismatch(
                "Mentorship requests can only target mentors".to_string(),
            )
            .into());
        }

        if request_repo.has_active_request(student.id).await? {
            return Err(RequestError::DuplicateActiveRequest.into());
        }

        let request = request_repo
            .create(CreateRequestParam {
                student_id: student.id,
                mentor_id,
                message,
            })
            .await?;

        tracing::info!(
            request_id = request.id,
            student_id = student.id,
            mentor_id,
            "Mentorship request created"
        );

        Ok(request)
    }

    /// Accepts a pending request and declines the student's other pendings.
    ///
    /// Only the request's target mentor may accept, and only while the request
    /// is still pending. The cascade runs in one transaction and touches only
    /// the student's pending rows.
    ///
    /// # Arguments
    /// - `mentor` - The authenticated acting user
    /// - `request_id` - Id of the request to accept
    ///
    /// # Returns
    /// - `Ok(MentorshipRequest)` - The accepted request
    /// - `Err(AppError::NotFound)` - Request does not exist
    /// - `Err(AppError::RequestErr(Forbidden))` - Actor is not the target mentor
    /// - `Err(AppError::RequestErr(InvalidStateTransition))` - Request is no longer pending
    pub async fn accept_request(
        &self,
        mentor: &User,
        request_id: i32,
    ) -> Result<MentorshipRequest, AppError> {
        let request_repo = MentorshipRequestRepository::new(self.db);

        let request = self.find_pending_for_mentor(&request_repo, mentor, request_id).await?;

        let accepted = request_repo
            .accept_with_cascade(request.id, request.student_id)
            .await?;

        tracing::info!(
            request_id = accepted.id,
            student_id = accepted.student_id,
            mentor_id = mentor.id,
            "Mentorship request accepted"
        );

        Ok(accepted)
    }

    /// Declines a pending request with an optional rejection reason.
    ///
    /// Same guards as accept: only the target mentor, only while pending.
    ///
    /// # Arguments
    /// - `mentor` - The authenticated acting user
    /// - `request_id` - Id of the request to decline
    /// - `rejection_reason` - Mentor's reason for declining, possibly empty
    ///
    /// # Returns
    /// - `Ok(MentorshipRequest)` - The declined request
    /// - `Err(AppError::NotFound)` - Request does not exist
    /// - `Err(AppError::RequestErr(Forbidden))` - Actor is not the target mentor
    /// - `Err(AppError::RequestErr(InvalidStateTransition))` - Request is no longer pending
    pub async fn decline_request(
        &self,
        mentor: &User,
        request_id: i32,
        rejection_reason: String,
    ) -> Result<MentorshipRequest, AppError> {
        let request_repo = MentorshipRequestRepository::new(self.db);

        let request = self.find_pending_for_mentor(&request_repo, mentor, request_id).await?;

        let declined = request_repo.decline(request.id, rejection_reason).await?;

        tracing::info!(
            request_id = declined.id,
            mentor_id = mentor.id,
            "Mentorship request declined"
        );

        Ok(declined)
    }

    /// Lists a student's sent requests enriched with mentor profile summaries.
    ///
    /// # Arguments
    /// - `student` - The authenticated acting user
    ///
    /// # Returns
    /// - `Ok(Vec<EnrichedRequest>)` - The student's requests, newest first
    /// - `Err(AppError)` - Database error during query
    pub async fn list_for_student(&self, student: &User) -> Result<Vec<EnrichedRequest>, AppError> {
        let request_repo = MentorshipRequestRepository::new(self.db);
        let profile_repo = ProfileRepository::new(self.db);

        let requests = request_repo.list_by_student(student.id).await?;

        let mentor_ids: Vec<i32> = requests.iter().map(|r| r.mentor_id).collect();
        let summaries = profile_repo.find_mentor_summaries(&mentor_ids).await?;

        Ok(enrich(requests, summaries, |request| request.mentor_id))
    }

    /// Lists a mentor's incoming requests enriched with student profile summaries.
    ///
    /// # Arguments
    /// - `mentor` - The authenticated acting user
    ///
    /// # Returns
    /// - `Ok(Vec<EnrichedRequest>)` - The mentor's incoming requests, newest first
    /// - `Err(AppError)` - Database error during query
    pub async fn list_for_mentor(&self, mentor: &User) -> Result<Vec<EnrichedRequest>, AppError> {
        let request_repo = MentorshipRequestRepository::new(self.db);
        let profile_repo = ProfileRepository::new(self.db);

        let requests = request_repo.list_by_mentor(mentor.id).await?;

        let student_ids: Vec<i32> = requests.iter().map(|r| r.student_id).collect();
        let summaries = profile_repo.find_student_summaries(&student_ids).await?;

        Ok(enrich(requests, summaries, |request| request.student_id))
    }

    /// Loads a request and checks the accept/decline preconditions.
    ///
    /// # Returns
    /// - `Ok(MentorshipRequest)` - Pending request targeted at the acting mentor
    /// - `Err(AppError)` - NotFound, Forbidden or InvalidStateTransition
    async fn find_pending_for_mentor(
        &self,
        request_repo: &MentorshipRequestRepository<'a>,
        mentor: &User,
        request_id: i32,
    ) -> Result<MentorshipRequest, AppError> {
        let Some(request) = request_repo.find_by_id(request_id).await? else {
            return Err(AppError::NotFound("Mentorship request not found".to_string()));
        };

        if request.mentor_id != mentor.id {
            return Err(RequestError::Forbidden(
                "Only the requested mentor can respond to this request".to_string(),
            )
            .into());
        }

        if request.status != RequestStatus::Pending {
            return Err(RequestError::InvalidStateTransition {
                status: status_label(request.status).to_string(),
            }
            .into());
        }

        Ok(request)
    }
}

/// Pairs each request with its counterpart's profile summary.
fn enrich(
    requests: Vec<MentorshipRequest>,
    summaries: Vec<ProfileSummary>,
    counterpart_id: impl Fn(&MentorshipRequest) -> i32,
) -> Vec<EnrichedRequest> {
    let by_user_id: HashMap<i32, ProfileSummary> = summaries
        .into_iter()
        .map(|summary| (summary.user_id, summary))
        .collect();

    requests
        .into_iter()
        .map(|request| {
            // A counterpart can appear on several requests (declined ones
            // allow re-requesting the same mentor), so clone rather than move.
            let counterpart = by_user_id.get(&counterpart_id(&request)).cloned();
            EnrichedRequest {
                request,
                counterpart,
            }
        })
        .collect()
}

fn status_label(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "pending",
        RequestStatus::Accepted => "accepted",
        RequestStatus::Declined => "declined",
    }
}
