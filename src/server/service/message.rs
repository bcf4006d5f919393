//! Messaging authorization gate and delivery log service.
//!
//! Messaging is only defined between a student and a mentor linked by an
//! accepted mentorship request. The gate resolves the (student, mentor) pair
//! from two arbitrary users by role lookup, then consults the request store.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{message::MessageRepository, request::MentorshipRequestRepository, user::UserRepository},
    error::{message::MessageError, AppError},
    model::{
        message::{Attachment, Message, SendMessageParam},
        user::User,
    },
    util::attachment::validate_attachment,
};

/// Accepted mentee count above which a mentor may no longer send messages.
///
/// The guard fires on strictly-greater-than, so a sixth accepted mentee can
/// exist and receive nothing while the first five keep working. Acceptance
/// itself carries no capacity check; the boundary lives on the send path only.
pub const MAX_ACCEPTED_MENTEES: u64 = 5;

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether two users may exchange messages.
    ///
    /// Symmetric in argument order. True iff the two users resolve to exactly
    /// one student and one mentor and an accepted request links the pair.
    ///
    /// # Arguments
    /// - `a` - One user
    /// - `b` - The other user
    ///
    /// # Returns
    /// - `Ok(true)` - An accepted mentorship links the pair
    /// - `Ok(false)` - Same-role pair or no accepted mentorship
    /// - `Err(AppError)` - Database error during query
    pub async fn can_message(&self, a: &User, b: &User) -> Result<bool, AppError> {
        let request_repo = MentorshipRequestRepository::new(self.db);

        let Some((student_id, mentor_id)) = resolve_pair(a, b) else {
            return Ok(false);
        };

        Ok(request_repo.accepted_link_exists(student_id, mentor_id).await?)
    }

    /// Sends a message through the authorization gate.
    ///
    /// Guard order: receiver exists, roles resolve to a (student, mentor)
    /// pair, an accepted request links the pair, mentor senders are within
    /// capacity, and the payload carries content or a valid attachment.
    ///
    /// # Arguments
    /// - `sender` - The authenticated sending user
    /// - `receiver_id` - Id of the intended receiver
    /// - `content` - Text content, if any
    /// - `attachment` - Attachment metadata, if any
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message with its assigned timestamp
    /// - `Err(AppError::NotFound)` - Receiver does not exist
    /// - `Err(AppError::MessageErr(InvalidRolePair))` - Pair is not one student and one mentor
    /// - `Err(AppError::MessageErr(Forbidden))` - No accepted mentorship links the pair
    /// - `Err(AppError::MessageErr(CapacityExceeded))` - Mentor sender is over the mentee limit
    /// - `Err(AppError::MessageErr(Validation))` - Payload is empty or the attachment is invalid
    pub async fn send_message(
        &self,
        sender: &User,
        receiver_id: i32,
        content: Option<String>,
        attachment: Option<Attachment>,
    ) -> Result<Message, AppError> {
        let user_repo = UserRepository::new(self.db);
        let request_repo = MentorshipRequestRepository::new(self.db);
        let message_repo = MessageRepository::new(self.db);

        let Some(receiver) = user_repo.find_by_id(receiver_id).await? else {
            return Err(AppError::NotFound("Receiver not found".to_string()));
        };

        let Some((student_id, mentor_id)) = resolve_pair(sender, &receiver) else {
            return Err(MessageError::InvalidRolePair.into());
        };

        if !request_repo.accepted_link_exists(student_id, mentor_id).await? {
            return Err(MessageError::Forbidden(
                "You can only message users with an accepted mentorship".to_string(),
            )
            .into());
        }

        if sender.is_mentor() {
            let accepted = request_repo.count_accepted_by_mentor(sender.id).await?;
            if accepted > MAX_ACCEPTED_MENTEES {
                return Err(MessageError::CapacityExceeded.into());
            }
        }

        let content = content.filter(|text| !text.is_empty());

        if content.is_none() && attachment.is_none() {
            return Err(
                MessageError::Validation("Message must have content or a file".to_string()).into(),
            );
        }

        if let Some(ref attachment) = attachment {
            validate_attachment(attachment)?;
        }

        let message = message_repo
            .create(SendMessageParam {
                sender_id: sender.id,
                receiver_id,
                content,
                attachment,
            })
            .await?;

        tracing::debug!(
            message_id = message.id,
            sender_id = sender.id,
            receiver_id,
            "Message delivered"
        );

        Ok(message)
    }

    /// Gets the full message history between the requester and another user.
    ///
    /// # Arguments
    /// - `requester` - The authenticated acting user
    /// - `other_id` - Id of the conversation counterpart
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - All pair messages in ascending timestamp order
    /// - `Err(AppError::NotFound)` - Counterpart does not exist
    /// - `Err(AppError::MessageErr(Forbidden))` - No accepted mentorship links the pair
    pub async fn fetch_history(
        &self,
        requester: &User,
        other_id: i32,
    ) -> Result<Vec<Message>, AppError> {
        let message_repo = MessageRepository::new(self.db);

        self.authorize_pair(requester, other_id).await?;

        Ok(message_repo.find_between(requester.id, other_id, None).await?)
    }

    /// Checks that the requester may read the conversation with another user.
    ///
    /// Same authorization as `fetch_history`; used by the live update stream
    /// before its poll loop starts.
    ///
    /// # Arguments
    /// - `requester` - The authenticated acting user
    /// - `other_id` - Id of the conversation counterpart
    ///
    /// # Returns
    /// - `Ok(())` - An accepted mentorship links the pair in either direction
    /// - `Err(AppError::NotFound)` - Counterpart does not exist
    /// - `Err(AppError::MessageErr(Forbidden))` - No accepted mentorship links the pair
    pub async fn authorize_pair(&self, requester: &User, other_id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let request_repo = MentorshipRequestRepository::new(self.db);

        if user_repo.find_by_id(other_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let linked = request_repo.accepted_link_exists(requester.id, other_id).await?
            || request_repo.accepted_link_exists(other_id, requester.id).await?;

        if !linked {
            return Err(MessageError::Forbidden(
                "You can only view messages with an accepted mentorship".to_string(),
            )
            .into());
        }

        Ok(())
    }

    /// Gets pair messages newer than a checkpoint, oldest first.
    ///
    /// Authorization happens once before the live update loop starts, so this
    /// method reads the log directly.
    ///
    /// # Arguments
    /// - `user_a` - One side of the pair
    /// - `user_b` - The other side of the pair
    /// - `since` - Exclusive lower bound on the timestamp
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - Messages after the checkpoint in ascending order
    /// - `Err(AppError)` - Database error during query
    pub async fn fetch_new_messages(
        &self,
        user_a: i32,
        user_b: i32,
        since: DateTime<Utc>,
    ) -> Result<Vec<Message>, AppError> {
        let message_repo = MessageRepository::new(self.db);

        Ok(message_repo.find_between(user_a, user_b, Some(since)).await?)
    }
}

/// Resolves two users into a (student id, mentor id) pair by role lookup.
///
/// Returns `None` when the users do not form exactly one student and one
/// mentor.
fn resolve_pair(a: &User, b: &User) -> Option<(i32, i32)> {
    if a.is_student() && b.is_mentor() {
        Some((a.id, b.id))
    } else if a.is_mentor() && b.is_student() {
        Some((b.id, a.id))
    } else {
        None
    }
}
