//! Message domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::message::{AttachmentDto, MessageDto};

/// A delivered message between a matched student and mentor.
///
/// Immutable once created; the delivery log has no edit or delete path.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Database id of the message.
    pub id: i32,
    /// Id of the sending user.
    pub sender_id: i32,
    /// Id of the receiving user.
    pub receiver_id: i32,
    /// Text content, if any.
    pub content: Option<String>,
    /// Stored attachment reference, if any.
    pub file_name: Option<String>,
    /// MIME type of the attachment, if any.
    pub file_mime: Option<String>,
    /// Server-assigned delivery timestamp.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Converts an entity model to a message domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Message` - The converted message domain model
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            sender_id: entity.sender_id,
            receiver_id: entity.receiver_id,
            content: entity.content,
            file_name: entity.file_name,
            file_mime: entity.file_mime,
            timestamp: entity.timestamp,
        }
    }

    /// Converts the message domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `MessageDto` - The converted message DTO
    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            sender_id: self.sender_id,
            receiver_id: self.receiver_id,
            content: self.content,
            file_name: self.file_name,
            file_mime: self.file_mime,
            timestamp: self.timestamp,
        }
    }
}

/// Attachment metadata as reported by the file validation collaborator.
///
/// The reported size and MIME type are authoritative for the allow-list
/// checks; the binary itself is stored elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    /// Stored file reference.
    pub name: String,
    /// Size of the blob in bytes.
    pub size_bytes: u64,
    /// True MIME type of the blob.
    pub mime_type: String,
}

impl Attachment {
    /// Converts an attachment DTO into the domain representation.
    pub fn from_dto(dto: AttachmentDto) -> Self {
        Self {
            name: dto.name,
            size_bytes: dto.size_bytes,
            mime_type: dto.mime_type,
        }
    }
}

/// Parameters for sending a message through the authorization gate.
#[derive(Debug, Clone)]
pub struct SendMessageParam {
    /// Id of the authenticated sending user.
    pub sender_id: i32,
    /// Id of the intended receiver.
    pub receiver_id: i32,
    /// Text content, if any.
    pub content: Option<String>,
    /// Validated attachment metadata, if any.
    pub attachment: Option<Attachment>,
}
