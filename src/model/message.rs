use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct MessageDto {
    pub id: i32,
    pub sender_id: i32,
    pub receiver_id: i32,
    pub content: Option<String>,
    pub file_name: Option<String>,
    pub file_mime: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Attachment reference as reported by the file validation collaborator.
/// The size and MIME type are treated as authoritative for the allow-list
/// checks; the blob itself never passes through this API.
#[derive(Serialize, Deserialize, Clone)]
pub struct AttachmentDto {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct SendMessageDto {
    pub receiver_id: i32,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub file: Option<AttachmentDto>,
}
