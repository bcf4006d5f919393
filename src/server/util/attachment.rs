//! Attachment validation for the message send path.

use crate::server::{error::message::MessageError, model::message::Attachment};

/// Maximum accepted attachment size in bytes (2 MiB).
pub const MAX_ATTACHMENT_BYTES: u64 = 2 * 1024 * 1024;

/// MIME types accepted for message attachments.
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "application/pdf",
    "text/plain",
    "application/zip",
];

/// Validates attachment metadata against the size limit and MIME allow-list.
///
/// The reported size and MIME type are authoritative; the blob itself is
/// stored by an external collaborator.
///
/// # Arguments
/// - `attachment` - Attachment metadata reported by the upload collaborator
///
/// # Returns
/// - `Ok(())` - Attachment is within the size limit and has an allowed MIME type
/// - `Err(MessageError::Validation(_))` - Attachment is oversized or its MIME
///   type is not allow-listed
pub fn validate_attachment(attachment: &Attachment) -> Result<(), MessageError> {
    if attachment.size_bytes > MAX_ATTACHMENT_BYTES {
        return Err(MessageError::Validation(
            "File size must not exceed 2 MB".to_string(),
        ));
    }

    if !ALLOWED_MIME_TYPES.contains(&attachment.mime_type.as_str()) {
        return Err(MessageError::Validation(format!(
            "File type {} is not allowed",
            attachment.mime_type
        )));
    }

    Ok(())
}
