//! Message factory for creating test message entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test messages with customizable fields.
///
/// Provides a builder pattern for creating message entities with default
/// values that can be overridden as needed. The timestamp can be set
/// explicitly for tests asserting on delivery ordering.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    sender_id: i32,
    receiver_id: i32,
    content: Option<String>,
    file_name: Option<String>,
    file_mime: Option<String>,
    timestamp: DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - content: `Some("Test message")`
    /// - file_name / file_mime: `None`
    /// - timestamp: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `sender_id` - ID of the sending user
    /// - `receiver_id` - ID of the receiving user
    ///
    /// # Returns
    /// - `MessageFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, sender_id: i32, receiver_id: i32) -> Self {
        Self {
            db,
            sender_id,
            receiver_id,
            content: Some("Test message".to_string()),
            file_name: None,
            file_mime: None,
            timestamp: Utc::now(),
        }
    }

    /// Sets the text content of the message.
    ///
    /// # Arguments
    /// - `content` - Optional message text
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn content(mut self, content: Option<String>) -> Self {
        self.content = content;
        self
    }

    /// Sets the attachment reference of the message.
    ///
    /// # Arguments
    /// - `file_name` - Stored file reference
    /// - `file_mime` - MIME type of the attachment
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn file(mut self, file_name: impl Into<String>, file_mime: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self.file_mime = Some(file_mime.into());
        self
    }

    /// Sets the message timestamp.
    ///
    /// # Arguments
    /// - `timestamp` - Delivery timestamp to store
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds and inserts the message entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::message::Model)` - Created message entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            sender_id: ActiveValue::Set(self.sender_id),
            receiver_id: ActiveValue::Set(self.receiver_id),
            content: ActiveValue::Set(self.content),
            file_name: ActiveValue::Set(self.file_name),
            file_mime: ActiveValue::Set(self.file_mime),
            timestamp: ActiveValue::Set(self.timestamp),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
