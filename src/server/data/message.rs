//! Message data repository for database operations.
//!
//! This module provides the `MessageRepository` over the append-only delivery log.
//! Messages are immutable once stored; there are no update or delete operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::message::{Message, SendMessageParam};

/// Repository providing database operations for the message delivery log.
pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    /// Creates a new MessageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MessageRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a message to the delivery log.
    ///
    /// The timestamp is assigned server-side at insert so ordering within a
    /// pair comes from a single clock source. Authorization and payload
    /// validation belong to the service layer.
    ///
    /// # Arguments
    /// - `param` - Send parameters including sender, receiver, content and attachment
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message with its assigned timestamp
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: SendMessageParam) -> Result<Message, DbErr> {
        let (file_name, file_mime) = match param.attachment {
            Some(attachment) => (Some(attachment.name), Some(attachment.mime_type)),
            None => (None, None),
        };

        let entity = entity::message::ActiveModel {
            sender_id: ActiveValue::Set(param.sender_id),
            receiver_id: ActiveValue::Set(param.receiver_id),
            content: ActiveValue::Set(param.content),
            file_name: ActiveValue::Set(file_name),
            file_mime: ActiveValue::Set(file_mime),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    /// Gets the messages exchanged between two users, oldest first.
    ///
    /// Includes messages in both directions. When `since` is given, only
    /// messages with a strictly later timestamp are returned; the live update
    /// loop uses this to page forward from its checkpoint.
    ///
    /// # Arguments
    /// - `user_a` - One side of the pair
    /// - `user_b` - The other side of the pair
    /// - `since` - Optional exclusive lower bound on the timestamp
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - Messages in ascending timestamp order
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_between(
        &self,
        user_a: i32,
        user_b: i32,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<Message>, DbErr> {
        let pair_condition = Condition::any()
            .add(
                Condition::all()
                    .add(entity::message::Column::SenderId.eq(user_a))
                    .add(entity::message::Column::ReceiverId.eq(user_b)),
            )
            .add(
                Condition::all()
                    .add(entity::message::Column::SenderId.eq(user_b))
                    .add(entity::message::Column::ReceiverId.eq(user_a)),
            );

        let mut query = entity::prelude::Message::find().filter(pair_condition);

        if let Some(checkpoint) = since {
            query = query.filter(entity::message::Column::Timestamp.gt(checkpoint));
        }

        let entities = query
            .order_by_asc(entity::message::Column::Timestamp)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Message::from_entity).collect())
    }
}
