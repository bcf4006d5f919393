//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for looking up user records by id and
//! username, with conversion from entity models to domain models at the
//! infrastructure boundary.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::user::User;

/// Repository providing database operations for user lookup.
///
/// This struct holds a reference to the database connection and provides methods
/// for reading user records. User creation and credential handling live with the
/// external identity provider; this service only resolves existing users.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their database id.
    ///
    /// # Arguments
    /// - `user_id` - Database id of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with full data
    /// - `Ok(None)` - No user found with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their unique username.
    ///
    /// Used by the login endpoint to resolve a username to a stored user.
    ///
    /// # Arguments
    /// - `username` - Unique login name of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with full data
    /// - `Ok(None)` - No user found with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }
}
