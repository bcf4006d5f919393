//! SeaORM entity models for the mentorboard database schema.
//!
//! Each module maps one database table. Entities are kept free of business
//! logic; repositories in the server crate convert them into domain models.

pub mod mentor_profile;
pub mod mentorship_request;
pub mod message;
pub mod prelude;
pub mod student_profile;
pub mod user;
