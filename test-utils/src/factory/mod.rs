//! Entity factories for creating test data with sensible defaults.
//!
//! Each factory inserts a row for one entity and supports a builder pattern
//! for overriding individual fields. Helper functions in `helpers` compose
//! factories into common aggregates (a student with profile, a matched
//! student/mentor pair, and so on).

pub mod helpers;
pub mod mentor_profile;
pub mod mentorship_request;
pub mod message;
pub mod student_profile;
pub mod user;
