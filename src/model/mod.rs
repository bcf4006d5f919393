//! Data transfer objects exchanged over the HTTP API.
//!
//! DTOs carry serde derives and nothing else; domain models in the server
//! layer convert into them at the controller boundary.

pub mod api;
pub mod message;
pub mod request;
pub mod user;
