//! HTTP request handlers for all API endpoints.
//!
//! This module contains the controller layer of the application. Controllers are
//! responsible for extracting and validating request data, resolving the authenticated
//! user through the `AuthGuard`, delegating to the service layer, and converting domain
//! models to DTOs for the HTTP response.

pub mod auth;
pub mod message;
pub mod request;
