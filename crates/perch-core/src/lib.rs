//! Core services for the perch terminal client.
//!
//! Everything the UI needs that is not rendering lives here: configuration,
//! credential validation, the identity/auth client, session persistence,
//! the post feed client, and the logging bootstrap.

pub mod auth;
pub mod config;
pub mod logging;
pub mod posts;
pub mod validate;
