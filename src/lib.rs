//! Client for the PageSpeed Insights (Lighthouse) web API.
//!
//! One constructor, one operation: [`AuditClient::audit`] runs a remote
//! Lighthouse audit of a URL and returns the normalized report together with
//! any Chrome UX Report field data the API produced alongside it.

pub mod categories;
mod client;
pub mod config;
mod error;
mod types;

// Re-export main types
pub use client::AuditClient;
pub use config::Config;
pub use error::AuditError;
pub use types::{Audit, Crux};
