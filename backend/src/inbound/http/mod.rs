//! HTTP inbound adapters.
//!
//! Purpose: translate HTTP requests into domain calls and domain results
//! back into JSON responses. Handlers stay thin; validation happens at the
//! DTO boundary and business rules live in [`crate::domain`].

pub mod admin;
pub mod auth;
pub mod error;
pub mod health;
pub mod jobs;
pub mod session;
pub mod state;

pub use self::error::ApiResult;
