//! Domain primitives and use-cases.
//!
//! Purpose: define the strongly typed posting model, the transport-agnostic
//! error type, the ports consumed by adapters, and the `JobBoard` service
//! that composes them. Types are immutable once constructed; invariants and
//! serialisation contracts live in each type's Rustdoc.

pub mod board;
pub mod error;
pub mod ports;
pub mod posting;

pub use self::board::{BoardPage, BoardStats, JobBoard};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::posting::{
    DraftFields, DraftValidationError, JUST_POSTED, JobDraft, JobPosting, PLACEHOLDER_LOGO,
    PostingId,
};

/// Convenient result alias for domain operations.
///
/// # Examples
/// ```
/// use backend::domain::{ApiResult, Error};
///
/// fn gate(admin: bool) -> ApiResult<()> {
///     if admin { Ok(()) } else { Err(Error::unauthorized("login required")) }
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
