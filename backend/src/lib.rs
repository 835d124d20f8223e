//! Backend library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI.
pub use doc::ApiDoc;
/// Request tracing middleware attaching a per-request trace id.
pub use middleware::Trace;
