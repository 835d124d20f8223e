//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the public listing endpoints, the admin console endpoints,
//!   and the health probes
//! - **Schemas**: the posting model, request DTOs, and the error envelope
//! - **Security**: the session cookie issued by the admin login
//!
//! The generated specification backs Swagger UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{ErrorCode, JobPosting};
use crate::inbound::http::admin::{
    AdminJobsResponse, LoginRequest, NewJobRequest, StatsResponse,
};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::jobs::ListingResponse;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/admin/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Job board backend API",
        description = "HTTP interface for browsing postings, the admin console, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::jobs::list_jobs,
        crate::inbound::http::jobs::get_job,
        crate::inbound::http::admin::login,
        crate::inbound::http::admin::logout,
        crate::inbound::http::admin::list_admin_jobs,
        crate::inbound::http::admin::create_job,
        crate::inbound::http::admin::delete_job,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        JobPosting,
        ListingResponse,
        LoginRequest,
        NewJobRequest,
        AdminJobsResponse,
        StatsResponse,
        ErrorBody,
        ErrorCode
    )),
    tags(
        (name = "jobs", description = "Public posting listing"),
        (name = "admin", description = "Session-gated posting management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_registers_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/v1/jobs",
            "/api/v1/jobs/{id}",
            "/api/v1/admin/login",
            "/api/v1/admin/logout",
            "/api/v1/admin/jobs",
            "/api/v1/admin/jobs/{id}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn document_registers_the_error_envelope() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("ErrorBody"));
        assert!(schemas.contains_key("JobPosting"));
    }
}
