//! Admin console endpoints.
//!
//! ```text
//! POST /api/v1/admin/login {"username":"admin","password":"password"}
//! POST /api/v1/admin/logout
//! GET /api/v1/admin/jobs?search=
//! POST /api/v1/admin/jobs
//! DELETE /api/v1/admin/jobs/{id}
//! ```
//!
//! Every endpoint except login requires the session admin flag.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    BoardStats, DraftFields, DraftValidationError, Error, JobDraft, JobPosting, PostingId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::{LoginCredentials, LoginValidationError, authenticate};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /api/v1/admin/login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyUsername => Error::invalid_request("username must not be empty")
            .with_details(json!({ "field": "username", "code": "empty_username" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

/// Authenticate the admin and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["admin"],
    operation_id = "adminLogin",
    security([])
)]
#[post("/admin/login")]
pub async fn login(
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    authenticate(&credentials)?;
    session.persist_admin()?;
    Ok(HttpResponse::Ok().finish())
}

/// End the admin session.
#[utoipa::path(
    post,
    path = "/api/v1/admin/logout",
    responses(
        (status = 204, description = "Session cleared")
    ),
    tags = ["admin"],
    operation_id = "adminLogout",
    security([])
)]
#[post("/admin/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::NoContent().finish()
}

/// Query parameters accepted by the admin table.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AdminTableParams {
    /// Free-text term matched against title, company, and location.
    pub search: Option<String>,
}

/// Dashboard counters shown above the admin table.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Total number of postings.
    pub total: usize,
    /// Postings flagged as remote.
    pub remote: usize,
    /// Postings with the "Full-time" employment type.
    pub full_time: usize,
}

impl From<BoardStats> for StatsResponse {
    fn from(stats: BoardStats) -> Self {
        Self {
            total: stats.total,
            remote: stats.remote,
            full_time: stats.full_time,
        }
    }
}

/// Response envelope for the admin table.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminJobsResponse {
    /// Every matching posting, newest first, unpaginated.
    pub jobs: Vec<JobPosting>,
    /// Dashboard counters over the whole store.
    pub stats: StatsResponse,
}

/// Full posting table plus dashboard counters.
#[utoipa::path(
    get,
    path = "/api/v1/admin/jobs",
    params(AdminTableParams),
    responses(
        (status = 200, description = "Postings and counters", body = AdminJobsResponse),
        (status = 401, description = "Admin login required", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["admin"],
    operation_id = "adminListJobs"
)]
#[get("/admin/jobs")]
pub async fn list_admin_jobs(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<AdminTableParams>,
) -> ApiResult<web::Json<AdminJobsResponse>> {
    session.require_admin()?;
    let term = params.into_inner().search.unwrap_or_default();
    let jobs = state.board.admin_table(&term).await?;
    let stats = state.board.stats().await?;
    Ok(web::Json(AdminJobsResponse {
        jobs,
        stats: stats.into(),
    }))
}

/// Creation request body for `POST /api/v1/admin/jobs`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewJobRequest {
    /// Role title.
    pub title: String,
    /// Hiring company name.
    pub company: String,
    /// Company logo URI; the placeholder is substituted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    /// Office location.
    pub location: String,
    /// Whether the role can be done remotely.
    #[serde(default)]
    pub is_remote: bool,
    /// Employment type, e.g. "Full-time".
    #[serde(rename = "type")]
    pub employment_type: String,
    /// Role category.
    pub category: String,
    /// Eligible passout-year range.
    pub batch: String,
    /// Required qualification.
    pub qualification: String,
    /// Eligible study stream, optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
    /// Salary range as display text.
    pub salary: String,
    /// Full role description.
    pub description: String,
}

impl From<NewJobRequest> for DraftFields {
    fn from(value: NewJobRequest) -> Self {
        Self {
            title: value.title,
            company: value.company,
            company_logo: value.company_logo,
            location: value.location,
            is_remote: value.is_remote,
            employment_type: value.employment_type,
            category: value.category,
            batch: value.batch,
            qualification: value.qualification,
            stream: value.stream,
            salary: value.salary,
            description: value.description,
        }
    }
}

fn map_draft_validation_error(err: DraftValidationError) -> Error {
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": err.field(), "code": "empty_field" }))
}

/// Create a posting; it is prepended so it leads the public listing.
#[utoipa::path(
    post,
    path = "/api/v1/admin/jobs",
    request_body = NewJobRequest,
    responses(
        (status = 201, description = "The stored posting", body = JobPosting),
        (status = 400, description = "A required field was empty", body = ErrorBody),
        (status = 401, description = "Admin login required", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["admin"],
    operation_id = "adminCreateJob"
)]
#[post("/admin/jobs")]
pub async fn create_job(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<NewJobRequest>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let draft = JobDraft::try_from(DraftFields::from(payload.into_inner()))
        .map_err(map_draft_validation_error)?;
    let posting = state.board.create(draft).await?;
    Ok(HttpResponse::Created().json(posting))
}

/// Delete a posting. Deleting an absent id is a no-op, so the response is
/// 204 either way.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/jobs/{id}",
    params(("id" = i64, Path, description = "Posting identifier")),
    responses(
        (status = 204, description = "Posting removed (or was already absent)"),
        (status = 401, description = "Admin login required", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["admin"],
    operation_id = "adminDeleteJob"
)]
#[delete("/admin/jobs/{id}")]
pub async fn delete_job(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    state.board.delete(PostingId::new(path.into_inner())).await?;
    Ok(HttpResponse::NoContent().finish())
}
