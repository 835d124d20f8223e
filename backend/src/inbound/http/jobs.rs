//! Public job board endpoints.
//!
//! ```text
//! GET /api/v1/jobs?search=devops&page=2
//! GET /api/v1/jobs/{id}
//! ```

use actix_web::{get, web};
use listing::{DEFAULT_PAGE_SIZE, QueryState};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{BoardPage, Error, JobPosting, PostingId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Query parameters accepted by the public listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListingParams {
    /// Free-text term matched against title, company, and description.
    pub search: Option<String>,
    /// One-based page to show; defaults to 1.
    pub page: Option<usize>,
}

impl ListingParams {
    fn into_query_state(self) -> Result<QueryState, Error> {
        QueryState::new(
            self.search.unwrap_or_default(),
            self.page.unwrap_or(1),
            DEFAULT_PAGE_SIZE,
        )
        .map_err(|err| Error::invalid_request(err.to_string()))
    }
}

/// Response envelope for one listing page.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    /// Postings on the requested page, newest first.
    pub jobs: Vec<JobPosting>,
    /// Total number of pages for this filter; 0 when nothing matched.
    pub total_pages: usize,
    /// The page that was requested.
    pub current_page: usize,
    /// Page-number buttons to render around the current page.
    pub page_numbers: Vec<usize>,
}

impl From<BoardPage> for ListingResponse {
    fn from(page: BoardPage) -> Self {
        Self {
            jobs: page.postings,
            total_pages: page.total_pages,
            current_page: page.current_page,
            page_numbers: page.page_numbers,
        }
    }
}

/// List postings matching the search term, one page at a time.
///
/// A page beyond the last yields an empty `jobs` array with `totalPages`
/// intact, so clients can recover by navigating back.
#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    params(ListingParams),
    responses(
        (status = 200, description = "One page of matching postings", body = ListingResponse),
        (status = 400, description = "Invalid paging parameters", body = crate::inbound::http::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["jobs"],
    operation_id = "listJobs",
    security([])
)]
#[get("/jobs")]
pub async fn list_jobs(
    state: web::Data<HttpState>,
    params: web::Query<ListingParams>,
) -> ApiResult<web::Json<ListingResponse>> {
    let query_state = params.into_inner().into_query_state()?;
    let page = state.board.browse(&query_state).await?;
    Ok(web::Json(page.into()))
}

/// Fetch one posting by id for the detail view.
#[utoipa::path(
    get,
    path = "/api/v1/jobs/{id}",
    params(("id" = i64, Path, description = "Posting identifier")),
    responses(
        (status = 200, description = "The posting", body = JobPosting),
        (status = 404, description = "No posting with this id", body = crate::inbound::http::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["jobs"],
    operation_id = "getJob",
    security([])
)]
#[get("/jobs/{id}")]
pub async fn get_job(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<JobPosting>> {
    let id = PostingId::new(path.into_inner());
    let posting = state.board.lookup(id).await?;
    Ok(web::Json(posting))
}
