//! Integration tests for the public listing and detail endpoints.

#[expect(
    dead_code,
    reason = "Shared harness includes helpers used only by other integration suites."
)]
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

use support::seeded_app;

#[actix_web::test]
async fn first_page_holds_ten_of_the_twelve_seed_postings() {
    let app = test::init_service(seeded_app()).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/v1/jobs").to_request())
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    let jobs = body["jobs"].as_array().expect("jobs array");
    assert_eq!(jobs.len(), 10);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["pageNumbers"], serde_json::json!([1, 2]));
    assert_eq!(jobs.first().and_then(|job| job["id"].as_i64()), Some(1));
}

#[actix_web::test]
async fn second_page_holds_the_remainder() {
    let app = test::init_service(seeded_app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/jobs?page=2")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    let jobs = body["jobs"].as_array().expect("jobs array");
    assert_eq!(jobs.len(), 2);
    assert_eq!(body["currentPage"], 2);
}

#[actix_web::test]
async fn search_is_case_insensitive_over_the_description() {
    let app = test::init_service(seeded_app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/jobs?search=DEVOPS")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    let jobs = body["jobs"].as_array().expect("jobs array");
    assert_eq!(jobs.len(), 1);
    assert_eq!(
        jobs.first().and_then(|job| job["title"].as_str()),
        Some("DevOps Engineer")
    );
    assert_eq!(body["totalPages"], 1);
}

#[actix_web::test]
async fn unmatched_search_yields_zero_pages() {
    let app = test::init_service(seeded_app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/jobs?search=zeppelin")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["jobs"], serde_json::json!([]));
    assert_eq!(body["totalPages"], 0);
    assert_eq!(body["pageNumbers"], serde_json::json!([]));
}

#[actix_web::test]
async fn page_beyond_the_last_is_empty_but_keeps_the_page_count() {
    let app = test::init_service(seeded_app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/jobs?page=9")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["jobs"], serde_json::json!([]));
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["currentPage"], 9);
}

#[actix_web::test]
async fn page_zero_is_rejected() {
    let app = test::init_service(seeded_app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/jobs?page=0")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
}

#[actix_web::test]
async fn detail_returns_the_posting_with_camel_case_fields() {
    let app = test::init_service(seeded_app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/jobs/3").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["id"], 3);
    assert_eq!(body["title"], "DevOps Engineer");
    assert_eq!(body["type"], "Contract");
    assert_eq!(body["isRemote"], true);
    assert_eq!(body["postedDate"], "3 days ago");
}

#[actix_web::test]
async fn unknown_id_yields_not_found() {
    let app = test::init_service(seeded_app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/jobs/999").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
    assert!(body["traceId"].is_string());
}
