//! Shared harness for endpoint integration tests.
//!
//! Builds the same `/api/v1` surface the server wires up, backed by an
//! injectable store so suites can choose in-memory or file-backed
//! persistence. The id counter starts at 100 to keep created postings
//! visually distinct from the seed collection.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};

use backend::domain::ports::{InMemoryJobStore, JobStore, SequentialIdGenerator};
use backend::inbound::http::admin::{create_job, delete_job, list_admin_jobs, login, logout};
use backend::inbound::http::jobs::{get_job, list_jobs};
use backend::inbound::http::state::HttpState;
use backend::middleware::Trace;
use backend::server::session_middleware;

/// First id issued for postings created through the harness.
pub const FIRST_CREATED_ID: i64 = 100;

/// App serving the full `/api/v1` surface over the given store.
pub fn app_with_store(
    store: Arc<dyn JobStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let ids = Arc::new(SequentialIdGenerator::starting_at(FIRST_CREATED_ID));
    let state = web::Data::new(HttpState::new(store, ids));
    App::new().app_data(state).wrap(Trace).service(
        web::scope("/api/v1")
            .wrap(session_middleware(Key::generate(), false))
            .service(list_jobs)
            .service(get_job)
            .service(login)
            .service(logout)
            .service(list_admin_jobs)
            .service(create_job)
            .service(delete_job),
    )
}

/// App over an in-memory store holding the seed collection.
pub fn seeded_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    app_with_store(Arc::new(InMemoryJobStore::seeded()))
}

/// Log in with the fixed admin credentials and return the session cookie.
pub async fn admin_cookie<S, B>(app: &S) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/v1/admin/login")
            .set_json(serde_json::json!({
                "username": "admin",
                "password": "password",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("login sets the session cookie")
        .into_owned()
}

/// A complete creation payload; override fields per test as needed.
pub fn valid_new_job() -> serde_json::Value {
    serde_json::json!({
        "title": "Platform Engineer",
        "company": "Example Systems",
        "location": "Remote",
        "isRemote": true,
        "type": "Full-time",
        "category": "Software Developer",
        "batch": "2021-2024",
        "qualification": "B.Tech in CS/IT",
        "salary": "$100,000 - $120,000",
        "description": "Build and run the platform."
    })
}
