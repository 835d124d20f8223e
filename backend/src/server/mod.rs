//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::{InMemoryJobStore, JobStore, SequentialIdGenerator};
use crate::inbound::http::admin::{create_job, delete_job, list_admin_jobs, login, logout};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::jobs::{get_job, list_jobs};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

/// Session middleware storing the admin flag in a private cookie.
///
/// Shared between the server and the handler tests so both gate requests
/// the same way.
#[must_use]
pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build()
}

/// Dependency bundle handed to each worker's app factory.
#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
    } = deps;

    let api = web::scope("/api/v1")
        .wrap(session_middleware(key, cookie_secure))
        .service(list_jobs)
        .service(get_job)
        .service(login)
        .service(logout)
        .service(list_admin_jobs)
        .service(create_job)
        .service(delete_job);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// With a data file configured the posting collection is persisted to
/// disk; otherwise an in-memory store seeded with the default postings is
/// used. The id counter starts just past the highest id already stored.
///
/// # Errors
/// Propagates [`std::io::Error`] when the store cannot be read or binding
/// the socket fails.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        key,
        cookie_secure,
        bind_addr,
        data_file,
    } = config;

    let store: Arc<dyn JobStore> = match data_file {
        Some(path) => Arc::new(crate::outbound::persistence::JsonFileJobStore::new(path)),
        None => Arc::new(InMemoryJobStore::seeded()),
    };
    let existing = store
        .load_all()
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let ids = Arc::new(SequentialIdGenerator::after_highest(&existing));
    let http_state = web::Data::new(HttpState::new(store, ids));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
