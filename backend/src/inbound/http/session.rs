//! Session helpers keeping HTTP handlers free of framework-specific logic.
//!
//! The admin gate is a boolean flag in the session cookie, the thinnest
//! possible authentication; it carries no security properties beyond
//! the cookie itself.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::Error;

pub(crate) const ADMIN_FLAG_KEY: &str = "admin";

/// Newtype wrapper exposing higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self(session)
    }

    /// Mark this session as an authenticated admin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::internal`] when the session cannot be written.
    pub fn persist_admin(&self) -> Result<(), Error> {
        self.0
            .insert(ADMIN_FLAG_KEY, true)
            .map_err(|err| Error::internal(format!("failed to persist session: {err}")))
    }

    /// Drop every session entry, ending the admin session.
    pub fn clear(&self) {
        self.0.purge();
    }

    /// Whether this session carries the admin flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::internal`] when the session cannot be read.
    pub fn is_admin(&self) -> Result<bool, Error> {
        self.0
            .get::<bool>(ADMIN_FLAG_KEY)
            .map(|flag| flag.unwrap_or(false))
            .map_err(|err| Error::internal(format!("failed to read session: {err}")))
    }

    /// Require an admin session or return `401 Unauthorized`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::unauthorized`] when the flag is absent.
    pub fn require_admin(&self) -> Result<(), Error> {
        if self.is_admin()? {
            Ok(())
        } else {
            Err(Error::unauthorized("admin login required"))
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
