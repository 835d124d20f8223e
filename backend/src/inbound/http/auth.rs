//! Authentication helpers used by the admin handlers.
//!
//! Fixture credential check only: the admin gate formalises no security
//! properties, it merely mirrors the console's login flow.

use crate::domain::Error;

use super::ApiResult;

/// Validation failures raised when parsing login credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginValidationError {
    /// The username was empty.
    EmptyUsername,
    /// The password was empty.
    EmptyPassword,
}

impl std::fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Non-empty login credential pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: String,
}

impl LoginCredentials {
    /// Validate and construct credentials from raw form input.
    ///
    /// # Errors
    ///
    /// Returns [`LoginValidationError`] when either part is blank.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        if username.trim().is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.trim().is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }

    /// The submitted username.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// The submitted password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Check the fixture admin credentials.
///
/// # Errors
///
/// Returns [`Error::unauthorized`] when the pair does not match.
pub fn authenticate(credentials: &LoginCredentials) -> ApiResult<()> {
    if credentials.username() == "admin" && credentials.password() == "password" {
        Ok(())
    } else {
        Err(Error::unauthorized("invalid credentials"))
    }
}
