//! Local form validation.
//!
//! Checks run in a fixed order and the first failure wins: empty fields,
//! then length limits, then password confirmation. A rejected form never
//! reaches the backend.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum username length, counted in characters.
pub const MIN_USERNAME_LEN: usize = 3;
/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A locally detected input problem.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Username must be at least 3 characters")]
    UsernameTooShort,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please enter a book description")]
    EmptyDescription,
}

/// Credentials typed into the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Validates the form without touching the network.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        check_lengths(&self.username, &self.password)
    }
}

/// Fields of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Validates the form without touching the network.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() || self.password.is_empty() || self.confirm_password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        check_lengths(&self.username, &self.password)?;
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

fn check_lengths(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(ValidationError::UsernameTooShort);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validates a free-text book description.
///
/// Returns the trimmed view used for the emptiness check. The caller still
/// sends the description as typed.
pub fn validate_description(description: &str) -> Result<&str, ValidationError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(trimmed)
}
