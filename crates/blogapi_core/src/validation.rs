//! Shape checks for incoming payloads.
//!
//! Pure functions, no store access. Create checks require every mandatory
//! field; update checks only look at the fields that were supplied.

use crate::error::{ValidationError, ValidationErrors, ValidationResult};
use crate::request::{CreatePostRequest, CreateUserRequest, UpdatePostRequest, UpdateUserRequest};
use regex::Regex;
use std::sync::LazyLock;

// Literal pattern.
#[allow(clippy::unwrap_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const MIN_NAME_CHARS: usize = 2;

/// Returns true if `email` looks like `local@domain.tld` with no whitespace.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn name_ok(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_CHARS
}

fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Checks a user creation payload.
pub fn validate_user(req: &CreateUserRequest) -> ValidationResult {
    let mut errors = ValidationErrors::new();
    if !req.name.as_deref().is_some_and(name_ok) {
        errors.push(ValidationError::InvalidName);
    }
    if !req.email.as_deref().is_some_and(validate_email) {
        errors.push(ValidationError::InvalidEmail);
    }
    errors.into_result()
}

/// Checks the supplied fields of a user update payload.
pub fn validate_user_update(req: &UpdateUserRequest) -> ValidationResult {
    let mut errors = ValidationErrors::new();
    if req.name.as_deref().is_some_and(|n| !name_ok(n)) {
        errors.push(ValidationError::InvalidName);
    }
    if req.email.as_deref().is_some_and(|e| !validate_email(e)) {
        errors.push(ValidationError::InvalidEmail);
    }
    if req.password.as_deref().is_some_and(str::is_empty) {
        errors.push(ValidationError::EmptyPassword);
    }
    errors.into_result()
}

/// Checks a post creation payload.
pub fn validate_post(req: &CreatePostRequest) -> ValidationResult {
    let mut errors = ValidationErrors::new();
    if !req.title.as_deref().is_some_and(not_blank) {
        errors.push(ValidationError::MissingTitle);
    }
    if !req.content.as_deref().is_some_and(not_blank) {
        errors.push(ValidationError::MissingContent);
    }
    if !req.author_id.is_some_and(|id| id > 0) {
        errors.push(ValidationError::MissingAuthorId);
    }
    errors.into_result()
}

/// Checks the supplied fields of a post update payload.
pub fn validate_post_update(req: &UpdatePostRequest) -> ValidationResult {
    let mut errors = ValidationErrors::new();
    if req.title.as_deref().is_some_and(|t| !not_blank(t)) {
        errors.push(ValidationError::MissingTitle);
    }
    if req.content.as_deref().is_some_and(|c| !not_blank(c)) {
        errors.push(ValidationError::MissingContent);
    }
    if req.author_id == Some(0) {
        errors.push(ValidationError::MissingAuthorId);
    }
    errors.into_result()
}
