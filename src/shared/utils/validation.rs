use regex::Regex;
use std::sync::LazyLock;

use crate::shared::errors::AppError;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_SLUG_LENGTH: usize = 50;

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern compiles"));

/// Field-level checks shared by the aggregates.
///
/// `field` is the name reported back to the caller, so option checks can
/// point at `options[2].slug` rather than a bare `slug`.
pub struct Validator;

impl Validator {
    /// Non-empty and at most `MAX_NAME_LENGTH` characters
    pub fn validate_name(field: &str, value: &str) -> Result<(), AppError> {
        if value.is_empty() {
            return Err(AppError::ValidationError(format!("{} is required", field)));
        }
        if value.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::ValidationError(format!(
                "{} is too long (max {} characters)",
                field, MAX_NAME_LENGTH
            )));
        }
        Ok(())
    }

    pub fn validate_slug(field: &str, value: &str) -> Result<(), AppError> {
        if value.is_empty() {
            return Err(AppError::ValidationError(format!("{} is required", field)));
        }
        if value.chars().count() > MAX_SLUG_LENGTH {
            return Err(AppError::ValidationError(format!(
                "{} is too long (max {} characters)",
                field, MAX_SLUG_LENGTH
            )));
        }
        if !Self::is_valid_slug(value) {
            return Err(AppError::ValidationError(format!(
                "{} must contain only lowercase letters, numbers, and hyphens",
                field
            )));
        }
        Ok(())
    }

    pub fn validate_sort_order(field: &str, value: i32) -> Result<(), AppError> {
        if value < 0 {
            return Err(AppError::ValidationError(format!(
                "{} cannot be negative",
                field
            )));
        }
        Ok(())
    }

    /// Present, nothing more; whitespace counts as a value
    pub fn validate_required(field: &str, value: &str) -> Result<(), AppError> {
        if value.is_empty() {
            return Err(AppError::ValidationError(format!("{} is required", field)));
        }
        Ok(())
    }

    pub fn is_valid_slug(value: &str) -> bool {
        SLUG_PATTERN.is_match(value)
    }
}
