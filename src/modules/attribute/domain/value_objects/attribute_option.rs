use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// One enumerated value of a select/multiselect attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeOption {
    pub value: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_code: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl AttributeOption {
    pub fn new(value: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            slug: slug.into(),
            color_code: None,
            sort_order: 0,
            enabled: true,
        }
    }

    pub fn with_color_code(mut self, color_code: impl Into<String>) -> Self {
        self.color_code = Some(color_code.into());
        self
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }
}

/// Checks each option in order; the first failure wins.
pub(crate) fn validate_options(options: &[AttributeOption]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(options.len());

    for (index, option) in options.iter().enumerate() {
        Validator::validate_name(&format!("options[{}].value", index), &option.value)?;
        Validator::validate_slug(&format!("options[{}].slug", index), &option.slug)?;
        if !seen.insert(option.slug.as_str()) {
            return Err(AppError::ValidationError(format!(
                "options[{}].slug '{}' is used by another option",
                index, option.slug
            )));
        }
        Validator::validate_sort_order(&format!("options[{}].sortOrder", index), option.sort_order)?;
    }

    Ok(())
}
