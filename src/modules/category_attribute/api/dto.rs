use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::category_attribute::application::UpdateCategoryAttributeCommand;
use crate::modules::category_attribute::domain::{CategoryAttribute, CategoryAttributeChanges};
use crate::shared::domain::OverrideFlag;

fn enabled_by_default() -> bool {
    true
}

/// Body of `POST /v1/categories/{categoryId}/attributes`; the category
/// comes from the path
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignAttributeRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub attribute_id: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub sort_order: i32,
    /// `null` or absent inherits the attribute default
    #[serde(default)]
    pub filterable: OverrideFlag,
    #[serde(default)]
    pub searchable: OverrideFlag,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryAttributeRequest {
    pub id: String,
    pub version: i32,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub filterable: OverrideFlag,
    #[serde(default)]
    pub searchable: OverrideFlag,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl UpdateCategoryAttributeRequest {
    pub fn into_command(self, category_id: String) -> UpdateCategoryAttributeCommand {
        UpdateCategoryAttributeCommand {
            id: self.id,
            category_id,
            version: self.version,
            changes: CategoryAttributeChanges {
                required: self.required,
                sort_order: self.sort_order,
                filterable: self.filterable,
                searchable: self.searchable,
                enabled: self.enabled,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryAttributeListParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub enabled: Option<bool>,
    pub filterable: Option<bool>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAttributeResponse {
    pub id: String,
    pub version: i32,
    pub category_id: String,
    pub attribute_id: String,
    pub required: bool,
    pub sort_order: i32,
    /// `null` means the attribute default applies
    pub filterable: Option<bool>,
    pub searchable: Option<bool>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<&CategoryAttribute> for CategoryAttributeResponse {
    fn from(assignment: &CategoryAttribute) -> Self {
        Self {
            id: assignment.id().to_string(),
            version: assignment.version(),
            category_id: assignment.category_id().to_string(),
            attribute_id: assignment.attribute_id().to_string(),
            required: assignment.required(),
            sort_order: assignment.sort_order(),
            filterable: assignment.filterable().as_option(),
            searchable: assignment.searchable().as_option(),
            enabled: assignment.enabled(),
            created_at: assignment.created_at(),
            modified_at: assignment.modified_at(),
        }
    }
}
