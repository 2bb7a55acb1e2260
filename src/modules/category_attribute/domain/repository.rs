use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::category_attribute::CategoryAttribute;
use crate::shared::application::{PaginatedResult, PaginationParams, SortDirection};
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryAttributeSortField {
    #[default]
    SortOrder,
    Required,
    CreatedAt,
    ModifiedAt,
}

impl FromStr for CategoryAttributeSortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sortOrder" => Ok(Self::SortOrder),
            "required" => Ok(Self::Required),
            "createdAt" => Ok(Self::CreatedAt),
            "modifiedAt" => Ok(Self::ModifiedAt),
            other => Err(AppError::ValidationError(format!(
                "unsupported sort field '{}'",
                other
            ))),
        }
    }
}

/// Assignments of one category.
///
/// `filterable` matches explicit overrides only: `Some(true)` never returns
/// assignments that inherit `true` from their attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAttributeListQuery {
    pub category_id: String,
    pub enabled: Option<bool>,
    pub filterable: Option<bool>,
    pub sort: CategoryAttributeSortField,
    pub order: SortDirection,
    pub pagination: PaginationParams,
}

impl CategoryAttributeListQuery {
    pub fn new(category_id: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            enabled: None,
            filterable: None,
            sort: CategoryAttributeSortField::default(),
            order: SortDirection::default(),
            pagination: PaginationParams::default(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryAttributeRepository: Send + Sync {
    /// Fails with `AlreadyAssigned` when the (category, attribute) pair exists
    async fn insert(&self, assignment: &CategoryAttribute) -> AppResult<()>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<CategoryAttribute>>;

    /// Lookup by the natural key
    async fn find_by_category_and_attribute(
        &self,
        category_id: &str,
        attribute_id: &str,
    ) -> AppResult<Option<CategoryAttribute>>;

    async fn find_list(
        &self,
        query: &CategoryAttributeListQuery,
    ) -> AppResult<PaginatedResult<CategoryAttribute>>;

    /// Compare-and-swap on `assignment.version()`, returning the stored row
    /// at the next version
    async fn update(&self, assignment: &CategoryAttribute) -> AppResult<CategoryAttribute>;

    /// Fails with `NotFound` if nothing was deleted
    async fn delete(&self, id: &str) -> AppResult<()>;
}
