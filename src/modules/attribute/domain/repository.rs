use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::attribute::Attribute;
use super::value_objects::AttributeType;
use crate::shared::application::{PaginatedResult, PaginationParams, SortDirection};
use crate::shared::errors::{AppError, AppResult};

/// Columns an attribute list can be ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeSortField {
    Name,
    Slug,
    #[serde(rename = "type")]
    Type,
    #[default]
    SortOrder,
    CreatedAt,
    ModifiedAt,
}

impl FromStr for AttributeSortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "slug" => Ok(Self::Slug),
            "type" => Ok(Self::Type),
            "sortOrder" => Ok(Self::SortOrder),
            "createdAt" => Ok(Self::CreatedAt),
            "modifiedAt" => Ok(Self::ModifiedAt),
            other => Err(AppError::ValidationError(format!(
                "unsupported sort field '{}'",
                other
            ))),
        }
    }
}

/// Filter, order and page for [`AttributeRepository::find_list`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeListQuery {
    pub enabled: Option<bool>,
    pub attribute_type: Option<AttributeType>,
    pub sort: AttributeSortField,
    pub order: SortDirection,
    pub pagination: PaginationParams,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttributeRepository: Send + Sync {
    /// Fails with `SlugAlreadyExists` when the slug is taken and
    /// `Conflict` when the id is.
    async fn insert(&self, attribute: &Attribute) -> AppResult<()>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Attribute>>;

    async fn exists(&self, id: &str) -> AppResult<bool>;

    async fn find_list(&self, query: &AttributeListQuery) -> AppResult<PaginatedResult<Attribute>>;

    /// Compare-and-swap on `attribute.version()`.
    ///
    /// Writes only if the stored version still equals the aggregate's, and
    /// returns the stored attribute with the version bumped by one. Fails with
    /// `OptimisticLockConflict` if the version moved, `NotFound` if the row is
    /// gone, `SlugAlreadyExists` if the new slug collides.
    async fn update(&self, attribute: &Attribute) -> AppResult<Attribute>;
}
