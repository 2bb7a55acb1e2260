use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category_attribute::domain::{
    CategoryAttributeListQuery, CategoryAttributeRepository, CategoryAttributeSortField,
};
use crate::shared::{
    application::{use_case::Query, PaginationParams, SortDirection},
    errors::AppResult,
    utils::Validator,
};

use super::{query::ListCategoryAttributesQuery, result::ListCategoryAttributesResult};

pub struct ListCategoryAttributesHandler {
    assignment_repository: Arc<dyn CategoryAttributeRepository>,
}

impl ListCategoryAttributesHandler {
    pub fn new(assignment_repository: Arc<dyn CategoryAttributeRepository>) -> Self {
        Self {
            assignment_repository,
        }
    }

    fn to_repository_query(
        query: ListCategoryAttributesQuery,
    ) -> AppResult<CategoryAttributeListQuery> {
        Validator::validate_required("categoryId", &query.category_id)?;

        Ok(CategoryAttributeListQuery {
            category_id: query.category_id,
            enabled: query.enabled,
            filterable: query.filterable,
            sort: query
                .sort
                .as_deref()
                .map(str::parse::<CategoryAttributeSortField>)
                .transpose()?
                .unwrap_or_default(),
            order: query
                .order
                .as_deref()
                .map(str::parse::<SortDirection>)
                .transpose()?
                .unwrap_or_default(),
            pagination: PaginationParams::from_request(query.page, query.size)?,
        })
    }
}

#[async_trait]
impl Query<ListCategoryAttributesQuery, ListCategoryAttributesResult>
    for ListCategoryAttributesHandler
{
    async fn execute(
        &self,
        query: ListCategoryAttributesQuery,
    ) -> AppResult<ListCategoryAttributesResult> {
        let query = Self::to_repository_query(query)?;
        self.assignment_repository.find_list(&query).await
    }
}
