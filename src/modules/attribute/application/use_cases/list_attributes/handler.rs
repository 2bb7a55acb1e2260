use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::attribute::domain::{
    AttributeListQuery, AttributeRepository, AttributeSortField, AttributeType,
};
use crate::shared::{
    application::{use_case::Query, PaginationParams, SortDirection},
    errors::AppResult,
};

use super::{query::ListAttributesQuery, result::ListAttributesResult};

pub struct ListAttributesHandler {
    attribute_repository: Arc<dyn AttributeRepository>,
}

impl ListAttributesHandler {
    pub fn new(attribute_repository: Arc<dyn AttributeRepository>) -> Self {
        Self {
            attribute_repository,
        }
    }

    fn to_repository_query(query: ListAttributesQuery) -> AppResult<AttributeListQuery> {
        Ok(AttributeListQuery {
            enabled: query.enabled,
            attribute_type: query
                .attribute_type
                .as_deref()
                .map(str::parse::<AttributeType>)
                .transpose()?,
            sort: query
                .sort
                .as_deref()
                .map(str::parse::<AttributeSortField>)
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
impl Query<ListAttributesQuery, ListAttributesResult> for ListAttributesHandler {
    async fn execute(&self, query: ListAttributesQuery) -> AppResult<ListAttributesResult> {
        let query = Self::to_repository_query(query)?;
        self.attribute_repository.find_list(&query).await
    }
}
