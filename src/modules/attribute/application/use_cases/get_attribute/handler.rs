use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::attribute::domain::{Attribute, AttributeRepository};
use crate::shared::{
    application::use_case::Query,
    errors::{AppError, AppResult},
};

use super::query::GetAttributeQuery;

pub struct GetAttributeHandler {
    attribute_repository: Arc<dyn AttributeRepository>,
}

impl GetAttributeHandler {
    pub fn new(attribute_repository: Arc<dyn AttributeRepository>) -> Self {
        Self {
            attribute_repository,
        }
    }
}

#[async_trait]
impl Query<GetAttributeQuery, Attribute> for GetAttributeHandler {
    async fn execute(&self, query: GetAttributeQuery) -> AppResult<Attribute> {
        self.attribute_repository
            .find_by_id(&query.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Attribute with id {} not found", query.id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::attribute::domain::repository::MockAttributeRepository;

    #[tokio::test]
    async fn test_absent_attribute_is_not_found() {
        let mut repo = MockAttributeRepository::new();
        repo.expect_find_by_id()
            .withf(|id| id == "attr-color")
            .times(1)
            .returning(|_| Ok(None));

        let handler = GetAttributeHandler::new(Arc::new(repo));
        let err = handler
            .execute(GetAttributeQuery::new("attr-color"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
