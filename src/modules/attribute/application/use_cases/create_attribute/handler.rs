use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::modules::attribute::domain::{Attribute, AttributeRepository};
use crate::shared::{
    application::use_case::UseCase,
    domain::{Clock, IdGenerator},
    errors::{AppError, AppResult},
};

use super::command::CreateAttributeCommand;

/// Use case handler for creating an attribute
pub struct CreateAttributeHandler {
    attribute_repository: Arc<dyn AttributeRepository>,
    id_generator: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl CreateAttributeHandler {
    pub fn new(
        attribute_repository: Arc<dyn AttributeRepository>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            attribute_repository,
            id_generator,
            clock,
        }
    }
}

#[async_trait]
impl UseCase<CreateAttributeCommand, Attribute> for CreateAttributeHandler {
    async fn execute(&self, command: CreateAttributeCommand) -> AppResult<Attribute> {
        let (id, draft) = command.into_parts();
        let id = id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| self.id_generator.generate());

        let attribute = Attribute::create(id, draft, self.clock.now()).inspect_err(|e| {
            debug!(error = %e, "Rejected attribute draft");
        })?;

        match self.attribute_repository.insert(&attribute).await {
            Ok(()) => {}
            Err(e @ AppError::SlugAlreadyExists(_)) => {
                debug!(slug = attribute.slug(), "Attribute slug already taken");
                return Err(e);
            }
            Err(e) => return Err(e),
        }

        info!(
            attribute_id = %attribute.id(),
            slug = attribute.slug(),
            "Attribute created"
        );
        Ok(attribute)
    }
}
