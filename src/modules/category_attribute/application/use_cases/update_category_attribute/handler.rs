use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::modules::category_attribute::domain::{CategoryAttribute, CategoryAttributeRepository};
use crate::shared::{
    application::use_case::UseCase,
    domain::Clock,
    errors::{AppError, AppResult},
};

use super::command::UpdateCategoryAttributeCommand;

pub struct UpdateCategoryAttributeHandler {
    assignment_repository: Arc<dyn CategoryAttributeRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateCategoryAttributeHandler {
    pub fn new(
        assignment_repository: Arc<dyn CategoryAttributeRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            assignment_repository,
            clock,
        }
    }
}

#[async_trait]
impl UseCase<UpdateCategoryAttributeCommand, CategoryAttribute>
    for UpdateCategoryAttributeHandler
{
    async fn execute(
        &self,
        command: UpdateCategoryAttributeCommand,
    ) -> AppResult<CategoryAttribute> {
        let UpdateCategoryAttributeCommand {
            id,
            category_id,
            version,
            changes,
        } = command;

        // An assignment addressed through the wrong category does not exist
        let mut assignment = self
            .assignment_repository
            .find_by_id(&id)
            .await?
            .filter(|a| a.belongs_to(&category_id))
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Assignment {} not found in category {}",
                    id, category_id
                ))
            })?;

        if assignment.version() != version {
            debug!(
                assignment_id = %id,
                expected_version = version,
                stored_version = assignment.version(),
                "Stale assignment update rejected"
            );
            return Err(AppError::OptimisticLockConflict(format!(
                "Assignment {} is at version {}, not {}",
                id,
                assignment.version(),
                version
            )));
        }

        assignment.update(changes, self.clock.now())?;

        let updated = self.assignment_repository.update(&assignment).await?;

        info!(
            assignment_id = %updated.id(),
            category_id = updated.category_id(),
            version = updated.version(),
            "Category attribute updated"
        );
        Ok(updated)
    }
}
