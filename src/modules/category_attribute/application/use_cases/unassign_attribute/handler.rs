use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::category_attribute::domain::CategoryAttributeRepository;
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
};

use super::command::UnassignAttributeCommand;

/// Removes an assignment. Unlike updates, deletes are not version-checked.
pub struct UnassignAttributeHandler {
    assignment_repository: Arc<dyn CategoryAttributeRepository>,
}

impl UnassignAttributeHandler {
    pub fn new(assignment_repository: Arc<dyn CategoryAttributeRepository>) -> Self {
        Self {
            assignment_repository,
        }
    }
}

#[async_trait]
impl UseCase<UnassignAttributeCommand, ()> for UnassignAttributeHandler {
    async fn execute(&self, command: UnassignAttributeCommand) -> AppResult<()> {
        let belongs = self
            .assignment_repository
            .find_by_id(&command.id)
            .await?
            .is_some_and(|a| a.belongs_to(&command.category_id));

        if !belongs {
            return Err(AppError::NotFound(format!(
                "Assignment {} not found in category {}",
                command.id, command.category_id
            )));
        }

        self.assignment_repository.delete(&command.id).await?;

        info!(
            assignment_id = %command.id,
            category_id = %command.category_id,
            "Attribute unassigned from category"
        );
        Ok(())
    }
}
