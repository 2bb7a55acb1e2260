use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::modules::attribute::domain::{Attribute, AttributeRepository};
use crate::shared::{
    application::use_case::UseCase,
    domain::Clock,
    errors::{AppError, AppResult},
};

use super::command::UpdateAttributeCommand;

/// Use case handler for updating an attribute under optimistic locking
pub struct UpdateAttributeHandler {
    attribute_repository: Arc<dyn AttributeRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateAttributeHandler {
    pub fn new(attribute_repository: Arc<dyn AttributeRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            attribute_repository,
            clock,
        }
    }
}

#[async_trait]
impl UseCase<UpdateAttributeCommand, Attribute> for UpdateAttributeHandler {
    async fn execute(&self, command: UpdateAttributeCommand) -> AppResult<Attribute> {
        let id = command.id.clone();
        let expected_version = command.version;

        let Some(mut attribute) = self.attribute_repository.find_by_id(&id).await? else {
            return Err(AppError::NotFound(format!("Attribute with id {} not found", id)));
        };

        // Fast fail; the repository re-checks atomically on write
        if attribute.version() != expected_version {
            debug!(
                attribute_id = %id,
                expected_version,
                stored_version = attribute.version(),
                "Stale attribute update rejected"
            );
            return Err(AppError::OptimisticLockConflict(format!(
                "Attribute {} is at version {}, not {}",
                id,
                attribute.version(),
                expected_version
            )));
        }

        attribute.update(command.into_draft(), self.clock.now())?;

        let updated = self.attribute_repository.update(&attribute).await?;

        info!(
            attribute_id = %updated.id(),
            version = updated.version(),
            "Attribute updated"
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::attribute::domain::repository::MockAttributeRepository;
    use crate::modules::attribute::domain::{AttributeDraft, AttributeState};
    use crate::shared::domain::ports::MockClock;
    use chrono::{DateTime, TimeZone, Utc};

    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn modified_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()
    }

    fn stored(id: &str, version: i32) -> Attribute {
        let draft = AttributeDraft {
            name: "Color".to_string(),
            slug: "color".to_string(),
            attribute_type: "select".to_string(),
            unit: None,
            default_filterable: false,
            default_searchable: false,
            sort_order: 0,
            enabled: true,
            options: vec![],
        };
        let mut state: AttributeState = Attribute::create(id.to_string(), draft, created_at())
            .unwrap()
            .to_state();
        state.version = version;
        Attribute::reconstruct(state)
    }

    fn command(id: &str, version: i32) -> UpdateAttributeCommand {
        UpdateAttributeCommand {
            id: id.to_string(),
            version,
            name: "Colour".to_string(),
            slug: "colour".to_string(),
            attribute_type: "multiselect".to_string(),
            unit: None,
            default_filterable: true,
            default_searchable: false,
            sort_order: 3,
            enabled: true,
            options: vec![],
        }
    }

    fn clock() -> Arc<MockClock> {
        let mut clock = MockClock::new();
        clock.expect_now().returning(modified_at);
        Arc::new(clock)
    }

    #[tokio::test]
    async fn test_update_bumps_version() {
        let id = "attr-color";
        let mut repo = MockAttributeRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(stored(id, 2))));
        repo.expect_update()
            .withf(|a| a.version() == 2 && a.slug() == "colour")
            .times(1)
            .returning(|a| {
                let mut state = a.to_state();
                state.version += 1;
                Ok(Attribute::reconstruct(state))
            });

        let handler = UpdateAttributeHandler::new(Arc::new(repo), clock());
        let updated = handler.execute(command(id, 2)).await.unwrap();

        assert_eq!(updated.version(), 3);
        assert_eq!(updated.name(), "Colour");
        assert_eq!(updated.created_at(), created_at());
        assert_eq!(updated.modified_at(), modified_at());
    }

    #[tokio::test]
    async fn test_missing_attribute_is_not_found() {
        let mut repo = MockAttributeRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().times(0);

        let handler = UpdateAttributeHandler::new(Arc::new(repo), clock());
        let err = handler.execute(command("attr-missing", 1)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_stale_version_fails_before_write() {
        let id = "attr-color";
        let mut repo = MockAttributeRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(stored(id, 2))));
        repo.expect_update().times(0);

        let handler = UpdateAttributeHandler::new(Arc::new(repo), clock());
        let err = handler.execute(command(id, 1)).await.unwrap_err();
        assert!(matches!(err, AppError::OptimisticLockConflict(_)));
    }

    #[tokio::test]
    async fn test_write_time_conflict_propagates() {
        let id = "attr-color";
        let mut repo = MockAttributeRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(stored(id, 1))));
        repo.expect_update()
            .returning(|_| Err(AppError::OptimisticLockConflict("raced".to_string())));

        let handler = UpdateAttributeHandler::new(Arc::new(repo), clock());
        let err = handler.execute(command(id, 1)).await.unwrap_err();
        assert_eq!(err, AppError::OptimisticLockConflict("raced".to_string()));
    }

    #[tokio::test]
    async fn test_invalid_update_not_persisted() {
        let id = "attr-color";
        let mut repo = MockAttributeRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(stored(id, 1))));
        repo.expect_update().times(0);

        let handler = UpdateAttributeHandler::new(Arc::new(repo), clock());
        let mut cmd = command(id, 1);
        cmd.sort_order = -1;
        let err = handler.execute(cmd).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
