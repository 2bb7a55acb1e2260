use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::modules::attribute::domain::AttributeRepository;
use crate::modules::category_attribute::domain::{CategoryAttribute, CategoryAttributeRepository};
use crate::shared::{
    application::use_case::UseCase,
    domain::{Clock, IdGenerator},
    errors::{AppError, AppResult},
};

use super::command::AssignAttributeCommand;

/// Use case handler for assigning an attribute to a category.
///
/// The attribute existence check is a point-in-time read; nothing stops the
/// attribute from disappearing afterwards.
pub struct AssignAttributeHandler {
    assignment_repository: Arc<dyn CategoryAttributeRepository>,
    attribute_repository: Arc<dyn AttributeRepository>,
    id_generator: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl AssignAttributeHandler {
    pub fn new(
        assignment_repository: Arc<dyn CategoryAttributeRepository>,
        attribute_repository: Arc<dyn AttributeRepository>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            assignment_repository,
            attribute_repository,
            id_generator,
            clock,
        }
    }

    fn already_assigned(assignment: &CategoryAttribute) -> AppError {
        AppError::AlreadyAssigned(format!(
            "Attribute {} is already assigned to category {}",
            assignment.attribute_id(),
            assignment.category_id()
        ))
    }
}

#[async_trait]
impl UseCase<AssignAttributeCommand, CategoryAttribute> for AssignAttributeHandler {
    async fn execute(&self, command: AssignAttributeCommand) -> AppResult<CategoryAttribute> {
        let attribute_id = command.attribute_id.clone();
        if !self.attribute_repository.exists(&attribute_id).await? {
            return Err(AppError::NotFound(format!(
                "Attribute with id {} not found",
                attribute_id
            )));
        }

        let (id, draft) = command.into_parts();
        let id = id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| self.id_generator.generate());
        let assignment = CategoryAttribute::create(id, draft, self.clock.now())?;

        // Fast fail; the store's unique index is what actually decides
        if self
            .assignment_repository
            .find_by_category_and_attribute(assignment.category_id(), &attribute_id)
            .await?
            .is_some()
        {
            debug!(
                category_id = assignment.category_id(),
                attribute_id = %attribute_id,
                "Duplicate assignment rejected"
            );
            return Err(Self::already_assigned(&assignment));
        }

        self.assignment_repository.insert(&assignment).await?;

        info!(
            assignment_id = %assignment.id(),
            category_id = assignment.category_id(),
            attribute_id = %attribute_id,
            "Attribute assigned to category"
        );
        Ok(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::attribute::domain::repository::MockAttributeRepository;
    use crate::modules::category_attribute::domain::repository::MockCategoryAttributeRepository;
    use crate::shared::domain::ports::{MockClock, MockIdGenerator};
    use crate::shared::domain::OverrideFlag;
    use chrono::{TimeZone, Utc};

    fn command(attribute_id: &str) -> AssignAttributeCommand {
        AssignAttributeCommand {
            id: None,
            category_id: "shoes".to_string(),
            attribute_id: attribute_id.to_string(),
            required: true,
            sort_order: 1,
            filterable: OverrideFlag::Override(true),
            searchable: OverrideFlag::Inherit,
            enabled: true,
        }
    }

    fn handler(
        assignments: MockCategoryAttributeRepository,
        attributes: MockAttributeRepository,
    ) -> AssignAttributeHandler {
        let mut ids = MockIdGenerator::new();
        ids.expect_generate().return_const("assign-1".to_string());
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        AssignAttributeHandler::new(
            Arc::new(assignments),
            Arc::new(attributes),
            Arc::new(ids),
            Arc::new(clock),
        )
    }

    fn existing_attribute() -> MockAttributeRepository {
        let mut attributes = MockAttributeRepository::new();
        attributes.expect_exists().returning(|_| Ok(true));
        attributes
    }

    #[tokio::test]
    async fn test_assigns_existing_attribute() {
        let mut assignments = MockCategoryAttributeRepository::new();
        assignments
            .expect_find_by_category_and_attribute()
            .times(1)
            .returning(|_, _| Ok(None));
        assignments
            .expect_insert()
            .withf(|a| a.category_id() == "shoes" && a.version() == 1)
            .times(1)
            .returning(|_| Ok(()));

        let assignment = handler(assignments, existing_attribute())
            .execute(command("attr-color"))
            .await
            .unwrap();

        assert_eq!(assignment.id(), "assign-1");
        assert_eq!(assignment.attribute_id(), "attr-color");
        assert_eq!(assignment.filterable(), OverrideFlag::Override(true));
    }

    #[tokio::test]
    async fn test_keeps_supplied_id_and_generates_for_empty() {
        let mut assignments = MockCategoryAttributeRepository::new();
        assignments
            .expect_find_by_category_and_attribute()
            .returning(|_, _| Ok(None));
        assignments.expect_insert().times(2).returning(|_| Ok(()));
        let handler = handler(assignments, existing_attribute());

        let mut cmd = command("attr-color");
        cmd.id = Some("shoes-color".to_string());
        assert_eq!(handler.execute(cmd).await.unwrap().id(), "shoes-color");

        let mut cmd = command("attr-size");
        cmd.id = Some(String::new());
        assert_eq!(handler.execute(cmd).await.unwrap().id(), "assign-1");
    }

    #[tokio::test]
    async fn test_missing_attribute_is_not_found_and_writes_nothing() {
        let mut attributes = MockAttributeRepository::new();
        attributes
            .expect_exists()
            .withf(|id| id == "no-such-attribute")
            .times(1)
            .returning(|_| Ok(false));
        let mut assignments = MockCategoryAttributeRepository::new();
        assignments.expect_find_by_category_and_attribute().times(0);
        assignments.expect_insert().times(0);

        let err = handler(assignments, attributes)
            .execute(command("no-such-attribute"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_existing_pair_fails_fast() {
        let mut assignments = MockCategoryAttributeRepository::new();
        assignments
            .expect_find_by_category_and_attribute()
            .returning(|category_id, attribute_id| {
                let draft = crate::modules::category_attribute::domain::CategoryAttributeDraft {
                    category_id: category_id.to_string(),
                    attribute_id: attribute_id.to_string(),
                    required: false,
                    sort_order: 0,
                    filterable: OverrideFlag::Inherit,
                    searchable: OverrideFlag::Inherit,
                    enabled: true,
                };
                Ok(Some(
                    CategoryAttribute::create("assign-0".to_string(), draft, Utc::now()).unwrap(),
                ))
            });
        assignments.expect_insert().times(0);

        let err = handler(assignments, existing_attribute())
            .execute(command("attr-color"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyAssigned(_)));
    }

    #[tokio::test]
    async fn test_insert_race_surfaces_as_already_assigned() {
        let mut assignments = MockCategoryAttributeRepository::new();
        assignments
            .expect_find_by_category_and_attribute()
            .returning(|_, _| Ok(None));
        assignments
            .expect_insert()
            .returning(|_| Err(AppError::AlreadyAssigned("shoes".to_string())));

        let err = handler(assignments, existing_attribute())
            .execute(command("attr-color"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyAssigned(_)));
    }

    #[tokio::test]
    async fn test_invalid_assignment_rejected() {
        let mut assignments = MockCategoryAttributeRepository::new();
        assignments.expect_insert().times(0);
        let mut cmd = command("attr-color");
        cmd.sort_order = -1;

        let err = handler(assignments, existing_attribute())
            .execute(cmd)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
