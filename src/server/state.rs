use axum::extract::FromRef;
use std::sync::Arc;
use std::time::Instant;

use crate::modules::attribute::{AttributeHandlers, AttributeRepository, InMemoryAttributeRepository};
use crate::modules::category_attribute::{
    CategoryAttributeHandlers, CategoryAttributeRepository, InMemoryCategoryAttributeRepository,
};
use crate::shared::domain::{Clock, IdGenerator, SystemClock, UuidGenerator};

/// Router state: one handler bundle per module
#[derive(Clone)]
pub struct AppState {
    pub attributes: AttributeHandlers,
    pub category_attributes: CategoryAttributeHandlers,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        attribute_repository: Arc<dyn AttributeRepository>,
        assignment_repository: Arc<dyn CategoryAttributeRepository>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            attributes: AttributeHandlers::new(
                Arc::clone(&attribute_repository),
                Arc::clone(&id_generator),
                Arc::clone(&clock),
            ),
            category_attributes: CategoryAttributeHandlers::new(
                assignment_repository,
                attribute_repository,
                id_generator,
                clock,
            ),
            started_at: Instant::now(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryAttributeRepository::new()),
            Arc::new(InMemoryCategoryAttributeRepository::new()),
            Arc::new(UuidGenerator),
            Arc::new(SystemClock),
        )
    }

    #[cfg(feature = "postgres")]
    pub fn postgres(db: Arc<crate::shared::infrastructure::Database>) -> Self {
        use crate::modules::attribute::PostgresAttributeRepository;
        use crate::modules::category_attribute::PostgresCategoryAttributeRepository;

        Self::new(
            Arc::new(PostgresAttributeRepository::new(Arc::clone(&db))),
            Arc::new(PostgresCategoryAttributeRepository::new(db)),
            Arc::new(UuidGenerator),
            Arc::new(SystemClock),
        )
    }
}

impl FromRef<AppState> for AttributeHandlers {
    fn from_ref(state: &AppState) -> Self {
        state.attributes.clone()
    }
}

impl FromRef<AppState> for CategoryAttributeHandlers {
    fn from_ref(state: &AppState) -> Self {
        state.category_attributes.clone()
    }
}
