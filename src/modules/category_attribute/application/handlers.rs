use std::sync::Arc;

use super::use_cases::{
    AssignAttributeHandler, ListCategoryAttributesHandler, UnassignAttributeHandler,
    UpdateCategoryAttributeHandler,
};
use crate::modules::attribute::domain::AttributeRepository;
use crate::modules::category_attribute::domain::CategoryAttributeRepository;
use crate::shared::domain::{Clock, IdGenerator};

/// Assignment use cases. Assigning needs the attribute repository for its
/// existence check.
#[derive(Clone)]
pub struct CategoryAttributeHandlers {
    pub assign: Arc<AssignAttributeHandler>,
    pub update: Arc<UpdateCategoryAttributeHandler>,
    pub unassign: Arc<UnassignAttributeHandler>,
    pub list: Arc<ListCategoryAttributesHandler>,
}

impl CategoryAttributeHandlers {
    pub fn new(
        repository: Arc<dyn CategoryAttributeRepository>,
        attribute_repository: Arc<dyn AttributeRepository>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            assign: Arc::new(AssignAttributeHandler::new(
                Arc::clone(&repository),
                attribute_repository,
                id_generator,
                Arc::clone(&clock),
            )),
            update: Arc::new(UpdateCategoryAttributeHandler::new(
                Arc::clone(&repository),
                clock,
            )),
            unassign: Arc::new(UnassignAttributeHandler::new(Arc::clone(&repository))),
            list: Arc::new(ListCategoryAttributesHandler::new(repository)),
        }
    }
}
