use std::sync::Arc;

use super::use_cases::{
    CreateAttributeHandler, GetAttributeHandler, ListAttributesHandler, UpdateAttributeHandler,
};
use crate::modules::attribute::domain::AttributeRepository;
use crate::shared::domain::{Clock, IdGenerator};

/// Every attribute use case, wired to one repository
#[derive(Clone)]
pub struct AttributeHandlers {
    pub create: Arc<CreateAttributeHandler>,
    pub update: Arc<UpdateAttributeHandler>,
    pub get: Arc<GetAttributeHandler>,
    pub list: Arc<ListAttributesHandler>,
}

impl AttributeHandlers {
    pub fn new(
        repository: Arc<dyn AttributeRepository>,
        id_generator: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            create: Arc::new(CreateAttributeHandler::new(
                Arc::clone(&repository),
                id_generator,
                Arc::clone(&clock),
            )),
            update: Arc::new(UpdateAttributeHandler::new(Arc::clone(&repository), clock)),
            get: Arc::new(GetAttributeHandler::new(Arc::clone(&repository))),
            list: Arc::new(ListAttributesHandler::new(repository)),
        }
    }
}
