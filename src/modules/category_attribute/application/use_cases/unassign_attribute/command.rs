#[derive(Debug, Clone)]
pub struct UnassignAttributeCommand {
    pub id: String,
    pub category_id: String,
}

impl UnassignAttributeCommand {
    pub fn new(id: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
        }
    }
}
