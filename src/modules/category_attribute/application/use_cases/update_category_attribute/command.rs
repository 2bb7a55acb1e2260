use crate::modules::category_attribute::domain::CategoryAttributeChanges;

/// Replaces the mutable fields of an assignment read at `version`
#[derive(Debug, Clone)]
pub struct UpdateCategoryAttributeCommand {
    pub id: String,
    pub category_id: String,
    pub version: i32,
    pub changes: CategoryAttributeChanges,
}
