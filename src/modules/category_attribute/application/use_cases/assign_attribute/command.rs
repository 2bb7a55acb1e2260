use crate::modules::category_attribute::domain::CategoryAttributeDraft;
use crate::shared::domain::OverrideFlag;

/// Command for assigning an attribute to a category
#[derive(Debug, Clone)]
pub struct AssignAttributeCommand {
    /// Caller-chosen id; generated when absent or empty
    pub id: Option<String>,
    pub category_id: String,
    pub attribute_id: String,
    pub required: bool,
    pub sort_order: i32,
    pub filterable: OverrideFlag,
    pub searchable: OverrideFlag,
    pub enabled: bool,
}

impl AssignAttributeCommand {
    pub(super) fn into_parts(self) -> (Option<String>, CategoryAttributeDraft) {
        let draft = CategoryAttributeDraft {
            category_id: self.category_id,
            attribute_id: self.attribute_id,
            required: self.required,
            sort_order: self.sort_order,
            filterable: self.filterable,
            searchable: self.searchable,
            enabled: self.enabled,
        };
        (self.id, draft)
    }
}
