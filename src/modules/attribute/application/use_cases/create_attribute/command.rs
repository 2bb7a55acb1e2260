use crate::modules::attribute::domain::{AttributeDraft, AttributeOption};

/// Command for creating an attribute
#[derive(Debug, Clone)]
pub struct CreateAttributeCommand {
    /// Caller-chosen id; generated when absent or empty
    pub id: Option<String>,
    pub name: String,
    pub slug: String,
    pub attribute_type: String,
    pub unit: Option<String>,
    pub default_filterable: bool,
    pub default_searchable: bool,
    pub sort_order: i32,
    pub enabled: bool,
    pub options: Vec<AttributeOption>,
}

impl CreateAttributeCommand {
    pub(super) fn into_parts(self) -> (Option<String>, AttributeDraft) {
        let draft = AttributeDraft {
            name: self.name,
            slug: self.slug,
            attribute_type: self.attribute_type,
            unit: self.unit,
            default_filterable: self.default_filterable,
            default_searchable: self.default_searchable,
            sort_order: self.sort_order,
            enabled: self.enabled,
            options: self.options,
        };
        (self.id, draft)
    }
}
