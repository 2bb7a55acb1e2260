use crate::modules::attribute::domain::{AttributeDraft, AttributeOption};

/// Command for replacing an attribute's mutable fields
#[derive(Debug, Clone)]
pub struct UpdateAttributeCommand {
    pub id: String,
    /// Version the caller last read
    pub version: i32,
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

impl UpdateAttributeCommand {
    pub(super) fn into_draft(self) -> AttributeDraft {
        AttributeDraft {
            name: self.name,
            slug: self.slug,
            attribute_type: self.attribute_type,
            unit: self.unit,
            default_filterable: self.default_filterable,
            default_searchable: self.default_searchable,
            sort_order: self.sort_order,
            enabled: self.enabled,
            options: self.options,
        }
    }
}
