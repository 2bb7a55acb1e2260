/// Raw list request; every field is optional and defaults are applied by the handler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAttributesQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub enabled: Option<bool>,
    pub attribute_type: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}
