/// Raw list request for one category; defaults are applied by the handler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCategoryAttributesQuery {
    pub category_id: String,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub enabled: Option<bool>,
    pub filterable: Option<bool>,
    pub sort: Option<String>,
    pub order: Option<String>,
}
