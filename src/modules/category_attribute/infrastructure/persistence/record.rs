use chrono::{DateTime, Utc};

/// Storage shape of an assignment. `None` in `filterable`/`searchable`
/// means the attribute default applies.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "postgres",
    derive(diesel::Queryable, diesel::Selectable, diesel::Insertable),
    diesel(table_name = crate::schema::category_attributes, check_for_backend(diesel::pg::Pg))
)]
pub struct CategoryAttributeRecord {
    pub id: String,
    pub version: i32,
    pub category_id: String,
    pub attribute_id: String,
    pub required: bool,
    pub sort_order: i32,
    pub filterable: Option<bool>,
    pub searchable: Option<bool>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}
