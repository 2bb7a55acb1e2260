use chrono::{DateTime, Utc};

/// Storage shape of an attribute, shared by every backend.
///
/// `attribute_type` is the wire name and `options` a JSON array, so the row
/// maps one-to-one onto the `attributes` table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "postgres",
    derive(diesel::Queryable, diesel::Selectable, diesel::Insertable),
    diesel(table_name = crate::schema::attributes, check_for_backend(diesel::pg::Pg))
)]
pub struct AttributeRecord {
    pub id: String,
    pub version: i32,
    pub name: String,
    pub slug: String,
    pub attribute_type: String,
    pub unit: Option<String>,
    pub default_filterable: bool,
    pub default_searchable: bool,
    pub sort_order: i32,
    pub enabled: bool,
    pub options: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}
