/// Attribute Aggregate Root
///
/// A reusable product attribute definition (color, size, ...) together with
/// its ordered list of enumerated options. All mutation goes through
/// [`Attribute::create`] and [`Attribute::update`], which validate the whole
/// draft before touching any field.
use chrono::{DateTime, Utc};

use super::value_objects::{attribute_option::validate_options, AttributeOption, AttributeType};
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

pub const INITIAL_VERSION: i32 = 1;

/// Caller-supplied fields for creating or replacing an attribute.
///
/// `attribute_type` stays a raw string so the type check runs in its place
/// in the validation order instead of failing at deserialization.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDraft {
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

/// Persisted state, loaded without validation
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeState {
    pub id: String,
    pub version: i32,
    pub name: String,
    pub slug: String,
    pub attribute_type: AttributeType,
    pub unit: Option<String>,
    pub default_filterable: bool,
    pub default_searchable: bool,
    pub sort_order: i32,
    pub enabled: bool,
    pub options: Vec<AttributeOption>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    id: String,
    version: i32,
    name: String,
    slug: String,
    attribute_type: AttributeType,
    unit: Option<String>,
    default_filterable: bool,
    default_searchable: bool,
    sort_order: i32,
    enabled: bool,
    options: Vec<AttributeOption>,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl Attribute {
    /// Validate `draft` and build a fresh attribute at version 1
    pub fn create(id: String, draft: AttributeDraft, now: DateTime<Utc>) -> AppResult<Self> {
        let attribute_type = Self::validate(&draft)?;

        Ok(Self {
            id,
            version: INITIAL_VERSION,
            name: draft.name,
            slug: draft.slug,
            attribute_type,
            unit: draft.unit,
            default_filterable: draft.default_filterable,
            default_searchable: draft.default_searchable,
            sort_order: draft.sort_order,
            enabled: draft.enabled,
            options: draft.options,
            created_at: now,
            modified_at: now,
        })
    }

    /// Rebuild from trusted storage
    pub fn reconstruct(state: AttributeState) -> Self {
        Self {
            id: state.id,
            version: state.version,
            name: state.name,
            slug: state.slug,
            attribute_type: state.attribute_type,
            unit: state.unit,
            default_filterable: state.default_filterable,
            default_searchable: state.default_searchable,
            sort_order: state.sort_order,
            enabled: state.enabled,
            options: state.options,
            created_at: state.created_at,
            modified_at: state.modified_at,
        }
    }

    /// Replace every mutable field, or none of them if `draft` is invalid.
    ///
    /// Leaves `id`, `version` and `created_at` alone; the repository owns
    /// the version bump.
    pub fn update(&mut self, draft: AttributeDraft, now: DateTime<Utc>) -> AppResult<()> {
        let attribute_type = Self::validate(&draft)?;

        self.name = draft.name;
        self.slug = draft.slug;
        self.attribute_type = attribute_type;
        self.unit = draft.unit;
        self.default_filterable = draft.default_filterable;
        self.default_searchable = draft.default_searchable;
        self.sort_order = draft.sort_order;
        self.enabled = draft.enabled;
        self.options = draft.options;
        self.modified_at = now;

        Ok(())
    }

    fn validate(draft: &AttributeDraft) -> AppResult<AttributeType> {
        Validator::validate_name("name", &draft.name)?;
        Validator::validate_slug("slug", &draft.slug)?;
        let attribute_type = draft.attribute_type.parse::<AttributeType>()?;
        Validator::validate_sort_order("sortOrder", draft.sort_order)?;
        validate_options(&draft.options)?;
        Ok(attribute_type)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn attribute_type(&self) -> AttributeType {
        self.attribute_type
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn default_filterable(&self) -> bool {
        self.default_filterable
    }

    pub fn default_searchable(&self) -> bool {
        self.default_searchable
    }

    pub fn sort_order(&self) -> i32 {
        self.sort_order
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn options(&self) -> &[AttributeOption] {
        &self.options
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// Snapshot of every field, for persistence mappers
    pub fn to_state(&self) -> AttributeState {
        AttributeState {
            id: self.id.clone(),
            version: self.version,
            name: self.name.clone(),
            slug: self.slug.clone(),
            attribute_type: self.attribute_type,
            unit: self.unit.clone(),
            default_filterable: self.default_filterable,
            default_searchable: self.default_searchable,
            sort_order: self.sort_order,
            enabled: self.enabled,
            options: self.options.clone(),
            created_at: self.created_at,
            modified_at: self.modified_at,
        }
    }
}
