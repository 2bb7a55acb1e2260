use chrono::{DateTime, Utc};

use crate::shared::domain::OverrideFlag;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

pub const INITIAL_VERSION: i32 = 1;

/// Fields for a new assignment of an attribute to a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAttributeDraft {
    pub category_id: String,
    pub attribute_id: String,
    pub required: bool,
    pub sort_order: i32,
    pub filterable: OverrideFlag,
    pub searchable: OverrideFlag,
    pub enabled: bool,
}

/// Mutable fields of an existing assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAttributeChanges {
    pub required: bool,
    pub sort_order: i32,
    pub filterable: OverrideFlag,
    pub searchable: OverrideFlag,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAttributeState {
    pub id: String,
    pub version: i32,
    pub category_id: String,
    pub attribute_id: String,
    pub required: bool,
    pub sort_order: i32,
    pub filterable: OverrideFlag,
    pub searchable: OverrideFlag,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// Assignment of one attribute to one category.
///
/// The attribute is referenced by id only. `filterable` and `searchable`
/// stay `Inherit` here; resolving them against the attribute defaults is a
/// presentation concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAttribute {
    id: String,
    version: i32,
    category_id: String,
    attribute_id: String,
    required: bool,
    sort_order: i32,
    filterable: OverrideFlag,
    searchable: OverrideFlag,
    enabled: bool,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl CategoryAttribute {
    pub fn create(id: String, draft: CategoryAttributeDraft, now: DateTime<Utc>) -> AppResult<Self> {
        Validator::validate_required("categoryId", &draft.category_id)?;
        Validator::validate_required("attributeId", &draft.attribute_id)?;
        Validator::validate_sort_order("sortOrder", draft.sort_order)?;

        Ok(Self {
            id,
            version: INITIAL_VERSION,
            category_id: draft.category_id,
            attribute_id: draft.attribute_id,
            required: draft.required,
            sort_order: draft.sort_order,
            filterable: draft.filterable,
            searchable: draft.searchable,
            enabled: draft.enabled,
            created_at: now,
            modified_at: now,
        })
    }

    pub fn reconstruct(state: CategoryAttributeState) -> Self {
        Self {
            id: state.id,
            version: state.version,
            category_id: state.category_id,
            attribute_id: state.attribute_id,
            required: state.required,
            sort_order: state.sort_order,
            filterable: state.filterable,
            searchable: state.searchable,
            enabled: state.enabled,
            created_at: state.created_at,
            modified_at: state.modified_at,
        }
    }

    /// Only `sort_order` can be invalid; the category and attribute are fixed
    pub fn update(&mut self, changes: CategoryAttributeChanges, now: DateTime<Utc>) -> AppResult<()> {
        Validator::validate_sort_order("sortOrder", changes.sort_order)?;

        self.required = changes.required;
        self.sort_order = changes.sort_order;
        self.filterable = changes.filterable;
        self.searchable = changes.searchable;
        self.enabled = changes.enabled;
        self.modified_at = now;

        Ok(())
    }

    pub fn belongs_to(&self, category_id: &str) -> bool {
        self.category_id == category_id
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn attribute_id(&self) -> &str {
        &self.attribute_id
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn sort_order(&self) -> i32 {
        self.sort_order
    }

    pub fn filterable(&self) -> OverrideFlag {
        self.filterable
    }

    pub fn searchable(&self) -> OverrideFlag {
        self.searchable
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    pub fn to_state(&self) -> CategoryAttributeState {
        CategoryAttributeState {
            id: self.id.clone(),
            version: self.version,
            category_id: self.category_id.clone(),
            attribute_id: self.attribute_id.clone(),
            required: self.required,
            sort_order: self.sort_order,
            filterable: self.filterable,
            searchable: self.searchable,
            enabled: self.enabled,
            created_at: self.created_at,
            modified_at: self.modified_at,
        }
    }
}
