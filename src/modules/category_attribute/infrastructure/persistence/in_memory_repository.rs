use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::mapper::{to_domain, to_record};
use super::record::CategoryAttributeRecord;
use crate::modules::category_attribute::domain::{
    CategoryAttribute, CategoryAttributeListQuery, CategoryAttributeRepository,
    CategoryAttributeSortField,
};
use crate::shared::application::PaginatedResult;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Default)]
struct AssignmentStore {
    rows: HashMap<String, CategoryAttributeRecord>,
    /// Unique (category, attribute) index
    pairs: HashMap<(String, String), String>,
}

/// Process-local assignment store; all checks run under the write lock
#[derive(Debug, Default)]
pub struct InMemoryCategoryAttributeRepository {
    store: RwLock<AssignmentStore>,
}

impl InMemoryCategoryAttributeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn compare(
        a: &CategoryAttributeRecord,
        b: &CategoryAttributeRecord,
        field: CategoryAttributeSortField,
    ) -> Ordering {
        match field {
            CategoryAttributeSortField::SortOrder => a.sort_order.cmp(&b.sort_order),
            CategoryAttributeSortField::Required => a.required.cmp(&b.required),
            CategoryAttributeSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            CategoryAttributeSortField::ModifiedAt => a.modified_at.cmp(&b.modified_at),
        }
    }
}

#[async_trait]
impl CategoryAttributeRepository for InMemoryCategoryAttributeRepository {
    async fn insert(&self, assignment: &CategoryAttribute) -> AppResult<()> {
        let record = to_record(assignment);
        let mut store = self.store.write().await;

        if store.rows.contains_key(&record.id) {
            return Err(AppError::Conflict(format!(
                "Assignment with id {} already exists",
                record.id
            )));
        }
        let key = (record.category_id.clone(), record.attribute_id.clone());
        if store.pairs.contains_key(&key) {
            return Err(AppError::AlreadyAssigned(format!(
                "Attribute {} is already assigned to category {}",
                record.attribute_id, record.category_id
            )));
        }

        store.pairs.insert(key, record.id.clone());
        store.rows.insert(record.id.clone(), record);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<CategoryAttribute>> {
        Ok(self.store.read().await.rows.get(id).cloned().map(to_domain))
    }

    async fn find_by_category_and_attribute(
        &self,
        category_id: &str,
        attribute_id: &str,
    ) -> AppResult<Option<CategoryAttribute>> {
        let store = self.store.read().await;
        let found = store
            .pairs
            .get(&(category_id.to_string(), attribute_id.to_string()))
            .and_then(|id| store.rows.get(id))
            .cloned()
            .map(to_domain);
        Ok(found)
    }

    async fn find_list(
        &self,
        query: &CategoryAttributeListQuery,
    ) -> AppResult<PaginatedResult<CategoryAttribute>> {
        let store = self.store.read().await;

        let mut matching: Vec<&CategoryAttributeRecord> = store
            .rows
            .values()
            .filter(|r| r.category_id == query.category_id)
            .filter(|r| query.enabled.is_none_or(|enabled| r.enabled == enabled))
            .filter(|r| query.filterable.is_none_or(|f| r.filterable == Some(f)))
            .collect();

        matching.sort_by(|a, b| {
            query
                .order
                .apply(Self::compare(a, b, query.sort))
                .then_with(|| a.id.cmp(&b.id))
        });

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(query.pagination.offset() as usize)
            .take(query.pagination.limit() as usize)
            .cloned()
            .map(to_domain)
            .collect();

        Ok(PaginatedResult::new(items, total, &query.pagination))
    }

    async fn update(&self, assignment: &CategoryAttribute) -> AppResult<CategoryAttribute> {
        let record = to_record(assignment);
        let mut store = self.store.write().await;

        let Some(current) = store.rows.get(&record.id) else {
            return Err(AppError::NotFound(format!(
                "Assignment with id {} not found",
                record.id
            )));
        };
        if current.version != record.version {
            return Err(AppError::OptimisticLockConflict(format!(
                "Assignment {} was modified concurrently",
                record.id
            )));
        }

        // The natural key is immutable
        let stored = CategoryAttributeRecord {
            version: current.version + 1,
            category_id: current.category_id.clone(),
            attribute_id: current.attribute_id.clone(),
            created_at: current.created_at,
            ..record
        };
        store.rows.insert(stored.id.clone(), stored.clone());

        Ok(to_domain(stored))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut store = self.store.write().await;

        let Some(removed) = store.rows.remove(id) else {
            return Err(AppError::NotFound(format!(
                "Assignment with id {} not found",
                id
            )));
        };
        store
            .pairs
            .remove(&(removed.category_id, removed.attribute_id));
        Ok(())
    }
}
