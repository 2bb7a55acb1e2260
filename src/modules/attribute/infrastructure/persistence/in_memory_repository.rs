use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::mapper::{to_domain, to_record};
use super::record::AttributeRecord;
use crate::modules::attribute::domain::{
    Attribute, AttributeListQuery, AttributeRepository, AttributeSortField,
};
use crate::shared::application::PaginatedResult;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Default)]
struct AttributeStore {
    rows: HashMap<String, AttributeRecord>,
    /// Unique slug index
    slugs: HashMap<String, String>,
}

/// Process-local attribute store.
///
/// Uniqueness and version checks run under the write lock, which gives the
/// same guarantees as the unique index and conditional UPDATE in Postgres.
#[derive(Debug, Default)]
pub struct InMemoryAttributeRepository {
    store: RwLock<AttributeStore>,
}

impl InMemoryAttributeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn compare(a: &AttributeRecord, b: &AttributeRecord, field: AttributeSortField) -> Ordering {
        match field {
            AttributeSortField::Name => a.name.cmp(&b.name),
            AttributeSortField::Slug => a.slug.cmp(&b.slug),
            AttributeSortField::Type => a.attribute_type.cmp(&b.attribute_type),
            AttributeSortField::SortOrder => a.sort_order.cmp(&b.sort_order),
            AttributeSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            AttributeSortField::ModifiedAt => a.modified_at.cmp(&b.modified_at),
        }
    }
}

#[async_trait]
impl AttributeRepository for InMemoryAttributeRepository {
    async fn insert(&self, attribute: &Attribute) -> AppResult<()> {
        let record = to_record(attribute)?;
        let mut store = self.store.write().await;

        if store.rows.contains_key(&record.id) {
            return Err(AppError::Conflict(format!(
                "Attribute with id {} already exists",
                record.id
            )));
        }
        if store.slugs.contains_key(&record.slug) {
            return Err(AppError::SlugAlreadyExists(record.slug));
        }

        store.slugs.insert(record.slug.clone(), record.id.clone());
        store.rows.insert(record.id.clone(), record);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Attribute>> {
        let record = self.store.read().await.rows.get(id).cloned();
        record.map(to_domain).transpose()
    }

    async fn exists(&self, id: &str) -> AppResult<bool> {
        Ok(self.store.read().await.rows.contains_key(id))
    }

    async fn find_list(&self, query: &AttributeListQuery) -> AppResult<PaginatedResult<Attribute>> {
        let store = self.store.read().await;

        let mut matching: Vec<&AttributeRecord> = store
            .rows
            .values()
            .filter(|r| query.enabled.is_none_or(|enabled| r.enabled == enabled))
            .filter(|r| {
                query
                    .attribute_type
                    .is_none_or(|t| r.attribute_type == t.as_str())
            })
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
            .collect::<AppResult<Vec<_>>>()?;

        Ok(PaginatedResult::new(items, total, &query.pagination))
    }

    async fn update(&self, attribute: &Attribute) -> AppResult<Attribute> {
        let record = to_record(attribute)?;
        let mut store = self.store.write().await;

        let Some(current) = store.rows.get(&record.id) else {
            return Err(AppError::NotFound(format!(
                "Attribute with id {} not found",
                record.id
            )));
        };
        if current.version != record.version {
            return Err(AppError::OptimisticLockConflict(format!(
                "Attribute {} was modified concurrently",
                record.id
            )));
        }
        if let Some(owner) = store.slugs.get(&record.slug) {
            if *owner != record.id {
                return Err(AppError::SlugAlreadyExists(record.slug));
            }
        }

        let previous_slug = current.slug.clone();
        let stored = AttributeRecord {
            version: current.version + 1,
            created_at: current.created_at,
            ..record
        };

        if previous_slug != stored.slug {
            store.slugs.remove(&previous_slug);
            store.slugs.insert(stored.slug.clone(), stored.id.clone());
        }
        store.rows.insert(stored.id.clone(), stored.clone());

        to_domain(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::attribute::domain::{AttributeDraft, AttributeType};
    use crate::shared::application::{PaginationParams, SortDirection};
    use chrono::{Duration, TimeZone, Utc};
    use uuid::Uuid;

    fn attribute(slug: &str, sort_order: i32) -> Attribute {
        Attribute::create(
            Uuid::new_v4().to_string(),
            AttributeDraft {
                name: slug.to_uppercase(),
                slug: slug.to_string(),
                attribute_type: "select".to_string(),
                unit: None,
                default_filterable: false,
                default_searchable: false,
                sort_order,
                enabled: true,
                options: vec![],
            },
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
        .unwrap()
    }

    fn renamed(attribute: &Attribute, slug: &str) -> Attribute {
        let mut changed = attribute.clone();
        changed
            .update(
                AttributeDraft {
                    name: attribute.name().to_string(),
                    slug: slug.to_string(),
                    attribute_type: attribute.attribute_type().to_string(),
                    unit: None,
                    default_filterable: false,
                    default_searchable: false,
                    sort_order: attribute.sort_order(),
                    enabled: attribute.enabled(),
                    options: vec![],
                },
                attribute.modified_at() + Duration::seconds(1),
            )
            .unwrap();
        changed
    }

    #[tokio::test]
    async fn test_insert_enforces_unique_slug_and_id() {
        let repo = InMemoryAttributeRepository::new();
        let color = attribute("color", 0);
        repo.insert(&color).await.unwrap();

        let err = repo.insert(&attribute("color", 1)).await.unwrap_err();
        assert_eq!(err, AppError::SlugAlreadyExists("color".to_string()));

        let err = repo.insert(&color).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert!(repo.exists(color.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_is_compare_and_swap() {
        let repo = InMemoryAttributeRepository::new();
        let color = attribute("color", 0);
        repo.insert(&color).await.unwrap();

        let updated = repo.update(&renamed(&color, "colour")).await.unwrap();
        assert_eq!(updated.version(), 2);
        assert_eq!(updated.created_at(), color.created_at());

        // Same expected version again: the first writer already moved it to 2
        let err = repo.update(&renamed(&color, "hue")).await.unwrap_err();
        assert!(matches!(err, AppError::OptimisticLockConflict(_)));

        let stored = repo.find_by_id(color.id()).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_releases_and_claims_slugs() {
        let repo = InMemoryAttributeRepository::new();
        let color = attribute("color", 0);
        let size = attribute("size", 1);
        repo.insert(&color).await.unwrap();
        repo.insert(&size).await.unwrap();

        let err = repo.update(&renamed(&size, "color")).await.unwrap_err();
        assert_eq!(err, AppError::SlugAlreadyExists("color".to_string()));

        repo.update(&renamed(&color, "colour")).await.unwrap();
        // "color" is free again
        repo.insert(&attribute("color", 2)).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = InMemoryAttributeRepository::new();
        let err = repo.update(&attribute("ghost", 0)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_find_list_filters_sorts_and_pages() {
        let repo = InMemoryAttributeRepository::new();
        for (slug, order) in [("a", 3), ("b", 1), ("c", 2), ("d", 1)] {
            repo.insert(&attribute(slug, order)).await.unwrap();
        }

        let query = AttributeListQuery {
            pagination: PaginationParams::new(1, 3),
            ..Default::default()
        };
        let page = repo.find_list(&query).await.unwrap();
        assert_eq!(page.total_count, 4);
        assert_eq!(page.total_pages, 2);
        let orders: Vec<i32> = page.items.iter().map(|a| a.sort_order()).collect();
        assert_eq!(orders, vec![1, 1, 2]);
        // Tie on sort_order 1 is broken by id
        assert!(page.items[0].id() < page.items[1].id());

        let query = AttributeListQuery {
            sort: AttributeSortField::Slug,
            order: SortDirection::Desc,
            ..Default::default()
        };
        let slugs: Vec<String> = repo
            .find_list(&query)
            .await
            .unwrap()
            .items
            .iter()
            .map(|a| a.slug().to_string())
            .collect();
        assert_eq!(slugs, vec!["d", "c", "b", "a"]);

        let query = AttributeListQuery {
            attribute_type: Some(AttributeType::Text),
            ..Default::default()
        };
        assert_eq!(repo.find_list(&query).await.unwrap().total_count, 0);

        let query = AttributeListQuery {
            enabled: Some(true),
            pagination: PaginationParams::new(3, 2),
            ..Default::default()
        };
        let page = repo.find_list(&query).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 4);
    }
}
