use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use tokio::task;

use super::mapper::{to_domain, to_record};
use super::record::AttributeRecord;
use crate::modules::attribute::domain::{
    Attribute, AttributeListQuery, AttributeRepository, AttributeSortField,
};
use crate::schema::attributes;
use crate::shared::application::{PaginatedResult, SortDirection};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{violated_unique_constraint, Database};
use crate::shared::utils::logger::{LogContext, TimedOperation};

const SLUG_CONSTRAINT: &str = "attributes_slug_key";
const PRIMARY_KEY_CONSTRAINT: &str = "attributes_pkey";

type BoxedAttributeQuery = attributes::BoxedQuery<'static, Pg>;

pub struct PostgresAttributeRepository {
    db: Arc<Database>,
}

impl PostgresAttributeRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn map_write_error(err: diesel::result::Error, record: &AttributeRecord) -> AppError {
        match violated_unique_constraint(&err) {
            Some(SLUG_CONSTRAINT) => AppError::SlugAlreadyExists(record.slug.clone()),
            Some(PRIMARY_KEY_CONSTRAINT) => {
                AppError::Conflict(format!("Attribute with id {} already exists", record.id))
            }
            _ => AppError::from(err),
        }
    }

    fn filtered(query: &AttributeListQuery) -> BoxedAttributeQuery {
        let mut boxed = attributes::table.into_boxed();

        if let Some(enabled) = query.enabled {
            boxed = boxed.filter(attributes::enabled.eq(enabled));
        }
        if let Some(attribute_type) = query.attribute_type {
            boxed = boxed.filter(attributes::attribute_type.eq(attribute_type.as_str()));
        }

        boxed
    }

    /// Primary order from the query, then id ascending so pages are stable
    fn ordered(
        boxed: BoxedAttributeQuery,
        field: AttributeSortField,
        direction: SortDirection,
    ) -> BoxedAttributeQuery {
        macro_rules! order_by {
            ($column:expr) => {
                match direction {
                    SortDirection::Asc => boxed.order_by(($column.asc(), attributes::id.asc())),
                    SortDirection::Desc => boxed.order_by(($column.desc(), attributes::id.asc())),
                }
            };
        }

        match field {
            AttributeSortField::Name => order_by!(attributes::name),
            AttributeSortField::Slug => order_by!(attributes::slug),
            AttributeSortField::Type => order_by!(attributes::attribute_type),
            AttributeSortField::SortOrder => order_by!(attributes::sort_order),
            AttributeSortField::CreatedAt => order_by!(attributes::created_at),
            AttributeSortField::ModifiedAt => order_by!(attributes::modified_at),
        }
    }
}

#[async_trait]
impl AttributeRepository for PostgresAttributeRepository {
    async fn insert(&self, attribute: &Attribute) -> AppResult<()> {
        let record = to_record(attribute)?;
        let db = Arc::clone(&self.db);
        let timer = TimedOperation::new("attributes.insert");

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::insert_into(attributes::table)
                .values(&record)
                .execute(&mut conn)
                .map_err(|e| Self::map_write_error(e, &record))?;
            Ok(())
        })
        .await??;

        timer.finish();
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Attribute>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        let record = task::spawn_blocking(move || -> AppResult<Option<AttributeRecord>> {
            let mut conn = db.get_connection()?;
            let record = attributes::table
                .find(&id)
                .select(AttributeRecord::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(record)
        })
        .await??;

        record.map(to_domain).transpose()
    }

    async fn exists(&self, id: &str) -> AppResult<bool> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let found = diesel::select(diesel::dsl::exists(attributes::table.find(&id)))
                .get_result::<bool>(&mut conn)?;
            Ok(found)
        })
        .await?
    }

    async fn find_list(&self, query: &AttributeListQuery) -> AppResult<PaginatedResult<Attribute>> {
        let db = Arc::clone(&self.db);
        let query = query.clone();
        let pagination = query.pagination;
        let timer = TimedOperation::new("attributes.find_list");

        let (records, total) =
            task::spawn_blocking(move || -> AppResult<(Vec<AttributeRecord>, i64)> {
                let mut conn = db.get_connection()?;

                let total = Self::filtered(&query)
                    .count()
                    .get_result::<i64>(&mut conn)?;

                let records = Self::ordered(Self::filtered(&query), query.sort, query.order)
                    .select(AttributeRecord::as_select())
                    .offset(pagination.offset())
                    .limit(pagination.limit())
                    .load(&mut conn)?;

                Ok((records, total))
            })
            .await??;

        timer.finish_with_info(&format!("{} of {}", records.len(), total));

        let items = records
            .into_iter()
            .map(to_domain)
            .collect::<AppResult<Vec<_>>>()?;
        Ok(PaginatedResult::new(items, total as u64, &pagination))
    }

    async fn update(&self, attribute: &Attribute) -> AppResult<Attribute> {
        let record = to_record(attribute)?;
        let db = Arc::clone(&self.db);
        let timer = TimedOperation::new("attributes.update");

        let stored = task::spawn_blocking(move || -> AppResult<AttributeRecord> {
            let mut conn = db.get_connection()?;
            let expected_version = record.version;

            let updated = diesel::update(
                attributes::table
                    .filter(attributes::id.eq(&record.id))
                    .filter(attributes::version.eq(expected_version)),
            )
            .set((
                attributes::name.eq(&record.name),
                attributes::slug.eq(&record.slug),
                attributes::attribute_type.eq(&record.attribute_type),
                attributes::unit.eq(&record.unit),
                attributes::default_filterable.eq(record.default_filterable),
                attributes::default_searchable.eq(record.default_searchable),
                attributes::sort_order.eq(record.sort_order),
                attributes::enabled.eq(record.enabled),
                attributes::options.eq(&record.options),
                attributes::modified_at.eq(record.modified_at),
                attributes::version.eq(expected_version + 1),
            ))
            .returning(AttributeRecord::as_returning())
            .get_result(&mut conn)
            .optional()
            .map_err(|e| Self::map_write_error(e, &record))?;

            if let Some(updated) = updated {
                return Ok(updated);
            }

            // Nothing matched: either the row is gone or its version moved
            let still_there = diesel::select(diesel::dsl::exists(attributes::table.find(&record.id)))
                .get_result::<bool>(&mut conn)?;
            if still_there {
                Err(AppError::OptimisticLockConflict(format!(
                    "Attribute {} was modified concurrently",
                    record.id
                )))
            } else {
                Err(AppError::NotFound(format!(
                    "Attribute with id {} not found",
                    record.id
                )))
            }
        })
        .await?
        .inspect_err(|e| {
            if !e.is_client_error() {
                LogContext::error_with_context(e, "Attribute update failed");
            }
        })?;

        timer.finish();
        to_domain(stored)
    }
}
