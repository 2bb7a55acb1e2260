use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use tokio::task;

use super::mapper::{to_domain, to_record};
use super::record::CategoryAttributeRecord;
use crate::modules::category_attribute::domain::{
    CategoryAttribute, CategoryAttributeListQuery, CategoryAttributeRepository,
    CategoryAttributeSortField,
};
use crate::schema::category_attributes;
use crate::shared::application::{PaginatedResult, SortDirection};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{violated_unique_constraint, Database};
use crate::shared::utils::logger::{LogContext, TimedOperation};

const PAIR_CONSTRAINT: &str = "category_attributes_category_attribute_key";
const PRIMARY_KEY_CONSTRAINT: &str = "category_attributes_pkey";

type BoxedAssignmentQuery = category_attributes::BoxedQuery<'static, Pg>;

pub struct PostgresCategoryAttributeRepository {
    db: Arc<Database>,
}

impl PostgresCategoryAttributeRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn map_insert_error(err: diesel::result::Error, record: &CategoryAttributeRecord) -> AppError {
        match violated_unique_constraint(&err) {
            Some(PAIR_CONSTRAINT) => AppError::AlreadyAssigned(format!(
                "Attribute {} is already assigned to category {}",
                record.attribute_id, record.category_id
            )),
            Some(PRIMARY_KEY_CONSTRAINT) => {
                AppError::Conflict(format!("Assignment with id {} already exists", record.id))
            }
            _ => AppError::from(err),
        }
    }

    fn filtered(query: &CategoryAttributeListQuery) -> BoxedAssignmentQuery {
        let mut boxed = category_attributes::table
            .filter(category_attributes::category_id.eq(query.category_id.clone()))
            .into_boxed();

        if let Some(enabled) = query.enabled {
            boxed = boxed.filter(category_attributes::enabled.eq(enabled));
        }
        // NULL (inherit) never equals a literal, so only explicit overrides match
        if let Some(filterable) = query.filterable {
            boxed = boxed.filter(category_attributes::filterable.eq(filterable));
        }

        boxed
    }

    fn ordered(
        boxed: BoxedAssignmentQuery,
        field: CategoryAttributeSortField,
        direction: SortDirection,
    ) -> BoxedAssignmentQuery {
        macro_rules! order_by {
            ($column:expr) => {
                match direction {
                    SortDirection::Asc => {
                        boxed.order_by(($column.asc(), category_attributes::id.asc()))
                    }
                    SortDirection::Desc => {
                        boxed.order_by(($column.desc(), category_attributes::id.asc()))
                    }
                }
            };
        }

        match field {
            CategoryAttributeSortField::SortOrder => order_by!(category_attributes::sort_order),
            CategoryAttributeSortField::Required => order_by!(category_attributes::required),
            CategoryAttributeSortField::CreatedAt => order_by!(category_attributes::created_at),
            CategoryAttributeSortField::ModifiedAt => order_by!(category_attributes::modified_at),
        }
    }
}

#[async_trait]
impl CategoryAttributeRepository for PostgresCategoryAttributeRepository {
    async fn insert(&self, assignment: &CategoryAttribute) -> AppResult<()> {
        let record = to_record(assignment);
        let db = Arc::clone(&self.db);
        let timer = TimedOperation::new("category_attributes.insert");

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::insert_into(category_attributes::table)
                .values(&record)
                .execute(&mut conn)
                .map_err(|e| Self::map_insert_error(e, &record))?;
            Ok(())
        })
        .await??;

        timer.finish();
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<CategoryAttribute>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        let record = task::spawn_blocking(move || -> AppResult<Option<CategoryAttributeRecord>> {
            let mut conn = db.get_connection()?;
            let record = category_attributes::table
                .find(&id)
                .select(CategoryAttributeRecord::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(record)
        })
        .await??;

        Ok(record.map(to_domain))
    }

    async fn find_by_category_and_attribute(
        &self,
        category_id: &str,
        attribute_id: &str,
    ) -> AppResult<Option<CategoryAttribute>> {
        let db = Arc::clone(&self.db);
        let category_id = category_id.to_string();
        let attribute_id = attribute_id.to_string();

        let record = task::spawn_blocking(move || -> AppResult<Option<CategoryAttributeRecord>> {
            let mut conn = db.get_connection()?;
            let record = category_attributes::table
                .filter(category_attributes::category_id.eq(&category_id))
                .filter(category_attributes::attribute_id.eq(&attribute_id))
                .select(CategoryAttributeRecord::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(record)
        })
        .await??;

        Ok(record.map(to_domain))
    }

    async fn find_list(
        &self,
        query: &CategoryAttributeListQuery,
    ) -> AppResult<PaginatedResult<CategoryAttribute>> {
        let db = Arc::clone(&self.db);
        let query = query.clone();
        let pagination = query.pagination;
        let timer = TimedOperation::new("category_attributes.find_list");

        let (records, total) =
            task::spawn_blocking(move || -> AppResult<(Vec<CategoryAttributeRecord>, i64)> {
                let mut conn = db.get_connection()?;

                let total = Self::filtered(&query)
                    .count()
                    .get_result::<i64>(&mut conn)?;

                let records = Self::ordered(Self::filtered(&query), query.sort, query.order)
                    .select(CategoryAttributeRecord::as_select())
                    .offset(pagination.offset())
                    .limit(pagination.limit())
                    .load(&mut conn)?;

                Ok((records, total))
            })
            .await??;

        timer.finish_with_info(&format!("{} of {}", records.len(), total));

        let items = records.into_iter().map(to_domain).collect();
        Ok(PaginatedResult::new(items, total as u64, &pagination))
    }

    async fn update(&self, assignment: &CategoryAttribute) -> AppResult<CategoryAttribute> {
        let record = to_record(assignment);
        let db = Arc::clone(&self.db);
        let timer = TimedOperation::new("category_attributes.update");

        let stored = task::spawn_blocking(move || -> AppResult<CategoryAttributeRecord> {
            let mut conn = db.get_connection()?;
            let expected_version = record.version;

            let updated = diesel::update(
                category_attributes::table
                    .filter(category_attributes::id.eq(&record.id))
                    .filter(category_attributes::version.eq(expected_version)),
            )
            .set((
                category_attributes::required.eq(record.required),
                category_attributes::sort_order.eq(record.sort_order),
                category_attributes::filterable.eq(record.filterable),
                category_attributes::searchable.eq(record.searchable),
                category_attributes::enabled.eq(record.enabled),
                category_attributes::modified_at.eq(record.modified_at),
                category_attributes::version.eq(expected_version + 1),
            ))
            .returning(CategoryAttributeRecord::as_returning())
            .get_result(&mut conn)
            .optional()?;

            if let Some(updated) = updated {
                return Ok(updated);
            }

            let still_there = diesel::select(diesel::dsl::exists(
                category_attributes::table.find(&record.id),
            ))
            .get_result::<bool>(&mut conn)?;
            if still_there {
                Err(AppError::OptimisticLockConflict(format!(
                    "Assignment {} was modified concurrently",
                    record.id
                )))
            } else {
                Err(AppError::NotFound(format!(
                    "Assignment with id {} not found",
                    record.id
                )))
            }
        })
        .await?
        .inspect_err(|e| {
            if !e.is_client_error() {
                LogContext::error_with_context(e, "Assignment update failed");
            }
        })?;

        timer.finish();
        Ok(to_domain(stored))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();
        let timer = TimedOperation::new("category_attributes.delete");

        let (id, deleted) = task::spawn_blocking(move || -> AppResult<(String, usize)> {
            let mut conn = db.get_connection()?;
            let deleted =
                diesel::delete(category_attributes::table.find(&id)).execute(&mut conn)?;
            Ok((id, deleted))
        })
        .await??;

        timer.finish();
        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "Assignment with id {} not found",
                id
            )));
        }
        Ok(())
    }
}
