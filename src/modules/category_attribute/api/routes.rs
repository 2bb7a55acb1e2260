use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRef, Path, Query as QueryParams, State};
use axum::http::StatusCode;
use axum::routing::{delete, post};
use axum::{Json, Router};

use super::dto::{
    AssignAttributeRequest, CategoryAttributeListParams, CategoryAttributeResponse,
    UpdateCategoryAttributeRequest,
};
use crate::modules::category_attribute::application::{
    AssignAttributeCommand, CategoryAttributeHandlers, ListCategoryAttributesQuery,
    UnassignAttributeCommand,
};
use crate::shared::application::{PageResponse, Query, UseCase};
use crate::shared::errors::AppResult;

pub fn routes<S>() -> Router<S>
where
    CategoryAttributeHandlers: FromRef<S>,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/v1/categories/{category_id}/attributes",
            post(assign_attribute)
                .get(list_category_attributes)
                .put(update_category_attribute),
        )
        .route(
            "/v1/categories/{category_id}/attributes/{assignment_id}",
            delete(unassign_attribute),
        )
}

async fn assign_attribute(
    State(handlers): State<CategoryAttributeHandlers>,
    category_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<AssignAttributeRequest>, JsonRejection>,
) -> AppResult<Json<CategoryAttributeResponse>> {
    let Path(category_id) = category_id?;
    let Json(request) = payload?;

    let assignment = handlers
        .assign
        .execute(AssignAttributeCommand {
            id: request.id,
            category_id,
            attribute_id: request.attribute_id,
            required: request.required,
            sort_order: request.sort_order,
            filterable: request.filterable,
            searchable: request.searchable,
            enabled: request.enabled,
        })
        .await?;
    Ok(Json(CategoryAttributeResponse::from(&assignment)))
}

async fn update_category_attribute(
    State(handlers): State<CategoryAttributeHandlers>,
    category_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateCategoryAttributeRequest>, JsonRejection>,
) -> AppResult<Json<CategoryAttributeResponse>> {
    let Path(category_id) = category_id?;
    let Json(request) = payload?;

    let updated = handlers
        .update
        .execute(request.into_command(category_id))
        .await?;
    Ok(Json(CategoryAttributeResponse::from(&updated)))
}

async fn unassign_attribute(
    State(handlers): State<CategoryAttributeHandlers>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path((category_id, assignment_id)) = path?;
    handlers
        .unassign
        .execute(UnassignAttributeCommand::new(assignment_id, category_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_category_attributes(
    State(handlers): State<CategoryAttributeHandlers>,
    category_id: Result<Path<String>, PathRejection>,
    params: Result<QueryParams<CategoryAttributeListParams>, QueryRejection>,
) -> AppResult<Json<PageResponse<CategoryAttributeResponse>>> {
    let Path(category_id) = category_id?;
    let QueryParams(params) = params?;

    let page = handlers
        .list
        .execute(ListCategoryAttributesQuery {
            category_id,
            page: params.page,
            size: params.size,
            enabled: params.enabled,
            filterable: params.filterable,
            sort: params.sort,
            order: params.order,
        })
        .await?;
    Ok(Json(PageResponse::from(page)))
}
