use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRef, Path, Query as QueryParams, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use super::dto::{
    AttributeListParams, AttributeResponse, CreateAttributeRequest, UpdateAttributeRequest,
};
use crate::modules::attribute::application::{
    AttributeHandlers, CreateAttributeCommand, GetAttributeQuery, ListAttributesQuery,
    UpdateAttributeCommand,
};
use crate::shared::application::{PageResponse, Query, UseCase};
use crate::shared::errors::AppResult;

/// `/v1/attributes` endpoints, for any router state that can hand out
/// [`AttributeHandlers`]
pub fn routes<S>() -> Router<S>
where
    AttributeHandlers: FromRef<S>,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/v1/attributes",
            post(create_attribute)
                .get(list_attributes)
                .put(update_attribute),
        )
        .route("/v1/attributes/{id}", get(get_attribute))
}

async fn create_attribute(
    State(handlers): State<AttributeHandlers>,
    payload: Result<Json<CreateAttributeRequest>, JsonRejection>,
) -> AppResult<Json<AttributeResponse>> {
    let Json(request) = payload?;
    let created = handlers
        .create
        .execute(CreateAttributeCommand::from(request))
        .await?;
    Ok(Json(AttributeResponse::from(&created)))
}

async fn update_attribute(
    State(handlers): State<AttributeHandlers>,
    payload: Result<Json<UpdateAttributeRequest>, JsonRejection>,
) -> AppResult<Json<AttributeResponse>> {
    let Json(request) = payload?;
    let updated = handlers
        .update
        .execute(UpdateAttributeCommand::from(request))
        .await?;
    Ok(Json(AttributeResponse::from(&updated)))
}

async fn get_attribute(
    State(handlers): State<AttributeHandlers>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<AttributeResponse>> {
    let Path(id) = id?;
    let attribute = handlers.get.execute(GetAttributeQuery::new(id)).await?;
    Ok(Json(AttributeResponse::from(&attribute)))
}

async fn list_attributes(
    State(handlers): State<AttributeHandlers>,
    params: Result<QueryParams<AttributeListParams>, QueryRejection>,
) -> AppResult<Json<PageResponse<AttributeResponse>>> {
    let QueryParams(params) = params?;
    let page = handlers
        .list
        .execute(ListAttributesQuery::from(params))
        .await?;
    Ok(Json(PageResponse::from(page)))
}
