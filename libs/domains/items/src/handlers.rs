use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AppError, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestValidationResponse, BusinessRuleResponse, InternalServerErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::messages::MessageId;
use crate::models::{
    GroupOption, Item, ItemConfirmation, ItemForm, ItemGroup, ItemSearchCriteria, ItemSearchForm,
    Page,
};
use crate::repository::ItemRepository;
use crate::service::{ItemRegistService, ItemSearchService};

/// OpenAPI documentation for the items API
#[derive(OpenApi)]
#[openapi(
    paths(regist_item, confirm_item, search_items, list_groups),
    components(
        schemas(Item, ItemForm, ItemConfirmation, GroupOption, MessageId),
        responses(
            BadRequestValidationResponse,
            BusinessRuleResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Item registration and search")
    )
)]
pub struct ApiDoc;

/// Services shared by the item handlers
pub struct ItemsState<R: ItemRepository> {
    pub regist: ItemRegistService<R>,
    pub search: ItemSearchService<R>,
}

/// Create the items router
pub fn router<R: ItemRepository + 'static>(
    regist: ItemRegistService<R>,
    search: ItemSearchService<R>,
) -> Router {
    let state = Arc::new(ItemsState { regist, search });

    Router::new()
        .route("/", post(regist_item::<R>))
        .route("/confirm", post(confirm_item))
        .route("/search", get(search_items::<R>))
        .route("/groups", get(list_groups))
        .with_state(state)
}

/// Register a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = ItemForm,
    responses(
        (status = 201, description = "Item registered", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 422, response = BusinessRuleResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn regist_item<R: ItemRepository>(
    State(state): State<Arc<ItemsState<R>>>,
    ValidatedJson(form): ValidatedJson<ItemForm>,
) -> Result<impl IntoResponse, AppError> {
    let item = Item::try_from(form)?;
    state.regist.regist_item(&item).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Validate a registration form without storing it
///
/// Echoes the form with the label of its group.
#[utoipa::path(
    post,
    path = "/confirm",
    tag = "Items",
    request_body = ItemForm,
    responses(
        (status = 200, description = "Form is valid", body = ItemConfirmation),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn confirm_item(
    ValidatedJson(form): ValidatedJson<ItemForm>,
) -> Result<Json<ItemConfirmation>, AppError> {
    Ok(Json(ItemConfirmation::from(form)))
}

/// Search items by name fragment and price
#[utoipa::path(
    get,
    path = "/search",
    tag = "Items",
    params(ItemSearchForm),
    responses(
        (status = 200, description = "One page of matching items", body = Page<Item>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 422, response = BusinessRuleResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_items<R: ItemRepository>(
    State(state): State<Arc<ItemsState<R>>>,
    ValidatedQuery(form): ValidatedQuery<ItemSearchForm>,
) -> Result<Json<Page<Item>>, AppError> {
    let criteria = ItemSearchCriteria::from(form);
    let page = state.search.find_all(&criteria).await?;
    Ok(Json(page))
}

/// Item groups selectable at registration
#[utoipa::path(
    get,
    path = "/groups",
    tag = "Items",
    responses(
        (status = 200, description = "Known item groups", body = Vec<GroupOption>)
    )
)]
async fn list_groups() -> Json<Vec<GroupOption>> {
    Json(ItemGroup::options())
}
