//! Item read, create, and update handlers.
//!
//! The `*_impl` functions hold the request logic and are shared by the axum
//! handlers below and the Lambda adapter.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use things_core::item::{
    parse_body, project_items, require_keys, require_pk, CreateItemRequest, ItemError, ItemView,
    MessageBody, UpdateItemRequest,
};

use crate::{handlers::AppError, state::AppState};

pub const ITEM_CREATED: &str = "Item created successfully";
pub const ITEM_UPDATED: &str = "Item updated successfully";

/// Query parameters for listing items.
#[derive(Debug, Default, Deserialize)]
pub struct ListItemsQuery {
    /// Keep only items whose `otherAttr` equals this value.
    #[serde(rename = "filterAttr")]
    pub filter_attr: Option<String>,
}

// ============================================================================
// List Items
// ============================================================================

/// List the items of a partition (GET /things/{pk}).
pub async fn list_items(
    State(state): State<AppState>,
    Path(pk): Path<String>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<ItemView>>, AppError> {
    let items =
        list_items_impl(&state, Some(pk.as_str()), query.filter_attr.as_deref()).await?;
    Ok(Json(items))
}

pub async fn list_items_impl(
    state: &AppState,
    pk: Option<&str>,
    filter_attr: Option<&str>,
) -> Result<Vec<ItemView>, ItemError> {
    let pk = require_pk(pk)?;

    let items = state.item_repo.query_items(pk).await?;
    let views = project_items(&items, filter_attr);

    tracing::debug!(
        pk,
        filter = filter_attr.unwrap_or_default(),
        queried = items.len(),
        returned = views.len(),
        "Listed items"
    );

    Ok(views)
}

// ============================================================================
// Create Item
// ============================================================================

/// Create or replace an item (POST /things).
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageBody>, AppError> {
    Ok(Json(create_item_impl(&state, &body).await?))
}

pub async fn create_item_impl(state: &AppState, body: &[u8]) -> Result<MessageBody, ItemError> {
    let request: CreateItemRequest = parse_body(body)?;
    let item = request.into_item()?;

    state.item_repo.put_item(&item).await?;

    tracing::info!(pk = %item.pk, sk = %item.sk, "Created item");

    Ok(MessageBody::new(ITEM_CREATED))
}

// ============================================================================
// Update Item
// ============================================================================

/// Overwrite the mutable attributes of an item (PUT /things/{pk}/{sk}).
pub async fn update_item(
    State(state): State<AppState>,
    Path((pk, sk)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<MessageBody>, AppError> {
    let message = update_item_impl(&state, Some(pk.as_str()), Some(sk.as_str()), &body).await?;
    Ok(Json(message))
}

pub async fn update_item_impl(
    state: &AppState,
    pk: Option<&str>,
    sk: Option<&str>,
    body: &[u8],
) -> Result<MessageBody, ItemError> {
    let (pk, sk) = require_keys(pk, sk)?;
    let request: UpdateItemRequest = parse_body(body)?;

    state
        .item_repo
        .update_item(pk, sk, &request.into_update())
        .await?;

    tracing::info!(pk, sk, "Updated item");

    Ok(MessageBody::new(ITEM_UPDATED))
}
