//! Translation handler with a per-item, per-language cache.
//!
//! A translation is computed on the first request for a language and stored on
//! the item. Later requests for the same language are served from the item
//! without calling the translation service.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use things_core::item::{
    require_keys, require_language, ItemError, TranslationView, ITEM_NOT_FOUND,
};
use things_core::translation::{lookup_cached, CacheLookup};

use crate::{handlers::AppError, state::AppState};

/// Query parameters for the translation endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TranslationQuery {
    /// Target language code, e.g. `fr`.
    pub language: Option<String>,
}

/// Translate an item's description (GET /things/{pk}/{sk}/translation).
pub async fn get_translation(
    State(state): State<AppState>,
    Path((pk, sk)): Path<(String, String)>,
    Query(query): Query<TranslationQuery>,
) -> Result<Json<TranslationView>, AppError> {
    let view = get_translation_impl(
        &state,
        Some(pk.as_str()),
        Some(sk.as_str()),
        query.language.as_deref(),
    )
    .await?;
    Ok(Json(view))
}

pub async fn get_translation_impl(
    state: &AppState,
    pk: Option<&str>,
    sk: Option<&str>,
    language: Option<&str>,
) -> Result<TranslationView, ItemError> {
    let (pk, sk) = require_keys(pk, sk)?;
    let language = require_language(language)?;

    let item = state
        .item_repo
        .get_item(pk, sk)
        .await?
        .ok_or_else(|| ItemError::not_found(ITEM_NOT_FOUND))?;

    if let CacheLookup::Hit(text) = lookup_cached(&item, language) {
        tracing::debug!(pk, sk, language, cached = true, "Served cached translation");

        return Ok(TranslationView {
            pk: pk.to_string(),
            sk: sk.to_string(),
            original_description: item.description.clone(),
            translated_text: text.to_string(),
            cached: true,
        });
    }

    let translated_text = state
        .translator
        .translate(&item.description, language)
        .await?;

    // Concurrent misses for the same language may both land here; the last
    // write wins.
    state
        .item_repo
        .put_translation(pk, sk, language, &translated_text)
        .await?;

    tracing::info!(pk, sk, language, cached = false, "Stored new translation");

    Ok(TranslationView {
        pk: pk.to_string(),
        sk: sk.to_string(),
        original_description: item.description,
        translated_text,
        cached: false,
    })
}
