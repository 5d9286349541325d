//! Request payloads for the item endpoints.
//!
//! Bodies are parsed from raw bytes so the HTTP and Lambda surfaces report
//! missing and malformed bodies identically.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::{ItemError, MISSING_BODY, MISSING_KEYS};
use super::types::{Item, ItemUpdate};

/// Body of `POST /things`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItemRequest {
    #[serde(rename = "PK", default, skip_serializing_if = "Option::is_none")]
    pub pk: Option<String>,
    #[serde(rename = "SK", default, skip_serializing_if = "Option::is_none")]
    pub sk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "otherAttr", default, skip_serializing_if = "Option::is_none")]
    pub other_attr: Option<String>,
}

impl CreateItemRequest {
    /// Converts the request into an item, defaulting optional attributes to
    /// empty strings. Fails when either key is absent or empty.
    pub fn into_item(self) -> Result<Item, ItemError> {
        let (Some(pk), Some(sk)) = (non_empty(self.pk), non_empty(self.sk)) else {
            return Err(ItemError::validation(MISSING_KEYS));
        };

        Ok(Item::new(pk, sk)
            .with_description(self.description.unwrap_or_default())
            .with_other_attr(self.other_attr.unwrap_or_default()))
    }
}

/// Body of `PUT /things/{pk}/{sk}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "otherAttr", default, skip_serializing_if = "Option::is_none")]
    pub other_attr: Option<String>,
}

impl UpdateItemRequest {
    /// Omitted fields become empty strings: an update always overwrites both.
    pub fn into_update(self) -> ItemUpdate {
        ItemUpdate {
            description: self.description.unwrap_or_default(),
            other_attr: self.other_attr.unwrap_or_default(),
        }
    }
}

/// Parses a JSON request body.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ItemError> {
    if body.is_empty() {
        return Err(ItemError::validation(MISSING_BODY));
    }

    serde_json::from_slice(body).map_err(|e| ItemError::validation(format!("Invalid JSON: {e}")))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
