use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A stored item, identified by its partition and sort keys.
///
/// Cached translations are kept per language code, so an item can never hold
/// more than one translation for the same language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub pk: String,
    pub sk: String,
    pub description: String,
    pub other_attr: String,
    pub translations: BTreeMap<String, String>,
}

impl Item {
    /// Creates an item with empty attributes.
    pub fn new(pk: impl Into<String>, sk: impl Into<String>) -> Self {
        Self {
            pk: pk.into(),
            sk: sk.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_other_attr(mut self, other_attr: impl Into<String>) -> Self {
        self.other_attr = other_attr.into();
        self
    }

    /// Sets the cached translation for a language, replacing any previous one.
    pub fn with_translation(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.insert(language.into(), text.into());
        self
    }

    /// Returns the public projection of this item.
    pub fn to_view(&self) -> ItemView {
        ItemView {
            pk: self.pk.clone(),
            sk: self.sk.clone(),
            description: self.description.clone(),
            other_attr: self.other_attr.clone(),
        }
    }
}

/// Mutable attributes written by an update. Both fields are always written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub description: String,
    pub other_attr: String,
}

/// Read projection of an item. Cached translations are never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    #[serde(rename = "PK")]
    pub pk: String,
    #[serde(rename = "SK")]
    pub sk: String,
    pub description: String,
    #[serde(rename = "otherAttr")]
    pub other_attr: String,
}

/// Response body of the translation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationView {
    #[serde(rename = "PK")]
    pub pk: String,
    #[serde(rename = "SK")]
    pub sk: String,
    pub original_description: String,
    pub translated_text: String,
    pub cached: bool,
}

/// Single-field body used for confirmations and errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
