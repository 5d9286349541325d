//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and domain types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use things_core::item::Item;
use things_core::storage::RepositoryError;
use things_core::translation::{language_from_attribute_name, translation_attribute_name};

use super::keys::{DESCRIPTION, OTHER_ATTR, PK, SK};

/// Convert an Item to a DynamoDB item.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    let mut attributes = HashMap::new();

    // Keys
    attributes.insert(PK.to_string(), AttributeValue::S(item.pk.clone()));
    attributes.insert(SK.to_string(), AttributeValue::S(item.sk.clone()));

    // Data
    attributes.insert(
        DESCRIPTION.to_string(),
        AttributeValue::S(item.description.clone()),
    );
    attributes.insert(
        OTHER_ATTR.to_string(),
        AttributeValue::S(item.other_attr.clone()),
    );

    // Cached translations
    for (language, text) in &item.translations {
        attributes.insert(
            translation_attribute_name(language),
            AttributeValue::S(text.clone()),
        );
    }

    attributes
}

/// Convert a DynamoDB item to an Item.
///
/// Missing `description` and `otherAttr` default to empty strings. Attributes
/// that are neither known fields nor string-valued translations are ignored.
pub fn attributes_to_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Item, RepositoryError> {
    let mut item = Item::new(get_string(attributes, PK)?, get_string(attributes, SK)?)
        .with_description(get_optional_string(attributes, DESCRIPTION).unwrap_or_default())
        .with_other_attr(get_optional_string(attributes, OTHER_ATTR).unwrap_or_default());

    for (name, value) in attributes {
        let (Some(language), Ok(text)) = (language_from_attribute_name(name), value.as_s()) else {
            continue;
        };
        item.translations.insert(language.to_string(), text.clone());
    }

    Ok(item)
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    attributes: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    get_optional_string(attributes, key)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(attributes: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    attributes
        .get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}
