//! DynamoDB attribute names and key construction.
//!
//! Pure functions with no side effects.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

pub const PK: &str = "PK";
pub const SK: &str = "SK";
pub const DESCRIPTION: &str = "description";
pub const OTHER_ATTR: &str = "otherAttr";

/// Build the primary key map for a single item.
pub fn item_key(pk: &str, sk: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (PK.to_string(), AttributeValue::S(pk.to_string())),
        (SK.to_string(), AttributeValue::S(sk.to_string())),
    ])
}
