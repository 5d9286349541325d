//! DynamoDB storage backend implementation.
//!
//! The table uses a string partition key `PK` and a string sort key `SK`.
//! Cached translations live on the item as `translation_<language>`
//! attributes.

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;
