//! Storage backend implementations.
//!
//! Concrete implementations of `things_core::storage::ItemRepository`:
//!
//! - `inmemory`: `BTreeMap`-backed store for tests and local development
//! - `dynamodb`: AWS DynamoDB store using `aws-sdk-dynamodb`

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;
pub use inmemory::InMemoryRepository;
