//! Translation backend implementations.
//!
//! Concrete implementations of `things_core::translation::Translator`:
//!
//! - `inmemory`: deterministic fake that records how often it was called
//! - `aws`: Amazon Translate using `aws-sdk-translate`

pub mod aws;
pub mod inmemory;

pub use aws::AwsTranslator;
pub use inmemory::InMemoryTranslator;
