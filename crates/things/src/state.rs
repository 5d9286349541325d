//! Application state shared by every handler.
//!
//! Clients are built once per process and injected here, so handlers never
//! reach for a global client and tests can swap in the in-memory backends.

use std::sync::Arc;

use things_core::storage::ItemRepository;
use things_core::translation::Translator;

use crate::config::Config;
use crate::storage::{DynamoDbRepository, InMemoryRepository};
use crate::translate::{AwsTranslator, InMemoryTranslator};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Keyed item store.
    pub item_repo: Arc<dyn ItemRepository>,
    /// Machine translation service.
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    /// Creates a new AppState from explicit backends.
    pub fn new(item_repo: Arc<dyn ItemRepository>, translator: Arc<dyn Translator>) -> Self {
        Self {
            item_repo,
            translator,
        }
    }

    /// Creates an AppState backed by the in-memory store and fake translator.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryTranslator::new()),
        )
    }

    /// Creates an AppState backed by DynamoDB and Amazon Translate.
    ///
    /// Uses the AWS SDK default credential chain and region resolution.
    pub async fn from_aws(config: &Config) -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        let item_repo = DynamoDbRepository::from_sdk_config(
            &sdk_config,
            &config.table_name,
            config.dynamodb_endpoint_url.as_deref(),
        );
        let translator = AwsTranslator::from_sdk_config(&sdk_config);

        tracing::info!(
            table = %item_repo.table_name(),
            endpoint = config.dynamodb_endpoint_url.as_deref().unwrap_or("default"),
            "Using DynamoDB item store"
        );

        Self::new(Arc::new(item_repo), Arc::new(translator))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory()
    }
}
