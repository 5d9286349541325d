//! DynamoDB repository implementation.
//!
//! Implements `things_core::storage::ItemRepository` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use things_core::item::{Item, ItemUpdate};
use things_core::storage::{ItemRepository, Result};
use things_core::translation::translation_attribute_name;

use super::conversions::{attributes_to_item, item_to_attributes};
use super::error::{map_read_error, map_write_error};
use super::keys::{self, DESCRIPTION, OTHER_ATTR};

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a repository from a loaded AWS SDK configuration.
    ///
    /// `endpoint_url` overrides the service endpoint, e.g. to target DynamoDB
    /// Local.
    pub fn from_sdk_config(
        sdk_config: &aws_config::SdkConfig,
        table_name: impl Into<String>,
        endpoint_url: Option<&str>,
    ) -> Self {
        let mut builder = aws_sdk_dynamodb::config::Builder::from(sdk_config);
        if let Some(url) = endpoint_url {
            builder = builder.endpoint_url(url);
        }

        Self::new(Client::from_conf(builder.build()), table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ItemRepository for DynamoDbRepository {
    async fn query_items(&self, pk: &str) -> Result<Vec<Item>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("#pk = :p")
            .expression_attribute_names("#pk", keys::PK)
            .expression_attribute_values(":p", AttributeValue::S(pk.to_string()))
            .send()
            .await
            .map_err(map_read_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(attributes_to_item).collect()
    }

    async fn get_item(&self, pk: &str, sk: &str) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::item_key(pk, sk)))
            .send()
            .await
            .map_err(map_read_error)?;

        match result.item {
            Some(item) => Ok(Some(attributes_to_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    async fn update_item(&self, pk: &str, sk: &str, update: &ItemUpdate) -> Result<()> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::item_key(pk, sk)))
            .update_expression("SET #desc = :desc, #attr = :attr")
            .expression_attribute_names("#desc", DESCRIPTION)
            .expression_attribute_names("#attr", OTHER_ATTR)
            .expression_attribute_values(":desc", AttributeValue::S(update.description.clone()))
            .expression_attribute_values(":attr", AttributeValue::S(update.other_attr.clone()))
            .send()
            .await
            .map_err(map_write_error)?;

        Ok(())
    }

    async fn put_translation(
        &self,
        pk: &str,
        sk: &str,
        language: &str,
        text: &str,
    ) -> Result<()> {
        // Language codes are caller-supplied, so the attribute name always goes
        // through an expression attribute name.
        self.client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(keys::item_key(pk, sk)))
            .update_expression("SET #t = :t")
            .expression_attribute_names("#t", translation_attribute_name(language))
            .expression_attribute_values(":t", AttributeValue::S(text.to_string()))
            .send()
            .await
            .map_err(map_write_error)?;

        Ok(())
    }
}
