//! # DynamoDB Table
//!
//! Managed coffee table. One item per record, partition key `id`.
//! Numbers are stored as DynamoDB `N` strings and decoded back into JSON
//! numbers.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use aws_smithy_types::timeout::TimeoutConfig;
use serde_json::Number;

use crate::model::{Item, ItemPatch};

use super::config::StorageConfig;
use super::errors::{StorageError, StorageResult};
use super::ItemStore;

const ATTR_ID: &str = "id";
const ATTR_NAME: &str = "name";
const ATTR_PRICE: &str = "price";
const ATTR_AVAILABLE: &str = "available";

type Attributes = HashMap<String, AttributeValue>;

/// DynamoDB-backed coffee table
#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl std::fmt::Debug for DynamoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamoStore")
            .field("table_name", &self.table_name)
            .finish()
    }
}

impl DynamoStore {
    /// Build a client from the ambient AWS configuration plus overrides
    pub async fn connect(config: &StorageConfig) -> StorageResult<Self> {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);

        if let Some(region) = &config.region {
            builder = builder.region(aws_sdk_dynamodb::config::Region::new(region.clone()));
        }

        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        if let Some(timeout_ms) = config.timeout_ms {
            let timeout_config = TimeoutConfig::builder()
                .operation_timeout(Duration::from_millis(timeout_ms))
                .build();
            builder = builder.timeout_config(timeout_config);
        }

        Ok(Self::from_client(
            Client::from_conf(builder.build()),
            config.table_name.clone(),
        ))
    }

    /// Wrap a pre-built client
    pub fn from_client(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    fn key(id: &str) -> AttributeValue {
        AttributeValue::S(id.to_string())
    }
}

fn item_to_attributes(item: Item) -> Attributes {
    let mut attrs = HashMap::with_capacity(4);
    attrs.insert(ATTR_ID.to_string(), AttributeValue::S(item.id));
    attrs.insert(ATTR_NAME.to_string(), AttributeValue::S(item.name));
    attrs.insert(ATTR_PRICE.to_string(), AttributeValue::N(item.price.to_string()));
    attrs.insert(ATTR_AVAILABLE.to_string(), AttributeValue::Bool(item.available));
    attrs
}

fn attributes_to_item(attrs: &Attributes) -> StorageResult<Item> {
    let string = |attr: &str| -> StorageResult<String> {
        attrs
            .get(attr)
            .and_then(|v| v.as_s().ok())
            .cloned()
            .ok_or_else(|| StorageError::Malformed(format!("missing string attribute '{attr}'")))
    };

    let price = attrs
        .get(ATTR_PRICE)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| {
            StorageError::Malformed(format!("missing number attribute '{ATTR_PRICE}'"))
        })?;
    let price: Number = serde_json::from_str(price)
        .map_err(|e| StorageError::Malformed(format!("bad number '{price}': {e}")))?;

    let available = attrs
        .get(ATTR_AVAILABLE)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| {
            StorageError::Malformed(format!("missing boolean attribute '{ATTR_AVAILABLE}'"))
        })?;

    Ok(Item {
        id: string(ATTR_ID)?,
        name: string(ATTR_NAME)?,
        price,
        available,
    })
}

/// `SET` expression and its value bindings for a patch
fn update_expression(patch: &ItemPatch) -> (String, Vec<(&'static str, AttributeValue)>) {
    let mut clauses = Vec::new();
    let mut values = Vec::new();

    if let Some(name) = &patch.name {
        clauses.push("#name = :name");
        values.push((":name", AttributeValue::S(name.clone())));
    }
    if let Some(price) = &patch.price {
        clauses.push("#price = :price");
        values.push((":price", AttributeValue::N(price.to_string())));
    }
    if let Some(available) = patch.available {
        clauses.push("#available = :available");
        values.push((":available", AttributeValue::Bool(available)));
    }

    (format!("SET {}", clauses.join(", ")), values)
}

/// Check if an UpdateItem error is a conditional check failure
fn is_conditional_check_failed(err: &SdkError<UpdateItemError>) -> bool {
    match err {
        SdkError::ServiceError(service_err) => {
            matches!(
                service_err.err(),
                UpdateItemError::ConditionalCheckFailedException(_)
            )
        }
        _ => false,
    }
}

fn backend_error<E>(err: E) -> StorageError
where
    E: std::error::Error,
{
    StorageError::backend(DisplayErrorContext(&err).to_string())
}

#[async_trait]
impl ItemStore for DynamoStore {
    async fn get(&self, id: &str) -> StorageResult<Option<Item>> {
        let response = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, Self::key(id))
            .consistent_read(true)
            .send()
            .await
            .map_err(backend_error)?;

        response.item().map(attributes_to_item).transpose()
    }

    async fn scan(&self) -> StorageResult<Vec<Item>> {
        let mut items = Vec::new();
        let mut last_evaluated_key = None;

        loop {
            let mut request = self.client.scan().table_name(&self.table_name);

            if let Some(key) = last_evaluated_key.take() {
                request = request.set_exclusive_start_key(Some(key));
            }

            let response = request.send().await.map_err(backend_error)?;

            for attrs in response.items() {
                items.push(attributes_to_item(attrs)?);
            }

            match response.last_evaluated_key() {
                Some(key) if !key.is_empty() => {
                    last_evaluated_key = Some(key.clone());
                }
                _ => break,
            }
        }

        Ok(items)
    }

    async fn put(&self, item: Item) -> StorageResult<Item> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item.clone())))
            .send()
            .await
            .map_err(backend_error)?;

        Ok(item)
    }

    async fn update(&self, id: &str, patch: &ItemPatch) -> StorageResult<Item> {
        let (expression, values) = update_expression(patch);

        let mut request = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, Self::key(id))
            .update_expression(expression)
            // Never upsert
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#id", ATTR_ID)
            .return_values(ReturnValue::AllNew);

        for (placeholder, value) in values {
            let attr = &placeholder[1..];
            request = request
                .expression_attribute_names(format!("#{attr}"), attr)
                .expression_attribute_values(placeholder, value);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) if is_conditional_check_failed(&e) => {
                return Err(StorageError::NotFound(id.to_string()));
            }
            Err(e) => return Err(backend_error(e)),
        };

        let attrs = response
            .attributes()
            .ok_or_else(|| StorageError::Malformed("UpdateItem returned no attributes".into()))?;
        attributes_to_item(attrs)
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, Self::key(id))
            .send()
            .await
            .map_err(backend_error)?;

        Ok(())
    }

    fn backend(&self) -> &'static str {
        "dynamodb"
    }
}
