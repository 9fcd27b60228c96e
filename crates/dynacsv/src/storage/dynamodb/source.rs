//! DynamoDB item source.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use dynacsv_core::source::{ItemSource, Page, QueryRequest, Result};

use super::conversions::{items_to_rows, values_to_attributes};
use super::error::map_query_error;
use crate::config::AwsConfig;

/// DynamoDB-backed item source.
///
/// Each `query_page` call issues exactly one `Query`; the continuation cursor
/// is DynamoDB's `LastEvaluatedKey`.
pub struct DynamoDbSource {
    client: Client,
}

impl DynamoDbSource {
    /// Creates a new source with the given DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a new source using the AWS default credential chain, the
    /// configured region, and an optional endpoint override for local DynamoDB.
    pub async fn from_config(config: &AwsConfig) -> Self {
        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
        }

        let sdk_config = sdk_config_loader.load().await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl ItemSource for DynamoDbSource {
    type Cursor = HashMap<String, AttributeValue>;

    async fn query_page(
        &self,
        request: &QueryRequest,
        start: Option<Self::Cursor>,
    ) -> Result<Page<Self::Cursor>> {
        let names = (!request.expression_attribute_names.is_empty())
            .then(|| request.expression_attribute_names.clone());

        let result = self
            .client
            .query()
            .table_name(&request.table_name)
            .key_condition_expression(&request.key_condition_expression)
            .set_expression_attribute_names(names)
            .set_expression_attribute_values(Some(values_to_attributes(
                &request.expression_attribute_values,
            )))
            .set_exclusive_start_key(start)
            .send()
            .await
            .map_err(|e| map_query_error(e, &request.table_name))?;

        let items = result.items.unwrap_or_default();
        let rows = items_to_rows(&items)?;

        Ok(Page {
            rows,
            next: result.last_evaluated_key.filter(|key| !key.is_empty()),
        })
    }
}
