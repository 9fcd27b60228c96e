//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! string row mappings. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use dynacsv_core::source::{Row, SourceError};

/// Convert string expression values to DynamoDB attribute values.
pub fn values_to_attributes(values: &HashMap<String, String>) -> HashMap<String, AttributeValue> {
    values
        .iter()
        .map(|(name, value)| (name.clone(), AttributeValue::S(value.clone())))
        .collect()
}

/// Convert a DynamoDB item to a row mapping.
///
/// Scalars become their string representation; nested and binary
/// attributes are rejected.
pub fn item_to_row(item: &HashMap<String, AttributeValue>) -> Result<Row, SourceError> {
    item.iter()
        .map(|(name, value)| Ok((name.clone(), attribute_to_string(name, value)?)))
        .collect()
}

/// Convert a page of DynamoDB items to row mappings, keeping their order.
pub fn items_to_rows(items: &[HashMap<String, AttributeValue>]) -> Result<Vec<Row>, SourceError> {
    items.iter().map(item_to_row).collect()
}

fn attribute_to_string(name: &str, value: &AttributeValue) -> Result<String, SourceError> {
    match value {
        AttributeValue::S(s) => Ok(s.clone()),
        AttributeValue::N(n) => Ok(n.clone()),
        AttributeValue::Bool(b) => Ok(b.to_string()),
        AttributeValue::Null(_) => Ok(String::new()),
        other => Err(SourceError::InvalidData(format!(
            "Unsupported {} value for attribute '{}'",
            attribute_type_name(other),
            name
        ))),
    }
}

fn attribute_type_name(value: &AttributeValue) -> &'static str {
    match value {
        AttributeValue::S(_) => "S",
        AttributeValue::N(_) => "N",
        AttributeValue::Bool(_) => "BOOL",
        AttributeValue::Null(_) => "NULL",
        AttributeValue::B(_) => "B",
        AttributeValue::Ss(_) => "SS",
        AttributeValue::Ns(_) => "NS",
        AttributeValue::Bs(_) => "BS",
        AttributeValue::L(_) => "L",
        AttributeValue::M(_) => "M",
        _ => "unknown",
    }
}
