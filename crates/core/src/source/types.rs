use std::collections::HashMap;

use super::error::{Result, SourceError};

/// Loosely-typed representation of one fetched item, keyed by attribute name.
pub type Row = HashMap<String, String>;

/// Expression attribute name used for the partition key attribute.
pub const KEY_NAME_PLACEHOLDER: &str = "#pk";

/// Expression attribute value used for the partition key value.
pub const KEY_VALUE_PLACEHOLDER: &str = ":pk";

/// A key-condition query against a single table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub table_name: String,
    pub key_condition_expression: String,
    pub expression_attribute_names: HashMap<String, String>,
    pub expression_attribute_values: HashMap<String, String>,
}

impl QueryRequest {
    /// Builds a query selecting every item whose `key_attribute` equals `key_value`.
    ///
    /// The attribute name goes through an expression attribute name so reserved
    /// words (`name`, `status`, ...) can be used as partition keys.
    pub fn partition_key(
        table_name: impl Into<String>,
        key_attribute: &str,
        key_value: impl Into<String>,
    ) -> Result<Self> {
        let table_name = table_name.into();
        if table_name.is_empty() {
            return Err(SourceError::InvalidRequest(
                "table name must not be empty".to_string(),
            ));
        }
        if key_attribute.is_empty() {
            return Err(SourceError::InvalidRequest(
                "partition key attribute must not be empty".to_string(),
            ));
        }

        Ok(Self {
            table_name,
            key_condition_expression: format!("{KEY_NAME_PLACEHOLDER} = {KEY_VALUE_PLACEHOLDER}"),
            expression_attribute_names: HashMap::from([(
                KEY_NAME_PLACEHOLDER.to_string(),
                key_attribute.to_string(),
            )]),
            expression_attribute_values: HashMap::from([(
                KEY_VALUE_PLACEHOLDER.to_string(),
                key_value.into(),
            )]),
        })
    }

    /// Resolves a simple `name = :value` condition into `(attribute, value)`.
    ///
    /// Returns `None` for anything other than a single equality.
    pub fn partition_key_equality(&self) -> Option<(&str, &str)> {
        let (name, value) = self.key_condition_expression.split_once('=')?;
        let (name, value) = (name.trim(), value.trim());

        let attribute = if name.starts_with('#') {
            self.expression_attribute_names.get(name)?.as_str()
        } else {
            name
        };
        let value = self.expression_attribute_values.get(value)?.as_str();

        Some((attribute, value))
    }
}

/// How many result pages to consume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageMode {
    /// Follow continuation cursors until the result set is exhausted.
    #[default]
    All,
    /// Stop after the first page, dropping whatever the source has left.
    FirstOnly,
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<C> {
    pub rows: Vec<Row>,
    /// Cursor to resume from, `None` when this is the last page.
    pub next: Option<C>,
}

impl<C> Page<C> {
    pub fn last(rows: Vec<Row>) -> Self {
        Self { rows, next: None }
    }
}
