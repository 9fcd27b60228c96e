//! DynamoDB item source implementation.
//!
//! Queries a single partition with `aws-sdk-dynamodb` and unmarshals each
//! returned item into a string row mapping.

mod conversions;
mod error;
mod source;

pub use source::DynamoDbSource;
