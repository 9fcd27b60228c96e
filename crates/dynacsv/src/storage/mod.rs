//! Item source backends.
//!
//! The export driver only needs [`dynacsv_core::source::ItemSource`]; this
//! module provides the production implementation backed by DynamoDB.

pub mod dynamodb;

pub use dynamodb::DynamoDbSource;
