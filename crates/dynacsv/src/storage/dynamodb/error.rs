//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `SourceError` from `dynacsv_core::source`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::query::QueryError;
use dynacsv_core::source::SourceError;

/// Map a Query SDK error to SourceError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
    table_name: &str,
) -> SourceError {
    match &err {
        SdkError::DispatchFailure(failure) => {
            return SourceError::ConnectionFailed(format!("{:?}", failure));
        }
        SdkError::TimeoutError(_) => {
            return SourceError::ConnectionFailed("Request timed out".to_string());
        }
        _ => {}
    }

    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => SourceError::TableNotFound {
            table_name: table_name.to_string(),
        },
        QueryError::ProvisionedThroughputExceededException(_) => {
            SourceError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        QueryError::RequestLimitExceeded(_) => {
            SourceError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        QueryError::InternalServerError(_) => {
            SourceError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => SourceError::QueryFailed(format!("Query failed: {:?}", err)),
    }
}
