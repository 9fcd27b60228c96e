use async_trait::async_trait;

use super::{Page, QueryRequest, Result};

/// A queryable key-value store.
///
/// This is the only boundary that talks to the outside world; tests swap in
/// [`InMemorySource`](super::InMemorySource).
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Opaque continuation token handed back by the source between pages.
    type Cursor: Send + Sync;

    /// Runs `request` once, starting after `start` when given.
    async fn query_page(
        &self,
        request: &QueryRequest,
        start: Option<Self::Cursor>,
    ) -> Result<Page<Self::Cursor>>;
}
