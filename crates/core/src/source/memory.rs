//! In-memory item source.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ItemSource, Page, QueryRequest, Result, Row, SourceError};

/// In-memory item source for testing.
///
/// Stores rows per table and answers partition-key equality queries in
/// insertion order. With a page size set, results are split into pages and
/// the cursor is the offset of the next matching row.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    tables: Arc<RwLock<HashMap<String, Vec<Row>>>>,
    failure: Arc<RwLock<Option<String>>>,
    queries: Arc<AtomicUsize>,
    page_size: Option<usize>,
}

impl InMemorySource {
    /// Creates an empty source that returns every match in one page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty source that returns at most `page_size` rows per page.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: Some(page_size.max(1)),
            ..Self::default()
        }
    }

    /// Appends rows to `table`, creating the table if needed.
    pub async fn insert_rows(&self, table: &str, rows: Vec<Row>) {
        let mut tables = self.tables.write().await;
        tables.entry(table.to_string()).or_default().extend(rows);
    }

    /// Creates `table` with no rows.
    pub async fn create_table(&self, table: &str) {
        self.insert_rows(table, Vec::new()).await;
    }

    /// Makes every following query fail with `message`.
    pub async fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write().await = Some(message.into());
    }

    /// Number of queries answered or rejected so far.
    pub fn queries_issued(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemSource for InMemorySource {
    type Cursor = usize;

    async fn query_page(
        &self,
        request: &QueryRequest,
        start: Option<usize>,
    ) -> Result<Page<usize>> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self.failure.read().await.as_ref() {
            return Err(SourceError::QueryFailed(message.clone()));
        }

        let (attribute, value) = request.partition_key_equality().ok_or_else(|| {
            SourceError::InvalidRequest(format!(
                "unsupported key condition: {}",
                request.key_condition_expression
            ))
        })?;

        let tables = self.tables.read().await;
        let rows = tables
            .get(&request.table_name)
            .ok_or_else(|| SourceError::TableNotFound {
                table_name: request.table_name.clone(),
            })?;

        let matching: Vec<&Row> = rows
            .iter()
            .filter(|row| row.get(attribute).map(String::as_str) == Some(value))
            .collect();

        let offset = start.unwrap_or(0).min(matching.len());
        let end = match self.page_size {
            Some(size) => (offset + size).min(matching.len()),
            None => matching.len(),
        };

        Ok(Page {
            rows: matching[offset..end].iter().map(|row| (*row).clone()).collect(),
            next: (end < matching.len()).then_some(end),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str) -> Row {
        Row::from([("id".to_string(), id.to_string())])
    }

    #[tokio::test]
    async fn test_query_page_filters_on_partition_key() {
        let source = InMemorySource::new();
        source
            .insert_rows("orders", vec![row("1"), row("2"), row("1")])
            .await;
        let request = QueryRequest::partition_key("orders", "id", "1").unwrap();

        let page = source.query_page(&request, None).await.unwrap();

        assert_eq!(page, Page::last(vec![row("1"), row("1")]));
    }

    #[tokio::test]
    async fn test_query_page_returns_cursor_until_exhausted() {
        let source = InMemorySource::with_page_size(2);
        source
            .insert_rows("orders", vec![row("1"), row("1"), row("1")])
            .await;
        let request = QueryRequest::partition_key("orders", "id", "1").unwrap();

        let first = source.query_page(&request, None).await.unwrap();
        assert_eq!(first.rows.len(), 2);
        assert_eq!(first.next, Some(2));

        let second = source.query_page(&request, first.next).await.unwrap();
        assert_eq!(second.rows.len(), 1);
        assert_eq!(second.next, None);
    }

    #[tokio::test]
    async fn test_query_page_empty_table() {
        let source = InMemorySource::new();
        source.create_table("orders").await;
        let request = QueryRequest::partition_key("orders", "id", "1").unwrap();

        let page = source.query_page(&request, None).await.unwrap();

        assert!(page.rows.is_empty());
        assert!(page.next.is_none());
    }

    #[tokio::test]
    async fn test_query_page_counts_failed_queries() {
        let source = InMemorySource::new();
        source.fail_with("boom").await;
        let request = QueryRequest::partition_key("orders", "id", "1").unwrap();

        let result = source.query_page(&request, None).await;

        assert_eq!(result, Err(SourceError::QueryFailed("boom".to_string())));
        assert_eq!(source.queries_issued(), 1);
    }
}
