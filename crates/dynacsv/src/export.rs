//! Export driver: query, shape, write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use dynacsv_core::export::{project_rows, write_table, Header};
use dynacsv_core::output::{csv_file_path, open_csv_for_append};
use dynacsv_core::source::{fetch_rows, ItemSource, QueryRequest};

use crate::config::ExportConfig;

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows_written: usize,
}

/// Runs one export against `source`.
///
/// Rows are fetched and projected in full before the output file is opened,
/// so a failure anywhere before the write leaves the file untouched.
pub async fn run_export<S: ItemSource>(source: &S, config: &ExportConfig) -> Result<ExportSummary> {
    let request = QueryRequest::partition_key(&config.table, &config.key_attribute, &config.key)
        .context("Failed to build the DynamoDB query")?;

    let rows = fetch_rows(source, &request, config.page_mode())
        .await
        .with_context(|| format!("Failed to query data from table '{}'", config.table))?;

    let header = Header::default();
    let table = project_rows(&header, &rows).context("Failed to map items onto CSV columns")?;

    let path = csv_file_path(&config.output_dir, &config.file_name);
    let file = open_csv_for_append(&config.output_dir, &config.file_name)?;
    let rows_written = write_table(&table, file)
        .with_context(|| format!("Failed to write CSV to '{}'", path.display()))?;

    tracing::info!(
        path = %path.display(),
        rows = rows_written,
        "Export complete"
    );

    Ok(ExportSummary { path, rows_written })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynacsv_core::source::{InMemorySource, Row};

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn config(output_dir: &str) -> ExportConfig {
        ExportConfig {
            table: "items".to_string(),
            key: "1".to_string(),
            key_attribute: "pk".to_string(),
            output_dir: output_dir.to_string(),
            file_name: "test".to_string(),
            first_page_only: false,
        }
    }

    async fn source_with(rows: Vec<Row>) -> InMemorySource {
        let source = InMemorySource::new();
        source.create_table("items").await;
        source.insert_rows("items", rows).await;
        source
    }

    #[tokio::test]
    async fn test_run_export_writes_header_and_rows() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("out");
        let config = config(dir.to_str().unwrap());
        let source = source_with(vec![
            row(&[("pk", "1"), ("id", "1"), ("column2", "a"), ("column3", "b")]),
            row(&[("pk", "1"), ("id", "2"), ("column2", "c"), ("column3", "d")]),
            row(&[("pk", "2"), ("id", "3"), ("column2", "e"), ("column3", "f")]),
        ])
        .await;

        let summary = run_export(&source, &config).await.unwrap();

        assert_eq!(summary.rows_written, 2);
        assert_eq!(summary.path, dir.join("test.csv"));
        assert_eq!(
            std::fs::read_to_string(&summary.path).unwrap(),
            "id,column2,column3\n1,a,b\n2,c,d\n"
        );
    }

    #[tokio::test]
    async fn test_run_export_empty_result_writes_header_only() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(temp.path().to_str().unwrap());
        let source = source_with(Vec::new()).await;

        let summary = run_export(&source, &config).await.unwrap();

        assert_eq!(summary.rows_written, 0);
        assert_eq!(
            std::fs::read_to_string(&summary.path).unwrap(),
            "id,column2,column3\n"
        );
    }

    #[tokio::test]
    async fn test_run_export_missing_column_writes_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(temp.path().to_str().unwrap());
        let source = source_with(vec![
            row(&[("pk", "1"), ("id", "1"), ("column2", "a"), ("column3", "b")]),
            row(&[("pk", "1"), ("id", "2"), ("column2", "c")]),
        ])
        .await;

        let error = run_export(&source, &config).await.unwrap_err();

        assert!(format!("{error:#}").contains("Column 'column3' not found in row 1"));
        assert!(!csv_file_path(&config.output_dir, &config.file_name).exists());
    }

    #[tokio::test]
    async fn test_run_export_query_failure_writes_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(temp.path().to_str().unwrap());
        let source = source_with(Vec::new()).await;
        source.fail_with("DynamoDB internal server error").await;

        let error = run_export(&source, &config).await.unwrap_err();

        assert!(format!("{error:#}").contains("Failed to query data from table 'items'"));
        assert!(!csv_file_path(&config.output_dir, &config.file_name).exists());
    }

    #[tokio::test]
    async fn test_run_export_appends_across_runs() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(temp.path().to_str().unwrap());
        let source = source_with(vec![row(&[
            ("pk", "1"),
            ("id", "1"),
            ("column2", "a"),
            ("column3", "b"),
        ])])
        .await;

        run_export(&source, &config).await.unwrap();
        let summary = run_export(&source, &config).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&summary.path).unwrap(),
            "id,column2,column3\n1,a,b\nid,column2,column3\n1,a,b\n"
        );
    }

    #[tokio::test]
    async fn test_run_export_follows_pages() {
        let temp = tempfile::tempdir().unwrap();
        let config = config(temp.path().to_str().unwrap());
        let source = InMemorySource::with_page_size(1);
        source
            .insert_rows(
                "items",
                vec![
                    row(&[("pk", "1"), ("id", "1"), ("column2", "a"), ("column3", "b")]),
                    row(&[("pk", "1"), ("id", "2"), ("column2", "c"), ("column3", "d")]),
                ],
            )
            .await;

        let summary = run_export(&source, &config).await.unwrap();

        assert_eq!(summary.rows_written, 2);
        assert_eq!(source.queries_issued(), 2);
    }

    #[tokio::test]
    async fn test_run_export_first_page_only() {
        let temp = tempfile::tempdir().unwrap();
        let mut config = config(temp.path().to_str().unwrap());
        config.first_page_only = true;
        let source = InMemorySource::with_page_size(1);
        source
            .insert_rows(
                "items",
                vec![
                    row(&[("pk", "1"), ("id", "1"), ("column2", "a"), ("column3", "b")]),
                    row(&[("pk", "1"), ("id", "2"), ("column2", "c"), ("column3", "d")]),
                ],
            )
            .await;

        let summary = run_export(&source, &config).await.unwrap();

        assert_eq!(summary.rows_written, 1);
        assert_eq!(source.queries_issued(), 1);
        assert_eq!(
            std::fs::read_to_string(&summary.path).unwrap(),
            "id,column2,column3\n1,a,b\n"
        );
    }
}
