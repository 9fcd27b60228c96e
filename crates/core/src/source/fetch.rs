use super::{ItemSource, PageMode, QueryRequest, Result, Row};

/// Fetches every row matching `request`, holding the whole set in memory.
///
/// With [`PageMode::FirstOnly`] exactly one query is issued and any further
/// pages are dropped. An empty result is an empty `Vec`, not an error.
pub async fn fetch_rows<S: ItemSource>(
    source: &S,
    request: &QueryRequest,
    mode: PageMode,
) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    let mut cursor = None;
    let mut pages = 0usize;

    loop {
        let page = source.query_page(request, cursor.take()).await?;
        pages += 1;

        tracing::debug!(
            table = %request.table_name,
            page = pages,
            items = page.rows.len(),
            "Fetched result page"
        );

        rows.extend(page.rows);

        match (mode, page.next) {
            (PageMode::All, Some(next)) => cursor = Some(next),
            (PageMode::FirstOnly, Some(_)) => {
                tracing::warn!(
                    table = %request.table_name,
                    fetched = rows.len(),
                    "More results available but only the first page was requested"
                );
                break;
            }
            (_, None) => break,
        }
    }

    tracing::info!(
        table = %request.table_name,
        pages,
        rows = rows.len(),
        "Fetched rows"
    );

    Ok(rows)
}
