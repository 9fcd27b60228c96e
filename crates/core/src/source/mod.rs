mod error;
mod fetch;
mod memory;
mod traits;
mod types;

pub use error::{Result, SourceError};
pub use fetch::fetch_rows;
pub use memory::InMemorySource;
pub use traits::ItemSource;
pub use types::{Page, PageMode, QueryRequest, Row, KEY_NAME_PLACEHOLDER, KEY_VALUE_PLACEHOLDER};
