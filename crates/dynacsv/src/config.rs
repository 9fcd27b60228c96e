use clap::Args;
use dynacsv_core::source::PageMode;

/// What to export and where to write it.
#[derive(Debug, Clone, Args)]
pub struct ExportConfig {
    /// DynamoDB table to query
    #[arg(long, env = "DYNACSV_TABLE")]
    pub table: String,

    /// Partition key value selecting the items to export
    #[arg(long, env = "DYNACSV_KEY")]
    pub key: String,

    /// Name of the partition key attribute
    #[arg(long, env = "DYNACSV_KEY_ATTRIBUTE", default_value = "id")]
    pub key_attribute: String,

    /// Directory for the CSV file, created if missing (defaults to the working directory)
    #[arg(long, env = "DYNACSV_OUTPUT_DIR", default_value_t)]
    pub output_dir: String,

    /// Base name of the CSV file, without the `.csv` extension
    #[arg(long, env = "DYNACSV_FILE_NAME", default_value = "export")]
    pub file_name: String,

    /// Only consume the first page of query results
    #[arg(long, env = "DYNACSV_FIRST_PAGE_ONLY")]
    pub first_page_only: bool,
}

impl ExportConfig {
    pub fn page_mode(&self) -> PageMode {
        if self.first_page_only {
            PageMode::FirstOnly
        } else {
            PageMode::All
        }
    }
}

/// AWS client configuration.
#[derive(Debug, Clone, Args)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local DynamoDB)
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// AWS region
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,
}

impl AwsConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}
