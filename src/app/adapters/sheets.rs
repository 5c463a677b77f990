//! Data sources for the raw results table
//!
//! Both sources deliver the table as the spreadsheet values API does: a JSON
//! object whose `values` member holds rows of cells. Everything past this point
//! works on the plain string grid.

use crate::app::models::RawTable;
use crate::config::SourceConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Anything that can deliver the raw results table
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the whole table
    ///
    /// Failures here are source failures (network, credentials, malformed
    /// response). A table with bad content is still `Ok`.
    async fn fetch_table(&self) -> Result<RawTable>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Body of a values response
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Option<Vec<Vec<Value>>>,
}

/// Decode a values response body into a string grid
///
/// A body without `values` is an empty sheet. Non-string cells are rendered as
/// text and `null` cells become empty strings.
pub fn decode_value_range(body: &str) -> Result<RawTable> {
    let range: ValueRange = serde_json::from_str(body)
        .map_err(|e| Error::source_format(format!("not a value range: {}", e)))?;

    Ok(range
        .values
        .unwrap_or_default()
        .into_iter()
        .map(|row| row.into_iter().map(cell_text).collect())
        .collect())
}

fn cell_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Map a response status to the error tiers of a fetch
fn check_status(status: StatusCode) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(Error::authentication(status.as_u16()));
    }
    Err(Error::transport(
        format!("data source returned HTTP {}", status),
        None,
    ))
}

/// Spreadsheet values API over HTTP
#[derive(Debug, Clone)]
pub struct SheetsDataSource {
    client: Client,
    url: Url,
    sheet_id: String,
}

impl SheetsDataSource {
    /// Create a source from a validated configuration
    ///
    /// Missing credentials fail here, before any request is made.
    pub fn new(config: SourceConfig) -> Result<Self> {
        config.validate()?;

        let url = Self::values_url(&config)?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::transport("Failed to build HTTP client", Some(e)))?;

        Ok(Self {
            client,
            url,
            sheet_id: config.sheet_id,
        })
    }

    /// `{base_url}/{sheet_id}/values/{range}?key={api_key}` with every part encoded
    fn values_url(config: &SourceConfig) -> Result<Url> {
        let mut url = Url::parse(&config.base_url)
            .map_err(|e| Error::configuration(format!("Invalid base URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| Error::configuration("Base URL cannot hold a path"))?
            .pop_if_empty()
            .extend([config.sheet_id.as_str(), "values", config.range.as_str()]);
        url.query_pairs_mut().append_pair("key", &config.api_key);

        Ok(url)
    }
}

#[async_trait]
impl DataSource for SheetsDataSource {
    async fn fetch_table(&self) -> Result<RawTable> {
        debug!("Fetching sheet {}", self.sheet_id);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| Error::transport("Sheet request failed", Some(e)))?;

        check_status(response.status())?;

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport("Failed to read sheet response", Some(e)))?;
        let table = decode_value_range(&body)?;

        info!("Fetched {} rows from sheet {}", table.len(), self.sheet_id);
        Ok(table)
    }

    fn describe(&self) -> String {
        format!("sheet {}", self.sheet_id)
    }
}

/// Value range JSON stored on disk
#[derive(Debug, Clone)]
pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    async fn fetch_table(&self) -> Result<RawTable> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::io(format!("Failed to read {}", self.path.display()), e))?;
        let table = decode_value_range(&body)?;

        debug!("Read {} rows from {}", table.len(), self.path.display());
        Ok(table)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
