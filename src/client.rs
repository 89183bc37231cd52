//! HTTP client for the IETF RFC endpoints.
//!
//! All three remote resources live under the same prefix: the master index at
//! `rfc-index`, the plain-text body at `rfc{NNNN}.txt` and the structured
//! metadata at `rfc{NNNN}.json`. The base URL is injectable so tests can point
//! the client at a local mock server.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, RfcError};

const BASE_URL: &str = "https://www.ietf.org/rfc/";
const INDEX_PATH: &str = "rfc-index";

/// Default timeout for every request. The reference tool had none; a bounded
/// wait is a robustness improvement, not a contract change.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Structured metadata for one RFC, as served by the `.json` endpoint.
///
/// `abstract` and `keywords` are not present for every RFC; callers must
/// check before rendering them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RfcMetadata {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub authors: Vec<String>,
    pub page_count: u32,
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub obsoleted_by: Vec<String>,
    pub pub_date: String,
}

/// One fully resolved RFC: raw document text plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RfcRecord {
    pub id: String,
    pub text: String,
    pub meta: RfcMetadata,
}

pub struct RfcClient {
    client: Client,
    base_url: Url,
}

impl RfcClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    /// Build a client against an alternative prefix, e.g. a mock server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        // Url::join treats a base without a trailing slash as a file, which
        // would silently drop the last path segment.
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, base_url })
    }

    /// GET a page and return its body. Any non-success status is fatal and
    /// carries the URL and status code for the user-facing message.
    pub async fn get_text(&self, url: &Url) -> Result<String> {
        tracing::debug!("fetching {url}");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RfcError::Http {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }

    /// Fetch the master RFC index as plain text.
    pub async fn fetch_index(&self) -> Result<String> {
        let url = self.base_url.join(INDEX_PATH)?;
        self.get_text(&url).await
    }

    /// Fetch the plain-text body of one RFC.
    pub async fn fetch_document(&self, id: &str) -> Result<String> {
        let url = self.base_url.join(&format!("rfc{id}.txt"))?;
        self.get_text(&url).await
    }

    /// Fetch and decode the metadata document of one RFC.
    ///
    /// The endpoint sometimes wraps the object in a single-element array;
    /// that is normalized to the element. An empty array is treated as
    /// malformed, and extra elements beyond the first are ignored.
    pub async fn fetch_metadata(&self, id: &str) -> Result<RfcMetadata> {
        let url = self.base_url.join(&format!("rfc{id}.json"))?;
        let body = self.get_text(&url).await?;

        let value: serde_json::Value = serde_json::from_str(&body)?;
        let value = match value {
            serde_json::Value::Array(mut items) => {
                if items.is_empty() {
                    return Err(RfcError::Metadata(format!(
                        "empty metadata array for RFC {id}"
                    )));
                }
                if items.len() > 1 {
                    tracing::warn!(
                        "metadata for RFC {id} has {} elements, using the first",
                        items.len()
                    );
                }
                items.swap_remove(0)
            }
            other => other,
        };

        Ok(serde_json::from_value(value)?)
    }

    /// Resolve one RFC into a full record: document text plus metadata.
    pub async fn fetch_rfc(&self, id: &str) -> Result<RfcRecord> {
        let text = self.fetch_document(id).await?;
        let meta = self.fetch_metadata(id).await?;
        Ok(RfcRecord {
            id: id.to_string(),
            text,
            meta,
        })
    }
}
