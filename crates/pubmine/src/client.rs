//! E-utilities search and fetch clients.
//!
//! PubMed is reached through two NCBI E-utilities endpoints: `esearch`
//! turns a keyword into a bounded, ordered list of article identifiers
//! (structured-data response), and `efetch` turns a batch of identifiers
//! into one markup document of article metadata. The pipeline only ever
//! sees those two operations, abstracted behind [`LiteratureClient`] so
//! tests can substitute an offline implementation.
//!
//! Requests are synchronous from the pipeline's point of view: one search,
//! then at most one fetch, with no retries, backoff, or pagination beyond
//! the configured result cap.

use super::*;

/// Default E-utilities base URL.
const EUTILS_BASE: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Endpoint configuration for [`EntrezClient`].
///
/// # Examples
///
/// ```
/// use pubmine::client::ClientConfig;
///
/// let config = ClientConfig { retmax: 50, ..Default::default() };
/// assert!(config.base_url.contains("eutils"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
  /// Base URL the `esearch.fcgi` and `efetch.fcgi` paths are joined onto
  pub base_url: String,
  /// Result cap passed as `retmax` on the search request
  pub retmax:   u32,
  /// Sort order for search results
  pub sort:     String,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self { base_url: EUTILS_BASE.to_string(), retmax: 200, sort: "relevance".to_string() }
  }
}

/// The two abstract operations the pipeline depends on.
///
/// Production code uses [`EntrezClient`]; tests inject counting or
/// fixture-backed implementations to exercise the pipeline without any
/// network access.
#[async_trait]
pub trait LiteratureClient: Send + Sync {
  /// Searches the literature database for a keyword, returning an ordered
  /// list of matching article identifiers (possibly empty).
  async fn search(&self, term: &str) -> Result<Vec<String>>;

  /// Retrieves the metadata document for a batch of identifiers.
  ///
  /// An empty identifier list yields an empty [`ArticleSet`] without any
  /// request being issued.
  async fn fetch(&self, ids: &[String]) -> Result<ArticleSet>;
}

/// Structured-data body of an `esearch` response.
#[derive(Debug, Default, Deserialize)]
struct ESearchResponse {
  /// Result envelope
  #[serde(default)]
  esearchresult: ESearchResult,
}

/// The `esearchresult` envelope carrying the identifier list.
#[derive(Debug, Default, Deserialize)]
struct ESearchResult {
  /// Matching article identifiers, in endpoint order
  #[serde(default)]
  idlist: Vec<String>,
}

/// HTTP client for the NCBI E-utilities endpoints.
///
/// # Examples
///
/// ```no_run
/// use pubmine::{client::EntrezClient, prelude::*};
///
/// # async fn example() -> Result<()> {
/// let client = EntrezClient::default();
/// let ids = client.search("breast cancer").await?;
/// let document = client.fetch(&ids).await?;
/// println!("{} article(s) retrieved", document.articles.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntrezClient {
  /// Shared HTTP connection pool
  http:   reqwest::Client,
  /// Endpoint configuration
  config: ClientConfig,
}

impl EntrezClient {
  /// Creates a client with a custom endpoint configuration.
  pub fn new(config: ClientConfig) -> Self { Self { http: reqwest::Client::new(), config } }
}

#[async_trait]
impl LiteratureClient for EntrezClient {
  async fn search(&self, term: &str) -> Result<Vec<String>> {
    let url = format!("{}/esearch.fcgi", self.config.base_url);
    debug!("Searching via: {} term={}", url, term);

    let retmax = self.config.retmax.to_string();
    let response = self
      .http
      .get(&url)
      .query(&[
        ("db", "pubmed"),
        ("term", term),
        ("retmax", retmax.as_str()),
        ("sort", self.config.sort.as_str()),
        ("retmode", "json"),
      ])
      .send()
      .await?;

    if !response.status().is_success() {
      warn!("esearch returned status {}", response.status());
      return Err(PubmineError::Api(format!("search failed with status {}", response.status())));
    }

    let body: ESearchResponse = response.json().await?;
    trace!("esearch ids: {:?}", body.esearchresult.idlist);
    Ok(body.esearchresult.idlist)
  }

  async fn fetch(&self, ids: &[String]) -> Result<ArticleSet> {
    if ids.is_empty() {
      debug!("No identifiers to fetch, returning empty document");
      return Ok(ArticleSet::default());
    }

    let url = format!("{}/efetch.fcgi", self.config.base_url);
    let id_list = ids.join(",");
    debug!("Fetching {} article(s) via: {}", ids.len(), url);

    let response = self
      .http
      .get(&url)
      .query(&[("db", "pubmed"), ("id", id_list.as_str()), ("retmode", "xml")])
      .send()
      .await?;

    if !response.status().is_success() {
      warn!("efetch returned status {}", response.status());
      return Err(PubmineError::Api(format!("fetch failed with status {}", response.status())));
    }

    let body = response.text().await?;
    trace!("efetch response: {}", body);
    parse_article_set(&body)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn empty_id_list_returns_empty_set_without_a_request() {
    // Unroutable base URL: any request issued here would error out.
    let client = EntrezClient::new(ClientConfig {
      base_url: "http://127.0.0.1:0".to_string(),
      ..Default::default()
    });

    let set = client.fetch(&[]).await.unwrap();
    assert!(set.articles.is_empty());
  }
}
