//! End-to-end search orchestration.
//!
//! One call chains the stages strictly in sequence: search the keyword,
//! fetch metadata for the matched identifiers, extract a record per
//! article that has at least one contact-worthy author. There is no
//! overlap between stages and no state beyond the values handed from one
//! stage to the next; a transport failure at either endpoint aborts the
//! run before any output exists.

use super::*;
use crate::client::LiteratureClient;

/// Runs a keyword search through the full extraction pipeline.
///
/// Returns the records for every article with at least one validated
/// author; articles without an author list, or whose authors are all
/// institutional, contribute nothing.
///
/// # Examples
///
/// ```no_run
/// use pubmine::{client::EntrezClient, pipeline, prelude::*};
///
/// # async fn example() -> Result<()> {
/// let client = EntrezClient::default();
/// let records = pipeline::harvest(&client, "telomere maintenance").await?;
/// for record in &records {
///   println!("{}: {} author(s)", record.pmid, record.authors.len());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn harvest<C: LiteratureClient>(client: &C, keyword: &str) -> Result<Vec<ArticleRecord>> {
  let ids = client.search(keyword).await?;
  debug!("Search for {:?} matched {} identifier(s)", keyword, ids.len());

  let document = client.fetch(&ids).await?;
  let records = document.articles.iter().filter_map(extract::extract_record).collect::<Vec<_>>();
  debug!("{} of {} article(s) had valid authors", records.len(), document.articles.len());

  Ok(records)
}

/// Runs [`harvest`] and writes the results to `path`.
///
/// The output path is validated strictly before any endpoint call: an
/// invalid path returns [`PubmineError::InvalidOutputPath`] with zero
/// network activity and no file created. An empty harvest still writes the
/// header row. Returns the records that were written.
///
/// # Examples
///
/// ```no_run
/// use pubmine::{client::EntrezClient, pipeline, prelude::*};
///
/// # async fn example() -> Result<()> {
/// let client = EntrezClient::default();
/// let records = pipeline::harvest_to_file(&client, "breast cancer", "results.csv").await?;
/// println!("Wrote {} record(s)", records.len());
/// # Ok(())
/// # }
/// ```
pub async fn harvest_to_file<C: LiteratureClient>(
  client: &C,
  keyword: &str,
  path: &str,
) -> Result<Vec<ArticleRecord>> {
  output::validate_path(path)?;

  let records = harvest(client, keyword).await?;
  output::write_records(path, &records)?;
  Ok(records)
}
