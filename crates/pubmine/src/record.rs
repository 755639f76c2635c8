//! Extracted article and author record types.
//!
//! These are the normalized products of the extraction pipeline: a
//! [`RawArticle`](crate::document::RawArticle) that survives author
//! validation becomes one [`ArticleRecord`]; each raw author node that
//! carries affiliation text becomes an intermediate [`AuthorInfo`] on the
//! way there.

use super::*;

/// One article with its validated, contact-worthy authors.
///
/// The three per-author vectors are index-aligned: position `i` of
/// `authors`, `affiliations`, and `emails` all describe the same author.
/// Records are only constructed for articles with at least one author that
/// survives [`extract::filter_authors`](crate::extract::filter_authors).
///
/// # Examples
///
/// ```
/// use pubmine::record::ArticleRecord;
///
/// let record = ArticleRecord {
///   pmid:              "12345678".to_string(),
///   title:             "A study".to_string(),
///   publication_types: "Journal Article".to_string(),
///   authors:           vec!["Alice Researcher".to_string()],
///   affiliations:      vec![vec!["LabCorp Industries".to_string()]],
///   emails:            vec![vec!["alice@labcorp.com".to_string()]],
/// };
/// assert_eq!(record.authors.len(), record.emails.len());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
  /// PubMed identifier for the article
  pub pmid:              String,
  /// The article's full title
  pub title:             String,
  /// Comma-joined publication type tags, in source order
  pub publication_types: String,
  /// Validated author names, one per surviving author
  pub authors:           Vec<String>,
  /// Affiliation strings per surviving author, aligned with `authors`
  pub affiliations:      Vec<Vec<String>>,
  /// Email addresses per surviving author, aligned with `authors`
  pub emails:            Vec<Vec<String>>,
}

/// Contact information for a single author, prior to validation.
///
/// Built from one raw author node and consumed immediately by the
/// institutional filter; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInfo {
  /// Author's name, forename then surname
  pub name:         String,
  /// Affiliation strings in source order, always non-empty for authors
  /// that reach validation
  pub affiliations: Vec<String>,
  /// Email addresses found inside the affiliation strings, in order of
  /// discovery
  pub emails:       Vec<String>,
}
