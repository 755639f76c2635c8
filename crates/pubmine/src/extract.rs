//! Affiliation parsing, email extraction, and author validation.
//!
//! This is the heart of the pipeline: raw author nodes become
//! [`AuthorInfo`] values, the institutional filter decides which of those
//! are worth contacting, and articles with at least one survivor become
//! [`ArticleRecord`]s.
//!
//! The institutional filter is a deliberately coarse substring heuristic:
//! an affiliation mentioning "college" is institutional even when the
//! match is "Collegeville Labs". An author is kept as long as at least one
//! of their affiliation strings matches none of the keywords.

use super::*;

/// Substrings that classify an affiliation string as institutional.
///
/// Matched case-insensitively, without word boundaries.
pub const INSTITUTION_KEYWORDS: [&str; 5] =
  ["department", "school", "university", "institute", "college"];

lazy_static! {
  /// ASCII `local@domain.tld` contact address pattern, case-insensitive.
  static ref EMAIL_RE: Regex =
    Regex::new(r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}").unwrap();
}

/// Builds contact info for one raw author node.
///
/// Returns `None` when the node carries no affiliation text at all; such
/// authors have nothing extractable and are dropped before validation is
/// even attempted. The author's name joins the present name halves with a
/// single space, so a surname-only author reads `"Curie"` rather than
/// carrying a leading space.
pub fn author_info(raw: &RawAuthor) -> Option<AuthorInfo> {
  if raw.affiliations.is_empty() {
    return None;
  }

  let name = [raw.fore_name.as_deref(), raw.last_name.as_deref()]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ");

  let emails =
    raw.affiliations.iter().flat_map(|affiliation| extract_emails(affiliation)).collect();

  Some(AuthorInfo { name, affiliations: raw.affiliations.clone(), emails })
}

/// Extracts every embedded contact address from one affiliation string,
/// preserving order of discovery.
///
/// # Examples
///
/// ```
/// use pubmine::extract::extract_emails;
///
/// let found = extract_emails("LabCorp Industries, contact@labcorp.com office.");
/// assert_eq!(found, vec!["contact@labcorp.com"]);
/// ```
pub fn extract_emails(affiliation: &str) -> Vec<String> {
  EMAIL_RE.find_iter(affiliation).map(|m| m.as_str().to_string()).collect()
}

/// Whether an affiliation string matches any institutional keyword.
pub fn is_institutional(affiliation: &str) -> bool {
  let lowered = affiliation.to_lowercase();
  INSTITUTION_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Filters a list of authors down to the contact-worthy subsequence.
///
/// An author is kept iff at least one of their affiliation strings matches
/// none of the [`INSTITUTION_KEYWORDS`]; an author whose every affiliation
/// is institutional is excluded. An empty affiliation list excludes the
/// author vacuously (upstream already drops such authors, but an empty
/// list must not panic here). Order is preserved.
pub fn filter_authors(authors: Vec<AuthorInfo>) -> Vec<AuthorInfo> {
  authors
    .into_iter()
    .filter(|author| author.affiliations.iter().any(|affiliation| !is_institutional(affiliation)))
    .collect()
}

/// Distills one raw article node into an [`ArticleRecord`].
///
/// Returns `None` when the article contributes nothing to the output:
/// either it has no `AuthorList` field at all, or none of its authors
/// survive [`filter_authors`]. The record's per-author vectors are built
/// together from the surviving authors and are therefore index-aligned by
/// construction.
pub fn extract_record(article: &RawArticle) -> Option<ArticleRecord> {
  let raw_authors = article.authors.as_ref()?;

  let valid =
    filter_authors(raw_authors.iter().filter_map(author_info).collect::<Vec<_>>());
  if valid.is_empty() {
    debug!("Article {} has no valid authors, skipping", article.pmid);
    return None;
  }

  let mut authors = Vec::with_capacity(valid.len());
  let mut affiliations = Vec::with_capacity(valid.len());
  let mut emails = Vec::with_capacity(valid.len());
  for author in valid {
    authors.push(author.name);
    affiliations.push(author.affiliations);
    emails.push(author.emails);
  }

  Some(ArticleRecord {
    pmid: article.pmid.clone(),
    title: article.title.clone(),
    publication_types: article.publication_types.join(", "),
    authors,
    affiliations,
    emails,
  })
}
