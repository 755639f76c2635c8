//! Raw PubMed XML document parsing.
//!
//! The `efetch` endpoint returns a `PubmedArticleSet` markup document whose
//! shape is ambiguous between singular and plural encodings in several
//! places (one article vs. many, one affiliation vs. many, one publication
//! type vs. many). Walking the event stream and accumulating repeated
//! elements into `Vec`s normalizes every one of those ambiguities uniformly:
//! a document containing a single `PubmedArticle` and a document containing
//! a list of them parse into the same [`ArticleSet`] shape.
//!
//! Fields the extractor needs that are absent from a given node simply stay
//! at their defaults; downstream code decides whether that skips the author
//! or the article. A missing field is never a parse failure.

use super::*;

/// The parsed top-level retrieval document.
///
/// Produced by [`parse_article_set`]; an empty id list upstream yields an
/// empty set without any network round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleSet {
  /// Every `PubmedArticle` node found in the document, in source order
  pub articles: Vec<RawArticle>,
}

/// One `PubmedArticle` node, reduced to the fields the extractor consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArticle {
  /// Article identifier from `MedlineCitation/PMID`
  pub pmid:              String,
  /// Title text from `Article/ArticleTitle`, nested markup flattened
  pub title:             String,
  /// Publication type tags from `PublicationTypeList`, in source order
  pub publication_types: Vec<String>,
  /// Author nodes from `AuthorList`; `None` when the article carries no
  /// `AuthorList` element at all, which is distinct from an empty list
  pub authors:           Option<Vec<RawAuthor>>,
}

/// One `Author` node from an article's `AuthorList`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAuthor {
  /// `ForeName` text, when present
  pub fore_name:    Option<String>,
  /// `LastName` text, when present
  pub last_name:    Option<String>,
  /// `AffiliationInfo/Affiliation` text strings, in source order; empty
  /// when the author node carries no affiliation field
  pub affiliations: Vec<String>,
}

/// Parses an `efetch` response body into an [`ArticleSet`].
///
/// Only malformed markup at the event-stream level is an error; articles
/// with missing or unexpected fields parse into partially-defaulted
/// [`RawArticle`]s and are filtered downstream.
///
/// # Examples
///
/// ```
/// let xml = r#"<PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID Version="1">12345678</PMID>
///       <Article><ArticleTitle>A study</ArticleTitle></Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let set = pubmine::document::parse_article_set(xml).unwrap();
/// assert_eq!(set.articles[0].pmid, "12345678");
/// ```
pub fn parse_article_set(xml: &str) -> Result<ArticleSet> {
  let mut reader = Reader::from_str(xml);
  reader.config_mut().trim_text(true);

  let mut set = ArticleSet::default();
  let mut buf = Vec::new();

  loop {
    match reader.read_event_into(&mut buf)? {
      Event::Start(e) if e.name().as_ref() == b"PubmedArticle" => {
        set.articles.push(parse_article(&mut reader)?);
      },
      Event::Eof => break,
      _ => (),
    }
    buf.clear();
  }

  trace!("Parsed {} article node(s)", set.articles.len());
  Ok(set)
}

/// Parses one `PubmedArticle` subtree, positioned just past its start tag.
fn parse_article(reader: &mut Reader<&[u8]>) -> Result<RawArticle> {
  let mut article = RawArticle::default();
  let mut buf = Vec::new();

  loop {
    match reader.read_event_into(&mut buf)? {
      Event::Start(e) => match e.name().as_ref() {
        b"PMID" =>
          if article.pmid.is_empty() {
            article.pmid = read_text(reader)?;
          },
        b"ArticleTitle" => article.title = read_text(reader)?,
        b"PublicationTypeList" => article.publication_types = parse_publication_types(reader)?,
        b"AuthorList" => article.authors = Some(parse_author_list(reader)?),
        _ => (),
      },
      Event::End(e) if e.name().as_ref() == b"PubmedArticle" => break,
      Event::Eof => break,
      _ => (),
    }
    buf.clear();
  }

  Ok(article)
}

/// Collects `PublicationType` text values, preserving source order.
fn parse_publication_types(reader: &mut Reader<&[u8]>) -> Result<Vec<String>> {
  let mut types = Vec::new();
  let mut buf = Vec::new();

  loop {
    match reader.read_event_into(&mut buf)? {
      Event::Start(e) if e.name().as_ref() == b"PublicationType" => {
        let text = read_text(reader)?;
        if !text.is_empty() {
          types.push(text);
        }
      },
      Event::End(e) if e.name().as_ref() == b"PublicationTypeList" => break,
      Event::Eof => break,
      _ => (),
    }
    buf.clear();
  }

  Ok(types)
}

/// Collects every `Author` node inside an `AuthorList`.
fn parse_author_list(reader: &mut Reader<&[u8]>) -> Result<Vec<RawAuthor>> {
  let mut authors = Vec::new();
  let mut buf = Vec::new();

  loop {
    match reader.read_event_into(&mut buf)? {
      Event::Start(e) if e.name().as_ref() == b"Author" => {
        authors.push(parse_author(reader)?);
      },
      Event::End(e) if e.name().as_ref() == b"AuthorList" => break,
      Event::Eof => break,
      _ => (),
    }
    buf.clear();
  }

  Ok(authors)
}

/// Parses one `Author` node's name parts and affiliation strings.
fn parse_author(reader: &mut Reader<&[u8]>) -> Result<RawAuthor> {
  let mut author = RawAuthor::default();
  let mut buf = Vec::new();

  loop {
    match reader.read_event_into(&mut buf)? {
      Event::Start(e) => match e.name().as_ref() {
        b"ForeName" => author.fore_name = Some(read_text(reader)?),
        b"LastName" => author.last_name = Some(read_text(reader)?),
        b"AffiliationInfo" =>
          if let Some(affiliation) = parse_affiliation(reader)? {
            author.affiliations.push(affiliation);
          },
        _ => (),
      },
      Event::End(e) if e.name().as_ref() == b"Author" => break,
      Event::Eof => break,
      _ => (),
    }
    buf.clear();
  }

  Ok(author)
}

/// Reads the `Affiliation` text out of an `AffiliationInfo` node, if any.
fn parse_affiliation(reader: &mut Reader<&[u8]>) -> Result<Option<String>> {
  let mut affiliation = None;
  let mut buf = Vec::new();

  loop {
    match reader.read_event_into(&mut buf)? {
      Event::Start(e) if e.name().as_ref() == b"Affiliation" => {
        let text = read_text(reader)?;
        if !text.is_empty() {
          affiliation = Some(text);
        }
      },
      Event::End(e) if e.name().as_ref() == b"AffiliationInfo" => break,
      Event::Eof => break,
      _ => (),
    }
    buf.clear();
  }

  Ok(affiliation)
}

/// Reads the text content of the element whose start tag was just consumed,
/// flattening nested markup such as `<i>` and `<sup>`.
fn read_text(reader: &mut Reader<&[u8]>) -> Result<String> {
  let mut text = String::new();
  let mut buf = Vec::new();

  loop {
    match reader.read_event_into(&mut buf)? {
      Event::Text(e) => text.push_str(&e.unescape()?),
      Event::Start(_) => text.push_str(&read_text(reader)?),
      Event::End(_) => break,
      Event::Eof => break,
      _ => (),
    }
    buf.clear();
  }

  Ok(text)
}

#[cfg(test)]
mod tests {
  use super::*;

  /// An article node with two authors, only one of which has affiliations.
  const TWO_AUTHOR_ARTICLE: &str = r#"
    <PubmedArticle>
      <MedlineCitation>
        <PMID Version="1">11111111</PMID>
        <Article>
          <ArticleTitle>Tumor <i>suppressor</i> dynamics</ArticleTitle>
          <AuthorList CompleteYN="Y">
            <Author ValidYN="Y">
              <LastName>Curie</LastName>
              <ForeName>Marie</ForeName>
              <AffiliationInfo>
                <Affiliation>Radium Lab, contact@radium.fr office.</Affiliation>
              </AffiliationInfo>
              <AffiliationInfo>
                <Affiliation>Institute of Physics</Affiliation>
              </AffiliationInfo>
            </Author>
            <Author ValidYN="Y">
              <LastName>Anon</LastName>
            </Author>
          </AuthorList>
          <PublicationTypeList>
            <PublicationType UI="D016428">Journal Article</PublicationType>
            <PublicationType UI="D016454">Review</PublicationType>
          </PublicationTypeList>
        </Article>
      </MedlineCitation>
    </PubmedArticle>"#;

  fn wrap(body: &str) -> String { format!("<PubmedArticleSet>{body}</PubmedArticleSet>") }

  #[test]
  fn parses_nested_title_markup_and_ordered_fields() {
    let set = parse_article_set(&wrap(TWO_AUTHOR_ARTICLE)).unwrap();
    assert_eq!(set.articles.len(), 1);

    let article = &set.articles[0];
    assert_eq!(article.pmid, "11111111");
    assert_eq!(article.title, "Tumor suppressor dynamics");
    assert_eq!(article.publication_types, vec!["Journal Article", "Review"]);

    let authors = article.authors.as_ref().unwrap();
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].fore_name.as_deref(), Some("Marie"));
    assert_eq!(authors[0].affiliations.len(), 2);
    assert!(authors[1].affiliations.is_empty());
  }

  #[test]
  fn single_article_and_list_shapes_parse_identically() {
    let single = parse_article_set(&wrap(TWO_AUTHOR_ARTICLE)).unwrap();
    let listed =
      parse_article_set(&wrap(&format!("{TWO_AUTHOR_ARTICLE}{TWO_AUTHOR_ARTICLE}"))).unwrap();

    assert_eq!(listed.articles.len(), 2);
    assert_eq!(single.articles[0], listed.articles[0]);
    assert_eq!(listed.articles[0], listed.articles[1]);
  }

  #[test]
  fn article_without_author_list_has_no_authors_field() {
    let xml = wrap(
      r#"<PubmedArticle>
        <MedlineCitation>
          <PMID>22222222</PMID>
          <Article><ArticleTitle>Editorial note</ArticleTitle></Article>
        </MedlineCitation>
      </PubmedArticle>"#,
    );
    let set = parse_article_set(&xml).unwrap();
    assert_eq!(set.articles[0].authors, None);
  }

  #[test]
  fn missing_fields_default_instead_of_failing() {
    let set = parse_article_set(&wrap("<PubmedArticle></PubmedArticle>")).unwrap();
    let article = &set.articles[0];
    assert_eq!(article.pmid, "");
    assert_eq!(article.title, "");
    assert!(article.publication_types.is_empty());
    assert_eq!(article.authors, None);
  }

  #[test]
  fn empty_document_parses_to_empty_set() {
    let set = parse_article_set("<PubmedArticleSet></PubmedArticleSet>").unwrap();
    assert!(set.articles.is_empty());
  }
}
