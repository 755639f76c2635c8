//! CSV output handling.
//!
//! The writer produces a six-column UTF-8 CSV: one fixed header row, then
//! one row per surviving article. List-valued fields are rendered as
//! joined text; the exact rendering is a presentation concern, not part of
//! the extraction semantics. An empty record list still produces the
//! header so downstream tooling always sees the schema.

use super::*;

/// Fixed output column names, one per [`ArticleRecord`] field.
const HEADER: [&str; 6] =
  ["pmid", "title", "publication_types", "authors", "affiliations", "emails"];

/// Rejects operator-supplied output paths that do not end in `.csv`.
///
/// Called before any network activity so an invalid invocation has no
/// side effects.
///
/// # Examples
///
/// ```
/// use pubmine::output::validate_path;
///
/// assert!(validate_path("results.csv").is_ok());
/// assert!(validate_path("out.txt").is_err());
/// ```
pub fn validate_path(path: &str) -> Result<()> {
  if Path::new(path).extension().is_some_and(|ext| ext == "csv") {
    Ok(())
  } else {
    Err(PubmineError::InvalidOutputPath(path.to_string()))
  }
}

/// Generates the default output file name for a search keyword.
///
/// The keyword is slugified to keep the name filesystem-friendly:
/// `"breast cancer"` becomes `pubmed_breast_cancer.csv`.
pub fn default_path(keyword: &str) -> String {
  let slug = keyword
    .to_lowercase()
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
    .collect::<String>();
  format!("pubmed_{}.csv", slug.trim_matches('_'))
}

/// Writes the header row and one row per record to `path`.
///
/// The file is created (or truncated) once, written sequentially, and
/// flushed before returning on every exit path.
pub fn write_records(path: impl AsRef<Path>, records: &[ArticleRecord]) -> Result<()> {
  let mut writer = csv::Writer::from_path(path.as_ref())?;
  writer.write_record(HEADER)?;

  for record in records {
    writer.write_record([
      record.pmid.as_str(),
      record.title.as_str(),
      record.publication_types.as_str(),
      record.authors.join("; ").as_str(),
      join_groups(&record.affiliations).as_str(),
      join_groups(&record.emails).as_str(),
    ])?;
  }

  writer.flush()?;
  debug!("Wrote {} record(s) to {}", records.len(), path.as_ref().display());
  Ok(())
}

/// Renders per-author string groups: `", "` within a group, `"; "` between.
fn join_groups(groups: &[Vec<String>]) -> String {
  groups.iter().map(|group| group.join(", ")).collect::<Vec<_>>().join("; ")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_record() -> ArticleRecord {
    ArticleRecord {
      pmid:              "12345678".to_string(),
      title:             "A study".to_string(),
      publication_types: "Journal Article".to_string(),
      authors:           vec!["Kept One".to_string(), "Kept Two".to_string()],
      affiliations:      vec![
        vec!["LabCorp Industries".to_string()],
        vec!["First Lab".to_string(), "Second Lab".to_string()],
      ],
      emails:            vec![vec!["contact@labcorp.com".to_string()], vec![]],
    }
  }

  #[test]
  fn empty_record_list_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    write_records(&path, &[]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.trim(), "pmid,title,publication_types,authors,affiliations,emails");
  }

  #[test]
  fn records_render_one_row_each() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.csv");

    write_records(&path, &[sample_record()]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert!(lines.next().unwrap().starts_with("pmid,"));

    let row = lines.next().unwrap();
    assert!(row.contains("12345678"));
    assert!(row.contains("Kept One; Kept Two"));
    assert!(row.contains("LabCorp Industries; First Lab, Second Lab"));
    assert!(row.contains("contact@labcorp.com"));
    assert_eq!(lines.next(), None);
  }

  #[test]
  fn csv_extension_is_required() {
    assert!(validate_path("results.csv").is_ok());
    assert!(matches!(validate_path("out.txt"), Err(PubmineError::InvalidOutputPath(_))));
    assert!(matches!(validate_path("no_extension"), Err(PubmineError::InvalidOutputPath(_))));
  }

  #[test]
  fn default_path_slugifies_the_keyword() {
    assert_eq!(default_path("breast cancer"), "pubmed_breast_cancer.csv");
    assert_eq!(default_path("p53 (human)"), "pubmed_p53__human.csv");
  }
}
