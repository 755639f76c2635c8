//! Error types for the pubmine library.
//!
//! This module provides a single error type covering every failure mode of
//! the search-and-extract pipeline:
//! - Network and API errors from the E-utilities endpoints
//! - XML document parsing
//! - CSV output and file system access
//! - Operator input validation
//!
//! # Examples
//!
//! ```
//! use pubmine::{error::PubmineError, output};
//!
//! match output::validate_path("out.txt") {
//!   Err(PubmineError::InvalidOutputPath(path)) => println!("rejected: {}", path),
//!   _ => unreachable!(),
//! }
//! ```

use thiserror::Error;

/// Error type alias used for the [`pubmine`](crate) crate.
pub type Result<T> = core::result::Result<T, PubmineError>;

/// Errors that can occur when searching PubMed and extracting author records.
///
/// Transport and parsing failures wrap their underlying library errors;
/// domain failures carry a human-readable message for the operator.
#[derive(Error, Debug)]
pub enum PubmineError {
  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The endpoint is unreachable
  /// - TLS/SSL errors occur
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// An E-utilities endpoint returned a non-success response.
  ///
  /// The string parameter contains which stage failed (search or fetch)
  /// and the HTTP status for debugging. The pipeline aborts without
  /// writing any output when this occurs.
  #[error("API error: {0}")]
  Api(String),

  /// The retrieval endpoint's XML document could not be read.
  ///
  /// This covers malformed markup at the event-stream level. Articles with
  /// well-formed markup but missing fields are skipped, not errored.
  #[error(transparent)]
  Xml(#[from] quick_xml::Error),

  /// CSV serialization failed.
  #[error(transparent)]
  Csv(#[from] csv::Error),

  /// A file system operation failed.
  ///
  /// This occurs when creating or flushing the output file fails.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// The operator-supplied output path does not end in `.csv`.
  ///
  /// Rejected before any network activity so a bad invocation has no
  /// side effects.
  #[error("Output path \"{0}\" must end in .csv")]
  InvalidOutputPath(String),
}
