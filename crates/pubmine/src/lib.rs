//! PubMed literature search and author contact extraction library.
//!
//! `pubmine` queries the NCBI E-utilities endpoints for articles matching a
//! keyword, pulls the article metadata documents, and distills them into
//! per-article records of authors worth contacting:
//!
//! - Keyword search against `esearch` with a bounded result cap
//! - Batched metadata retrieval from `efetch`
//! - Typed parsing of the PubMed XML document tree
//! - Heuristic filtering of purely institutional author entries
//! - CSV serialization of the surviving records
//!
//! # Getting Started
//!
//! ```no_run
//! use pubmine::{client::EntrezClient, output, pipeline, prelude::*};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!   let client = EntrezClient::default();
//!   let records = pipeline::harvest(&client, "breast cancer").await?;
//!   output::write_records("results.csv", &records)?;
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`client`]: E-utilities search and fetch clients
//! - [`document`]: Raw PubMed XML document parsing
//! - [`record`]: Extracted article and author types
//! - [`extract`]: Affiliation parsing and author validation
//! - [`output`]: CSV output handling
//! - [`pipeline`]: End-to-end search orchestration
//!
//! # Design Philosophy
//!
//! The library treats the remote endpoints as two abstract collaborators
//! behind the [`client::LiteratureClient`] trait, so the extraction pipeline
//! can be exercised without any network access. Malformed or partially
//! missing document nodes skip the affected article or author rather than
//! failing a whole run.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::Path;

use async_trait::async_trait;
use lazy_static::lazy_static;
use quick_xml::{events::Event, Reader};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

pub mod client;
pub mod document;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod record;

use crate::{document::*, error::*, record::*};

/// Common traits and types for ergonomic imports.
///
/// # Usage
///
/// ```no_run
/// use pubmine::{client::EntrezClient, prelude::*};
///
/// async fn example() -> Result<()> {
///   let client = EntrezClient::default();
///   let ids = client.search("telomere maintenance").await?;
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    client::LiteratureClient,
    error::{PubmineError, Result},
  };
}
