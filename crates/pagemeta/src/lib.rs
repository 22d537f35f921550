// ABOUTME: Main library entry point for pagemeta, an article metadata extractor.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, ExtractionResult, LoadError, extract_metadata.

//! pagemeta - extract title, subtitle, author and creation date from web pages.
//!
//! Each field is located through an ordered chain of structured sources (meta
//! tags, `<time>` elements, common theme classes) and falls back to mining the
//! rendered text when the markup carries nothing usable. Missing fields are
//! `None`; only loading a page can fail.
//!
//! # Example
//!
//! ```no_run
//! use pagemeta::{Client, LoadError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), LoadError> {
//!     let client = Client::builder().build();
//!     let meta = client.extract("https://example.com/article").await?;
//!     println!("{:?}", meta.title);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod document;
pub mod envelope;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod options;
pub mod resource;
pub mod result;

pub use crate::client::Client;
pub use crate::document::Document;
pub use crate::envelope::ErrorResponse;
pub use crate::error::{ErrorCode, LoadError};
pub use crate::extractors::{extract_document, extract_document_in_year, extract_metadata};
pub use crate::options::{ClientBuilder, Options};
pub use crate::result::{assemble, ExtractionResult};
