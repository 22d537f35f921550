// ABOUTME: Field extraction pipeline: rule chains, title splitting, date normalization and author mining.
// ABOUTME: extract_document runs every field independently and assembles one ExtractionResult.

//! Field extraction module.
//!
//! Submodules:
//! - `rules`: static field rule tables and the ordered-fallback resolver.
//! - `title`: title/subtitle splitting.
//! - `date`: structured and free-text date normalization.
//! - `author`: structured and byline-phrase author resolution.

pub mod author;
pub mod date;
pub mod rules;
pub mod title;

use chrono::{Datelike, Local};

use crate::document::Document;
use crate::result::{assemble, ExtractionResult};

/// Extract every field from an already parsed document.
///
/// Fields are resolved independently; a missing field never stops the others.
pub fn extract_document(doc: &Document) -> ExtractionResult {
    extract_document_in_year(doc, Local::now().year())
}

/// Like [`extract_document`], with an explicit current year for month-day dates.
pub fn extract_document_in_year(doc: &Document, current_year: i32) -> ExtractionResult {
    let title = rules::resolve(doc, rules::TITLE_RULES).map(|raw| title::split_title(&raw));
    let author = author::resolve_author(doc);
    let creation_date = date::normalize_date_in_year(doc, current_year);
    assemble(title, author, creation_date)
}

/// Parse `html` and extract every field.
pub fn extract_metadata(html: &str) -> ExtractionResult {
    extract_document(&Document::parse(html))
}
