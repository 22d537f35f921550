// ABOUTME: ExtractionResult record and the assembler that builds it from per-field outputs.
// ABOUTME: Empty strings never surface; a missing field serializes as JSON null.

use serde::{Deserialize, Serialize};

use crate::extractors::title::TitleParts;

/// Metadata extracted from one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub creation_date: Option<String>,
}

impl ExtractionResult {
    /// Returns true if no field was found.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.subtitle.is_none()
            && self.author.is_none()
            && self.creation_date.is_none()
    }

    /// Returns true if the result has an author.
    pub fn has_author(&self) -> bool {
        self.author.is_some()
    }

    /// Returns true if the result has a creation date.
    pub fn has_date(&self) -> bool {
        self.creation_date.is_some()
    }
}

/// Trimmed value, or `None` when nothing but whitespace remains.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Merge independently resolved fields into one result.
pub fn assemble(
    title: Option<TitleParts>,
    author: Option<String>,
    creation_date: Option<String>,
) -> ExtractionResult {
    let (title, subtitle) = match title {
        Some(parts) => (present(Some(parts.title)), present(parts.subtitle)),
        None => (None, None),
    };
    ExtractionResult {
        title,
        subtitle,
        author: present(author),
        creation_date: present(creation_date),
    }
}
