// ABOUTME: Resolves a page's author from structured markup, then from byline phrases in the text.
// ABOUTME: Recognises English and Japanese byline labels and name-shaped runs after them.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::Document;
use crate::extractors::rules::{resolve, AUTHOR_RULES};

/// A byline label followed on the same line by a capitalised Latin name or a
/// run of CJK characters.
///
/// The label is required: a bare capitalised run is not taken as an author.
static BYLINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:\b(?i:written[ \t]+by|by)\b[ \t]*[:：]?|(?:作者|著者)[ \t]*[:：])[ \t\x{3000}]*(?P<name>\p{Lu}[\p{L}\p{M}.'\-]*(?:[ \t]+\p{Lu}[\p{L}\p{M}.'\-]*)*|[\p{Han}\p{Hiragana}\p{Katakana}ー]+(?:[ \x{3000}][\p{Han}\p{Hiragana}\p{Katakana}ー]+)?)",
    )
    .unwrap()
});

/// A label left at the front of a captured name.
static LEADING_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:written\s+by|by)\b\s*[:：]?\s*|^(?:作者|著者)\s*[:：]\s*").unwrap()
});

/// Collapses runs of whitespace into single spaces.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve the document's author.
pub fn resolve_author(doc: &Document) -> Option<String> {
    if let Some(raw) = resolve(doc, AUTHOR_RULES) {
        let author = normalize_whitespace(&strip_labels(&raw));
        if !author.is_empty() {
            tracing::debug!(%author, "author resolved from structured markup");
            return Some(author);
        }
    }
    let author = mine_author(&doc.rendered_text())?;
    tracing::debug!(%author, "author mined from byline text");
    Some(author)
}

/// Find a byline phrase in free text and return the name that follows it.
pub fn mine_author(text: &str) -> Option<String> {
    let caps = BYLINE_RE.captures(text)?;
    let name = strip_labels(caps.name("name")?.as_str());
    (!name.is_empty()).then(|| normalize_whitespace(&name))
}

/// Remove any byline labels still at the front of `raw`, then trim.
fn strip_labels(raw: &str) -> String {
    let mut rest = raw.trim();
    while let Some(found) = LEADING_LABEL_RE.find(rest) {
        rest = rest[found.end()..].trim_start();
    }
    rest.trim().to_string()
}
