// ABOUTME: Declarative field rules and the ordered-fallback resolver that evaluates them.
// ABOUTME: Holds the static title, date and author rule tables shared by every extraction.

//! Candidate chain resolution.
//!
//! A field is located by walking an ordered list of [`FieldRule`]s against a
//! [`Document`]. Key behaviors:
//! - Rules are tried strictly in order; the first non-empty trimmed candidate wins.
//! - Empty or whitespace-only candidates count as no match.
//! - Rule tables are `'static` and never mutated.

use crate::document::Document;

/// Where to look for a field's raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// `content` attribute of the first matching `<meta>` element.
    Meta(&'static str),
    /// A named attribute of the first matching element.
    Attr {
        selector: &'static str,
        attr: &'static str,
    },
    /// Text content of the first matching element.
    Text(&'static str),
}

impl FieldRule {
    /// Evaluate this rule, producing a raw candidate.
    pub fn candidate(&self, doc: &Document) -> Option<String> {
        match *self {
            FieldRule::Meta(selector) => doc.attr_first(selector, "content"),
            FieldRule::Attr { selector, attr } => doc.attr_first(selector, attr),
            FieldRule::Text(selector) => doc.text_first(selector),
        }
    }
}

/// Sources for the raw page title.
pub static TITLE_RULES: &[FieldRule] = &[
    FieldRule::Text("title"),
    FieldRule::Meta("meta[property='og:title']"),
    FieldRule::Meta("meta[name='title']"),
];

/// Structured sources for the publication date, in priority order.
pub static DATE_RULES: &[FieldRule] = &[
    FieldRule::Meta("meta[name='date']"),
    FieldRule::Meta("meta[property='article:published_time']"),
    FieldRule::Meta("meta[name='publish_date']"),
    FieldRule::Meta("meta[itemprop='datePublished']"),
    FieldRule::Attr {
        selector: "time[datetime]",
        attr: "datetime",
    },
    FieldRule::Text(".entry-date.date.published"),
    FieldRule::Text(".post-date .entry-date"),
];

/// Structured sources for the author, in priority order.
pub static AUTHOR_RULES: &[FieldRule] = &[
    FieldRule::Meta("meta[name='author']"),
    FieldRule::Meta("meta[property='article:author']"),
    FieldRule::Meta("meta[itemprop='author']"),
    FieldRule::Text("[itemprop='author'] [itemprop='name']"),
    FieldRule::Meta("meta[name='byl']"),
    FieldRule::Meta("meta[name='creator']"),
    FieldRule::Meta("meta[name='dc.creator']"),
    FieldRule::Text(".author"),
    FieldRule::Text(".post-author"),
    FieldRule::Text(".byline"),
    FieldRule::Text("span[itemprop='author']"),
    FieldRule::Text("a[rel='author']"),
];

/// Returns the first non-empty trimmed candidate produced by `rules`, in order.
pub fn resolve(doc: &Document, rules: &[FieldRule]) -> Option<String> {
    rules.iter().find_map(|rule| {
        rule.candidate(doc)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <meta name="author" content="   ">
            <meta property="article:author" content="Jane Doe">
            <meta property="article:published_time" content="2024-01-15T10:00:00Z">
        </head>
        <body>
            <span class="byline">By John Smith</span>
            <p class="author">  Alice  </p>
            <time datetime="2023-12-01T12:00:00Z">December 1, 2023</time>
        </body>
        </html>
    "#;

    #[test]
    fn first_non_empty_rule_wins() {
        let doc = Document::parse(SAMPLE_HTML);
        let rules = [
            FieldRule::Meta("meta[name='author']"),
            FieldRule::Meta("meta[property='article:author']"),
            FieldRule::Text(".author"),
        ];
        assert_eq!(resolve(&doc, &rules), Some("Jane Doe".to_string()));
    }

    #[test]
    fn order_decides_between_matches() {
        let doc = Document::parse(SAMPLE_HTML);
        let rules = [FieldRule::Text(".byline"), FieldRule::Text(".author")];
        assert_eq!(resolve(&doc, &rules), Some("By John Smith".to_string()));

        let rules = [FieldRule::Text(".author"), FieldRule::Text(".byline")];
        assert_eq!(resolve(&doc, &rules), Some("Alice".to_string()));
    }

    #[test]
    fn attr_rule_reads_named_attribute() {
        let doc = Document::parse(SAMPLE_HTML);
        let rules = [FieldRule::Attr {
            selector: "time[datetime]",
            attr: "datetime",
        }];
        assert_eq!(
            resolve(&doc, &rules),
            Some("2023-12-01T12:00:00Z".to_string())
        );
    }

    #[test]
    fn exhausted_chain_is_none() {
        let doc = Document::parse(SAMPLE_HTML);
        let rules = [FieldRule::Text(".foo"), FieldRule::Meta("meta[name='bar']")];
        assert!(resolve(&doc, &rules).is_none());
        assert!(resolve(&doc, &[]).is_none());
    }

    #[test]
    fn date_table_prefers_meta_over_time_element() {
        let doc = Document::parse(SAMPLE_HTML);
        assert_eq!(
            resolve(&doc, DATE_RULES),
            Some("2024-01-15T10:00:00Z".to_string())
        );
    }

    #[test]
    fn author_table_skips_blank_meta() {
        let doc = Document::parse(SAMPLE_HTML);
        assert_eq!(resolve(&doc, AUTHOR_RULES), Some("Jane Doe".to_string()));
    }

    #[test]
    fn author_table_reaches_rel_author_links() {
        let doc = Document::parse(r#"<html><body><a rel="author" href="/u/k">Kim Lee</a></body></html>"#);
        assert_eq!(resolve(&doc, AUTHOR_RULES), Some("Kim Lee".to_string()));
    }

    #[test]
    fn title_table_falls_back_to_og_title() {
        let doc = Document::parse(
            r#"<html><head><title> </title><meta property="og:title" content="OG Title"></head></html>"#,
        );
        assert_eq!(resolve(&doc, TITLE_RULES), Some("OG Title".to_string()));
    }
}
