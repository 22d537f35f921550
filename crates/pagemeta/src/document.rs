// ABOUTME: Read-only Document model over parsed HTML used by every extractor.
// ABOUTME: Offers find-or-absent attribute and text lookups plus script-free rendered text.

//! Document model.
//!
//! Wraps a parsed `scraper::Html` tree. Every lookup returns `Option` and never
//! fails on missing structure; invalid selectors are treated as "no match".

use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};

/// Elements whose text never reaches the reader.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Elements that start a new line of rendered text.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main",
    "nav", "ol", "p", "pre", "section", "table", "td", "th", "title", "tr", "ul",
];

/// A parsed HTML document, immutable for the duration of one extraction.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse raw markup. Malformed HTML is repaired by the parser, never rejected.
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    /// Returns the trimmed value of `attr` on the first element matching
    /// `selector` that carries a non-empty value.
    pub fn attr_first(&self, selector: &str, attr: &str) -> Option<String> {
        let sel = Selector::parse(selector).ok()?;
        for el in self.html.select(&sel) {
            if let Some(value) = el.value().attr(attr) {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }

    /// Returns the trimmed text content of the first element matching
    /// `selector` whose text is non-empty. Inner whitespace is preserved.
    pub fn text_first(&self, selector: &str) -> Option<String> {
        let sel = Selector::parse(selector).ok()?;
        for el in self.html.select(&sel) {
            let text: String = el.text().collect();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        None
    }

    /// Text of the whole document as a reader would see it.
    ///
    /// Script, style, noscript and template content is excluded. Block-level
    /// elements and `<br>` end a line; inline elements are joined in place.
    pub fn rendered_text(&self) -> String {
        let mut out = String::new();
        push_rendered_text(self.html.tree.root(), &mut out);
        out
    }
}

fn push_rendered_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(text),
        Node::Element(el) => {
            let name = el.name();
            if SKIPPED_TAGS.contains(&name) {
                return;
            }
            let block = BLOCK_TAGS.contains(&name);
            if block && !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            for child in node.children() {
                push_rendered_text(child, out);
            }
            if block && !out.ends_with('\n') {
                out.push('\n');
            }
        }
        _ => {
            for child in node.children() {
                push_rendered_text(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>  Sample | Site  </title>
            <meta name="author" content="  Jane Doe  ">
            <meta name="empty" content="   ">
            <meta name="empty" content="second">
            <style>.byline { color: red; }</style>
        </head>
        <body>
            <p class="intro">Hello <b>bold</b> world</p>
            <script>var published = "2020-01-01";</script>
            <time datetime="2023-12-01T12:00:00Z">December 1, 2023</time>
            <div>Line one<br>Line two</div>
        </body>
        </html>
    "#;

    #[test]
    fn attr_first_trims_value() {
        let doc = Document::parse(SAMPLE_HTML);
        assert_eq!(
            doc.attr_first("meta[name='author']", "content"),
            Some("Jane Doe".to_string())
        );
    }

    #[test]
    fn attr_first_skips_blank_matches() {
        let doc = Document::parse(SAMPLE_HTML);
        assert_eq!(
            doc.attr_first("meta[name='empty']", "content"),
            Some("second".to_string())
        );
    }

    #[test]
    fn attr_first_missing_is_none() {
        let doc = Document::parse(SAMPLE_HTML);
        assert!(doc.attr_first("video", "src").is_none());
        assert!(doc.attr_first("time", "missing").is_none());
    }

    #[test]
    fn invalid_selector_is_none() {
        let doc = Document::parse(SAMPLE_HTML);
        assert!(doc.attr_first("meta[[", "content").is_none());
        assert!(doc.text_first("::::").is_none());
    }

    #[test]
    fn text_first_keeps_inner_whitespace() {
        let doc = Document::parse(SAMPLE_HTML);
        assert_eq!(doc.text_first("title"), Some("Sample | Site".to_string()));
        assert_eq!(
            doc.text_first(".intro"),
            Some("Hello bold world".to_string())
        );
    }

    #[test]
    fn rendered_text_excludes_script_and_style() {
        let doc = Document::parse(SAMPLE_HTML);
        let text = doc.rendered_text();
        assert!(!text.contains("2020-01-01"), "script leaked: {text}");
        assert!(!text.contains("color: red"), "style leaked: {text}");
        assert!(text.contains("Hello bold world"));
        assert!(text.contains("December 1, 2023"));
    }

    #[test]
    fn rendered_text_breaks_lines_at_blocks() {
        let doc = Document::parse(SAMPLE_HTML);
        let text = doc.rendered_text();
        assert!(text.contains("Line one\nLine two"), "got: {text:?}");
    }

    #[test]
    fn malformed_markup_does_not_panic() {
        let doc = Document::parse("<p><div><span>unclosed");
        assert!(doc.rendered_text().contains("unclosed"));
        assert!(doc.text_first("title").is_none());
    }
}
