// ABOUTME: Splits a raw page title into a title and an optional subtitle.
// ABOUTME: Only the first delimiter run splits; later delimiters become plain spaces in the subtitle.

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of title delimiters: pipe, fullwidth pipe, hyphen, en dash, em dash,
/// fullwidth hyphen, slash and ideographic space, with surrounding whitespace.
static DELIMITER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[|｜\-–—－/\x{3000}]+\s*").unwrap());

/// The two halves of a page title.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleParts {
    pub title: String,
    pub subtitle: Option<String>,
}

/// Split `raw` at its first delimiter run.
///
/// `title` is the text before the run. `subtitle` is everything after it, with
/// any further delimiter runs replaced by a single space. Without a delimiter
/// the whole trimmed string is the title.
pub fn split_title(raw: &str) -> TitleParts {
    let raw = raw.trim();
    let Some(found) = DELIMITER_RE.find(raw) else {
        return TitleParts {
            title: raw.to_string(),
            subtitle: None,
        };
    };

    let title = raw[..found.start()].trim().to_string();
    let rest = &raw[found.end()..];
    let subtitle = DELIMITER_RE
        .split(rest)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    TitleParts {
        title,
        subtitle: (!subtitle.is_empty()).then_some(subtitle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parts(title: &str, subtitle: Option<&str>) -> TitleParts {
        TitleParts {
            title: title.to_string(),
            subtitle: subtitle.map(str::to_string),
        }
    }

    #[test]
    fn splits_on_ascii_pipe() {
        assert_eq!(
            split_title("Example Site | Home"),
            parts("Example Site", Some("Home"))
        );
    }

    #[test]
    fn no_delimiter_keeps_whole_title() {
        assert_eq!(split_title("  Plain Title  "), parts("Plain Title", None));
    }

    #[test]
    fn each_delimiter_splits() {
        for delim in ["|", "｜", "-", "–", "—", "－", "/", "\u{3000}"] {
            let raw = format!("Left{delim}Right");
            assert_eq!(split_title(&raw), parts("Left", Some("Right")), "{delim:?}");
        }
    }

    #[test]
    fn only_first_delimiter_splits() {
        assert_eq!(
            split_title("News - World | Example Times"),
            parts("News", Some("World Example Times"))
        );
    }

    #[test]
    fn delimiter_runs_count_once() {
        assert_eq!(
            split_title("Article  --  Blog"),
            parts("Article", Some("Blog"))
        );
        assert_eq!(
            split_title("記事タイトル｜サイト名　トップ"),
            parts("記事タイトル", Some("サイト名 トップ"))
        );
    }

    #[test]
    fn trailing_delimiter_leaves_no_subtitle() {
        assert_eq!(split_title("Home |"), parts("Home", None));
    }

    #[test]
    fn leading_delimiter_leaves_empty_title() {
        assert_eq!(split_title("| Home"), parts("", Some("Home")));
    }

    #[test]
    fn title_never_contains_delimiters() {
        for raw in ["a|b|c", "x — y - z", "p / q", "m｜n"] {
            let split = split_title(raw);
            assert!(!DELIMITER_RE.is_match(&split.title), "{raw}: {split:?}");
        }
    }

    #[test]
    fn ascii_spaces_alone_do_not_split() {
        assert_eq!(
            split_title("A Title With Spaces"),
            parts("A Title With Spaces", None)
        );
    }
}
