// ABOUTME: Resolves a page's creation date to canonical YYYY-MM-DD form.
// ABOUTME: Structured candidates are parsed first; free text is mined for calendar expressions after.

//! Date normalization.
//!
//! Two stages:
//! - Stage A resolves [`DATE_RULES`] and parses the winning candidate as a
//!   general date-time string.
//! - Stage B runs only when stage A produced nothing usable. It scans the
//!   rendered text for a labelled year-month-day expression, then any
//!   year-month-day expression, then a month-day expression which is assumed
//!   to fall in the current year.
//!
//! A match that is not a real calendar date yields `None`, never a guess.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::document::Document;
use crate::extractors::rules::{resolve, DATE_RULES};

/// Output format for every resolved date.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// `YYYY[年/.-]MM[月/.-]DD[日]`; the day may not run into further digits.
const YMD: &str = r"([0-9]{4})\s*[年/.\-]\s*([0-9]{1,2})\s*[月/.\-]\s*([0-9]{1,2})(?:\s*日|[^0-9]|$)";

static LABELED_YMD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)(?:作成日|投稿日|公開日|更新日|掲載日|creation\s+date|created|published|posted|date)\s*[:：]?\s*{YMD}"
    ))
    .unwrap()
});

static YMD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(&format!(r"(?:^|[^0-9]){YMD}")).unwrap());

/// Month-day with a 日 marker. A month right after 年 belongs to a year this
/// grammar cannot read, so it is not matched.
static MONTH_DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[^0-9年\s])\s*([0-9]{1,2})\s*[月/.\-]\s*([0-9]{1,2})\s*日").unwrap()
});

/// A date-time followed by a zone abbreviation.
static ZONE_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*[0-9])\s+[A-Z]{1,5}$").unwrap());

/// Which grammar produced a [`DateCandidate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateGrammar {
    /// Year-month-day preceded by a creation/publish label.
    Labeled,
    /// Year-month-day anywhere in the text.
    YearMonthDay,
    /// Month-day only; the year is inferred.
    MonthDay,
}

/// A calendar expression found in free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCandidate<'a> {
    pub raw: &'a str,
    pub grammar: DateGrammar,
    pub year: Option<i32>,
    pub month: u32,
    pub day: u32,
}

impl DateCandidate<'_> {
    /// The calendar date this candidate names, using `current_year` when the
    /// expression carried no year. Invalid dates (month 13, day 32) are `None`.
    pub fn to_date(&self, current_year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year.unwrap_or(current_year), self.month, self.day)
    }
}

/// Resolve the document's creation date, assuming the local clock's year for
/// month-day expressions.
pub fn normalize_date(doc: &Document) -> Option<String> {
    normalize_date_in_year(doc, Local::now().year())
}

/// Resolve the document's creation date with an explicit current year.
pub fn normalize_date_in_year(doc: &Document, current_year: i32) -> Option<String> {
    if let Some(raw) = resolve(doc, DATE_RULES) {
        if let Some(date) = parse_date(&raw) {
            tracing::debug!(candidate = %raw, "date resolved from structured markup");
            return Some(canonical(date));
        }
        tracing::debug!(candidate = %raw, "structured date did not parse, mining text");
    }

    let text = doc.rendered_text();
    let candidate = find_date_candidate(&text)?;
    let date = candidate.to_date(current_year);
    if date.is_none() {
        tracing::debug!(raw = candidate.raw, "matched text is not a calendar date");
    }
    date.map(canonical)
}

/// Format a date as `YYYY-MM-DD`.
pub fn canonical(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

/// Parse a general date or date-time string into a calendar date.
///
/// Date-times with an offset keep the calendar day as written rather than
/// converting to UTC.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // RFC3339 covers full ISO-8601 with offsets
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }

    const OFFSET_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
        "%Y-%m-%dT%H:%M%:z",
        "%Y-%m-%d %H:%M:%S%:z",
        "%Y-%m-%d %H:%M:%S %z",
    ];
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.date_naive());
        }
    }

    if let Some(date) = parse_naive(s) {
        return Some(date);
    }
    // A trailing zone name ("UTC", "PST") is dropped so the written day stands
    if let Some(caps) = ZONE_SUFFIX_RE.captures(s) {
        if let Some(date) = parse_naive(&caps[1]) {
            return Some(date);
        }
    }

    // Naive inputs are read as UTC so the host timezone never moves the day
    dateparser::parse_with_timezone(s, &Utc)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Try the offset-free date-time and date-only format tables.
fn parse_naive(s: &str) -> Option<NaiveDate> {
    const NAIVE_DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
        "%Y.%m.%d %H:%M",
    ];
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    const DATE_FORMATS: &[&str] = &[
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y.%m.%d",
        "%b %e, %Y",
        "%e %b %Y",
        "%b %d, %Y",
        "%d %b %Y",
        "%B %e, %Y",
        "%e %B %Y",
        "%B %d, %Y",
        "%d %B %Y",
    ];
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Find the highest-priority calendar expression in `text`.
///
/// The first match of the first grammar that matches at all is returned, even
/// if it does not name a valid date.
pub fn find_date_candidate(text: &str) -> Option<DateCandidate<'_>> {
    if let Some(caps) = LABELED_YMD_RE.captures(text) {
        return ymd_candidate(text, &caps, DateGrammar::Labeled);
    }
    if let Some(caps) = YMD_RE.captures(text) {
        return ymd_candidate(text, &caps, DateGrammar::YearMonthDay);
    }
    let caps = MONTH_DAY_RE.captures(text)?;
    let raw = caps.get(1)?.start()..caps.get(0)?.end();
    Some(DateCandidate {
        raw: &text[raw],
        grammar: DateGrammar::MonthDay,
        year: None,
        month: caps[1].parse().ok()?,
        day: caps[2].parse().ok()?,
    })
}

fn ymd_candidate<'a>(
    text: &'a str,
    caps: &Captures<'_>,
    grammar: DateGrammar,
) -> Option<DateCandidate<'a>> {
    let whole = caps.get(0)?;
    let start = match grammar {
        DateGrammar::Labeled => whole.start(),
        _ => caps.get(1)?.start(),
    };
    let end = caps.get(3)?.end();
    Some(DateCandidate {
        raw: &text[start..end],
        grammar,
        year: Some(caps[1].parse().ok()?),
        month: caps[2].parse().ok()?,
        day: caps[3].parse().ok()?,
    })
}
