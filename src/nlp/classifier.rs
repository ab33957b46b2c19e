//! Line classification for planning text.
//!
//! Decides which lines of a response describe a task. List items (`•`, `-`,
//! `*`, `1.`, `1)`) are accepted unless they are sub-headings. Unmarked lines
//! are only accepted when they read like an instruction and carry something
//! the extractor can use (a time, a duration or a priority); anything else is
//! treated as conversational prose.

use tracing::trace;

use crate::core::BareHourPolicy;
use crate::nlp::extractor::has_task_shape;
use crate::nlp::parser::ParserOptions;

/// Bullet characters that start a list item.
const BULLETS: &[char] = &['•', '-', '*'];

/// Openers that mark a line as commentary about the plan rather than a task.
const META_PREFIXES: &[&str] = &[
    "let me know",
    "let's",
    "i've",
    "i have",
    "i'll",
    "i will",
    "i'd",
    "i organized",
    "i've organized",
    "i hope",
    "hope this",
    "here's",
    "here is",
    "here are",
    "feel free",
    "good luck",
    "sure",
    "of course",
    "great",
    "okay",
    "ok",
    "note",
    "this plan",
    "this schedule",
    "these tasks",
    "based on",
    "would you",
    "do you",
    "you can",
    "you've",
];

/// Leading filler removed from a task line.
const LEADING_FILLER: &[&str] = &[
    "please",
    "also",
    "then",
    "next",
    "and",
    "finally",
    "after that",
    "remember to",
    "don't forget to",
    "make sure to",
    "try to",
];

/// Trailing filler removed from a task line.
const TRAILING_FILLER: &[&str] = &[
    "if possible",
    "if you have time",
    "if you'd like",
    "if you want",
    "please",
];

/// List marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `•`, `-` or `*`.
    Bullet(char),
    /// `1.` or `1)`.
    Numbered(u32),
}

/// A line accepted as describing one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateLine<'a> {
    /// The trimmed source line, marker included.
    pub raw: &'a str,
    /// The task text with marker and filler removed.
    pub body: &'a str,
    /// The list marker, if the line had one.
    pub marker: Option<ListMarker>,
}

/// Why a line was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Empty after trimming.
    Blank,
    /// Markdown header (`# ...`).
    Header,
    /// Longer than the configured limit.
    TooLong,
    /// List marker with nothing after it.
    EmptyItem,
    /// Ends with a colon ("Morning:", "Here's your plan:").
    SubHeading,
    /// Ends with a question mark.
    Question,
    /// Commentary about the plan ("Let me know if...").
    MetaCommentary,
    /// Nothing left after removing filler.
    NoContent,
    /// Unmarked line with no time, duration or priority.
    NoTaskShape,
}

/// Classify every line of `text`, yielding the task candidates in order.
///
/// The iterator is lazy and borrows from `text`.
pub fn classify_lines(
    text: &str,
    options: ParserOptions,
) -> impl Iterator<Item = CandidateLine<'_>> + '_ {
    text.lines()
        .filter_map(move |line| match classify_line(line, options) {
            Ok(candidate) => Some(candidate),
            Err(reason) => {
                trace!(?reason, line, "skipping line");
                None
            },
        })
}

/// Classify a single line.
///
/// # Errors
///
/// Returns the [`SkipReason`] when the line is not a task candidate.
pub fn classify_line(line: &str, options: ParserOptions) -> Result<CandidateLine<'_>, SkipReason> {
    let raw = line.trim();

    if raw.is_empty() {
        return Err(SkipReason::Blank);
    }
    if raw.starts_with('#') {
        return Err(SkipReason::Header);
    }
    if raw.chars().count() > options.max_line_length {
        return Err(SkipReason::TooLong);
    }

    match split_marker(raw) {
        Some((marker, item)) => classify_item(raw, marker, item),
        None => classify_sentence(raw, options.bare_hour),
    }
}

fn classify_item<'a>(
    raw: &'a str,
    marker: ListMarker,
    item: &'a str,
) -> Result<CandidateLine<'a>, SkipReason> {
    let item = strip_checkbox(item);
    if item.is_empty() {
        return Err(SkipReason::EmptyItem);
    }
    if item.trim_end_matches('*').ends_with(':') {
        return Err(SkipReason::SubHeading);
    }

    let body = strip_filler(item);
    if !body.chars().any(char::is_alphabetic) {
        return Err(SkipReason::NoContent);
    }

    Ok(CandidateLine {
        raw,
        body,
        marker: Some(marker),
    })
}

fn classify_sentence(raw: &str, policy: BareHourPolicy) -> Result<CandidateLine<'_>, SkipReason> {
    let plain = raw.trim_matches(|c| c == '*' || c == '_');

    if plain.ends_with('?') {
        return Err(SkipReason::Question);
    }
    if plain.ends_with(':') {
        return Err(SkipReason::SubHeading);
    }
    if is_meta_commentary(plain) {
        return Err(SkipReason::MetaCommentary);
    }

    let body = strip_filler(raw);
    if !body.chars().any(char::is_alphabetic) {
        return Err(SkipReason::NoContent);
    }
    if is_meta_commentary(body) {
        return Err(SkipReason::MetaCommentary);
    }
    if !has_task_shape(body, policy) {
        return Err(SkipReason::NoTaskShape);
    }

    Ok(CandidateLine {
        raw,
        body,
        marker: None,
    })
}

/// Split a list marker off the front of a line.
fn split_marker(line: &str) -> Option<(ListMarker, &str)> {
    let first = line.chars().next()?;

    if BULLETS.contains(&first) {
        let rest = &line[first.len_utf8()..];
        // "•Task" is a bullet, but "*emphasis*" and "-5 degrees" are not.
        if first == '•' || rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Some((ListMarker::Bullet(first), rest.trim_start()));
        }
        return None;
    }

    let digits = line.find(|c: char| !c.is_ascii_digit())?;
    if digits == 0 || digits > 3 {
        return None;
    }
    let rest = &line[digits..];
    let rest = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')'))?;
    // "1.5 hours of reading" is not a numbered item.
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let number = line[..digits].parse().ok()?;

    Some((ListMarker::Numbered(number), rest.trim_start()))
}

/// Drop a markdown checkbox ("[ ]", "[x]") after the marker.
fn strip_checkbox(item: &str) -> &str {
    ["[ ]", "[x]", "[X]"]
        .iter()
        .find_map(|checkbox| item.strip_prefix(checkbox))
        .map_or(item, str::trim_start)
}

fn is_meta_commentary(text: &str) -> bool {
    let text = text.trim_start_matches(|c: char| !c.is_alphanumeric());
    META_PREFIXES
        .iter()
        .any(|prefix| strip_word_prefix(text, prefix).is_some())
}

/// Remove conversational filler from both ends of a task line.
fn strip_filler(text: &str) -> &str {
    let mut body = text.trim();

    loop {
        let before = body;
        for filler in LEADING_FILLER {
            if let Some(rest) = strip_word_prefix(body, filler) {
                body = rest.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
            }
        }
        for filler in TRAILING_FILLER {
            if let Some(rest) = strip_word_suffix(body, filler) {
                body = rest.trim_end_matches(|c: char| c == ',' || c.is_whitespace());
            }
        }
        if body == before {
            return body;
        }
    }
}

/// Case-insensitive prefix match that must end on a word boundary.
fn strip_word_prefix<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }
    let rest = &text[prefix.len()..];
    match rest.chars().next() {
        Some(c) if c.is_alphanumeric() || c == '\'' => None,
        _ => Some(rest),
    }
}

/// Case-insensitive suffix match that must start on a word boundary.
fn strip_word_suffix<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let text = text.trim_end_matches(|c: char| c == '.' || c == '!' || c.is_whitespace());
    let start = text.len().checked_sub(suffix.len())?;
    let tail = text.get(start..)?;
    if !tail.eq_ignore_ascii_case(suffix) {
        return None;
    }
    let rest = &text[..start];
    match rest.chars().next_back() {
        Some(c) if c.is_alphanumeric() => None,
        _ => Some(rest),
    }
}
