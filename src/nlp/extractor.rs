//! Field extraction for a single task line.
//!
//! Each field has its own matcher. Matchers run in a fixed order and each one
//! cuts its phrase out of the line before the next one looks at it, so
//! "for 2 hours at 10am" is read as a duration followed by a start time and
//! the "2" never gets mistaken for a clock value.

use std::ops::Range;

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

use crate::core::{minutes_between, normalize_clock, BareHourPolicy, ClockToken};
use crate::nlp::parser::Priority;

/// Fields pulled out of one line, plus what is left as the title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    /// Remaining text after all matched phrases were removed.
    pub title: String,
    /// First clock time mentioned.
    pub start_time: Option<NaiveTime>,
    /// Duration in minutes.
    pub duration_minutes: Option<u32>,
    /// Explicit priority.
    pub priority: Option<Priority>,
}

impl ExtractedFields {
    fn apply(&mut self, field: Field) {
        match field {
            Field::Priority(priority) => self.priority = Some(priority),
            Field::Duration(minutes) => self.duration_minutes = minutes,
            Field::Schedule {
                start,
                span_minutes,
            } => {
                self.start_time = Some(start);
                if self.duration_minutes.is_none() {
                    self.duration_minutes = span_minutes;
                }
            },
        }
    }
}

/// A single recognized annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// "(high priority)"
    Priority(Priority),
    /// "for 1 hour 30 minutes". `None` when the phrase is there but the
    /// amount doesn't fit in minutes ("for 99999999999 minutes").
    Duration(Option<u32>),
    /// "at 10am", or a range like "3-4pm" which also carries its length.
    Schedule {
        /// Start of the slot.
        start: NaiveTime,
        /// Length of the slot when written as a range.
        span_minutes: Option<u32>,
    },
}

/// A matcher returns the field it found and the line with that phrase removed.
pub type MatchFn = fn(&str, BareHourPolicy) -> Option<(Field, String)>;

struct Matcher {
    name: &'static str,
    run: MatchFn,
}

// Order matters: each matcher sees the text left over by the previous ones.
const MATCHERS: &[Matcher] = &[
    Matcher {
        name: "priority",
        run: match_priority,
    },
    Matcher {
        name: "duration",
        run: match_duration,
    },
    Matcher {
        name: "schedule",
        run: match_schedule,
    },
];

static PRIORITY_TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "(high priority)", "[low priority]", "(priority: medium)"
    Regex::new(
        r"(?i)[(\[]\s*(?:(high|medium|low)[\s-]+priority|priority\s*:?\s*(high|medium|low))\s*[)\]]",
    )
    .unwrap_or_else(|e| panic!("Invalid priority tag regex: {e}"))
});

static TRAILING_PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "... - high priority", "... priority: low"
    Regex::new(
        r"(?i)[\s,;:\-–]*\b(?:(high|medium|low)[\s-]+priority|priority\s*:\s*(high|medium|low))\W*$",
    )
    .unwrap_or_else(|e| panic!("Invalid trailing priority regex: {e}"))
});

static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)
        \bfor\s+
        (?:
            (?P<half>half\s+an?\s+hour\b)
          | (?:an?|one)\s+hour\b
            (?:\s*(?:and\s+)?(?P<one_minutes>[0-9]+)\s*(?:minutes?|mins?|m)\b)?
          | (?P<hours>[0-9]+(?:\.[0-9]+)?)\s*(?:hours?|hrs?|h)\b
            (?:\s*(?:and\s+)?(?P<minutes_after>[0-9]+)\s*(?:minutes?|mins?|m)\b)?
          | (?P<minutes>[0-9]+)\s*(?:minutes?|mins?|m)\b
        )",
    )
    .unwrap_or_else(|e| panic!("Invalid duration regex: {e}"))
});

static CLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "10am", "12:30 pm", "at 14:00", "@ 7pm", "at 3"
    Regex::new(
        r"(?i)(?P<at>\bat\s+|@\s*)?\b(?P<hour>[0-9]{1,2})(?::(?P<minute>[0-9]{2}))?(?:\s*(?P<meridiem>[ap]\.m\.|[ap]m\b))?",
    )
    .unwrap_or_else(|e| panic!("Invalid clock regex: {e}"))
});

static RANGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "3-4pm", "10am - 11:30am", "from 9 to 11am"
    Regex::new(
        r"(?ix)
        (?P<lead>\b(?:from|at)\s+)?
        \b(?P<h1>[0-9]{1,2})(?::(?P<m1>[0-9]{2}))?
        (?:\s*(?P<mer1>[ap]\.m\.|[ap]m\b))?
        \s*(?:-|–|—|\bto\b|\buntil\b)\s*
        (?P<h2>[0-9]{1,2})(?::(?P<m2>[0-9]{2}))?
        (?:\s*(?P<mer2>[ap]\.m\.|[ap]m\b))?",
    )
    .unwrap_or_else(|e| panic!("Invalid time range regex: {e}"))
});

static EMPTY_BRACKETS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(\s*[,;]?\s*\)|\[\s*\]")
        .unwrap_or_else(|e| panic!("Invalid empty brackets regex: {e}"))
});

const TRIM_PUNCTUATION: &[char] = &[',', '.', ';', ':', '-', '–', '—', '|', '/', '!'];

/// Extract priority, duration and start time from one task line.
///
/// # Examples
///
/// ```
/// use tasksift::core::BareHourPolicy;
/// use tasksift::nlp::extract_fields;
///
/// let fields = extract_fields("Work on feature for 2 hours at 10am", BareHourPolicy::Afternoon);
/// assert_eq!(fields.title, "Work on feature");
/// assert_eq!(fields.duration_minutes, Some(120));
/// ```
#[must_use]
pub fn extract_fields(line: &str, policy: BareHourPolicy) -> ExtractedFields {
    let mut fields = ExtractedFields::default();
    let mut remaining = line.to_string();

    for matcher in MATCHERS {
        if let Some((field, rest)) = (matcher.run)(&remaining, policy) {
            trace!(matcher = matcher.name, ?field, "matched");
            fields.apply(field);
            remaining = rest;
        }
    }

    fields.title = clean_title(&remaining);
    fields
}

/// Check whether any field matcher recognizes something in the text.
#[must_use]
pub fn has_task_shape(text: &str, policy: BareHourPolicy) -> bool {
    MATCHERS.iter().any(|matcher| (matcher.run)(text, policy).is_some())
}

/// Match an explicit priority phrase.
#[must_use]
pub fn match_priority(text: &str, _policy: BareHourPolicy) -> Option<(Field, String)> {
    let caps = PRIORITY_TAG_PATTERN
        .captures(text)
        .or_else(|| TRAILING_PRIORITY_PATTERN.captures(text))?;
    let whole = caps.get(0)?;
    let word = caps.get(1).or_else(|| caps.get(2))?;
    let priority = Priority::from_word(word.as_str())?;

    Some((Field::Priority(priority), cut(text, whole.range())))
}

/// Match a "for N hours/minutes" phrase.
#[must_use]
pub fn match_duration(text: &str, _policy: BareHourPolicy) -> Option<(Field, String)> {
    let caps = DURATION_PATTERN.captures(text)?;
    let whole = caps.get(0)?;

    let minutes = if caps.name("half").is_some() {
        Some(30)
    } else if let Some(hours) = caps.name("hours") {
        hours_to_minutes(hours.as_str())
            .zip(optional_number(&caps, "minutes_after"))
            .and_then(|(hours, minutes)| hours.checked_add(minutes))
    } else if caps.name("minutes").is_some() {
        optional_number(&caps, "minutes")
    } else {
        optional_number(&caps, "one_minutes").and_then(|minutes| minutes.checked_add(60))
    };

    // The phrase is cut even when the amount overflows, so it never ends up
    // in the title.
    Some((Field::Duration(minutes), cut(text, whole.range())))
}

/// Match the first clock time or time range in the text.
#[must_use]
pub fn match_schedule(text: &str, policy: BareHourPolicy) -> Option<(Field, String)> {
    let (range, field) = match (find_range(text, policy), find_clock(text, policy)) {
        (Some(range), Some(clock)) if clock.0.start < range.0.start => clock,
        (Some(range), _) => range,
        (None, clock) => clock?,
    };

    Some((field, cut(text, range)))
}

fn find_clock(text: &str, policy: BareHourPolicy) -> Option<(Range<usize>, Field)> {
    CLOCK_PATTERN.captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        let minute = caps.name("minute");
        let meridiem = caps.name("meridiem");

        // A bare number only counts as a time after "at"/"@".
        if minute.is_none() && meridiem.is_none() && caps.name("at").is_none() {
            return None;
        }
        if meridiem.is_none() && continues_number(text, whole.end()) {
            return None;
        }

        let token = ClockToken::from_parts(
            caps.name("hour")?.as_str(),
            minute.map(|m| m.as_str()),
            meridiem.map(|m| m.as_str()),
        )?;
        let start = normalize_clock(token, policy)?;

        Some((
            whole.range(),
            Field::Schedule {
                start,
                span_minutes: None,
            },
        ))
    })
}

fn find_range(text: &str, policy: BareHourPolicy) -> Option<(Range<usize>, Field)> {
    RANGE_PATTERN.captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        let clock_like = ["m1", "m2", "mer1", "mer2", "lead"]
            .iter()
            .any(|name| caps.name(name).is_some());
        if !clock_like {
            return None;
        }
        if caps.name("mer2").is_none() && continues_number(text, whole.end()) {
            return None;
        }

        let first = ClockToken::from_parts(
            caps.name("h1")?.as_str(),
            caps.name("m1").map(|m| m.as_str()),
            caps.name("mer1").map(|m| m.as_str()),
        )?;
        let second = ClockToken::from_parts(
            caps.name("h2")?.as_str(),
            caps.name("m2").map(|m| m.as_str()),
            caps.name("mer2").map(|m| m.as_str()),
        )?;

        let end = normalize_clock(second, policy)?;
        let start = match (first.meridiem, second.meridiem) {
            // "3-4pm": the start borrows the end's meridiem unless that would
            // put it after the end ("11-1pm" is 11am to 1pm).
            (None, Some(meridiem)) if (1..=12).contains(&first.hour) && !first.zero_padded => {
                let shared = ClockToken {
                    meridiem: Some(meridiem),
                    ..first
                };
                match normalize_clock(shared, policy)? {
                    start if start <= end => start,
                    _ => normalize_clock(
                        ClockToken {
                            meridiem: Some(meridiem.opposite()),
                            ..first
                        },
                        policy,
                    )?,
                }
            },
            _ => normalize_clock(first, policy)?,
        };

        let span = minutes_between(start, end);
        Some((
            whole.range(),
            Field::Schedule {
                start,
                span_minutes: (span > 0).then_some(span),
            },
        ))
    })
}

/// True when the text right after `end` keeps going as a word or number
/// ("2024", "3rd", "12/15").
fn continues_number(text: &str, end: usize) -> bool {
    let mut rest = text[end..].chars();
    match rest.next() {
        Some(c) if c.is_alphanumeric() => true,
        Some('.' | ',' | ':' | '/') => rest.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

fn optional_number(caps: &Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name).map_or(Some(0), |m| m.as_str().parse().ok())
}

/// "2" -> 120, "1.5" -> 90, "1.25" -> 75.
fn hours_to_minutes(value: &str) -> Option<u32> {
    let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
    let whole: u32 = whole.parse().ok()?;

    let fraction_minutes = if fraction.is_empty() {
        0
    } else {
        let digits = fraction.get(..fraction.len().min(2))?;
        let scale = 10_u32.pow(u32::try_from(digits.len()).ok()?);
        digits.parse::<u32>().ok()? * 60 / scale
    };

    whole.checked_mul(60)?.checked_add(fraction_minutes)
}

fn cut(text: &str, range: Range<usize>) -> String {
    format!("{} {}", &text[..range.start], &text[range.end..])
}

/// Clean up the leftover text into a title.
fn clean_title(text: &str) -> String {
    let text = text.replace("**", "").replace("__", "").replace('`', "");
    let text = EMPTY_BRACKETS_PATTERN.replace_all(&text, " ");

    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| c.is_whitespace() || TRIM_PUNCTUATION.contains(&c))
        .to_string()
}
