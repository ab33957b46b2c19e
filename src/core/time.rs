//! Clock time normalization.
//!
//! Converts the clock expressions found in task lines ("10am", "12:30pm",
//! "14:00", "at 3") into zero-padded 24-hour `HH:MM` values, and derives end
//! times from a start time plus a duration.

use chrono::{Duration, NaiveTime, Timelike};
use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minutes in one day; end times wrap around this.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

static CANONICAL_HHMM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[01][0-9]|2[0-3]):[0-5][0-9]$")
        .unwrap_or_else(|e| panic!("Invalid HH:MM regex: {e}"))
});

/// Morning/afternoon marker attached to a 12-hour clock value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// Ante meridiem ("am", "a.m.").
    Am,
    /// Post meridiem ("pm", "p.m.").
    Pm,
}

impl Meridiem {
    /// Read a meridiem marker, ignoring case and dots.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let letters: String = token
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match letters.as_str() {
            "am" => Some(Self::Am),
            "pm" => Some(Self::Pm),
            _ => None,
        }
    }

    /// The other half of the day.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Am => Self::Pm,
            Self::Pm => Self::Am,
        }
    }
}

/// How to read an hour written without am/pm or 24-hour context.
///
/// A planner saying "gym at 6" almost always means the evening, while
/// "standup at 9" means the morning, hence the default.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BareHourPolicy {
    /// 1-7 are afternoon/evening hours, 8-11 are morning, 12 is noon.
    #[default]
    Afternoon,
    /// The number is taken literally as a 24-hour value.
    TwentyFourHour,
}

/// A clock expression as written, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockToken {
    /// Hour digits as written.
    pub hour: u32,
    /// Minute digits, zero when absent.
    pub minute: u32,
    /// Optional am/pm marker.
    pub meridiem: Option<Meridiem>,
    /// The hour was written with a leading zero ("07:30").
    pub zero_padded: bool,
}

impl ClockToken {
    /// Build a token from the raw captured pieces.
    ///
    /// Returns `None` if the digits don't parse.
    #[must_use]
    pub fn from_parts(hour: &str, minute: Option<&str>, meridiem: Option<&str>) -> Option<Self> {
        Some(Self {
            hour: hour.parse().ok()?,
            minute: match minute {
                Some(m) => m.parse().ok()?,
                None => 0,
            },
            meridiem: meridiem.and_then(Meridiem::from_token),
            zero_padded: hour.len() == 2 && hour.starts_with('0'),
        })
    }
}

/// Normalize a clock token into a time of day.
///
/// Returns `None` for values that are not a real clock time
/// (`13pm`, `0am`, `25:00`, `10:75`).
#[must_use]
pub fn normalize_clock(token: ClockToken, policy: BareHourPolicy) -> Option<NaiveTime> {
    if token.minute > 59 {
        return None;
    }

    let hour = match token.meridiem {
        Some(meridiem) => {
            if !(1..=12).contains(&token.hour) {
                return None;
            }
            match (meridiem, token.hour) {
                (Meridiem::Am, 12) => 0,
                (Meridiem::Pm, 12) | (Meridiem::Am, _) => token.hour,
                (Meridiem::Pm, h) => h + 12,
            }
        },
        None if token.zero_padded || token.hour == 0 || token.hour > 12 => token.hour,
        None => match policy {
            BareHourPolicy::TwentyFourHour => token.hour,
            BareHourPolicy::Afternoon if token.hour <= 7 => token.hour + 12,
            BareHourPolicy::Afternoon => token.hour,
        },
    };

    NaiveTime::from_hms_opt(hour, token.minute, 0)
}

/// Render a time as zero-padded 24-hour `HH:MM`.
#[must_use]
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Check that a string is a canonical `HH:MM` 24-hour time (`00:00`-`23:59`).
#[must_use]
pub fn is_canonical_hhmm(value: &str) -> bool {
    CANONICAL_HHMM_PATTERN.is_match(value)
}

/// Add a duration to a start time, wrapping past midnight.
#[must_use]
pub fn end_time(start: NaiveTime, duration_minutes: u32) -> NaiveTime {
    start
        .overflowing_add_signed(Duration::minutes(i64::from(duration_minutes)))
        .0
}

/// Minutes from `start` forward to `end`, wrapping past midnight.
#[must_use]
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> u32 {
    let start = start.num_seconds_from_midnight() / 60;
    let end = end.num_seconds_from_midnight() / 60;
    (end + MINUTES_PER_DAY - start) % MINUTES_PER_DAY
}
