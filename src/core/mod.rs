//! Core utilities for tasksift.
//!
//! Clock-time handling shared by the extractor and the validator.

pub mod time;

pub use time::{
    end_time, format_hhmm, is_canonical_hhmm, minutes_between, normalize_clock,
    BareHourPolicy, ClockToken, Meridiem, MINUTES_PER_DAY,
};
