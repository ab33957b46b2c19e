//! tasksift - structured tasks from AI planning output
//!
//! This crate turns the free text an assistant writes when asked to plan a
//! day into task records with a title, clock times, a duration and a
//! priority. Parsing is deterministic and never fails; unrecognized lines
//! are simply skipped.
//!
//! ```
//! use tasksift::parse_tasks_from_ai_response;
//!
//! let tasks = parse_tasks_from_ai_response("Here's your plan:\n• Meeting at 10am");
//! assert_eq!(tasks.len(), 1);
//! assert_eq!(tasks[0].start_time.as_deref(), Some("10:00"));
//! ```

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod nlp;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::SiftError;
pub use nlp::{parse_tasks_from_ai_response, validate_task, ParsedTask};
