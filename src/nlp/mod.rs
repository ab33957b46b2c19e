//! Natural language parsing of AI planning output.
//!
//! This module turns responses like:
//! - "• Meeting at 10am"
//! - "2. Work on feature for 2 hours at 10am"
//! - "- Fix critical bug (high priority)"
//!
//! into [`ParsedTask`] records, and checks them with [`validate_task`].

pub mod classifier;
pub mod extractor;
mod parser;
mod validator;

pub use classifier::{classify_line, classify_lines, CandidateLine, ListMarker, SkipReason};
pub use extractor::{extract_fields, has_task_shape, ExtractedFields, Field};
pub use parser::{
    parse_tasks_from_ai_response, parse_tasks_with, ParsedTask, ParserOptions, Priority,
    DEFAULT_MAX_LINE_LENGTH,
};
pub use validator::{
    check_task, validate_task, TaskRejection, TaskVerdict, MAX_TITLE_LEN, MIN_TITLE_LEN,
};
