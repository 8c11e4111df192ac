//! Resolve the user's postpone argument to one task.
//!
//! Precedence:
//! 1. No argument at all -> `MissingTarget`.
//! 2. Parses as an integer -> that id or `TaskNotFound`. No substring
//!    fallback, even when some task text contains the digits.
//! 3. Otherwise a substring search over task text. Exactly one hit wins; zero
//!    or several hits are both `TaskNotFound`.

use tracing::debug;

use crate::domain::{Result, TaskId, TaskMap, TicklerError};

/// How the postpone argument is interpreted.
///
/// `Parsed` holds the trimmed integer literal. It is kept as text so that
/// integers too large for any id still count as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    Parsed(&'a str),
    ParseFailed(&'a str),
    NoTextGiven,
}

impl<'a> Target<'a> {
    pub fn classify(text: Option<&'a str>) -> Self {
        match text {
            None => Target::NoTextGiven,
            Some(text) if text.trim().is_empty() => Target::NoTextGiven,
            Some(text) if is_integer_literal(text.trim()) => Target::Parsed(text.trim()),
            Some(text) => Target::ParseFailed(text),
        }
    }
}

/// Optional sign followed by one or more ASCII digits.
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Find the id `text` refers to in `tasks`.
pub fn resolve(tasks: &TaskMap, text: Option<&str>) -> Result<TaskId> {
    match Target::classify(text) {
        Target::NoTextGiven => Err(TicklerError::MissingTarget),
        // Negative, zero and out-of-range literals are valid integers that
        // name no task.
        Target::Parsed(literal) => literal
            .parse::<u64>()
            .ok()
            .map(TaskId::new)
            .filter(|id| tasks.contains_key(id))
            .ok_or_else(|| TicklerError::TaskNotFound(literal.to_string())),
        Target::ParseFailed(needle) => {
            let mut hits = tasks
                .iter()
                .filter(|(_, task)| task.text.contains(needle))
                .map(|(id, _)| *id);
            match (hits.next(), hits.next()) {
                (Some(id), None) => Ok(id),
                (None, _) => Err(TicklerError::TaskNotFound(needle.to_string())),
                (Some(_), Some(_)) => {
                    debug!(needle, "substring matches several tasks");
                    Err(TicklerError::TaskNotFound(needle.to_string()))
                }
            }
        }
    }
}
