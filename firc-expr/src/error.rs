use thiserror::Error;

/// A malformed binding expression or action key.
///
/// Offsets are byte offsets into the normalized input (see
/// [`crate::lexer::normalize`]). Parsing never returns partial results, so any
/// of these aborts the whole attribute.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("empty expression")]
    Empty,

    /// `;;`, or more than one trailing `;`.
    #[error("empty expression after ';' at offset {offset}")]
    EmptyExpression { offset: usize },

    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("invalid event state '{state}' at offset {offset} (expected ok, error, pending or done)")]
    InvalidState { state: String, offset: usize },

    /// A `.` with no modifier name after it, e.g. `create.`.
    #[error("missing modifier name after '.' at offset {offset}")]
    DanglingModifier { offset: usize },

    /// A `$` literal that is not of the form `$fir.<name>()`.
    #[error("malformed action literal '{text}' at offset {offset}")]
    MalformedAction { text: String, offset: usize },

    #[error("unclosed '[' opened at offset {offset}")]
    UnclosedBracket { offset: usize },

    #[error("expected {expected} at offset {offset}, found {found}")]
    Expected {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    #[error("invalid action key '{key}': {reason}")]
    ActionKey { key: String, reason: String },
}
