//! Error types shared by the engine operations.

use serde::Serialize;

/// Errors reported by the engine entry points.
///
/// None of these are fatal; callers surface the message and re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    /// Text to encode, or values to decode, were blank.
    #[error("input is empty, please enter some text or encoded values")]
    EmptyInput,
    /// The requested operation is not available in this mode.
    #[error("not implemented: {0}")]
    UnsupportedOperation(&'static str),
    /// A mode name could not be parsed.
    #[error("unknown mode {0:?}")]
    UnknownMode(String),
}

/// Why a single decode fragment could not be turned back into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum FragmentFault {
    /// Fragment is empty or not a base-10 integer.
    #[error("is not a number")]
    NotANumber,
    /// Integer is not a Unicode scalar value.
    #[error("is not a valid code point")]
    InvalidCodePoint,
}

/// A decode fragment that was replaced by a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("fragment #{index} ({fragment:?}) {fault}")]
pub struct MalformedFragment {
    /// 0-based position of the fragment in the comma separated input.
    pub index: usize,
    /// Trimmed fragment text as received.
    pub fragment: String,
    /// What was wrong with it.
    pub fault: FragmentFault,
}
