//! Splits text into ordered token strings.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::modes::TokenizationMode;

// Both patterns cover every character of the input, so concatenating the
// matches reproduces the text exactly.
static WORD_RE: Lazy<Regex> = Lazy::new(|| compile(r"\S+|\s+"));
static SUBWORD_RE: Lazy<Regex> = Lazy::new(|| compile(r"[A-Za-z0-9_]+|[^A-Za-z0-9_\s]|\s+"));

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static tokenizer pattern is valid")
}

/// Split `text` into tokens according to `mode`.
///
/// - `Character`: one token per Unicode scalar value.
/// - `Word`: maximal non-whitespace runs alternating with whitespace runs.
/// - `Subword`: ASCII word runs (`[A-Za-z0-9_]`), single other characters,
///   whitespace runs. A heuristic, not a trained merge table.
///
/// Empty text yields an empty vector in every mode.
pub fn tokenize(text: &str, mode: TokenizationMode) -> Vec<String> {
    let tokens: Vec<String> = match mode {
        TokenizationMode::Character => text.chars().map(String::from).collect(),
        TokenizationMode::Word => split_with(&WORD_RE, text),
        TokenizationMode::Subword => split_with(&SUBWORD_RE, text),
    };
    tracing::debug!(%mode, chars = text.chars().count(), tokens = tokens.len(), "tokenized");
    tokens
}

fn split_with(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
