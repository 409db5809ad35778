//! Text in, tokens + values + insight out.

use serde::Serialize;

use crate::encoder::{encode, EncodedValue};
use crate::error::TokenizeError;
use crate::insight::report;
use crate::modes::{TokenizationMode, ValueMode};
use crate::tokenizer::tokenize;

/// Everything produced by one encode request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Tokens in input order.
    pub tokens: Vec<String>,
    /// One value per token.
    pub encoded: Vec<EncodedValue>,
    /// Rendered insight report.
    pub insight: String,
}

/// Validate, tokenize, encode and report on `text`.
///
/// Blank text is rejected with [`TokenizeError::EmptyInput`] before any work.
pub fn analyze(text: &str, token_mode: TokenizationMode, value_mode: ValueMode) -> Result<Analysis, TokenizeError> {
    if text.trim().is_empty() {
        return Err(TokenizeError::EmptyInput);
    }
    let tokens = tokenize(text, token_mode);
    let encoded = encode(&tokens, token_mode, value_mode);
    let insight = report(&tokens, &encoded, token_mode);
    Ok(Analysis { tokens, encoded, insight })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_text() {
        assert_eq!(
            analyze("  \n", TokenizationMode::Word, ValueMode::Numeric),
            Err(TokenizeError::EmptyInput)
        );
    }

    #[test]
    fn keeps_surrounding_whitespace_once_validated() {
        let analysis = analyze(" Hi ", TokenizationMode::Word, ValueMode::Numeric);
        let Ok(analysis) = analysis else {
            panic!("non-blank text must analyze");
        };
        assert_eq!(analysis.tokens, vec![" ", "Hi", " "]);
        assert_eq!(analysis.encoded.len(), 3);
        assert!(analysis.insight.contains("• Total Tokens: 3"));
    }
}
