//! Maps tokens to numeric or visual values.

use std::fmt;

use serde::Serialize;

use crate::modes::{TokenizationMode, ValueMode};
use crate::symbols::{self, Symbol};

/// Encoded value of a single token.
///
/// Serializes untagged: `72` or `{"glyph":"🍎","label":"Apple"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EncodedValue {
    /// Code point (character mode) or 1-based position (other modes).
    Numeric(u32),
    /// Symbol table entry for the token's first character.
    Visual(Symbol),
}

impl EncodedValue {
    /// Numeric payload, if any.
    pub fn as_numeric(&self) -> Option<u32> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Visual(_) => None,
        }
    }

    /// Visual payload, if any.
    pub fn as_symbol(&self) -> Option<Symbol> {
        match self {
            Self::Numeric(_) => None,
            Self::Visual(s) => Some(*s),
        }
    }
}

impl fmt::Display for EncodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => fmt::Display::fmt(n, f),
            Self::Visual(s) => f.pad(s.glyph),
        }
    }
}

/// Encode every token, preserving length and order.
///
/// Numeric values in word and subword modes are positions, not vocabulary
/// ids: equal tokens at different positions get different values.
pub fn encode(tokens: &[String], token_mode: TokenizationMode, value_mode: ValueMode) -> Vec<EncodedValue> {
    let encoded: Vec<EncodedValue> = tokens
        .iter()
        .enumerate()
        .map(|(idx, token)| encode_one(token, idx, token_mode, value_mode))
        .collect();
    tracing::debug!(%token_mode, %value_mode, count = encoded.len(), "encoded");
    encoded
}

fn encode_one(token: &str, idx: usize, token_mode: TokenizationMode, value_mode: ValueMode) -> EncodedValue {
    let first = token.chars().next();
    match (value_mode, token_mode) {
        (ValueMode::Numeric, TokenizationMode::Character) => {
            EncodedValue::Numeric(first.map(u32::from).unwrap_or_default())
        }
        (ValueMode::Numeric, _) => EncodedValue::Numeric(position(idx)),
        (ValueMode::Visual, _) => {
            let symbol = first
                .and_then(|c| c.to_lowercase().next())
                .map(symbols::lookup_or_unknown)
                .unwrap_or(Symbol::UNKNOWN);
            EncodedValue::Visual(symbol)
        }
    }
}

fn position(idx: usize) -> u32 {
    u32::try_from(idx).map_or(u32::MAX, |i| i.saturating_add(1))
}

/// Join values with `,`, the format [`crate::decode`] accepts.
pub fn format_sequence(values: &[EncodedValue]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn character_numeric_is_code_point() {
        let encoded = encode(&strings(&["A"]), TokenizationMode::Character, ValueMode::Numeric);
        assert_eq!(encoded, vec![EncodedValue::Numeric(65)]);

        let hello = tokenize("Hello", TokenizationMode::Character);
        let codes: Vec<Option<u32>> = encode(&hello, TokenizationMode::Character, ValueMode::Numeric)
            .iter()
            .map(EncodedValue::as_numeric)
            .collect();
        assert_eq!(codes, vec![Some(72), Some(101), Some(108), Some(108), Some(111)]);
    }

    #[test]
    fn word_numeric_is_position_not_vocabulary() {
        let tokens = strings(&["the", " ", "the"]);
        let encoded = encode(&tokens, TokenizationMode::Word, ValueMode::Numeric);
        assert_eq!(
            encoded,
            vec![EncodedValue::Numeric(1), EncodedValue::Numeric(2), EncodedValue::Numeric(3)]
        );
    }

    #[test]
    fn visual_uses_lowercased_first_char() {
        let tokens = strings(&["a", "Apple", "9", " ", "?!"]);
        let labels: Vec<&str> = encode(&tokens, TokenizationMode::Subword, ValueMode::Visual)
            .iter()
            .filter_map(EncodedValue::as_symbol)
            .map(|s| s.label)
            .collect();
        assert_eq!(labels, vec!["Apple", "Apple", "Unknown", "Space", "Question"]);
    }

    #[test]
    fn visual_unknown_sentinel() {
        let encoded = encode(&strings(&["9"]), TokenizationMode::Character, ValueMode::Visual);
        assert_eq!(encoded, vec![EncodedValue::Visual(Symbol::UNKNOWN)]);
        assert_eq!(Symbol::UNKNOWN.glyph, "❔");
    }

    #[test]
    fn empty_token_does_not_panic() {
        let tokens = strings(&[""]);
        assert_eq!(
            encode(&tokens, TokenizationMode::Character, ValueMode::Numeric),
            vec![EncodedValue::Numeric(0)]
        );
        assert_eq!(
            encode(&tokens, TokenizationMode::Word, ValueMode::Visual),
            vec![EncodedValue::Visual(Symbol::UNKNOWN)]
        );
    }

    #[test]
    fn format_sequence_joins_with_commas() {
        let values = vec![EncodedValue::Numeric(72), EncodedValue::Numeric(105)];
        assert_eq!(format_sequence(&values), "72,105");
        assert_eq!(format_sequence(&[]), "");
        let visual = encode(&strings(&["b", "c"]), TokenizationMode::Character, ValueMode::Visual);
        assert_eq!(format_sequence(&visual), "🍌,🥕");
    }

    #[test]
    fn serializes_untagged() {
        let numeric = serde_json::to_string(&EncodedValue::Numeric(65)).unwrap_or_default();
        assert_eq!(numeric, "65");
        let visual = serde_json::to_value(EncodedValue::Visual(Symbol::UNKNOWN)).ok();
        assert_eq!(visual, Some(serde_json::json!({"glyph": "❔", "label": "Unknown"})));
    }
}
