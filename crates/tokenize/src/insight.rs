//! Statistics and explanatory narrative for a tokenization result.

use std::collections::HashSet;
use std::fmt::Write as _;

use serde::Serialize;

use crate::encoder::EncodedValue;
use crate::modes::TokenizationMode;

/// Descriptive statistics over a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TokenStats {
    /// Number of tokens.
    pub total: usize,
    /// Number of distinct token strings (exact, case-sensitive match).
    pub unique: usize,
    /// Mean token length in characters, `0.0` for no tokens.
    pub avg_len: f64,
    /// `unique / total * 100`, `0.0` for no tokens.
    pub diversity: f64,
}

impl TokenStats {
    /// Compute statistics for `tokens`.
    pub fn compute(tokens: &[String]) -> Self {
        let total = tokens.len();
        let unique = tokens.iter().collect::<HashSet<_>>().len();
        if total == 0 {
            return Self { total, unique, avg_len: 0.0, diversity: 0.0 };
        }
        let chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
        Self {
            total,
            unique,
            avg_len: chars as f64 / total as f64,
            diversity: unique as f64 / total as f64 * 100.0,
        }
    }
}

/// Where each granularity shows up in practice.
fn usage_notes(mode: TokenizationMode) -> &'static str {
    match mode {
        TokenizationMode::Character => {
            "💡 Character-level tokenization is used in:\n\
             • Character-level LSTMs/RNNs\n\
             • Text generation models\n\
             • Language models for morphologically rich languages\n"
        }
        TokenizationMode::Word => {
            "💡 Word-level tokenization is used in:\n\
             • Traditional NLP (Bag of Words, TF-IDF)\n\
             • Word2Vec, GloVe embeddings\n\
             • Sentiment analysis systems\n"
        }
        TokenizationMode::Subword => {
            "💡 Subword tokenization is used in:\n\
             • Modern transformers (BERT, GPT)\n\
             • Handling out-of-vocabulary words\n\
             • Multilingual models\n"
        }
    }
}

const EMBEDDING_STEPS: &str = "\n🎯 In AI models, these tokens become:\n\
     1. Embedded into dense vectors (embeddings)\n\
     2. Processed through neural network layers\n\
     3. Used to predict next tokens or perform tasks";

/// Render the insight report for a tokenized and encoded sequence.
///
/// Statistics come from `tokens`; the narrative is fixed per `token_mode`.
pub fn report(tokens: &[String], encoded: &[EncodedValue], token_mode: TokenizationMode) -> String {
    if encoded.len() != tokens.len() {
        tracing::warn!(
            tokens = tokens.len(),
            encoded = encoded.len(),
            "encoded sequence length differs from token count"
        );
    }
    let stats = TokenStats::compute(tokens);

    let mut out = String::from("🤖 AI Analysis:\n\n📊 Statistics:\n");
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "• Total Tokens: {}\n\
         • Unique Tokens: {}\n\
         • Avg Token Length: {:.2} chars\n\
         • Vocabulary Diversity: {:.1}%\n\n",
        stats.total, stats.unique, stats.avg_len, stats.diversity
    );
    out.push_str(usage_notes(token_mode));
    out.push_str(EMBEDDING_STEPS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn stats_for_hello() {
        let stats = TokenStats::compute(&strings(&["H", "e", "l", "l", "o"]));
        assert_eq!(stats.total, 5);
        assert_eq!(stats.unique, 4);
        assert!((stats.avg_len - 1.0).abs() < 1e-12);
        assert!((stats.diversity - 80.0).abs() < 1e-12);
    }

    #[test]
    fn stats_are_case_sensitive() {
        let stats = TokenStats::compute(&strings(&["The", "the", "THE"]));
        assert_eq!(stats.unique, 3);
    }

    #[test]
    fn empty_tokens_do_not_divide_by_zero() {
        let stats = TokenStats::compute(&[]);
        assert_eq!(stats, TokenStats { total: 0, unique: 0, avg_len: 0.0, diversity: 0.0 });
        let text = report(&[], &[], TokenizationMode::Word);
        assert!(text.contains("• Avg Token Length: 0.00 chars"));
        assert!(text.contains("• Vocabulary Diversity: 0.0%"));
    }

    #[test]
    fn report_layout_for_character_mode() {
        let tokens = strings(&["H", "e", "l", "l", "o"]);
        let encoded: Vec<EncodedValue> = [72, 101, 108, 108, 111].map(EncodedValue::Numeric).to_vec();
        let text = report(&tokens, &encoded, TokenizationMode::Character);
        let expected = "🤖 AI Analysis:\n\n📊 Statistics:\n\
            • Total Tokens: 5\n\
            • Unique Tokens: 4\n\
            • Avg Token Length: 1.00 chars\n\
            • Vocabulary Diversity: 80.0%\n\n\
            💡 Character-level tokenization is used in:\n\
            • Character-level LSTMs/RNNs\n\
            • Text generation models\n\
            • Language models for morphologically rich languages\n\
            \n🎯 In AI models, these tokens become:\n\
            1. Embedded into dense vectors (embeddings)\n\
            2. Processed through neural network layers\n\
            3. Used to predict next tokens or perform tasks";
        assert_eq!(text, expected);
    }

    #[test]
    fn narrative_follows_mode() {
        let tokens = strings(&["Hi", " ", "there"]);
        let word = report(&tokens, &[], TokenizationMode::Word);
        assert!(word.contains("Word2Vec, GloVe embeddings"));
        assert!(word.contains("• Avg Token Length: 2.67 chars"));
        assert!(word.contains("• Vocabulary Diversity: 100.0%"));
        let sub = report(&tokens, &[], TokenizationMode::Subword);
        assert!(sub.contains("Modern transformers (BERT, GPT)"));
        assert!(!sub.contains("Word2Vec"));
    }
}
