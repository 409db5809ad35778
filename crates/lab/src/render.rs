//! Terminal rendering of engine results.

use std::fmt::Write as _;

use tokenize::{format_sequence, symbols, Analysis, Decoded, EncodedValue, TokenizationMode, ValueMode};

/// Shown when encode is asked for blank text.
pub const EMPTY_TEXT_WARNING: &str = "⚠️ Please enter some text to tokenize!";
/// Shown when decode is asked for blank values.
pub const EMPTY_VALUES_WARNING: &str = "⚠️ Please enter encoded values!";

/// Token list with 1-based positions, e.g. `[Hi #1] [  #2]`.
pub fn render_tokens(tokens: &[String]) -> String {
    let mut out = format!("Tokens ({} total):\n", tokens.len());
    let cells: Vec<String> = tokens
        .iter()
        .enumerate()
        .map(|(idx, t)| format!("[{} #{}]", t.escape_debug(), idx + 1))
        .collect();
    out.push_str(&cells.join(" "));
    out
}

/// Full encode output: tokens, values and the insight report.
pub fn render_analysis(analysis: &Analysis, value_mode: ValueMode) -> String {
    let mut out = render_tokens(&analysis.tokens);
    out.push_str("\n\n");
    match value_mode {
        ValueMode::Numeric => {
            out.push_str("Numeric Representation (what AI models see):\n");
            for (token, value) in analysis.tokens.iter().zip(&analysis.encoded) {
                let _ = writeln!(out, "  {:>8}  {}", value, token.escape_debug());
            }
            let values: Vec<String> = analysis.encoded.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "Encoded sequence: [{}]", values.join(", "));
        }
        ValueMode::Visual => {
            out.push_str("Visual Representation (easier to understand):\n");
            for (token, value) in analysis.tokens.iter().zip(&analysis.encoded) {
                if let EncodedValue::Visual(symbol) = value {
                    let _ = writeln!(out, "  {} {:<12} \"{}\"", symbol.glyph, symbol.label, token.escape_debug());
                }
            }
            let _ = writeln!(out, "Encoded sequence: {}", format_sequence(&analysis.encoded));
        }
    }
    out.push('\n');
    out.push_str(&analysis.insight);
    out
}

/// Decoded text followed by one warning line per placeholder.
pub fn render_decoded(decoded: &Decoded) -> String {
    let mut out = format!("Decoded Text: {}", decoded.text);
    if !decoded.is_clean() {
        let _ = write!(out, "\n⚠️ {} fragment(s) replaced by placeholders:", decoded.malformed.len());
        for fragment in &decoded.malformed {
            let _ = write!(out, "\n  {fragment}");
        }
    }
    out
}

/// Symbol table as `a  🍎  Apple` rows.
pub fn render_symbols() -> String {
    symbols::entries()
        .map(|(c, s)| format!("{:<3} {}  {}", format!("{c:?}"), s.glyph, s.label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Available modes with their descriptions.
pub fn render_modes() -> String {
    let mut out = String::from("Tokenization modes:\n");
    for mode in TokenizationMode::ALL {
        let _ = writeln!(out, "  {:<10} {} - {}", mode, mode.label(), mode.description());
    }
    out.push_str("Value modes:\n");
    for mode in ValueMode::ALL {
        let _ = writeln!(out, "  {:<10} {} - {}", mode, mode.label(), mode.description());
    }
    out
}
