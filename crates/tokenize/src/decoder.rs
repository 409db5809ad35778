//! Best-effort inverse of numeric encoding.
//!
//! Character mode decodes code points back to text. Positional modes have
//! no reverse vocabulary, so each value becomes an opaque `[Token{n}]`
//! label. Visual mode cannot be decoded.

use serde::Serialize;

use crate::error::{FragmentFault, MalformedFragment, TokenizeError};
use crate::modes::{TokenizationMode, ValueMode};

/// Substituted for unreadable fragments in character mode.
pub const CHAR_PLACEHOLDER: char = char::REPLACEMENT_CHARACTER;

/// Substituted for unreadable fragments in positional modes.
pub const TOKEN_PLACEHOLDER: &str = "[Token?]";

/// Result of a decode that did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded {
    /// Reconstructed text, with placeholders where fragments were unreadable.
    pub text: String,
    /// Fragments that were replaced by a placeholder, in input order.
    pub malformed: Vec<MalformedFragment>,
}

impl Decoded {
    /// True when no placeholder was used.
    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty()
    }
}

/// Decode a comma separated list of numeric values.
///
/// Fails with [`TokenizeError::EmptyInput`] for blank input and with
/// [`TokenizeError::UnsupportedOperation`] in visual mode. Bad fragments
/// never abort the call; see [`Decoded::malformed`].
pub fn decode(
    encoded_input: &str,
    token_mode: TokenizationMode,
    value_mode: ValueMode,
) -> Result<Decoded, TokenizeError> {
    if encoded_input.trim().is_empty() {
        return Err(TokenizeError::EmptyInput);
    }
    if value_mode == ValueMode::Visual {
        return Err(TokenizeError::UnsupportedOperation(
            "decoding from visual symbols back to text",
        ));
    }

    let mut text = String::new();
    let mut malformed = Vec::new();
    for (index, fragment) in encoded_input.split(',').map(str::trim).enumerate() {
        let decoded = match token_mode {
            TokenizationMode::Character => decode_code_point(fragment).map(|c| text.push(c)),
            TokenizationMode::Word | TokenizationMode::Subword => decode_position(fragment)
                .map(|n| text.push_str(&format!("[Token{n}]"))),
        };
        if let Err(fault) = decoded {
            match token_mode {
                TokenizationMode::Character => text.push(CHAR_PLACEHOLDER),
                TokenizationMode::Word | TokenizationMode::Subword => text.push_str(TOKEN_PLACEHOLDER),
            }
            malformed.push(MalformedFragment {
                index,
                fragment: fragment.to_string(),
                fault,
            });
        }
    }

    if !malformed.is_empty() {
        tracing::warn!(%token_mode, count = malformed.len(), "decode substituted placeholders");
    }
    tracing::debug!(%token_mode, chars = text.chars().count(), "decoded");
    Ok(Decoded { text, malformed })
}

fn decode_code_point(fragment: &str) -> Result<char, FragmentFault> {
    let n: i64 = fragment.parse().map_err(|_| FragmentFault::NotANumber)?;
    u32::try_from(n)
        .ok()
        .and_then(char::from_u32)
        .ok_or(FragmentFault::InvalidCodePoint)
}

fn decode_position(fragment: &str) -> Result<i64, FragmentFault> {
    fragment.parse().map_err(|_| FragmentFault::NotANumber)
}
