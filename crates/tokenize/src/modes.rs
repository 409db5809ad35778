//! Tokenization and value representation modes.
//!
//! Both are caller supplied for every call; the engine keeps no default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenizeError;

/// Granularity used to split text into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizationMode {
    /// One token per character.
    Character,
    /// Runs of non-whitespace and runs of whitespace.
    Word,
    /// Alphanumeric runs, single punctuation marks, whitespace runs.
    Subword,
}

impl TokenizationMode {
    /// Every mode, in selector order.
    pub const ALL: [TokenizationMode; 3] = [Self::Character, Self::Word, Self::Subword];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Word => "word",
            Self::Subword => "subword",
        }
    }

    /// Short label for selectors.
    pub fn label(self) -> &'static str {
        match self {
            Self::Character => "Character Level",
            Self::Word => "Word Level",
            Self::Subword => "Subword Level",
        }
    }

    /// One line description for selectors.
    pub fn description(self) -> &'static str {
        match self {
            Self::Character => "Each character = 1 token",
            Self::Word => "Each word = 1 token",
            Self::Subword => "Smart splitting (BPE-style)",
        }
    }
}

impl fmt::Display for TokenizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for TokenizationMode {
    type Err = TokenizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "character" | "char" => Ok(Self::Character),
            "word" => Ok(Self::Word),
            "subword" => Ok(Self::Subword),
            _ => Err(TokenizeError::UnknownMode(s.to_string())),
        }
    }
}

/// How each token's value is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueMode {
    /// Code points or positional indices.
    Numeric,
    /// Emoji glyph and label from the symbol table.
    Visual,
}

impl ValueMode {
    /// Every mode, in selector order.
    pub const ALL: [ValueMode; 2] = [Self::Numeric, Self::Visual];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Visual => "visual",
        }
    }

    /// Short label for selectors.
    pub fn label(self) -> &'static str {
        match self {
            Self::Numeric => "Numeric Encoding",
            Self::Visual => "Visual Mapping",
        }
    }

    /// One line description for selectors.
    pub fn description(self) -> &'static str {
        match self {
            Self::Numeric => "ASCII/Index values (65, 66, 67...)",
            Self::Visual => "Emoji representations (🍎, 🍌, 🥕...)",
        }
    }
}

impl fmt::Display for ValueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ValueMode {
    type Err = TokenizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" | "number" => Ok(Self::Numeric),
            "visual" | "emoji" => Ok(Self::Visual),
            _ => Err(TokenizeError::UnknownMode(s.to_string())),
        }
    }
}
