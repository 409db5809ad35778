#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Teaching tokenizer engine.
//!
//! Shows, at a conceptual level, how language models turn text into
//! discrete units and numbers. Nothing here is trained: there is no
//! vocabulary, no merge table and no persistence.
//!
//! Contract: every entry point is a pure function of its arguments.
//! The only shared data is the read-only symbol table.
//!
//! Layout:
//! - `modes.rs`: `TokenizationMode` and `ValueMode`
//! - `symbols.rs`: fixed character to emoji table for visual mode
//! - `tokenizer.rs`: character / word / subword splitting
//! - `encoder.rs`: code point, position or symbol per token
//! - `decoder.rs`: best-effort inverse of numeric encoding
//! - `insight.rs`: statistics and explanatory report
//! - `pipeline.rs`: validated tokenize → encode → report

/// Error types.
pub mod error;
/// Tokenization and value modes.
pub mod modes;
/// Visual symbol table.
pub mod symbols;
/// Text splitting.
pub mod tokenizer;
/// Token encoding.
pub mod encoder;
/// Numeric decoding.
pub mod decoder;
/// Statistics and narrative report.
pub mod insight;
/// Encode request pipeline.
pub mod pipeline;

pub use decoder::{decode, Decoded};
pub use encoder::{encode, format_sequence, EncodedValue};
pub use error::{FragmentFault, MalformedFragment, TokenizeError};
pub use insight::{report, TokenStats};
pub use modes::{TokenizationMode, ValueMode};
pub use pipeline::{analyze, Analysis};
pub use symbols::Symbol;
pub use tokenizer::tokenize;
