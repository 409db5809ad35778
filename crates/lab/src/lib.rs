#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Terminal front end for the tokenize engine.
//!
//! `render` turns engine results into text, `repl` holds the interactive
//! session. The binary in `main.rs` only parses arguments and does I/O.

pub mod render;
pub mod repl;

pub use render::{render_analysis, render_decoded, render_modes, render_symbols, render_tokens};
pub use repl::{describe_error, Command, Session};
