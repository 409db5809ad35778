#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! HTTP routing for the tokenize engine.
//!
//! The router is a plain function from `(method, path, body)` to a
//! [`Reply`], so it can be exercised without a socket. `main.rs` owns the
//! `tiny_http` loop.

use serde::{Deserialize, Serialize};
use tokenize::{symbols, TokenizationMode, TokenizeError, ValueMode};

/// Logging setup shared with the binary.
pub mod logging;

/// A response ready to be written to the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
    /// Whether `body` is JSON (otherwise plain text).
    pub json: bool,
}

impl Reply {
    fn text(status: u16, body: &str) -> Self {
        Self { status, body: body.to_string(), json: false }
    }

    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self { status, body, json: true },
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize response");
                Self::text(500, "Internal Server Error")
            }
        }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self::json(status, &ErrorBody { error: message.into() })
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct TokenizeRequest {
    text: String,
    token_mode: TokenizationMode,
}

#[derive(Serialize)]
struct TokenizeResponse {
    tokens: Vec<String>,
}

#[derive(Deserialize)]
struct EncodeRequest {
    text: String,
    token_mode: TokenizationMode,
    value_mode: ValueMode,
}

#[derive(Serialize)]
struct EncodeResponse {
    tokens: Vec<String>,
    encoded: Vec<tokenize::EncodedValue>,
    sequence: String,
    insight: String,
}

#[derive(Deserialize)]
struct DecodeRequest {
    input: String,
    token_mode: TokenizationMode,
    value_mode: ValueMode,
}

#[derive(Serialize)]
struct SymbolEntry {
    character: String,
    glyph: &'static str,
    label: &'static str,
}

/// HTTP status used to report an engine error.
pub fn status_for(err: &TokenizeError) -> u16 {
    match err {
        TokenizeError::EmptyInput => 422,
        TokenizeError::UnsupportedOperation(_) => 501,
        TokenizeError::UnknownMode(_) => 400,
    }
}

/// Dispatch one request.
pub fn route(method: &str, url: &str, body: &str) -> Reply {
    let path = url.split('?').next().unwrap_or(url);
    tracing::debug!(method, path, "request");
    match (method, path) {
        ("GET", "/health") => Reply::text(200, "OK"),
        ("GET", "/symbols") => symbols_table(),
        ("POST", "/tokenize") => with_body(body, tokenize_text),
        ("POST", "/encode") => with_body(body, encode_text),
        ("POST", "/decode") => with_body(body, decode_values),
        _ => Reply::text(404, "Not Found"),
    }
}

fn with_body<T, F>(body: &str, handler: F) -> Reply
where
    T: for<'de> Deserialize<'de>,
    F: FnOnce(T) -> Reply,
{
    match serde_json::from_str::<T>(body) {
        Ok(req) => handler(req),
        Err(e) => {
            tracing::debug!(error = %e, "rejecting malformed request body");
            Reply::error(400, format!("bad request: {e}"))
        }
    }
}

fn engine_error(err: TokenizeError) -> Reply {
    Reply::error(status_for(&err), err.to_string())
}

fn tokenize_text(req: TokenizeRequest) -> Reply {
    let tokens = tokenize::tokenize(&req.text, req.token_mode);
    Reply::json(200, &TokenizeResponse { tokens })
}

fn encode_text(req: EncodeRequest) -> Reply {
    match tokenize::analyze(&req.text, req.token_mode, req.value_mode) {
        Ok(analysis) => {
            let sequence = tokenize::format_sequence(&analysis.encoded);
            Reply::json(
                200,
                &EncodeResponse {
                    tokens: analysis.tokens,
                    encoded: analysis.encoded,
                    sequence,
                    insight: analysis.insight,
                },
            )
        }
        Err(e) => engine_error(e),
    }
}

fn decode_values(req: DecodeRequest) -> Reply {
    match tokenize::decode(&req.input, req.token_mode, req.value_mode) {
        Ok(decoded) => Reply::json(200, &decoded),
        Err(e) => engine_error(e),
    }
}

fn symbols_table() -> Reply {
    let entries: Vec<SymbolEntry> = symbols::entries()
        .map(|(c, s)| SymbolEntry { character: c.to_string(), glyph: s.glyph, label: s.label })
        .collect();
    Reply::json(200, &entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_is_plain_text() {
        assert_eq!(route("GET", "/health", ""), Reply::text(200, "OK"));
    }

    #[test]
    fn unknown_route_is_404() {
        assert_eq!(route("GET", "/nope", "").status, 404);
        assert_eq!(route("GET", "/encode", "").status, 404);
    }

    #[test]
    fn query_string_is_ignored() {
        assert_eq!(route("GET", "/health?x=1", "").status, 200);
    }

    #[test]
    fn malformed_json_is_400() {
        let reply = route("POST", "/encode", "{not json");
        assert_eq!(reply.status, 400);
        assert!(reply.json);
    }

    #[test]
    fn missing_mode_is_400() {
        let reply = route("POST", "/tokenize", r#"{"text":"hi"}"#);
        assert_eq!(reply.status, 400);
    }

    #[test]
    fn error_statuses() {
        assert_eq!(status_for(&TokenizeError::EmptyInput), 422);
        assert_eq!(status_for(&TokenizeError::UnsupportedOperation("x")), 501);
    }
}
