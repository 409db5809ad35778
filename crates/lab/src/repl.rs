//! Interactive session: current modes plus line commands.

use tokenize::{analyze, decode, TokenizationMode, TokenizeError, ValueMode};

use crate::render::{
    render_analysis, render_decoded, render_modes, render_symbols, EMPTY_TEXT_WARNING, EMPTY_VALUES_WARNING,
};

/// Help text printed by `:help`.
pub const HELP: &str = "\
Type text to tokenize and encode it with the current modes.
  :mode <character|word|subword>   switch tokenization mode
  :value <numeric|visual>          switch value representation
  :decode <v1,v2,...>              decode comma separated values
  :symbols                         show the visual symbol table
  :modes                           list modes
  :help                            this message
  quit | exit                      leave";

/// One parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the session.
    Quit,
    /// Print [`HELP`].
    Help,
    /// Print the symbol table.
    Symbols,
    /// Print the available modes.
    Modes,
    /// Switch tokenization mode.
    SetTokenMode(TokenizationMode),
    /// Switch value mode.
    SetValueMode(ValueMode),
    /// Decode the given values.
    Decode(String),
    /// Encode the given text.
    Encode(String),
}

impl Command {
    /// Parse a line. Lines not starting with `:` are text to encode, kept verbatim.
    pub fn parse(line: &str) -> Result<Self, TokenizeError> {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            return Ok(Self::Quit);
        }
        let Some(rest) = trimmed.strip_prefix(':') else {
            return Ok(Self::Encode(line.to_string()));
        };
        let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        let arg = arg.trim();
        match name {
            "help" | "h" => Ok(Self::Help),
            "symbols" => Ok(Self::Symbols),
            "modes" => Ok(Self::Modes),
            "mode" => arg.parse().map(Self::SetTokenMode),
            "value" => arg.parse().map(Self::SetValueMode),
            "decode" => Ok(Self::Decode(arg.to_string())),
            "quit" | "q" => Ok(Self::Quit),
            _ => Err(TokenizeError::UnknownMode(format!(":{name}"))),
        }
    }
}

/// Mode selection carried between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Current tokenization mode.
    pub token_mode: TokenizationMode,
    /// Current value mode.
    pub value_mode: ValueMode,
}

impl Session {
    /// Start a session with the given modes.
    pub fn new(token_mode: TokenizationMode, value_mode: ValueMode) -> Self {
        Self { token_mode, value_mode }
    }

    /// Handle one input line. Returns `None` when the session should end.
    pub fn handle(&mut self, line: &str) -> Option<String> {
        let command = match Command::parse(line) {
            Ok(c) => c,
            Err(e) => return Some(format!("⚠️ {e} (try :help)")),
        };
        tracing::debug!(?command, "repl command");
        let output = match command {
            Command::Quit => return None,
            Command::Help => HELP.to_string(),
            Command::Symbols => render_symbols(),
            Command::Modes => render_modes(),
            Command::SetTokenMode(mode) => {
                self.token_mode = mode;
                format!("tokenization mode: {mode}")
            }
            Command::SetValueMode(mode) => {
                self.value_mode = mode;
                format!("value mode: {mode}")
            }
            Command::Decode(values) => self.decode(&values),
            Command::Encode(text) => self.encode(&text),
        };
        Some(output)
    }

    fn encode(&self, text: &str) -> String {
        match analyze(text, self.token_mode, self.value_mode) {
            Ok(analysis) => render_analysis(&analysis, self.value_mode),
            Err(e) => describe_error(&e, EMPTY_TEXT_WARNING),
        }
    }

    fn decode(&self, values: &str) -> String {
        match decode(values, self.token_mode, self.value_mode) {
            Ok(decoded) => render_decoded(&decoded),
            Err(e) => describe_error(&e, EMPTY_VALUES_WARNING),
        }
    }
}

/// User facing message for an engine error.
pub fn describe_error(err: &TokenizeError, empty_message: &str) -> String {
    match err {
        TokenizeError::EmptyInput => empty_message.to_string(),
        TokenizeError::UnsupportedOperation(_) => format!("🚧 {err}"),
        TokenizeError::UnknownMode(_) => format!("⚠️ {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse(" EXIT "), Ok(Command::Quit));
        assert_eq!(Command::parse(":mode word"), Ok(Command::SetTokenMode(TokenizationMode::Word)));
        assert_eq!(Command::parse(":value emoji"), Ok(Command::SetValueMode(ValueMode::Visual)));
        assert_eq!(Command::parse(":decode 72, 105"), Ok(Command::Decode("72, 105".to_string())));
        assert_eq!(Command::parse(" Hi there "), Ok(Command::Encode(" Hi there ".to_string())));
    }

    #[test]
    fn rejects_unknown_commands_and_modes() {
        assert!(Command::parse(":frobnicate").is_err());
        assert!(Command::parse(":mode bpe").is_err());
    }

    #[test]
    fn session_switches_modes() {
        let mut session = Session::new(TokenizationMode::Character, ValueMode::Numeric);
        assert_eq!(session.handle(":mode subword").as_deref(), Some("tokenization mode: subword"));
        assert_eq!(session.token_mode, TokenizationMode::Subword);
        session.handle(":value visual");
        assert_eq!(session.value_mode, ValueMode::Visual);
    }

    #[test]
    fn session_reports_empty_and_unsupported() {
        let mut session = Session::new(TokenizationMode::Character, ValueMode::Visual);
        assert_eq!(session.handle("   ").as_deref(), Some(EMPTY_TEXT_WARNING));
        assert_eq!(session.handle(":decode").as_deref(), Some(EMPTY_VALUES_WARNING));
        let unsupported = session.handle(":decode 1,2").unwrap_or_default();
        assert!(unsupported.starts_with("🚧 not implemented"));
    }

    #[test]
    fn session_encodes_and_decodes() {
        let mut session = Session::new(TokenizationMode::Character, ValueMode::Numeric);
        let encoded = session.handle("Hi").unwrap_or_default();
        assert!(encoded.contains("[72, 105]"));
        assert_eq!(session.handle(":decode 72,105").as_deref(), Some("Decoded Text: Hi"));
        assert_eq!(session.handle("quit"), None);
    }
}
