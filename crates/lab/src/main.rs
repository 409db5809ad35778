use std::io::{self, BufRead, Write};
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lab::render::{EMPTY_TEXT_WARNING, EMPTY_VALUES_WARNING};
use lab::{describe_error, render_analysis, render_decoded, render_modes, render_symbols, render_tokens, Session};
use tokenize::{analyze, decode, tokenize, TokenizationMode, ValueMode};

#[derive(Parser)]
#[command(name = "lab", version, about = "Tokenizer lab: see how text becomes tokens and numbers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct ModeArgs {
    /// Tokenization mode: character, word or subword
    #[arg(short, long, default_value = "character")]
    mode: TokenizationMode,

    /// Value representation: numeric or visual
    #[arg(long = "value", default_value = "numeric")]
    value: ValueMode,
}

#[derive(Subcommand)]
enum Commands {
    /// Split text into tokens
    Tokenize {
        /// Text to split
        text: String,
        /// Tokenization mode: character, word or subword
        #[arg(short, long, default_value = "character")]
        mode: TokenizationMode,
    },
    /// Tokenize, encode and explain text
    Encode {
        /// Text to encode
        text: String,
        #[command(flatten)]
        modes: ModeArgs,
    },
    /// Decode comma separated values back to text
    Decode {
        /// Values such as 72,101,108,108,111
        values: String,
        #[command(flatten)]
        modes: ModeArgs,
    },
    /// Show the visual symbol table
    Symbols,
    /// List tokenization and value modes
    Modes,
    /// Interactive session
    Repl {
        #[command(flatten)]
        modes: ModeArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let code = match cli.command {
        Commands::Tokenize { text, mode } => {
            println!("{}", render_tokens(&tokenize(&text, mode)));
            0
        }
        Commands::Encode { text, modes } => match analyze(&text, modes.mode, modes.value) {
            Ok(analysis) => {
                println!("{}", render_analysis(&analysis, modes.value));
                0
            }
            Err(e) => {
                eprintln!("{}", describe_error(&e, EMPTY_TEXT_WARNING));
                1
            }
        },
        Commands::Decode { values, modes } => match decode(&values, modes.mode, modes.value) {
            Ok(decoded) => {
                println!("{}", render_decoded(&decoded));
                0
            }
            Err(e) => {
                eprintln!("{}", describe_error(&e, EMPTY_VALUES_WARNING));
                1
            }
        },
        Commands::Symbols => {
            println!("{}", render_symbols());
            0
        }
        Commands::Modes => {
            print!("{}", render_modes());
            0
        }
        Commands::Repl { modes } => match repl(Session::new(modes.mode, modes.value)) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("repl failed: {e}");
                1
            }
        },
    };
    process::exit(code);
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A second init in the same process is harmless; ignore it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn repl(mut session: Session) -> anyhow::Result<()> {
    println!(
        "Tokenizer lab ({} / {}). Type :help for commands, 'quit' or Ctrl-D to leave.",
        session.token_mode, session.value_mode
    );
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        match session.handle(&line) {
            Some(output) => println!("{output}"),
            None => {
                println!("Bye");
                break;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}
