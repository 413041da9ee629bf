// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info};

use kotran::clipboard::{ClipboardBridge, MemoryClipboard, SystemClipboard};
use kotran::language::SourceLanguage;
use kotran::session::{SessionStatus, TranslationSession};
use kotran::translator::google::{DEFAULT_TIMEOUT_SECS, GoogleTranslate};

/// CLI wrapper for log levels to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// kotran - Korean to English translator
///
/// Translates Korean text to English using the public Google Translate web
/// endpoint. Input comes from the command line or the system clipboard.
#[derive(Parser, Debug)]
#[command(name = "kotran")]
#[command(version = "0.1.0")]
#[command(about = "Korean to English translation from the command line")]
#[command(long_about = "kotran translates Korean text to English via the public Google Translate web endpoint.

EXAMPLES:
    kotran \"안녕하세요\"              # Translate the given text
    kotran --paste                    # Translate the clipboard contents
    kotran --paste --copy             # Translate the clipboard, copy the result back
    kotran --timeout-secs 5 \"안녕\"    # Fail fast on a hung connection")]
struct CommandLineOptions {
    /// Text to translate (omit when using --paste)
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read the input text from the system clipboard
    #[arg(short, long)]
    paste: bool,

    /// Copy the translation back to the system clipboard
    #[arg(short, long)]
    copy: bool,

    /// Source language code (e.g. 'ko')
    #[arg(short, long, default_value = "ko")]
    source_language: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");

            let mut stderr = std::io::stderr();
            let _ = match record.level() {
                Level::Error => {
                    writeln!(stderr, "\x1B[1;31m{} {}\x1B[0m", now, record.args())
                }
                Level::Warn => {
                    writeln!(stderr, "\x1B[1;33m{} {}\x1B[0m", now, record.args())
                }
                _ => writeln!(stderr, "{} {}", now, record.args()),
            };
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = CommandLineOptions::parse();

    let log_level = options
        .log_level
        .map(LevelFilter::from)
        .unwrap_or(LevelFilter::Info);
    CustomLogger::init(log_level)?;

    let source = options
        .source_language
        .parse::<SourceLanguage>()
        .map_err(|e| anyhow!("{}", e))?;

    let translator = GoogleTranslate::with_timeout(Duration::from_secs(options.timeout_secs))
        .map_err(|e| anyhow!("{}", e))?;
    let translator = Arc::new(translator);

    // The system clipboard is only touched when paste/copy asked for it, so
    // plain translations still work on hosts without one
    let clipboard: Box<dyn ClipboardBridge> = if options.paste || options.copy {
        Box::new(SystemClipboard::new().map_err(|e| anyhow!("{}", e))?)
    } else {
        Box::new(MemoryClipboard::empty())
    };

    let session = TranslationSession::with_language(translator, clipboard, source);

    let handle = if options.paste {
        session.paste_from_clipboard().map_err(|e| anyhow!("{}", e))?
    } else {
        let text = options
            .text
            .ok_or_else(|| anyhow!("no input text: pass TEXT or use --paste"))?;
        session.set_input(text)
    };

    let Some(handle) = handle else {
        info!("input is empty, nothing to translate");
        return Ok(());
    };
    handle.await?;

    let state = session.snapshot();
    match state.status {
        SessionStatus::Ready => {
            println!("{}", state.display_text);
            if options.copy {
                session.copy_to_clipboard().map_err(|e| anyhow!("{}", e))?;
                info!("translation copied to clipboard");
            }
            Ok(())
        }
        _ => {
            error!("{}", session.rendered_output());
            Err(anyhow!("translation failed"))
        }
    }
}
