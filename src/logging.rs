use std::path::Path;

use anyhow::Result;
use chrono::SecondsFormat;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Verbosity level for logging
///
/// Results go to stdout, so everything logged here goes to stderr and the
/// default level only lets warnings through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages (default)
    Warning,
    /// Info, warning, and error messages
    Info,
    /// Debug, info, warning, and error messages
    Debug,
    /// Trace, debug, info, warning, and error messages
    Trace,
}

impl LogLevel {
    /// Convert verbosity level to log::LevelFilter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Get the verbosity level from the number of occurrences of a flag
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => LogLevel::Warning, // Default
            1 => LogLevel::Info,    // -v
            2 => LogLevel::Debug,   // -vv
            _ => LogLevel::Trace,   // -vvv or more
        }
    }
}

/// Initialise the logger with the specified verbosity level
///
/// Messages always go to stderr; when `log_file` is given they are also
/// appended to that file with a timestamp and target.
pub fn init_logger(verbosity: LogLevel, log_file: Option<&Path>) -> Result<()> {
    let base_logger = Dispatch::new().level(verbosity.to_level_filter());

    let colors_line = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    let use_colors = atty::is(atty::Stream::Stderr);
    let output_logger = Dispatch::new()
        .format(move |out, message, record| {
            if use_colors {
                out.finish(format_args!(
                    "\x1B[{}m{}\x1B[0m",
                    colors_line.get_color(&record.level()).to_fg_str(),
                    message
                ))
            } else {
                out.finish(format_args!("{}: {}", record.level(), message))
            }
        })
        .level(verbosity.to_level_filter())
        .chain(std::io::stderr());

    match log_file {
        Some(path) => {
            let file_logger = Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} {} {}] {}",
                        chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .level(verbosity.to_level_filter())
                .chain(fern::log_file(path)?);
            base_logger
                .chain(file_logger)
                .chain(output_logger)
                .apply()?;
        }
        None => base_logger.chain(output_logger).apply()?,
    }

    log::debug!("Logger initialized with verbosity level: {verbosity:?}");

    Ok(())
}

/// Format a message with colour support
///
/// Diagnostics are written to stderr, so colour is used only when stderr is
/// a terminal.
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stderr) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}
