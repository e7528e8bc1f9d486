//! Logger utility for application-wide logging
//!
//! Diagnostics go through the `log` facade and env_logger on the console.
//! `Logger` adds an optional transcript file for parsed definitions.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Creates a logger that discards file output
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
        }
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(file) = &mut *guard {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs a titled multi-line block, such as a pretty WKT definition
    ///
    /// # Arguments
    ///
    /// * `title` - Heading written before the block
    /// * `block` - The text to log, one log line per input line
    pub fn log_block(&self, title: &str, block: &str) -> io::Result<()> {
        self.log(&format!("{}:", title))?;

        for line in block.lines() {
            self.log(&format!("  {}", line))?;
        }

        Ok(())
    }

    /// Initialize console logging through env_logger
    ///
    /// `RUST_LOG` overrides the level when set; otherwise `verbose` selects
    /// debug output and the default is warnings only.
    ///
    /// # Arguments
    ///
    /// * `verbose` - Whether to enable debug output
    pub fn init_console(verbose: bool) {
        let level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|v| v.parse::<LevelFilter>().ok())
            .unwrap_or(if verbose { LevelFilter::Debug } else { LevelFilter::Warn });

        let result = Builder::new()
            .filter_level(level)
            .target(Target::Stderr)
            .format(|buf, record| {
                writeln!(buf, "[{:5} {}] {}", record.level(), record.target(), record.args())
            })
            .try_init();

        if result.is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }
    }
}
