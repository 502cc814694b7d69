//! Run log and `log` facade backend
//!
//! A `Logger` has two roles. Commands hold one as their operation log and
//! append a line per completed step. A second instance is installed as the
//! global `log` backend, where it records every `info!`/`debug!` line with
//! its module path and echoes the important ones to the terminal.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// File-backed logger
pub struct Logger {
    /// Destination of log lines; `None` discards them
    file: Mutex<Option<File>>,
    /// Mirror records of level `Info` and above to the terminal
    echo: bool,
}

impl Logger {
    /// Creates a logger writing to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, truncated on creation
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let file = File::create(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            echo: true,
        })
    }

    /// Creates a logger that writes nowhere
    pub fn null() -> Self {
        Logger {
            file: Mutex::new(None),
            echo: false,
        }
    }

    /// Appends one line to the log file
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;

        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Install a file logger as the `log` backend
    ///
    /// # Arguments
    ///
    /// * `log_file` - File receiving every record
    /// * `verbose` - Record `Debug` as well as `Info` and above
    pub fn init_global_logger<P: AsRef<Path>>(log_file: P, verbose: bool) -> io::Result<()> {
        let global_logger = Logger::new(log_file)?;

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info });
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        let _ = Logger::log(self, &line);

        if self.echo {
            match record.level() {
                Level::Error | Level::Warn => eprintln!("[{}] {}", record.level(), record.args()),
                Level::Info => println!("{}", record.args()),
                _ => {}
            }
        }
    }

    fn flush(&self) {
        // every line is flushed as it is written
    }
}
