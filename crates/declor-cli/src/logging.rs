//! Run logging for declor
//!
//! When enabled with `--log`, writes a timestamped trace of the run: which
//! files were scanned, which containers produced findings, and which files
//! were skipped and why.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Global logger instance
static LOGGER: Mutex<Option<RunLogger>> = Mutex::new(None);

/// Logger for a single declor run
pub struct RunLogger {
    file: File,
}

impl RunLogger {
    /// Create a new logger writing to the specified path
    pub fn new(log_path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;

        Ok(Self { file })
    }

    /// Write a log message
    pub fn log(&mut self, message: &str) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(self.file, "[{}] {}", timestamp, message);
        let _ = self.file.flush();
    }

    /// Log a section header
    pub fn section(&mut self, title: &str) {
        let separator = "=".repeat(60);
        self.log(&separator);
        self.log(title);
        self.log(&separator);
    }
}

/// Initialize the global logger
pub fn init_logger(log_path: Option<&Path>) -> std::io::Result<PathBuf> {
    let path = log_path.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        PathBuf::from(format!("/tmp/declor-{}.log", timestamp))
    });

    let logger = RunLogger::new(&path)?;

    if let Ok(mut guard) = LOGGER.lock() {
        *guard = Some(logger);
    }

    Ok(path)
}

/// Log a message to the global logger
pub fn log(message: &str) {
    if let Ok(mut guard) = LOGGER.lock() {
        if let Some(ref mut logger) = *guard {
            logger.log(message);
        }
    }
}

/// Log a section header
pub fn section(title: &str) {
    if let Ok(mut guard) = LOGGER.lock() {
        if let Some(ref mut logger) = *guard {
            logger.section(title);
        }
    }
}

/// Log the start of a run
pub fn log_run_start(files_count: usize, rules: &[String], fix_mode: bool) {
    section("RUN START");
    log(&format!(
        "Mode: {}",
        if fix_mode { "fix" } else { "check" }
    ));
    log(&format!("Rules: {}", rules.join(", ")));
    log(&format!("Scanning {} files", files_count));
}

/// Log the outcome for one file
pub fn log_file_outcome(path: &Path, edit_count: usize) {
    if edit_count > 0 {
        log(&format!("{}: {} edit(s)", path.display(), edit_count));
    } else {
        log(&format!("{}: in order", path.display()));
    }
}

/// Log a file that could not be processed
pub fn log_file_skipped(path: &Path, reason: &str) {
    log(&format!("SKIPPED {}: {}", path.display(), reason));
}

/// Log the end of a run
pub fn log_run_complete(files_processed: usize, files_with_changes: usize, errors: usize) {
    section("RUN COMPLETE");
    log(&format!("Files processed: {}", files_processed));
    log(&format!("Files with findings: {}", files_with_changes));
    log(&format!("Errors: {}", errors));
}
