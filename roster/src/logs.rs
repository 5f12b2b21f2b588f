//! Console progress log.
//!
//! Short leveled messages printed to stderr while a run progresses.
//! Detailed diagnostics go through the `log` facade instead.

use once_cell::sync::Lazy;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

/// Log level for console display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth under the previous message
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Text of the entry as printed on the console.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!("{}{} {}", indent, prefix, self.message)
    }
}

/// Global console
pub static CONSOLE: Lazy<Console> = Lazy::new(Console::new);

/// Prints log entries to stderr unless silenced.
pub struct Console {
    quiet: AtomicBool,
}

impl Console {
    pub fn new() -> Self {
        Self { quiet: AtomicBool::new(false) }
    }

    /// Silence everything but errors.
    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet.load(Ordering::Relaxed)
    }

    /// Whether entries of `level` reach stderr.
    pub fn shows(&self, level: LogLevel) -> bool {
        !self.is_quiet() || level == LogLevel::Error
    }

    pub fn log(&self, entry: LogEntry) {
        if !self.shows(entry.level) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", entry.render());
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    CONSOLE.log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    CONSOLE.log(LogEntry::success(msg));
}

pub fn log_error(msg: impl Into<String>) {
    CONSOLE.log(LogEntry::error(msg));
}

pub fn log_success_indent(msg: impl Into<String>, indent: u8) {
    CONSOLE.log(LogEntry::success(msg).with_indent(indent));
}
