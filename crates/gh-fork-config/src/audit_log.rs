//! Append-only audit log of delete outcomes
//!
//! One line per processed repository:
//!
//! ```text
//! 2024-05-01T09:30:00+02:00 delete octocat/old-fork -> deleted
//! 2024-05-01T09:30:02+02:00 delete octocat/locked -> error: forbidden: nope
//! ```
//!
//! Writing is best-effort. I/O failures are logged and swallowed so a broken
//! log file never interrupts a delete batch.

use chrono::{DateTime, Local, SecondsFormat};
use std::fmt::Debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Destination for audit lines
pub trait AuditSink: Debug + Send + Sync {
    /// Record the outcome of deleting `full_name`
    fn append(&self, full_name: &str, outcome: &str);
}

/// Format one audit line (without trailing newline)
pub fn format_entry(timestamp: DateTime<Local>, full_name: &str, outcome: &str) -> String {
    format!(
        "{} delete {} -> {}",
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, false),
        full_name,
        outcome
    )
}

/// File-backed audit log
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl AuditSink for AuditLog {
    fn append(&self, full_name: &str, outcome: &str) {
        let line = format_entry(Local::now(), full_name, outcome);
        if let Err(e) = self.write_line(&line) {
            log::warn!(
                "Failed to write audit log {}: {} (entry: {})",
                self.path.display(),
                e,
                line
            );
        }
    }
}

/// In-memory sink, used when no log file should be touched
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    lines: Mutex<Vec<String>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded lines
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemoryAuditSink {
    fn append(&self, full_name: &str, outcome: &str) {
        let line = format_entry(Local::now(), full_name, outcome);
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line),
            Err(e) => log::warn!("Audit sink poisoned, dropping entry: {}", e),
        }
    }
}
