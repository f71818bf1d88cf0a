use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Receives human-readable failure messages from batch loading.
pub trait LogSink {
    fn error(&mut self, message: &str);
}

/// Appends timestamped lines to a log file, creating it on first use.
pub struct FileLog {
    path: PathBuf,
    entries: usize,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of messages received since this sink was created.
    pub fn entries(&self) -> usize {
        self.entries
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl LogSink for FileLog {
    fn error(&mut self, message: &str) {
        self.entries += 1;
        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f");
        let line = format!("{stamp} - ERROR - {message}");
        if let Err(e) = self.append(&line) {
            tracing::warn!(path = %self.path.display(), error = %e, "could not write to log file");
        }
    }
}

/// Keeps messages in memory, for callers that display them directly.
#[derive(Debug, Default)]
pub struct MemoryLog {
    pub messages: Vec<String>,
}

impl LogSink for MemoryLog {
    fn error(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
