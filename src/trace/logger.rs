use std::{
    fs::{File, OpenOptions},
    io::Write,
    sync::Mutex,
};

use crate::trace::trace::FillTraceEvent;

/// Append-only JSONL sink for fill decisions.
///
/// A sink that cannot be opened or written only warns on stderr; tracing
/// never changes the outcome of a fill pass.
pub struct TraceLogger {
    file: Option<Mutex<File>>,
}

impl TraceLogger {
    pub fn new(path: &str) -> Self {
        let file = OpenOptions::new().create(true).append(true).open(path);

        match file {
            Ok(f) => Self {
                file: Some(Mutex::new(f)),
            },
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path, e);
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { file: None }
    }

    /// Logger for an optional configured path.
    pub fn from_path(path: Option<&str>) -> Self {
        path.map_or_else(Self::disabled, Self::new)
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Append one event as a single JSON line.
    pub fn log(&self, event: &FillTraceEvent) {
        let Some(file) = &self.file else {
            return;
        };

        let line = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Warning: failed to serialize trace event for {}: {}", event.control, e);
                return;
            }
        };

        let Ok(mut file) = file.lock() else {
            eprintln!("Warning: trace file lock poisoned, dropping event for {}", event.control);
            return;
        };

        if let Err(e) = writeln!(file, "{}", line) {
            eprintln!("Warning: failed to write trace event: {}", e);
        }
    }
}
