//! File logger behind the `log` facade. Stdout belongs to the terminal UI.

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

const FILENAME: &str = "blockdrop.log";

#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("logger already installed")]
    AlreadySet(#[from] log::SetLoggerError),
}

struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{} [{}] {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Default log location: `blockdrop.log` in the system temp directory.
pub fn default_path() -> PathBuf {
    std::env::temp_dir().join(FILENAME)
}

/// Install the global logger, appending to `path`.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), LogError> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|source| LogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    log::set_boxed_logger(Box::new(FileLogger {
        level,
        file: Mutex::new(file),
    }))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_names_path() {
        let path = std::env::temp_dir()
            .join("blockdrop-missing-dir")
            .join("nested")
            .join(FILENAME);
        let err = init(&path, LevelFilter::Info).unwrap_err();
        assert!(matches!(err, LogError::Open { .. }));
        assert!(err.to_string().contains("blockdrop-missing-dir"));
    }

    #[test]
    fn default_path_is_in_temp_dir() {
        let path = default_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with(FILENAME));
    }
}
