//! Per-run log file writer.
//!
//! Every batch run gets its own timestamped file under the logs folder,
//! holding the same lines the GUI log view shows.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

/// Writes one batch run's log lines to a dedicated file.
pub struct RunLogger {
    log_path: PathBuf,
    writer: Option<BufWriter<File>>,
    show_timestamps: bool,
}

impl RunLogger {
    /// Create a logger for a new run.
    ///
    /// The file is named after the run's start time, e.g.
    /// `run_20250131_154210.log`.
    pub fn new(log_dir: impl AsRef<Path>, show_timestamps: bool) -> std::io::Result<Self> {
        let log_dir = log_dir.as_ref();
        fs::create_dir_all(log_dir)?;

        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let log_path = log_dir.join(format!("run_{}.log", stamp));
        let writer = BufWriter::new(File::create(&log_path)?);

        Ok(Self {
            log_path,
            writer: Some(writer),
            show_timestamps,
        })
    }

    /// Get the log file path.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Append one log line (may span multiple display lines).
    pub fn line(&mut self, message: &str) {
        let formatted = if self.show_timestamps {
            format!("[{}] {}", Local::now().format("%H:%M:%S"), message)
        } else {
            message.to_string()
        };
        if let Some(writer) = &mut self.writer {
            let _ = writeln!(writer, "{}", formatted);
        }
    }

    /// Flush pending lines to disk.
    pub fn flush(&mut self) {
        if let Some(writer) = &mut self.writer {
            let _ = writer.flush();
        }
    }

    /// Close the logger and release the file handle.
    pub fn close(&mut self) {
        self.flush();
        self.writer = None;
    }
}

impl Drop for RunLogger {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_log_file_in_dir() {
        let dir = tempdir().unwrap();
        let logger = RunLogger::new(dir.path().join("logs"), true).unwrap();
        assert!(logger.log_path().exists());
        assert!(logger
            .log_path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("run_"));
    }

    #[test]
    fn writes_lines() {
        let dir = tempdir().unwrap();
        let mut logger = RunLogger::new(dir.path(), false).unwrap();
        logger.line("--- INICIANDO PROCESSO ---");
        logger.line("  Status: Sucesso!");
        logger.flush();

        let content = fs::read_to_string(logger.log_path()).unwrap();
        assert_eq!(content, "--- INICIANDO PROCESSO ---\n  Status: Sucesso!\n");
    }

    #[test]
    fn timestamps_are_prefixed_when_enabled() {
        let dir = tempdir().unwrap();
        let mut logger = RunLogger::new(dir.path(), true).unwrap();
        logger.line("mensagem");
        logger.flush();

        let content = fs::read_to_string(logger.log_path()).unwrap();
        assert!(content.starts_with('['));
        assert!(content.contains("] mensagem"));
    }
}
