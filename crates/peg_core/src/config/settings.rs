//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Path configuration.
///
/// `editor_exe` is the one value the tool must remember across sessions:
/// where PersonaEditorCMD.exe lives. The last-used directories only seed
/// the file dialogs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Full path to PersonaEditorCMD.exe.
    #[serde(default)]
    pub editor_exe: String,

    /// Last directory used when picking input files.
    #[serde(default)]
    pub last_input_dir: String,

    /// Last directory used when picking the single import file.
    #[serde(default)]
    pub last_import_dir: String,

    /// Folder for per-run log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            editor_exe: String::new(),
            last_input_dir: String::new(),
            last_import_dir: String::new(),
            logs_folder: default_logs_folder(),
        }
    }
}

impl PathSettings {
    /// Whether the stored executable path points at an existing file.
    pub fn editor_exe_valid(&self) -> bool {
        !self.editor_exe.is_empty() && Path::new(&self.editor_exe).is_file()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Auto-scroll the log view to the newest line.
    #[serde(default = "default_true")]
    pub autoscroll: bool,

    /// Prefix run-log file lines with timestamps.
    #[serde(default = "default_true")]
    pub show_timestamps: bool,

    /// Dump the assembled argv as JSON at debug level.
    #[serde(default)]
    pub show_command_json: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            autoscroll: true,
            show_timestamps: true,
            show_command_json: false,
        }
    }
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Paths,
    Logging,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Logging => "logging",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("editor_exe"));
        assert!(toml.contains("autoscroll"));
    }

    #[test]
    fn settings_round_trip() {
        let mut settings = Settings::default();
        settings.paths.editor_exe = "/opt/pe/PersonaEditorCMD.exe".to_string();
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.paths.editor_exe, settings.paths.editor_exe);
        assert_eq!(parsed.logging.autoscroll, settings.logging.autoscroll);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[paths]\neditor_exe = \"C:/pe/PersonaEditorCMD.exe\"";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        assert_eq!(parsed.paths.editor_exe, "C:/pe/PersonaEditorCMD.exe");
        assert_eq!(parsed.paths.logs_folder, ".logs");
        assert!(parsed.logging.autoscroll);
    }

    #[test]
    fn exe_validity_requires_existing_file() {
        let mut paths = PathSettings::default();
        assert!(!paths.editor_exe_valid());
        paths.editor_exe = "/nonexistent/PersonaEditorCMD.exe".to_string();
        assert!(!paths.editor_exe_valid());
    }
}
