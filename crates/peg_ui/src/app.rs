//! Main application state and message dispatch.
//!
//! All widget state lives in one flat `App` record; the argument builder
//! in the core crate consumes a snapshot of it (`CommandForm`), so what
//! gets executed never depends on widget internals. Handler methods are
//! spread over `handlers/*.rs` as `impl App` blocks.

use std::path::PathBuf;

use iced::{window, Element, Event, Subscription, Task, Theme};

use peg_core::command::{CommandForm, ExportType, MainCommand, TextEncoding};
use peg_core::config::{ConfigManager, ConfigSection};
use peg_core::logging::RunLogger;
use peg_core::runner::RunOutput;

use crate::handlers::helpers::clean_file_url;
use crate::pages;
use crate::theme::StatusTone;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

/// Bounds of the `/auto` hyphenation width field.
pub const AUTO_WIDTH_RANGE: (u32, u32) = (1, 9999);

/// Bounds of the `/size` pixel size field.
pub const SIZE_VALUE_RANGE: (u32, u32) = (1, 99999);

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    // Executable path
    ExePathChanged(String),
    ExePathSubmitted,
    BrowseExe,
    ExeSelected(Option<PathBuf>),

    // Font settings
    OldFontSelected(String),
    NewFontSelected(String),
    SaveFontsPressed,

    // File selection
    AddFilesPressed,
    FilesSelected(Vec<PathBuf>),
    AddFolderPressed,
    FolderSelected(Option<PathBuf>),
    ClearFilesPressed,
    FileDropped(PathBuf),

    // Command form
    CommandSelected(MainCommand),
    ExportTypeSelected(ExportType),
    RecursiveToggled(bool),
    OverwriteToggled(bool),
    SaveOnImportToggled(bool),
    SingleImportToggled(bool),
    SingleImportPathChanged(String),
    BrowseSingleImport,
    SingleImportSelected(Option<PathBuf>),
    MapPatternChanged(String),
    LineByLineToggled(bool),
    AutoHyphenToggled(bool),
    AutoWidthChanged(String),
    SkipEmptyToggled(bool),
    EncodingSelected(TextEncoding),
    RemoveSplitToggled(bool),
    UnifyToggled(bool),
    UnifyPathChanged(String),
    BrowseUnifyTarget,
    UnifyTargetSelected(Option<PathBuf>),
    CopyOldToNewToggled(bool),
    SetSizeToggled(bool),
    SizeValueChanged(String),

    // Batch processing
    ExecutePressed,
    ProcessNextFile,
    FileFinished(Result<RunOutput, String>),
    BatchFinished,

    // Window
    CloseRequested(window::Id),
}

/// State of the batch currently running.
pub struct BatchState {
    /// Snapshot of the file list taken when the run started.
    pub files: Vec<PathBuf>,
    /// Index of the next file to process.
    pub index: usize,
    /// Files that exited non-zero so far.
    pub failures: usize,
    /// Set when an invocation-level fault stopped the batch.
    pub aborted: bool,
    /// Files offered to the batch, in order, for the unifier.
    pub processed: Vec<PathBuf>,
    /// Per-run log file, if one could be created.
    pub logger: Option<RunLogger>,
}

/// Main application state.
pub struct App {
    pub config: ConfigManager,

    // Executable path row
    pub exe_path: String,

    // Font settings group
    pub font_names: Vec<String>,
    pub old_font: Option<String>,
    pub new_font: Option<String>,
    pub font_status: String,
    pub font_tone: StatusTone,
    pub fonts_enabled: bool,

    // File selection
    pub files: Vec<PathBuf>,

    // Command form + raw text of the numeric fields
    pub form: CommandForm,
    pub auto_width_text: String,
    pub size_value_text: String,

    // Output
    pub log_text: String,

    // Batch
    pub is_running: bool,
    pub batch: Option<BatchState>,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let mut config = ConfigManager::new(default_config_path());
        if let Err(e) = config.load_or_create() {
            tracing::warn!("Failed to load config: {}. Using defaults.", e);
        }

        let exe_path = config.settings().paths.editor_exe.clone();
        let form = CommandForm::default();

        let mut app = Self {
            config,
            exe_path,
            font_names: Vec::new(),
            old_font: None,
            new_font: None,
            font_status: "Defina o caminho do executável para carregar as fontes.".to_string(),
            font_tone: StatusTone::Gray,
            fonts_enabled: false,
            files: Vec::new(),
            auto_width_text: form.auto_width.to_string(),
            size_value_text: form.size_value.to_string(),
            form,
            log_text: String::new(),
            is_running: false,
            batch: None,
        };

        if !app.exe_path.is_empty() {
            app.reload_fonts();
        }

        (app, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Executable path
            Message::ExePathChanged(value) => {
                self.exe_path = clean_file_url(&value);
                Task::none()
            }
            Message::ExePathSubmitted => {
                self.persist_paths();
                self.reload_fonts();
                Task::none()
            }
            Message::BrowseExe => self.browse_exe(),
            Message::ExeSelected(path) => {
                self.handle_exe_selected(path);
                Task::none()
            }

            // Font settings
            Message::OldFontSelected(name) => {
                self.old_font = Some(name);
                Task::none()
            }
            Message::NewFontSelected(name) => {
                self.new_font = Some(name);
                Task::none()
            }
            Message::SaveFontsPressed => {
                self.save_fonts();
                Task::none()
            }

            // File selection
            Message::AddFilesPressed => self.browse_files(),
            Message::FilesSelected(files) => {
                self.handle_files_selected(files);
                Task::none()
            }
            Message::AddFolderPressed => self.browse_folder(),
            Message::FolderSelected(folder) => {
                self.handle_folder_selected(folder);
                Task::none()
            }
            Message::ClearFilesPressed => {
                self.files.clear();
                Task::none()
            }
            Message::FileDropped(path) => {
                self.handle_file_dropped(path);
                Task::none()
            }

            // Command form
            Message::CommandSelected(command) => {
                self.form.command = command;
                Task::none()
            }
            Message::ExportTypeSelected(export_type) => {
                self.form.export_type = export_type;
                Task::none()
            }
            Message::RecursiveToggled(v) => {
                self.form.recursive = v;
                Task::none()
            }
            Message::OverwriteToggled(v) => {
                self.form.overwrite = v;
                Task::none()
            }
            Message::SaveOnImportToggled(v) => {
                self.form.save_on_import = v;
                Task::none()
            }
            Message::SingleImportToggled(v) => {
                self.form.single_import = v;
                Task::none()
            }
            Message::SingleImportPathChanged(value) => {
                self.form.single_import_path = clean_file_url(&value);
                Task::none()
            }
            Message::BrowseSingleImport => self.browse_single_import(),
            Message::SingleImportSelected(path) => {
                self.handle_single_import_selected(path);
                Task::none()
            }
            Message::MapPatternChanged(value) => {
                self.form.map_pattern = value;
                Task::none()
            }
            Message::LineByLineToggled(v) => {
                self.form.line_by_line = v;
                Task::none()
            }
            Message::AutoHyphenToggled(v) => {
                self.form.auto_hyphen = v;
                Task::none()
            }
            Message::AutoWidthChanged(text) => {
                self.set_numeric_field(text, NumericField::AutoWidth);
                Task::none()
            }
            Message::SkipEmptyToggled(v) => {
                self.form.skip_empty = v;
                Task::none()
            }
            Message::EncodingSelected(encoding) => {
                self.form.encoding = encoding;
                Task::none()
            }
            Message::RemoveSplitToggled(v) => {
                self.form.remove_split = v;
                Task::none()
            }
            Message::UnifyToggled(v) => {
                self.form.unify = v;
                Task::none()
            }
            Message::UnifyPathChanged(value) => {
                self.form.unify_path = clean_file_url(&value);
                Task::none()
            }
            Message::BrowseUnifyTarget => self.browse_unify_target(),
            Message::UnifyTargetSelected(path) => {
                self.handle_unify_target_selected(path);
                Task::none()
            }
            Message::CopyOldToNewToggled(v) => {
                self.form.copy_old_to_new = v;
                Task::none()
            }
            Message::SetSizeToggled(v) => {
                self.form.set_size = v;
                Task::none()
            }
            Message::SizeValueChanged(text) => {
                self.set_numeric_field(text, NumericField::SizeValue);
                Task::none()
            }

            // Batch processing
            Message::ExecutePressed => self.handle_execute_pressed(),
            Message::ProcessNextFile => self.handle_process_next_file(),
            Message::FileFinished(result) => self.handle_file_finished(result),
            Message::BatchFinished => self.handle_batch_finished(),

            // Window
            Message::CloseRequested(id) => {
                self.persist_paths();
                window::close(id)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        pages::main_window::view(self)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, id| match event {
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            Event::Window(window::Event::CloseRequested) => Some(Message::CloseRequested(id)),
            _ => None,
        })
    }

    /// Append a line to the log view and, during a run, to the run log file.
    pub fn append_log(&mut self, message: &str) {
        self.log_text.push_str(message);
        self.log_text.push('\n');
        if let Some(batch) = &mut self.batch {
            if let Some(logger) = &mut batch.logger {
                logger.line(message);
            }
        }
    }

    /// Persist the `[paths]` section (executable path, last dialog dirs).
    pub fn persist_paths(&mut self) {
        self.config.settings_mut().paths.editor_exe = self.exe_path.clone();
        if let Err(e) = self.config.update_section(ConfigSection::Paths) {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }

    /// Accept a numeric field edit, keeping the last valid value on bad input.
    fn set_numeric_field(&mut self, text: String, field: NumericField) {
        let (range, form_value, shown) = match field {
            NumericField::AutoWidth => (
                AUTO_WIDTH_RANGE,
                &mut self.form.auto_width,
                &mut self.auto_width_text,
            ),
            NumericField::SizeValue => (
                SIZE_VALUE_RANGE,
                &mut self.form.size_value,
                &mut self.size_value_text,
            ),
        };

        if text.is_empty() {
            *shown = text;
            return;
        }
        if let Ok(value) = text.parse::<u32>() {
            if (range.0..=range.1).contains(&value) {
                *form_value = value;
                *shown = text;
            }
        }
    }
}

enum NumericField {
    AutoWidth,
    SizeValue,
}
