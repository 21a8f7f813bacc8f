//! File dialog handlers.

use std::fs;
use std::path::PathBuf;

use iced::Task;

use peg_core::config::ConfigSection;

use crate::app::{App, Message};

impl App {
    /// Browse for the PersonaEditorCMD executable.
    pub fn browse_exe(&self) -> Task<Message> {
        Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .set_title("Selecione o PersonaEditorCMD.exe")
                    .add_filter("Executáveis", &["exe"])
                    .add_filter("Todos os Arquivos", &["*"])
                    .pick_file()
                    .await
                    .map(|f| f.path().to_path_buf())
            },
            Message::ExeSelected,
        )
    }

    /// Handle executable picked from the dialog.
    pub fn handle_exe_selected(&mut self, path: Option<PathBuf>) {
        if let Some(p) = path {
            self.exe_path = p.to_string_lossy().to_string();
            self.persist_paths();
            self.reload_fonts();
        }
    }

    /// Browse for input files to add to the batch list.
    pub fn browse_files(&self) -> Task<Message> {
        let start_dir = self.config.settings().paths.last_input_dir.clone();
        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new()
                    .set_title("Selecione os Arquivos")
                    .add_filter("Todos os Arquivos", &["*"]);
                if !start_dir.is_empty() {
                    dialog = dialog.set_directory(&start_dir);
                }
                dialog
                    .pick_files()
                    .await
                    .map(|files| {
                        files
                            .into_iter()
                            .map(|f| f.path().to_path_buf())
                            .collect::<Vec<_>>()
                    })
                    .unwrap_or_default()
            },
            Message::FilesSelected,
        )
    }

    /// Append picked files, remembering their directory for next time.
    pub fn handle_files_selected(&mut self, files: Vec<PathBuf>) {
        if files.is_empty() {
            return;
        }
        if let Some(parent) = files[0].parent() {
            self.config.settings_mut().paths.last_input_dir =
                parent.to_string_lossy().to_string();
            if let Err(e) = self.config.update_section(ConfigSection::Paths) {
                tracing::warn!("Failed to save settings: {}", e);
            }
        }
        self.files.extend(files);
    }

    /// Browse for a folder whose files are all added to the batch list.
    pub fn browse_folder(&self) -> Task<Message> {
        let start_dir = self.config.settings().paths.last_input_dir.clone();
        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new().set_title("Selecione a Pasta");
                if !start_dir.is_empty() {
                    dialog = dialog.set_directory(&start_dir);
                }
                dialog.pick_folder().await.map(|f| f.path().to_path_buf())
            },
            Message::FolderSelected,
        )
    }

    /// Add every plain file of the chosen folder, non-recursively.
    pub fn handle_folder_selected(&mut self, folder: Option<PathBuf>) {
        let Some(folder) = folder else {
            return;
        };

        self.append_log(&format!(
            "Adicionando todos os arquivos da pasta: {}",
            folder.display()
        ));

        match fs::read_dir(&folder) {
            Ok(entries) => {
                let mut found: Vec<PathBuf> = entries
                    .filter_map(|entry| entry.ok().map(|e| e.path()))
                    .filter(|path| path.is_file())
                    .collect();
                found.sort();
                self.files.extend(found);
            }
            Err(e) => {
                self.append_log(&format!("ERRO ao ler a pasta: {}", e));
            }
        }
    }

    /// A file was dropped onto the window; append it to the batch list.
    pub fn handle_file_dropped(&mut self, path: PathBuf) {
        if path.is_file() {
            self.append_log(&format!("Arquivo adicionado: {}", path.display()));
            self.files.push(path);
        }
    }

    /// Browse for the single text file used by `-imptext` single mode.
    pub fn browse_single_import(&self) -> Task<Message> {
        let start_dir = self.config.settings().paths.last_import_dir.clone();
        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new()
                    .set_title("Selecione o arquivo de texto para importação")
                    .add_filter("Arquivos de Texto", &["txt", "tsv"])
                    .add_filter("Todos os Arquivos", &["*"]);
                if !start_dir.is_empty() {
                    dialog = dialog.set_directory(&start_dir);
                }
                dialog.pick_file().await.map(|f| f.path().to_path_buf())
            },
            Message::SingleImportSelected,
        )
    }

    pub fn handle_single_import_selected(&mut self, path: Option<PathBuf>) {
        if let Some(p) = path {
            if let Some(parent) = p.parent() {
                self.config.settings_mut().paths.last_import_dir =
                    parent.to_string_lossy().to_string();
                if let Err(e) = self.config.update_section(ConfigSection::Paths) {
                    tracing::warn!("Failed to save settings: {}", e);
                }
            }
            self.form.single_import_path = p.to_string_lossy().to_string();
        }
    }

    /// Browse for the unified output target (save dialog).
    pub fn browse_unify_target(&self) -> Task<Message> {
        Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .set_title("Salvar arquivo unificado como...")
                    .add_filter("Arquivos de Texto", &["txt"])
                    .add_filter("Valores Separados por Tabulação", &["tsv"])
                    .add_filter("Todos os Arquivos", &["*"])
                    .save_file()
                    .await
                    .map(|f| f.path().to_path_buf())
            },
            Message::UnifyTargetSelected,
        )
    }

    pub fn handle_unify_target_selected(&mut self, path: Option<PathBuf>) {
        if let Some(p) = path {
            self.form.unify_path = p.to_string_lossy().to_string();
        }
    }
}
