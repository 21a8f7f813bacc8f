//! Font settings handlers.

use std::path::{Path, PathBuf};

use peg_core::fontcfg::{self, FontConfig, FontConfigError};

use crate::app::App;
use crate::theme::StatusTone;

impl App {
    /// Reload the font catalog and the current XML selections.
    ///
    /// Called at startup and whenever the executable path changes. Leaves
    /// the editor disabled with a specific diagnostic on any failure.
    pub fn reload_fonts(&mut self) {
        self.font_names.clear();
        self.old_font = None;
        self.new_font = None;
        self.fonts_enabled = false;

        let Some(exe_dir) = self.exe_dir() else {
            self.set_font_status("Caminho do executável inválido.", StatusTone::Red);
            return;
        };

        match fontcfg::list_font_maps(&exe_dir) {
            Ok(names) => self.font_names = names,
            Err(e @ FontConfigError::NoFontMaps) => {
                self.set_font_status(&e.to_string(), StatusTone::Orange);
                return;
            }
            Err(e) => {
                self.set_font_status(&format!("ERRO: {}", e), StatusTone::Red);
                return;
            }
        }

        match fontcfg::load(&exe_dir) {
            Ok(config) => {
                self.old_font = Some(config.old_font);
                self.new_font = Some(config.new_font);
                self.fonts_enabled = true;
                self.set_font_status(
                    "Configurações do XML carregadas com sucesso.",
                    StatusTone::Green,
                );
            }
            Err(e) => {
                self.set_font_status(&format!("ERRO: {}", e), StatusTone::Red);
            }
        }
    }

    /// Write the current selections back into PersonaEditor.xml.
    pub fn save_fonts(&mut self) {
        let Some(exe_dir) = self.exe_dir() else {
            self.set_font_status("Caminho do executável inválido.", StatusTone::Red);
            return;
        };

        let config = FontConfig {
            old_font: self.old_font.clone().unwrap_or_default(),
            new_font: self.new_font.clone().unwrap_or_default(),
        };

        match fontcfg::save(&exe_dir, &config) {
            Ok(()) => {
                self.set_font_status("Alterações salvas com sucesso no XML!", StatusTone::Blue);
            }
            Err(FontConfigError::ConfigMissing) => {
                self.set_font_status(
                    "ERRO: Não é possível salvar, PersonaEditor.xml não encontrado.",
                    StatusTone::Red,
                );
            }
            Err(FontConfigError::TagsMissing) => {
                self.set_font_status(
                    "ERRO: Tags não encontradas no XML para salvar.",
                    StatusTone::Red,
                );
            }
            Err(e) => {
                self.set_font_status(&format!("ERRO ao salvar o XML: {}", e), StatusTone::Red);
            }
        }
    }

    /// Directory holding the executable, when the path points inside one.
    fn exe_dir(&self) -> Option<PathBuf> {
        let exe_path = self.exe_path.trim();
        if exe_path.is_empty() {
            return None;
        }
        Path::new(exe_path)
            .parent()
            .filter(|dir| dir.is_dir())
            .map(Path::to_path_buf)
    }

    fn set_font_status(&mut self, text: &str, tone: StatusTone) {
        self.font_status = text.to_string();
        self.font_tone = tone;
    }
}
