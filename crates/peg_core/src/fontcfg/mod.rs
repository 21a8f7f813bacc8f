//! Font configuration for PersonaEditorCMD.
//!
//! The external tool keeps a `font/` directory of `.FNTMAP` files next to
//! its executable and reads the active pair from `PersonaEditor.xml` in
//! the same directory. This module enumerates the catalog and edits the
//! two tags; it never creates the document or the tags.

mod catalog;
mod editor;

use std::io;

use thiserror::Error;

pub use catalog::list_font_maps;
pub use editor::{load, save, FontConfig};

/// Configuration file name, next to the executable.
pub const CONFIG_FILE: &str = "PersonaEditor.xml";

/// Catalog directory name, next to the executable.
pub const FONT_DIR: &str = "font";

/// Font map extension, matched case-insensitively.
pub const FONT_MAP_EXT: &str = ".FNTMAP";

/// Font configuration faults.
///
/// Each variant is a distinct user-visible diagnostic; the display strings
/// are shown (with an `ERRO:` prefix where the original adds one) in the
/// editor's status label.
#[derive(Error, Debug)]
pub enum FontConfigError {
    #[error("Pasta 'font' não encontrada no diretório do executável.")]
    FontDirMissing,

    #[error("Pasta 'font' encontrada, mas sem arquivos .FNTMAP.")]
    NoFontMaps,

    #[error("Arquivo PersonaEditor.xml não encontrado.")]
    ConfigMissing,

    #[error("Falha ao ler o arquivo PersonaEditor.xml (malformado).")]
    Malformed(String),

    #[error("Tags <OldFont>/<NewFont> não encontradas no XML.")]
    TagsMissing,

    #[error("Falha de E/S: {0}")]
    Io(#[from] io::Error),
}

/// Result type for font configuration operations.
pub type FontConfigResult<T> = Result<T, FontConfigError>;
