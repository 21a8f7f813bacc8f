//! Closed enums for the PersonaEditorCMD operations and their options,
//! plus the flat form-state record the argument builder consumes.

use std::fmt;

/// The main operation passed to PersonaEditorCMD.
///
/// One of a fixed set of eleven flags; `ExportByType` additionally carries
/// an [`ExportType`] that is concatenated onto its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    ExportImage,
    ImportImage,
    ExportTable,
    ImportTable,
    ExportPtp,
    ImportPtp,
    ExportText,
    ImportText,
    ExportAll,
    ImportAll,
    ExportByType,
}

impl MainCommand {
    /// All commands, in the order the combo box lists them.
    pub const ALL: [MainCommand; 11] = [
        MainCommand::ExportImage,
        MainCommand::ImportImage,
        MainCommand::ExportTable,
        MainCommand::ImportTable,
        MainCommand::ExportPtp,
        MainCommand::ImportPtp,
        MainCommand::ExportText,
        MainCommand::ImportText,
        MainCommand::ExportAll,
        MainCommand::ImportAll,
        MainCommand::ExportByType,
    ];

    /// The literal command-line flag.
    ///
    /// For `ExportByType` this is the bare `-exp` prefix; the type code is
    /// appended by the argument builder.
    pub fn token(&self) -> &'static str {
        match self {
            MainCommand::ExportImage => "-expimage",
            MainCommand::ImportImage => "-impimage",
            MainCommand::ExportTable => "-exptable",
            MainCommand::ImportTable => "-imptable",
            MainCommand::ExportPtp => "-expptp",
            MainCommand::ImportPtp => "-impptp",
            MainCommand::ExportText => "-exptext",
            MainCommand::ImportText => "-imptext",
            MainCommand::ExportAll => "-expall",
            MainCommand::ImportAll => "-impall",
            MainCommand::ExportByType => "-exp",
        }
    }

    /// Whether this is one of the five import commands.
    ///
    /// `-save` is only meaningful (and only emitted) for these.
    pub fn is_import(&self) -> bool {
        matches!(
            self,
            MainCommand::ImportImage
                | MainCommand::ImportTable
                | MainCommand::ImportPtp
                | MainCommand::ImportText
                | MainCommand::ImportAll
        )
    }

    /// Combo box caption.
    pub fn label(&self) -> &'static str {
        match self {
            MainCommand::ExportImage => "Exportar Imagem (-expimage)",
            MainCommand::ImportImage => "Importar Imagem (-impimage)",
            MainCommand::ExportTable => "Exportar Tabela de Largura (-exptable)",
            MainCommand::ImportTable => "Importar Tabela de Largura (-imptable)",
            MainCommand::ExportPtp => "Exportar PTP (-expptp)",
            MainCommand::ImportPtp => "Importar PTP (-impptp)",
            MainCommand::ExportText => "Exportar Texto (-exptext)",
            MainCommand::ImportText => "Importar Texto (-imptext)",
            MainCommand::ExportAll => "Exportar Todos os Sub-arquivos (-expall)",
            MainCommand::ImportAll => "Importar Todos os Sub-arquivos (-impall)",
            MainCommand::ExportByType => "Exportar por Tipo (-exp[Tipo])",
        }
    }
}

impl fmt::Display for MainCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sub-file type code for the `-exp[Type]` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportType {
    Bin,
    Spr,
    Tmx,
    Bf,
    Pm1,
    Bmd,
    Fnt,
    Bvp,
    Hex,
}

impl ExportType {
    pub const ALL: [ExportType; 9] = [
        ExportType::Bin,
        ExportType::Spr,
        ExportType::Tmx,
        ExportType::Bf,
        ExportType::Pm1,
        ExportType::Bmd,
        ExportType::Fnt,
        ExportType::Bvp,
        ExportType::Hex,
    ];

    /// The literal code appended onto `-exp`.
    pub fn code(&self) -> &'static str {
        match self {
            ExportType::Bin => "BIN",
            ExportType::Spr => "SPR",
            ExportType::Tmx => "TMX",
            ExportType::Bf => "BF",
            ExportType::Pm1 => "PM1",
            ExportType::Bmd => "BMD",
            ExportType::Fnt => "FNT",
            ExportType::Bvp => "BVP",
            ExportType::Hex => "HEX",
        }
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Text encoding passed to `/enc` on text import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf7,
    Utf16,
    Utf32,
}

impl TextEncoding {
    pub const ALL: [TextEncoding; 4] = [
        TextEncoding::Utf8,
        TextEncoding::Utf7,
        TextEncoding::Utf16,
        TextEncoding::Utf32,
    ];

    /// The literal encoding name PersonaEditorCMD understands.
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf7 => "UTF-7",
            TextEncoding::Utf16 => "UTF-16",
            TextEncoding::Utf32 => "UTF-32",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flat snapshot of the command form.
///
/// Field values are kept even when their owning command is not selected;
/// the builder only serializes the ones that apply.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandForm {
    pub command: MainCommand,
    pub export_type: ExportType,

    /// `/sub` - process recursively.
    pub recursive: bool,
    /// `/ovrw` - overwrite the original file.
    pub overwrite: bool,
    /// `-save` - persist changes on import.
    pub save_on_import: bool,

    // -imptext
    pub map_pattern: String,
    /// `/lbl` - import line by line.
    pub line_by_line: bool,
    /// `/auto <width>` - automatic hyphenation.
    pub auto_hyphen: bool,
    pub auto_width: u32,
    /// `/skipempty` - skip empty texts.
    pub skip_empty: bool,
    /// `/enc <name>` - always emitted for text import.
    pub encoding: TextEncoding,
    /// Import every file's text from one chosen file instead of siblings.
    pub single_import: bool,
    pub single_import_path: String,

    // -exptext
    /// `/rmvspl` - replace "\n" with a space.
    pub remove_split: bool,
    /// Concatenate the exported `.txt` files into one target.
    pub unify: bool,
    pub unify_path: String,

    // -expptp
    /// `/co2n` - copy the original text into the new one.
    pub copy_old_to_new: bool,

    // -impimage
    /// `/size <value>` - new font pixel size.
    pub set_size: bool,
    pub size_value: u32,
}

impl Default for CommandForm {
    fn default() -> Self {
        Self {
            command: MainCommand::ExportImage,
            export_type: ExportType::Bin,
            recursive: false,
            overwrite: false,
            save_on_import: false,
            map_pattern: String::new(),
            line_by_line: false,
            auto_hyphen: false,
            auto_width: 1,
            skip_empty: false,
            encoding: TextEncoding::Utf8,
            single_import: false,
            single_import_path: String::new(),
            remove_split: false,
            unify: false,
            unify_path: String::new(),
            copy_old_to_new: false,
            set_size: false,
            size_value: 13842,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_commands_are_exactly_the_five_imp_flags() {
        let imports: Vec<&str> = MainCommand::ALL
            .iter()
            .filter(|c| c.is_import())
            .map(|c| c.token())
            .collect();
        assert_eq!(
            imports,
            ["-impimage", "-imptable", "-impptp", "-imptext", "-impall"]
        );
    }

    #[test]
    fn labels_carry_the_flag_token() {
        for command in MainCommand::ALL {
            assert!(command.label().contains(command.token()));
        }
    }

    #[test]
    fn export_type_codes() {
        assert_eq!(ExportType::Tmx.code(), "TMX");
        assert_eq!(ExportType::ALL.len(), 9);
    }

    #[test]
    fn encoding_names() {
        assert_eq!(TextEncoding::Utf8.name(), "UTF-8");
        assert_eq!(TextEncoding::Utf32.name(), "UTF-32");
    }
}
