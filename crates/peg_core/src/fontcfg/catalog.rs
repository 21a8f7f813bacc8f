//! Font map catalog enumeration.

use std::fs;
use std::path::Path;

use super::{FontConfigError, FontConfigResult, FONT_DIR, FONT_MAP_EXT};

/// List the font names available next to the executable.
///
/// A font name is a `font/*.FNTMAP` filename (case-insensitive extension)
/// with the extension stripped. Sorted so the pick lists are stable.
pub fn list_font_maps(exe_dir: &Path) -> FontConfigResult<Vec<String>> {
    let font_dir = exe_dir.join(FONT_DIR);
    if !font_dir.is_dir() {
        return Err(FontConfigError::FontDirMissing);
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(&font_dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let stem_len = file_name.len().saturating_sub(FONT_MAP_EXT.len());
        if file_name.len() > FONT_MAP_EXT.len()
            && file_name.is_char_boundary(stem_len)
            && file_name[stem_len..].eq_ignore_ascii_case(FONT_MAP_EXT)
        {
            names.push(file_name[..stem_len].to_string());
        }
    }

    if names.is_empty() {
        return Err(FontConfigError::NoFontMaps);
    }

    names.sort();
    Ok(names)
}
