//! Reading and rewriting the `OldFont`/`NewFont` tags.
//!
//! The save path splices the new values into the original document text
//! using the parsed nodes' byte ranges, so everything outside the two
//! elements survives byte-for-byte, then rewrites the file atomically.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use super::{FontConfigError, FontConfigResult, CONFIG_FILE};

/// XML declaration written when the document does not carry one.
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// The two font selections stored in `PersonaEditor.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    pub old_font: String,
    pub new_font: String,
}

/// Read the current font pair from the config next to the executable.
pub fn load(exe_dir: &Path) -> FontConfigResult<FontConfig> {
    let xml_path = exe_dir.join(CONFIG_FILE);
    if !xml_path.is_file() {
        return Err(FontConfigError::ConfigMissing);
    }

    let content = fs::read_to_string(&xml_path)?;
    let doc = roxmltree::Document::parse(&content)
        .map_err(|e| FontConfigError::Malformed(e.to_string()))?;
    let root = doc.root_element();

    let old_font = font_tag(&root, "OldFont").ok_or(FontConfigError::TagsMissing)?;
    let new_font = font_tag(&root, "NewFont").ok_or(FontConfigError::TagsMissing)?;

    Ok(FontConfig {
        old_font: old_font.text().unwrap_or_default().to_string(),
        new_font: new_font.text().unwrap_or_default().to_string(),
    })
}

/// Write the font pair back into the config next to the executable.
///
/// Both tags must already exist; the file is left untouched on any error.
pub fn save(exe_dir: &Path, config: &FontConfig) -> FontConfigResult<()> {
    let xml_path = exe_dir.join(CONFIG_FILE);
    if !xml_path.is_file() {
        return Err(FontConfigError::ConfigMissing);
    }

    let content = fs::read_to_string(&xml_path)?;
    let mut edits = {
        let doc = roxmltree::Document::parse(&content)
            .map_err(|e| FontConfigError::Malformed(e.to_string()))?;
        let root = doc.root_element();

        let old_node = font_tag(&root, "OldFont").ok_or(FontConfigError::TagsMissing)?;
        let new_node = font_tag(&root, "NewFont").ok_or(FontConfigError::TagsMissing)?;

        [
            (old_node.range(), replacement("OldFont", &config.old_font)),
            (new_node.range(), replacement("NewFont", &config.new_font)),
        ]
    };
    // Splice back-to-front so earlier ranges stay valid.
    edits.sort_by(|a, b| b.0.start.cmp(&a.0.start));

    let mut updated = content;
    for (range, text) in edits {
        updated.replace_range(range, &text);
    }

    if !updated.trim_start().starts_with("<?xml") {
        updated.insert_str(0, XML_DECLARATION);
    }

    atomic_write(&xml_path, &updated)?;
    Ok(())
}

fn font_tag<'a, 'input>(
    root: &roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    root.children()
        .find(|n| n.is_element() && n.has_tag_name(name))
}

fn replacement(tag: &str, value: &str) -> String {
    format!("<{tag}>{}</{tag}>", escape_text(value))
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn atomic_write(path: &Path, content: &str) -> std::io::Result<()> {
    let temp_path = path.with_extension("xml.tmp");
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&temp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(dir: &Path, body: &str) {
        fs::write(dir.join(CONFIG_FILE), body).unwrap();
    }

    #[test]
    fn load_reads_both_tags() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<Settings><OldFont>P4_FONT0</OldFont><NewFont>custom</NewFont></Settings>",
        );

        let cfg = load(dir.path()).unwrap();
        assert_eq!(cfg.old_font, "P4_FONT0");
        assert_eq!(cfg.new_font, "custom");
    }

    #[test]
    fn load_missing_file_is_distinct_error() {
        let dir = tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, FontConfigError::ConfigMissing));
    }

    #[test]
    fn load_malformed_is_distinct_error() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), "<Settings><OldFont>oops");
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, FontConfigError::Malformed(_)));
    }

    #[test]
    fn load_missing_tag_is_distinct_error() {
        let dir = tempdir().unwrap();
        write_config(dir.path(), "<Settings><OldFont>a</OldFont></Settings>");
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, FontConfigError::TagsMissing));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            "<Settings><OldFont>x</OldFont><NewFont>y</NewFont></Settings>",
        );

        save(
            dir.path(),
            &FontConfig {
                old_font: "A".to_string(),
                new_font: "B".to_string(),
            },
        )
        .unwrap();

        let cfg = load(dir.path()).unwrap();
        assert_eq!(cfg.old_font, "A");
        assert_eq!(cfg.new_font, "B");
    }

    #[test]
    fn save_preserves_unrelated_content_and_declaration() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<Settings>\n  <Scale>2</Scale>\n  <OldFont>x</OldFont>\n  <NewFont>y</NewFont>\n</Settings>",
        );

        save(
            dir.path(),
            &FontConfig {
                old_font: "A".to_string(),
                new_font: "B".to_string(),
            },
        )
        .unwrap();

        let written = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(written.contains("<Scale>2</Scale>"));
        assert!(written.contains("<OldFont>A</OldFont>"));
        assert!(written.contains("<NewFont>B</NewFont>"));
    }

    #[test]
    fn save_adds_declaration_when_absent() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            "<Settings><OldFont>x</OldFont><NewFont>y</NewFont></Settings>",
        );

        save(
            dir.path(),
            &FontConfig {
                old_font: "A".to_string(),
                new_font: "B".to_string(),
            },
        )
        .unwrap();

        let written = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert!(written.starts_with("<?xml"));
    }

    #[test]
    fn save_with_missing_tag_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let body = "<Settings><OldFont>x</OldFont></Settings>";
        write_config(dir.path(), body);

        let err = save(
            dir.path(),
            &FontConfig {
                old_font: "A".to_string(),
                new_font: "B".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, FontConfigError::TagsMissing));

        let written = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(written, body);
    }

    #[test]
    fn save_escapes_markup_in_values() {
        let dir = tempdir().unwrap();
        write_config(
            dir.path(),
            "<Settings><OldFont>x</OldFont><NewFont>y</NewFont></Settings>",
        );

        save(
            dir.path(),
            &FontConfig {
                old_font: "a&b".to_string(),
                new_font: "c<d".to_string(),
            },
        )
        .unwrap();

        let written = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert!(written.contains("<OldFont>a&amp;b</OldFont>"));
        assert!(written.contains("<NewFont>c&lt;d</NewFont>"));

        let cfg = load(dir.path()).unwrap();
        assert_eq!(cfg.old_font, "a&b");
        assert_eq!(cfg.new_font, "c<d");
    }
}
