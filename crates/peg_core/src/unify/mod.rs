//! Concatenation of exported text files.
//!
//! After an `-exptext` batch, every input file is expected to have grown a
//! `.txt` sibling (the original path with the suffix appended). This
//! module merges those siblings, in batch order, into a single target.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Suffix PersonaEditorCMD appends to the input path for exported text.
pub const EXPORT_SUFFIX: &str = ".txt";

#[derive(Error, Debug)]
pub enum UnifyError {
    #[error("Failed to create '{path}': {source}")]
    CreateTarget {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    ReadSource {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    WriteTarget {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Predicted path of a file's exported text sibling.
pub fn predicted_export_path(file: &Path) -> PathBuf {
    let mut os = file.as_os_str().to_os_string();
    os.push(EXPORT_SUFFIX);
    PathBuf::from(os)
}

/// Merge the exported siblings of `processed` into `target`.
///
/// The target is opened (and truncated) exactly once. Files are visited in
/// input order, regardless of how their batch run went; a missing sibling
/// logs one warning and is skipped. Returns the number of files merged.
/// On an I/O fault the merge stops and whatever was already written stays
/// on disk.
pub fn unify_exports(
    processed: &[PathBuf],
    target: &Path,
    log: &mut dyn FnMut(&str),
) -> Result<usize, UnifyError> {
    let file = File::create(target).map_err(|e| UnifyError::CreateTarget {
        path: target.display().to_string(),
        source: e,
    })?;
    let mut out = BufWriter::new(file);
    let mut found = 0usize;

    for original in processed {
        let exported = predicted_export_path(original);
        let name = exported
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !exported.exists() {
            log(&format!(
                "  AVISO: Arquivo exportado não encontrado: {}",
                name
            ));
            continue;
        }

        found += 1;
        log(&format!("  Adicionando: {}", name));

        let bytes = fs::read(&exported).map_err(|e| UnifyError::ReadSource {
            path: exported.display().to_string(),
            source: e,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        write!(out, "--- START: {} ---\n\n{}\n\n", name, content).map_err(|e| {
            UnifyError::WriteTarget {
                path: target.display().to_string(),
                source: e,
            }
        })?;
    }

    out.flush().map_err(|e| UnifyError::WriteTarget {
        path: target.display().to_string(),
        source: e,
    })?;

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn predicted_path_appends_suffix() {
        assert_eq!(
            predicted_export_path(Path::new("/data/E5.BIN")),
            PathBuf::from("/data/E5.BIN.txt")
        );
    }

    #[test]
    fn merges_existing_siblings_in_order() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("A.BIN");
        let b = dir.path().join("B.BIN");
        let c = dir.path().join("C.BIN");
        fs::write(dir.path().join("A.BIN.txt"), "texto A").unwrap();
        fs::write(dir.path().join("C.BIN.txt"), "texto C").unwrap();

        let target = dir.path().join("unified.txt");
        let mut lines = Vec::new();
        let count = unify_exports(
            &[a, b, c],
            &target,
            &mut |l| lines.push(l.to_string()),
        )
        .unwrap();

        assert_eq!(count, 2);
        let merged = fs::read_to_string(&target).unwrap();
        assert_eq!(
            merged,
            "--- START: A.BIN.txt ---\n\ntexto A\n\n--- START: C.BIN.txt ---\n\ntexto C\n\n"
        );
        let a_pos = merged.find("texto A").unwrap();
        let c_pos = merged.find("texto C").unwrap();
        assert!(a_pos < c_pos);

        let warnings: Vec<&String> = lines.iter().filter(|l| l.contains("AVISO")).collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("B.BIN.txt"));
    }

    #[test]
    fn truncates_previous_target_content() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("A.BIN");
        fs::write(dir.path().join("A.BIN.txt"), "novo").unwrap();

        let target = dir.path().join("unified.txt");
        fs::write(&target, "conteúdo antigo que deve sumir").unwrap();

        unify_exports(&[a], &target, &mut |_| {}).unwrap();
        let merged = fs::read_to_string(&target).unwrap();
        assert!(!merged.contains("antigo"));
        assert!(merged.contains("novo"));
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("missing").join("unified.txt");
        let err = unify_exports(&[], &target, &mut |_| {}).unwrap_err();
        assert!(matches!(err, UnifyError::CreateTarget { .. }));
    }

    #[test]
    fn empty_input_writes_empty_target() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("unified.txt");
        let count = unify_exports(&[], &target, &mut |_| {}).unwrap();
        assert_eq!(count, 0);
        assert_eq!(fs::read_to_string(&target).unwrap(), "");
    }
}
