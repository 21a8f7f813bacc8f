//! Run preconditions and per-file invocation planning.

use std::path::{Path, PathBuf};

use crate::command::{build_arguments, CommandForm, MainCommand};

use super::types::{Invocation, PreconditionError};

/// Check everything that must hold before any process is spawned.
pub fn validate(
    exe_path: &str,
    files: &[PathBuf],
    form: &CommandForm,
) -> Result<(), PreconditionError> {
    if exe_path.is_empty() || !Path::new(exe_path).exists() {
        return Err(PreconditionError::InvalidExecutable);
    }

    if files.is_empty() {
        return Err(PreconditionError::EmptyFileList);
    }

    if form.command == MainCommand::ImportText
        && form.single_import
        && form.single_import_path.is_empty()
    {
        return Err(PreconditionError::MissingSingleImportFile);
    }

    if form.command == MainCommand::ExportText && form.unify && form.unify_path.is_empty() {
        return Err(PreconditionError::MissingUnifyTarget);
    }

    Ok(())
}

/// Plan the invocation for one input file.
///
/// PersonaEditorCMD resolves its input relative to the working directory,
/// so the argv carries the bare filename and the invocation runs in the
/// file's parent. In single-import mode the chosen text file is inserted
/// right after the primary command, before every other token.
pub fn plan_invocation(exe_path: &Path, file: &Path, form: &CommandForm) -> Invocation {
    let workdir = file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut base = build_arguments(form);
    let primary = base.remove(0);

    let mut args = vec![file_name, primary];
    if form.command == MainCommand::ImportText && form.single_import {
        args.push(form.single_import_path.clone());
    }
    args.extend(base);

    Invocation {
        program: exe_path.to_path_buf(),
        args,
        workdir,
        hide_console: true,
    }
}
