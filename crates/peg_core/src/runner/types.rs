//! Runner types and errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A run was requested with the form in a state that cannot be executed.
///
/// The display strings are the user-visible diagnostics; the UI prefixes
/// them with `ERRO:` the way the original tool does.
#[derive(Error, Debug)]
pub enum PreconditionError {
    #[error("O caminho para o PersonaEditorCMD.exe não é válido ou não foi definido.")]
    InvalidExecutable,

    #[error("Nenhum arquivo de entrada selecionado.")]
    EmptyFileList,

    #[error("A opção de importar de arquivo único está habilitada, mas nenhum arquivo foi selecionado.")]
    MissingSingleImportFile,

    #[error("A opção de unificar arquivos está habilitada, mas nenhum arquivo de saída foi definido.")]
    MissingUnifyTarget,
}

/// The external process could not be run at all.
///
/// Distinct from a non-zero exit: this aborts the whole batch.
#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("{program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// One planned invocation of PersonaEditorCMD.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Path to PersonaEditorCMD.exe.
    pub program: PathBuf,
    /// Arguments, starting with the bare input filename.
    pub args: Vec<String>,
    /// The input file's parent directory.
    pub workdir: PathBuf,
    /// Suppress the child's console window where the platform has one.
    pub hide_console: bool,
}

impl Invocation {
    /// Render the full command for the log, quoting tokens with spaces.
    pub fn command_line(&self) -> String {
        let mut parts = vec![quote(&self.program.to_string_lossy())];
        parts.extend(self.args.iter().map(|a| quote(a)));
        parts.join(" ")
    }

    /// The argv as a JSON array, for unambiguous logging.
    pub fn args_json(&self) -> String {
        serde_json::to_string(&self.args).unwrap_or_default()
    }
}

fn quote(token: &str) -> String {
    if token.contains(' ') {
        format!("\"{}\"", token)
    } else {
        token.to_string()
    }
}

/// Captured result of one invocation.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// The per-file status log line.
    pub fn status_line(&self) -> String {
        if self.success() {
            "  Status: Sucesso!".to_string()
        } else {
            format!("  Status: Falha com código de saída {}", self.exit_code)
        }
    }
}

/// Terminal state of a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every file exited 0.
    Success,
    /// At least one file exited non-zero; the batch still ran to the end.
    PartialFailure,
    /// An invocation-level fault stopped the batch early.
    Aborted,
}

impl BatchOutcome {
    pub fn classify(failures: usize, aborted: bool) -> Self {
        if aborted {
            BatchOutcome::Aborted
        } else if failures > 0 {
            BatchOutcome::PartialFailure
        } else {
            BatchOutcome::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_quotes_spaced_tokens() {
        let inv = Invocation {
            program: PathBuf::from("/opt/persona editor/PersonaEditorCMD.exe"),
            args: vec!["E5.BIN".to_string(), "-exptext".to_string()],
            workdir: PathBuf::from("/tmp"),
            hide_console: true,
        };
        assert_eq!(
            inv.command_line(),
            "\"/opt/persona editor/PersonaEditorCMD.exe\" E5.BIN -exptext"
        );
    }

    #[test]
    fn status_lines() {
        let ok = RunOutput {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: 0,
        };
        assert_eq!(ok.status_line(), "  Status: Sucesso!");

        let bad = RunOutput {
            exit_code: 3,
            ..ok.clone()
        };
        assert_eq!(bad.status_line(), "  Status: Falha com código de saída 3");
    }

    #[test]
    fn outcome_classification() {
        assert_eq!(BatchOutcome::classify(0, false), BatchOutcome::Success);
        assert_eq!(
            BatchOutcome::classify(2, false),
            BatchOutcome::PartialFailure
        );
        assert_eq!(BatchOutcome::classify(0, true), BatchOutcome::Aborted);
    }
}
