//! Low-level process wrapper around PersonaEditorCMD.

use std::process::Command;

use super::types::{Invocation, InvokeError, RunOutput};

/// Run one planned invocation to completion, capturing its output.
///
/// Undecodable bytes in either stream are replaced rather than failing the
/// capture. A non-zero exit is not an error at this layer; it is reported
/// through [`RunOutput::exit_code`].
pub fn invoke(invocation: &Invocation) -> Result<RunOutput, InvokeError> {
    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args).current_dir(&invocation.workdir);

    apply_console_visibility(&mut cmd, invocation.hide_console);

    tracing::debug!("Running: {}", invocation.command_line());
    tracing::trace!("argv: {}", invocation.args_json());

    let output = cmd.output().map_err(|e| InvokeError::Spawn {
        program: invocation.program.to_string_lossy().into_owned(),
        source: e,
    })?;

    Ok(RunOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    })
}

/// Keep the child from opening a console window of its own.
///
/// Only Windows distinguishes windowed from windowless children; elsewhere
/// the flag has nothing to apply to.
#[cfg(windows)]
fn apply_console_visibility(cmd: &mut Command, hide_console: bool) {
    use std::os::windows::process::CommandExt;

    const CREATE_NO_WINDOW: u32 = 0x0800_0000;

    if hide_console {
        cmd.creation_flags(CREATE_NO_WINDOW);
    }
}

#[cfg(not(windows))]
fn apply_console_visibility(_cmd: &mut Command, _hide_console: bool) {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn invocation(program: &str, args: &[&str], workdir: &str) -> Invocation {
        Invocation {
            program: PathBuf::from(program),
            args: args.iter().map(|s| s.to_string()).collect(),
            workdir: PathBuf::from(workdir),
            hide_console: true,
        }
    }

    #[test]
    fn nonexistent_program_is_a_spawn_error() {
        let inv = invocation("/nonexistent/PersonaEditorCMD.exe", &[], "/tmp");
        let err = invoke(&inv).unwrap_err();
        assert!(matches!(err, InvokeError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_and_zero_exit() {
        let inv = invocation("sh", &["-c", "printf hello"], "/tmp");
        let out = invoke(&inv).unwrap();
        assert_eq!(out.exit_code, 0);
        assert!(out.success());
        assert_eq!(out.stdout, "hello");
    }

    #[cfg(unix)]
    #[test]
    fn captures_stderr_and_nonzero_exit() {
        let inv = invocation("sh", &["-c", "echo oops >&2; exit 3"], "/tmp");
        let out = invoke(&inv).unwrap();
        assert_eq!(out.exit_code, 3);
        assert!(!out.success());
        assert_eq!(out.stderr.trim(), "oops");
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_the_given_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let inv = invocation("sh", &["-c", "pwd"], dir.path().to_str().unwrap());
        let out = invoke(&inv).unwrap();
        let reported = PathBuf::from(out.stdout.trim());
        assert_eq!(
            reported.canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }
}
