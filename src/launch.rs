//! Command assembly and spawn-and-wait with exit-status propagation.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::interpreter::{self, ResolveError};

/// The application entry point, expected next to the launcher binary.
pub const TARGET_SCRIPT: &str = "qgraphic.py";

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("cannot determine launcher directory: {0}")]
    LauncherDir(#[source] io::Error),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("failed to start {interpreter}: {source}")]
    Spawn {
        interpreter: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Shell conventions: 126 found-but-not-startable, 127 not found.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::LauncherDir(_) => 1,
            LaunchError::Resolve(_) => 127,
            LaunchError::Spawn { .. } => 126,
        }
    }
}

/// Resolve the interpreter, run the target script with `args` appended
/// verbatim, and return the child's exit code.
pub fn run(args: &[OsString]) -> Result<i32, LaunchError> {
    let dir = script_dir()?;
    let interpreter = interpreter::resolve(&dir)?;
    let status = run_command(&mut build_command(&interpreter, &dir, args), &interpreter)?;
    Ok(exit_code(status))
}

/// Directory containing the launcher executable itself.
fn script_dir() -> Result<PathBuf, LaunchError> {
    let exe = std::env::current_exe().map_err(LaunchError::LauncherDir)?;
    dir_of(&exe)
}

fn dir_of(exe: &Path) -> Result<PathBuf, LaunchError> {
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        LaunchError::LauncherDir(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })
}

/// `<interpreter> <script_dir>/qgraphic.py <args...>`, stdio inherited.
fn build_command(interpreter: &Path, script_dir: &Path, args: &[OsString]) -> Command {
    let mut cmd = Command::new(interpreter);
    cmd.arg(script_dir.join(TARGET_SCRIPT));
    cmd.args(args);
    cmd
}

fn run_command(cmd: &mut Command, interpreter: &Path) -> Result<ExitStatus, LaunchError> {
    tracing::debug!(cmd = ?cmd, "launching");
    cmd.status().map_err(|source| LaunchError::Spawn {
        interpreter: interpreter.to_path_buf(),
        source,
    })
}

fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn argv(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn parentless_launcher_path_is_an_error() {
        let err = dir_of(Path::new("/")).unwrap_err();
        assert!(matches!(err, LaunchError::LauncherDir(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn launcher_dir_is_the_parent() {
        assert_eq!(
            dir_of(Path::new("/opt/qgraphic/qgraphic")).unwrap(),
            Path::new("/opt/qgraphic")
        );
    }

    #[test]
    fn command_prepends_target_script() {
        let interpreter = Path::new("/opt/py/bin/python");
        let dir = Path::new("/opt/qgraphic");
        let args = [OsString::from("--help")];

        let cmd = build_command(interpreter, dir, &args);
        assert_eq!(cmd.get_program(), OsStr::new("/opt/py/bin/python"));
        assert_eq!(argv(&cmd), ["/opt/qgraphic/qgraphic.py", "--help"]);
    }

    #[test]
    fn empty_args_yield_script_only() {
        let cmd = build_command(Path::new("python3"), Path::new("/app"), &[]);
        assert_eq!(argv(&cmd), ["/app/qgraphic.py"]);
    }

    #[test]
    fn argument_order_is_preserved() {
        let args: Vec<OsString> = ["exec", "demo.qgk", "--verbose", "-n", "3"]
            .iter()
            .map(OsString::from)
            .collect();
        let cmd = build_command(Path::new("python3"), Path::new("/app"), &args);
        assert_eq!(
            argv(&cmd),
            ["/app/qgraphic.py", "exec", "demo.qgk", "--verbose", "-n", "3"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn exit_code_propagates_from_child() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "exit 7"]);
        let status = run_command(&mut cmd, Path::new("sh")).unwrap();
        assert_eq!(exit_code(status), 7);
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_interpreter_is_a_spawn_error() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("python");
        fs::write(&fake, b"").unwrap();
        fs::set_permissions(&fake, fs::Permissions::from_mode(0o644)).unwrap();

        let err = run_command(&mut Command::new(&fake), &fake).unwrap_err();
        assert_eq!(err.exit_code(), 126);
        assert!(matches!(err, LaunchError::Spawn { .. }));
    }
}
