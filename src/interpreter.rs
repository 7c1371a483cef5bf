//! Interpreter resolution: project-local `.venv` first, system PATH second.
//!
//! Resolution never spawns a probe process, so a total failure leaves zero
//! children behind. Existence of the venv candidate as a regular file is the
//! only selection criterion: a present-but-broken candidate is still chosen
//! and the spawn error surfaces downstream instead of silently falling back.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Relative path of the venv interpreter below the launcher's directory.
#[cfg(windows)]
const VENV_PYTHON: &[&str] = &[".venv", "Scripts", "python.exe"];
#[cfg(not(windows))]
const VENV_PYTHON: &[&str] = &[".venv", "bin", "python"];

/// Interpreter names tried on PATH, in order.
#[cfg(windows)]
const SYSTEM_PYTHON: &[&str] = &["python", "python3"];
#[cfg(not(windows))]
const SYSTEM_PYTHON: &[&str] = &["python3", "python"];

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(
        "no Python interpreter found: {venv} does not exist and none of {searched:?} is on PATH"
    )]
    InterpreterNotFound {
        venv: PathBuf,
        searched: &'static [&'static str],
    },
}

/// Venv interpreter candidate for a given launcher directory.
pub fn venv_python(script_dir: &Path) -> PathBuf {
    VENV_PYTHON.iter().fold(script_dir.to_path_buf(), |p, c| p.join(c))
}

/// Resolve the interpreter using the process's PATH.
pub fn resolve(script_dir: &Path) -> Result<PathBuf, ResolveError> {
    resolve_in(script_dir, std::env::var_os("PATH"))
}

/// Resolve against an explicit PATH value. Tests use this to avoid mutating
/// process environment.
pub fn resolve_in(script_dir: &Path, path: Option<OsString>) -> Result<PathBuf, ResolveError> {
    let candidate = venv_python(script_dir);
    if candidate.is_file() {
        tracing::debug!(interpreter = %candidate.display(), "using venv interpreter");
        return Ok(candidate);
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    for name in SYSTEM_PYTHON {
        if let Ok(found) = which::which_in(name, path.as_ref(), &cwd) {
            tracing::debug!(
                interpreter = %found.display(),
                "venv interpreter absent, using system interpreter"
            );
            return Ok(found);
        }
    }

    Err(ResolveError::InterpreterNotFound {
        venv: candidate,
        searched: SYSTEM_PYTHON,
    })
}
