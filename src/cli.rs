use std::env;
use std::ffi::OsString;

use clap::Parser;

/// QGraphic launcher - resolves a Python interpreter and runs qgraphic.py
///
/// Everything on the command line belongs to qgraphic.py, so help and
/// version handling are disabled: `qgraphic --help` is the application's
/// help, not the launcher's.
#[derive(Parser, Debug)]
#[command(name = "qgraphic")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Arguments forwarded verbatim to qgraphic.py
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "ARGS"
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse the process's arguments for forwarding.
    ///
    /// A `--` escape is inserted ahead of the caller's tokens so clap
    /// consumes that marker instead of a caller-supplied literal `--`;
    /// every token after it, hyphens and all, lands in `args` untouched.
    pub fn parse_forwarded() -> Self {
        Self::parse_with(env::args_os().skip(1))
    }

    fn parse_with<I>(forwarded: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let argv = [OsString::from("qgraphic"), OsString::from("--")]
            .into_iter()
            .chain(forwarded);
        Self::parse_from(argv)
    }
}
