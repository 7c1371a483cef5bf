mod cli;
mod config;
mod interpreter;
mod launch;
mod observability;

use cli::Cli;

fn main() {
    observability::init_tracing();
    let cli = Cli::parse_forwarded();

    let code = match launch::run(&cli.args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("qgraphic: {err}");
            err.exit_code()
        }
    };
    std::process::exit(code);
}
