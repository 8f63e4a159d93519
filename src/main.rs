//! rpncalc - an interactive Reverse Polish Notation calculator
//!
//! Usage:
//!   rpncalc              Start interactive calculator
//!   rpncalc -c "expr"    Evaluate one line and print the stack
//!   rpncalc -rad|-deg    Select angle mode (trigonometry stays in radians)

mod cli;
mod rcfile;
mod repl;
mod terminal;

use cli::{execute_command, parse_args, print_help, print_version, AngleMode};
use repl::run_repl;
use std::env;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_env("RPNCALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    if !cli.unknown.is_empty() {
        eprintln!("unknown arguments: {}", cli.unknown.join(" "));
        return ExitCode::FAILURE;
    }

    let mode = match cli.angle_mode() {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if mode == AngleMode::Degrees {
        warn!("degree mode is not wired into the engine; trigonometry uses radians");
    }

    if let Some(cmd) = cli.command {
        return execute_command(&cmd);
    }

    match run_repl() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
