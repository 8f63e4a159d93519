use rpncalc::Engine;
use crate::terminal::execute_line;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Angle unit requested on the command line.
///
/// Not passed to the engine: the trigonometric operations work in radians
/// whatever is chosen here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AngleMode {
    Radians,
    Degrees,
}

/// Parsed command-line arguments
#[derive(Debug, Default)]
pub(crate) struct CliArgs {
    pub(crate) rad: bool,
    pub(crate) deg: bool,
    pub(crate) command: Option<String>,
    pub(crate) help: bool,
    pub(crate) version: bool,
    pub(crate) unknown: Vec<String>,
}

impl CliArgs {
    /// `-rad` and `-deg` are mutually exclusive
    pub(crate) fn angle_mode(&self) -> Result<AngleMode, String> {
        match (self.rad, self.deg) {
            (true, true) => Err("unable to use -rad and -deg at the same time".to_string()),
            (_, true) => Ok(AngleMode::Degrees),
            _ => Ok(AngleMode::Radians),
        }
    }
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "-rad" | "--rad" => {
                cli.rad = true;
            }
            "-deg" | "--deg" => {
                cli.deg = true;
            }
            "-c" => {
                // Everything after -c is the expression
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                    break;
                }
                // -c with nothing to evaluate
                cli.unknown.push(args[i].clone());
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            other => {
                cli.unknown.push(other.to_string());
            }
        }
        i += 1;
    }

    cli
}

pub(crate) fn print_help() {
    println!(
        r#"rpncalc-{} Reverse Polish Notation calculator

USAGE:
    rpncalc                 Start interactive calculator
    rpncalc -c <expr>       Evaluate one line and print the stack
    rpncalc -rad            Radian mode (default)
    rpncalc -deg            Degree mode (accepted, trigonometry stays in radians)
    rpncalc --help          Show this help message
    rpncalc --version       Show version

STARTUP:
    ~/.rpncalcrc            Evaluated line by line on startup (if exists)
    RPNCALC_BANNER=1        Show startup banner (quiet by default)
    RPNCALC_LOG=debug       Log filter for diagnostics on stderr

CORE CONCEPT:
    Numbers push to the stack, operations pop their operands and push
    the result. 10 2 /  pops 2 then 10 and pushes 10/2.
    Numbers and names may touch: 3 4+ is 3 4 +, 2dup is 2 dup.

INTERACTIVE:
    <empty line>            Same as dup
    undo                    Restore the stack as it was before the last line
    help                    List all operations
    exit, quit, Ctrl-D      Leave
"#,
        VERSION
    );
}

pub(crate) fn print_version() {
    println!("rpncalc {}", VERSION);
}

/// Evaluate a single line on a fresh engine and print the resulting stack
pub(crate) fn execute_command(cmd: &str) -> ExitCode {
    let mut engine = Engine::new();
    match execute_line(&mut engine, cmd) {
        Ok(()) => {
            print!("{}", engine.current_stack().render());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
