use rpncalc::Engine;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use rustyline::Result as RlResult;
use tracing::debug;

use crate::rcfile::load_rpncalcrc;
use crate::terminal::{execute_line, format_catalog, render_stacks};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Trigonometry always works in radians, so the prompt always says so
const PROMPT: &str = "[RAD] > ";

/// What the REPL should do with a line before it reaches the engine
#[derive(Debug, PartialEq)]
enum LineAction<'a> {
    Exit,
    Help,
    Evaluate(&'a str),
}

fn classify(line: &str) -> LineAction<'_> {
    match line.trim() {
        "exit" | "quit" => LineAction::Exit,
        "help" => LineAction::Help,
        // Enter on an empty line duplicates the top of the stack
        "" => LineAction::Evaluate("dup"),
        _ => LineAction::Evaluate(line),
    }
}

/// Run the interactive calculator
pub(crate) fn run_repl() -> RlResult<()> {
    let mut engine = Engine::new();
    load_rpncalcrc(&mut engine);

    // History lives for this session only
    let mut rl = DefaultEditor::new()?;

    if std::env::var("RPNCALC_BANNER").is_ok() {
        println!("rpncalc-{} Reverse Polish Notation calculator", VERSION);
        println!("  Type 'help' for operations, 'exit' or Ctrl-D to quit");
    }

    if !engine.current_stack().is_empty() {
        print!("{}", render_stacks(&engine));
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }

                match classify(&line) {
                    LineAction::Exit => break,
                    LineAction::Help => {
                        print!("{}", format_catalog(engine.registry()));
                    }
                    LineAction::Evaluate(input) => {
                        let result = execute_line(&mut engine, input);
                        print!("{}", render_stacks(&engine));
                        if let Err(e) = result {
                            println!("ERR: {}", e);
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C - drop the current line, keep going
                debug!("interrupted");
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D - exit
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
