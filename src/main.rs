use std::fs;

use canopy::{
    error::InterpretError,
    interpret,
    interpreter::{environment::Environment, evaluator::core::Evaluator, parser::core::Parser},
};
use clap::Parser as ClapParser;
use rustyline::{
    Completer, Editor, Helper, Highlighter, Hinter, Validator, error::ReadlineError,
    highlight::MatchingBracketHighlighter, validate::MatchingBracketValidator,
};

/// canopy is a small dynamically typed scripting language with first-class
/// functions, arrays and hashes.
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells canopy to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the final
    /// value of a canopy script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// The script text, or a path to it with --file. When omitted, the
    /// REPL starts instead.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        if let Err(e) = repl() {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    let mut output = String::new();
    match interpret(&script, &mut output) {
        Ok(value) => {
            print!("{output}");
            if args.pipe_mode {
                println!("{value}");
            }
        },
        Err(InterpretError::Runtime(error)) => {
            print!("{output}");
            eprintln!("ERROR: {error}");
            std::process::exit(1);
        },
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        },
    }
}

#[derive(Completer, Helper, Highlighter, Hinter, Validator)]
struct InputValidator {
    #[rustyline(Validator)]
    brackets:    MatchingBracketValidator,
    #[rustyline(Highlighter)]
    highlighter: MatchingBracketHighlighter,
}

/// Runs the interactive loop with a persistent top-level environment.
///
/// Each line is parsed and evaluated on its own, but bindings survive
/// between lines, so functions and variables defined earlier stay
/// available.
fn repl() -> rustyline::Result<()> {
    println!("canopy {}", env!("CARGO_PKG_VERSION"));
    println!("Type 'exit' or press Ctrl-D to quit.");

    let env = Environment::new();
    let helper = InputValidator { brackets:    MatchingBracketValidator::new(),
                                  highlighter: MatchingBracketHighlighter::new(), };

    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    loop {
        match rl.readline("canopy> ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;

                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed.eq_ignore_ascii_case("exit") {
                    break;
                }

                let mut parser = Parser::new(trimmed);
                let program = parser.parse_program();
                if !parser.errors().is_empty() {
                    for diagnostic in parser.errors() {
                        eprintln!("{diagnostic}");
                    }
                    continue;
                }

                let mut output = String::new();
                let mut evaluator = Evaluator::new(&mut output);
                match evaluator.eval_program(&program, &env) {
                    Ok(value) => {
                        print!("{output}");
                        println!("{value}");
                    },
                    Err(error) => {
                        print!("{output}");
                        eprintln!("ERROR: {error}");
                    },
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted. Type 'exit' or Ctrl-D to quit.");
            },
            Err(ReadlineError::Eof) => {
                println!("Exiting.");
                break;
            },
            Err(error) => {
                eprintln!("Readline Error: {error:?}");
                break;
            },
        }
    }

    Ok(())
}
