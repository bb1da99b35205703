use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as ReplResult};

use sexprcalc::parser::{self, ParserState};
use sexprcalc::Interpreter;

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        None => run_repl().map_err(|e| e.to_string()),
        Some("-e") => match args.get(2) {
            Some(expr) => run_source(expr),
            None => Err("-e expects an expression".to_string()),
        },
        Some(filename) => run_script(filename),
    }
}

fn run_script(filename: &str) -> Result<(), String> {
    let source = std::fs::read_to_string(filename)
        .map_err(|e| format!("{filename}: {e}"))?;
    run_source(&source)
}

fn run_source(source: &str) -> Result<(), String> {
    let value = Interpreter::new()
        .evaluate(source)
        .map_err(|e| e.to_string())?;
    println!("{value}");
    Ok(())
}

fn run_repl() -> ReplResult<()> {
    let mut rl = DefaultEditor::new()?;
    let interpreter = Interpreter::new();
    let mut buffer = String::new();
    #[cfg(feature = "with-file-history")]
    if rl.load_history("history.txt").is_err() {
        println!("No previous history.");
    }
    loop {
        let prompt = if buffer.is_empty() { ">> " } else { ".. " };
        match rl.readline(prompt) {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                buffer.push_str(&line);
                buffer.push('\n');
                if parser::paren_state(&buffer) == ParserState::ContinuationNeeded {
                    continue;
                }
                eval_line(&interpreter, buffer.trim());
                buffer.clear();
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    #[cfg(feature = "with-file-history")]
    rl.save_history("history.txt")?;
    Ok(())
}

fn eval_line(interpreter: &Interpreter, input: &str) {
    if input.is_empty() {
        return;
    }
    if let Some(program) = input.strip_prefix(":tree") {
        match parser::parse(program) {
            Ok(Some(tree)) => print!("{tree}"),
            Ok(None) => println!("(no program)"),
            Err(e) => eprintln!("{e}"),
        }
        return;
    }
    match interpreter.evaluate(input) {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
