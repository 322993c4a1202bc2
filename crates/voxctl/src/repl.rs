//! REPL - interactive interpretation loop.
//!
//! Plays the utterance-source role: each stdin line is one candidate
//! utterance, interpreted independently (no cross-utterance memory).
//! EXECUTE directives are routed through the echo executor; everything
//! else is rendered and the loop continues.

use crate::executor::EchoExecutor;
use crate::output;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use vox_core::{ActionExecutor, Interpreter, ResponseDirective, ResponsePolicy};

fn print_welcome(command_count: usize) {
    println!("vox - natural language command interpreter");
    println!("{command_count} commands loaded. Type an utterance, or 'exit' to quit.");
    println!();
}

fn print_prompt() {
    print!("vox> ");
    let _ = io::stdout().flush();
}

/// Run the interactive loop until EOF or an exit word.
pub fn run(interpreter: &Interpreter) -> Result<()> {
    let policy = ResponsePolicy::default();
    let executor = EchoExecutor;

    print_welcome(interpreter.registry().len());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_prompt();

        let input = match lines.next() {
            Some(Ok(line)) => line.trim().to_string(),
            Some(Err(e)) => {
                eprintln!("Error reading input: {e}");
                continue;
            }
            None => break, // EOF
        };

        if input.is_empty() {
            continue;
        }
        if matches!(input.to_lowercase().as_str(), "exit" | "quit") {
            println!("Goodbye.");
            break;
        }

        tracing::debug!(input = %input, "utterance received");
        let interpretation = interpreter.interpret(&input);
        let directive = policy.decide(interpreter.registry(), &interpretation);

        print!("{}", output::render_interpretation(&interpretation));
        print!("{}", output::render_directive(&directive));

        if let ResponseDirective::Execute { action, params, .. } = &directive {
            let outcome = executor.execute(action, params);
            print!("{}", output::render_outcome(&outcome));
        }
        println!();
    }

    Ok(())
}
