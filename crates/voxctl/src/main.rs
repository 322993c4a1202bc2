//! voxctl - CLI front-end for the vox interpretation engine.
//!
//! One-shot interpretation, catalog listing, and an interactive REPL.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use voxctl::cli::{Cli, Commands};
use voxctl::executor::EchoExecutor;
use voxctl::{output, repl};
use vox_core::{catalog, ActionExecutor, Interpreter, Registry, ResponseDirective, ResponsePolicy};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let registry = match &cli.catalog {
        Some(path) => catalog::load_catalog(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Registry::builtin(),
    };
    let interpreter = Interpreter::new(registry).context("compiling command patterns")?;

    match cli.command {
        Some(Commands::Interpret { text, json }) => {
            interpret_once(&interpreter, &text.join(" "), json)
        }
        Some(Commands::Commands { toml }) => {
            if toml {
                print!("{}", catalog::render_catalog(interpreter.registry()));
            } else {
                print!("{}", output::render_catalog(interpreter.registry()));
            }
            Ok(())
        }
        Some(Commands::Repl) | None => repl::run(&interpreter),
    }
}

fn interpret_once(interpreter: &Interpreter, text: &str, json: bool) -> Result<()> {
    let interpretation = interpreter.interpret(text);
    let policy = ResponsePolicy::default();
    let directive = policy.decide(interpreter.registry(), &interpretation);

    if json {
        let report = serde_json::json!({
            "interpretation": interpretation,
            "directive": directive,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", output::render_interpretation(&interpretation));
    print!("{}", output::render_directive(&directive));
    if let ResponseDirective::Execute { action, params, .. } = &directive {
        let outcome = EchoExecutor.execute(action, params);
        print!("{}", output::render_outcome(&outcome));
    }
    Ok(())
}
