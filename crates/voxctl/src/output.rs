//! Output formatting for voxctl.
//!
//! Every message voxctl shows goes through here so human output stays
//! consistent. JSON output is plain serde_json, no decoration.

use owo_colors::OwoColorize;
use vox_core::{ExecOutcome, Interpretation, Registry, ResponseDirective};

/// Render an interpretation for humans: matched command, confidence,
/// parameters, fallback marker.
pub fn render_interpretation(interpretation: &Interpretation<'_>) -> String {
    let mut out = String::new();
    match interpretation.command {
        Some(spec) => {
            out.push_str(&format!(
                "{} {} ({:.0}% confidence{})\n",
                "match:".bold(),
                spec.trigger.green(),
                interpretation.confidence * 100.0,
                if interpretation.suggestion {
                    ", via fallback"
                } else {
                    ""
                }
            ));
            if !interpretation.params.is_empty() {
                out.push_str(&format!("  params: {:?}\n", interpretation.params));
            }
        }
        None => {
            out.push_str(&format!(
                "{} {}\n",
                "no match:".bold(),
                interpretation
                    .error
                    .as_deref()
                    .unwrap_or("unrecognized")
                    .red()
            ));
        }
    }
    out
}

/// Render a directive for humans.
pub fn render_directive(directive: &ResponseDirective) -> String {
    match directive {
        ResponseDirective::Execute { message, .. } => {
            format!("{} {}\n", "▶".green().bold(), message)
        }
        ResponseDirective::Confirm { message, .. } => {
            format!("{} {}\n", "?".yellow().bold(), message)
        }
        ResponseDirective::Suggest {
            message,
            suggestions,
        } => {
            let mut out = format!("{} {}\n", "~".blue().bold(), message);
            for suggestion in suggestions {
                out.push_str(&format!(
                    "  • {} - {}\n",
                    format!("\"{}\"", suggestion.example).bold(),
                    suggestion.description
                ));
            }
            out
        }
        ResponseDirective::Error { message } => {
            format!("{} {}\n", "✗".red().bold(), message)
        }
    }
}

/// Render an executor outcome.
pub fn render_outcome(outcome: &ExecOutcome) -> String {
    if outcome.success {
        format!("{} {}\n", "✓".green(), outcome.message)
    } else {
        format!("{} {}\n", "✗".red(), outcome.message)
    }
}

/// Render the catalog listing.
pub fn render_catalog(registry: &Registry) -> String {
    let width = registry
        .commands()
        .iter()
        .map(|spec| spec.trigger.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for spec in registry.commands() {
        // Pad before styling so escape codes don't skew the column.
        let padded = format!("{:width$}", spec.trigger);
        out.push_str(&format!(
            "  {}  {}  {}\n",
            padded.bold(),
            format!("e.g. \"{}\"", spec.example).dimmed(),
            spec.description,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vox_core::{Interpreter, ResponsePolicy};

    #[test]
    fn test_render_execute_directive() {
        let interpreter = Interpreter::new(Registry::builtin()).unwrap();
        let policy = ResponsePolicy::default();
        let interpretation = interpreter.interpret("click submit");
        let rendered = render_directive(&policy.decide(interpreter.registry(), &interpretation));
        assert!(rendered.contains("Executing:"));
    }

    #[test]
    fn test_render_suggest_separator_is_ascii() {
        let interpreter = Interpreter::new(Registry::builtin()).unwrap();
        let policy = ResponsePolicy::default();
        let interpretation = interpreter.interpret("scrol dwn");
        let rendered = render_directive(&policy.decide(interpreter.registry(), &interpretation));
        assert!(rendered.contains("Did you mean one of these?"));
        assert!(rendered.contains(" - "));
        assert!(!rendered.contains('\u{2014}'));
    }

    #[test]
    fn test_render_no_match_interpretation() {
        let interpreter = Interpreter::new(Registry::builtin()).unwrap();
        let rendered = render_interpretation(&interpreter.interpret("xylophone quantum"));
        assert!(rendered.contains("no match"));
    }

    #[test]
    fn test_render_catalog_lists_every_trigger() {
        let registry = Registry::builtin();
        let rendered = render_catalog(&registry);
        for spec in registry.commands() {
            assert!(rendered.contains(&spec.description));
        }
    }
}
