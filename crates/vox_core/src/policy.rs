//! Response policy: interpretation -> user-facing directive.
//!
//! Pure decision function over the confidence score. Four tiers: execute,
//! confirm, suggest, error. The error tier references one catalog example
//! picked by a deterministic hash of the input, so identical utterances
//! always surface the same hint (and tests stay reproducible).

use crate::interpret::Interpretation;
use crate::registry::{CommandSpec, Registry};
use crate::similarity::similarity;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Decision thresholds. Defaults are fixed policy constants; override
/// only when behavior parity with the stock policy is not required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Confidence at or above which a command executes directly.
    pub execute_threshold: f64,
    /// Confidence at or above which the user is asked to confirm.
    pub confirm_threshold: f64,
    /// Minimum trigger similarity for an entry in the suggestion list.
    pub suggest_threshold: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            execute_threshold: 0.8,
            confirm_threshold: 0.6,
            suggest_threshold: 0.4,
        }
    }
}

/// One suggested alternative shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub example: String,
    pub description: String,
}

/// The decided reaction, consumed by whatever layer owns the executor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ResponseDirective {
    #[serde(rename = "EXECUTE")]
    Execute {
        action: String,
        params: Vec<String>,
        message: String,
    },
    #[serde(rename = "CONFIRM")]
    Confirm {
        action: String,
        params: Vec<String>,
        message: String,
    },
    #[serde(rename = "SUGGEST")]
    Suggest {
        message: String,
        suggestions: Vec<Suggestion>,
    },
    #[serde(rename = "ERROR")]
    Error { message: String },
}

/// Maps interpretations to directives under a threshold configuration.
#[derive(Debug, Clone, Default)]
pub struct ResponsePolicy {
    config: PolicyConfig,
}

impl ResponsePolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Decide the reaction for `interpretation` against `registry`.
    pub fn decide(
        &self,
        registry: &Registry,
        interpretation: &Interpretation<'_>,
    ) -> ResponseDirective {
        if let Some(spec) = interpretation.command {
            if interpretation.confidence >= self.config.execute_threshold {
                return ResponseDirective::Execute {
                    action: spec.action.clone(),
                    params: interpretation.params.clone(),
                    message: format!("Executing: {}", spec.description),
                };
            }
            if interpretation.confidence >= self.config.confirm_threshold {
                return ResponseDirective::Confirm {
                    action: spec.action.clone(),
                    params: interpretation.params.clone(),
                    message: format!("Did you mean: {}?", spec.example),
                };
            }
        }

        let normalized = interpretation.original.trim().to_lowercase();
        let suggestions = self.rank_suggestions(registry, &normalized);
        if !suggestions.is_empty() {
            return ResponseDirective::Suggest {
                message: "Did you mean one of these?".to_string(),
                suggestions,
            };
        }

        ResponseDirective::Error {
            message: format!(
                "I didn't understand that command. Try something like: {}",
                pick_example(registry, &normalized)
            ),
        }
    }

    /// Top 3 commands by trigger similarity above the suggest threshold.
    fn rank_suggestions(&self, registry: &Registry, normalized: &str) -> Vec<Suggestion> {
        let mut scored: Vec<(f64, &CommandSpec)> = registry
            .commands()
            .iter()
            .map(|spec| {
                (
                    similarity(normalized, &spec.trigger.to_lowercase()),
                    spec,
                )
            })
            .filter(|(score, _)| *score > self.config.suggest_threshold)
            .collect();
        // Stable sort: ties keep registry order.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored.truncate(3);
        scored
            .into_iter()
            .map(|(_, spec)| Suggestion {
                example: spec.example.clone(),
                description: spec.description.clone(),
            })
            .collect()
    }
}

/// Pick a catalog example keyed by a hash of the input text.
/// Deterministic stand-in for random selection.
fn pick_example<'a>(registry: &'a Registry, input: &str) -> &'a str {
    let seed = seed_from_str(input);
    let idx = (seed as usize) % registry.len();
    &registry.commands()[idx].example
}

fn seed_from_str(s: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    s.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpretation_with<'a>(
        spec: Option<&'a CommandSpec>,
        confidence: f64,
        original: &str,
    ) -> Interpretation<'a> {
        Interpretation {
            command: spec,
            params: vec![],
            confidence,
            original: original.to_string(),
            suggestion: false,
            error: if spec.is_none() {
                Some("Command not recognized".to_string())
            } else {
                None
            },
        }
    }

    #[test]
    fn test_high_confidence_executes() {
        let registry = Registry::builtin();
        let policy = ResponsePolicy::default();
        let spec = &registry.commands()[0];
        let directive =
            policy.decide(&registry, &interpretation_with(Some(spec), 0.85, "click x"));
        assert!(matches!(directive, ResponseDirective::Execute { .. }));
    }

    #[test]
    fn test_mid_confidence_confirms() {
        let registry = Registry::builtin();
        let policy = ResponsePolicy::default();
        let spec = &registry.commands()[0];
        let directive =
            policy.decide(&registry, &interpretation_with(Some(spec), 0.65, "clck x"));
        match directive {
            ResponseDirective::Confirm { message, .. } => {
                assert_eq!(message, "Did you mean: click submit button?");
            }
            other => panic!("expected CONFIRM, got {other:?}"),
        }
    }

    #[test]
    fn test_low_confidence_near_trigger_suggests() {
        let registry = Registry::builtin();
        let policy = ResponsePolicy::default();
        // "scrol" is within suggest range of "scroll" but the
        // interpretation itself carries no command.
        let directive = policy.decide(&registry, &interpretation_with(None, 0.0, "scrol"));
        match directive {
            ResponseDirective::Suggest { suggestions, .. } => {
                assert!(!suggestions.is_empty());
                assert!(suggestions.len() <= 3);
                assert_eq!(suggestions[0].example, "scroll down");
            }
            other => panic!("expected SUGGEST, got {other:?}"),
        }
    }

    #[test]
    fn test_no_near_commands_errors_with_example() {
        let registry = Registry::builtin();
        let policy = ResponsePolicy::default();
        let directive = policy.decide(
            &registry,
            &interpretation_with(None, 0.0, "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx"),
        );
        match directive {
            ResponseDirective::Error { message } => {
                assert!(message.starts_with("I didn't understand that command."));
                let referenced = registry
                    .commands()
                    .iter()
                    .any(|spec| message.ends_with(&spec.example));
                assert!(referenced, "error should reference a catalog example");
            }
            other => panic!("expected ERROR, got {other:?}"),
        }
    }

    #[test]
    fn test_error_example_pick_is_stable() {
        let registry = Registry::builtin();
        let policy = ResponsePolicy::default();
        let input = "zq zq zq zq zq zq zq zq zq zq zq zq zq zq";
        let first = policy.decide(&registry, &interpretation_with(None, 0.0, input));
        for _ in 0..5 {
            let again = policy.decide(&registry, &interpretation_with(None, 0.0, input));
            assert_eq!(first, again);
        }
    }

    #[test]
    fn test_low_confidence_command_without_near_triggers_errors() {
        let registry = Registry::builtin();
        let policy = ResponsePolicy::default();
        let spec = &registry.commands()[0];
        // A command survived the fallback but confidence is far below the
        // confirm band, and the input resembles no trigger.
        let directive = policy.decide(
            &registry,
            &interpretation_with(Some(spec), 0.2, "xylophone quantum banana"),
        );
        assert!(matches!(directive, ResponseDirective::Error { .. }));
    }

    #[test]
    fn test_default_thresholds_match_policy_constants() {
        let config = PolicyConfig::default();
        assert_eq!(config.execute_threshold, 0.8);
        assert_eq!(config.confirm_threshold, 0.6);
        assert_eq!(config.suggest_threshold, 0.4);
    }

    #[test]
    fn test_boundary_confidences() {
        let registry = Registry::builtin();
        let policy = ResponsePolicy::default();
        let spec = &registry.commands()[0];
        let at_execute =
            policy.decide(&registry, &interpretation_with(Some(spec), 0.8, "click x"));
        assert!(matches!(at_execute, ResponseDirective::Execute { .. }));
        let at_confirm =
            policy.decide(&registry, &interpretation_with(Some(spec), 0.6, "click x"));
        assert!(matches!(at_confirm, ResponseDirective::Confirm { .. }));
    }
}
