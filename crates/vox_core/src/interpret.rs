//! The interpretation engine.
//!
//! Stateless per call: NORMALIZE -> PATTERN_MATCH -> {MATCHED | FALLBACK}
//! -> RESULT. Always returns an [`Interpretation`]; absence of a match is
//! represented as data, never as an error. The only state is the compiled
//! pattern table, built once and read-only thereafter, so a single
//! interpreter may serve many callers concurrently.

use crate::pattern::PatternSet;
use crate::registry::{CommandSpec, Registry};
use crate::similarity::similarity;
use crate::VoxError;
use serde::Serialize;
use std::collections::BTreeSet;

/// Minimum nearest-trigger similarity for the fuzzy suggestion tier.
const SUGGESTION_FLOOR: f64 = 0.6;

/// Fixed confidence assigned by the verb-overlap tier.
const VERB_TIER_CONFIDENCE: f64 = 0.5;

/// Error text carried by interpretations that matched nothing.
const NOT_RECOGNIZED: &str = "Command not recognized";

/// Structured result of interpreting one utterance.
///
/// Invariants: `confidence == 0.0` with `command == None` exactly when
/// `error` is set; `confidence == 1.0` implies the normalized input
/// contains the trigger as a literal substring.
#[derive(Debug, Clone, Serialize)]
pub struct Interpretation<'a> {
    /// The inferred command, if any.
    pub command: Option<&'a CommandSpec>,
    /// Extracted parameters, possibly empty.
    pub params: Vec<String>,
    /// Match certainty in [0, 1].
    pub confidence: f64,
    /// Verbatim input text.
    pub original: String,
    /// True when the match came from a fallback tier rather than a
    /// direct pattern match.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub suggestion: bool,
    /// Set only when no command could be inferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Interpretation<'_> {
    fn no_match(original: &str) -> Self {
        Interpretation {
            command: None,
            params: Vec::new(),
            confidence: 0.0,
            original: original.to_string(),
            suggestion: false,
            error: Some(NOT_RECOGNIZED.to_string()),
        }
    }

    /// Whether any command was inferred.
    pub fn is_match(&self) -> bool {
        self.command.is_some()
    }
}

/// Maps free-form utterances onto the command catalog.
pub struct Interpreter {
    registry: Registry,
    patterns: PatternSet,
    verbs: BTreeSet<String>,
}

impl Interpreter {
    /// Compile the pattern table for `registry`. The compilation cost is
    /// paid once and amortized across all subsequent `interpret` calls.
    pub fn new(registry: Registry) -> Result<Self, VoxError> {
        let patterns = PatternSet::compile(&registry)?;
        let verbs = registry.action_verbs();
        Ok(Self {
            registry,
            patterns,
            verbs,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Interpret one utterance. Total over any input: empty or
    /// unintelligible text yields a no-match interpretation, not an error.
    pub fn interpret(&self, text: &str) -> Interpretation<'_> {
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return Interpretation::no_match(text);
        }

        // Structural pass: first matching pattern wins (longest trigger
        // first, see PatternSet::compile).
        for pattern in self.patterns.iter() {
            if let Some(remainder) = pattern.match_remainder(&normalized) {
                let spec = &self.registry.commands()[pattern.command_index()];
                let trigger = spec.trigger.to_lowercase();
                let confidence = if normalized.contains(&trigger) {
                    1.0
                } else {
                    // Alias matches score by trigger similarity.
                    similarity(&normalized, &trigger)
                };
                let params: Vec<String> =
                    spec.extractor.extract(remainder).into_iter().collect();
                tracing::debug!(
                    trigger = %spec.trigger,
                    confidence,
                    "structural match"
                );
                return Interpretation {
                    command: Some(spec),
                    params,
                    confidence,
                    original: text.to_string(),
                    suggestion: false,
                    error: None,
                };
            }
        }

        self.fallback(text, &normalized)
    }

    /// Fallback tiers: nearest trigger by edit distance, then
    /// verb-overlap, then no match.
    fn fallback<'a>(&'a self, original: &str, normalized: &str) -> Interpretation<'a> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, spec) in self.registry.commands().iter().enumerate() {
            let score = similarity(normalized, &spec.trigger.to_lowercase());
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((idx, score));
            }
        }

        if let Some((idx, score)) = best {
            if score > SUGGESTION_FLOOR {
                let spec = &self.registry.commands()[idx];
                tracing::debug!(trigger = %spec.trigger, score, "similarity fallback");
                return Interpretation {
                    command: Some(spec),
                    params: Vec::new(),
                    confidence: score,
                    original: original.to_string(),
                    suggestion: true,
                    error: None,
                };
            }
        }

        // Verb tier: any token that is the first word of some trigger.
        let found: Vec<&str> = normalized
            .split_whitespace()
            .filter(|word| self.verbs.contains(*word))
            .collect();
        if !found.is_empty() {
            // Registry order decides among candidates.
            for spec in self.registry.commands() {
                let trigger = spec.trigger.to_lowercase();
                if found.iter().any(|verb| trigger.contains(verb)) {
                    tracing::debug!(trigger = %spec.trigger, verbs = ?found, "verb fallback");
                    return Interpretation {
                        command: Some(spec),
                        params: vec![normalized.to_string()],
                        confidence: VERB_TIER_CONFIDENCE,
                        original: original.to_string(),
                        suggestion: true,
                        error: None,
                    };
                }
            }
        }

        tracing::debug!(input = %normalized, "no match");
        Interpretation::no_match(original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpreter() -> Interpreter {
        Interpreter::new(Registry::builtin()).unwrap()
    }

    #[test]
    fn test_every_trigger_interprets_to_its_command() {
        let interp = interpreter();
        for spec in interp.registry().commands() {
            let result = interp.interpret(&spec.trigger);
            let matched = result.command.expect("trigger should match");
            assert_eq!(matched.action, spec.action, "trigger {:?}", spec.trigger);
            assert_eq!(result.confidence, 1.0, "trigger {:?}", spec.trigger);
            assert!(!result.suggestion);
        }
    }

    #[test]
    fn test_empty_input_is_no_match() {
        let interp = interpreter();
        let result = interp.interpret("");
        assert!(result.command.is_none());
        assert_eq!(result.confidence, 0.0);
        assert!(result.error.is_some());

        let result = interp.interpret("   ");
        assert!(result.command.is_none());
    }

    #[test]
    fn test_polite_prefix_with_param() {
        let interp = interpreter();
        let result = interp.interpret("please click submit button");
        assert_eq!(result.command.unwrap().action, "click");
        assert_eq!(result.params, vec!["submit button".to_string()]);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_scroll_to_beats_scroll() {
        let interp = interpreter();
        let result = interp.interpret("scroll to contact form");
        assert_eq!(result.command.unwrap().action, "scrollTo");
        assert_eq!(result.params, vec!["contact form".to_string()]);
    }

    #[test]
    fn test_scroll_direction_default() {
        let interp = interpreter();
        let result = interp.interpret("scroll up");
        assert_eq!(result.params, vec!["up".to_string()]);
        let result = interp.interpret("scroll");
        assert_eq!(result.params, vec!["down".to_string()]);
    }

    #[test]
    fn test_no_param_command_has_empty_params() {
        let interp = interpreter();
        let result = interp.interpret("back");
        assert_eq!(result.command.unwrap().action, "goBack");
        assert!(result.params.is_empty());
    }

    #[test]
    fn test_typo_falls_back_to_similarity_tier() {
        let interp = interpreter();
        let result = interp.interpret("scrll");
        let spec = result.command.expect("typo should reach fallback");
        assert_eq!(spec.action, "scroll");
        assert!(result.suggestion);
        assert!(result.confidence > SUGGESTION_FLOOR);
        assert!(result.params.is_empty());
    }

    #[test]
    fn test_verb_overlap_tier() {
        let interp = interpreter();
        // No structural match, nearest trigger too far, but "translate"
        // is a derived action verb.
        let result = interp.interpret("translate everything here to spanish");
        let spec = result.command.expect("verb tier should catch this");
        assert_eq!(spec.action, "TRANSLATE_SELECTION");
        assert!(result.suggestion);
        assert_eq!(result.confidence, VERB_TIER_CONFIDENCE);
        assert_eq!(
            result.params,
            vec!["translate everything here to spanish".to_string()]
        );
    }

    #[test]
    fn test_gibberish_is_no_match() {
        let interp = interpreter();
        let result = interp.interpret("xylophone quantum banana");
        assert!(result.command.is_none());
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.error.as_deref(), Some(NOT_RECOGNIZED));
    }

    #[test]
    fn test_idempotent() {
        let interp = interpreter();
        for input in ["please click submit", "scrll", "zzz", ""] {
            let a = interp.interpret(input);
            let b = interp.interpret(input);
            assert_eq!(
                a.command.map(|c| c.action.as_str()),
                b.command.map(|c| c.action.as_str())
            );
            assert_eq!(a.confidence, b.confidence);
            assert_eq!(a.params, b.params);
            assert_eq!(a.error, b.error);
        }
    }

    #[test]
    fn test_case_and_whitespace_normalized() {
        let interp = interpreter();
        let result = interp.interpret("  CLICK Submit  ");
        assert_eq!(result.command.unwrap().action, "click");
        assert_eq!(result.params, vec!["submit".to_string()]);
    }
}
