//! Compiled utterance matchers.
//!
//! One case-insensitive pattern per catalog entry, tolerant of a polite
//! prefix ("please ...", "can you ...") and a leading filler word. Built
//! once at interpreter construction; matchers are pure, stateless and
//! safe for concurrent use.
//!
//! Patterns are ordered longest-phrase-first, where a command's phrase
//! length is the longest of its trigger and aliases, so that "scroll to
//! contact form" resolves to `scroll to` before the bare `scroll`
//! pattern gets a chance to claim it, and a long alias is not shadowed
//! by another command's longer trigger. Ties keep registry order.

use crate::error::VoxError;
use crate::registry::Registry;
use regex::Regex;

/// Polite phrases that may precede a command.
const POLITE_PREFIXES: &[&str] = &[
    "please",
    "can you",
    "could you",
    "would you",
    "i want to",
    "i'd like to",
    "i need to",
    "help me",
];

/// Short function words that may appear between prefix and trigger.
const FILLER_WORDS: &[&str] = &[
    "the", "a", "an", "this", "that", "to", "for", "on", "in", "at",
];

/// A compiled matcher plus the registry index of its owning command.
#[derive(Debug)]
pub struct CompiledPattern {
    regex: Regex,
    command: usize,
}

impl CompiledPattern {
    /// Registry index of the command this pattern matches.
    pub fn command_index(&self) -> usize {
        self.command
    }

    /// Try the pattern; on match, return the trimmed remainder text.
    pub fn match_remainder<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .map(|caps| caps.get(2).map_or("", |m| m.as_str()).trim())
    }
}

/// The full matcher table, in match-precedence order.
#[derive(Debug)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    /// Compile one pattern per registry entry, ordered by descending
    /// phrase length (longest of trigger and aliases, stable within
    /// equal lengths).
    pub fn compile(registry: &Registry) -> Result<Self, VoxError> {
        let phrase_len = |spec: &crate::registry::CommandSpec| {
            spec.aliases
                .iter()
                .map(|alias| alias.len())
                .chain(std::iter::once(spec.trigger.len()))
                .max()
                .unwrap_or(0)
        };
        let mut order: Vec<usize> = (0..registry.len()).collect();
        order.sort_by_key(|&idx| std::cmp::Reverse(phrase_len(&registry.commands()[idx])));

        let mut patterns = Vec::with_capacity(order.len());
        for idx in order {
            let spec = &registry.commands()[idx];
            let regex = build_pattern(&spec.trigger, &spec.aliases).map_err(|source| {
                VoxError::Pattern {
                    trigger: spec.trigger.clone(),
                    source,
                }
            })?;
            patterns.push(CompiledPattern {
                regex,
                command: idx,
            });
        }
        Ok(Self { patterns })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter()
    }
}

/// `^(polite prefix)? (filler)? (trigger|alias) (remainder)$`
fn build_pattern(trigger: &str, aliases: &[String]) -> Result<Regex, regex::Error> {
    let prefixes = join_escaped(POLITE_PREFIXES.iter().copied());
    let fillers = join_escaped(FILLER_WORDS.iter().copied());

    let mut phrases = vec![regex::escape(&trigger.to_lowercase())];
    phrases.extend(aliases.iter().map(|alias| regex::escape(&alias.to_lowercase())));
    let triggers = phrases.join("|");

    Regex::new(&format!(
        r"(?i)^(?:(?:{prefixes})\s+)?(?:(?:{fillers})\s+)?({triggers})\s*(.*)$"
    ))
}

fn join_escaped<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}
