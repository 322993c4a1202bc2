//! Command registry - the catalog of executable commands.
//!
//! The registry is an ordered, immutable catalog built once at startup and
//! passed explicitly into the [`Interpreter`](crate::interpret::Interpreter).
//! There is no runtime mutation API: adding a command means redeploying the
//! catalog (built-in or TOML file, see [`crate::catalog`]).

use crate::error::VoxError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How a command extracts its parameter from the matched utterance.
///
/// Replaces the per-command closures of a dynamic catalog with a closed
/// strategy table. Every variant is a pure function of the post-trigger
/// remainder text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParamExtractor {
    /// The command takes no parameter.
    None,
    /// Whatever text follows the trigger, trimmed. An empty remainder
    /// yields no parameter.
    Remainder,
    /// The first listed option found in the remainder wins, else the
    /// default ("scroll up" -> "up", bare "scroll" -> "down").
    Keyword {
        options: Vec<String>,
        default: String,
    },
    /// A trailing "to <word>" names the parameter ("translate ... to
    /// spanish" -> "spanish"), else the default.
    TrailingLanguage { default: String },
}

impl Default for ParamExtractor {
    fn default() -> Self {
        ParamExtractor::None
    }
}

impl ParamExtractor {
    /// Extract the parameter from the post-trigger remainder.
    ///
    /// `None` means the command carries no parameter; the interpretation
    /// still succeeds with an empty parameter list.
    pub fn extract(&self, remainder: &str) -> Option<String> {
        match self {
            ParamExtractor::None => None,
            ParamExtractor::Remainder => {
                let text = remainder.trim();
                if text.is_empty() {
                    None
                } else {
                    Some(text.to_string())
                }
            }
            ParamExtractor::Keyword { options, default } => {
                for option in options {
                    if remainder.contains(option.as_str()) {
                        return Some(option.clone());
                    }
                }
                Some(default.clone())
            }
            ParamExtractor::TrailingLanguage { default } => {
                let words: Vec<&str> = remainder.split_whitespace().collect();
                match words.as_slice() {
                    // The language must be a bare word; trailing
                    // punctuation falls back to the default.
                    [.., marker, language]
                        if *marker == "to"
                            && language.chars().all(|c| c.is_alphanumeric() || c == '_') =>
                    {
                        Some(language.to_lowercase())
                    }
                    _ => Some(default.clone()),
                }
            }
        }
    }
}

/// One entry in the command catalog. Immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Canonical phrase identifying the command. Unique across the
    /// registry, case-insensitively.
    pub trigger: String,
    /// Alternate phrases that match through the same pattern. May overlap
    /// across commands; precedence follows pattern order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Human-readable description, shown on EXECUTE and in listings.
    pub description: String,
    /// Example utterance, shown on CONFIRM/SUGGEST/ERROR.
    pub example: String,
    /// Opaque identifier consumed by the action executor.
    pub action: String,
    /// Parameter extraction strategy.
    #[serde(default)]
    pub extractor: ParamExtractor,
}

/// Ordered, immutable command catalog.
#[derive(Debug, Clone)]
pub struct Registry {
    commands: Vec<CommandSpec>,
}

impl Registry {
    /// Build a registry from an ordered catalog, validating that triggers
    /// are non-empty and unique (case-insensitive).
    pub fn new(commands: Vec<CommandSpec>) -> Result<Self, VoxError> {
        if commands.is_empty() {
            return Err(VoxError::EmptyCatalog);
        }
        let mut seen = BTreeSet::new();
        for spec in &commands {
            let trigger = spec.trigger.trim().to_lowercase();
            if trigger.is_empty() {
                return Err(VoxError::EmptyTrigger);
            }
            if !seen.insert(trigger.clone()) {
                return Err(VoxError::DuplicateTrigger(trigger));
            }
        }
        Ok(Self { commands })
    }

    /// The catalog in registry order.
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CommandSpec> {
        self.commands.get(index)
    }

    /// Action-verb set derived from the first token of every trigger.
    ///
    /// Used by the interpreter's keyword-overlap fallback tier. Deriving it
    /// here keeps the verb set from drifting when the catalog changes.
    /// BTreeSet for deterministic iteration.
    pub fn action_verbs(&self) -> BTreeSet<String> {
        self.commands
            .iter()
            .filter_map(|spec| spec.trigger.split_whitespace().next())
            .map(|verb| verb.to_lowercase())
            .collect()
    }

    /// The built-in browser-control catalog.
    pub fn builtin() -> Self {
        Self {
            commands: builtin_commands(),
        }
    }
}

fn spec(
    trigger: &str,
    description: &str,
    action: &str,
    example: &str,
    extractor: ParamExtractor,
) -> CommandSpec {
    CommandSpec {
        trigger: trigger.to_string(),
        aliases: Vec::new(),
        description: description.to_string(),
        example: example.to_string(),
        action: action.to_string(),
        extractor,
    }
}

fn builtin_commands() -> Vec<CommandSpec> {
    use ParamExtractor::{Keyword, None as NoParam, Remainder, TrailingLanguage};

    vec![
        spec(
            "click",
            "Click on any element containing the specified text",
            "click",
            "click submit button",
            Remainder,
        ),
        spec(
            "scroll",
            "Scroll the page up or down",
            "scroll",
            "scroll down",
            Keyword {
                options: vec!["up".to_string()],
                default: "down".to_string(),
            },
        ),
        spec(
            "go to",
            "Navigate to a website",
            "navigate",
            "go to google.com",
            Remainder,
        ),
        spec("back", "Go back in browser history", "goBack", "back", NoParam),
        spec(
            "forward",
            "Go forward in browser history",
            "goForward",
            "forward",
            NoParam,
        ),
        spec(
            "refresh",
            "Refresh the current page",
            "refresh",
            "refresh",
            NoParam,
        ),
        spec(
            "search",
            "Search for text on the page",
            "search",
            "search pricing",
            Remainder,
        ),
        spec(
            "focus",
            "Focus on an input field or interactive element",
            "focus",
            "focus search box",
            Remainder,
        ),
        spec(
            "type",
            "Type text into the focused input field",
            "type",
            "type hello world",
            Remainder,
        ),
        spec(
            "press",
            "Press a keyboard key (enter, escape, tab)",
            "press",
            "press enter",
            Remainder,
        ),
        spec(
            "zoom",
            "Zoom in or out on the page",
            "zoom",
            "zoom in",
            Keyword {
                options: vec!["in".to_string()],
                default: "out".to_string(),
            },
        ),
        spec(
            "select",
            "Select text or an option from a dropdown",
            "select",
            "select dark mode",
            Remainder,
        ),
        spec(
            "copy",
            "Copy text from the page",
            "copy",
            "copy heading",
            Remainder,
        ),
        spec(
            "scroll to",
            "Scroll to a specific element on the page",
            "scrollTo",
            "scroll to contact form",
            Remainder,
        ),
        spec(
            "open",
            "Open a link in a new tab",
            "openLink",
            "open documentation",
            Remainder,
        ),
        spec("close", "Close the current tab", "closeTab", "close tab", NoParam),
        spec(
            "maximize",
            "Maximize the browser window",
            "maximize",
            "maximize window",
            NoParam,
        ),
        spec(
            "minimize",
            "Minimize the browser window",
            "minimize",
            "minimize window",
            NoParam,
        ),
        spec(
            "mute",
            "Mute/unmute media on the page",
            "mute",
            "mute video",
            Keyword {
                options: vec!["unmute".to_string()],
                default: "mute".to_string(),
            },
        ),
        spec(
            "play",
            "Play/pause media on the page",
            "playMedia",
            "play video",
            Keyword {
                options: vec!["pause".to_string()],
                default: "play".to_string(),
            },
        ),
        // Selection-based commands
        spec(
            "summarize selection",
            "Generate an AI summary of the selected text",
            "SUMMARIZE_SELECTION",
            "summarize this selection",
            NoParam,
        ),
        spec(
            "screenshot selection",
            "Take a screenshot of the selected area",
            "SCREENSHOT_SELECTION",
            "take a screenshot of this",
            NoParam,
        ),
        spec(
            "save selection",
            "Save the selected content to a document",
            "SAVE_SELECTION",
            "save this to document",
            NoParam,
        ),
        spec(
            "translate selection",
            "Translate the selected text to another language",
            "TRANSLATE_SELECTION",
            "translate this to spanish",
            TrailingLanguage {
                default: "english".to_string(),
            },
        ),
        spec(
            "analyze selection",
            "Analyze the sentiment and key points of the selected text",
            "ANALYZE_SELECTION",
            "analyze this text",
            NoParam,
        ),
    ]
}
