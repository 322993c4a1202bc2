//! vox_core - natural-language command interpretation.
//!
//! Maps free-form utterances onto a fixed catalog of executable commands,
//! tolerating polite prefixes, filler words, typos and partial matches.
//! The pipeline is: compiled pattern match, then edit-distance fallback,
//! then verb-overlap fallback; the result is always a structured
//! [`Interpretation`], which the [`ResponsePolicy`] turns into an
//! execute / confirm / suggest / error directive.
//!
//! The engine is synchronous and side-effect-free. Utterance capture and
//! action execution are external collaborators: callers feed text in one
//! string at a time and hand directives to an [`ActionExecutor`].

pub mod catalog;
pub mod error;
pub mod exec;
pub mod interpret;
pub mod pattern;
pub mod policy;
pub mod registry;
pub mod similarity;

pub use error::VoxError;
pub use exec::{ActionExecutor, ExecOutcome};
pub use interpret::{Interpretation, Interpreter};
pub use policy::{PolicyConfig, ResponseDirective, ResponsePolicy, Suggestion};
pub use registry::{CommandSpec, ParamExtractor, Registry};
pub use similarity::similarity;
