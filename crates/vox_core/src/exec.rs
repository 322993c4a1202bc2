//! The action-executor seam.
//!
//! The interpretation core never performs side effects. Whatever layer
//! receives a `ResponseDirective` hands EXECUTE/CONFIRM dispatches to an
//! [`ActionExecutor`] implementation (browser glue, test double, echo).
//! Executor failures are reported as data here and stay separate from
//! interpretation failures.

use serde::{Deserialize, Serialize};

/// Outcome of one action dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecOutcome {
    pub success: bool,
    pub message: String,
}

impl ExecOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// External collaborator that performs the effect behind an action id.
///
/// Implementations decide their own parameter requirements: a missing
/// required parameter is an executor failure (`success = false`), never
/// an interpretation failure.
pub trait ActionExecutor {
    fn execute(&self, action: &str, params: &[String]) -> ExecOutcome;
}
