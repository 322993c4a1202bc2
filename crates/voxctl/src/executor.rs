//! Echo executor - the demo action-executor collaborator.
//!
//! Real deployments put browser or desktop glue behind
//! [`ActionExecutor`]; voxctl ships an executor that only reports what it
//! would dispatch. It still enforces parameter requirements so that
//! missing-parameter failures surface downstream, where they belong.

use vox_core::{ActionExecutor, ExecOutcome};

/// Action ids whose executor requires at least one parameter.
const REQUIRES_PARAM: &[&str] = &[
    "click",
    "navigate",
    "search",
    "focus",
    "type",
    "press",
    "select",
    "copy",
    "scrollTo",
    "openLink",
];

/// Executor that echoes dispatches instead of performing them.
#[derive(Debug, Default)]
pub struct EchoExecutor;

impl ActionExecutor for EchoExecutor {
    fn execute(&self, action: &str, params: &[String]) -> ExecOutcome {
        if params.is_empty() && REQUIRES_PARAM.contains(&action) {
            return ExecOutcome::failed(format!(
                "action '{action}' requires a parameter but none was extracted"
            ));
        }
        if params.is_empty() {
            ExecOutcome::ok(format!("dispatched '{action}'"))
        } else {
            ExecOutcome::ok(format!("dispatched '{action}' with {:?}", params))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_free_action_succeeds() {
        let outcome = EchoExecutor.execute("goBack", &[]);
        assert!(outcome.success);
        assert!(outcome.message.contains("goBack"));
    }

    #[test]
    fn test_missing_required_param_fails() {
        let outcome = EchoExecutor.execute("click", &[]);
        assert!(!outcome.success);
        assert!(outcome.message.contains("requires a parameter"));
    }

    #[test]
    fn test_param_is_echoed() {
        let outcome = EchoExecutor.execute("click", &["submit button".to_string()]);
        assert!(outcome.success);
        assert!(outcome.message.contains("submit button"));
    }
}
