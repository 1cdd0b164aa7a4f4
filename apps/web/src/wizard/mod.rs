// Upload → role selection → timed analysis wizard.
// The state machine is in `machine`; `session` keeps one machine per browser
// session and turns the timer's navigation into a redirect.

pub mod handlers;
pub mod machine;
pub mod navigation;
pub mod session;
pub mod upload;

use thiserror::Error;

use crate::wizard::machine::WizardState;

/// Misuse of the wizard. Rejected file types are not errors; they are dropped silently.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Cannot {action} during the {state} step")]
    InvalidTransition {
        state: WizardState,
        action: &'static str,
    },

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Role is already set to {0}")]
    RoleLocked(String),
}
