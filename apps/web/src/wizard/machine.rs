//! Wizard state machine.
//!
//! ```text
//! Upload ──file accepted──▶ RoleSelect ──role chosen──▶ Analyzing ──5s──▶ navigate
//! ```
//!
//! Forward-only. Once `Analyzing` begins the navigation timer cannot be
//! cancelled, and it fires at most once per wizard.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::analysis::schedule::{progress_at, AnalysisProgress, ANALYSIS_DELAY};
use crate::catalog::find_by_title;
use crate::wizard::navigation::{Navigator, ResultsDestination};
use crate::wizard::upload::{accept_drop, CandidateFile, UploadedFile};
use crate::wizard::WizardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardState {
    Upload,
    RoleSelect,
    Analyzing,
}

impl WizardState {
    pub const ALL: [WizardState; 3] = [
        WizardState::Upload,
        WizardState::RoleSelect,
        WizardState::Analyzing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WizardState::Upload => "Upload CV",
            WizardState::RoleSelect => "Select Role",
            WizardState::Analyzing => "Analysis",
        }
    }

    pub fn position(&self) -> usize {
        match self {
            WizardState::Upload => 0,
            WizardState::RoleSelect => 1,
            WizardState::Analyzing => 2,
        }
    }
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What choosing a role did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleOutcome {
    /// Role stored and the navigation timer started.
    Scheduled,
    /// Same role chosen again while analyzing; nothing new was scheduled.
    AlreadyScheduled,
}

#[derive(Debug)]
pub struct Wizard {
    state: WizardState,
    file: Option<UploadedFile>,
    role: Option<String>,
    analysis_started: Option<Instant>,
    timer: Option<JoinHandle<()>>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            state: WizardState::Upload,
            file: None,
            role: None,
            analysis_started: None,
            timer: None,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Runs a drop through the upload filter. Returns `Ok(false)` when the drop
    /// was refused, leaving the wizard untouched.
    pub fn on_file_dropped(&mut self, candidates: Vec<CandidateFile>) -> Result<bool, WizardError> {
        self.expect_state(WizardState::Upload, "upload a CV")?;

        let offered = candidates.len();
        match accept_drop(candidates) {
            Some(file) => {
                self.on_file_accepted(file)?;
                Ok(true)
            }
            None => {
                debug!(offered, "Drop refused by upload filter");
                Ok(false)
            }
        }
    }

    pub fn on_file_accepted(&mut self, file: UploadedFile) -> Result<(), WizardError> {
        self.expect_state(WizardState::Upload, "upload a CV")?;

        info!(
            file = file.name(),
            mime = file.mime(),
            size_bytes = file.size(),
            "CV accepted"
        );
        self.file = Some(file);
        self.state = WizardState::RoleSelect;
        Ok(())
    }

    /// Stores the role and starts the navigation timer.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn on_role_chosen(
        &mut self,
        role_label: &str,
        navigator: Arc<dyn Navigator>,
    ) -> Result<RoleOutcome, WizardError> {
        if self.state == WizardState::Analyzing {
            return match self.role.as_deref() {
                Some(chosen) if chosen == role_label => Ok(RoleOutcome::AlreadyScheduled),
                Some(chosen) => Err(WizardError::RoleLocked(chosen.to_string())),
                None => Err(WizardError::InvalidTransition {
                    state: self.state,
                    action: "choose a role",
                }),
            };
        }
        self.expect_state(WizardState::RoleSelect, "choose a role")?;

        let record = find_by_title(role_label)
            .ok_or_else(|| WizardError::UnknownRole(role_label.to_string()))?;

        self.role = Some(record.title.to_string());
        self.state = WizardState::Analyzing;
        self.analysis_started = Some(Instant::now());

        let destination = ResultsDestination::new(record.title);
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(ANALYSIS_DELAY).await;
            info!(role = %destination.role, "Analysis delay elapsed, navigating to results");
            navigator.navigate(destination).await;
        }));

        info!(role = record.title, "Role chosen, analysis started");
        Ok(RoleOutcome::Scheduled)
    }

    /// Cosmetic progress of the analysis step, if it has started.
    pub fn progress(&self) -> Option<AnalysisProgress> {
        self.analysis_started
            .map(|started| progress_at(started.elapsed()))
    }

    /// True once the navigation timer has fired and the handoff completed.
    pub fn navigation_fired(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| t.is_finished())
    }

    fn expect_state(&self, expected: WizardState, action: &'static str) -> Result<(), WizardError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                state: self.state,
                action,
            })
        }
    }
}
