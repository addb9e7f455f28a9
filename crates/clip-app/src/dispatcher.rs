//! Maps a CLI action flag onto exactly one use case and runs it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::error;

use crate::deps::AppDeps;
use crate::outcome::ActionOutcome;
use crate::selection::SelectionController;
use crate::usecases::{
    CaptureClipboard, CaptureMode, ClearHistory, PasteLastEntry, PasteSelectedEntry,
};

/// One invocation's worth of work, selected by a single-character flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `c`: emit the copy shortcut, then capture.
    CaptureWithEmission,
    /// `C`: capture what the clipboard already holds.
    CaptureOnly,
    /// `v`: paste the newest entry.
    PasteLast,
    /// `P`: pick an entry in the chooser and paste it.
    PasteSelect,
    /// `x`: delete the history.
    Clear,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::CaptureWithEmission,
        Action::CaptureOnly,
        Action::PasteLast,
        Action::PasteSelect,
        Action::Clear,
    ];

    pub fn flag(self) -> char {
        match self {
            Action::CaptureWithEmission => 'c',
            Action::CaptureOnly => 'C',
            Action::PasteLast => 'v',
            Action::PasteSelect => 'P',
            Action::Clear => 'x',
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action {0:?}")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    /// Flags are case-sensitive: `c` and `C` are different actions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(flag), None) => Action::ALL
                .into_iter()
                .find(|action| action.flag() == flag)
                .ok_or_else(|| UnknownAction(s.to_string())),
            _ => Err(UnknownAction(s.to_string())),
        }
    }
}

/// Runs actions against a fixed set of ports.
pub struct ActionDispatcher {
    deps: AppDeps,
}

impl ActionDispatcher {
    pub fn new(deps: AppDeps) -> Self {
        Self { deps }
    }

    /// Run `action` to completion.
    ///
    /// Failures are logged and reported as [`ActionOutcome::Failed`]; they are
    /// never propagated, so the caller can always exit normally.
    #[tracing::instrument(name = "dispatcher.dispatch", skip(self), fields(action = %action))]
    pub async fn dispatch(&self, action: Action) -> ActionOutcome {
        match self.run(action).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(error = %format!("{err:#}"), "Action failed");
                ActionOutcome::Failed
            }
        }
    }

    async fn run(&self, action: Action) -> anyhow::Result<ActionOutcome> {
        let deps = &self.deps;
        match action {
            Action::CaptureWithEmission | Action::CaptureOnly => {
                let mode = if action == Action::CaptureWithEmission {
                    CaptureMode::WithCopyShortcut
                } else {
                    CaptureMode::ClipboardOnly
                };
                CaptureClipboard::new(
                    deps.clipboard.clone(),
                    deps.keystroke.clone(),
                    deps.history.clone(),
                )
                .execute(mode)
                .await
            }
            Action::PasteLast => {
                PasteLastEntry::new(
                    deps.clipboard.clone(),
                    deps.keystroke.clone(),
                    deps.history.clone(),
                )
                .execute()
                .await
            }
            Action::PasteSelect => {
                PasteSelectedEntry::new(
                    deps.clipboard.clone(),
                    deps.keystroke.clone(),
                    deps.history.clone(),
                    SelectionController::new(deps.chooser.clone()),
                )
                .execute()
                .await
            }
            Action::Clear => ClearHistory::new(deps.history.clone()).execute().await,
        }
    }
}
