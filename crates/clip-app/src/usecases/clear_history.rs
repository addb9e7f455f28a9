use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use clip_core::ports::HistoryStorePort;

use crate::outcome::ActionOutcome;

/// Deletes the whole history. Irreversible, no confirmation.
pub struct ClearHistory {
    history: Arc<dyn HistoryStorePort>,
}

impl ClearHistory {
    pub fn new(history: Arc<dyn HistoryStorePort>) -> Self {
        Self { history }
    }

    #[tracing::instrument(name = "usecase.clear_history.execute", skip(self))]
    pub async fn execute(&self) -> Result<ActionOutcome> {
        self.history.clear().await?;
        info!("Cleared clipboard history");
        Ok(ActionOutcome::Cleared)
    }
}
