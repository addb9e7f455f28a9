use anyhow::Result;

/// Simulates the platform copy/paste shortcuts in the focused application.
///
/// Emission is fire-and-forget: returning `Ok` only means the key events were
/// posted, not that the target application has handled them yet.
pub trait KeystrokePort: Send + Sync {
    fn emit_copy(&self) -> Result<()>;

    fn emit_paste(&self) -> Result<()>;
}
