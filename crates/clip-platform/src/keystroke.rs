use anyhow::{anyhow, Result};
use clip_core::ports::KeystrokePort;
use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use tracing::debug;

#[cfg(target_os = "macos")]
const SHORTCUT_MODIFIER: Key = Key::Meta;

#[cfg(not(target_os = "macos"))]
const SHORTCUT_MODIFIER: Key = Key::Control;

/// Posts the platform copy (`⌘C` / `Ctrl+C`) and paste (`⌘V` / `Ctrl+V`)
/// shortcuts to the focused application using enigo.
///
/// A fresh enigo connection is opened per emission; the process only ever
/// emits one shortcut per invocation.
#[derive(Debug, Default)]
pub struct EnigoKeystroke;

impl EnigoKeystroke {
    pub fn new() -> Self {
        Self
    }

    fn emit_shortcut(&self, key: char) -> Result<()> {
        let mut enigo = Enigo::new(&Settings::default())
            .map_err(|e| anyhow!("Failed to connect to input system: {}", e))?;

        enigo
            .key(SHORTCUT_MODIFIER, Direction::Press)
            .map_err(|e| anyhow!("Failed to press modifier: {}", e))?;
        let clicked = enigo.key(Key::Unicode(key), Direction::Click);
        // Always release the modifier, even if the click failed.
        let released = enigo.key(SHORTCUT_MODIFIER, Direction::Release);

        clicked.map_err(|e| anyhow!("Failed to emit `{}` key: {}", key, e))?;
        released.map_err(|e| anyhow!("Failed to release modifier: {}", e))?;

        debug!(key = %key, "Emitted shortcut");
        Ok(())
    }
}

impl KeystrokePort for EnigoKeystroke {
    fn emit_copy(&self) -> Result<()> {
        self.emit_shortcut('c')
    }

    fn emit_paste(&self) -> Result<()> {
        self.emit_shortcut('v')
    }
}
