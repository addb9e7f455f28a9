//! Test doubles for the clipboard, keystroke, history and chooser ports.

use std::sync::Mutex;

use async_trait::async_trait;
use clip_core::ports::{
    ChooserError, ChooserPort, HistoryStoreError, HistoryStorePort, KeystrokePort,
    SystemClipboardPort,
};
use clip_core::ClipEntry;

mockall::mock! {
    pub Keystroke {}

    impl KeystrokePort for Keystroke {
        fn emit_copy(&self) -> anyhow::Result<()>;
        fn emit_paste(&self) -> anyhow::Result<()>;
    }
}

/// Clipboard holding at most one entry and recording every write.
#[derive(Default)]
pub struct FakeClipboard {
    pub content: Mutex<Option<ClipEntry>>,
    pub writes: Mutex<Vec<ClipEntry>>,
}

impl FakeClipboard {
    pub fn holding(entry: ClipEntry) -> Self {
        Self {
            content: Mutex::new(Some(entry)),
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn writes(&self) -> Vec<ClipEntry> {
        self.writes.lock().unwrap().clone()
    }
}

impl SystemClipboardPort for FakeClipboard {
    fn read_entry(&self) -> anyhow::Result<Option<ClipEntry>> {
        Ok(self.content.lock().unwrap().clone())
    }

    fn write_entry(&self, entry: &ClipEntry) -> anyhow::Result<()> {
        *self.content.lock().unwrap() = Some(entry.clone());
        self.writes.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

/// Clipboard that is never reachable, like a session without a display.
#[derive(Default)]
pub struct UnavailableClipboard;

impl SystemClipboardPort for UnavailableClipboard {
    fn read_entry(&self) -> anyhow::Result<Option<ClipEntry>> {
        Err(anyhow::anyhow!("no display"))
    }

    fn write_entry(&self, _entry: &ClipEntry) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("no display"))
    }
}

/// In-memory history; `broken` makes every operation fail like an unreadable file.
#[derive(Default)]
pub struct MemoryHistory {
    pub entries: Mutex<Vec<ClipEntry>>,
    pub broken: bool,
}

impl MemoryHistory {
    pub fn with_entries(entries: Vec<ClipEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            broken: false,
        }
    }

    pub fn broken() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            broken: true,
        }
    }

    pub fn snapshot(&self) -> Vec<ClipEntry> {
        self.entries.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), HistoryStoreError> {
        if self.broken {
            return Err(HistoryStoreError::Read {
                path: "/unreadable/history.log".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl HistoryStorePort for MemoryHistory {
    async fn append(&self, entry: &ClipEntry) -> Result<(), HistoryStoreError> {
        self.check()?;
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Vec<ClipEntry>, HistoryStoreError> {
        self.check()?;
        Ok(self.snapshot())
    }

    async fn clear(&self) -> Result<(), HistoryStoreError> {
        self.check()?;
        self.entries.lock().unwrap().clear();
        Ok(())
    }
}

/// Chooser that always gives the same answer and records each request.
pub struct FixedChooser {
    pub response: Result<String, i32>,
    pub requests: Mutex<Vec<Vec<String>>>,
}

impl FixedChooser {
    pub fn answering(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn cancelling() -> Self {
        Self {
            response: Err(1),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ChooserPort for FixedChooser {
    async fn choose(&self, lines: &[String]) -> Result<String, ChooserError> {
        self.requests.lock().unwrap().push(lines.to_vec());
        match &self.response {
            Ok(line) => Ok(line.clone()),
            Err(code) => Err(ChooserError::NonZeroExit { code: Some(*code) }),
        }
    }
}
