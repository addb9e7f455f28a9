//! Chooser adapter backed by an external process.
//!
//! Request lines are written to the child's stdin, one per line; the selected
//! line is read from its stdout. A non-zero exit status means the user
//! cancelled or the chooser failed.

use std::process::Stdio;

use async_trait::async_trait;
use clip_core::ports::{ChooserError, ChooserPort};
use clip_core::ChooserConfig;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

pub struct ProcessChooser {
    config: ChooserConfig,
}

impl ProcessChooser {
    pub fn new(config: ChooserConfig) -> Self {
        Self { config }
    }
}

fn render_request(lines: &[String]) -> String {
    let mut input = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        input.push_str(line);
        input.push('\n');
    }
    input
}

#[async_trait]
impl ChooserPort for ProcessChooser {
    #[tracing::instrument(
        name = "platform.chooser.choose",
        skip(self, lines),
        fields(program = %self.config.program, options = lines.len())
    )]
    async fn choose(&self, lines: &[String]) -> Result<String, ChooserError> {
        let mut child = Command::new(&self.config.program)
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ChooserError::Spawn {
                program: self.config.program.clone(),
                source,
            })?;

        let request = render_request(lines);
        let stdin = child.stdin.take();
        let write_request = async move {
            if let Some(mut stdin) = stdin {
                match stdin.write_all(request.as_bytes()).await {
                    // The chooser may exit without reading everything.
                    Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                    Err(e) => return Err(e),
                    Ok(()) => {}
                }
                // Dropping stdin closes the pipe and signals end of input.
            }
            Ok(())
        };

        let (written, output) = tokio::join!(write_request, child.wait_with_output());
        let output = output?;
        written?;

        if !output.status.success() {
            debug!(code = ?output.status.code(), "Chooser exited unsuccessfully");
            return Err(ChooserError::NonZeroExit {
                code: output.status.code(),
            });
        }

        let response = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if response.is_empty() {
            return Err(ChooserError::EmptyResponse);
        }

        debug!(response = %response, "Chooser returned a selection");
        Ok(response)
    }
}
