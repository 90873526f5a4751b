//! # Transport Module
//!
//! Seam between the mapper and its external collaborators.
//!
//! The real system subscribes to a joystick topic and publishes RC commands
//! to an autopilot topic; reliability and queue depth are that middleware's
//! concern, not ours. This crate only sees two traits: a [`SampleSource`]
//! that delivers joystick samples one at a time, and a [`CommandSink`] that
//! accepts one RC command per sample. The shipped implementations speak
//! line-delimited JSON over stdin/stdout, which composes with whatever
//! middleware adapter sits outside the process.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

use crate::error::Result;
use crate::joystick::JoystickSample;
use crate::rc::RcCommand;

/// Source of joystick samples.
#[async_trait]
pub trait SampleSource: Send {
    /// Next sample from the input stream, or `None` at end of stream.
    ///
    /// A malformed sample surfaces as an error; the processing loop decides
    /// whether to drop it or abort the session.
    async fn next_sample(&mut self) -> Result<Option<JoystickSample>>;
}

/// Sink for RC command frames.
#[async_trait]
pub trait CommandSink: Send {
    /// Publish one command frame.
    async fn publish(&mut self, command: &RcCommand) -> Result<()>;
}

/// Reads JSON-encoded joystick samples from stdin, one per line.
pub struct StdinSource {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SampleSource for StdinSource {
    async fn next_sample(&mut self) -> Result<Option<JoystickSample>> {
        loop {
            match self.lines.next_line().await? {
                Some(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    return Ok(Some(serde_json::from_str(line)?));
                }
                None => return Ok(None),
            }
        }
    }
}

/// Writes JSON-encoded RC commands to stdout, one per line.
pub struct StdoutSink {
    out: Stdout,
}

impl StdoutSink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: tokio::io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandSink for StdoutSink {
    async fn publish(&mut self, command: &RcCommand) -> Result<()> {
        let mut line = serde_json::to_string(command)?;
        line.push('\n');
        self.out.write_all(line.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}
