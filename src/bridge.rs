//! # Bridge Module
//!
//! The per-session processing loop: pull one sample from the source, run it
//! through the mapper, hand the resulting frame to the sink. Samples are
//! serialized by the source; there is never an overlapping invocation of the
//! mapper.
//!
//! ## Error policy
//!
//! A control session is expected to run for as long as the pilot is flying,
//! so per-sample problems must not end it:
//!
//! - a malformed sample or one with too few axes/buttons is dropped with a
//!   warning and the loop continues;
//! - an I/O failure on either stream is fatal and aborts the session.

use tracing::{info, warn};

use crate::error::{Joy2RcError, Result};
use crate::mapper::Mapper;
use crate::transport::{CommandSink, SampleSource};

/// Samples between progress log lines (~20 seconds at a 50Hz joystick rate)
const LOG_INTERVAL_SAMPLES: u64 = 1000;

/// Counters for a completed session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Commands handed to the sink.
    pub published: u64,
    /// Samples dropped as malformed or out of bounds.
    pub dropped: u64,
}

/// Runs the processing loop until the input stream ends.
///
/// # Errors
///
/// Returns an error on I/O failure of either stream. Per-sample mapping
/// errors are logged and counted in [`SessionStats::dropped`] instead.
pub async fn run<S, K>(source: &mut S, sink: &mut K, mapper: &Mapper) -> Result<SessionStats>
where
    S: SampleSource,
    K: CommandSink,
{
    let mut stats = SessionStats::default();

    loop {
        let sample = match source.next_sample().await {
            Ok(Some(sample)) => sample,
            Ok(None) => break,
            Err(Joy2RcError::Sample(err)) => {
                warn!("Dropping malformed sample: {}", err);
                stats.dropped += 1;
                continue;
            }
            Err(err) => return Err(err),
        };

        match mapper.map(&sample) {
            Ok(command) => {
                sink.publish(&command).await?;
                stats.published += 1;

                if stats.published % LOG_INTERVAL_SAMPLES == 0 {
                    info!(
                        "Published {} RC commands ({} samples dropped)",
                        stats.published, stats.dropped
                    );
                }
            }
            Err(err @ Joy2RcError::IndexOutOfRange { .. }) => {
                warn!("Dropping sample: {}", err);
                stats.dropped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    info!(
        "Input stream ended: {} RC commands published, {} samples dropped",
        stats.published, stats.dropped
    );
    Ok(stats)
}
