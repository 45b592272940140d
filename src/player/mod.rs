//! Player transport capability seam
//!
//! The controller never owns a playback engine; it drives whatever
//! [`PlayerControl`] implementation the host injects.

use async_trait::async_trait;
use std::error::Error;

mod sim;

pub use sim::SimulatedPlayer;

/// Error types surfaced by a [`PlayerControl`] implementation.
#[derive(Debug)]
pub enum PlayerError {
    /// The bound player does not implement the named capability probe.
    CapabilityUnavailable(&'static str),
}

impl std::fmt::Display for PlayerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerError::CapabilityUnavailable(probe) => {
                write!(f, "capability query not available: {}", probe)
            }
        }
    }
}

impl Error for PlayerError {}

/// Trait defining the transport controls of an externally managed player.
///
/// Implementations are shared (`Arc<dyn PlayerControl>`) and synchronized by
/// their provider; all methods take `&self`. Positions and durations are
/// milliseconds. `buffer_percentage` is expected to report 0-100; the
/// controller scales it without validating that range.
#[async_trait]
pub trait PlayerControl: Send + Sync {
    /// Whether the transport is currently advancing.
    async fn is_playing(&self) -> bool;

    /// Begins or resumes playback.
    async fn start(&self);

    /// Pauses playback.
    async fn pause(&self);

    /// Seeks to an absolute position in milliseconds.
    async fn seek_to(&self, position_ms: i64);

    /// Current playback position in milliseconds.
    async fn current_position_ms(&self) -> i64;

    /// Total media duration in milliseconds, 0 when unknown.
    async fn duration_ms(&self) -> i64;

    /// Buffered share of the stream, 0-100.
    async fn buffer_percentage(&self) -> i64;

    /// Whether the stream can be paused. Players without the probe return
    /// [`PlayerError::CapabilityUnavailable`]; the controller fails open.
    async fn can_pause(&self) -> Result<bool, PlayerError>;

    /// Whether the stream supports forward seeking.
    async fn can_seek_forward(&self) -> Result<bool, PlayerError>;

    /// Whether the stream supports backward seeking.
    async fn can_seek_backward(&self) -> Result<bool, PlayerError>;
}
