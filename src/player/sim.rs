//! Clock-driven stand-in for a real playback engine.

use super::{PlayerControl, PlayerError};
use async_trait::async_trait;
use tokio::sync::Mutex as TokioMutex;
use tokio::time::Instant;
use tracing::debug;

const LOG_TARGET: &str = "mediactl::player::sim";

/// A player whose position advances with the tokio clock while playing.
///
/// Used by the demo binary and integration tests in place of the decoding
/// engine the controller is normally bound to. The position saturates at the
/// media duration; the simulated buffer stays a fixed window ahead of the
/// playhead.
pub struct SimulatedPlayer {
    duration_ms: i64,
    state: TokioMutex<SimState>,
}

#[derive(Debug)]
struct SimState {
    playing: bool,
    // Position at the moment of the last start/pause/seek transition.
    position_ms: i64,
    resumed_at: Option<Instant>,
}

impl SimState {
    fn position_now(&self) -> i64 {
        match self.resumed_at {
            Some(resumed_at) if self.playing => {
                self.position_ms + resumed_at.elapsed().as_millis() as i64
            }
            _ => self.position_ms,
        }
    }
}

impl SimulatedPlayer {
    /// Creates a stopped player positioned at zero. Durations below 1 ms are
    /// clamped up so position math never divides by zero.
    pub fn new(duration_ms: i64) -> Self {
        SimulatedPlayer {
            duration_ms: duration_ms.max(1),
            state: TokioMutex::new(SimState {
                playing: false,
                position_ms: 0,
                resumed_at: None,
            }),
        }
    }
}

#[async_trait]
impl PlayerControl for SimulatedPlayer {
    async fn is_playing(&self) -> bool {
        self.state.lock().await.playing
    }

    async fn start(&self) {
        let mut state = self.state.lock().await;
        if !state.playing {
            debug!(target: LOG_TARGET, position_ms = state.position_ms, "Starting simulated playback.");
            state.playing = true;
            state.resumed_at = Some(Instant::now());
        }
    }

    async fn pause(&self) {
        let mut state = self.state.lock().await;
        if state.playing {
            state.position_ms = state.position_now().min(self.duration_ms);
            state.playing = false;
            state.resumed_at = None;
            debug!(target: LOG_TARGET, position_ms = state.position_ms, "Paused simulated playback.");
        }
    }

    async fn seek_to(&self, position_ms: i64) {
        let mut state = self.state.lock().await;
        state.position_ms = position_ms.clamp(0, self.duration_ms);
        if state.playing {
            state.resumed_at = Some(Instant::now());
        }
        debug!(target: LOG_TARGET, position_ms = state.position_ms, "Seeked simulated playback.");
    }

    async fn current_position_ms(&self) -> i64 {
        let state = self.state.lock().await;
        state.position_now().min(self.duration_ms)
    }

    async fn duration_ms(&self) -> i64 {
        self.duration_ms
    }

    async fn buffer_percentage(&self) -> i64 {
        let state = self.state.lock().await;
        let position = state.position_now().min(self.duration_ms);
        (position * 100 / self.duration_ms + 25).min(100)
    }

    async fn can_pause(&self) -> Result<bool, PlayerError> {
        Ok(true)
    }

    async fn can_seek_forward(&self) -> Result<bool, PlayerError> {
        Ok(true)
    }

    async fn can_seek_backward(&self) -> Result<bool, PlayerError> {
        Ok(true)
    }
}
