//! Playback progress controller
//!
//! Owns the transient UI-facing playback state (visibility, drag state, last
//! polled position), keeps the control surface in sync with the bound
//! [`PlayerControl`], and turns seek gestures and play/pause toggles into
//! transport commands. All mutation happens on the run-loop task; delayed
//! work goes through the [`Scheduler`] seam.

use crate::player::{PlayerControl, PlayerError};
use crate::scheduler::{ControllerTask, Scheduler};
use crate::ui::{ControlSurface, PlayPauseIcon};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, trace};

mod command;
mod run_loop;

pub use command::ControllerCommand;
pub use run_loop::run_controller_loop;

const LOG_TARGET: &str = "mediactl::controller";

/// Scale of the seek input's primary and secondary values.
pub const SEEK_INPUT_MAX: i64 = 1000;

/// Errors returned by controller operations.
#[derive(Debug)]
pub enum ControllerError {
    /// The operation needs a bound player and `attach` has not been called.
    /// Operations that the original controller tolerated without a player
    /// (`refresh_progress`, the periodic tick, `hide`) no-op instead.
    NotAttached(&'static str),
}

impl std::fmt::Display for ControllerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerError::NotAttached(operation) => {
                write!(f, "no player attached: {}", operation)
            }
        }
    }
}

impl Error for ControllerError {}

/// Formats a millisecond position as `MM:SS`, or `H:MM:SS` from one hour up.
/// Negative inputs render as zero.
pub fn format_time(ms: i64) -> String {
    let total_seconds = ms.max(0) / 1000;

    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Controller for a media control surface.
///
/// Single-writer by construction: the run loop is the only caller, so the
/// state fields need no synchronization. While a drag gesture is active the
/// gesture is the sole owner of the seek input's displayed value.
pub struct PlaybackController {
    player: Option<Arc<dyn PlayerControl>>,
    surface: Box<dyn ControlSurface>,
    scheduler: Box<dyn Scheduler>,

    visible: bool,
    dragging: bool,
    last_position_ms: i64,
}

impl PlaybackController {
    pub fn new(surface: Box<dyn ControlSurface>, scheduler: Box<dyn Scheduler>) -> Self {
        PlaybackController {
            player: None,
            surface,
            scheduler,
            visible: false,
            dragging: false,
            last_position_ms: 0,
        }
    }

    /// Binds the control surface to a player and reflects its transport
    /// state on the play/pause icon.
    pub async fn attach(&mut self, player: Arc<dyn PlayerControl>) {
        debug!(target: LOG_TARGET, "Attaching player to controller.");
        self.player = Some(player);
        self.update_play_pause().await;
    }

    /// Whether the control surface is currently shown.
    pub fn is_showing(&self) -> bool {
        self.visible
    }

    fn bound_player(
        &self,
        operation: &'static str,
    ) -> Result<Arc<dyn PlayerControl>, ControllerError> {
        self.player
            .clone()
            .ok_or(ControllerError::NotAttached(operation))
    }

    /// Pauses when playing, starts otherwise, then refreshes the icon.
    pub async fn toggle_play_pause(&mut self) -> Result<(), ControllerError> {
        let player = self.bound_player("toggle_play_pause")?;
        if player.is_playing().await {
            player.pause().await;
        } else {
            player.start().await;
        }
        self.update_play_pause().await;
        Ok(())
    }

    /// Polls the player and pushes position, duration and buffer state to
    /// the surface. Returns 0 without touching the surface when no player is
    /// bound or a drag gesture owns the seek input.
    pub async fn refresh_progress(&mut self) -> i64 {
        let player = match &self.player {
            Some(player) => player.clone(),
            None => return 0,
        };
        if self.dragging {
            return 0;
        }

        let position = player.current_position_ms().await;
        let duration = player.duration_ms().await;
        if duration > 0 {
            self.surface
                .set_seek_fraction(SEEK_INPUT_MAX * position / duration);
        }
        let percent = player.buffer_percentage().await;
        self.surface.set_buffered_fraction(percent * 10);

        self.surface.set_duration_text(&format_time(duration));
        self.surface.set_position_text(&format_time(position));

        self.last_position_ms = position;
        position
    }

    /// Starts a seek gesture. The pending refresh is cancelled so no poll
    /// can overwrite the seek input until the gesture ends.
    #[instrument(skip(self))]
    pub async fn begin_drag(&mut self) -> Result<(), ControllerError> {
        self.bound_player("begin_drag")?;
        self.dragging = true;
        self.show(0).await?;
        self.scheduler.cancel(ControllerTask::Refresh);
        Ok(())
    }

    /// Applies a gesture movement: seeks to `fraction` of the duration on
    /// the 0-1000 scale and optimistically updates the position label.
    /// Ignored unless a drag gesture is active, so programmatic seek-input
    /// changes never issue transport commands.
    pub async fn drag_to(&mut self, fraction: i64) -> Result<(), ControllerError> {
        if !self.dragging {
            trace!(target: LOG_TARGET, fraction, "Ignoring seek-input change outside a drag gesture.");
            return Ok(());
        }
        let player = self.bound_player("drag_to")?;

        let fraction = fraction.clamp(0, SEEK_INPUT_MAX);
        let duration = player.duration_ms().await;
        let new_position = duration * fraction / SEEK_INPUT_MAX;
        player.seek_to(new_position).await;
        self.surface.set_position_text(&format_time(new_position));
        Ok(())
    }

    /// Ends the seek gesture: one refresh, icon update, show, and an
    /// explicit re-arm of the periodic refresh (show alone is not relied on
    /// to re-arm when the surface was already visible).
    #[instrument(skip(self))]
    pub async fn end_drag(&mut self) -> Result<(), ControllerError> {
        self.bound_player("end_drag")?;
        self.dragging = false;
        self.refresh_progress().await;
        self.update_play_pause().await;
        self.show(0).await?;
        self.scheduler
            .schedule(ControllerTask::Refresh, Duration::ZERO);
        Ok(())
    }

    /// Shows the control surface. When newly shown this runs one refresh,
    /// updates the icon and disables unsupported affordances. In all cases
    /// the icon is refreshed and the periodic refresh re-armed. A positive
    /// `timeout_ms` replaces any pending auto-hide with a new one.
    #[instrument(skip(self))]
    pub async fn show(&mut self, timeout_ms: u64) -> Result<(), ControllerError> {
        self.bound_player("show")?;

        if !self.visible {
            debug!(target: LOG_TARGET, "Showing control surface.");
            self.surface.set_visible(true);
            self.refresh_progress().await;
            self.update_play_pause().await;
            self.disable_unsupported_controls().await;
            self.visible = true;
        }

        self.update_play_pause().await;
        self.scheduler
            .schedule(ControllerTask::Refresh, Duration::ZERO);

        if timeout_ms > 0 {
            self.scheduler.cancel(ControllerTask::Hide);
            self.scheduler
                .schedule(ControllerTask::Hide, Duration::from_millis(timeout_ms));
        }
        Ok(())
    }

    /// Hides the control surface and stops the periodic refresh. Idempotent.
    pub fn hide(&mut self) {
        if self.visible {
            debug!(target: LOG_TARGET, "Hiding control surface.");
            self.scheduler.cancel(ControllerTask::Refresh);
            self.surface.set_visible(false);
            self.visible = false;
        }
    }

    /// One firing of the periodic refresh. Reschedules itself aligned to the
    /// next whole playback second while the surface is visible, no drag is
    /// active and the transport is advancing; otherwise the task ends here.
    pub async fn periodic_refresh_tick(&mut self) {
        self.refresh_progress().await;

        let playing = match &self.player {
            Some(player) => player.is_playing().await,
            None => false,
        };
        if !self.dragging && self.visible && playing {
            let delay = 1000 - self.last_position_ms.rem_euclid(1000);
            self.scheduler
                .schedule(ControllerTask::Refresh, Duration::from_millis(delay as u64));
        }
    }

    /// Forces both affordances to `enabled`, then re-applies the capability
    /// probes so unsupported controls stay disabled.
    pub async fn set_enabled(&mut self, enabled: bool) -> Result<(), ControllerError> {
        self.bound_player("set_enabled")?;
        self.surface.set_play_pause_enabled(enabled);
        self.surface.set_seek_enabled(enabled);
        self.disable_unsupported_controls().await;
        Ok(())
    }

    /// Disable pause or seek affordances the bound player cannot honor. A
    /// probe the player does not implement counts as supported.
    async fn disable_unsupported_controls(&mut self) {
        let player = match &self.player {
            Some(player) => player.clone(),
            None => return,
        };

        if !fail_open(player.can_pause().await, "can_pause") {
            self.surface.set_play_pause_enabled(false);
        }
        let can_seek = fail_open(player.can_seek_forward().await, "can_seek_forward")
            || fail_open(player.can_seek_backward().await, "can_seek_backward");
        if !can_seek {
            self.surface.set_seek_enabled(false);
        }
    }

    async fn update_play_pause(&mut self) {
        if let Some(player) = self.player.clone() {
            let icon = if player.is_playing().await {
                PlayPauseIcon::Playing
            } else {
                PlayPauseIcon::Paused
            };
            self.surface.set_play_pause_icon(icon);
        }
    }
}

fn fail_open(probe: Result<bool, PlayerError>, name: &str) -> bool {
    match probe {
        Ok(supported) => supported,
        Err(e) => {
            debug!(target: LOG_TARGET, "Probe {} unavailable, treating as supported: {}", name, e);
            true
        }
    }
}
