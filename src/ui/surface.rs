//! Outbound control-surface interface and the terminal renderer.

use crossterm::{
    cursor::MoveToColumn,
    style::Print,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use std::io::Write;

/// Width of the rendered seek bar in terminal cells.
const SEEK_BAR_CELLS: i64 = 30;

/// Play/pause affordance states mirrored onto the surface.
///
/// `Playing` renders the affordance a press would turn into a pause,
/// matching the polled transport state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayPauseIcon {
    Playing,
    Paused,
}

/// UI mutations the controller reports to the host toolkit.
///
/// The controller is the sole writer; implementations only need to render
/// the pushed state. The seek input and its secondary (buffered) indicator
/// share a fixed 0-1000 scale.
pub trait ControlSurface: Send {
    fn set_visible(&mut self, visible: bool);
    fn set_seek_fraction(&mut self, fraction: i64);
    fn set_buffered_fraction(&mut self, fraction: i64);
    fn set_position_text(&mut self, text: &str);
    fn set_duration_text(&mut self, text: &str);
    fn set_play_pause_icon(&mut self, icon: PlayPauseIcon);
    fn set_play_pause_enabled(&mut self, enabled: bool);
    fn set_seek_enabled(&mut self, enabled: bool);
}

/// Renders the control surface as a single rewritten terminal line.
pub struct TermSurface {
    visible: bool,
    seek_fraction: i64,
    buffered_fraction: i64,
    position_text: String,
    duration_text: String,
    icon: PlayPauseIcon,
    play_pause_enabled: bool,
    seek_enabled: bool,
}

impl TermSurface {
    pub fn new() -> Self {
        TermSurface {
            visible: false,
            seek_fraction: 0,
            buffered_fraction: 0,
            position_text: "00:00".to_string(),
            duration_text: "00:00".to_string(),
            icon: PlayPauseIcon::Paused,
            play_pause_enabled: true,
            seek_enabled: true,
        }
    }

    /// Builds the line shown while the surface is visible.
    pub(crate) fn status_line(&self) -> String {
        let icon = match (self.play_pause_enabled, self.icon) {
            (false, _) => "-",
            (true, PlayPauseIcon::Playing) => "||",
            (true, PlayPauseIcon::Paused) => ">",
        };

        let filled = (self.seek_fraction.clamp(0, 1000) * SEEK_BAR_CELLS / 1000) as usize;
        let mut bar = String::with_capacity(SEEK_BAR_CELLS as usize);
        for cell in 0..SEEK_BAR_CELLS as usize {
            bar.push(if cell < filled { '=' } else { '-' });
        }
        if !self.seek_enabled {
            bar = "#".repeat(SEEK_BAR_CELLS as usize);
        }

        format!(
            "[{:>2}] {} [{}] {} (buffered {}%)",
            icon,
            self.position_text,
            bar,
            self.duration_text,
            self.buffered_fraction.clamp(0, 1000) / 10,
        )
    }

    fn redraw(&self) {
        let mut stdout = std::io::stdout();
        let line = if self.visible {
            self.status_line()
        } else {
            String::new()
        };
        // Status-line rendering is best effort; write errors are ignored
        let _ = stdout
            .execute(MoveToColumn(0))
            .and_then(|out| out.execute(Clear(ClearType::CurrentLine)))
            .and_then(|out| out.execute(Print(&line)));
        let _ = stdout.flush();
    }
}

impl Default for TermSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlSurface for TermSurface {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.redraw();
    }

    fn set_seek_fraction(&mut self, fraction: i64) {
        self.seek_fraction = fraction;
        self.redraw();
    }

    fn set_buffered_fraction(&mut self, fraction: i64) {
        self.buffered_fraction = fraction;
        self.redraw();
    }

    fn set_position_text(&mut self, text: &str) {
        self.position_text = text.to_string();
        self.redraw();
    }

    fn set_duration_text(&mut self, text: &str) {
        self.duration_text = text.to_string();
        self.redraw();
    }

    fn set_play_pause_icon(&mut self, icon: PlayPauseIcon) {
        self.icon = icon;
        self.redraw();
    }

    fn set_play_pause_enabled(&mut self, enabled: bool) {
        self.play_pause_enabled = enabled;
        self.redraw();
    }

    fn set_seek_enabled(&mut self, enabled: bool) {
        self.seek_enabled = enabled;
        self.redraw();
    }
}
