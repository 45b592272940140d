/// Commands that can be sent to the controller run loop.
///
/// These are the inbound gesture events of the host UI; the run loop
/// dispatches each to the matching controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerCommand {
    /// Tap on the play/pause affordance.
    TogglePlayPause,
    /// The user grabbed the seek input.
    BeginDrag,
    /// The user moved the seek input to `fraction` on the 0-1000 scale.
    DragTo { fraction: i64 },
    /// The user released the seek input.
    EndDrag,
    /// Show the control surface, auto-hiding after `timeout_ms` when > 0.
    Show { timeout_ms: u64 },
    /// Hide the control surface.
    Hide,
    /// Force-enable or disable the control affordances.
    SetEnabled(bool),
    /// Exit the run loop.
    Shutdown,
}
