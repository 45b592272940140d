use super::{ControllerCommand, PlaybackController, LOG_TARGET};
use crate::scheduler::ControllerTask;
use tokio::sync::mpsc;
use tracing::{error, info, instrument, trace};

/// Runs the controller's command processing loop. This should be spawned as
/// a Tokio task.
///
/// `command_rx` carries gesture commands from the host, `task_rx` the
/// firings of the controller's own delayed tasks (periodic refresh,
/// auto-hide). Commands are drained with priority so a drag gesture always
/// cancels an in-flight refresh before the refresh can run.
/// `show_timeout_ms` is the host's auto-hide policy applied when a
/// play/pause tap re-shows the surface.
#[instrument(skip(controller, command_rx, task_rx))]
pub async fn run_controller_loop(
    mut controller: PlaybackController,
    mut command_rx: mpsc::Receiver<ControllerCommand>,
    mut task_rx: mpsc::Receiver<ControllerTask>,
    show_timeout_ms: u64,
) {
    info!(target: LOG_TARGET, "Controller run loop started.");

    loop {
        tokio::select! {
            biased; // Check commands first

            Some(command) = command_rx.recv() => {
                trace!(target: LOG_TARGET, "Received command: {:?}", command);
                let result = match command {
                    ControllerCommand::TogglePlayPause => {
                        match controller.toggle_play_pause().await {
                            Ok(()) => controller.show(show_timeout_ms).await,
                            Err(e) => Err(e),
                        }
                    }
                    ControllerCommand::BeginDrag => controller.begin_drag().await,
                    ControllerCommand::DragTo { fraction } => controller.drag_to(fraction).await,
                    ControllerCommand::EndDrag => controller.end_drag().await,
                    ControllerCommand::Show { timeout_ms } => controller.show(timeout_ms).await,
                    ControllerCommand::Hide => {
                        controller.hide();
                        Ok(())
                    }
                    ControllerCommand::SetEnabled(enabled) => controller.set_enabled(enabled).await,
                    ControllerCommand::Shutdown => {
                        info!(target: LOG_TARGET, "Shutdown command received. Exiting run loop.");
                        controller.hide();
                        break;
                    }
                };
                if let Err(e) = result {
                    error!(target: LOG_TARGET, "Command {:?} failed: {}", command, e);
                }
            }

            Some(task) = task_rx.recv() => {
                trace!(target: LOG_TARGET, "Delayed task fired: {:?}", task);
                match task {
                    ControllerTask::Refresh => controller.periodic_refresh_tick().await,
                    ControllerTask::Hide => controller.hide(),
                }
            }

            else => {
                // All channels closed, nothing left to drive.
                info!(target: LOG_TARGET, "Command channel closed. Exiting run loop.");
                break;
            }
        }
    }

    info!(target: LOG_TARGET, "Controller run loop finished.");
}
