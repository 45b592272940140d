use mediactl::config::Settings;
use mediactl::controller::{run_controller_loop, ControllerCommand, PlaybackController};
use mediactl::init_app_dirs;
use mediactl::player::{PlayerControl, SimulatedPlayer};
use mediactl::scheduler::TokioScheduler;
use mediactl::ui::{Cli, TermSurface};
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command-line arguments and initialize CLI
    let cli = Cli::new();
    let args = &cli.args;

    // Initialize application directories
    init_app_dirs()?;

    // Load configuration from file or create default
    let config_path = match &args.config {
        Some(path) => Path::new(path).to_path_buf(),
        None => Settings::default_path(),
    };

    let mut settings = Settings::load(&config_path)?;

    // Override settings with command-line arguments or environment variables
    if let Some(show_timeout_ms) = args.show_timeout_ms {
        settings.show_timeout_ms = show_timeout_ms;
    }
    if let Some(duration_secs) = args.duration_secs {
        settings.media_duration_ms = (duration_secs * 1000) as i64;
    }

    // Validate settings
    settings.validate()?;

    // Bind the controller to a simulated player and start playback
    let player: Arc<dyn PlayerControl> = Arc::new(SimulatedPlayer::new(settings.media_duration_ms));
    let (scheduler, task_rx) = TokioScheduler::new(8);
    let mut controller =
        PlaybackController::new(Box::new(TermSurface::new()), Box::new(scheduler));
    controller.attach(player.clone()).await;

    let (command_tx, command_rx) = mpsc::channel(16);
    let loop_handle = tokio::spawn(run_controller_loop(
        controller,
        command_rx,
        task_rx,
        settings.show_timeout_ms,
    ));

    player.start().await;
    command_tx
        .send(ControllerCommand::Show {
            timeout_ms: settings.show_timeout_ms,
        })
        .await?;

    cli.display_banner();

    // Gesture loop: translate stdin input into controller commands
    loop {
        let input = match cli.read_command() {
            Ok(input) => input,
            Err(e) => {
                cli.display_error(e.as_ref());
                continue;
            }
        };

        match input.as_str() {
            "p" => {
                command_tx.send(ControllerCommand::TogglePlayPause).await?;
            }
            "s" => {
                command_tx
                    .send(ControllerCommand::Show {
                        timeout_ms: settings.show_timeout_ms,
                    })
                    .await?;
            }
            "h" => {
                command_tx.send(ControllerCommand::Hide).await?;
            }
            "q" => {
                command_tx.send(ControllerCommand::Shutdown).await?;
                break;
            }
            other => {
                if let Some(fraction) = other
                    .strip_prefix("g ")
                    .and_then(|raw| raw.trim().parse::<i64>().ok())
                {
                    // A scripted grab-move-release gesture
                    command_tx.send(ControllerCommand::BeginDrag).await?;
                    command_tx.send(ControllerCommand::DragTo { fraction }).await?;
                    command_tx.send(ControllerCommand::EndDrag).await?;
                } else if !other.is_empty() {
                    cli.display_banner();
                }
            }
        }
    }

    loop_handle.await?;
    println!();
    Ok(())
}
