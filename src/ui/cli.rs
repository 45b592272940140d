//! Command-line interface implementation

use clap::Parser;
use std::error::Error;
use std::io::{self, Write};

/// Command-line arguments for the mediactl demo
#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive media transport controller demo", long_about = None)]
pub struct Args {
    /// Auto-hide delay for the control surface in milliseconds (0 keeps it shown)
    #[arg(short = 't', long, env = "MEDIACTL_SHOW_TIMEOUT_MS")]
    pub show_timeout_ms: Option<u64>,

    /// Simulated media duration in seconds
    #[arg(short = 'd', long, env = "MEDIACTL_DURATION_SECS")]
    pub duration_secs: Option<u64>,

    /// Config file path
    #[arg(short, long, env = "MEDIACTL_CONFIG")]
    pub config: Option<String>,
}

/// CLI user interface for interacting with the demo
pub struct Cli {
    pub args: Args,
}

impl Cli {
    /// Create a new CLI instance
    pub fn new() -> Self {
        Cli {
            args: Args::parse(),
        }
    }

    /// Display the available gesture keys
    pub fn display_banner(&self) {
        println!("mediactl demo - simulated player attached, playback started");
        println!("Commands:");
        println!("  p            toggle play/pause");
        println!("  s            show controls");
        println!("  h            hide controls");
        println!("  g <0-1000>   seek gesture to the given fraction");
        println!("  q            quit");
        println!();
    }

    /// Read the next gesture command from stdin
    pub fn read_command(&self) -> Result<String, Box<dyn Error>> {
        print!("\n> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }

    /// Display error messages
    pub fn display_error(&self, error: &dyn Error) {
        eprintln!("Error: {}", error);
    }
}
