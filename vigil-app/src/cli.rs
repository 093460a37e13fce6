//! Command-line interface definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Vigil Command Line Interface
#[derive(Parser, Debug)]
#[command(name = "vigil")]
#[command(author, version, about = "Shake-to-alert personal safety monitor")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults compiled into the binary otherwise)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for contacts and location (overrides `[storage] data_dir`)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay an accelerometer trace through the shake detector
    Monitor(MonitorArgs),

    /// Manage emergency contacts
    #[command(subcommand)]
    Contacts(ContactsCommand),

    /// Manage the last known location
    #[command(subcommand)]
    Location(LocationCommand),

    /// Send an emergency alert now
    Alert,

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for the monitor command
#[derive(Args, Debug)]
pub struct MonitorArgs {
    /// CSV trace with `timestamp_ms,x,y,z` lines (axes in g)
    #[arg(long)]
    pub trace: PathBuf,

    #[command(flatten)]
    pub fix: FixArgs,
}

/// Position fix taken before monitoring starts
#[derive(Args, Debug, Clone, Copy)]
pub struct FixArgs {
    /// Latitude in degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees
    #[arg(long, requires = "accuracy", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Accuracy radius in metres
    #[arg(long, requires = "lat")]
    pub accuracy: Option<f32>,
}

impl FixArgs {
    /// The fix, when all three values were given
    pub fn values(&self) -> Option<(f64, f64, f32)> {
        Some((self.lat?, self.lon?, self.accuracy?))
    }
}

#[derive(Subcommand, Debug)]
pub enum ContactsCommand {
    /// Append a contact
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
    },
    /// Remove the contact at INDEX (as shown by `list`)
    Remove { index: usize },
    /// List contacts in order
    List,
}

#[derive(Subcommand, Debug)]
pub enum LocationCommand {
    /// Store a position fix
    Set {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long)]
        accuracy: f32,
    },
    /// Show the stored position
    Show,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Load and validate the configuration, then print it
    Check,
}
