use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::metadata::{PKG_DESCRIPTION, PKG_NAME, PKG_VERSION};

#[derive(Parser, Debug, Clone)]
#[command(name = PKG_NAME)]
#[command(version = PKG_VERSION)]
#[command(about = PKG_DESCRIPTION, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Settings file (defaults to <config dir>/trip-planner/settings.json)
    #[arg(long, global = true, env = "TRIP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub start: StartArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Open the interactive planner
    Start(StartArgs),
    /// Print the sample trip and exit
    Show(ShowArgs),
    /// Print version information
    Version,
    /// Open an interactive editor for settings.json
    Config,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct StartArgs {
    /// Start with an empty trip instead of the sample one
    #[arg(long, env = "TRIP_NO_SAMPLE")]
    pub no_sample: bool,

    /// Disable colored output
    #[arg(long, env = "TRIP_NO_COLOR")]
    pub no_color: bool,

    /// First day of the trip, YYYY-MM-DD or "today"
    #[arg(long, env = "TRIP_START_DATE")]
    pub start_date: Option<String>,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowArgs {
    /// Print the itinerary as JSON
    #[arg(long)]
    pub json: bool,

    /// First day of the trip, YYYY-MM-DD or "today"
    #[arg(long)]
    pub start_date: Option<String>,
}

impl Cli {
    /// The subcommand; without one, the top-level flags start a session.
    pub fn resolved_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Start(self.start.clone()))
    }
}
