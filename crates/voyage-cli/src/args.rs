use std::path::PathBuf;

use clap::{Parser, Subcommand};
use voyage_core::DEFAULT_FILE_NAME;

use crate::cli::{AddArgs, AssistArgs, CityArgs, SearchArgs, UpdateArgs};

/// Travel itinerary planner
///
/// Voyage keeps a list of planned destinations (city, country, dates, budget
/// and activities) in a JSON file. Run it without a subcommand for the
/// interactive menu, or use the subcommands for one-shot edits. AI travel
/// assistance needs OPENAI_API_KEY in the environment or a .env file.
#[derive(Parser)]
#[command(version, about, name = "voyage")]
pub struct Args {
    /// Path to the itinerary JSON file
    #[arg(long, global = true, env = "VOYAGE_FILE", default_value = DEFAULT_FILE_NAME)]
    pub file: PathBuf,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Voyage CLI
///
/// `add`, `remove` and `update` save the itinerary file when they succeed.
#[derive(Subcommand)]
pub enum Commands {
    /// Add a destination
    #[command(alias = "a")]
    Add(AddArgs),
    /// Remove the first destination matching a city
    #[command(aliases = ["rm", "d"])]
    Remove(CityArgs),
    /// Update fields of the first destination matching a city
    #[command(alias = "u")]
    Update(UpdateArgs),
    /// List all destinations
    #[command(aliases = ["l", "ls"])]
    List,
    /// Search destinations by keyword
    #[command(alias = "f")]
    Search(SearchArgs),
    /// Show details of a destination
    #[command(alias = "s")]
    Show(CityArgs),
    /// Ask the AI assistant about a destination
    Assist(AssistArgs),
    /// Start the interactive menu (default)
    #[command(name = "menu", alias = "m")]
    Interactive,
}
