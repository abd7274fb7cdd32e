//! Voyage CLI Application
//!
//! Command-line interface for the Voyage travel itinerary planner.

mod args;
mod cli;
mod menu;
mod renderer;

use std::io;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use menu::Menu;
use renderer::TerminalRenderer;
use voyage_core::{CityRef, ItineraryBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let Args {
        file,
        no_color,
        command,
    } = Args::parse();

    let itinerary = ItineraryBuilder::new()
        .with_file_path(Some(&file))
        .build()
        .with_context(|| format!("Failed to load itinerary from {}", file.display()))?;

    let mut cli = Cli::new(itinerary, TerminalRenderer::new(!no_color));

    info!("Voyage started");

    match command {
        Some(Add(args)) => {
            cli.add(&args.into())?;
            cli.save()
        }
        Some(Remove(args)) => {
            cli.remove(&args.into())?;
            cli.save()
        }
        Some(Update(args)) => {
            cli.update(&args.into())?;
            cli.save()
        }
        Some(List) => cli.list(),
        Some(Search(args)) => cli.search(&args.into()),
        Some(Show(args)) => cli.show(&args.into()),
        Some(Assist(args)) => {
            let city = CityRef { city: args.city };
            cli.assist(&city, args.topic).await
        }
        Some(Interactive) | None => Menu::new(cli, io::stdin().lock()).run().await,
    }
}
