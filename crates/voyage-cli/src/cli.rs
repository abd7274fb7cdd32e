//! Command-line argument wrappers and command handlers
//!
//! Argument structs carry the clap-specific attributes and convert into the
//! interface-agnostic parameter types from `voyage_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Itinerary
//! ```
//!
//! [`Cli`] executes those parameters against the itinerary and renders the
//! outcome. It is shared by the one-shot subcommands and the interactive
//! menu.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::info;
use voyage_assistant::{OpenAiClient, TravelAssistant};
use voyage_core::{
    params::{parse_activities, AddDestination, CityRef, SearchDestinations, UpdateDestination},
    DestinationDetail, Itinerary, OperationStatus,
};

use crate::renderer::TerminalRenderer;

/// Add a destination
#[derive(Args)]
pub struct AddArgs {
    /// City name (used to look the destination up later)
    pub city: String,
    /// Country the city is in
    pub country: String,
    #[arg(short, long, help = "First day of the stay (YYYY-MM-DD)")]
    pub start: String,
    #[arg(short, long, help = "Last day of the stay (YYYY-MM-DD)")]
    pub end: String,
    #[arg(short, long, help = "Budget for the stay (USD)")]
    pub budget: f64,
    #[arg(
        short,
        long,
        default_value = "",
        help = "Activities as a comma-separated list"
    )]
    pub activities: String,
}

impl From<AddArgs> for AddDestination {
    fn from(val: AddArgs) -> Self {
        AddDestination {
            city: val.city,
            country: val.country,
            start_date: val.start,
            end_date: val.end,
            budget: val.budget,
            activities: parse_activities(&val.activities),
        }
    }
}

/// Address a destination by city
#[derive(Args)]
pub struct CityArgs {
    #[arg(help = "City of the destination (case-insensitive, first match wins)")]
    pub city: String,
}

impl From<CityArgs> for CityRef {
    fn from(val: CityArgs) -> Self {
        CityRef { city: val.city }
    }
}

/// Update a destination
///
/// Only the options given are changed; everything else keeps its current
/// value.
#[derive(Args)]
pub struct UpdateArgs {
    #[arg(help = "City of the destination to update (case-insensitive, first match wins)")]
    pub city: String,
    #[arg(long, help = "New city name")]
    pub new_city: Option<String>,
    #[arg(short, long, help = "New country")]
    pub country: Option<String>,
    #[arg(short, long, help = "New first day (YYYY-MM-DD)")]
    pub start: Option<String>,
    #[arg(short, long, help = "New last day (YYYY-MM-DD)")]
    pub end: Option<String>,
    #[arg(short, long, help = "New budget (USD)")]
    pub budget: Option<f64>,
    #[arg(short, long, help = "New activities as a comma-separated list")]
    pub activities: Option<String>,
}

impl From<UpdateArgs> for UpdateDestination {
    fn from(val: UpdateArgs) -> Self {
        UpdateDestination {
            city: val.city,
            new_city: val.new_city,
            country: val.country,
            start_date: val.start,
            end_date: val.end,
            budget: val.budget,
            activities: val.activities.as_deref().map(parse_activities),
        }
    }
}

/// Search destinations
#[derive(Args)]
pub struct SearchArgs {
    #[arg(help = "Case-insensitive text matched against city, country and activities")]
    pub keyword: String,
}

impl From<SearchArgs> for SearchDestinations {
    fn from(val: SearchArgs) -> Self {
        SearchDestinations {
            keyword: val.keyword,
        }
    }
}

/// Ask the AI assistant about a destination
#[derive(Args)]
pub struct AssistArgs {
    #[arg(help = "City of the destination to get help for")]
    pub city: String,
    #[arg(long, value_enum, default_value_t = AssistTopic::All, help = "What to ask for")]
    pub topic: AssistTopic,
}

/// Kinds of advice the assistant can produce
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum AssistTopic {
    /// A day-by-day itinerary
    Itinerary,
    /// Budget-saving tips
    Tips,
    /// Both
    All,
}

impl AssistTopic {
    fn wants_itinerary(self) -> bool {
        matches!(self, AssistTopic::Itinerary | AssistTopic::All)
    }

    fn wants_tips(self) -> bool {
        matches!(self, AssistTopic::Tips | AssistTopic::All)
    }
}

/// Executes commands against an itinerary and renders the results.
pub struct Cli {
    itinerary: Itinerary,
    renderer: TerminalRenderer,
    assistant: Option<TravelAssistant<OpenAiClient>>,
}

impl Cli {
    pub fn new(itinerary: Itinerary, renderer: TerminalRenderer) -> Self {
        Self {
            itinerary,
            renderer,
            assistant: None,
        }
    }

    pub fn renderer(&self) -> &TerminalRenderer {
        &self.renderer
    }

    pub fn add(&mut self, params: &AddDestination) -> Result<()> {
        let result = self
            .itinerary
            .add_destination(params)
            .context("Failed to add destination")?;
        self.renderer.render(&result.to_string())
    }

    pub fn remove(&mut self, params: &CityRef) -> Result<()> {
        let result = self.itinerary.remove_destination(params)?;
        self.renderer.render(&result.to_string())
    }

    pub fn update(&mut self, params: &UpdateDestination) -> Result<()> {
        let result = self
            .itinerary
            .update_destination(params)
            .context("Failed to update destination")?;
        self.renderer.render(&result.to_string())
    }

    pub fn list(&self) -> Result<()> {
        let destinations = self.itinerary.list_destinations();
        self.renderer
            .render(&format!("# Destinations\n\n{destinations}"))
    }

    pub fn search(&self, params: &SearchDestinations) -> Result<()> {
        let results = self.itinerary.search_destinations(params);
        self.renderer.render(&format!(
            "# Search results for '{}'\n\n{results}",
            params.keyword
        ))
    }

    pub fn show(&self, params: &CityRef) -> Result<()> {
        let destination = self.itinerary.show_destination(params)?;
        self.renderer
            .render(&DestinationDetail(destination).to_string())
    }

    pub fn save(&self) -> Result<()> {
        self.itinerary.save().context("Failed to save itinerary")?;
        self.renderer.render(
            &OperationStatus::success(format!(
                "Saved {} destinations to {}",
                self.itinerary.len(),
                self.itinerary.file_path().display()
            ))
            .to_string(),
        )
    }

    pub fn load(&mut self) -> Result<()> {
        let count = self.itinerary.load().context("Failed to load itinerary")?;
        self.renderer.render(
            &OperationStatus::success(format!(
                "Loaded {count} destinations from {}",
                self.itinerary.file_path().display()
            ))
            .to_string(),
        )
    }

    /// Asks the assistant for advice about the first destination matching
    /// `params.city`.
    ///
    /// The assistant is created on first use, so a missing API key only
    /// surfaces here.
    pub async fn assist(&mut self, params: &CityRef, topic: AssistTopic) -> Result<()> {
        let destination = self.itinerary.show_destination(params)?.clone();
        let assistant = self.assistant()?;

        let mut output = String::new();
        if topic.wants_itinerary() {
            let text = assistant
                .generate_itinerary(&destination)
                .await
                .context("Failed to generate itinerary")?;
            output.push_str(&format!("## AI Itinerary\n\n{text}\n\n"));
        }
        if topic.wants_tips() {
            let text = assistant
                .generate_budget_tips(&destination)
                .await
                .context("Failed to generate budget tips")?;
            output.push_str(&format!("## Budget Tips\n\n{text}\n"));
        }

        self.renderer.render(&output)
    }

    fn assistant(&mut self) -> Result<&TravelAssistant<OpenAiClient>> {
        if self.assistant.is_none() {
            let assistant =
                TravelAssistant::from_env().context("AI travel assistance is not configured")?;
            info!("AI travel assistant initialized");
            self.assistant = Some(assistant);
        }
        self.assistant
            .as_ref()
            .context("AI travel assistant unavailable")
    }
}
