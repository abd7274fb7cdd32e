//! Interactive menu loop
//!
//! Reads one answer per line. Every command's failure is reported and the
//! loop continues; only option 9 or the end of input leave it. Option 9 saves
//! before exiting, end of input does not.

use std::{fmt, io::BufRead};

use anyhow::Result;
use log::{debug, info};
use voyage_core::{
    params::{parse_activities, AddDestination, CityRef, SearchDestinations, UpdateDestination},
    OperationStatus,
};

use crate::cli::{AssistTopic, Cli};

const MENU: &str = "\
## Travel Itinerary Planner

1. Add Destination
2. Remove Destination
3. Update Destination
4. View All Destinations
5. Search Destination
6. AI Travel Assistance
7. Save Itinerary
8. Load Itinerary
9. Exit
";

/// Raised when stdin closes while the menu is waiting for an answer.
#[derive(Debug)]
struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input closed")
    }
}

impl std::error::Error for InputClosed {}

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<R> {
    cli: Cli,
    input: R,
}

impl<R: BufRead> Menu<R> {
    pub fn new(cli: Cli, input: R) -> Self {
        Self { cli, input }
    }

    pub async fn run(mut self) -> Result<()> {
        loop {
            self.cli.renderer().render(MENU)?;
            let outcome = match self.ask("Choose an option: ") {
                Ok(choice) => self.dispatch(choice.trim()).await,
                Err(e) => Err(e),
            };

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if e.is::<InputClosed>() => {
                    info!("Input closed, leaving menu without saving");
                    return Ok(());
                }
                Err(e) => {
                    debug!("Menu command failed: {e:?}");
                    self.cli
                        .renderer()
                        .render(&OperationStatus::failure(format!("{e:#}")).to_string())?;
                }
            }
        }
    }

    async fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => self.add()?,
            "2" => {
                let city = self.ask("Enter city to remove: ")?;
                self.cli.remove(&CityRef { city })?;
            }
            "3" => self.update()?,
            "4" => self.cli.list()?,
            "5" => {
                let keyword = self.ask("Search keyword: ")?;
                self.cli.search(&SearchDestinations { keyword })?;
            }
            "6" => {
                let city = self.ask("City for AI help: ")?;
                self.cli.assist(&CityRef { city }, AssistTopic::All).await?;
            }
            "7" => self.cli.save()?,
            "8" => self.cli.load()?,
            "9" => {
                self.cli.save()?;
                self.cli.renderer().render("Exiting. Data saved.\n")?;
                return Ok(Flow::Exit);
            }
            _ => self
                .cli
                .renderer()
                .render(&OperationStatus::failure("Invalid choice. Try again.").to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<()> {
        let city = self.ask("Enter city: ")?;
        let country = self.ask("Enter country: ")?;
        let start_date = self.ask("Start date (YYYY-MM-DD): ")?;
        let end_date = self.ask("End date (YYYY-MM-DD): ")?;
        let budget = self.ask_budget("Enter budget (USD): ")?;
        let activities = parse_activities(&self.ask("Enter activities (comma separated): ")?);

        self.cli.add(&AddDestination {
            city,
            country,
            start_date,
            end_date,
            budget,
            activities,
        })
    }

    fn update(&mut self) -> Result<()> {
        let city = self.ask("Enter city to update: ")?;
        self.cli
            .renderer()
            .render("Leave blank to keep current value.\n")?;
        let new_city = self.ask_optional("New city: ")?;
        let country = self.ask_optional("New country: ")?;
        let start_date = self.ask_optional("New start date: ")?;
        let end_date = self.ask_optional("New end date: ")?;
        let budget = self.ask_optional_budget("New budget: ")?;
        let activities = self
            .ask_optional("New activities (comma separated): ")?
            .map(|raw| parse_activities(&raw));

        self.cli.update(&UpdateDestination {
            city,
            new_city,
            country,
            start_date,
            end_date,
            budget,
            activities,
        })
    }

    /// Prompts and reads one line, without its line ending.
    fn ask(&mut self, label: &str) -> Result<String> {
        self.cli.renderer().prompt(label)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(trimmed.to_string())
    }

    /// Like [`Menu::ask`], mapping a blank answer to `None`.
    fn ask_optional(&mut self, label: &str) -> Result<Option<String>> {
        let answer = self.ask(label)?;
        Ok((!answer.trim().is_empty()).then_some(answer))
    }

    /// Asks until the answer parses as a budget.
    fn ask_budget(&mut self, label: &str) -> Result<f64> {
        loop {
            if let Some(budget) = self.ask_optional_budget(label)? {
                return Ok(budget);
            }
        }
    }

    /// Asks until the answer is blank or parses as a budget.
    ///
    /// A rejected answer is reported and asked again, so the remaining
    /// prompts of the current command still get their own lines.
    fn ask_optional_budget(&mut self, label: &str) -> Result<Option<f64>> {
        loop {
            let Some(raw) = self.ask_optional(label)? else {
                return Ok(None);
            };
            match parse_budget(&raw) {
                Ok(budget) => return Ok(Some(budget)),
                Err(e) => self
                    .cli
                    .renderer()
                    .render(&OperationStatus::failure(e.to_string()).to_string())?,
            }
        }
    }
}

fn parse_budget(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| anyhow::anyhow!("Invalid budget '{}': expected a number", raw.trim()))
}
