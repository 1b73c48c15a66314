//! Interactive forecast session: the view state and the menu loop around it.

use std::fmt;

use anyhow::Result;
use inquire::{InquireError, Select, Text};
use log::{error, info};
use skycast_core::{ForecastSource, WeatherRecord, parse};

use crate::render;

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Hours,
    Days,
    Search,
    Refresh,
    Quit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 5] = [
        MenuChoice::Hours,
        MenuChoice::Days,
        MenuChoice::Search,
        MenuChoice::Refresh,
        MenuChoice::Quit,
    ];
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::Hours => "Hours",
            MenuChoice::Days => "Days",
            MenuChoice::Search => "Search city",
            MenuChoice::Refresh => "Refresh",
            MenuChoice::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// One selectable row of the day list.
struct DayChoice {
    index: usize,
    label: String,
}

impl fmt::Display for DayChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub struct Session<S> {
    source: S,
    city: String,
    days: Vec<WeatherRecord>,
    current: Option<WeatherRecord>,
}

impl<S: ForecastSource> Session<S> {
    pub fn new(source: S, city: String) -> Self {
        Self {
            source,
            city,
            days: Vec::new(),
            current: None,
        }
    }

    pub fn current(&self) -> Option<&WeatherRecord> {
        self.current.as_ref()
    }

    /// Fetch the forecast for `city` and replace the view state with it.
    ///
    /// On any transport or parse error the state is left untouched and the
    /// failure is only logged.
    async fn fetch(&mut self, city: &str) {
        match self.source.forecast(city).await {
            Ok(records) => self.apply(city.to_string(), records),
            Err(err) => error!("forecast update for '{city}' failed: {err}"),
        }
    }

    /// Re-fetch the city of the loaded forecast.
    async fn refresh(&mut self) {
        let city = self.city.clone();
        self.fetch(&city).await;
    }

    /// Replace days and selection wholesale; the first record becomes the
    /// current selection.
    fn apply(&mut self, city: String, records: Vec<WeatherRecord>) {
        info!("loaded {} forecast day(s) for '{city}'", records.len());
        self.current = records.first().cloned();
        self.days = records;
        self.city = city;
    }

    /// Make the day at `index` the current selection. Records without hourly
    /// data are not selectable.
    fn select_day(&mut self, index: usize) -> bool {
        match self.days.get(index) {
            Some(record) if record.is_day() => {
                self.current = Some(record.clone());
                true
            }
            _ => false,
        }
    }

    /// Fetch the startup city, then loop over the menu until quit.
    pub async fn run(mut self) -> Result<()> {
        self.refresh().await;

        loop {
            print!("{}", render::card(self.current()));

            let choice = match Select::new("View:", MenuChoice::ALL.to_vec()).prompt() {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    MenuChoice::Quit
                }
                Err(err) => return Err(err.into()),
            };

            match choice {
                MenuChoice::Hours => self.hours_view(),
                MenuChoice::Days => self.days_view()?,
                MenuChoice::Search => self.search().await?,
                MenuChoice::Refresh => self.refresh().await,
                MenuChoice::Quit => break,
            }
        }

        Ok(())
    }

    /// The hours view: flatten the current day's raw hourly data on demand.
    fn hours_view(&self) {
        let Some(current) = self.current.as_ref() else {
            println!("No forecast loaded yet.");
            return;
        };

        match parse::hourly_records(&current.hours) {
            Ok(records) if records.is_empty() => println!("No hourly data for this day."),
            Ok(records) => {
                for record in &records {
                    println!("{}", render::hour_line(record));
                }
            }
            Err(err) => error!("hourly flattening for '{}' failed: {err}", current.time),
        }
    }

    /// The days view: pick a day to make it the current selection.
    fn days_view(&mut self) -> Result<()> {
        let choices: Vec<DayChoice> = self
            .days
            .iter()
            .enumerate()
            .filter(|(_, record)| record.is_day())
            .map(|(index, record)| DayChoice {
                index,
                label: render::day_line(record),
            })
            .collect();

        if choices.is_empty() {
            println!("No days with hourly data to select.");
            return Ok(());
        }

        match Select::new("Day:", choices).prompt_skippable() {
            Ok(Some(choice)) => {
                self.select_day(choice.index);
            }
            Ok(None) => {}
            Err(InquireError::OperationInterrupted) => {}
            Err(err) => return Err(err.into()),
        }

        Ok(())
    }

    /// The search dialog: submitting fetches the entered city, cancelling
    /// leaves everything untouched.
    async fn search(&mut self) -> Result<()> {
        match Text::new("City name:").prompt_skippable() {
            Ok(Some(city)) => {
                let city = city.trim().to_string();
                if !city.is_empty() {
                    self.fetch(&city).await;
                }
            }
            Ok(None) => {}
            Err(InquireError::OperationInterrupted) => {}
            Err(err) => return Err(err.into()),
        }

        Ok(())
    }
}
