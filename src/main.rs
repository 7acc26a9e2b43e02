mod cli;
mod config;
mod location;
mod models;
mod prayer_times;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::PrayerSettings;
use location::FixedLocation;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut settings = PrayerSettings::load().context("Loading settings")?;

    match cli.command {
        Some(Commands::Times { date }) => {
            handlers::handle_times(&settings, date)?;
        }
        Some(Commands::Set {
            method,
            city,
            use_location,
        }) => {
            handlers::handle_set(&mut settings, method, city, use_location)?;
        }
        Some(Commands::Locate { lat, lng }) => {
            let provider = FixedLocation::new(lat, lng);
            handlers::handle_locate(&mut settings, &provider)?;
        }
        Some(Commands::Methods) => {
            handlers::handle_methods(&settings)?;
        }

        // No subcommand → today's times
        None => {
            handlers::handle_times(&settings, None)?;
        }
    }

    Ok(())
}
