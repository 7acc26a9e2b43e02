use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "salahtimes", version, about = "Daily salah times in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the day's prayer times and the next upcoming prayer
    Times {
        /// Date to show instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Update stored preferences
    Set {
        /// Calculation method key (see `methods`)
        #[arg(long)]
        method: Option<String>,
        /// City name shown in the header
        #[arg(long)]
        city: Option<String>,
        /// Whether the device location should be preferred
        #[arg(long)]
        use_location: Option<bool>,
    },
    /// Record the last known location
    Locate {
        /// Latitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },
    /// List the available calculation methods
    Methods,
}
