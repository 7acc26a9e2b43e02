use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};

use crate::config::PrayerSettings;
use crate::location::LocationProvider;
use crate::models::CalculationMethod;
use crate::prayer_times::build_schedule;
use crate::utils::format::{format_duration_secs, format_local_time};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times(settings: &PrayerSettings, date: Option<NaiveDate>) -> Result<()> {
    let now = Utc::now();
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let coordinates = settings.coordinates();

    let schedule = build_schedule(date, coordinates, settings.method(), now);

    let place = if settings.city.is_empty() {
        format!("{:.4}, {:.4}", coordinates.latitude, coordinates.longitude)
    } else {
        settings.city.clone()
    };

    println!();
    println_colored!(GOLD, "  Prayer Times — {} ({})", place, date);
    println!();

    if schedule.is_empty() {
        println_colored!(DIM, "  Unavailable for this location and date.");
        println!();
        return Ok(());
    }

    for entry in &schedule {
        let time_str = format_local_time(entry.time);
        if entry.is_next {
            println_colored!(AMBER, "  {:<10}  {}  ◂", entry.name, time_str);
        } else if entry.time <= now {
            println_colored!(DIM, "  {:<10}  {}", entry.name, time_str);
        } else {
            println_colored!(BOLD, "  {:<10}  {}", entry.name, time_str);
        }
    }

    println!();
    match schedule.iter().find(|p| p.is_next) {
        Some(next) => {
            let secs = (next.time - now).num_seconds();
            println_colored!(AMBER, "  Next: {} in {}", next.name, format_duration_secs(secs));
        }
        None => {
            println_colored!(DIM, "  All prayers for this day have passed.");
        }
    }
    println!();
    Ok(())
}

// ─── Set ─────────────────────────────────────────────────────────────────────

pub fn handle_set(
    settings: &mut PrayerSettings,
    method: Option<String>,
    city: Option<String>,
    use_location: Option<bool>,
) -> Result<()> {
    if method.is_none() && city.is_none() && use_location.is_none() {
        println!("method:       {}", settings.method().key());
        println!("city:         {:?}", settings.city);
        println!("use_location: {}", settings.use_location);
        match settings.last_known_location {
            Some(c) => println!("location:     {:.6}, {:.6}", c.latitude, c.longitude),
            None => println!("location:     (not recorded)"),
        }
        return Ok(());
    }

    if let Some(key) = method {
        match CalculationMethod::parse_key(&key) {
            Ok(m) => settings.calculation_method = m.key().to_string(),
            Err(e) => {
                eprintln!("{}", e);
                eprintln!("Valid methods:");
                for m in CalculationMethod::all() {
                    eprintln!("  {}", m.key());
                }
                anyhow::bail!("invalid --method value");
            }
        }
    }
    if let Some(city) = city {
        settings.city = city;
    }
    if let Some(flag) = use_location {
        settings.use_location = flag;
    }

    settings.save()?;
    println_colored!(GREEN, "Settings saved.");
    Ok(())
}

// ─── Locate ──────────────────────────────────────────────────────────────────

/// Resolve coordinates from the provider into settings. The stored
/// location is untouched when the provider fails.
pub fn apply_location(
    settings: &mut PrayerSettings,
    provider: &dyn LocationProvider,
) -> Result<()> {
    let coords = provider.current_location()?;
    settings.last_known_location = Some(coords);
    Ok(())
}

pub fn handle_locate(settings: &mut PrayerSettings, provider: &dyn LocationProvider) -> Result<()> {
    apply_location(settings, provider)?;
    settings.save()?;
    let coords = settings.coordinates();
    println_colored!(
        GREEN,
        "Location saved: {:.6}, {:.6}",
        coords.latitude,
        coords.longitude
    );
    Ok(())
}

// ─── Methods ─────────────────────────────────────────────────────────────────

pub fn handle_methods(settings: &PrayerSettings) -> Result<()> {
    let current = settings.method();
    println!();
    for method in CalculationMethod::all() {
        let marker = if method == current { "*" } else { " " };
        println!("  {} {:<24} {}", marker, method.key(), method.display_name());
    }
    println!();
    Ok(())
}
