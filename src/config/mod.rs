pub mod settings;

pub use settings::{Coordinates, FALLBACK_COORDINATES, PrayerSettings};
