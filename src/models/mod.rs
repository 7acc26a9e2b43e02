pub mod method;
pub mod prayer;

pub use method::CalculationMethod;
pub use prayer::{PrayerName, PrayerTime};
