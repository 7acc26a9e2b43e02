use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use salah::prelude::{Configuration, Coordinates, Madhab, Prayer, PrayerSchedule};

use crate::config;
use crate::models::{CalculationMethod, PrayerName, PrayerTime};

/// Build the five-entry schedule for a civil date. Returns the entries in
/// canonical order with the next upcoming prayer marked, or an empty vec
/// when the calculator cannot produce times for this geometry (polar
/// latitudes with some methods). An empty schedule is a defined result,
/// not an error.
///
/// `now` is a parameter rather than the system clock so the selection is
/// deterministic for a fixed input.
pub fn build_schedule(
    date: NaiveDate,
    location: config::Coordinates,
    method: CalculationMethod,
    now: DateTime<Utc>,
) -> Vec<PrayerTime> {
    // salah panics rather than erroring when a twilight angle is never
    // reached (polar latitudes), so the call is fenced and a panic is
    // treated like any other failed calculation.
    let result = std::panic::catch_unwind(|| {
        let coords = Coordinates::new(location.latitude, location.longitude);
        let params = Configuration::with(method.preset(), Madhab::Shafi);
        PrayerSchedule::new()
            .on(date)
            .for_location(coords)
            .with_configuration(params)
            .calculate()
    });

    let times = match result {
        Ok(Ok(times)) => times,
        Ok(Err(e)) => {
            warn!(
                "No prayer times for ({}, {}) on {}: {}",
                location.latitude, location.longitude, date, e
            );
            return Vec::new();
        }
        Err(_) => {
            warn!(
                "No prayer times defined for ({}, {}) on {}",
                location.latitude, location.longitude, date
            );
            return Vec::new();
        }
    };

    let mut schedule = vec![
        PrayerTime::new(PrayerName::Fajr, times.time(Prayer::Fajr)),
        PrayerTime::new(PrayerName::Dhuhr, times.time(Prayer::Dhuhr)),
        PrayerTime::new(PrayerName::Asr, times.time(Prayer::Asr)),
        PrayerTime::new(PrayerName::Maghrib, times.time(Prayer::Maghrib)),
        PrayerTime::new(PrayerName::Isha, times.time(Prayer::Isha)),
    ];
    mark_next(&mut schedule, now);
    schedule
}

/// Flag the first entry strictly later than `now`. When every entry has
/// passed, nothing is marked; the schedule does not roll over to the next
/// day's Fajr.
pub fn mark_next(schedule: &mut [PrayerTime], now: DateTime<Utc>) {
    for entry in schedule.iter_mut() {
        if entry.time > now {
            entry.is_next = true;
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    use crate::config::FALLBACK_COORDINATES;

    fn dhaka_nov_16() -> Vec<PrayerTime> {
        let date = NaiveDate::from_ymd_opt(2024, 11, 16).unwrap();
        let long_ago = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        build_schedule(
            date,
            FALLBACK_COORDINATES,
            CalculationMethod::MuslimWorldLeague,
            long_ago,
        )
    }

    #[test]
    fn five_entries_in_canonical_order_with_increasing_times() {
        let schedule = dhaka_nov_16();

        assert_eq!(schedule.len(), 5);
        let names: Vec<PrayerName> = schedule.iter().map(|p| p.name).collect();
        assert_eq!(names, PrayerName::all());
        for pair in schedule.windows(2) {
            assert!(pair[0].time < pair[1].time);
        }
    }

    #[test]
    fn build_is_idempotent_for_fixed_inputs() {
        assert_eq!(dhaka_nov_16(), dhaka_nov_16());
    }

    #[test]
    fn second_after_dhuhr_marks_asr_next() {
        let base = dhaka_nov_16();
        let now = base[1].time + Duration::seconds(1);

        let schedule = build_schedule(
            NaiveDate::from_ymd_opt(2024, 11, 16).unwrap(),
            FALLBACK_COORDINATES,
            CalculationMethod::MuslimWorldLeague,
            now,
        );

        for entry in &schedule {
            assert_eq!(entry.is_next, entry.name == PrayerName::Asr);
        }
    }

    #[test]
    fn nothing_marked_once_all_prayers_have_passed() {
        let base = dhaka_nov_16();
        let now = base[4].time + Duration::seconds(1);

        let schedule = build_schedule(
            NaiveDate::from_ymd_opt(2024, 11, 16).unwrap(),
            FALLBACK_COORDINATES,
            CalculationMethod::MuslimWorldLeague,
            now,
        );

        assert!(schedule.iter().all(|p| !p.is_next));
    }

    #[test]
    fn polar_midsummer_yields_empty_schedule() {
        // Svalbard under midnight sun; MWL twilight angles are unreachable
        // and the calculator cannot produce times.
        let schedule = build_schedule(
            NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(),
            config::Coordinates::new(78.2232, 15.6267),
            CalculationMethod::MuslimWorldLeague,
            Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap(),
        );

        assert!(schedule.is_empty());
    }

    #[test]
    fn mark_next_flags_first_future_entry_only() {
        let t0 = Utc.with_ymd_and_hms(2024, 11, 16, 0, 0, 0).unwrap();
        let mut schedule: Vec<PrayerTime> = PrayerName::all()
            .into_iter()
            .enumerate()
            .map(|(i, name)| PrayerTime::new(name, t0 + Duration::hours(i as i64 + 5)))
            .collect();

        mark_next(&mut schedule, t0 + Duration::hours(6));

        let marked: Vec<PrayerName> = schedule
            .iter()
            .filter(|p| p.is_next)
            .map(|p| p.name)
            .collect();
        assert_eq!(marked, [PrayerName::Asr]);
    }

    #[test]
    fn mark_next_requires_strictly_later_time() {
        let t0 = Utc.with_ymd_and_hms(2024, 11, 16, 5, 0, 0).unwrap();
        let mut schedule = vec![PrayerTime::new(PrayerName::Fajr, t0)];

        mark_next(&mut schedule, t0);
        assert!(!schedule[0].is_next);
    }
}
