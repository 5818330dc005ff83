use chrono::{DateTime, Datelike, NaiveDate, Utc};

use lovemeet_store::{LocalStore, Result};
use lovemeet_types::CountdownPrefs;

pub const DEFAULT_EVENT_NAME: &str = "Valentine's Day";

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// The coming 14 February; today counts if it is the day itself.
pub fn next_valentines(today: NaiveDate) -> NaiveDate {
    let this_year = NaiveDate::from_ymd_opt(today.year(), 2, 14).unwrap_or(today);
    if today > this_year {
        NaiveDate::from_ymd_opt(today.year() + 1, 2, 14).unwrap_or(this_year)
    } else {
        this_year
    }
}

pub fn default_countdown(today: NaiveDate) -> CountdownPrefs {
    CountdownPrefs {
        event_name: DEFAULT_EVENT_NAME.to_string(),
        target_date: next_valentines(today),
    }
}

/// Stored preferences, each field falling back to the Valentine's default.
pub fn countdown(store: &LocalStore, today: NaiveDate) -> Result<CountdownPrefs> {
    let defaults = default_countdown(today);
    Ok(CountdownPrefs {
        event_name: store
            .countdown_event_name()?
            .unwrap_or(defaults.event_name),
        target_date: store
            .countdown_target_date()?
            .unwrap_or(defaults.target_date),
    })
}

pub fn save_countdown(store: &LocalStore, prefs: &CountdownPrefs) -> Result<()> {
    store.save_countdown(&prefs.event_name, prefs.target_date)
}

pub fn reset_to_valentines(store: &LocalStore, today: NaiveDate) -> Result<CountdownPrefs> {
    let prefs = default_countdown(today);
    save_countdown(store, &prefs)?;
    Ok(prefs)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

fn midnight_utc_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default()
}

/// Time remaining until midnight UTC of `target`; all zero once it has passed.
pub fn time_left(target: NaiveDate, now: DateTime<Utc>) -> TimeLeft {
    let diff = midnight_utc_millis(target) - now.timestamp_millis();
    if diff <= 0 {
        return TimeLeft::default();
    }
    let secs = diff / 1000;
    TimeLeft {
        days: diff / MILLIS_PER_DAY,
        hours: (secs / 3600) % 24,
        minutes: (secs / 60) % 60,
        seconds: secs % 60,
    }
}

/// "in N days" while the date is ahead (rounding partial days up), "Today!"
/// otherwise.
pub fn days_until_text(date: NaiveDate, now: DateTime<Utc>) -> String {
    let diff = midnight_utc_millis(date) - now.timestamp_millis();
    let days = if diff > 0 {
        (diff + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
    } else {
        0
    };
    if days > 0 {
        format!("in {days} days")
    } else {
        "Today!".to_string()
    }
}
