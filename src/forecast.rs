//! Forecast aggregation: daily representatives, time-of-day summaries, and
//! the hourly strip
//!
//! The forecast API returns a flat series of 3-hour samples. This module
//! condenses that series into the three shapes the dashboard renders: one
//! representative sample per calendar day for the 5-day view, averaged
//! time-of-day buckets for the next 24 hours, and the raw leading samples as
//! an hourly strip.
//!
//! Every function is generic over [`chrono::TimeZone`] so the dashboard can
//! group by the user's local calendar while tests pin a fixed zone.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone, Timelike, Utc};

use crate::data::ForecastEntry;

/// Maximum number of days shown in the daily forecast view
pub const FORECAST_DAYS: usize = 5;

/// Number of leading samples considered "the next 24 hours" (3-hour spacing)
pub const HOURLY_WINDOW: usize = 8;

/// Local hour treated as solar noon when picking daily representatives
const NOON_HOUR: i64 = 12;

/// A named part of the day, derived from the local hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePeriod {
    /// 05:00 to 11:59
    Morning,
    /// 12:00 to 16:59
    Afternoon,
    /// 17:00 to 20:59
    Evening,
    /// 21:00 to 04:59
    Overnight,
}

impl TimePeriod {
    /// All periods in display order
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::Morning,
        TimePeriod::Afternoon,
        TimePeriod::Evening,
        TimePeriod::Overnight,
    ];

    /// Classifies a local hour of day (0-23) into its period
    ///
    /// The four ranges partition the whole day: any hour maps to exactly one
    /// period.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimePeriod::Morning,
            12..=16 => TimePeriod::Afternoon,
            17..=20 => TimePeriod::Evening,
            _ => TimePeriod::Overnight,
        }
    }

    /// Display label for the period
    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Morning => "Morning",
            TimePeriod::Afternoon => "Afternoon",
            TimePeriod::Evening => "Evening",
            TimePeriod::Overnight => "Overnight",
        }
    }
}

/// Averaged conditions for one time-of-day period within the next 24 hours
#[derive(Debug, Clone)]
pub struct PeriodSummary {
    /// The period this summary covers
    pub period: TimePeriod,
    /// Mean temperature across the period's samples, rounded to a whole
    /// degree Celsius
    pub average_temp: f64,
    /// The middle sample of the period, used for condition text and icon
    pub representative: ForecastEntry,
    /// Mean precipitation probability across the period's samples, as a
    /// rounded integer percentage
    pub precipitation_pct: i32,
}

/// One slot of the hourly strip
#[derive(Debug, Clone, Copy)]
pub struct HourlySlot<'a> {
    /// The underlying forecast sample
    pub entry: &'a ForecastEntry,
    /// Whether this is the leading slot, displayed as "Now"
    pub is_current: bool,
}

/// Converts a UTC epoch timestamp into a datetime in the given zone
///
/// Returns `None` for timestamps chrono cannot represent; callers skip such
/// samples rather than failing the whole series.
fn zoned_datetime<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.with_timezone(tz))
}

/// Picks one representative sample per calendar day, at most
/// [`FORECAST_DAYS`] days, days ascending
///
/// Samples are grouped by their local calendar date. Within each day the
/// sample whose local hour is nearest noon wins; on equal distance the sample
/// seen first in the series wins (samples are never re-sorted within a day).
///
/// An empty series produces an empty result; that is "no forecast available",
/// not an error.
pub fn daily_representatives<Tz: TimeZone>(
    entries: &[ForecastEntry],
    tz: &Tz,
) -> Vec<ForecastEntry> {
    // BTreeMap keys keep the dates sorted by value; each day's samples keep
    // their series order.
    let mut days: BTreeMap<NaiveDate, Vec<(u32, &ForecastEntry)>> = BTreeMap::new();

    for entry in entries {
        let Some(local) = zoned_datetime(entry.dt, tz) else {
            continue;
        };
        days.entry(local.date_naive())
            .or_default()
            .push((local.hour(), entry));
    }

    days.into_values()
        .take(FORECAST_DAYS)
        .map(|samples| {
            let (_, mut best) = samples[0];
            let mut best_distance = noon_distance(samples[0].0);
            for &(hour, entry) in &samples[1..] {
                let distance = noon_distance(hour);
                if distance < best_distance {
                    best_distance = distance;
                    best = entry;
                }
            }
            best.clone()
        })
        .collect()
}

/// Absolute distance from a local hour to noon
fn noon_distance(hour: u32) -> i64 {
    (i64::from(hour) - NOON_HOUR).abs()
}

/// Summarizes the leading 24-hour window into time-of-day buckets
///
/// Only the first [`HOURLY_WINDOW`] samples are considered (all of them when
/// the series is shorter). Periods with no samples in the window are omitted
/// entirely rather than reported as zeros. Output order follows
/// [`TimePeriod::ALL`].
pub fn period_summaries<Tz: TimeZone>(entries: &[ForecastEntry], tz: &Tz) -> Vec<PeriodSummary> {
    let window = &entries[..entries.len().min(HOURLY_WINDOW)];

    TimePeriod::ALL
        .iter()
        .filter_map(|&period| {
            let subset: Vec<&ForecastEntry> = window
                .iter()
                .filter(|entry| {
                    zoned_datetime(entry.dt, tz)
                        .map(|local| TimePeriod::from_hour(local.hour()) == period)
                        .unwrap_or(false)
                })
                .collect();

            if subset.is_empty() {
                return None;
            }

            let count = subset.len() as f64;
            let average_temp =
                (subset.iter().map(|e| e.main.temp).sum::<f64>() / count).round();
            let mean_pop = subset.iter().map(|e| e.pop.unwrap_or(0.0)).sum::<f64>() / count;
            let representative = subset[subset.len() / 2].clone();

            Some(PeriodSummary {
                period,
                average_temp,
                representative,
                precipitation_pct: (mean_pop * 100.0).round() as i32,
            })
        })
        .collect()
}

/// Returns the leading samples as an hourly strip, the first slot tagged as
/// the current one
///
/// The strip is the raw, unaggregated counterpart of [`period_summaries`]:
/// the same first [`HOURLY_WINDOW`] samples, one slot each.
pub fn hourly_strip(entries: &[ForecastEntry]) -> Vec<HourlySlot<'_>> {
    entries
        .iter()
        .take(HOURLY_WINDOW)
        .enumerate()
        .map(|(index, entry)| HourlySlot {
            entry,
            is_current: index == 0,
        })
        .collect()
}
