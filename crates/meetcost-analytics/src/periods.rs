//! Time-bucketed totals for meeting trends.
//!
//! Period keys are zero-padded strings (`2025-03-14`, `2025-W11`, `2025-03`)
//! so lexicographic order is chronological within a granularity.
//!
//! Week numbers are a Sunday-start approximation:
//! `ceil((days_since_jan_1 + weekday_of_jan_1 + 1) / 7)`, where Sunday is 0.
//! Days at the end of December can land in week 53 and the key always uses
//! the date's own calendar year. This is not ISO-8601 week dating and is
//! only meant for trend display.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use meetcost_core::{Granularity, Meeting};
use serde::{Deserialize, Serialize};

/// Totals for the meetings that fall into one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodBucket {
    /// Period key: `YYYY-MM-DD`, `YYYY-Www`, or `YYYY-MM`.
    pub period: String,
    pub total_cost: f64,
    pub meeting_count: usize,
    pub total_hours: f64,
    pub avg_cost_per_meeting: f64,
}

/// Week-of-year under the Sunday-start approximation described above.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use meetcost_analytics::periods::week_number;
///
/// // 2025-01-01 is a Wednesday; the following Sunday opens week 2.
/// assert_eq!(week_number(NaiveDate::from_ymd_opt(2025, 1, 4).unwrap()), 1);
/// assert_eq!(week_number(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()), 2);
/// ```
pub fn week_number(date: NaiveDate) -> u32 {
    let days_since_jan_1 = date.ordinal0();
    let weekday = date.weekday().num_days_from_sunday();
    let jan_1_weekday = (weekday + 7 - days_since_jan_1 % 7) % 7;
    (days_since_jan_1 + jan_1_weekday + 1).div_ceil(7)
}

/// The bucket key for `date` at the given granularity.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use meetcost_analytics::periods::period_key;
/// use meetcost_core::Granularity;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// assert_eq!(period_key(date, Granularity::Day), "2025-03-14");
/// assert_eq!(period_key(date, Granularity::Week), "2025-W11");
/// assert_eq!(period_key(date, Granularity::Month), "2025-03");
/// ```
pub fn period_key(date: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Day => date.format("%Y-%m-%d").to_string(),
        Granularity::Week => format!("{}-W{:02}", date.year(), week_number(date)),
        Granularity::Month => format!("{}-{:02}", date.year(), date.month()),
    }
}

/// Group meetings by period key. Iteration order of the map is ascending key order.
pub fn group_by_period<'a, I>(meetings: I, granularity: Granularity) -> BTreeMap<String, Vec<&'a Meeting>>
where
    I: IntoIterator<Item = &'a Meeting>,
{
    let mut grouped: BTreeMap<String, Vec<&'a Meeting>> = BTreeMap::new();
    for meeting in meetings {
        grouped
            .entry(period_key(meeting.date, granularity))
            .or_default()
            .push(meeting);
    }
    grouped
}

/// Turn grouped meetings into buckets, ascending by period key.
pub fn summarize(grouped: &BTreeMap<String, Vec<&Meeting>>) -> Vec<PeriodBucket> {
    grouped
        .iter()
        .map(|(period, meetings)| {
            let total_cost: f64 = meetings.iter().map(|m| m.calculated_cost).sum();
            let total_hours: f64 = meetings.iter().map(|m| m.hours()).sum();
            let meeting_count = meetings.len();
            let avg_cost_per_meeting = if meeting_count > 0 {
                total_cost / meeting_count as f64
            } else {
                0.0
            };
            PeriodBucket {
                period: period.clone(),
                total_cost,
                meeting_count,
                total_hours,
                avg_cost_per_meeting,
            }
        })
        .collect()
}

/// [`group_by_period`] followed by [`summarize`].
pub fn period_trends<'a, I>(meetings: I, granularity: Granularity) -> Vec<PeriodBucket>
where
    I: IntoIterator<Item = &'a Meeting>,
{
    summarize(&group_by_period(meetings, granularity))
}
