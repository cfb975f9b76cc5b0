//! Whole-range dashboard statistics.
//!
//! Aggregates the cost snapshot stored on each meeting; nothing is recomputed
//! from current rates. The snapshot always satisfies
//! `total_cost == Σ cost_by_type[*].cost` and
//! `total_hours == Σ cost_by_type[*].hours` up to floating-point rounding.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use meetcost_core::{DateRange, Granularity, Meeting, MeetingType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::periods::{period_trends, PeriodBucket};

/// Cost, count, and hours for one meeting type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeTotals {
    pub cost: f64,
    pub count: usize,
    pub hours: f64,
}

impl TypeTotals {
    /// Average meeting length in minutes, or 0 when no meetings were counted.
    pub fn avg_minutes(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.hours / self.count as f64 * 60.0
    }
}

/// Dashboard statistics for a set of meetings.
///
/// The default value is the zeroed snapshot callers render as an empty state.
///
/// # Examples
///
/// ```
/// use meetcost_analytics::stats::StatsSnapshot;
///
/// let empty = StatsSnapshot::default();
/// assert_eq!(empty.meeting_count, 0);
/// assert!(empty.cost_by_type.is_empty());
/// assert_eq!(empty.trend_percentage, 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total_cost: f64,
    pub total_hours: f64,
    pub meeting_count: usize,
    /// Keyed by meeting type identifier (`"standup"`, `"ad-hoc"`, ...).
    pub cost_by_type: BTreeMap<String, TypeTotals>,
    /// Weekly buckets, ascending.
    pub trends: Vec<PeriodBucket>,
    /// Cost change between the last two weekly buckets, in percent.
    pub trend_percentage: f64,
}

impl StatsSnapshot {
    pub fn by_type(&self, meeting_type: MeetingType) -> Option<&TypeTotals> {
        self.cost_by_type.get(meeting_type.as_str())
    }
}

/// Meetings dated on or after `today - range.window_days()`.
pub fn filter_by_range(meetings: &[Meeting], range: DateRange, today: NaiveDate) -> Vec<&Meeting> {
    let cutoff = today - Duration::days(range.window_days());
    meetings.iter().filter(|m| m.date >= cutoff).collect()
}

/// Compute statistics for the meetings inside `range`, counted back from `today`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use meetcost_analytics::stats::compute_stats;
/// use meetcost_core::DateRange;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let stats = compute_stats(&[], DateRange::LastWeek, today);
/// assert_eq!(stats.total_cost, 0.0);
/// assert!(stats.trends.is_empty());
/// ```
pub fn compute_stats(meetings: &[Meeting], range: DateRange, today: NaiveDate) -> StatsSnapshot {
    let filtered = filter_by_range(meetings, range, today);
    debug!(
        range = %range,
        total = meetings.len(),
        in_range = filtered.len(),
        "computing dashboard stats"
    );
    summarize_meetings(&filtered)
}

/// Compute statistics over exactly the given meetings, with no date filter.
pub fn summarize_meetings(meetings: &[&Meeting]) -> StatsSnapshot {
    let mut cost_by_type: BTreeMap<String, TypeTotals> = BTreeMap::new();
    for meeting in meetings {
        let totals = cost_by_type
            .entry(meeting.meeting_type.as_str().to_string())
            .or_default();
        totals.cost += meeting.calculated_cost;
        totals.count += 1;
        totals.hours += meeting.hours();
    }

    let trends = period_trends(meetings.iter().copied(), Granularity::Week);
    let trend_percentage = trend_percentage(&trends);

    StatsSnapshot {
        total_cost: meetings.iter().map(|m| m.calculated_cost).sum(),
        total_hours: meetings.iter().map(|m| m.hours()).sum(),
        meeting_count: meetings.len(),
        cost_by_type,
        trends,
        trend_percentage,
    }
}

/// Percent change from the second-to-last bucket's cost to the last one's.
///
/// Zero with fewer than two buckets or when the earlier bucket cost nothing.
///
/// # Examples
///
/// ```
/// use meetcost_analytics::periods::PeriodBucket;
/// use meetcost_analytics::stats::trend_percentage;
///
/// let bucket = |period: &str, total_cost: f64| PeriodBucket {
///     period: period.into(),
///     total_cost,
///     meeting_count: 1,
///     total_hours: 1.0,
///     avg_cost_per_meeting: total_cost,
/// };
/// let trends = vec![bucket("2025-W01", 200.0), bucket("2025-W02", 250.0)];
/// assert_eq!(trend_percentage(&trends), 25.0);
/// assert_eq!(trend_percentage(&trends[..1]), 0.0);
/// ```
pub fn trend_percentage(trends: &[PeriodBucket]) -> f64 {
    let [.., previous, last] = trends else {
        return 0.0;
    };
    if previous.total_cost == 0.0 {
        return 0.0;
    }
    (last.total_cost - previous.total_cost) / previous.total_cost * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn meeting(on: NaiveDate, kind: MeetingType, minutes: u32, cost: f64) -> Meeting {
        Meeting {
            id: format!("{on}-{kind}-{minutes}"),
            title: kind.label().into(),
            date: on,
            duration_minutes: minutes,
            attendee_count: 4,
            attendee_roles: Vec::new(),
            meeting_type: kind,
            calculated_cost: cost,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn range_filter_is_inclusive_of_cutoff() {
        let today = date(2025, 6, 30);
        let meetings = vec![
            meeting(date(2025, 6, 23), MeetingType::Standup, 15, 10.0),
            meeting(date(2025, 6, 22), MeetingType::Standup, 15, 10.0),
        ];
        let in_week = filter_by_range(&meetings, DateRange::LastWeek, today);
        assert_eq!(in_week.len(), 1);
        assert_eq!(in_week[0].date, date(2025, 6, 23));
    }

    #[test]
    fn quarter_includes_older_meetings_than_month() {
        let today = date(2025, 6, 30);
        let meetings = vec![
            meeting(date(2025, 6, 1), MeetingType::Planning, 60, 500.0),
            meeting(date(2025, 4, 15), MeetingType::Planning, 60, 500.0),
        ];
        assert_eq!(compute_stats(&meetings, DateRange::LastMonth, today).meeting_count, 1);
        assert_eq!(compute_stats(&meetings, DateRange::LastQuarter, today).meeting_count, 2);
    }

    #[test]
    fn totals_and_type_breakdown() {
        let today = date(2025, 6, 30);
        let meetings = vec![
            meeting(date(2025, 6, 27), MeetingType::Standup, 15, 50.0),
            meeting(date(2025, 6, 26), MeetingType::Standup, 15, 50.0),
            meeting(date(2025, 6, 25), MeetingType::Retro, 60, 400.0),
        ];
        let stats = compute_stats(&meetings, DateRange::LastMonth, today);
        assert_eq!(stats.meeting_count, 3);
        assert_eq!(stats.total_cost, 500.0);
        assert_eq!(stats.total_hours, 1.5);

        let standup = stats.by_type(MeetingType::Standup).unwrap();
        assert_eq!(standup.count, 2);
        assert_eq!(standup.cost, 100.0);
        assert_eq!(standup.avg_minutes(), 15.0);
        assert!(stats.by_type(MeetingType::Review).is_none());
    }

    #[test]
    fn trend_compares_last_two_weeks() {
        let today = date(2025, 6, 30);
        let meetings = vec![
            // 2025-06-16 and 2025-06-23 fall in consecutive Sunday-start weeks.
            meeting(date(2025, 6, 16), MeetingType::TeamSync, 60, 400.0),
            meeting(date(2025, 6, 23), MeetingType::TeamSync, 60, 300.0),
        ];
        let stats = compute_stats(&meetings, DateRange::LastMonth, today);
        assert_eq!(stats.trends.len(), 2);
        assert_eq!(stats.trend_percentage, -25.0);
    }

    #[test]
    fn trend_guard_on_zero_cost_baseline() {
        let today = date(2025, 6, 30);
        let meetings = vec![
            meeting(date(2025, 6, 16), MeetingType::AdHoc, 30, 0.0),
            meeting(date(2025, 6, 23), MeetingType::AdHoc, 30, 120.0),
        ];
        let stats = compute_stats(&meetings, DateRange::LastMonth, today);
        assert_eq!(stats.trends.len(), 2);
        assert_eq!(stats.trend_percentage, 0.0);
        assert!(stats.trend_percentage.is_finite());
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let stats = StatsSnapshot::default();
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json.get("totalCost").is_some());
        assert!(json.get("costByType").is_some());
        assert!(json.get("trendPercentage").is_some());
    }
}
