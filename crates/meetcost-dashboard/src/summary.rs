//! Natural-language cost summaries.

use meetcost_analytics::stats::StatsSnapshot;
use meetcost_core::{DateRange, MeetingType};

use crate::response::CostSummary;

/// Display label for a meeting type identifier.
///
/// Known identifiers map to their label; anything else passes through as-is.
///
/// # Examples
///
/// ```
/// use meetcost_dashboard::summary::type_label;
///
/// assert_eq!(type_label("one-on-one"), "One-on-One");
/// assert_eq!(type_label("offsite"), "offsite");
/// ```
pub fn type_label(meeting_type: &str) -> String {
    meeting_type
        .parse::<MeetingType>()
        .map(|t| t.label().to_string())
        .unwrap_or_else(|_| meeting_type.to_string())
}

pub use meetcost_core::format_money;

fn range_phrase(range: DateRange) -> &'static str {
    match range {
        DateRange::LastWeek => "the last week",
        DateRange::LastMonth => "the last month",
        DateRange::LastQuarter => "the last quarter",
    }
}

/// Build the summary payload from range-filtered statistics.
///
/// # Examples
///
/// ```
/// use meetcost_analytics::stats::StatsSnapshot;
/// use meetcost_core::DateRange;
/// use meetcost_dashboard::summary::summarize;
///
/// let summary = summarize(&StatsSnapshot::default(), DateRange::LastWeek, "USD");
/// assert_eq!(summary.summary, "No meetings were recorded in the last week.");
/// assert!(summary.most_expensive_type.is_none());
/// ```
pub fn summarize(stats: &StatsSnapshot, range: DateRange, currency: &str) -> CostSummary {
    let average_cost_per_meeting = if stats.meeting_count > 0 {
        stats.total_cost / stats.meeting_count as f64
    } else {
        0.0
    };

    // Ties keep the first type in key order.
    let most_expensive_type = stats
        .cost_by_type
        .iter()
        .fold(None::<(&String, f64)>, |best, (kind, totals)| match best {
            Some((_, cost)) if cost >= totals.cost => best,
            _ => Some((kind, totals.cost)),
        })
        .map(|(kind, _)| type_label(kind));

    let summary = if stats.meeting_count == 0 {
        format!("No meetings were recorded in {}.", range_phrase(range))
    } else {
        let noun = if stats.meeting_count == 1 { "meeting" } else { "meetings" };
        let mut text = format!(
            "In {}, {} {noun} took {:.1} hours and cost {} ({} per meeting on average).",
            range_phrase(range),
            stats.meeting_count,
            stats.total_hours,
            format_money(stats.total_cost, currency),
            format_money(average_cost_per_meeting, currency),
        );
        if let Some(kind) = &most_expensive_type {
            text.push_str(&format!(" {kind} meetings cost the most."));
        }
        text
    };

    CostSummary {
        date_range: range,
        total_cost: stats.total_cost,
        total_hours: stats.total_hours,
        meeting_count: stats.meeting_count,
        average_cost_per_meeting,
        currency: currency.to_string(),
        most_expensive_type,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meetcost_analytics::stats::TypeTotals;

    fn stats_with(types: &[(&str, f64, usize, f64)]) -> StatsSnapshot {
        let mut stats = StatsSnapshot::default();
        for (kind, cost, count, hours) in types {
            stats.cost_by_type.insert(
                kind.to_string(),
                TypeTotals {
                    cost: *cost,
                    count: *count,
                    hours: *hours,
                },
            );
            stats.total_cost += cost;
            stats.meeting_count += count;
            stats.total_hours += hours;
        }
        stats
    }

    #[test]
    fn picks_costliest_type_by_label() {
        let stats = stats_with(&[("standup", 200.0, 10, 2.5), ("team-sync", 900.0, 3, 3.0)]);
        let summary = summarize(&stats, DateRange::LastMonth, "USD");
        assert_eq!(summary.most_expensive_type.as_deref(), Some("Team Sync"));
        assert_eq!(summary.average_cost_per_meeting, 1100.0 / 13.0);
        assert_eq!(
            summary.summary,
            "In the last month, 13 meetings took 5.5 hours and cost $1100.00 ($84.62 per meeting on average). Team Sync meetings cost the most."
        );
    }

    #[test]
    fn unknown_type_passes_through() {
        let stats = stats_with(&[("offsite", 5000.0, 1, 8.0)]);
        let summary = summarize(&stats, DateRange::LastQuarter, "EUR");
        assert_eq!(summary.most_expensive_type.as_deref(), Some("offsite"));
        assert!(summary.summary.starts_with("In the last quarter, 1 meeting took 8.0 hours and cost 5000.00 EUR"));
    }

    #[test]
    fn tie_keeps_first_key() {
        let stats = stats_with(&[("planning", 300.0, 1, 1.0), ("retro", 300.0, 1, 1.0)]);
        let summary = summarize(&stats, DateRange::LastWeek, "USD");
        assert_eq!(summary.most_expensive_type.as_deref(), Some("Planning"));
    }
}
