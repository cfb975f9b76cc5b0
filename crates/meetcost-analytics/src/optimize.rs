//! Rule-based optimization suggestions.
//!
//! Six independent rules inspect a [`StatsSnapshot`]; each can add one
//! suggestion with a savings estimate expressed as a share of some cost.
//! Estimates are computed per rule and may target the same spend, so
//! [`OptimizationReport::total_potential_savings`] is a heuristic upper
//! bound rather than an achievable total.

use std::fmt;

use meetcost_core::{format_money, MeetingType};
use serde::{Deserialize, Serialize};

use crate::stats::StatsSnapshot;

const RISING_TREND_PERCENT: f64 = 10.0;
const STANDUP_MAX_MINUTES: f64 = 15.0;
const AD_HOC_MAX_SHARE: f64 = 0.30;
/// Workdays a snapshot's hours are spread over when judging daily load.
const WORKDAYS_PER_WINDOW: f64 = 20.0;
const MAX_DAILY_MEETING_HOURS: f64 = 3.0;
const LARGE_SPEND: f64 = 10_000.0;
const MANY_MEETINGS: usize = 30;

/// Urgency tier; suggestions are ordered high → medium → low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Which rule produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionCategory {
    CostTrend,
    Standup,
    AdHoc,
    TimeSpent,
    General,
    Attendance,
}

impl fmt::Display for SuggestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionCategory::CostTrend => write!(f, "cost-trend"),
            SuggestionCategory::Standup => write!(f, "standup"),
            SuggestionCategory::AdHoc => write!(f, "ad-hoc"),
            SuggestionCategory::TimeSpent => write!(f, "time-spent"),
            SuggestionCategory::General => write!(f, "general"),
            SuggestionCategory::Attendance => write!(f, "attendance"),
        }
    }
}

/// One recommendation with its estimated savings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub potential_savings: f64,
}

/// Output of [`generate_optimizations`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationReport {
    /// Ordered by priority; equal priorities keep rule order.
    pub suggestions: Vec<Suggestion>,
    /// Sum of every suggestion's estimate. Estimates can overlap.
    pub total_potential_savings: f64,
    pub summary: String,
}

/// Run every rule against `stats` and rank the results.
///
/// `currency` only affects how the savings total is written in the summary.
///
/// # Examples
///
/// ```
/// use meetcost_analytics::optimize::{generate_optimizations, Priority};
/// use meetcost_analytics::stats::StatsSnapshot;
///
/// let stats = StatsSnapshot {
///     total_cost: 12_000.0,
///     meeting_count: 40,
///     ..StatsSnapshot::default()
/// };
/// let report = generate_optimizations(&stats, "USD");
/// assert_eq!(report.suggestions.len(), 2);
/// assert_eq!(report.suggestions[0].priority, Priority::Medium);
/// assert_eq!(report.total_potential_savings, 3_000.0);
/// ```
pub fn generate_optimizations(stats: &StatsSnapshot, currency: &str) -> OptimizationReport {
    let rules: [fn(&StatsSnapshot) -> Option<Suggestion>; 6] = [
        rising_cost,
        standup_overrun,
        ad_hoc_overload,
        high_daily_load,
        large_total_spend,
        high_meeting_count,
    ];

    let mut suggestions: Vec<Suggestion> = rules.iter().filter_map(|rule| rule(stats)).collect();
    suggestions.sort_by_key(|s| s.priority.rank());

    let total_potential_savings: f64 = suggestions.iter().map(|s| s.potential_savings).sum();
    let summary = summarize(suggestions.len(), total_potential_savings, currency);

    OptimizationReport {
        suggestions,
        total_potential_savings,
        summary,
    }
}

fn summarize(count: usize, savings: f64, currency: &str) -> String {
    let savings = format_money(savings.round(), currency);
    match count {
        0 => "No optimization opportunities found. Meeting spend looks healthy.".to_string(),
        1 => format!("Found 1 optimization opportunity with potential savings of {savings}."),
        n => format!("Found {n} optimization opportunities with potential savings of {savings}."),
    }
}

fn rising_cost(stats: &StatsSnapshot) -> Option<Suggestion> {
    if stats.trend_percentage <= RISING_TREND_PERCENT {
        return None;
    }
    Some(Suggestion {
        category: SuggestionCategory::CostTrend,
        priority: Priority::High,
        title: "Meeting costs are rising".into(),
        description: format!(
            "Weekly meeting cost rose {:.1}% over the previous week. Review recently added recurring meetings.",
            stats.trend_percentage
        ),
        potential_savings: stats.total_cost * 0.10,
    })
}

fn standup_overrun(stats: &StatsSnapshot) -> Option<Suggestion> {
    let standups = stats.by_type(MeetingType::Standup)?;
    let avg_minutes = standups.avg_minutes();
    if avg_minutes <= STANDUP_MAX_MINUTES {
        return None;
    }
    Some(Suggestion {
        category: SuggestionCategory::Standup,
        priority: Priority::Medium,
        title: "Standups run long".into(),
        description: format!(
            "Standups average {avg_minutes:.0} minutes. Time-box them to 15 minutes and move discussions to follow-ups."
        ),
        potential_savings: standups.cost * 0.30,
    })
}

fn ad_hoc_overload(stats: &StatsSnapshot) -> Option<Suggestion> {
    let ad_hoc = stats.by_type(MeetingType::AdHoc)?;
    if stats.total_cost <= 0.0 {
        return None;
    }
    let share = ad_hoc.cost / stats.total_cost;
    if share <= AD_HOC_MAX_SHARE {
        return None;
    }
    Some(Suggestion {
        category: SuggestionCategory::AdHoc,
        priority: Priority::High,
        title: "Too many ad-hoc meetings".into(),
        description: format!(
            "Ad-hoc meetings account for {:.0}% of meeting spend. Batch topics into scheduled syncs or handle them asynchronously.",
            share * 100.0
        ),
        potential_savings: ad_hoc.cost * 0.40,
    })
}

fn high_daily_load(stats: &StatsSnapshot) -> Option<Suggestion> {
    let hours_per_day = stats.total_hours / WORKDAYS_PER_WINDOW;
    if hours_per_day <= MAX_DAILY_MEETING_HOURS {
        return None;
    }
    Some(Suggestion {
        category: SuggestionCategory::TimeSpent,
        priority: Priority::High,
        title: "Meetings crowd out focus time".into(),
        description: format!(
            "Meetings take about {hours_per_day:.1} hours per workday. Protect meeting-free focus blocks."
        ),
        potential_savings: stats.total_cost * 0.20,
    })
}

fn large_total_spend(stats: &StatsSnapshot) -> Option<Suggestion> {
    if stats.total_cost <= LARGE_SPEND {
        return None;
    }
    Some(Suggestion {
        category: SuggestionCategory::General,
        priority: Priority::Medium,
        title: "High overall meeting spend".into(),
        description: format!(
            "Meetings cost ${:.0} in this period. Audit recurring meetings and trim attendee lists.",
            stats.total_cost
        ),
        potential_savings: stats.total_cost * 0.15,
    })
}

fn high_meeting_count(stats: &StatsSnapshot) -> Option<Suggestion> {
    if stats.meeting_count <= MANY_MEETINGS {
        return None;
    }
    Some(Suggestion {
        category: SuggestionCategory::Attendance,
        priority: Priority::Low,
        title: "Lots of meetings".into(),
        description: format!(
            "{} meetings were held. Make attendance optional where people only need the notes.",
            stats.meeting_count
        ),
        potential_savings: stats.total_cost * 0.10,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::TypeTotals;

    fn with_type(mut stats: StatsSnapshot, kind: MeetingType, cost: f64, count: usize, hours: f64) -> StatsSnapshot {
        stats
            .cost_by_type
            .insert(kind.as_str().to_string(), TypeTotals { cost, count, hours });
        stats
    }

    #[test]
    fn quiet_snapshot_has_no_suggestions() {
        let report = generate_optimizations(&StatsSnapshot::default(), "USD");
        assert!(report.suggestions.is_empty());
        assert_eq!(report.total_potential_savings, 0.0);
        assert!(report.summary.starts_with("No optimization"));
    }

    #[test]
    fn rising_trend_boundary_is_exclusive() {
        let at = StatsSnapshot {
            total_cost: 1000.0,
            trend_percentage: 10.0,
            ..StatsSnapshot::default()
        };
        assert!(generate_optimizations(&at, "USD").suggestions.is_empty());

        let above = StatsSnapshot {
            trend_percentage: 10.5,
            ..at
        };
        let report = generate_optimizations(&above, "USD");
        assert_eq!(report.suggestions.len(), 1);
        assert_eq!(report.suggestions[0].category, SuggestionCategory::CostTrend);
        assert!((report.suggestions[0].potential_savings - 100.0).abs() < 1e-9);
    }

    #[test]
    fn long_standups_save_thirty_percent_of_standup_cost() {
        let stats = with_type(
            StatsSnapshot {
                total_cost: 100.0,
                total_hours: 5.0,
                meeting_count: 10,
                ..StatsSnapshot::default()
            },
            MeetingType::Standup,
            100.0,
            10,
            5.0,
        );
        let report = generate_optimizations(&stats, "USD");
        assert_eq!(report.suggestions.len(), 1);
        let s = &report.suggestions[0];
        assert_eq!(s.category, SuggestionCategory::Standup);
        assert_eq!(s.priority, Priority::Medium);
        assert!((s.potential_savings - 30.0).abs() < 1e-9);
        assert!(s.description.contains("30 minutes"));
    }

    #[test]
    fn ad_hoc_share_above_thirty_percent() {
        let base = StatsSnapshot {
            total_cost: 1000.0,
            ..StatsSnapshot::default()
        };
        let at_limit = with_type(base.clone(), MeetingType::AdHoc, 300.0, 3, 3.0);
        assert!(generate_optimizations(&at_limit, "USD").suggestions.is_empty());

        let over = with_type(base, MeetingType::AdHoc, 500.0, 5, 5.0);
        let report = generate_optimizations(&over, "USD");
        assert_eq!(report.suggestions[0].category, SuggestionCategory::AdHoc);
        assert!((report.suggestions[0].potential_savings - 200.0).abs() < 1e-9);
    }

    #[test]
    fn ad_hoc_with_zero_total_cost_does_not_fire() {
        let stats = with_type(StatsSnapshot::default(), MeetingType::AdHoc, 0.0, 2, 1.0);
        assert!(generate_optimizations(&stats, "USD").suggestions.is_empty());
    }

    #[test]
    fn daily_load_uses_twenty_workdays() {
        let at = StatsSnapshot {
            total_cost: 2000.0,
            total_hours: 60.0,
            ..StatsSnapshot::default()
        };
        assert!(generate_optimizations(&at, "USD").suggestions.is_empty());

        let over = StatsSnapshot {
            total_hours: 61.0,
            ..at
        };
        let report = generate_optimizations(&over, "USD");
        assert_eq!(report.suggestions[0].category, SuggestionCategory::TimeSpent);
        assert!((report.suggestions[0].potential_savings - 400.0).abs() < 1e-9);
    }

    #[test]
    fn ordering_is_stable_within_priority() {
        let stats = with_type(
            StatsSnapshot {
                total_cost: 20_000.0,
                total_hours: 100.0,
                meeting_count: 50,
                trend_percentage: 40.0,
                ..StatsSnapshot::default()
            },
            MeetingType::AdHoc,
            8_000.0,
            20,
            30.0,
        );
        let report = generate_optimizations(&stats, "USD");
        let categories: Vec<SuggestionCategory> =
            report.suggestions.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                SuggestionCategory::CostTrend,
                SuggestionCategory::AdHoc,
                SuggestionCategory::TimeSpent,
                SuggestionCategory::General,
                SuggestionCategory::Attendance,
            ]
        );

        let expected = 20_000.0 * 0.10 + 8_000.0 * 0.40 + 20_000.0 * 0.20 + 20_000.0 * 0.15 + 20_000.0 * 0.10;
        assert!((report.total_potential_savings - expected).abs() < 1e-6);
        assert_eq!(
            report.summary,
            "Found 5 optimization opportunities with potential savings of $14200.00."
        );
    }

    #[test]
    fn summary_uses_the_given_currency() {
        let stats = StatsSnapshot {
            total_cost: 20_000.0,
            ..StatsSnapshot::default()
        };
        let report = generate_optimizations(&stats, "EUR");
        assert_eq!(
            report.summary,
            "Found 1 optimization opportunity with potential savings of 3000.00 EUR."
        );
    }

    #[test]
    fn single_suggestion_summary_is_singular() {
        let stats = StatsSnapshot {
            meeting_count: 31,
            total_cost: 99.6,
            ..StatsSnapshot::default()
        };
        let report = generate_optimizations(&stats, "USD");
        assert_eq!(
            report.summary,
            "Found 1 optimization opportunity with potential savings of $10.00."
        );
    }
}
