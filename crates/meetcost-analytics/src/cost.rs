//! Per-meeting cost from attendee roles and hourly rates.
//!
//! A meeting with attendee roles costs one line per represented role:
//! `hours * hourly_rate`, regardless of how many people share that role.
//! A meeting without roles falls back to `average_rate * hours * attendees`.

use meetcost_core::{Meeting, RoleRate};
use serde::{Deserialize, Serialize};

/// Role → hourly rate lookup, in configured order.
///
/// # Examples
///
/// ```
/// use meetcost_analytics::cost::RateTable;
/// use meetcost_core::RoleRate;
///
/// let table = RateTable::new(vec![
///     RoleRate::new("engineer", "Engineer", 75.0),
///     RoleRate::new("pm", "Product Manager", 90.0),
/// ]);
/// assert_eq!(table.average_rate(), 82.5);
/// assert!(table.get("designer").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: Vec<RoleRate>,
}

impl RateTable {
    /// Build a table. When a role id repeats, the first entry wins.
    pub fn new(rates: Vec<RoleRate>) -> Self {
        let mut unique: Vec<RoleRate> = Vec::with_capacity(rates.len());
        for rate in rates {
            if !unique.iter().any(|r| r.role_id == rate.role_id) {
                unique.push(rate);
            }
        }
        Self { rates: unique }
    }

    pub fn get(&self, role_id: &str) -> Option<&RoleRate> {
        self.rates.iter().find(|r| r.role_id == role_id)
    }

    /// Mean hourly rate across all roles, or 0 for an empty table.
    pub fn average_rate(&self) -> f64 {
        if self.rates.is_empty() {
            return 0.0;
        }
        self.rates.iter().map(|r| r.hourly_rate).sum::<f64>() / self.rates.len() as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleRate> {
        self.rates.iter()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl From<Vec<RoleRate>> for RateTable {
    fn from(rates: Vec<RoleRate>) -> Self {
        Self::new(rates)
    }
}

/// The fields of a meeting that determine its cost.
#[derive(Debug, Clone, Copy)]
pub struct CostInput<'a> {
    pub duration_minutes: u32,
    pub attendee_count: u32,
    pub attendee_roles: &'a [String],
}

impl<'a> From<&'a Meeting> for CostInput<'a> {
    fn from(meeting: &'a Meeting) -> Self {
        Self {
            duration_minutes: meeting.duration_minutes,
            attendee_count: meeting.attendee_count,
            attendee_roles: &meeting.attendee_roles,
        }
    }
}

/// Cost contributed by one attending role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLine {
    pub role_id: String,
    pub role_name: String,
    pub hourly_rate: f64,
    pub cost: f64,
}

/// Result of [`compute_cost`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingCost {
    pub total_cost: f64,
    /// One line per attending role found in the rate table. Empty when the
    /// average-rate fallback was used.
    pub breakdown: Vec<CostLine>,
    pub cost_per_minute: f64,
    pub cost_per_hour: f64,
}

/// Compute the cost of a meeting.
///
/// Role ids missing from `rates` contribute nothing. With no roles at all,
/// the average rate is charged per attendee; an empty table makes that zero.
///
/// # Examples
///
/// ```
/// use meetcost_analytics::cost::{compute_cost, CostInput, RateTable};
/// use meetcost_core::RoleRate;
///
/// let rates = RateTable::new(vec![
///     RoleRate::new("engineer", "Engineer", 75.0),
///     RoleRate::new("pm", "Product Manager", 90.0),
/// ]);
/// let roles = vec!["engineer".to_string(), "pm".to_string()];
/// let cost = compute_cost(
///     &CostInput { duration_minutes: 60, attendee_count: 5, attendee_roles: &roles },
///     &rates,
/// );
/// assert_eq!(cost.total_cost, 165.0);
/// assert_eq!(cost.breakdown.len(), 2);
/// ```
pub fn compute_cost(input: &CostInput<'_>, rates: &RateTable) -> MeetingCost {
    let hours = f64::from(input.duration_minutes) / 60.0;

    let (total_cost, breakdown) = if input.attendee_roles.is_empty() {
        let total = rates.average_rate() * hours * f64::from(input.attendee_count);
        (total, Vec::new())
    } else {
        let breakdown: Vec<CostLine> = rates
            .iter()
            .filter(|rate| input.attendee_roles.iter().any(|r| *r == rate.role_id))
            .map(|rate| CostLine {
                role_id: rate.role_id.clone(),
                role_name: rate.role_name.clone(),
                hourly_rate: rate.hourly_rate,
                cost: hours * rate.hourly_rate,
            })
            .collect();
        let total = breakdown.iter().map(|line| line.cost).sum();
        (total, breakdown)
    };

    let cost_per_minute = if input.duration_minutes > 0 {
        total_cost / f64::from(input.duration_minutes)
    } else {
        0.0
    };
    let hour_denominator = if hours > 0.0 { hours } else { 1.0 };

    MeetingCost {
        total_cost,
        breakdown,
        cost_per_minute,
        cost_per_hour: total_cost / hour_denominator,
    }
}
