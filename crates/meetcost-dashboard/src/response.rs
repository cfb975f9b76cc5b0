//! Tagged results returned by every dashboard operation.

use std::fmt;

use meetcost_analytics::correlation::SprintSnapshot;
use meetcost_analytics::cost::CostLine;
use meetcost_analytics::periods::PeriodBucket;
use meetcost_analytics::stats::StatsSnapshot;
use meetcost_core::{DateRange, Granularity, Meeting, MeetcostError, RoleRate, Settings};
use serde::Serialize;
use tracing::warn;

/// `{success, error?, ...payload}` as seen by callers.
///
/// # Examples
///
/// ```
/// use meetcost_dashboard::{ActionResult, MeetingList};
///
/// let failed = ActionResult::failed("store offline", MeetingList::default());
/// let json = serde_json::to_value(&failed).unwrap();
/// assert_eq!(json["success"], false);
/// assert_eq!(json["error"], "store offline");
/// assert_eq!(json["meetings"], serde_json::json!([]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> ActionResult<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            error: None,
            payload,
        }
    }

    /// A failure carrying `payload` as the safe empty value.
    pub fn failed(error: impl fmt::Display, payload: T) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            payload,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.success
    }

    /// Log `error` under `operation` and fail with `payload`.
    pub fn failed_for(operation: &str, error: MeetcostError, payload: T) -> Self {
        warn!(operation, error = %error, "operation failed");
        Self::failed(error, payload)
    }
}

impl<T: Default> ActionResult<T> {
    /// Convert an operation outcome; failures carry the default payload.
    pub fn from_result(operation: &str, result: meetcost_core::Result<T>) -> Self {
        match result {
            Ok(payload) => Self::ok(payload),
            Err(e) => Self::failed_for(operation, e, T::default()),
        }
    }
}

/// Empty payload for operations that only report success.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ack {}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeetingList {
    pub meetings: Vec<Meeting>,
}

/// The recorded meeting and how its cost was split by role.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedMeeting {
    pub meeting: Option<Meeting>,
    pub cost_breakdown: Vec<CostLine>,
}

/// Whether a meeting with the id existed. Deleting a missing id still succeeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Deleted {
    pub deleted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsPayload {
    pub stats: StatsSnapshot,
}

/// Range-filtered cost buckets at a chosen granularity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsPayload {
    pub date_range: DateRange,
    pub granularity: Granularity,
    pub trends: Vec<PeriodBucket>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RatesPayload {
    pub rates: Vec<RoleRate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SettingsPayload {
    pub settings: Settings,
}

/// Headline figures for a date range plus a one-sentence summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    pub date_range: DateRange,
    pub total_cost: f64,
    pub total_hours: f64,
    pub meeting_count: usize,
    pub average_cost_per_meeting: f64,
    pub currency: String,
    /// Display label of the costliest meeting type, if any meetings exist.
    pub most_expensive_type: Option<String>,
    pub summary: String,
}

/// Meeting-load versus velocity correlation.
///
/// Computed from a built-in sprint sample until sprint tracking is connected;
/// `sample_data` is always `true` for now.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VelocityReport {
    pub correlation: f64,
    pub interpretation: String,
    pub recommendation: String,
    pub sample_data: bool,
    pub sprints: Vec<SprintSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_omits_error_field() {
        let json = serde_json::to_value(ActionResult::ok(Deleted { deleted: true })).unwrap();
        assert_eq!(json, json!({"success": true, "deleted": true}));
    }

    #[test]
    fn ack_flattens_to_bare_flag() {
        let json = serde_json::to_value(ActionResult::ok(Ack {})).unwrap();
        assert_eq!(json, json!({"success": true}));
    }

    #[test]
    fn from_result_zeroes_payload_on_error() {
        let result: ActionResult<StatsPayload> = ActionResult::from_result(
            "getDashboardStats",
            Err(MeetcostError::Store("disk gone".into())),
        );
        assert!(!result.is_ok());
        assert_eq!(result.error.as_deref(), Some("store error: disk gone"));
        assert_eq!(result.payload, StatsPayload::default());
    }
}
