//! Tool implementations for the meetcost MCP server.
//!
//! Each tool delegates to one [`Dashboard`] operation and returns the tagged
//! result as pretty JSON. A result with `success: false` is also flagged as a
//! tool error so clients can surface it.

use std::sync::{Arc, Mutex, MutexGuard};

use meetcost_core::lenient::{parse_count, roles_from_value};
use meetcost_core::{DateRange, Granularity, NewMeeting, RoleRate, Settings};
use meetcost_dashboard::{ActionResult, Dashboard};
use meetcost_store::SqliteStore;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars, tool, tool_router, ErrorData as McpError,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MCP server exposing the dashboard operations.
///
/// # Examples
///
/// ```
/// use meetcost_dashboard::Dashboard;
/// use meetcost_mcp::tools::MeetcostServer;
/// use meetcost_store::SqliteStore;
///
/// let server = MeetcostServer::new(Dashboard::new(SqliteStore::in_memory().unwrap()));
/// ```
#[derive(Clone)]
pub struct MeetcostServer {
    pub(crate) dashboard: Arc<Mutex<Dashboard<SqliteStore>>>,
    pub(crate) tool_router: ToolRouter<Self>,
}

// --- Parameter structs ---

/// Parameters for the `list_meetings` tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListMeetingsParams {
    /// Maximum meetings to return (default: 50).
    pub limit: Option<usize>,
}

/// Parameters for the `add_meeting` tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct AddMeetingParams {
    /// Meeting title (default: "Untitled Meeting").
    pub title: Option<String>,
    /// Date as YYYY-MM-DD (default: today).
    pub date: Option<String>,
    /// Length in minutes, as a number or numeric string (default: 30).
    #[serde(alias = "durationMinutes")]
    pub duration_minutes: Option<Value>,
    /// Number of attendees, as a number or numeric string (default: 1).
    #[serde(alias = "attendeeCount")]
    pub attendee_count: Option<Value>,
    /// Role ids present, e.g. ["engineer", "pm"]. A JSON-encoded list string is also accepted.
    #[serde(alias = "attendeeRoles")]
    pub attendee_roles: Option<Value>,
    /// One of standup, planning, retro, review, one-on-one, team-sync, ad-hoc, all-hands, interview (default: ad-hoc).
    #[serde(alias = "meetingType")]
    pub meeting_type: Option<String>,
}

impl From<AddMeetingParams> for NewMeeting {
    fn from(params: AddMeetingParams) -> Self {
        NewMeeting {
            title: params.title,
            date: params.date,
            duration_minutes: params.duration_minutes.as_ref().and_then(parse_count),
            attendee_count: params.attendee_count.as_ref().and_then(parse_count),
            attendee_roles: params
                .attendee_roles
                .as_ref()
                .map(roles_from_value)
                .unwrap_or_default(),
            meeting_type: params.meeting_type,
        }
    }
}

/// Parameters for the `delete_meeting` tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteMeetingParams {
    /// Id of the meeting to remove.
    pub id: String,
}

/// Parameters for tools scoped to a date range.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct DateRangeParams {
    /// "last-week", "last-month", or "last-quarter" (default: configured range).
    #[serde(alias = "dateRange")]
    pub date_range: Option<String>,
}

/// Parameters for the `get_period_trends` tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct PeriodTrendsParams {
    /// "last-week", "last-month", or "last-quarter" (default: configured range).
    #[serde(alias = "dateRange")]
    pub date_range: Option<String>,
    /// "day", "week", or "month" (default: "week").
    pub granularity: Option<String>,
}

/// One role in the `save_role_rates` tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RoleRateParam {
    #[serde(alias = "roleId")]
    pub role_id: String,
    #[serde(alias = "roleName")]
    pub role_name: Option<String>,
    /// Cost per attendee-hour.
    #[serde(alias = "hourlyRate")]
    pub hourly_rate: f64,
    /// Informational currency code (default: "USD").
    pub currency: Option<String>,
}

/// Parameters for the `save_role_rates` tool.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SaveRoleRatesParams {
    /// The complete rate table; it replaces the current one.
    pub rates: Vec<RoleRateParam>,
}

/// Parameters for the `save_config` tool.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct SaveConfigParams {
    /// Currency code (default: "USD").
    pub currency: Option<String>,
    /// Working hours per day (default: 8).
    #[serde(alias = "workHoursPerDay")]
    pub work_hours_per_day: Option<f64>,
}

fn mcp_err(msg: impl Into<String>) -> McpError {
    McpError::internal_error(msg.into(), None)
}

fn respond<T: Serialize>(result: &ActionResult<T>) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(result).map_err(|e| mcp_err(e.to_string()))?;
    if result.success {
        Ok(CallToolResult::success(vec![Content::text(json)]))
    } else {
        Ok(CallToolResult::error(vec![Content::text(json)]))
    }
}

fn parse_range(raw: Option<&str>) -> Option<DateRange> {
    raw.map(DateRange::parse_or_default)
}

#[tool_router]
impl MeetcostServer {
    /// Create a server around `dashboard`.
    pub fn new(dashboard: Dashboard<SqliteStore>) -> Self {
        Self {
            dashboard: Arc::new(Mutex::new(dashboard)),
            tool_router: Self::tool_router(),
        }
    }

    fn dashboard(&self) -> Result<MutexGuard<'_, Dashboard<SqliteStore>>, McpError> {
        self.dashboard
            .lock()
            .map_err(|_| mcp_err("dashboard lock poisoned by an earlier failure"))
    }

    #[tool(
        name = "list_meetings",
        description = "List recorded meetings, most recent first, with each meeting's cost snapshot, duration, attendees, and type. Use this to see what was logged or to find a meeting id."
    )]
    pub fn list_meetings(
        &self,
        Parameters(params): Parameters<ListMeetingsParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(&self.dashboard()?.list_meetings(params.limit))
    }

    #[tool(
        name = "add_meeting",
        description = "Record a meeting. Cost is computed once from the hourly rates of the attending roles (or the average rate per attendee when no roles are given) and never changes afterwards. Missing fields fall back to defaults."
    )]
    pub fn add_meeting(
        &self,
        Parameters(params): Parameters<AddMeetingParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(&self.dashboard()?.add_meeting(params.into()))
    }

    #[tool(
        name = "delete_meeting",
        description = "Delete a meeting by id. Deleting an id that does not exist still succeeds with deleted=false."
    )]
    pub fn delete_meeting(
        &self,
        Parameters(params): Parameters<DeleteMeetingParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(&self.dashboard()?.delete_meeting(&params.id))
    }

    #[tool(
        name = "get_dashboard_stats",
        description = "Total cost, hours, and meeting count for a date range, broken down by meeting type, with weekly cost buckets and the percent change between the last two weeks."
    )]
    pub fn get_dashboard_stats(
        &self,
        Parameters(params): Parameters<DateRangeParams>,
    ) -> Result<CallToolResult, McpError> {
        let range = parse_range(params.date_range.as_deref());
        respond(&self.dashboard()?.get_dashboard_stats(range))
    }

    #[tool(
        name = "get_period_trends",
        description = "Meeting cost, hours, and count per day, week, or month within a date range. Use this to chart how meeting spend changes over time."
    )]
    pub fn get_period_trends(
        &self,
        Parameters(params): Parameters<PeriodTrendsParams>,
    ) -> Result<CallToolResult, McpError> {
        let range = parse_range(params.date_range.as_deref());
        let granularity = match params.granularity.as_deref() {
            Some(raw) => raw.parse::<Granularity>().map_err(|e| {
                McpError::invalid_params(format!("{e}. Use day, week, or month."), None)
            })?,
            None => Granularity::default(),
        };
        respond(&self.dashboard()?.get_period_trends(range, granularity))
    }

    #[tool(
        name = "get_role_rates",
        description = "The hourly rate for each role used to cost meetings. Returns the built-in table until rates are saved."
    )]
    pub fn get_role_rates(&self) -> Result<CallToolResult, McpError> {
        respond(&self.dashboard()?.get_role_rates())
    }

    #[tool(
        name = "save_role_rates",
        description = "Replace the whole role rate table. Rates must be non-negative and role ids unique. Existing meetings keep the cost they were recorded with."
    )]
    pub fn save_role_rates(
        &self,
        Parameters(params): Parameters<SaveRoleRatesParams>,
    ) -> Result<CallToolResult, McpError> {
        let rates = params
            .rates
            .into_iter()
            .map(|r| {
                let mut rate = RoleRate::new(
                    &r.role_id,
                    r.role_name.as_deref().unwrap_or(&r.role_id),
                    r.hourly_rate,
                );
                if let Some(currency) = r.currency {
                    rate.currency = currency;
                }
                rate
            })
            .collect();
        respond(&self.dashboard()?.save_role_rates(rates))
    }

    #[tool(
        name = "get_config",
        description = "Dashboard settings: currency and working hours per day."
    )]
    pub fn get_config(&self) -> Result<CallToolResult, McpError> {
        respond(&self.dashboard()?.get_config())
    }

    #[tool(
        name = "save_config",
        description = "Replace dashboard settings. Omitted fields reset to defaults (USD, 8 hours). Currency must be non-empty and hours positive."
    )]
    pub fn save_config(
        &self,
        Parameters(params): Parameters<SaveConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let defaults = Settings::default();
        let settings = Settings {
            currency: params.currency.unwrap_or(defaults.currency),
            work_hours_per_day: params
                .work_hours_per_day
                .unwrap_or(defaults.work_hours_per_day),
        };
        respond(&self.dashboard()?.save_config(settings))
    }

    #[tool(
        name = "suggest_optimizations",
        description = "Ranked suggestions for cutting meeting spend across all recorded meetings: rising costs, long standups, too many ad-hoc meetings, heavy daily load. Each comes with an estimated saving; estimates may overlap."
    )]
    pub fn suggest_optimizations(&self) -> Result<CallToolResult, McpError> {
        respond(&self.dashboard()?.suggest_optimizations())
    }

    #[tool(
        name = "get_meeting_cost_summary",
        description = "A one-sentence summary of meeting cost for a date range, with total cost, hours, average cost per meeting, and the most expensive meeting type. Use this to answer questions like 'what did meetings cost last month?'."
    )]
    pub fn get_meeting_cost_summary(
        &self,
        Parameters(params): Parameters<DateRangeParams>,
    ) -> Result<CallToolResult, McpError> {
        let range = parse_range(params.date_range.as_deref());
        respond(&self.dashboard()?.get_meeting_cost_summary(range))
    }

    #[tool(
        name = "get_velocity_correlation",
        description = "Correlation between sprint meeting hours and completed story points, with an interpretation and recommendation. Currently computed from built-in sample sprints (sampleData=true)."
    )]
    pub fn get_velocity_correlation(&self) -> Result<CallToolResult, McpError> {
        respond(&self.dashboard()?.get_velocity_correlation())
    }
}
