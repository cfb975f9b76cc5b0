//! The [`Dashboard`] and its operations.

use chrono::{Local, NaiveDate, Utc};
use meetcost_analytics::correlation::{interpret, pearson, sample_sprints};
use meetcost_analytics::cost::{compute_cost, CostInput, RateTable};
use meetcost_analytics::optimize::{generate_optimizations, OptimizationReport};
use meetcost_analytics::periods::period_trends;
use meetcost_analytics::stats::{compute_stats, filter_by_range, summarize_meetings};
use meetcost_core::{
    default_role_rates, DashboardConfig, DateRange, Granularity, Meeting, MeetcostConfig,
    MeetcostError, NewMeeting, Result, RoleRate, Settings,
};
use meetcost_store::{
    load_meetings, load_role_rates_or, load_settings, save_meetings, save_role_rates,
    save_settings, KvStore,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::response::{
    Ack, ActionResult, AddedMeeting, CostSummary, Deleted, MeetingList, RatesPayload,
    SettingsPayload, StatsPayload, TrendsPayload, VelocityReport,
};
use crate::summary;

/// Meeting cost dashboard over a [`KvStore`].
///
/// Every operation reads the store fresh; nothing is cached between calls.
///
/// # Examples
///
/// ```
/// use meetcost_core::NewMeeting;
/// use meetcost_dashboard::Dashboard;
/// use meetcost_store::MemoryStore;
///
/// let dashboard = Dashboard::new(MemoryStore::new());
/// let added = dashboard.add_meeting(NewMeeting {
///     title: Some("Sprint planning".into()),
///     duration_minutes: Some(60),
///     attendee_roles: vec!["engineer".into(), "pm".into()],
///     ..NewMeeting::default()
/// });
/// assert!(added.success);
/// assert_eq!(added.payload.meeting.unwrap().calculated_cost, 165.0);
/// assert_eq!(dashboard.list_meetings(None).payload.meetings.len(), 1);
/// ```
pub struct Dashboard<S> {
    store: S,
    config: DashboardConfig,
    fallback_rates: Vec<RoleRate>,
    today: Option<NaiveDate>,
}

impl<S: KvStore> Dashboard<S> {
    /// A dashboard with built-in defaults.
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: DashboardConfig::default(),
            fallback_rates: default_role_rates(),
            today: None,
        }
    }

    /// A dashboard using the list limit, date range, and fallback rates from
    /// a loaded configuration file.
    pub fn from_config(store: S, config: &MeetcostConfig) -> Self {
        Self {
            store,
            config: config.dashboard.clone(),
            fallback_rates: config.fallback_rates(),
            today: None,
        }
    }

    /// Pin the date that ranges count back from. Defaults to the local date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn range_or_default(&self, range: Option<DateRange>) -> DateRange {
        range.unwrap_or(self.config.date_range)
    }

    fn rates(&self) -> Result<Vec<RoleRate>> {
        let fallback = &self.fallback_rates;
        load_role_rates_or(&self.store, || fallback.clone())
    }

    /// Most recent meetings first, at most `limit` of them.
    ///
    /// `None` or `0` uses the configured list limit. Meetings on the same
    /// date are ordered by creation time, newest first.
    pub fn list_meetings(&self, limit: Option<usize>) -> ActionResult<MeetingList> {
        let limit = limit
            .filter(|l| *l > 0)
            .unwrap_or(self.config.list_limit);
        ActionResult::from_result("listMeetings", self.try_list_meetings(limit))
    }

    fn try_list_meetings(&self, limit: usize) -> Result<MeetingList> {
        let mut meetings = load_meetings(&self.store)?;
        meetings.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        meetings.truncate(limit);
        Ok(MeetingList { meetings })
    }

    /// Record a meeting, snapshotting its cost at the current rates.
    pub fn add_meeting(&self, new: NewMeeting) -> ActionResult<AddedMeeting> {
        ActionResult::from_result("addMeeting", self.try_add_meeting(new))
    }

    fn try_add_meeting(&self, new: NewMeeting) -> Result<AddedMeeting> {
        let rates = RateTable::new(self.rates()?);
        let mut meetings = load_meetings(&self.store)?;

        let mut meeting = Meeting::from_new(new, Uuid::new_v4().to_string(), self.today(), Utc::now());
        let cost = compute_cost(&CostInput::from(&meeting), &rates);
        meeting.calculated_cost = cost.total_cost;

        meetings.push(meeting.clone());
        save_meetings(&self.store, &meetings)?;
        info!(
            id = %meeting.id,
            meeting_type = %meeting.meeting_type,
            cost = meeting.calculated_cost,
            "meeting added"
        );

        Ok(AddedMeeting {
            meeting: Some(meeting),
            cost_breakdown: cost.breakdown,
        })
    }

    /// Remove the meeting with `id`. A missing id is not an error.
    pub fn delete_meeting(&self, id: &str) -> ActionResult<Deleted> {
        ActionResult::from_result("deleteMeeting", self.try_delete_meeting(id))
    }

    fn try_delete_meeting(&self, id: &str) -> Result<Deleted> {
        let mut meetings = load_meetings(&self.store)?;
        let before = meetings.len();
        meetings.retain(|m| m.id != id);
        if meetings.len() == before {
            debug!(id, "no meeting to delete");
            return Ok(Deleted { deleted: false });
        }
        save_meetings(&self.store, &meetings)?;
        info!(id, "meeting deleted");
        Ok(Deleted { deleted: true })
    }

    /// Statistics for meetings inside `range` (the configured range when `None`).
    pub fn get_dashboard_stats(&self, range: Option<DateRange>) -> ActionResult<StatsPayload> {
        let range = self.range_or_default(range);
        ActionResult::from_result(
            "getDashboardStats",
            load_meetings(&self.store).map(|meetings| StatsPayload {
                stats: compute_stats(&meetings, range, self.today()),
            }),
        )
    }

    /// Cost buckets for meetings inside `range` at the given granularity.
    pub fn get_period_trends(
        &self,
        range: Option<DateRange>,
        granularity: Granularity,
    ) -> ActionResult<TrendsPayload> {
        let range = self.range_or_default(range);
        match load_meetings(&self.store) {
            Ok(meetings) => {
                let in_range = filter_by_range(&meetings, range, self.today());
                ActionResult::ok(TrendsPayload {
                    date_range: range,
                    granularity,
                    trends: period_trends(in_range, granularity),
                })
            }
            Err(e) => ActionResult::failed_for(
                "getPeriodTrends",
                e,
                TrendsPayload {
                    date_range: range,
                    granularity,
                    trends: Vec::new(),
                },
            ),
        }
    }

    pub fn get_role_rates(&self) -> ActionResult<RatesPayload> {
        ActionResult::from_result(
            "getRoleRates",
            self.rates().map(|rates| RatesPayload { rates }),
        )
    }

    /// Replace the whole rate table.
    ///
    /// Rejects blank or duplicate role ids and negative or non-finite rates;
    /// nothing is written in that case.
    pub fn save_role_rates(&self, rates: Vec<RoleRate>) -> ActionResult<Ack> {
        ActionResult::from_result("saveRoleRates", self.try_save_role_rates(&rates))
    }

    fn try_save_role_rates(&self, rates: &[RoleRate]) -> Result<Ack> {
        for (i, rate) in rates.iter().enumerate() {
            if rate.role_id.trim().is_empty() {
                return Err(MeetcostError::InvalidInput(format!(
                    "role at position {i} has an empty id"
                )));
            }
            if !rate.hourly_rate.is_finite() || rate.hourly_rate < 0.0 {
                return Err(MeetcostError::InvalidInput(format!(
                    "hourly rate for '{}' must be a non-negative number",
                    rate.role_id
                )));
            }
            if rates[..i].iter().any(|r| r.role_id == rate.role_id) {
                return Err(MeetcostError::InvalidInput(format!(
                    "duplicate role id '{}'",
                    rate.role_id
                )));
            }
        }
        save_role_rates(&self.store, rates)?;
        info!(count = rates.len(), "role rates saved");
        Ok(Ack {})
    }

    pub fn get_config(&self) -> ActionResult<SettingsPayload> {
        ActionResult::from_result(
            "getConfig",
            load_settings(&self.store).map(|settings| SettingsPayload { settings }),
        )
    }

    /// Replace the settings object.
    ///
    /// Rejects an empty currency and non-positive working hours.
    pub fn save_config(&self, settings: Settings) -> ActionResult<Ack> {
        ActionResult::from_result("saveConfig", self.try_save_config(settings))
    }

    fn try_save_config(&self, settings: Settings) -> Result<Ack> {
        let currency = settings.currency.trim().to_string();
        if currency.is_empty() {
            return Err(MeetcostError::InvalidInput("currency must not be empty".into()));
        }
        if !settings.work_hours_per_day.is_finite() || settings.work_hours_per_day <= 0.0 {
            return Err(MeetcostError::InvalidInput(
                "workHoursPerDay must be greater than zero".into(),
            ));
        }
        let settings = Settings {
            currency,
            ..settings
        };
        save_settings(&self.store, &settings)?;
        info!(currency = %settings.currency, hours = settings.work_hours_per_day, "settings saved");
        Ok(Ack {})
    }

    /// Suggestions over every stored meeting, regardless of date.
    pub fn suggest_optimizations(&self) -> ActionResult<OptimizationReport> {
        ActionResult::from_result(
            "suggestOptimizations",
            load_meetings(&self.store).and_then(|meetings| {
                let settings = load_settings(&self.store)?;
                let all: Vec<&Meeting> = meetings.iter().collect();
                Ok(generate_optimizations(
                    &summarize_meetings(&all),
                    &settings.currency,
                ))
            }),
        )
    }

    /// Headline figures and a one-sentence summary for `range`.
    pub fn get_meeting_cost_summary(&self, range: Option<DateRange>) -> ActionResult<CostSummary> {
        let range = self.range_or_default(range);
        let result = load_meetings(&self.store).and_then(|meetings| {
            let settings = load_settings(&self.store)?;
            let stats = compute_stats(&meetings, range, self.today());
            Ok(summary::summarize(&stats, range, &settings.currency))
        });
        match result {
            Ok(summary) => ActionResult::ok(summary),
            Err(e) => ActionResult::failed_for(
                "getMeetingCostSummary",
                e,
                CostSummary {
                    date_range: range,
                    ..CostSummary::default()
                },
            ),
        }
    }

    /// Correlation between sprint meeting hours and completed story points.
    ///
    /// Runs over a built-in sprint sample; the report says so with
    /// `sample_data: true`.
    pub fn get_velocity_correlation(&self) -> ActionResult<VelocityReport> {
        let sprints = sample_sprints();
        let insight = interpret(pearson(&sprints));
        debug!(correlation = insight.correlation, "velocity correlation");
        ActionResult::ok(VelocityReport {
            correlation: insight.correlation,
            interpretation: insight.interpretation,
            recommendation: insight.recommendation,
            sample_data: true,
            sprints,
        })
    }
}
