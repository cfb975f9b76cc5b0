use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::lenient;

/// Title given to meetings recorded without one.
pub const DEFAULT_TITLE: &str = "Untitled Meeting";

/// Duration assumed when none (or an unusable one) is supplied.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

const DEFAULT_ATTENDEE_COUNT: u32 = 1;
const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_WORK_HOURS_PER_DAY: f64 = 8.0;

/// Kind of meeting, from a fixed vocabulary.
///
/// Unknown or missing values deserialize as [`MeetingType::AdHoc`].
///
/// # Examples
///
/// ```
/// use meetcost_core::MeetingType;
///
/// let t: MeetingType = serde_json::from_str("\"one-on-one\"").unwrap();
/// assert_eq!(t, MeetingType::OneOnOne);
///
/// let unknown: MeetingType = serde_json::from_str("\"offsite\"").unwrap();
/// assert_eq!(unknown, MeetingType::AdHoc);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeetingType {
    Standup,
    Planning,
    Retro,
    Review,
    OneOnOne,
    TeamSync,
    #[default]
    AdHoc,
    AllHands,
    Interview,
}

impl MeetingType {
    /// Every meeting type, in vocabulary order.
    pub const ALL: [MeetingType; 9] = [
        MeetingType::Standup,
        MeetingType::Planning,
        MeetingType::Retro,
        MeetingType::Review,
        MeetingType::OneOnOne,
        MeetingType::TeamSync,
        MeetingType::AdHoc,
        MeetingType::AllHands,
        MeetingType::Interview,
    ];

    /// Wire identifier, e.g. `"team-sync"`.
    pub fn as_str(self) -> &'static str {
        match self {
            MeetingType::Standup => "standup",
            MeetingType::Planning => "planning",
            MeetingType::Retro => "retro",
            MeetingType::Review => "review",
            MeetingType::OneOnOne => "one-on-one",
            MeetingType::TeamSync => "team-sync",
            MeetingType::AdHoc => "ad-hoc",
            MeetingType::AllHands => "all-hands",
            MeetingType::Interview => "interview",
        }
    }

    /// Human-readable label, e.g. `"Team Sync"`.
    pub fn label(self) -> &'static str {
        match self {
            MeetingType::Standup => "Standup",
            MeetingType::Planning => "Planning",
            MeetingType::Retro => "Retro",
            MeetingType::Review => "Review",
            MeetingType::OneOnOne => "One-on-One",
            MeetingType::TeamSync => "Team Sync",
            MeetingType::AdHoc => "Ad-hoc",
            MeetingType::AllHands => "All Hands",
            MeetingType::Interview => "Interview",
        }
    }

    /// Parse a type identifier, falling back to [`MeetingType::AdHoc`].
    ///
    /// # Examples
    ///
    /// ```
    /// use meetcost_core::MeetingType;
    ///
    /// assert_eq!(MeetingType::parse_lenient("Standup"), MeetingType::Standup);
    /// assert_eq!(MeetingType::parse_lenient("brainstorm"), MeetingType::AdHoc);
    /// ```
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for MeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeetingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        MeetingType::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| format!("unknown meeting type: {s}"))
    }
}

impl<'de> Deserialize<'de> for MeetingType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(MeetingType::parse_lenient).unwrap_or_default())
    }
}

/// One recorded meeting with its cost snapshot.
///
/// `calculated_cost` is computed once, when the meeting is added, from the
/// rate table in effect at that moment. Later rate changes never touch it.
///
/// # Examples
///
/// ```
/// use meetcost_core::{Meeting, MeetingType};
///
/// let json = r#"{"id":"m1","title":"Standup","date":"2025-03-03",
///     "durationMinutes":15,"attendeeCount":6,"attendeeRoles":"[\"engineer\"]",
///     "meetingType":"standup","calculatedCost":18.75}"#;
/// let meeting: Meeting = serde_json::from_str(json).unwrap();
/// assert_eq!(meeting.attendee_roles, vec!["engineer"]);
/// assert_eq!(meeting.meeting_type, MeetingType::Standup);
/// assert_eq!(meeting.hours(), 0.25);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredMeeting")]
pub struct Meeting {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Calendar date the meeting took place.
    pub date: NaiveDate,
    /// Length in minutes.
    pub duration_minutes: u32,
    /// Number of people present.
    pub attendee_count: u32,
    /// Distinct role ids represented at the meeting.
    pub attendee_roles: Vec<String>,
    /// Kind of meeting.
    pub meeting_type: MeetingType,
    /// Cost snapshot taken at creation.
    pub calculated_cost: f64,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// A meeting record as read back from storage.
///
/// Stored collections may hold records written by other tools, so every field
/// is optional and loosely typed. Conversion into [`Meeting`] fills the same
/// defaults as [`Meeting::from_new`]; a missing or unreadable date falls back
/// to the creation date.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredMeeting {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    date: Option<Value>,
    #[serde(default, deserialize_with = "lenient::count")]
    duration_minutes: Option<u32>,
    #[serde(default, deserialize_with = "lenient::count")]
    attendee_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient::roles")]
    attendee_roles: Vec<String>,
    #[serde(default)]
    meeting_type: MeetingType,
    #[serde(default, deserialize_with = "lenient::amount")]
    calculated_cost: Option<f64>,
    #[serde(default)]
    created_at: Option<Value>,
}

impl From<StoredMeeting> for Meeting {
    fn from(stored: StoredMeeting) -> Self {
        let created_at = stored
            .created_at
            .as_ref()
            .and_then(Value::as_str)
            .and_then(parse_timestamp)
            .unwrap_or_default();
        let date = stored
            .date
            .as_ref()
            .and_then(Value::as_str)
            .and_then(parse_date)
            .unwrap_or_else(|| created_at.date_naive());
        let id = match stored.id {
            Some(Value::String(id)) => id,
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        let title = stored
            .title
            .as_ref()
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map_or_else(default_title, str::to_string);

        Self {
            id,
            title,
            date,
            duration_minutes: stored.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES),
            attendee_count: stored.attendee_count.unwrap_or(DEFAULT_ATTENDEE_COUNT),
            attendee_roles: stored.attendee_roles,
            meeting_type: stored.meeting_type,
            calculated_cost: stored.calculated_cost.unwrap_or(0.0),
            created_at,
        }
    }
}

impl Meeting {
    /// Build a meeting from caller fields, applying every documented default.
    ///
    /// The cost snapshot starts at zero; the caller computes it from the
    /// resolved fields and assigns it before persisting.
    pub fn from_new(new: NewMeeting, id: String, today: NaiveDate, created_at: DateTime<Utc>) -> Self {
        let title = new
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(default_title);
        let date = new.date.as_deref().and_then(parse_date).unwrap_or(today);
        let meeting_type = new
            .meeting_type
            .as_deref()
            .map(MeetingType::parse_lenient)
            .unwrap_or_default();

        Self {
            id,
            title,
            date,
            duration_minutes: new.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES),
            attendee_count: new.attendee_count.unwrap_or(DEFAULT_ATTENDEE_COUNT),
            attendee_roles: new.attendee_roles,
            meeting_type,
            calculated_cost: 0.0,
            created_at,
        }
    }

    /// Duration in hours.
    pub fn hours(&self) -> f64 {
        f64::from(self.duration_minutes) / 60.0
    }
}

/// Caller-supplied fields for a meeting that has not been recorded yet.
///
/// Every field is optional and leniently parsed; see [`crate::lenient`].
///
/// # Examples
///
/// ```
/// use meetcost_core::NewMeeting;
///
/// let new: NewMeeting = serde_json::from_str(
///     r#"{"title":"Sprint planning","durationMinutes":"90","attendeeRoles":["pm"]}"#,
/// ).unwrap();
/// assert_eq!(new.duration_minutes, Some(90));
/// assert_eq!(new.attendee_count, None);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeeting {
    pub title: Option<String>,
    /// `YYYY-MM-DD`; a longer timestamp is truncated to its date.
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub duration_minutes: Option<u32>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub attendee_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient::roles")]
    pub attendee_roles: Vec<String>,
    pub meeting_type: Option<String>,
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

fn default_title() -> String {
    DEFAULT_TITLE.into()
}

/// Hourly rate configured for one role.
///
/// # Examples
///
/// ```
/// use meetcost_core::RoleRate;
///
/// let rate: RoleRate = serde_json::from_str(
///     r#"{"roleId":"pm","roleName":"Product Manager","hourlyRate":90}"#,
/// ).unwrap();
/// assert_eq!(rate.currency, "USD");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRate {
    /// Unique role key.
    pub role_id: String,
    /// Display label.
    pub role_name: String,
    /// Cost of one hour of this role's time.
    pub hourly_rate: f64,
    /// Informational currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl RoleRate {
    pub fn new(role_id: &str, role_name: &str, hourly_rate: f64) -> Self {
        Self {
            role_id: role_id.into(),
            role_name: role_name.into(),
            hourly_rate,
            currency: default_currency(),
        }
    }
}

/// The rate table used when none has been saved.
///
/// # Examples
///
/// ```
/// let rates = meetcost_core::default_role_rates();
/// assert_eq!(rates.len(), 7);
/// ```
pub fn default_role_rates() -> Vec<RoleRate> {
    vec![
        RoleRate::new("engineer", "Engineer", 75.0),
        RoleRate::new("senior-engineer", "Senior Engineer", 100.0),
        RoleRate::new("pm", "Product Manager", 90.0),
        RoleRate::new("designer", "Designer", 70.0),
        RoleRate::new("qa", "QA Engineer", 60.0),
        RoleRate::new("manager", "Engineering Manager", 110.0),
        RoleRate::new("executive", "Executive", 200.0),
    ]
}

/// Dashboard-wide settings, saved and replaced as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_work_hours_per_day")]
    pub work_hours_per_day: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            work_hours_per_day: default_work_hours_per_day(),
        }
    }
}

/// Format an amount in `currency`. US dollars get a `$` prefix; other
/// currencies are suffixed with their code.
///
/// # Examples
///
/// ```
/// use meetcost_core::format_money;
///
/// assert_eq!(format_money(84.615, "USD"), "$84.62");
/// assert_eq!(format_money(5000.0, "EUR"), "5000.00 EUR");
/// ```
pub fn format_money(amount: f64, currency: &str) -> String {
    if currency.eq_ignore_ascii_case(DEFAULT_CURRENCY) {
        format!("${amount:.2}")
    } else {
        format!("{amount:.2} {currency}")
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.into()
}

fn default_work_hours_per_day() -> f64 {
    DEFAULT_WORK_HOURS_PER_DAY
}

/// Look-back window for dashboard statistics.
///
/// # Examples
///
/// ```
/// use meetcost_core::DateRange;
///
/// assert_eq!(DateRange::parse_or_default("last-quarter").window_days(), 90);
/// assert_eq!(DateRange::parse_or_default("since forever"), DateRange::LastMonth);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
    LastWeek,
    #[default]
    LastMonth,
    LastQuarter,
}

impl DateRange {
    /// Number of days covered, counting back from today.
    pub fn window_days(self) -> i64 {
        match self {
            DateRange::LastWeek => 7,
            DateRange::LastMonth => 30,
            DateRange::LastQuarter => 90,
        }
    }

    /// Parse a range name, falling back to [`DateRange::LastMonth`].
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRange::LastWeek => write!(f, "last-week"),
            DateRange::LastMonth => write!(f, "last-month"),
            DateRange::LastQuarter => write!(f, "last-quarter"),
        }
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "last-week" | "week" => Ok(DateRange::LastWeek),
            "last-month" | "month" => Ok(DateRange::LastMonth),
            "last-quarter" | "quarter" => Ok(DateRange::LastQuarter),
            other => Err(format!("unknown date range: {other}")),
        }
    }
}

/// Bucket size for period trends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    #[default]
    Week,
    Month,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Day => write!(f, "day"),
            Granularity::Week => write!(f, "week"),
            Granularity::Month => write!(f, "month"),
        }
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(Granularity::Day),
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            other => Err(format!("unknown granularity: {other}")),
        }
    }
}

/// Output format for CLI subcommands.
///
/// Implements [`FromStr`] so it can be used directly with `clap` argument parsing.
///
/// # Examples
///
/// ```
/// use meetcost_core::OutputFormat;
///
/// let fmt: OutputFormat = "json".parse().unwrap();
/// assert_eq!(fmt, OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables and summaries.
    #[default]
    Text,
    /// The tagged result object as pretty JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn meeting_type_roundtrips_kebab_case() {
        for t in MeetingType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
            let back: MeetingType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, t);
        }
    }

    #[test]
    fn meeting_type_null_is_ad_hoc() {
        let t: MeetingType = serde_json::from_str("null").unwrap();
        assert_eq!(t, MeetingType::AdHoc);
    }

    #[test]
    fn meeting_type_from_str_is_strict() {
        assert_eq!("ALL-HANDS".parse::<MeetingType>().unwrap(), MeetingType::AllHands);
        assert!("offsite".parse::<MeetingType>().is_err());
    }

    #[test]
    fn from_new_applies_defaults() {
        let created = Utc::now();
        let meeting = Meeting::from_new(NewMeeting::default(), "m1".into(), today(), created);
        assert_eq!(meeting.title, DEFAULT_TITLE);
        assert_eq!(meeting.date, today());
        assert_eq!(meeting.duration_minutes, 30);
        assert_eq!(meeting.attendee_count, 1);
        assert!(meeting.attendee_roles.is_empty());
        assert_eq!(meeting.meeting_type, MeetingType::AdHoc);
        assert_eq!(meeting.calculated_cost, 0.0);
        assert_eq!(meeting.created_at, created);
    }

    #[test]
    fn from_new_keeps_supplied_fields() {
        let new = NewMeeting {
            title: Some("  Retro  ".into()),
            date: Some("2025-05-30T14:00:00Z".into()),
            duration_minutes: Some(60),
            attendee_count: Some(8),
            attendee_roles: vec!["engineer".into()],
            meeting_type: Some("retro".into()),
        };
        let meeting = Meeting::from_new(new, "m2".into(), today(), Utc::now());
        assert_eq!(meeting.title, "Retro");
        assert_eq!(meeting.date, NaiveDate::from_ymd_opt(2025, 5, 30).unwrap());
        assert_eq!(meeting.duration_minutes, 60);
        assert_eq!(meeting.attendee_count, 8);
        assert_eq!(meeting.meeting_type, MeetingType::Retro);
    }

    #[test]
    fn from_new_bad_date_and_blank_title_fall_back() {
        let new = NewMeeting {
            title: Some("   ".into()),
            date: Some("next tuesday".into()),
            meeting_type: Some("brainstorm".into()),
            ..NewMeeting::default()
        };
        let meeting = Meeting::from_new(new, "m3".into(), today(), Utc::now());
        assert_eq!(meeting.title, DEFAULT_TITLE);
        assert_eq!(meeting.date, today());
        assert_eq!(meeting.meeting_type, MeetingType::AdHoc);
    }

    #[test]
    fn new_meeting_unparsable_duration_is_none() {
        let new: NewMeeting =
            serde_json::from_str(r#"{"durationMinutes":"a while","attendeeCount":0}"#).unwrap();
        assert_eq!(new.duration_minutes, None);
        assert_eq!(new.attendee_count, None);
    }

    #[test]
    fn stored_meeting_with_loose_fields_uses_defaults() {
        let json = r#"{"id":"loose","durationMinutes":"45","attendeeCount":"zero",
            "calculatedCost":null,"createdAt":"2025-06-21T09:30:00Z"}"#;
        let meeting: Meeting = serde_json::from_str(json).unwrap();
        assert_eq!(meeting.id, "loose");
        assert_eq!(meeting.title, DEFAULT_TITLE);
        assert_eq!(meeting.duration_minutes, 45);
        assert_eq!(meeting.attendee_count, 1);
        assert_eq!(meeting.calculated_cost, 0.0);
        assert_eq!(meeting.date, NaiveDate::from_ymd_opt(2025, 6, 21).unwrap());
        assert_eq!(meeting.meeting_type, MeetingType::AdHoc);
    }

    #[test]
    fn stored_meeting_keeps_well_formed_fields() {
        let original = Meeting {
            calculated_cost: 112.5,
            attendee_roles: vec!["engineer".into(), "pm".into()],
            ..Meeting::from_new(NewMeeting::default(), "m9".into(), today(), Utc::now())
        };
        let json = serde_json::to_string(&original).unwrap();
        let back: Meeting = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn stored_meeting_with_bad_date_and_timestamp_is_still_readable() {
        let meeting: Meeting =
            serde_json::from_str(r#"{"id":7,"date":"soon","createdAt":"yesterday"}"#).unwrap();
        assert_eq!(meeting.id, "7");
        assert_eq!(meeting.created_at, DateTime::<Utc>::default());
        assert_eq!(meeting.date, DateTime::<Utc>::default().date_naive());
    }

    #[test]
    fn meeting_serializes_camel_case() {
        let meeting = Meeting::from_new(NewMeeting::default(), "m1".into(), today(), Utc::now());
        let json = serde_json::to_value(&meeting).unwrap();
        assert!(json.get("durationMinutes").is_some());
        assert!(json.get("calculatedCost").is_some());
        assert_eq!(json["date"], "2025-06-02");
        assert_eq!(json["meetingType"], "ad-hoc");
    }

    #[test]
    fn default_rates_have_unique_ids() {
        let rates = default_role_rates();
        let mut ids: Vec<&str> = rates.iter().map(|r| r.role_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 7);
        assert!(rates.iter().all(|r| r.hourly_rate >= 0.0 && r.currency == "USD"));
    }

    #[test]
    fn settings_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.work_hours_per_day, 8.0);
    }

    #[test]
    fn date_range_windows() {
        assert_eq!(DateRange::LastWeek.window_days(), 7);
        assert_eq!(DateRange::LastMonth.window_days(), 30);
        assert_eq!(DateRange::LastQuarter.window_days(), 90);
        assert_eq!(DateRange::default(), DateRange::LastMonth);
        assert_eq!(DateRange::parse_or_default("LAST-WEEK"), DateRange::LastWeek);
        assert_eq!(DateRange::parse_or_default(""), DateRange::LastMonth);
    }

    #[test]
    fn granularity_and_format_parse() {
        assert_eq!("Month".parse::<Granularity>().unwrap(), Granularity::Month);
        assert!("year".parse::<Granularity>().is_err());
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
