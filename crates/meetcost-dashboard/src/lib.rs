//! Dashboard operations over a key-value store.
//!
//! Each operation loads what it needs from a [`KvStore`], runs the analytics
//! engine, and returns an [`ActionResult`]: a success flag, an optional error
//! message, and a payload that is zeroed when the store failed. Nothing here
//! returns `Err`, so every caller can render an empty state.
//!
//! [`KvStore`]: meetcost_store::KvStore

pub mod response;
pub mod service;
pub mod summary;

pub use response::{
    Ack, ActionResult, AddedMeeting, CostSummary, Deleted, MeetingList, RatesPayload,
    SettingsPayload, StatsPayload, TrendsPayload, VelocityReport,
};
pub use service::Dashboard;
