//! Core types, configuration, and error handling for the Meetcost workspace.
//!
//! This crate provides the shared foundation used by all other Meetcost crates:
//! - [`MeetcostError`]: unified error type using `thiserror`
//! - [`MeetcostConfig`]: configuration loaded from `.meetcost.toml`
//! - Shared types: [`Meeting`], [`NewMeeting`], [`MeetingType`], [`RoleRate`],
//!   [`Settings`], [`DateRange`], [`Granularity`], [`OutputFormat`]
//! - Lenient input parsing in [`lenient`]

mod config;
mod error;
pub mod lenient;
mod types;

pub use config::{DashboardConfig, MeetcostConfig, StoreConfig};
pub use error::MeetcostError;
pub use types::{
    default_role_rates, format_money, DateRange, Granularity, Meeting, MeetingType, NewMeeting, OutputFormat,
    RoleRate, Settings, DEFAULT_DURATION_MINUTES, DEFAULT_TITLE,
};

/// A convenience `Result` type for Meetcost operations.
pub type Result<T> = std::result::Result<T, MeetcostError>;
