//! Key-value persistence for meetings, role rates, and settings.
//!
//! Every value is a JSON document stored whole under one key and replaced
//! whole on write. A missing key reads as the empty or default value; a
//! stored value that no longer deserializes is a [`MeetcostError::Store`]
//! error rather than silently dropped data.
//!
//! [`MeetcostError::Store`]: meetcost_core::MeetcostError::Store

pub mod kv;
pub mod memory;
pub mod sqlite;

pub use kv::{
    load_meetings, load_role_rates, load_role_rates_or, load_settings, save_meetings,
    save_role_rates, save_settings, KvStore, MEETINGS_KEY, ROLE_RATES_KEY, SETTINGS_KEY,
};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
