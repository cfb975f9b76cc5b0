//! The store trait and the typed accessors built on it.

use meetcost_core::{default_role_rates, Meeting, MeetcostError, Result, RoleRate, Settings};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Key holding the full meeting collection.
pub const MEETINGS_KEY: &str = "meetings";
/// Key holding the configured role rates.
pub const ROLE_RATES_KEY: &str = "config:roleRates";
/// Key holding dashboard settings.
pub const SETTINGS_KEY: &str = "config:settings";

/// A store of whole JSON values addressed by string keys.
///
/// `set` replaces the previous value; there is no partial merge.
///
/// # Examples
///
/// ```
/// use meetcost_store::{KvStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// assert!(store.get("missing").unwrap().is_none());
/// store.set("answer", &serde_json::json!(42)).unwrap();
/// assert_eq!(store.get("answer").unwrap(), Some(serde_json::json!(42)));
/// ```
pub trait KvStore {
    /// Read the value at `key`, or `None` when nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns [`MeetcostError::Store`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Replace the value at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MeetcostError::Store`] when the backend cannot be written.
    fn set(&self, key: &str, value: &Value) -> Result<()>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        (**self).set(key, value)
    }
}

fn load<T: DeserializeOwned>(store: &impl KvStore, key: &str) -> Result<Option<T>> {
    let Some(value) = store.get(key)? else {
        debug!(key, "key not set");
        return Ok(None);
    };
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| MeetcostError::Store(format!("stored value for '{key}' is unreadable: {e}")))
}

fn save<T: Serialize + ?Sized>(store: &impl KvStore, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_value(value)?;
    store.set(key, &json)
}

/// All stored meetings, in insertion order. Empty when none were saved.
///
/// Records are read one at a time: loosely typed fields take their defaults
/// (see [`Meeting`]), and an entry that is not a record at all is skipped
/// with a warning.
///
/// # Errors
///
/// Returns [`MeetcostError::Store`] if the store fails or the stored value
/// is not a list.
///
/// # Examples
///
/// ```
/// use meetcost_store::{load_meetings, MemoryStore};
///
/// let store = MemoryStore::new();
/// assert!(load_meetings(&store).unwrap().is_empty());
/// ```
pub fn load_meetings(store: &impl KvStore) -> Result<Vec<Meeting>> {
    let records: Vec<Value> = load(store, MEETINGS_KEY)?.unwrap_or_default();
    let total = records.len();
    let meetings: Vec<Meeting> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(meeting) => Some(meeting),
            Err(e) => {
                warn!(index, error = %e, "skipping unreadable meeting record");
                None
            }
        })
        .collect();
    debug!(count = meetings.len(), skipped = total - meetings.len(), "loaded meetings");
    Ok(meetings)
}

/// Replace the whole meeting collection.
///
/// # Errors
///
/// Returns [`MeetcostError::Store`] if the write fails.
pub fn save_meetings(store: &impl KvStore, meetings: &[Meeting]) -> Result<()> {
    save(store, MEETINGS_KEY, meetings)
}

/// Configured role rates, or the built-in table when none were saved.
///
/// # Errors
///
/// Returns [`MeetcostError::Store`] if the store fails or the stored rates
/// cannot be read back.
///
/// # Examples
///
/// ```
/// use meetcost_store::{load_role_rates, MemoryStore};
///
/// let rates = load_role_rates(&MemoryStore::new()).unwrap();
/// assert_eq!(rates.len(), 7);
/// assert_eq!(rates[0].role_id, "engineer");
/// ```
pub fn load_role_rates(store: &impl KvStore) -> Result<Vec<RoleRate>> {
    load_role_rates_or(store, default_role_rates)
}

/// Configured role rates, or `fallback()` when none were saved.
///
/// An explicitly saved empty list is returned as-is.
///
/// # Errors
///
/// Returns [`MeetcostError::Store`] if the store fails or the stored rates
/// cannot be read back.
pub fn load_role_rates_or(
    store: &impl KvStore,
    fallback: impl FnOnce() -> Vec<RoleRate>,
) -> Result<Vec<RoleRate>> {
    Ok(load(store, ROLE_RATES_KEY)?.unwrap_or_else(fallback))
}

/// Replace the whole rate table.
///
/// # Errors
///
/// Returns [`MeetcostError::Store`] if the write fails.
pub fn save_role_rates(store: &impl KvStore, rates: &[RoleRate]) -> Result<()> {
    save(store, ROLE_RATES_KEY, rates)
}

/// Stored settings, or defaults when none were saved.
///
/// # Errors
///
/// Returns [`MeetcostError::Store`] if the store fails or the stored
/// settings cannot be read back.
pub fn load_settings(store: &impl KvStore) -> Result<Settings> {
    Ok(load(store, SETTINGS_KEY)?.unwrap_or_default())
}

/// Replace the settings object.
///
/// # Errors
///
/// Returns [`MeetcostError::Store`] if the write fails.
pub fn save_settings(store: &impl KvStore, settings: &Settings) -> Result<()> {
    save(store, SETTINGS_KEY, settings)
}
