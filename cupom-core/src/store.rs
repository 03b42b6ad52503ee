//! Key-value persistence of store details and the event list.
//!
//! Every slot is read and written on its own. A missing or malformed slot
//! falls back to its default; a failed write is logged and dropped. Neither
//! ever aborts loading or touches the in-memory state.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CupomError, CupomResult};
use crate::event::EventRecord;
use crate::event_list::EventList;

pub const KEY_STORE_NAME: &str = "eventPrinter.storeName";
pub const KEY_WHATSAPP: &str = "eventPrinter.whatsapp";
pub const KEY_INSTAGRAM: &str = "eventPrinter.instagram";
pub const KEY_EVENTS: &str = "eventPrinter.events";

pub const DEFAULT_STORE_NAME: &str = "LOJA X";

/// String key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> CupomResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> CupomResult<()>;
    fn remove(&mut self, key: &str) -> CupomResult<()>;
}

/// In-memory store, mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CupomResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> CupomResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CupomResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// A JSON object file of string values, rewritten on every change.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> CupomResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            CupomError::Storage(format!("Could not parse {}: {e}", self.path.display()))
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> CupomResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| CupomError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CupomResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> CupomResult<()> {
        // A corrupt file is replaced rather than blocking every write.
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> CupomResult<()> {
        let mut entries = self.read_all().unwrap_or_default();
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

/// Everything the operator has entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub store_name: String,
    pub whatsapp: String,
    pub instagram: String,
    pub events: EventList,
}

impl AppState {
    pub fn defaults(today: NaiveDate) -> Self {
        AppState {
            store_name: DEFAULT_STORE_NAME.to_string(),
            whatsapp: String::new(),
            instagram: String::new(),
            events: EventList::from_records(vec![EventRecord::example(today)]),
        }
    }

    /// Load every slot, falling back to defaults slot by slot.
    pub fn load(store: &dyn KeyValueStore, today: NaiveDate) -> Self {
        let mut state = Self::defaults(today);

        if let Some(name) = read_slot::<String>(store, KEY_STORE_NAME) {
            state.store_name = name;
        }
        if let Some(whatsapp) = read_slot::<String>(store, KEY_WHATSAPP) {
            state.whatsapp = whatsapp;
        }
        if let Some(instagram) = read_slot::<String>(store, KEY_INSTAGRAM) {
            state.instagram = instagram;
        }
        match read_slot::<Vec<EventRecord>>(store, KEY_EVENTS) {
            Some(records) if !records.is_empty() => {
                state.events = EventList::from_records(records);
            }
            _ => {}
        }

        state
    }

    /// Write every slot. An empty event list clears its slot.
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        write_slot(store, KEY_STORE_NAME, &self.store_name);
        write_slot(store, KEY_WHATSAPP, &self.whatsapp);
        write_slot(store, KEY_INSTAGRAM, &self.instagram);

        if self.events.is_empty() {
            if let Err(e) = store.remove(KEY_EVENTS) {
                warn!(key = KEY_EVENTS, error = %e, "failed to clear stored events");
            }
        } else {
            write_slot(store, KEY_EVENTS, self.events.records());
        }
    }
}

fn read_slot<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "no stored value, using default");
            return None;
        }
        Err(e) => {
            warn!(key, error = %e, "failed to read stored value, using default");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "malformed stored value, using default");
            None
        }
    }
}

fn write_slot<T: Serialize + ?Sized>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(|e| CupomError::Serialization(e.to_string()))
        .and_then(|json| store.set(key, &json));

    if let Err(e) = result {
        warn!(key, error = %e, "failed to save value");
    }
}
