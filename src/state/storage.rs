// Session persistence: four string keys, each defaulted on its own when missing or unreadable.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use crate::model::{DEFAULT_HOME_NAME, DEFAULT_TARGET, DEFAULT_VISITOR_NAME, GameState, Round};
use crate::util::{clog, cwarn, parse_int_lenient};

pub const KEY_TARGET: &str = "domino_target";
pub const KEY_HOME_NAME: &str = "domino_homeName";
pub const KEY_VISITOR_NAME: &str = "domino_visitorName";
pub const KEY_ROUNDS: &str = "domino_rounds";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// String key/value storage scoped to the browsing session.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.sessionStorage`.
pub struct SessionStore {
    storage: web_sys::Storage,
}

impl KeyValueStore for SessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// In-memory fallback when session storage is unavailable; state then lives
/// only as long as the page.
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn session_store() -> Rc<dyn KeyValueStore> {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(storage)) = win.session_storage() {
            return Rc::new(SessionStore { storage });
        }
    }
    cwarn("sessionStorage unavailable, scores will not survive a reload");
    Rc::new(MemoryStore::default())
}

/// Never fails. Totals are recomputed from the loaded rounds.
pub fn load(store: &dyn KeyValueStore) -> GameState {
    let target = store
        .get_item(KEY_TARGET)
        .and_then(|raw| parse_int_lenient(&raw))
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_TARGET);
    let home_name = load_name(store, KEY_HOME_NAME, DEFAULT_HOME_NAME);
    let visitor_name = load_name(store, KEY_VISITOR_NAME, DEFAULT_VISITOR_NAME);
    let rounds = store
        .get_item(KEY_ROUNDS)
        .and_then(|raw| serde_json::from_str::<Vec<Round>>(&raw).ok())
        .unwrap_or_default();

    let mut state = GameState {
        target,
        home_name,
        visitor_name,
        rounds,
        ..Default::default()
    };
    state.calculate_totals();
    clog(&format!(
        "loaded {} rounds, target {}",
        state.rounds.len(),
        state.target
    ));
    state
}

fn load_name(store: &dyn KeyValueStore, key: &str, default: &str) -> String {
    store
        .get_item(key)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Fire-and-forget: write failures are logged and otherwise ignored.
pub fn save(store: &dyn KeyValueStore, state: &GameState) {
    let rounds = match serde_json::to_string(&state.rounds) {
        Ok(s) => s,
        Err(e) => {
            cwarn(&format!("could not serialize rounds: {}", e));
            return;
        }
    };
    let entries = [
        (KEY_TARGET, state.target.to_string()),
        (KEY_HOME_NAME, state.home_name.clone()),
        (KEY_VISITOR_NAME, state.visitor_name.clone()),
        (KEY_ROUNDS, rounds),
    ];
    for (key, value) in entries {
        if let Err(e) = store.set_item(key, &value) {
            cwarn(&e.to_string());
        }
    }
}
