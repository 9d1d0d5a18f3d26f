//! In-memory store for exercising the application and HTTP layers without SQLite.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{Item, ItemId, TodoList};
use crate::error::{Error, Result};
use crate::port::outbound::store::{ItemStore, ListStore};

#[derive(Default)]
struct State {
    home: Vec<Item>,
    lists: Vec<TodoList>,
    failure: Option<String>,
}

/// Shared in-memory implementation of both store ports.
///
/// Clones share the same state, so one clone can be handed to the service
/// while the test inspects another.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with a database error.
    pub fn fail_with(&self, message: &str) {
        self.state.lock().failure = Some(message.to_string());
    }

    /// Snapshot of the home collection.
    pub fn home_items(&self) -> Vec<Item> {
        self.state.lock().home.clone()
    }

    /// Snapshot of the named list, if present.
    pub fn find_list(&self, name: &str) -> Option<TodoList> {
        self.state
            .lock()
            .lists
            .iter()
            .find(|list| list.name == name)
            .cloned()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut State) -> Result<T>) -> Result<T> {
        let mut state = self.state.lock();
        if let Some(message) = &state.failure {
            return Err(Error::Database(message.clone()));
        }
        f(&mut state)
    }
}

fn named<'a>(state: &'a mut State, name: &str) -> Result<&'a mut TodoList> {
    state
        .lists
        .iter_mut()
        .find(|list| list.name == name)
        .ok_or_else(|| Error::list_not_found(name))
}

impl ItemStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Item>> {
        self.with_state(|state| Ok(state.home.clone()))
    }

    async fn seed_if_empty(&self, items: Vec<Item>) -> Result<bool> {
        self.with_state(|state| {
            if !state.home.is_empty() {
                return Ok(false);
            }
            state.home = items;
            Ok(true)
        })
    }

    async fn insert(&self, item: &Item) -> Result<()> {
        self.with_state(|state| {
            state.home.push(item.clone());
            Ok(())
        })
    }

    async fn remove(&self, id: &ItemId) -> Result<bool> {
        self.with_state(|state| {
            let before = state.home.len();
            state.home.retain(|item| &item.id != id);
            Ok(state.home.len() != before)
        })
    }
}

impl ListStore for MemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<TodoList>> {
        self.with_state(|state| Ok(state.lists.iter().find(|l| l.name == name).cloned()))
    }

    async fn create(&self, list: &TodoList) -> Result<bool> {
        self.with_state(|state| {
            if state.lists.iter().any(|l| l.name == list.name) {
                return Ok(false);
            }
            state.lists.push(list.clone());
            Ok(true)
        })
    }

    async fn push_item(&self, name: &str, item: &Item) -> Result<()> {
        self.with_state(|state| {
            named(state, name)?.push(item.clone());
            Ok(())
        })
    }

    async fn pull_item(&self, name: &str, id: &ItemId) -> Result<bool> {
        self.with_state(|state| Ok(named(state, name)?.pull(id)))
    }
}
