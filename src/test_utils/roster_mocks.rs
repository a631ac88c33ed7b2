//! In-memory roster source.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::auth::RosterSource,
    domain::entities::roster::{Roster, RosterRow},
};

/// Roster source backed by a vector of rows. Counts how often it is loaded.
pub struct StaticRosterSource {
    rows: Mutex<Vec<RosterRow>>,
    failure: Mutex<Option<String>>,
    loads: AtomicUsize,
}

impl StaticRosterSource {
    pub fn new(rows: Vec<RosterRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
            failure: Mutex::new(None),
            loads: AtomicUsize::new(0),
        }
    }

    /// A source whose every load fails with `RosterFormat(message)`.
    pub fn failing(message: &str) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            failure: Mutex::new(Some(message.to_string())),
            loads: AtomicUsize::new(0),
        }
    }

    /// Simulate an edit of the roster file.
    pub fn set_rows(&self, rows: Vec<RosterRow>) {
        *self.rows.lock().unwrap() = rows;
    }

    /// Make later loads fail with `RosterFormat(message)`, or succeed again with `None`.
    pub fn set_failure(&self, message: Option<&str>) {
        *self.failure.lock().unwrap() = message.map(str::to_string);
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RosterSource for StaticRosterSource {
    async fn load_roster(&self) -> AppResult<Roster> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(AppError::RosterFormat(message));
        }
        let rows = self.rows.lock().unwrap().clone();
        Roster::from_rows(rows).map_err(AppError::RosterFormat)
    }
}
