use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::{
    app_error::AppResult,
    domain::entities::{
        identity::{UserIdentity, normalize_email},
        roster::Roster,
    },
};

/// Where the employee roster comes from.
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Read and normalize the whole roster. Fails with `RosterFormat` on a bad source.
    async fn load_roster(&self) -> AppResult<Roster>;
}

/// Process-scoped read-through cache over a [`RosterSource`].
///
/// The first lookup reads the source; later lookups share the same snapshot.
/// Edits to the roster file are not seen until [`RosterCache::refresh`] or
/// [`RosterCache::invalidate`] is called, or the process restarts.
pub struct RosterCache {
    source: Arc<dyn RosterSource>,
    snapshot: RwLock<Option<Arc<Roster>>>,
}

impl RosterCache {
    pub fn new(source: Arc<dyn RosterSource>) -> Self {
        Self {
            source,
            snapshot: RwLock::new(None),
        }
    }

    pub async fn snapshot(&self) -> AppResult<Arc<Roster>> {
        if let Some(roster) = self.snapshot.read().await.as_ref() {
            return Ok(roster.clone());
        }

        let mut slot = self.snapshot.write().await;
        // Another task may have loaded it while we waited for the write lock.
        if let Some(roster) = slot.as_ref() {
            return Ok(roster.clone());
        }

        let roster = Arc::new(self.source.load_roster().await?);
        info!(entries = roster.len(), "Roster loaded");
        *slot = Some(roster.clone());
        Ok(roster)
    }

    /// Load the source again and swap it in. On failure the current snapshot stays.
    pub async fn refresh(&self) -> AppResult<Arc<Roster>> {
        let roster = Arc::new(self.source.load_roster().await?);
        info!(entries = roster.len(), "Roster refreshed");
        *self.snapshot.write().await = Some(roster.clone());
        Ok(roster)
    }

    /// Drop the cached snapshot; the next lookup reloads from the source.
    pub async fn invalidate(&self) {
        self.snapshot.write().await.take();
    }
}

#[derive(Clone)]
pub struct AuthUseCases {
    roster: Arc<RosterCache>,
}

impl AuthUseCases {
    pub fn new(roster: Arc<RosterCache>) -> Self {
        Self { roster }
    }

    /// Match an email against the roster. `None` means the visitor is not an employee.
    #[instrument(skip(self))]
    pub async fn authenticate(&self, raw_email: &str) -> AppResult<Option<UserIdentity>> {
        let email = normalize_email(raw_email);
        if email.is_empty() {
            return Ok(None);
        }
        let roster = self.roster.snapshot().await?;
        Ok(roster.lookup(&email))
    }

    /// Load the roster again. Returns the entry count.
    ///
    /// A failed reload keeps serving the previous roster.
    #[instrument(skip(self))]
    pub async fn reload_roster(&self) -> AppResult<usize> {
        let roster = self.roster.refresh().await?;
        Ok(roster.len())
    }
}
