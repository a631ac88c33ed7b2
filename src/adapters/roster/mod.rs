use std::path::PathBuf;

use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use tracing::{instrument, warn};

use crate::{
    app_error::{AppError, AppResult},
    application::{use_cases::auth::RosterSource, validators::is_valid_email},
    domain::entities::roster::{Roster, RosterRow},
};

const REQUIRED_COLUMNS: [&str; 3] = ["email", "userid", "name"];

/// Employee roster stored as a CSV file with `email`, `userid` and `name` columns.
pub struct CsvRosterSource {
    path: PathBuf,
}

impl CsvRosterSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RosterSource for CsvRosterSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load_roster(&self) -> AppResult<Roster> {
        let data = tokio::fs::read(&self.path).await.map_err(|e| {
            AppError::RosterFormat(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        parse_roster(&data)
    }
}

// Field names match the lowercased header names.
#[derive(Deserialize)]
struct CsvRow {
    email: String,
    userid: String,
    name: String,
}

/// Parse roster CSV bytes. Headers match case-insensitively; extra columns are ignored.
pub fn parse_roster(data: &[u8]) -> AppResult<Roster> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(data);

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| AppError::RosterFormat(format!("unreadable header row: {}", e)))?
        .iter()
        .map(|h| h.to_lowercase())
        .collect();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::RosterFormat(format!(
            "roster must contain columns {:?}, missing {:?}",
            REQUIRED_COLUMNS, missing
        )));
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        // Header is line 1.
        let line = index + 2;
        let record = record.map_err(|e| AppError::RosterFormat(format!("line {}: {}", line, e)))?;
        let row: CsvRow = record
            .deserialize(Some(&headers))
            .map_err(|e| AppError::RosterFormat(format!("line {}: {}", line, e)))?;
        if !row.email.is_empty() && !is_valid_email(&row.email) {
            warn!(line, email = %row.email, "Roster email does not look like an address");
        }
        rows.push(RosterRow {
            email: row.email,
            user_id: row.userid,
            name: row.name,
        });
    }

    Roster::from_rows(rows).map_err(AppError::RosterFormat)
}
