use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::{
        booking::{BookingDay, MealSummary},
        identity::normalize_email,
    },
};

/// Persistence for per-user, per-date meal choices.
///
/// `email` is always passed already normalized. Every method is a single
/// statement against the store and fails with `StorageUnavailable` when the
/// store cannot be reached.
#[async_trait]
pub trait BookingRepo: Send + Sync {
    /// Insert or overwrite `opted`. `created_at` is only written on insert.
    async fn upsert(
        &self,
        email: &str,
        meal_date: NaiveDate,
        opted: bool,
        created_at: chrono::NaiveDateTime,
    ) -> AppResult<()>;
    async fn get_booking(&self, email: &str, meal_date: NaiveDate) -> AppResult<Option<bool>>;
    /// Ascending by date.
    async fn list_bookings(&self, email: &str) -> AppResult<Vec<BookingDay>>;
    async fn get_summary_count(&self, meal_date: NaiveDate) -> AppResult<i64>;
    /// Ascending by email.
    async fn get_opted_emails(&self, meal_date: NaiveDate) -> AppResult<Vec<String>>;
    /// No-op when the record does not exist.
    async fn delete_booking(&self, email: &str, meal_date: NaiveDate) -> AppResult<()>;
}

#[derive(Clone)]
pub struct BookingUseCases {
    repo: Arc<dyn BookingRepo>,
}

impl BookingUseCases {
    pub fn new(repo: Arc<dyn BookingRepo>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn upsert(&self, email: &str, meal_date: NaiveDate, opted: bool) -> AppResult<()> {
        let email = require_email(email)?;
        let now = Utc::now().naive_utc();
        self.repo.upsert(&email, meal_date, opted, now).await
    }

    #[instrument(skip(self))]
    pub async fn get_booking(&self, email: &str, meal_date: NaiveDate) -> AppResult<Option<bool>> {
        let email = require_email(email)?;
        self.repo.get_booking(&email, meal_date).await
    }

    #[instrument(skip(self))]
    pub async fn list_bookings(&self, email: &str) -> AppResult<Vec<BookingDay>> {
        let email = require_email(email)?;
        self.repo.list_bookings(&email).await
    }

    /// Bookings from `today` onward, as shown on the user's booking screen.
    #[instrument(skip(self))]
    pub async fn list_upcoming(&self, email: &str, today: NaiveDate) -> AppResult<Vec<BookingDay>> {
        let bookings = self.list_bookings(email).await?;
        Ok(bookings
            .into_iter()
            .filter(|b| b.meal_date >= today)
            .collect())
    }

    pub async fn get_summary_count(&self, meal_date: NaiveDate) -> AppResult<i64> {
        self.repo.get_summary_count(meal_date).await
    }

    pub async fn get_opted_emails(&self, meal_date: NaiveDate) -> AppResult<Vec<String>> {
        self.repo.get_opted_emails(meal_date).await
    }

    /// Headcount and opted-in emails for a date (admin view).
    ///
    /// The count is taken from the email list so the two always agree.
    #[instrument(skip(self))]
    pub async fn summary(&self, meal_date: NaiveDate) -> AppResult<MealSummary> {
        let emails = self.repo.get_opted_emails(meal_date).await?;
        let count = emails.len() as i64;
        Ok(MealSummary {
            meal_date,
            count,
            emails,
        })
    }

    #[instrument(skip(self))]
    pub async fn delete_booking(&self, email: &str, meal_date: NaiveDate) -> AppResult<()> {
        let email = require_email(email)?;
        self.repo.delete_booking(&email, meal_date).await
    }
}

fn require_email(raw: &str) -> AppResult<String> {
    let email = normalize_email(raw);
    if email.is_empty() {
        return Err(AppError::InvalidInput("Email must not be empty".into()));
    }
    Ok(email)
}
