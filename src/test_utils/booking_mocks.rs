//! In-memory mock of the booking store.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::booking::BookingRepo,
    domain::entities::booking::BookingDay,
};

/// One stored row, shaped like `meal_orders`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    pub email: String,
    pub meal_date: NaiveDate,
    pub opted: bool,
    pub created_at: NaiveDateTime,
}

impl From<&BookingRecord> for BookingDay {
    fn from(record: &BookingRecord) -> Self {
        BookingDay {
            meal_date: record.meal_date,
            opted: record.opted,
        }
    }
}

/// In-memory implementation of `BookingRepo`, keyed like `meal_orders`.
#[derive(Default)]
pub struct InMemoryBookingRepo {
    pub records: Mutex<BTreeMap<(String, NaiveDate), BookingRecord>>,
    unavailable: AtomicBool,
    stale_count: Mutex<Option<i64>>,
}

impl InMemoryBookingRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail as if the store were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make `get_summary_count` report `count`, as if a write landed between reads.
    pub fn set_stale_summary_count(&self, count: Option<i64>) {
        *self.stale_count.lock().unwrap() = count;
    }

    pub fn record(&self, email: &str, meal_date: NaiveDate) -> Option<BookingRecord> {
        self.records
            .lock()
            .unwrap()
            .get(&(email.to_string(), meal_date))
            .cloned()
    }

    pub fn record_count(&self, email: &str, meal_date: NaiveDate) -> usize {
        self.records
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.email == email && r.meal_date == meal_date)
            .count()
    }

    fn check_available(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::StorageUnavailable("in-memory store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl BookingRepo for InMemoryBookingRepo {
    async fn upsert(
        &self,
        email: &str,
        meal_date: NaiveDate,
        opted: bool,
        created_at: NaiveDateTime,
    ) -> AppResult<()> {
        self.check_available()?;
        let mut records = self.records.lock().unwrap();
        records
            .entry((email.to_string(), meal_date))
            .and_modify(|r| r.opted = opted)
            .or_insert_with(|| BookingRecord {
                email: email.to_string(),
                meal_date,
                opted,
                created_at,
            });
        Ok(())
    }

    async fn get_booking(&self, email: &str, meal_date: NaiveDate) -> AppResult<Option<bool>> {
        self.check_available()?;
        Ok(self.record(email, meal_date).map(|r| r.opted))
    }

    async fn list_bookings(&self, email: &str) -> AppResult<Vec<BookingDay>> {
        self.check_available()?;
        let mut days: Vec<BookingDay> = self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.email == email)
            .map(BookingDay::from)
            .collect();
        days.sort_by_key(|d| d.meal_date);
        Ok(days)
    }

    async fn get_summary_count(&self, meal_date: NaiveDate) -> AppResult<i64> {
        self.check_available()?;
        if let Some(count) = *self.stale_count.lock().unwrap() {
            return Ok(count);
        }
        let count = self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.meal_date == meal_date && r.opted)
            .count();
        Ok(count as i64)
    }

    async fn get_opted_emails(&self, meal_date: NaiveDate) -> AppResult<Vec<String>> {
        self.check_available()?;
        let mut emails: Vec<String> = self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.meal_date == meal_date && r.opted)
            .map(|r| r.email.clone())
            .collect();
        emails.sort();
        Ok(emails)
    }

    async fn delete_booking(&self, email: &str, meal_date: NaiveDate) -> AppResult<()> {
        self.check_available()?;
        self.records
            .lock()
            .unwrap()
            .remove(&(email.to_string(), meal_date));
        Ok(())
    }
}
