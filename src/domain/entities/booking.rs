use chrono::NaiveDate;
use serde::Serialize;

/// A user's choice for a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BookingDay {
    pub meal_date: NaiveDate,
    pub opted: bool,
}

/// Headcount for one date, as shown to admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSummary {
    pub meal_date: NaiveDate,
    pub count: i64,
    pub emails: Vec<String>,
}
