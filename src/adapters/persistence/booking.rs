use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    adapters::persistence::{PostgresPersistence, SqlitePersistence},
    app_error::{AppError, AppResult},
    application::use_cases::booking::BookingRepo,
    domain::entities::booking::BookingDay,
};

#[async_trait]
impl BookingRepo for PostgresPersistence {
    async fn upsert(
        &self,
        email: &str,
        meal_date: NaiveDate,
        opted: bool,
        created_at: NaiveDateTime,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO meal_orders (email, meal_date, opted, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email, meal_date)
            DO UPDATE SET opted = EXCLUDED.opted
            "#,
        )
        .bind(email)
        .bind(meal_date)
        .bind(opted)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(())
    }

    async fn get_booking(&self, email: &str, meal_date: NaiveDate) -> AppResult<Option<bool>> {
        let opted = sqlx::query_scalar::<_, bool>(
            "SELECT opted FROM meal_orders WHERE email = $1 AND meal_date = $2",
        )
        .bind(email)
        .bind(meal_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(opted)
    }

    async fn list_bookings(&self, email: &str) -> AppResult<Vec<BookingDay>> {
        let rows = sqlx::query_as::<_, BookingDay>(
            r#"
            SELECT meal_date, opted
            FROM meal_orders
            WHERE email = $1
            ORDER BY meal_date ASC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(rows)
    }

    async fn get_summary_count(&self, meal_date: NaiveDate) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM meal_orders WHERE meal_date = $1 AND opted = TRUE",
        )
        .bind(meal_date)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(count)
    }

    async fn get_opted_emails(&self, meal_date: NaiveDate) -> AppResult<Vec<String>> {
        let emails = sqlx::query_scalar::<_, String>(
            r#"
            SELECT email
            FROM meal_orders
            WHERE meal_date = $1 AND opted = TRUE
            ORDER BY email ASC
            "#,
        )
        .bind(meal_date)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(emails)
    }

    async fn delete_booking(&self, email: &str, meal_date: NaiveDate) -> AppResult<()> {
        sqlx::query("DELETE FROM meal_orders WHERE email = $1 AND meal_date = $2")
            .bind(email)
            .bind(meal_date)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}

#[async_trait]
impl BookingRepo for SqlitePersistence {
    async fn upsert(
        &self,
        email: &str,
        meal_date: NaiveDate,
        opted: bool,
        created_at: NaiveDateTime,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO meal_orders (email, meal_date, opted, created_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (email, meal_date)
            DO UPDATE SET opted = excluded.opted
            "#,
        )
        .bind(email)
        .bind(meal_date)
        .bind(opted)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(())
    }

    async fn get_booking(&self, email: &str, meal_date: NaiveDate) -> AppResult<Option<bool>> {
        let opted = sqlx::query_scalar::<_, bool>(
            "SELECT opted FROM meal_orders WHERE email = ? AND meal_date = ?",
        )
        .bind(email)
        .bind(meal_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(opted)
    }

    async fn list_bookings(&self, email: &str) -> AppResult<Vec<BookingDay>> {
        let rows = sqlx::query_as::<_, BookingDay>(
            r#"
            SELECT meal_date, opted
            FROM meal_orders
            WHERE email = ?
            ORDER BY meal_date ASC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(rows)
    }

    async fn get_summary_count(&self, meal_date: NaiveDate) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM meal_orders WHERE meal_date = ? AND opted = 1",
        )
        .bind(meal_date)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(count)
    }

    async fn get_opted_emails(&self, meal_date: NaiveDate) -> AppResult<Vec<String>> {
        let emails = sqlx::query_scalar::<_, String>(
            r#"
            SELECT email
            FROM meal_orders
            WHERE meal_date = ? AND opted = 1
            ORDER BY email ASC
            "#,
        )
        .bind(meal_date)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        Ok(emails)
    }

    async fn delete_booking(&self, email: &str, meal_date: NaiveDate) -> AppResult<()> {
        sqlx::query("DELETE FROM meal_orders WHERE email = ? AND meal_date = ?")
            .bind(email)
            .bind(meal_date)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
