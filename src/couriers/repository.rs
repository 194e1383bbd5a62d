//! Repository layer for courier operations

use super::models::{Courier, CourierInfo, CourierRating, Manager, RatingSummary, Vacation};
use chrono::NaiveDate;
use sqlx::{PgPool, Row};

/// Courier repository
pub struct CourierRepository;

impl CourierRepository {
    /// Create a courier record for a user
    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        education: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"INSERT INTO couriers (user_id, education) VALUES ($1, $2) RETURNING id"#,
        )
        .bind(user_id)
        .bind(education)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Get courier by ID
    pub async fn get_by_id(pool: &PgPool, courier_id: i64) -> Result<Option<Courier>, sqlx::Error> {
        sqlx::query_as::<_, Courier>(
            r#"SELECT id, user_id, education, position FROM couriers WHERE id = $1"#,
        )
        .bind(courier_id)
        .fetch_optional(pool)
        .await
    }

    /// Availability check: no vacation range of this courier covers `day`
    pub async fn is_available(
        pool: &PgPool,
        courier_id: i64,
        day: NaiveDate,
    ) -> Result<bool, sqlx::Error> {
        let on_vacation = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS (
                 SELECT 1 FROM vacations
                 WHERE courier_id = $1 AND start_date <= $2 AND end_date >= $2
               )"#,
        )
        .bind(courier_id)
        .bind(day)
        .fetch_one(pool)
        .await?;

        Ok(!on_vacation)
    }

    /// List couriers with user name fields and the availability flag for `day`
    pub async fn list_with_availability(
        pool: &PgPool,
        day: NaiveDate,
    ) -> Result<Vec<CourierInfo>, sqlx::Error> {
        let rows = sqlx::query(
            r#"SELECT c.id, u.first_name, u.last_name, c.position,
                      NOT EXISTS (
                        SELECT 1 FROM vacations v
                        WHERE v.courier_id = c.id AND v.start_date <= $1 AND v.end_date >= $1
                      ) AS available
               FROM couriers c
               JOIN users u ON u.id = c.user_id
               ORDER BY u.last_name, u.first_name"#,
        )
        .bind(day)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| CourierInfo {
                id: r.get("id"),
                first_name: r.get("first_name"),
                last_name: r.get("last_name"),
                position: r.get("position"),
                available: r.get("available"),
            })
            .collect())
    }
}

/// Manager repository
pub struct ManagerRepository;

impl ManagerRepository {
    /// Create a manager record for a user
    pub async fn create(
        pool: &PgPool,
        user_id: i64,
        education: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"INSERT INTO managers (user_id, education) VALUES ($1, $2) RETURNING id"#,
        )
        .bind(user_id)
        .bind(education)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Get manager record by user
    pub async fn get_by_user(pool: &PgPool, user_id: i64) -> Result<Option<Manager>, sqlx::Error> {
        sqlx::query_as::<_, Manager>(
            r#"SELECT id, user_id, education, position FROM managers WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
    }
}

/// Vacation repository
pub struct VacationRepository;

impl VacationRepository {
    /// Record a vacation range for a courier
    pub async fn create(
        pool: &PgPool,
        courier_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vacation, sqlx::Error> {
        sqlx::query_as::<_, Vacation>(
            r#"INSERT INTO vacations (courier_id, start_date, end_date)
               VALUES ($1, $2, $3)
               RETURNING id, courier_id, start_date, end_date"#,
        )
        .bind(courier_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_one(pool)
        .await
    }

    /// All vacation ranges for a courier
    pub async fn list_for_courier(
        pool: &PgPool,
        courier_id: i64,
    ) -> Result<Vec<Vacation>, sqlx::Error> {
        sqlx::query_as::<_, Vacation>(
            r#"SELECT id, courier_id, start_date, end_date
               FROM vacations WHERE courier_id = $1
               ORDER BY start_date"#,
        )
        .bind(courier_id)
        .fetch_all(pool)
        .await
    }
}

/// Courier rating repository
pub struct RatingRepository;

impl RatingRepository {
    /// Record a client's rating of a courier
    pub async fn rate(
        pool: &PgPool,
        client_id: i64,
        courier_id: i64,
        rating: i16,
    ) -> Result<CourierRating, sqlx::Error> {
        sqlx::query_as::<_, CourierRating>(
            r#"INSERT INTO courier_ratings (client_id, courier_id, rating)
               VALUES ($1, $2, $3)
               RETURNING id, client_id, courier_id, rating, created_at"#,
        )
        .bind(client_id)
        .bind(courier_id)
        .bind(rating)
        .fetch_one(pool)
        .await
    }

    /// Average rating and count for a courier
    pub async fn summary_for_courier(
        pool: &PgPool,
        courier_id: i64,
    ) -> Result<RatingSummary, sqlx::Error> {
        let row = sqlx::query(
            r#"SELECT COUNT(*) AS count, AVG(rating)::FLOAT8 AS average
               FROM courier_ratings WHERE courier_id = $1"#,
        )
        .bind(courier_id)
        .fetch_one(pool)
        .await?;

        Ok(RatingSummary {
            courier_id,
            count: row.get("count"),
            average: row.get("average"),
        })
    }
}
