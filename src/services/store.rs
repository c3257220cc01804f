use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};

use crate::{
    db::{Backend, DbPool},
    error::AppError,
    models::trip::{Trip, TripPayload},
};

pub const TRIPS_TABLE: &str = "trips";

/// Persistence for trip rows.
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Creates the table if it is missing. Never touches existing rows.
    async fn ensure_schema(&self) -> Result<(), AppError>;

    /// Inserts a row and returns it with its assigned id.
    async fn create(&self, payload: &TripPayload) -> Result<Trip, AppError>;

    /// All rows in insertion order. Empty when the table does not exist.
    async fn find_all(&self) -> Result<Vec<Trip>, AppError>;

    /// First row (lowest id) with a matching `tripName`.
    async fn find_one(&self, trip_name: &str) -> Result<Option<Trip>, AppError>;

    /// Drops and recreates the table.
    async fn reset_schema(&self) -> Result<(), AppError>;

    /// Drops the table.
    async fn drop_all(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct SqlTripStore {
    pool: DbPool,
    backend: Backend,
}

impl SqlTripStore {
    pub fn new(pool: DbPool, backend: Backend) -> Self {
        Self { pool, backend }
    }

    fn create_table_sql(&self) -> &'static str {
        match self.backend {
            Backend::Sqlite => {
                r#"
                CREATE TABLE IF NOT EXISTS trips (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    "tripName" TEXT,
                    departure TEXT,
                    destination TEXT,
                    startdate TEXT,
                    enddate TEXT,
                    "createdAt" TEXT NOT NULL,
                    "updatedAt" TEXT NOT NULL
                )
                "#
            }
            Backend::Postgres => {
                r#"
                CREATE TABLE IF NOT EXISTS trips (
                    id BIGSERIAL PRIMARY KEY,
                    "tripName" TEXT,
                    departure TEXT,
                    destination TEXT,
                    startdate TEXT,
                    enddate TEXT,
                    "createdAt" TEXT NOT NULL,
                    "updatedAt" TEXT NOT NULL
                )
                "#
            }
        }
    }

    fn table_exists_sql(&self) -> &'static str {
        match self.backend {
            Backend::Sqlite => {
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'trips'"
            }
            Backend::Postgres => {
                "SELECT COUNT(*) FROM information_schema.tables \
                 WHERE table_schema = current_schema() AND table_name = 'trips'"
            }
        }
    }

    async fn table_exists(&self) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar(self.table_exists_sql())
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }
}

#[async_trait]
impl TripRepository for SqlTripStore {
    async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(self.create_table_sql())
            .execute(&self.pool)
            .await?;
        debug!(backend = self.backend.as_str(), "{TRIPS_TABLE} schema synced");
        Ok(())
    }

    async fn create(&self, payload: &TripPayload) -> Result<Trip, AppError> {
        self.ensure_schema().await?;
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips ("tripName", departure, destination, startdate, enddate, "createdAt", "updatedAt")
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, "tripName", departure, destination, startdate, enddate, "createdAt", "updatedAt"
            "#,
        )
        .bind(payload.trip_name.clone())
        .bind(payload.departure.clone())
        .bind(payload.destination.clone())
        .bind(payload.startdate.clone())
        .bind(payload.enddate.clone())
        .bind(now.clone())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(trip)
    }

    async fn find_all(&self) -> Result<Vec<Trip>, AppError> {
        if !self.table_exists().await? {
            return Ok(Vec::new());
        }
        let trips = sqlx::query_as::<_, Trip>(
            r#"
            SELECT id, "tripName", departure, destination, startdate, enddate, "createdAt", "updatedAt"
            FROM trips
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(trips)
    }

    async fn find_one(&self, trip_name: &str) -> Result<Option<Trip>, AppError> {
        if !self.table_exists().await? {
            return Ok(None);
        }
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            SELECT id, "tripName", departure, destination, startdate, enddate, "createdAt", "updatedAt"
            FROM trips
            WHERE "tripName" = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(trip_name.to_string())
        .fetch_optional(&self.pool)
        .await?;
        Ok(trip)
    }

    async fn reset_schema(&self) -> Result<(), AppError> {
        sqlx::query("DROP TABLE IF EXISTS trips")
            .execute(&self.pool)
            .await?;
        sqlx::query(self.create_table_sql())
            .execute(&self.pool)
            .await?;
        info!(backend = self.backend.as_str(), "{TRIPS_TABLE} table recreated");
        Ok(())
    }

    async fn drop_all(&self) -> Result<(), AppError> {
        sqlx::query("DROP TABLE IF EXISTS trips")
            .execute(&self.pool)
            .await?;
        info!(backend = self.backend.as_str(), "{TRIPS_TABLE} table dropped");
        Ok(())
    }
}
