use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    date_range,
    error::AppError,
    models::trip::{Trip, TripPayload, TripWithDays},
    services::store::TripRepository,
};

/// Trip lifecycle: ingest form payloads, read them back, wipe the table.
#[derive(Clone)]
pub struct TripService {
    repo: Arc<dyn TripRepository>,
}

impl TripService {
    pub fn new(repo: Arc<dyn TripRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_from_payload(&self, payload: &TripPayload) -> Result<Trip, AppError> {
        let trip = self.repo.create(payload).await?;
        info!(id = trip.id, trip_name = trip.trip_name_display(), "trip created");
        debug!("{trip:?}");
        Ok(trip)
    }

    pub async fn create_with_duration(
        &self,
        payload: &TripPayload,
    ) -> Result<TripWithDays, AppError> {
        let days = match (payload.startdate.as_deref(), payload.enddate.as_deref()) {
            (Some(start), Some(end)) => date_range::day_count(start, end),
            _ => None,
        };
        match days {
            Some(days) => info!("number of days: {days}"),
            None => debug!("no day count, start or end date missing or unparseable"),
        }

        let trip = self.create_from_payload(payload).await?;
        Ok(TripWithDays { trip, days })
    }

    pub async fn find_all(&self) -> Result<Vec<Trip>, AppError> {
        self.repo.find_all().await
    }

    pub async fn find_one(&self, trip_name: &str) -> Result<Option<Trip>, AppError> {
        let trip = self.repo.find_one(trip_name).await?;
        if trip.is_none() {
            debug!(trip_name, "no trip found");
        }
        Ok(trip)
    }

    pub async fn reset_schema(&self) -> Result<(), AppError> {
        self.repo.reset_schema().await
    }

    pub async fn drop_all(&self) -> Result<(), AppError> {
        self.repo.drop_all().await
    }
}
