use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored trip row. Column and JSON names match the `trips` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Trip {
    pub id: i64,
    pub trip_name: Option<String>,
    pub departure: Option<String>,
    pub destination: Option<String>,
    pub startdate: Option<String>,
    pub enddate: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Trip {
    pub fn trip_name_display(&self) -> &str {
        self.trip_name.as_deref().unwrap_or("")
    }

    pub fn departure_display(&self) -> &str {
        self.departure.as_deref().unwrap_or("")
    }

    pub fn destination_display(&self) -> &str {
        self.destination.as_deref().unwrap_or("")
    }

    pub fn startdate_display(&self) -> &str {
        self.startdate.as_deref().unwrap_or("")
    }

    pub fn enddate_display(&self) -> &str {
        self.enddate.as_deref().unwrap_or("")
    }
}

/// Submitted form body. Nothing is required and nothing is validated;
/// unknown keys are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPayload {
    pub trip_name: Option<String>,
    pub departure: Option<String>,
    pub destination: Option<String>,
    pub startdate: Option<String>,
    pub enddate: Option<String>,
}

impl TripPayload {
    pub fn new(
        trip_name: impl Into<String>,
        departure: impl Into<String>,
        destination: impl Into<String>,
        startdate: impl Into<String>,
        enddate: impl Into<String>,
    ) -> Self {
        Self {
            trip_name: Some(trip_name.into()),
            departure: Some(departure.into()),
            destination: Some(destination.into()),
            startdate: Some(startdate.into()),
            enddate: Some(enddate.into()),
        }
    }
}

/// A freshly created trip plus its day count. `days` is never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct TripWithDays {
    #[serde(flatten)]
    pub trip: Trip,
    pub days: Option<i64>,
}
