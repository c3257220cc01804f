use askama::Template;
use askama_axum::IntoResponse as AskamaTemplateResponse;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Form, Router,
};

use crate::{
    error::AppError,
    models::trip::{Trip, TripPayload},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add))
        .route("/formTrip", post(form_trip))
        .route("/displayAll", get(display_all))
        .route("/find/:trip_name", get(find))
}

#[derive(Clone, Default)]
struct TripRow {
    id: i64,
    trip_name: String,
    departure: String,
    destination: String,
    startdate: String,
    enddate: String,
}

impl From<&Trip> for TripRow {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id,
            trip_name: trip.trip_name_display().to_string(),
            departure: trip.departure_display().to_string(),
            destination: trip.destination_display().to_string(),
            startdate: trip.startdate_display().to_string(),
            enddate: trip.enddate_display().to_string(),
        }
    }
}

async fn add(
    State(state): State<AppState>,
    Form(payload): Form<TripPayload>,
) -> Result<Redirect, AppError> {
    state.trips.create_from_payload(&payload).await?;
    Ok(Redirect::to("/displayAll"))
}

#[derive(Template)]
#[template(path = "formresponse.html")]
struct FormResponseTemplate {
    formresponse: TripRow,
    days: String,
}

async fn form_trip(
    State(state): State<AppState>,
    Form(payload): Form<TripPayload>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.trips.create_with_duration(&payload).await?;
    Ok(AskamaTemplateResponse::into_response(
        FormResponseTemplate {
            formresponse: TripRow::from(&created.trip),
            days: created.days.map(|d| d.to_string()).unwrap_or_default(),
        },
    ))
}

#[derive(Template)]
#[template(path = "dbresponse.html")]
struct DbResponseTemplate {
    trips: Vec<TripRow>,
    dbresponse: String,
}

async fn display_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let trips = state.trips.find_all().await?;
    let dbresponse = serde_json::to_string(&trips)?;
    Ok(AskamaTemplateResponse::into_response(DbResponseTemplate {
        trips: trips.iter().map(TripRow::from).collect(),
        dbresponse,
    }))
}

#[derive(Template)]
#[template(path = "find.html")]
struct FindTemplate {
    found: bool,
    dbresponse: TripRow,
}

async fn find(
    State(state): State<AppState>,
    Path(trip_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (found, dbresponse) = match state.trips.find_one(&trip_name).await? {
        Some(trip) => (true, TripRow::from(&trip)),
        None => (false, TripRow::default()),
    };
    Ok(AskamaTemplateResponse::into_response(FindTemplate {
        found,
        dbresponse,
    }))
}
