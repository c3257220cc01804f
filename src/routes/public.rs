use askama::Template;
use askama_axum::IntoResponse as AskamaTemplateResponse;
use axum::{response::IntoResponse, routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/createTrip", get(create_trip_form))
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate;

async fn index() -> impl IntoResponse {
    AskamaTemplateResponse::into_response(IndexTemplate)
}

#[derive(Template)]
#[template(path = "createTrip.html")]
struct CreateTripTemplate;

async fn create_trip_form() -> impl IntoResponse {
    AskamaTemplateResponse::into_response(CreateTripTemplate)
}
