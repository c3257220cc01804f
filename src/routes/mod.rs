pub mod admin;
pub mod public;
pub mod trips;

use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Method and path of every handled route, logged at startup.
pub const ROUTE_TABLE: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/createTrip"),
    ("POST", "/add"),
    ("POST", "/formTrip"),
    ("GET", "/displayAll"),
    ("GET", "/find/:trip_name"),
    ("GET", "/createDB"),
    ("GET", "/destroyAll"),
    ("GET", "/*path"),
];

pub fn create_router(state: AppState) -> Router {
    let static_files =
        ServeDir::new(&state.config.public_root).append_index_html_on_directories(false);

    Router::new()
        .merge(public::router())
        .merge(trips::router())
        .merge(admin::router())
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
