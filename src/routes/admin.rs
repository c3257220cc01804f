use axum::{extract::State, routing::get, Router};

use crate::{auth::AdminAccess, error::AppError, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/createDB", get(create_db))
        .route("/destroyAll", get(destroy_all))
}

async fn create_db(
    State(state): State<AppState>,
    _admin: AdminAccess,
) -> Result<&'static str, AppError> {
    state.trips.reset_schema().await?;
    Ok("Database Created")
}

async fn destroy_all(
    State(state): State<AppState>,
    _admin: AdminAccess,
) -> Result<&'static str, AppError> {
    state.trips.drop_all().await?;
    Ok("destroy all")
}
