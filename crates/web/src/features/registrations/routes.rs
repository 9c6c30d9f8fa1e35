use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{athlete_registrations, register};
use crate::state::AppState;

/// Registration routes, mounted under the events prefix.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/:id/register", post(register))
        .route("/athlete/:athlete_id/registrations", get(athlete_registrations))
}
