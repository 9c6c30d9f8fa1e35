use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::registration::{
    AthleteRegistrationResponse, RegisterRequest, RegistrationResponse,
};
use uuid::Uuid;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/events/{id}/register",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration created", body = RegistrationResponse),
        (status = 404, description = "Unknown event or athlete"),
        (status = 409, description = "Already registered for this event")
    ),
    tag = "registrations"
)]
pub async fn register(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RegisterRequest>,
) -> Result<Response, WebError> {
    let registration =
        services::register(state.db.pool(), state.dispatcher.as_ref(), id, req.athlete_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse::from(registration)),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/athlete/{athlete_id}/registrations",
    params(
        ("athlete_id" = Uuid, Path, description = "Athlete ID")
    ),
    responses(
        (status = 200, description = "The athlete's registered events, most future date first", body = Vec<AthleteRegistrationResponse>)
    ),
    tag = "registrations"
)]
pub async fn athlete_registrations(
    State(state): State<AppState>,
    Path(athlete_id): Path<Uuid>,
) -> Result<Json<Vec<AthleteRegistrationResponse>>, WebError> {
    let registrations = services::athlete_registrations(state.db.pool(), athlete_id).await?;

    Ok(Json(registrations))
}
