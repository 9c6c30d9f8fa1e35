use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Request payload for registering an athlete for an event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub athlete_id: Uuid,
}

/// Response for a created registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    pub registration_id: Uuid,
    pub event_id: Uuid,
    pub athlete_id: Uuid,
    pub registered_at: NaiveDateTime,
    pub status: String,
}

/// One row of an athlete's registration history: the event joined with
/// the registration stamp.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AthleteRegistrationResponse {
    pub event_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub venue: String,
    pub city: String,
    pub category: String,
    pub eligibility: Option<String>,
    pub rules: Option<String>,
    pub requirements: Option<String>,
    pub registration_deadline: Option<NaiveDate>,
    pub max_participants: Option<i32>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub image_url: Option<String>,
    pub status: String,
    pub registered_at: NaiveDateTime,
    pub registration_status: String,
}

impl From<crate::models::Registration> for RegistrationResponse {
    fn from(registration: crate::models::Registration) -> Self {
        Self {
            registration_id: registration.registration_id,
            event_id: registration.event_id,
            athlete_id: registration.athlete_id,
            registered_at: registration.registered_at,
            status: registration.status,
        }
    }
}
