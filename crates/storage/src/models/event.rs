use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A scheduled activity athletes may register for.
///
/// The identifier is store-assigned and immutable; every other field is
/// replaced wholesale by an update.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
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
    pub created_by: Option<Uuid>,
    pub created_at: NaiveDateTime,
}
