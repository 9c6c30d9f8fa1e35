use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Athlete identity as seen by the event module.
///
/// Profiles are owned by a separate subsystem; only name and email are
/// read here, for notification content.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
}
