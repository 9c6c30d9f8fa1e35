use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Links one athlete to one event; at most one row per pair, enforced by
/// the store's uniqueness constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Registration {
    pub registration_id: Uuid,
    pub event_id: Uuid,
    pub athlete_id: Uuid,
    pub registered_at: NaiveDateTime,
    pub status: String,
}
