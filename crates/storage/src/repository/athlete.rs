use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Athlete;

/// Read-only access to athlete identities for notification content
pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find an athlete by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT athlete_id, full_name, email, created_at
            FROM athletes
            WHERE athlete_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// List every athlete with a known email address
    pub async fn list_notifiable(&self) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT athlete_id, full_name, email, created_at
            FROM athletes
            WHERE email IS NOT NULL
            ORDER BY full_name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }
}
