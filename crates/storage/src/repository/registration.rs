use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::registration::AthleteRegistrationResponse;
use crate::error::{FOREIGN_KEY_VIOLATION, Result, StorageError, UNIQUE_VIOLATION, has_sqlstate};
use crate::models::Registration;

/// Repository for Registration database operations
pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a registration for an (event, athlete) pair
    ///
    /// The UNIQUE constraint is the only duplicate check; there is no
    /// pre-check before the insert.
    pub async fn create(&self, event_id: Uuid, athlete_id: Uuid) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO event_registrations (event_id, athlete_id)
            VALUES ($1, $2)
            RETURNING registration_id, event_id, athlete_id, registered_at, status
            "#,
        )
        .bind(event_id)
        .bind(athlete_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if has_sqlstate(&e, UNIQUE_VIOLATION) {
                StorageError::AlreadyRegistered
            } else if has_sqlstate(&e, FOREIGN_KEY_VIOLATION) {
                // Unknown event or athlete reference
                StorageError::NotFound
            } else {
                StorageError::from(e)
            }
        })?;

        Ok(registration)
    }

    /// List an athlete's registrations joined with their events, most
    /// future event date first
    pub async fn list_for_athlete(
        &self,
        athlete_id: Uuid,
    ) -> Result<Vec<AthleteRegistrationResponse>> {
        let registrations = sqlx::query_as::<_, AthleteRegistrationResponse>(
            r#"
            SELECT e.event_id, e.title, e.description, e.event_date, e.event_time, e.venue,
                   e.city, e.category, e.eligibility, e.rules, e.requirements,
                   e.registration_deadline, e.max_participants, e.contact_email,
                   e.contact_phone, e.image_url, e.status,
                   er.registered_at, er.status AS registration_status
            FROM event_registrations er
            JOIN events e ON er.event_id = e.event_id
            WHERE er.athlete_id = $1
            ORDER BY e.event_date DESC
            "#,
        )
        .bind(athlete_id)
        .fetch_all(self.pool)
        .await?;

        Ok(registrations)
    }
}
