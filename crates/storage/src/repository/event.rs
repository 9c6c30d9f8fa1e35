use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::{CreateEventRequest, UpdateEventRequest};
use crate::error::{Result, StorageError};
use crate::models::Event;

/// Repository for Event database operations
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    /// Create a new EventRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all events, most future date first
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, title, description, event_date, event_time, venue, city, category,
                   eligibility, rules, requirements, registration_deadline, max_participants,
                   contact_email, contact_phone, image_url, status, created_by, created_at
            FROM events
            ORDER BY event_date DESC, created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Get an event by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, title, description, event_date, event_time, venue, city, category,
                   eligibility, rules, requirements, registration_deadline, max_participants,
                   contact_email, contact_phone, image_url, status, created_by, created_at
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Create a new event; status is left to the column default of
    /// 'upcoming'.
    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                title, description, event_date, event_time, venue, city, category,
                eligibility, rules, requirements, registration_deadline, max_participants,
                contact_email, contact_phone, image_url, created_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING event_id, title, description, event_date, event_time, venue, city, category,
                      eligibility, rules, requirements, registration_deadline, max_participants,
                      contact_email, contact_phone, image_url, status, created_by, created_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.event_date)
        .bind(req.event_time)
        .bind(&req.venue)
        .bind(&req.city)
        .bind(&req.category)
        .bind(&req.eligibility)
        .bind(&req.rules)
        .bind(&req.requirements)
        .bind(req.registration_deadline)
        .bind(req.max_participants)
        .bind(&req.contact_email)
        .bind(&req.contact_phone)
        .bind(&req.image_url)
        .bind(req.created_by)
        .fetch_one(self.pool)
        .await?;

        Ok(event)
    }

    /// Replace every mutable field of an existing event
    ///
    /// An unknown id surfaces as NotFound rather than a zero-row
    /// success.
    pub async fn update(&self, id: Uuid, req: &UpdateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET
                title = $2,
                description = $3,
                event_date = $4,
                event_time = $5,
                venue = $6,
                city = $7,
                category = $8,
                eligibility = $9,
                rules = $10,
                requirements = $11,
                registration_deadline = $12,
                max_participants = $13,
                contact_email = $14,
                contact_phone = $15,
                image_url = $16,
                status = $17
            WHERE event_id = $1
            RETURNING event_id, title, description, event_date, event_time, venue, city, category,
                      eligibility, rules, requirements, registration_deadline, max_participants,
                      contact_email, contact_phone, image_url, status, created_by, created_at
            "#,
        )
        .bind(id)
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.event_date)
        .bind(req.event_time)
        .bind(&req.venue)
        .bind(&req.city)
        .bind(&req.category)
        .bind(&req.eligibility)
        .bind(&req.rules)
        .bind(&req.requirements)
        .bind(req.registration_deadline)
        .bind(req.max_participants)
        .bind(&req.contact_email)
        .bind(&req.contact_phone)
        .bind(&req.image_url)
        .bind(&req.status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Delete an event by ID
    ///
    /// Deleting an unknown id is a no-op; registrations cascade at the
    /// schema level.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
