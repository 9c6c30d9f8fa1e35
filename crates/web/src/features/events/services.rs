use notifications::templates::{self, EventSummary};
use notifications::{Dispatcher, EmailMessage};
use sqlx::PgPool;
use storage::dto::event::{CreateEventRequest, UpdateEventRequest};
use storage::error::Result;
use storage::models::Event;
use storage::repository::athlete::AthleteRepository;
use storage::repository::event::EventRepository;
use uuid::Uuid;

/// List all events
pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>> {
    let repo = EventRepository::new(pool);
    repo.list().await
}

/// Get an event by ID
pub async fn get_event(pool: &PgPool, id: Uuid) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new event and announce it to every athlete with a known
/// email address
///
/// The announcement is detached; success is defined by the persistence
/// effect alone, so neither the recipient lookup nor any delivery
/// failure changes the returned result.
pub async fn create_event(
    pool: &PgPool,
    dispatcher: Option<&Dispatcher>,
    req: &CreateEventRequest,
) -> Result<Event> {
    let repo = EventRepository::new(pool);
    let event = repo.create(req).await?;

    match dispatcher {
        Some(dispatcher) => announce_event(pool, dispatcher, &event).await,
        None => tracing::warn!("Email transport not configured, skipping event announcement"),
    }

    Ok(event)
}

/// Replace an existing event; no notification is triggered by updates
pub async fn update_event(pool: &PgPool, id: Uuid, req: &UpdateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.update(id, req).await
}

/// Delete an event
pub async fn delete_event(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = EventRepository::new(pool);
    repo.delete(id).await
}

async fn announce_event(pool: &PgPool, dispatcher: &Dispatcher, event: &Event) {
    let athletes = match AthleteRepository::new(pool).list_notifiable().await {
        Ok(athletes) => athletes,
        Err(error) => {
            tracing::warn!(%error, "Could not load announcement recipients");
            return;
        }
    };

    let event_summary = summary(event);
    let messages: Vec<EmailMessage> = athletes
        .iter()
        .filter_map(|athlete| {
            athlete
                .email
                .as_deref()
                .map(|email| templates::event_announcement(email, &athlete.full_name, &event_summary))
        })
        .collect();

    dispatcher.spawn(messages);
}

pub(crate) fn summary(event: &Event) -> EventSummary {
    EventSummary {
        title: event.title.clone(),
        date: event.event_date.to_string(),
        venue: event.venue.clone(),
        city: event.city.clone(),
        category: event.category.clone(),
        description: event.description.clone(),
        registration_deadline: event.registration_deadline.map(|d| d.to_string()),
    }
}
