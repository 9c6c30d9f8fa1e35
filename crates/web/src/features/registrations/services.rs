use notifications::templates;
use notifications::{Dispatcher, EmailMessage};
use sqlx::PgPool;
use storage::dto::registration::AthleteRegistrationResponse;
use storage::error::Result;
use storage::models::Registration;
use storage::repository::athlete::AthleteRepository;
use storage::repository::event::EventRepository;
use storage::repository::registration::RegistrationRepository;
use uuid::Uuid;

use crate::features::events::services::summary;

/// Register an athlete for an event and send a confirmation email
///
/// The store's uniqueness constraint is the duplicate check; its
/// violation surfaces as AlreadyRegistered. The confirmation is
/// detached and its failure never reaches the caller.
pub async fn register(
    pool: &PgPool,
    dispatcher: Option<&Dispatcher>,
    event_id: Uuid,
    athlete_id: Uuid,
) -> Result<Registration> {
    let repo = RegistrationRepository::new(pool);
    let registration = repo.create(event_id, athlete_id).await?;

    match dispatcher {
        Some(dispatcher) => confirm_registration(pool, dispatcher, event_id, athlete_id).await,
        None => tracing::warn!("Email transport not configured, skipping confirmation"),
    }

    Ok(registration)
}

/// List the events an athlete has registered for
pub async fn athlete_registrations(
    pool: &PgPool,
    athlete_id: Uuid,
) -> Result<Vec<AthleteRegistrationResponse>> {
    let repo = RegistrationRepository::new(pool);
    repo.list_for_athlete(athlete_id).await
}

async fn confirm_registration(
    pool: &PgPool,
    dispatcher: &Dispatcher,
    event_id: Uuid,
    athlete_id: Uuid,
) {
    let message = match confirmation_message(pool, event_id, athlete_id).await {
        Ok(Some(message)) => message,
        Ok(None) => {
            tracing::debug!(%athlete_id, "Athlete has no email, skipping confirmation");
            return;
        }
        Err(error) => {
            tracing::warn!(%error, "Could not load registration confirmation data");
            return;
        }
    };

    dispatcher.spawn(vec![message]);
}

async fn confirmation_message(
    pool: &PgPool,
    event_id: Uuid,
    athlete_id: Uuid,
) -> Result<Option<EmailMessage>> {
    let event = EventRepository::new(pool).find_by_id(event_id).await?;
    let athlete = AthleteRepository::new(pool).find_by_id(athlete_id).await?;

    Ok(athlete.email.as_deref().map(|email| {
        templates::registration_confirmation(email, &athlete.full_name, &summary(&event))
    }))
}
