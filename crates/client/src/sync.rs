use thiserror::Error;
use uuid::Uuid;

use crate::http::{ClientError, EventsClient};
use crate::session::{Role, Session};
use crate::types::{CreateEvent, Event, UpdateEvent};

/// A mutating command translated from local form state.
#[derive(Debug, Clone)]
pub enum Command {
    Create(CreateEvent),
    Update(Uuid, UpdateEvent),
    Delete(Uuid),
    Register(Uuid),
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Create(_) => "create event",
            Command::Update(..) => "update event",
            Command::Delete(_) => "delete event",
            Command::Register(_) => "register",
        }
    }
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("current role may not {0}")]
    NotPermitted(&'static str),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Client-side view of the event list.
///
/// The cache is recomputed by a full re-fetch after every mutating
/// command; there is no incremental patching and no optimistic update.
pub struct EventSync {
    client: EventsClient,
    session: Session,
    events: Vec<Event>,
}

impl EventSync {
    pub fn new(client: EventsClient, session: Session) -> Self {
        Self {
            client,
            session,
            events: Vec::new(),
        }
    }

    /// The cached list, in the order the server returned it.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn find(&self, id: Uuid) -> Option<&Event> {
        self.events.iter().find(|event| event.event_id == id)
    }

    /// Re-fetch the full event list.
    pub async fn refresh(&mut self) -> Result<(), SyncError> {
        self.events = self.client.list_events().await?;
        Ok(())
    }

    /// Single dispatch point for mutating commands.
    ///
    /// The session role is checked before anything goes over the wire;
    /// after a successful call the cache is rebuilt from the server.
    pub async fn apply(&mut self, command: Command) -> Result<(), SyncError> {
        match &command {
            Command::Create(_) | Command::Update(..) | Command::Delete(_)
                if !self.session.role.can_manage_events() =>
            {
                return Err(SyncError::NotPermitted(command.name()));
            }
            Command::Register(_) if self.session.role != Role::Athlete => {
                return Err(SyncError::NotPermitted(command.name()));
            }
            _ => {}
        }

        match command {
            Command::Create(payload) => {
                self.client.create_event(&payload).await?;
            }
            Command::Update(id, payload) => {
                self.client.update_event(id, &payload).await?;
            }
            Command::Delete(id) => {
                self.client.delete_event(id).await?;
            }
            Command::Register(event_id) => {
                self.client
                    .register(event_id, self.session.user_id)
                    .await?;
            }
        }

        self.refresh().await
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    fn sync_for(role: Role) -> EventSync {
        // Commands rejected by the role gate never reach the network,
        // so an unroutable base URL is fine here.
        let client = EventsClient::new(Url::parse("http://127.0.0.1:1").unwrap());
        EventSync::new(client, Session::new(Uuid::new_v4(), role))
    }

    fn create_payload() -> CreateEvent {
        CreateEvent {
            title: "Spring Meet".to_string(),
            description: None,
            event_date: chrono::NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            event_time: None,
            venue: "Stadium A".to_string(),
            city: "Metro".to_string(),
            category: "Track".to_string(),
            eligibility: None,
            rules: None,
            requirements: None,
            registration_deadline: None,
            max_participants: None,
            contact_email: None,
            contact_phone: None,
            image_url: None,
            created_by: None,
        }
    }

    #[tokio::test]
    async fn athletes_may_not_manage_events() {
        let mut sync = sync_for(Role::Athlete);

        let result = sync.apply(Command::Create(create_payload())).await;
        assert!(matches!(result, Err(SyncError::NotPermitted(_))));

        let result = sync.apply(Command::Delete(Uuid::new_v4())).await;
        assert!(matches!(result, Err(SyncError::NotPermitted(_))));
    }

    #[tokio::test]
    async fn admins_may_not_register() {
        let mut sync = sync_for(Role::Admin);

        let result = sync.apply(Command::Register(Uuid::new_v4())).await;
        assert!(matches!(result, Err(SyncError::NotPermitted(_))));
    }

    #[test]
    fn cache_starts_empty() {
        let sync = sync_for(Role::Athlete);
        assert!(sync.events().is_empty());
        assert!(sync.find(Uuid::new_v4()).is_none());
    }
}
