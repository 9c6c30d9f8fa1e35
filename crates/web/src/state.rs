use notifications::Dispatcher;
use storage::Database;

/// Shared application state handed to every handler.
///
/// The dispatcher is absent when no SMTP transport is configured; event
/// and registration flows then skip their notification side effects.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub dispatcher: Option<Dispatcher>,
}
