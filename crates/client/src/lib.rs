//! Thin client for the events API: typed HTTP calls, a re-fetching view
//! cache, and the pure calendar export.

pub mod calendar;
pub mod http;
pub mod session;
pub mod sync;
pub mod types;

pub use calendar::CalendarEvent;
pub use http::{ClientError, EventsClient};
pub use session::{Role, Session};
pub use sync::{Command, EventSync, SyncError};
