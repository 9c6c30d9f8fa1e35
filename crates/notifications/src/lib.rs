pub mod dispatch;
pub mod error;
pub mod mailer;
pub mod templates;

pub use dispatch::{DispatchReport, Dispatcher, EmailMessage};
pub use error::NotificationError;
pub use mailer::{Mailer, SmtpConfig, SmtpMailer};
