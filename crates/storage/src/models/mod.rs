mod athlete;
mod event;
mod registration;

pub use athlete::Athlete;
pub use event::Event;
pub use registration::Registration;
