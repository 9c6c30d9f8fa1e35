pub mod events;
pub mod registrations;
