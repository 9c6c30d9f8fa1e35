//! Wire types mirroring the events API payloads.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An event as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub event_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub venue: String,
    pub city: String,
    pub category: String,
    pub eligibility: Option<String>,
    pub rules: Option<String>,
    pub requirements: Option<String>,
    pub registration_deadline: Option<NaiveDate>,
    pub max_participants: Option<i32>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub image_url: Option<String>,
    pub status: String,
    pub created_by: Option<Uuid>,
    pub created_at: NaiveDateTime,
}

/// Payload for creating an event; the server assigns id and status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub venue: String,
    pub city: String,
    pub category: String,
    pub eligibility: Option<String>,
    pub rules: Option<String>,
    pub requirements: Option<String>,
    pub registration_deadline: Option<NaiveDate>,
    pub max_participants: Option<i32>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub image_url: Option<String>,
    pub created_by: Option<Uuid>,
}

/// Payload for replacing an event; every field is resupplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEvent {
    pub title: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub venue: String,
    pub city: String,
    pub category: String,
    pub eligibility: Option<String>,
    pub rules: Option<String>,
    pub requirements: Option<String>,
    pub registration_deadline: Option<NaiveDate>,
    pub max_participants: Option<i32>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub image_url: Option<String>,
    pub status: String,
}

/// Identifier assigned to a freshly created event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedEvent {
    pub event_id: Uuid,
}

/// A created registration row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub registration_id: Uuid,
    pub event_id: Uuid,
    pub athlete_id: Uuid,
    pub registered_at: NaiveDateTime,
    pub status: String,
}

/// One entry of an athlete's registration history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredEvent {
    pub event_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub venue: String,
    pub city: String,
    pub category: String,
    pub eligibility: Option<String>,
    pub rules: Option<String>,
    pub requirements: Option<String>,
    pub registration_deadline: Option<NaiveDate>,
    pub max_participants: Option<i32>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub image_url: Option<String>,
    pub status: String,
    pub registered_at: NaiveDateTime,
    pub registration_status: String,
}
