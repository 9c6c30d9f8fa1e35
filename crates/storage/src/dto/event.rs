use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a new event
///
/// Status is not part of the payload; new events always start out as
/// "upcoming".
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,

    pub description: Option<String>,

    pub event_date: NaiveDate,

    pub event_time: Option<NaiveTime>,

    #[validate(length(min = 1, max = 255))]
    pub venue: String,

    #[validate(length(min = 1, max = 255))]
    pub city: String,

    #[validate(length(min = 1, max = 255))]
    pub category: String,

    pub eligibility: Option<String>,

    pub rules: Option<String>,

    pub requirements: Option<String>,

    pub registration_deadline: Option<NaiveDate>,

    pub max_participants: Option<i32>,

    #[validate(email(message = "Contact email must be a valid address"))]
    pub contact_email: Option<String>,

    #[validate(length(max = 64))]
    pub contact_phone: Option<String>,

    pub image_url: Option<String>,

    pub created_by: Option<Uuid>,
}

/// Request payload for replacing an existing event
///
/// Updates are full-record replaces, not merges; callers resupply any
/// field they want to keep.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,

    pub description: Option<String>,

    pub event_date: NaiveDate,

    pub event_time: Option<NaiveTime>,

    #[validate(length(min = 1, max = 255))]
    pub venue: String,

    #[validate(length(min = 1, max = 255))]
    pub city: String,

    #[validate(length(min = 1, max = 255))]
    pub category: String,

    pub eligibility: Option<String>,

    pub rules: Option<String>,

    pub requirements: Option<String>,

    pub registration_deadline: Option<NaiveDate>,

    pub max_participants: Option<i32>,

    #[validate(email(message = "Contact email must be a valid address"))]
    pub contact_email: Option<String>,

    #[validate(length(max = 64))]
    pub contact_phone: Option<String>,

    pub image_url: Option<String>,

    #[validate(custom(function = "validate_status"))]
    pub status: String,
}

/// Response containing event details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
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

/// Response for a freshly created event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEventResponse {
    pub event_id: Uuid,
}

const VALID_STATUSES: &[&str] = &["upcoming", "ongoing", "completed", "cancelled"];

fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}

impl From<crate::models::Event> for EventResponse {
    fn from(event: crate::models::Event) -> Self {
        Self {
            event_id: event.event_id,
            title: event.title,
            description: event.description,
            event_date: event.event_date,
            event_time: event.event_time,
            venue: event.venue,
            city: event.city,
            category: event.category,
            eligibility: event.eligibility,
            rules: event.rules,
            requirements: event.requirements,
            registration_deadline: event.registration_deadline,
            max_participants: event.max_participants,
            contact_email: event.contact_email,
            contact_phone: event.contact_phone,
            image_url: event.image_url,
            status: event.status,
            created_by: event.created_by,
            created_at: event.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_request() -> UpdateEventRequest {
        UpdateEventRequest {
            title: "Spring Meet".to_string(),
            description: None,
            event_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
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
            status: "upcoming".to_string(),
        }
    }

    #[test]
    fn every_lifecycle_status_is_accepted() {
        for status in ["upcoming", "ongoing", "completed", "cancelled"] {
            let mut req = update_request();
            req.status = status.to_string();
            assert!(req.validate().is_ok(), "status {status} should be valid");
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let mut req = update_request();
        req.status = "postponed".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut req = update_request();
        req.title = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn malformed_contact_email_is_rejected() {
        let mut req = update_request();
        req.contact_email = Some("not-an-address".to_string());
        assert!(req.validate().is_err());
    }

    #[test]
    fn absent_optional_fields_validate() {
        assert!(update_request().validate().is_ok());
    }
}
