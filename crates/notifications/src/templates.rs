use crate::dispatch::EmailMessage;

/// Event fields the notification bodies are rendered from.
///
/// Dates arrive pre-formatted so this module stays free of the storage
/// types.
#[derive(Debug, Clone)]
pub struct EventSummary {
    pub title: String,
    pub date: String,
    pub venue: String,
    pub city: String,
    pub category: String,
    pub description: Option<String>,
    pub registration_deadline: Option<String>,
}

/// Announcement sent to every notifiable athlete when an event is
/// published.
pub fn event_announcement(to: &str, athlete_name: &str, event: &EventSummary) -> EmailMessage {
    let mut body = format!(
        "<h2>New Event Announcement</h2>\
         <p>Dear {athlete_name},</p>\
         <p>A new event has been posted on AthleTrack!</p>\
         <h3>{}</h3>\
         <p><strong>Date:</strong> {}</p>\
         <p><strong>Venue:</strong> {}, {}</p>\
         <p><strong>Category:</strong> {}</p>",
        event.title, event.date, event.venue, event.city, event.category
    );

    if let Some(description) = &event.description {
        body.push_str(&format!("<p>{description}</p>"));
    }

    if let Some(deadline) = &event.registration_deadline {
        body.push_str(&format!(
            "<p><strong>Registration Deadline:</strong> {deadline}</p>"
        ));
    }

    body.push_str(
        "<p>Log in to AthleTrack to view full details and register!</p>\
         <p>Best regards,<br>The AthleTrack Team</p>",
    );

    EmailMessage {
        to: to.to_string(),
        subject: format!("New Event: {}", event.title),
        html_body: body,
    }
}

/// Confirmation sent to the registering athlete only.
pub fn registration_confirmation(to: &str, athlete_name: &str, event: &EventSummary) -> EmailMessage {
    let body = format!(
        "<h2>Registration Successful!</h2>\
         <p>Dear {athlete_name},</p>\
         <p>You have successfully registered for the following event:</p>\
         <div style=\"background: #f4f4f4; padding: 20px; border-radius: 10px;\">\
         <h3 style=\"margin-top:0;\">{}</h3>\
         <p><strong>Date:</strong> {}</p>\
         <p><strong>Venue:</strong> {}, {}</p>\
         </div>\
         <p>Please arrive at least 30 minutes before the event starts.</p>\
         <p>Best regards,<br>The AthleTrack Team</p>",
        event.title, event.date, event.venue, event.city
    );

    EmailMessage {
        to: to.to_string(),
        subject: format!("Registration Confirmed: {}", event.title),
        html_body: body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> EventSummary {
        EventSummary {
            title: "Spring Meet".to_string(),
            date: "2025-04-01".to_string(),
            venue: "Stadium A".to_string(),
            city: "Metro".to_string(),
            category: "Track".to_string(),
            description: Some("Season opener".to_string()),
            registration_deadline: Some("2025-03-15".to_string()),
        }
    }

    #[test]
    fn announcement_carries_event_fields() {
        let message = event_announcement("a@example.com", "Alice", &summary());

        assert_eq!(message.to, "a@example.com");
        assert_eq!(message.subject, "New Event: Spring Meet");
        assert!(message.html_body.contains("Dear Alice"));
        assert!(message.html_body.contains("Stadium A, Metro"));
        assert!(message.html_body.contains("Season opener"));
        assert!(message.html_body.contains("2025-03-15"));
    }

    #[test]
    fn announcement_skips_absent_optional_fields() {
        let mut event = summary();
        event.description = None;
        event.registration_deadline = None;

        let message = event_announcement("a@example.com", "Alice", &event);

        assert!(!message.html_body.contains("Season opener"));
        assert!(!message.html_body.contains("Registration Deadline"));
    }

    #[test]
    fn confirmation_addresses_the_registrant() {
        let message = registration_confirmation("b@example.com", "Bob", &summary());

        assert_eq!(message.to, "b@example.com");
        assert_eq!(message.subject, "Registration Confirmed: Spring Meet");
        assert!(message.html_body.contains("Dear Bob"));
        assert!(message.html_body.contains("Spring Meet"));
    }
}
