use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::types::Event;

/// A calendar entry derived purely from one event's fields.
///
/// Events without a time start at 09:00 and run for one hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub uid: String,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl CalendarEvent {
    pub fn from_event(event: &Event) -> Self {
        let start_time = event
            .event_time
            .unwrap_or_else(|| NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time"));
        let start = event.event_date.and_time(start_time);

        Self {
            uid: format!("{}@athletrack.app", event.event_id),
            summary: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            location: format!("{}, {}", event.venue, event.city),
            start,
            end: start + Duration::hours(1),
        }
    }

    /// Render the entry as an iCalendar document with CRLF line endings.
    pub fn to_ics(&self) -> String {
        let lines = [
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            "PRODID:-//AthleTrack//Events//EN".to_string(),
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}", self.uid),
            format!("DTSTART:{}", format_timestamp(self.start)),
            format!("DTEND:{}", format_timestamp(self.end)),
            format!("SUMMARY:{}", escape_text(&self.summary)),
            format!("DESCRIPTION:{}", escape_text(&self.description)),
            format!("LOCATION:{}", escape_text(&self.location)),
            "END:VEVENT".to_string(),
            "END:VCALENDAR".to_string(),
        ];

        lines.join("\r\n")
    }

    /// Download filename derived from the title.
    pub fn suggested_filename(&self) -> String {
        let stem: String = self
            .summary
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();

        format!("{stem}.ics")
    }
}

fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y%m%dT%H%M%S").to_string()
}

/// Escape TEXT values per the iCalendar grammar: backslash first, then
/// the separators, then literal newlines.
fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;

    fn event(title: &str, date: NaiveDate, time: Option<NaiveTime>) -> Event {
        Event {
            event_id: Uuid::nil(),
            title: title.to_string(),
            description: None,
            event_date: date,
            event_time: time,
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
            created_by: None,
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn missing_time_defaults_to_nine_for_one_hour() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let entry = CalendarEvent::from_event(&event("5K Run", date, None));

        let ics = entry.to_ics();
        assert!(ics.contains("DTSTART:20250510T090000"));
        assert!(ics.contains("DTEND:20250510T100000"));
        assert!(ics.contains("SUMMARY:5K Run"));
    }

    #[test]
    fn explicit_time_is_kept() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let time = NaiveTime::from_hms_opt(17, 30, 0).unwrap();
        let entry = CalendarEvent::from_event(&event("5K Run", date, Some(time)));

        assert!(entry.to_ics().contains("DTSTART:20250510T173000"));
        assert!(entry.to_ics().contains("DTEND:20250510T183000"));
    }

    #[test]
    fn separators_in_text_fields_are_escaped() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let mut source = event("Run; Jump, Throw", date, None);
        source.description = Some("Line one\nLine two".to_string());
        let entry = CalendarEvent::from_event(&source);

        let ics = entry.to_ics();
        assert!(ics.contains("SUMMARY:Run\\; Jump\\, Throw"));
        assert!(ics.contains("DESCRIPTION:Line one\\nLine two"));
        assert!(ics.contains("LOCATION:Stadium A\\, Metro"));
    }

    #[test]
    fn document_uses_crlf_line_endings() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let ics = CalendarEvent::from_event(&event("5K Run", date, None)).to_ics();

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR"));
    }

    #[test]
    fn filename_is_sanitized() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let entry = CalendarEvent::from_event(&event("5K Run!", date, None));

        assert_eq!(entry.suggested_filename(), "5k_run_.ics");
    }
}
