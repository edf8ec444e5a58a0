use crate::ics::fold::{escape_text, fold_line, MAX_LINE_OCTETS};
use crate::model::event::{CalendarDocument, CalendarEvent};
use crate::time::{format_dtstamp, format_ics_date, next_day};

pub const LINE_END: &str = "\r\n";

pub fn product_id(language: &str) -> String {
    format!("-//workhours//Work Hours Calendar//{}", language.to_uppercase())
}

/// Serializes a document. Every line, including the last, ends with CRLF.
pub fn serialize(doc: &CalendarDocument) -> String {
    let dtstamp = format_dtstamp(doc.dtstamp);
    let mut out = String::new();

    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, &format!("PRODID:{}", product_id(doc.language)));
    push_line(&mut out, "CALSCALE:GREGORIAN");
    push_line(&mut out, "METHOD:PUBLISH");
    for event in &doc.events {
        push_event(&mut out, event, &dtstamp);
    }
    push_line(&mut out, "END:VCALENDAR");

    out
}

fn push_event(out: &mut String, event: &CalendarEvent, dtstamp: &str) {
    push_line(out, "BEGIN:VEVENT");
    push_line(out, &format!("UID:{}", event.uid));
    push_line(out, &format!("SUMMARY:{}", escape_text(&event.summary)));
    push_line(out, &format!("DTSTAMP:{}", dtstamp));
    push_line(out, &format!("DTSTART;VALUE=DATE:{}", format_ics_date(event.date)));
    push_line(out, &format!("DTEND;VALUE=DATE:{}", format_ics_date(next_day(event.date))));
    push_line(out, "STATUS:CONFIRMED");
    push_line(out, "TRANSP:TRANSPARENT");
    push_line(out, "DURATION:P1DT");
    push_line(out, &format!("DESCRIPTION:{}", escape_text(&event.description)));
    push_line(out, "END:VEVENT");
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(&fold_line(line, MAX_LINE_OCTETS));
    out.push_str(LINE_END);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn doc_with(events: Vec<CalendarEvent>) -> CalendarDocument {
        let stamp = Utc.with_ymd_and_hms(2024, 10, 17, 12, 0, 0).unwrap();
        let mut doc = CalendarDocument::new("en", stamp);
        doc.events = events;
        doc
    }

    fn event(description: &str) -> CalendarEvent {
        CalendarEvent {
            uid: "workhours-en-2024-01-31@workhours.calendar".to_string(),
            summary: "🕒 Work Hours: 8".to_string(),
            description: description.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        }
    }

    #[test]
    fn test_empty_calendar_envelope() {
        let text = serialize(&doc_with(vec![]));
        assert_eq!(
            text,
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//workhours//Work Hours Calendar//EN\r\n\
             CALSCALE:GREGORIAN\r\nMETHOD:PUBLISH\r\nEND:VCALENDAR\r\n"
        );
    }

    #[test]
    fn test_event_block() {
        let text = serialize(&doc_with(vec![event("Work hours for 31 January: 8 hours")]));
        let expected = "BEGIN:VEVENT\r\n\
            UID:workhours-en-2024-01-31@workhours.calendar\r\n\
            SUMMARY:🕒 Work Hours: 8\r\n\
            DTSTAMP:20241017T120000Z\r\n\
            DTSTART;VALUE=DATE:20240131\r\n\
            DTEND;VALUE=DATE:20240201\r\n\
            STATUS:CONFIRMED\r\n\
            TRANSP:TRANSPARENT\r\n\
            DURATION:P1DT\r\n\
            DESCRIPTION:Work hours for 31 January: 8 hours\r\n\
            END:VEVENT\r\n";
        assert!(text.contains(expected), "{}", text);
    }

    #[test]
    fn test_long_description_is_escaped_and_folded() {
        let description = format!("Work hours for 31 January: 8 hours\n\n{}", "Total, ".repeat(20));
        let text = serialize(&doc_with(vec![event(&description)]));

        for line in text.split("\r\n") {
            let content = line.strip_prefix(' ').unwrap_or(line);
            assert!(content.len() <= MAX_LINE_OCTETS, "line too long: {:?}", line);
        }
        // No bare LF survives escaping
        assert!(!text.replace("\r\n", "").contains('\n'));

        let start = text.find("DESCRIPTION:").unwrap();
        let end = start + text[start..].find("\r\nEND:VEVENT").unwrap();
        let unfolded = crate::ics::fold::unfold(&text[start..end]);
        assert_eq!(unfolded, format!("DESCRIPTION:{}", escape_text(&description)));
    }
}
