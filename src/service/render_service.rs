use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::models::event::Event;

/// Builds the HTML fragments that clients splice into their pages.
/// Fragments are plain strings; the caller decides where they land.
pub struct RenderService;

impl RenderService {
    /// The upcoming events list, one entry per event with a Remove control.
    /// Expects events already sorted soonest-first.
    pub fn upcoming_events_fragment(events: &[Event], tz: Tz) -> String {
        if events.is_empty() {
            return "<p class=\"no-events\">No upcoming events.</p>".to_string();
        }
        let mut body = String::from("<ul class=\"events\">\n");
        for event in events {
            body.push_str(&format!(
                "  <li class=\"event\" data-event-id=\"{id}\">\
                 <span class=\"event-name\">{name}</span> \
                 <span class=\"event-time\">{time}</span> \
                 <span class=\"event-address\">{address}</span> \
                 <button onclick=\"removeEvent('{id}')\">Remove</button></li>\n",
                id = escape_html(&event.id),
                name = escape_html(&event.name),
                time = format_time(&event.time, tz),
                address = escape_html(&render_address(event)),
            ));
        }
        body.push_str("</ul>");
        body
    }

    /// The one-line board summary. Expects events already sorted
    /// soonest-first so the first entry is the next event.
    pub fn summary_fragment(events: &[Event], tz: Tz) -> String {
        match events.first() {
            None => "<div class=\"summary\"><p>No upcoming events.</p></div>".to_string(),
            Some(next) => {
                let count_line = if events.len() == 1 {
                    "1 upcoming event.".to_string()
                } else {
                    format!("{} upcoming events.", events.len())
                };
                format!(
                    "<div class=\"summary\"><p>{count}</p><p>Next: {name} at {time}</p></div>",
                    count = count_line,
                    name = escape_html(&next.name),
                    time = format_time(&next.time, tz),
                )
            }
        }
    }
}

fn render_address(event: &Event) -> String {
    let mut street = event.address1.clone();
    if !event.address2.is_empty() {
        street.push_str(", ");
        street.push_str(&event.address2);
    }
    format!("{}, {}, {} {}", street, event.city, event.state, event.zipcode)
}

fn format_time(time: &DateTime<Utc>, tz: Tz) -> String {
    time.with_timezone(&tz).format("%Y-%m-%d %H:%M %Z").to_string()
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
