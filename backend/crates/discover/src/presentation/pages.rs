//! Discover Page

use platform::html::{Nav, document, escape, message_block};

use crate::domain::event::Event;

fn event_card(event: &Event) -> String {
    let title = match &event.url {
        Some(url) => format!(
            r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
            escape(url),
            escape(&event.name)
        ),
        None => escape(&event.name),
    };

    let image = event
        .image_url
        .as_deref()
        .map(|src| format!(r#"<img src="{}" alt="">"#, escape(src)))
        .unwrap_or_default();

    let when = match (&event.start_date, &event.start_time) {
        (Some(date), Some(time)) => format!("{} {}", escape(date), escape(time)),
        (Some(date), None) => escape(date),
        _ => String::new(),
    };

    let meta: Vec<String> = [Some(when), event.venue.as_deref().map(escape)]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();

    format!(
        r#"<li class="event">{image}<div><h3>{title}</h3><p class="meta">{meta}</p></div></li>"#,
        meta = meta.join(" &middot; "),
    )
}

/// GET /discover
pub fn render_discover_page(events: &[Event], message: Option<&str>) -> String {
    let list = if events.is_empty() {
        if message.is_some() {
            String::new()
        } else {
            r#"<p class="notice">No events found.</p>"#.to_string()
        }
    } else {
        let items: String = events.iter().map(event_card).collect();
        format!(r#"<ul class="events">{items}</ul>"#)
    };

    let body = format!(
        r#"<h1>Discover</h1>
{message}
{list}"#,
        message = message_block(message, "error"),
    );

    document("Discover", Nav::Member, &body)
}
