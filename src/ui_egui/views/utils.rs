//! Common utility functions for the week view.
//!
//! Pure text helpers, kept free of egui state so they can be unit tested.

use crate::models::day::Day;
use crate::models::event::Event;
use crate::models::user::User;

/// Format an `hhmm` time as `HH:MM`
pub fn format_time(time: u32) -> String {
    format!("{:02}:{:02}", time / 100, time % 100)
}

fn format_day_time(day: Day, time: u32) -> String {
    format!("{} {}", day.short_name(), format_time(time))
}

/// Generate a tooltip string for an event.
/// Shows name, time range, location, host and attendees.
pub fn format_event_tooltip(event: &Event) -> String {
    let mut lines = Vec::new();

    let title = if event.name.trim().is_empty() {
        "(untitled)"
    } else {
        event.name.as_str()
    };
    lines.push(format!("📌 {}", title));

    lines.push(format!(
        "🕐 {} - {}",
        format_day_time(event.start_day, event.start_time),
        format_day_time(event.end_day, event.end_time)
    ));

    match (event.location.as_deref().map(str::trim), event.online) {
        (Some(location), true) if !location.is_empty() => {
            lines.push(format!("📍 {} (online)", location))
        }
        (Some(location), false) if !location.is_empty() => lines.push(format!("📍 {}", location)),
        (_, true) => lines.push("📍 Online".to_string()),
        _ => {}
    }

    lines.push(format!("👤 Host: {}", event.host));

    let others: Vec<String> = event
        .attendees
        .iter()
        .filter(|user| **user != event.host)
        .map(User::to_string)
        .collect();
    if !others.is_empty() {
        lines.push(format!("👥 {}", others.join(", ")));
    }

    lines.join("\n")
}

/// Names of every user, in roster order
pub fn roster_names(users: &[User]) -> Vec<String> {
    users.iter().map(User::to_string).collect()
}
