// Event module
// Weekly planner event bounded by a start and end day/time within one week

use serde::{Deserialize, Serialize};

use crate::models::day::Day;
use crate::models::user::User;

/// A scheduled event.
///
/// Times use the `hhmm` integer encoding (`930` is 9:30, `1400` is 14:00).
/// Callers are expected to supply `(start_day, start_time) <= (end_day, end_time)`;
/// nothing here checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub online: bool,
    pub start_day: Day,
    pub start_time: u32,
    pub end_day: Day,
    pub end_time: u32,
    pub host: User,
    #[serde(default)]
    pub attendees: Vec<User>,
}

impl Event {
    /// Create a builder for constructing events with optional fields
    ///
    /// # Examples
    /// ```
    /// use week_planner::models::day::Day;
    /// use week_planner::models::event::Event;
    /// use week_planner::models::user::User;
    ///
    /// let event = Event::builder()
    ///     .name("Office hours")
    ///     .starts(Day::Tuesday, 1300)
    ///     .ends(Day::Tuesday, 1500)
    ///     .host(User::new("Lucia"))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(event.start_hour(), 13);
    /// ```
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Hour component of the start time; minutes are dropped
    pub fn start_hour(&self) -> u32 {
        self.start_time / 100
    }

    /// Hour component of the end time; minutes are dropped
    pub fn end_hour(&self) -> u32 {
        self.end_time / 100
    }

    pub fn spans_multiple_days(&self) -> bool {
        self.start_day != self.end_day
    }

    /// True when `user` hosts or attends this event
    pub fn involves(&self, user: &User) -> bool {
        self.host == *user || self.attendees.contains(user)
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    name: Option<String>,
    location: Option<String>,
    online: bool,
    start: Option<(Day, u32)>,
    end: Option<(Day, u32)>,
    host: Option<User>,
    attendees: Vec<User>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            location: None,
            online: false,
            start: None,
            end: None,
            host: None,
            attendees: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn online(mut self, online: bool) -> Self {
        self.online = online;
        self
    }

    /// Set the start day and `hhmm` time
    pub fn starts(mut self, day: Day, time: u32) -> Self {
        self.start = Some((day, time));
        self
    }

    /// Set the end day and `hhmm` time
    pub fn ends(mut self, day: Day, time: u32) -> Self {
        self.end = Some((day, time));
        self
    }

    pub fn host(mut self, host: User) -> Self {
        self.host = Some(host);
        self
    }

    pub fn attendee(mut self, attendee: User) -> Self {
        self.attendees.push(attendee);
        self
    }

    /// Build the event.
    ///
    /// The host is always listed first among the attendees.
    pub fn build(self) -> Result<Event, String> {
        let (start_day, start_time) = self.start.ok_or("Event start is required")?;
        let (end_day, end_time) = self.end.ok_or("Event end is required")?;
        let host = self.host.ok_or("Event host is required")?;

        let mut attendees = Vec::with_capacity(self.attendees.len() + 1);
        attendees.push(host.clone());
        attendees.extend(self.attendees.into_iter().filter(|user| *user != host));

        Ok(Event {
            name: self.name.unwrap_or_default(),
            location: self.location,
            online: self.online,
            start_day,
            start_time,
            end_day,
            end_time,
            host,
            attendees,
        })
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
