use crate::models::event::Event;
use crate::models::user::User;

/// Visual style applied to every segment of one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Host,
    Attendee,
}

/// `Host` only in host view, and only for events the subject hosts.
pub fn select_variant(event: &Event, subject: &User, host_view: bool) -> Variant {
    if host_view && event.host == *subject {
        Variant::Host
    } else {
        Variant::Attendee
    }
}
