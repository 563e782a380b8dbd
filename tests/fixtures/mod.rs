// Test fixtures - reusable test data
// Provides consistent schedules across all test files

#![allow(dead_code)]

use week_planner::models::day::Day;
use week_planner::models::event::Event;
use week_planner::models::user::User;
use week_planner::services::planner::InMemoryPlanner;

/// Sample users
pub mod users {
    use super::*;

    pub fn lucia() -> User {
        User::new("Prof. Lucia")
    }

    pub fn chat() -> User {
        User::new("Chat")
    }

    pub fn nico() -> User {
        User::new("Nico")
    }
}

/// Sample events
pub mod events {
    use super::*;

    /// Tuesday 9:50 - 11:30, hosted by Lucia
    pub fn morning_lecture() -> Event {
        Event::builder()
            .name("Morning Lecture")
            .location("Churchill Hall 101")
            .starts(Day::Tuesday, 950)
            .ends(Day::Tuesday, 1130)
            .host(users::lucia())
            .attendee(users::chat())
            .attendee(users::nico())
            .build()
            .unwrap()
    }

    /// Wednesday 20:00 through Friday 9:00, hosted by Chat
    pub fn hackathon() -> Event {
        Event::builder()
            .name("Hackathon")
            .online(true)
            .starts(Day::Wednesday, 2000)
            .ends(Day::Friday, 900)
            .host(users::chat())
            .attendee(users::lucia())
            .build()
            .unwrap()
    }

    /// Saturday night into the next week's Sunday; cannot be drawn
    pub fn weekend_wrap() -> Event {
        Event::builder()
            .name("Sleep")
            .starts(Day::Saturday, 2200)
            .ends(Day::Sunday, 800)
            .host(users::lucia())
            .build()
            .unwrap()
    }
}

/// Planner holding all sample users and events
pub fn sample_planner() -> InMemoryPlanner {
    InMemoryPlanner::new(
        vec![users::lucia(), users::chat(), users::nico()],
        vec![
            events::morning_lecture(),
            events::weekend_wrap(),
            events::hackathon(),
        ],
    )
}
