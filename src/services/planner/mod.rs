// Planner service module
// Read-only access to users and their weekly schedules

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::event::Event;
use crate::models::user::User;

/// Read-only view of a planner, as consumed by the week view.
pub trait ReadOnlyPlanner {
    /// Events `username` hosts or attends. Order is not guaranteed.
    fn schedule_for(&self, username: &str) -> Vec<Event>;

    /// Every known user, for populating user pickers
    fn users(&self) -> Vec<User>;
}

/// Schedule document layout: `{ "users": [...], "events": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerDocument {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Planner backed by an in-memory list of users and events.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanner {
    users: Vec<User>,
    events: Vec<Event>,
}

impl InMemoryPlanner {
    pub fn new(users: Vec<User>, events: Vec<Event>) -> Self {
        let mut planner = Self {
            users: Vec::new(),
            events,
        };
        for user in users {
            planner.register_user(user);
        }
        // Hosts and attendees are users even when the roster omits them
        let participants: Vec<User> = planner
            .events
            .iter()
            .flat_map(|event| std::iter::once(&event.host).chain(event.attendees.iter()))
            .cloned()
            .collect();
        for user in participants {
            planner.register_user(user);
        }
        planner
    }

    /// Parse a schedule document from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: PlannerDocument =
            serde_json::from_str(json).context("Failed to parse schedule document")?;
        Ok(Self::from(document))
    }

    /// Load a schedule document from disk. The file is never written back.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read schedule at {}", path.display()))?;
        let planner = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid schedule document {}", path.display()))?;
        log::info!(
            "Loaded {} user(s) and {} event(s) from {}",
            planner.users.len(),
            planner.events.len(),
            path.display()
        );
        Ok(planner)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    fn register_user(&mut self, user: User) {
        if !self.users.contains(&user) {
            self.users.push(user);
        }
    }
}

impl From<PlannerDocument> for InMemoryPlanner {
    fn from(document: PlannerDocument) -> Self {
        Self::new(document.users, document.events)
    }
}

impl ReadOnlyPlanner for InMemoryPlanner {
    fn schedule_for(&self, username: &str) -> Vec<Event> {
        let user = User::new(username);
        self.events
            .iter()
            .filter(|event| event.involves(&user))
            .cloned()
            .collect()
    }

    fn users(&self) -> Vec<User> {
        self.users.clone()
    }
}
