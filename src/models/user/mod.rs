// User module
// Planner participant, identified by display name

use serde::{Deserialize, Serialize};
use std::fmt;

/// A planner user. Two users are the same user when their names match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for User {
    fn from(name: &str) -> Self {
        User::new(name)
    }
}
