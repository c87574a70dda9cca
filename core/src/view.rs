//! View selection: which of the three screens is active.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveView {
    /// The customer's complaint list. Where a session starts.
    #[default]
    Complaints,
    /// The new-complaint form.
    New,
    /// The resolver queue.
    Resolver,
}

impl ActiveView {
    /// Map a view key to a view. Unrecognized keys land on the resolver
    /// view, matching the dashboard's final render branch.
    pub fn from_key(key: &str) -> Self {
        match key {
            "complaints" => Self::Complaints,
            "new" => Self::New,
            _ => Self::Resolver,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Complaints => "complaints",
            Self::New => "new",
            Self::Resolver => "resolver",
        }
    }
}
