//! The view-to-store command vocabulary.
//!
//! Views never touch the collection directly; every user action becomes
//! one of these commands, applied by the dashboard controller. The same
//! tagged form is the runner's IPC wire format.

use crate::complaint::{Category, Team};
use crate::types::ComplaintId;
use crate::view::ActiveView;
use serde::{Deserialize, Serialize};

/// Customer-side actions on a single complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerAction {
    /// Accept the generated solution as the resolution.
    Resolve,
    /// Hand the case to a human resolver.
    Escalate,
}

/// Resolver-side actions on a single complaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ResolverAction {
    Resolve,
    InProgress,
    Escalate,
    ChangeTeam { team: Team },
    AddComment { text: String },
}

/// Every command a view can dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DeskCommand {
    SetView {
        view: ActiveView,
    },
    SubmitComplaint {
        category: Option<Category>,
        summary: String,
        #[serde(default)]
        description: String,
    },
    CustomerAction {
        complaint_id: ComplaintId,
        action: CustomerAction,
    },
    ResolverAction {
        complaint_id: ComplaintId,
        action: ResolverAction,
    },
}
