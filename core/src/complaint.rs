//! The complaint record and its closed vocabularies.
//!
//! Wire strings match the dashboard's display strings exactly
//! ("In Progress", "Technical Support", ...); serde names are the single
//! source of truth for both.

use crate::types::ComplaintId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a complaint is about. The form's category selector is this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Billing,
    Technical,
    Service,
    Product,
    Account,
    Other,
}

impl Category {
    /// Selector options, in form order.
    pub const ALL: [Category; 6] = [
        Category::Billing,
        Category::Technical,
        Category::Service,
        Category::Product,
        Category::Account,
        Category::Other,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Billing => "Billing",
            Self::Technical => "Technical",
            Self::Service => "Service",
            Self::Product => "Product",
            Self::Account => "Account",
            Self::Other => "Other",
        };
        f.write_str(name)
    }
}

/// Lifecycle state of a complaint.
///
/// Open is the filing state. Assigned, In Progress and Escalated are the
/// working states resolvers move among freely. Resolved is terminal in
/// intent; the data layer keeps it soft (resolver actions still apply)
/// and the views hide the customer actions once a case is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Open,
    Assigned,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Escalated,
}

impl Status {
    /// Badge color token for this status. One lookup shared by every view.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Resolved => "green",
            Self::InProgress => "blue",
            Self::Open => "yellow",
            Self::Assigned => "purple",
            Self::Escalated => "gray",
        }
    }

    /// Badge icon token for this status.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Resolved => "check-circle",
            Self::InProgress => "clock",
            Self::Open => "alert-triangle",
            Self::Assigned => "user",
            Self::Escalated => "file-text",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "Open",
            Self::Assigned => "Assigned",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Escalated => "Escalated",
        };
        f.write_str(name)
    }
}

/// Team a case is routed to. The reassignment selector is this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    #[serde(rename = "Technical Support")]
    TechnicalSupport,
    #[serde(rename = "Billing Team")]
    BillingTeam,
    #[serde(rename = "Customer Success")]
    CustomerSuccess,
    #[serde(rename = "Product Team")]
    ProductTeam,
}

impl Team {
    /// Selector options, in form order.
    pub const ALL: [Team; 4] = [
        Team::TechnicalSupport,
        Team::BillingTeam,
        Team::CustomerSuccess,
        Team::ProductTeam,
    ];
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TechnicalSupport => "Technical Support",
            Self::BillingTeam => "Billing Team",
            Self::CustomerSuccess => "Customer Success",
            Self::ProductTeam => "Product Team",
        };
        f.write_str(name)
    }
}

/// A resolver note on a case. Append-only, insertion order preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: ComplaintId,
    pub date_filed: NaiveDate,
    pub category: Category,
    pub summary: String,
    pub status: Status,
    /// Set together with resolution_summary, only while Resolved.
    pub resolution_date: Option<NaiveDate>,
    pub resolution_summary: Option<String>,
    /// Customer-facing analysis text.
    pub generated_solution: Option<String>,
    /// Resolver-facing analysis text.
    pub backend_solution: Option<String>,
    /// Assignment block: all None while Open, all Some once assigned.
    pub assigned_to: Option<String>,
    pub assigned_team: Option<Team>,
    pub assigned_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub comments: Vec<Comment>,
}

impl Complaint {
    pub fn is_resolved(&self) -> bool {
        self.status == Status::Resolved
    }
}

/// Form state for a complaint being written. The description is collected
/// for submission-time use only and never lands on the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplaintDraft {
    pub category: Option<Category>,
    pub summary: String,
    pub description: String,
}

impl ComplaintDraft {
    /// The submit gate: a category is selected and the summary is not
    /// blank. The form disables its submit button on the same check.
    pub fn is_complete(&self) -> bool {
        self.category.is_some() && !self.summary.trim().is_empty()
    }
}
