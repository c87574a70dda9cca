//! The complaint store: sole owner of the complaint collection.
//!
//! RULES:
//!   - Views never mutate records; user actions arrive here as commands.
//!   - Transitions rebuild the matched record as a new value and swap it
//!     into its slot; records that do not match are left untouched.
//!   - Invalid input is a silent no-op, never a surfaced failure. The
//!     return value reports whether anything changed.

use crate::{
    clock::DeskClock,
    command::{CustomerAction, ResolverAction},
    complaint::{Comment, Complaint, ComplaintDraft, Status},
    config::DeskConfig,
};
use chrono::{Datelike, Duration};

#[derive(Debug, Clone, Default)]
pub struct ComplaintStore {
    /// Newest first. Submissions prepend; nothing is ever deleted.
    records: Vec<Complaint>,
}

impl ComplaintStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Complaint>) -> Self {
        Self { records }
    }

    /// The full collection, newest first.
    pub fn complaints(&self) -> &[Complaint] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Complaint> {
        self.records.iter().find(|c| c.id == id)
    }

    /// Complaints assigned to `principal`, newest first. The resolver
    /// queue renders exactly this slice.
    pub fn assigned_to(&self, principal: &str) -> Vec<&Complaint> {
        self.records
            .iter()
            .filter(|c| c.assigned_to.as_deref() == Some(principal))
            .collect()
    }

    /// File a new complaint from a draft. Incomplete drafts (no category
    /// or a blank summary) change nothing.
    pub fn submit(&mut self, draft: ComplaintDraft, clock: &DeskClock, config: &DeskConfig) -> bool {
        let Some(category) = draft.category else {
            log::debug!("submission skipped: no category selected");
            return false;
        };
        if draft.summary.trim().is_empty() {
            log::debug!("submission skipped: blank summary");
            return false;
        }

        let today = clock.today();
        let id = format!("C-{}-{:03}", today.year(), self.records.len() + 1);
        if !draft.description.is_empty() {
            // Submission-time detail only; the record does not keep it.
            log::debug!("{id} description: {}", draft.description);
        }

        let complaint = Complaint {
            id,
            date_filed: today,
            category,
            summary: draft.summary,
            status: Status::Open,
            resolution_date: None,
            resolution_summary: None,
            generated_solution: Some(config.generated_solution_placeholder.clone()),
            backend_solution: Some(config.backend_solution_placeholder.clone()),
            assigned_to: None,
            assigned_team: None,
            assigned_date: None,
            deadline: None,
            comments: Vec::new(),
        };
        log::info!("complaint {} filed ({})", complaint.id, complaint.category);
        self.records.insert(0, complaint);
        true
    }

    /// Apply a customer action to the complaint with `id`.
    pub fn apply_customer_action(
        &mut self,
        id: &str,
        action: CustomerAction,
        clock: &DeskClock,
        config: &DeskConfig,
    ) -> bool {
        let today = clock.today();
        match action {
            CustomerAction::Resolve => self.replace(id, |c| {
                let mut next = c.clone();
                next.status = Status::Resolved;
                next.resolution_date = Some(today);
                // The accepted solution becomes the resolution, verbatim.
                next.resolution_summary = c.generated_solution.clone();
                next
            }),
            CustomerAction::Escalate => self.replace(id, |c| {
                let mut next = c.clone();
                next.status = Status::Assigned;
                next.assigned_to = Some(config.resolver_id.clone());
                next.assigned_team = Some(config.escalation_team);
                next.assigned_date = Some(today);
                next.deadline = Some(today + Duration::days(config.escalation_sla_days));
                next
            }),
        }
    }

    /// Apply a resolver action to the complaint with `id`.
    pub fn apply_resolver_action(
        &mut self,
        id: &str,
        action: ResolverAction,
        clock: &DeskClock,
        config: &DeskConfig,
    ) -> bool {
        let today = clock.today();
        match action {
            ResolverAction::Resolve => self.replace(id, |c| {
                let mut next = c.clone();
                next.status = Status::Resolved;
                next.resolution_date = Some(today);
                next.resolution_summary = Some(config.resolver_resolution_text.clone());
                next
            }),
            ResolverAction::InProgress => self.replace(id, |c| reopen_as(c, Status::InProgress)),
            ResolverAction::Escalate => self.replace(id, |c| reopen_as(c, Status::Escalated)),
            ResolverAction::ChangeTeam { team } => self.replace(id, |c| {
                let mut next = c.clone();
                next.assigned_team = Some(team);
                next
            }),
            ResolverAction::AddComment { text } => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    log::debug!("blank comment on {id} ignored");
                    return false;
                }
                let comment = Comment {
                    author: config.resolver_author.clone(),
                    timestamp: clock.now(),
                    text: trimmed.to_string(),
                };
                self.replace(id, |c| {
                    let mut next = c.clone();
                    next.comments.push(comment);
                    next
                })
            }
        }
    }

    /// Replace-by-id: rebuild the matched record and swap it in. Unknown
    /// ids leave the collection untouched.
    fn replace(&mut self, id: &str, rebuild: impl FnOnce(&Complaint) -> Complaint) -> bool {
        match self.records.iter().position(|c| c.id == id) {
            Some(index) => {
                let next = rebuild(&self.records[index]);
                self.records[index] = next;
                true
            }
            None => {
                log::warn!("action on unknown complaint {id}: ignored");
                false
            }
        }
    }
}

/// Move a record into a working status. Leaving Resolved clears the
/// resolution fields so they exist only on resolved records.
fn reopen_as(c: &Complaint, status: Status) -> Complaint {
    let mut next = c.clone();
    next.status = status;
    next.resolution_date = None;
    next.resolution_summary = None;
    next
}
