//! The dashboard controller: owns all mutable session state.
//!
//! DATA FLOW (fixed, one direction):
//!   controller state -> views render -> user acts -> DeskCommand ->
//!   apply() -> store transition -> views render again.
//!
//! Views hold no authoritative state of their own and never reach around
//! the controller.

use crate::{
    clock::DeskClock,
    command::DeskCommand,
    complaint::{Complaint, ComplaintDraft},
    config::DeskConfig,
    sample,
    store::ComplaintStore,
    view::ActiveView,
};

pub struct Dashboard {
    store: ComplaintStore,
    active_view: ActiveView,
    clock: DeskClock,
    config: DeskConfig,
}

impl Dashboard {
    /// An empty dashboard. A session starts on the complaint list.
    pub fn new(clock: DeskClock, config: DeskConfig) -> Self {
        Self {
            store: ComplaintStore::new(),
            active_view: ActiveView::default(),
            clock,
            config,
        }
    }

    /// A dashboard pre-loaded with the demo dataset.
    pub fn seeded(clock: DeskClock, config: DeskConfig) -> Self {
        Self {
            store: ComplaintStore::with_records(sample::seed_complaints()),
            active_view: ActiveView::default(),
            clock,
            config,
        }
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    /// The full collection, newest first.
    pub fn complaints(&self) -> &[Complaint] {
        self.store.complaints()
    }

    /// The resolver queue: cases assigned to the configured resolver.
    pub fn assigned_cases(&self) -> Vec<&Complaint> {
        self.store.assigned_to(&self.config.resolver_id)
    }

    pub fn clock(&self) -> &DeskClock {
        &self.clock
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    /// Apply one command. Returns whether any state changed.
    pub fn apply(&mut self, command: DeskCommand) -> bool {
        match command {
            DeskCommand::SetView { view } => {
                let changed = self.active_view != view;
                self.active_view = view;
                changed
            }
            DeskCommand::SubmitComplaint {
                category,
                summary,
                description,
            } => {
                let draft = ComplaintDraft {
                    category,
                    summary,
                    description,
                };
                let filed = self.store.submit(draft, &self.clock, &self.config);
                if filed {
                    // The form returns to the list after a successful filing.
                    self.active_view = ActiveView::Complaints;
                }
                filed
            }
            DeskCommand::CustomerAction {
                complaint_id,
                action,
            } => self
                .store
                .apply_customer_action(&complaint_id, action, &self.clock, &self.config),
            DeskCommand::ResolverAction {
                complaint_id,
                action,
            } => self
                .store
                .apply_resolver_action(&complaint_id, action, &self.clock, &self.config),
        }
    }
}
