//! Controller-level tests: view routing, command dispatch, the resolver
//! queue filter, and the command wire format.

use chrono::NaiveDate;
use supportly_core::{
    clock::DeskClock,
    command::{CustomerAction, DeskCommand, ResolverAction},
    complaint::{Category, Team},
    config::DeskConfig,
    dashboard::Dashboard,
    view::ActiveView,
};

fn fixed_clock() -> DeskClock {
    DeskClock::fixed(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
}

/// A session starts on the complaint list.
#[test]
fn session_starts_on_complaint_list() {
    let dashboard = Dashboard::new(fixed_clock(), DeskConfig::default());
    assert_eq!(dashboard.active_view(), ActiveView::Complaints);
    assert!(dashboard.complaints().is_empty());
}

/// A successful filing returns the form to the complaint list; a
/// rejected one stays put.
#[test]
fn submission_navigates_back_to_list() {
    let mut dashboard = Dashboard::new(fixed_clock(), DeskConfig::default());
    dashboard.apply(DeskCommand::SetView {
        view: ActiveView::New,
    });

    let rejected = dashboard.apply(DeskCommand::SubmitComplaint {
        category: None,
        summary: "no category".to_string(),
        description: String::new(),
    });
    assert!(!rejected);
    assert_eq!(
        dashboard.active_view(),
        ActiveView::New,
        "a rejected filing must not navigate"
    );

    let filed = dashboard.apply(DeskCommand::SubmitComplaint {
        category: Some(Category::Account),
        summary: "Locked out of account".to_string(),
        description: String::new(),
    });
    assert!(filed);
    assert_eq!(dashboard.active_view(), ActiveView::Complaints);
}

/// The resolver queue holds only cases assigned to the configured
/// resolver; an open case never shows up there.
#[test]
fn resolver_queue_filters_on_assignment() {
    let mut dashboard = Dashboard::new(fixed_clock(), DeskConfig::default());
    assert!(dashboard.assigned_cases().is_empty(), "empty desk, empty queue");

    dashboard.apply(DeskCommand::SubmitComplaint {
        category: Some(Category::Technical),
        summary: "Sync keeps failing".to_string(),
        description: String::new(),
    });
    assert!(
        dashboard.assigned_cases().is_empty(),
        "open complaints are not in the queue"
    );

    dashboard.apply(DeskCommand::CustomerAction {
        complaint_id: "C-2024-001".to_string(),
        action: CustomerAction::Escalate,
    });
    let queue = dashboard.assigned_cases();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, "C-2024-001");
}

/// The demo dataset routes all three cases to the resolver.
#[test]
fn seeded_dashboard_fills_the_queue() {
    let dashboard = Dashboard::seeded(fixed_clock(), DeskConfig::default());
    assert_eq!(dashboard.complaints().len(), 3);
    assert_eq!(dashboard.assigned_cases().len(), 3);
}

/// Switching to an already-active view reports no change.
#[test]
fn redundant_view_switch_is_a_no_op() {
    let mut dashboard = Dashboard::new(fixed_clock(), DeskConfig::default());
    assert!(dashboard.apply(DeskCommand::SetView {
        view: ActiveView::Resolver,
    }));
    assert!(!dashboard.apply(DeskCommand::SetView {
        view: ActiveView::Resolver,
    }));
}

/// Every command variant deserializes from its documented tag form.
#[test]
fn command_wire_format_roundtrips() {
    let cases: Vec<(&str, DeskCommand)> = vec![
        (
            r#"{"cmd":"set_view","view":"new"}"#,
            DeskCommand::SetView {
                view: ActiveView::New,
            },
        ),
        (
            r#"{"cmd":"submit_complaint","category":"Billing","summary":"Test issue"}"#,
            DeskCommand::SubmitComplaint {
                category: Some(Category::Billing),
                summary: "Test issue".to_string(),
                description: String::new(),
            },
        ),
        (
            r#"{"cmd":"customer_action","complaint_id":"C-2024-001","action":"escalate"}"#,
            DeskCommand::CustomerAction {
                complaint_id: "C-2024-001".to_string(),
                action: CustomerAction::Escalate,
            },
        ),
        (
            r#"{"cmd":"resolver_action","complaint_id":"C-2024-002","action":{"action":"change_team","team":"Billing Team"}}"#,
            DeskCommand::ResolverAction {
                complaint_id: "C-2024-002".to_string(),
                action: ResolverAction::ChangeTeam {
                    team: Team::BillingTeam,
                },
            },
        ),
        (
            r#"{"cmd":"resolver_action","complaint_id":"C-2024-003","action":{"action":"add_comment","text":"Checked logs"}}"#,
            DeskCommand::ResolverAction {
                complaint_id: "C-2024-003".to_string(),
                action: ResolverAction::AddComment {
                    text: "Checked logs".to_string(),
                },
            },
        ),
    ];

    for (wire, expected) in cases {
        let parsed: DeskCommand = serde_json::from_str(wire).expect(wire);
        assert_eq!(parsed, expected, "wire form: {wire}");
    }
}
