//! The demo dataset: three complaints at different lifecycle stages.
//!
//! Used by the runner's demo mode and as a test fixture. One resolved
//! billing case, one freshly assigned technical case, one in-progress
//! service case; all routed to the default resolver.

use crate::complaint::{Category, Comment, Complaint, Status, Team};
use chrono::{DateTime, NaiveDate, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid literal date")
}

fn stamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    date(y, m, d)
        .and_hms_opt(h, min, 0)
        .expect("valid literal time")
        .and_utc()
}

pub fn seed_complaints() -> Vec<Complaint> {
    vec![
        Complaint {
            id: "C-2024-001".to_string(),
            date_filed: date(2024, 1, 15),
            category: Category::Billing,
            summary: "Incorrect charges on my monthly bill".to_string(),
            status: Status::Resolved,
            resolution_date: Some(date(2024, 1, 18)),
            resolution_summary: Some("Billing error corrected and refund processed".to_string()),
            generated_solution: Some(
                "Auto-corrected billing cycle and applied credit".to_string(),
            ),
            backend_solution: Some(
                "System analysis shows duplicate billing entries. Automated refund of $45.99 \
                 processed. Account reconciled with correct billing cycle."
                    .to_string(),
            ),
            assigned_to: Some("Current Resolver".to_string()),
            assigned_team: Some(Team::BillingTeam),
            assigned_date: Some(date(2024, 1, 16)),
            deadline: Some(date(2024, 1, 20)),
            comments: vec![Comment {
                author: "Resolver".to_string(),
                timestamp: stamp(2024, 1, 17, 10, 30),
                text: "Investigated billing system logs. Found duplicate charge from system \
                       error."
                    .to_string(),
            }],
        },
        Complaint {
            id: "C-2024-002".to_string(),
            date_filed: date(2024, 1, 20),
            category: Category::Technical,
            summary: "Unable to access my account dashboard".to_string(),
            status: Status::Assigned,
            resolution_date: None,
            resolution_summary: None,
            generated_solution: Some("Clear browser cache and reset password".to_string()),
            backend_solution: Some(
                "Authentication service logs show session timeout issues. User's browser has \
                 outdated cookies. Backend fix deployed for session management."
                    .to_string(),
            ),
            assigned_to: Some("Current Resolver".to_string()),
            assigned_team: Some(Team::TechnicalSupport),
            assigned_date: Some(date(2024, 1, 21)),
            deadline: Some(date(2024, 1, 25)),
            comments: vec![Comment {
                author: "Resolver".to_string(),
                timestamp: stamp(2024, 1, 22, 14, 15),
                text: "Deployed session management fix. Monitoring user login attempts."
                    .to_string(),
            }],
        },
        Complaint {
            id: "C-2024-003".to_string(),
            date_filed: date(2024, 1, 22),
            category: Category::Service,
            summary: "Poor customer service experience".to_string(),
            status: Status::InProgress,
            resolution_date: None,
            resolution_summary: None,
            generated_solution: Some(
                "Schedule follow-up call with senior representative".to_string(),
            ),
            backend_solution: Some(
                "Call logs analysis reveals long wait times during peak hours. Implementing \
                 callback system and additional staffing recommendations."
                    .to_string(),
            ),
            assigned_to: Some("Current Resolver".to_string()),
            assigned_team: Some(Team::CustomerSuccess),
            assigned_date: Some(date(2024, 1, 23)),
            deadline: Some(date(2024, 1, 26)),
            comments: vec![],
        },
    ]
}
