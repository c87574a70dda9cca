//! desk-runner: headless runner for the Supportly complaint desk.
//!
//! Usage:
//!   desk-runner                          # seeded demo scenario + summary
//!   desk-runner --today 2024-02-01       # pin the clock
//!   desk-runner --view resolver          # open on a specific screen
//!   desk-runner --empty --ipc-mode       # JSON command loop for a UI shell

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use supportly_core::{
    clock::DeskClock,
    command::{CustomerAction, DeskCommand, ResolverAction},
    complaint::{Category, Complaint, Team},
    config::DeskConfig,
    dashboard::Dashboard,
    deadline::{days_since, DeadlineStatus},
    view::ActiveView,
};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcRequest {
    GetState,
    Command { command: DeskCommand },
    Quit,
}

/// One resolver-queue card with its derived annotations.
#[derive(serde::Serialize)]
struct CaseView {
    #[serde(flatten)]
    complaint: Complaint,
    deadline_status: Option<DeadlineStatus>,
    deadline_label: Option<&'static str>,
    days_assigned: Option<i64>,
}

/// The full render state handed to a UI shell, one JSON line per request.
#[derive(serde::Serialize)]
struct UiState {
    active_view: ActiveView,
    complaint_count: usize,
    assigned_count: usize,
    complaints: Vec<Complaint>,
    assigned_cases: Vec<CaseView>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let empty = args.iter().any(|a| a == "--empty");

    let config = match find_arg(&args, "--config") {
        Some(path) => DeskConfig::load(Path::new(path))?,
        None => DeskConfig::default(),
    };
    let clock = match find_arg(&args, "--today") {
        Some(raw) => {
            let today: NaiveDate = raw
                .parse()
                .with_context(|| format!("invalid --today date: {raw}"))?;
            DeskClock::fixed(today)
        }
        None => DeskClock::system(),
    };

    let mut dashboard = if empty {
        Dashboard::new(clock, config)
    } else {
        Dashboard::seeded(clock, config)
    };
    if let Some(key) = find_arg(&args, "--view") {
        dashboard.apply(DeskCommand::SetView {
            view: ActiveView::from_key(key),
        });
    }

    if ipc_mode {
        run_ipc_loop(&mut dashboard)
    } else {
        run_demo(&mut dashboard)
    }
}

fn run_ipc_loop(dashboard: &mut Dashboard) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{err_json}")?;
                stdout.flush()?;
                continue;
            }
        };

        match request {
            IpcRequest::Quit => break,
            IpcRequest::GetState => {
                let state = build_ui_state(dashboard);
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
            IpcRequest::Command { command } => {
                let changed = dashboard.apply(command);
                if !changed {
                    log::debug!("command was a no-op");
                }
                let state = build_ui_state(dashboard);
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn build_ui_state(dashboard: &Dashboard) -> UiState {
    let today = dashboard.clock().today();
    let assigned_cases: Vec<CaseView> = dashboard
        .assigned_cases()
        .into_iter()
        .map(|c| {
            let deadline_status = c.deadline.map(|d| DeadlineStatus::classify(d, today));
            CaseView {
                deadline_status,
                deadline_label: deadline_status.map(|s| s.label()),
                days_assigned: c.assigned_date.map(|d| days_since(d, today)),
                complaint: c.clone(),
            }
        })
        .collect();

    UiState {
        active_view: dashboard.active_view(),
        complaint_count: dashboard.complaints().len(),
        assigned_count: assigned_cases.len(),
        complaints: dashboard.complaints().to_vec(),
        assigned_cases,
    }
}

/// A fixed scripted pass over the desk: a customer files and escalates a
/// complaint, the resolver works it to resolution.
fn run_demo(dashboard: &mut Dashboard) -> Result<()> {
    println!("Supportly desk-runner");
    println!("  seeded complaints: {}", dashboard.complaints().len());
    println!();

    dashboard.apply(DeskCommand::SetView {
        view: ActiveView::New,
    });
    dashboard.apply(DeskCommand::SubmitComplaint {
        category: Some(Category::Billing),
        summary: "Duplicate subscription charge".to_string(),
        description: "Charged twice on the 1st of the month.".to_string(),
    });
    let case_id = dashboard
        .complaints()
        .first()
        .map(|c| c.id.clone())
        .context("submission did not land")?;

    dashboard.apply(DeskCommand::CustomerAction {
        complaint_id: case_id.clone(),
        action: CustomerAction::Escalate,
    });
    dashboard.apply(DeskCommand::ResolverAction {
        complaint_id: case_id.clone(),
        action: ResolverAction::AddComment {
            text: "Pulled the billing ledger for this account.".to_string(),
        },
    });
    dashboard.apply(DeskCommand::ResolverAction {
        complaint_id: case_id.clone(),
        action: ResolverAction::ChangeTeam {
            team: Team::BillingTeam,
        },
    });
    dashboard.apply(DeskCommand::ResolverAction {
        complaint_id: case_id,
        action: ResolverAction::Resolve,
    });

    print_summary(dashboard)
}

fn print_summary(dashboard: &Dashboard) -> Result<()> {
    let today = dashboard.clock().today();

    println!("=== DESK SUMMARY ===");
    println!("  active view:    {}", dashboard.active_view().key());
    println!("  complaints:     {}", dashboard.complaints().len());
    println!("  assigned cases: {}", dashboard.assigned_cases().len());
    println!();
    for c in dashboard.complaints() {
        println!(
            "  {} | {} | {} | {}",
            c.id, c.status, c.category, c.summary
        );
    }

    println!();
    println!("=== RESOLVER QUEUE ===");
    if dashboard.assigned_cases().is_empty() {
        println!("  (no cases assigned)");
    }
    for c in dashboard.assigned_cases() {
        let badge = c
            .deadline
            .map(|d| DeadlineStatus::classify(d, today).label())
            .unwrap_or("-");
        let days = c
            .assigned_date
            .map(|d| days_since(d, today).to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {} | {} | {} | assigned {} day(s) ago | {} comment(s)",
            c.id,
            c.status,
            badge,
            days,
            c.comments.len()
        );
    }
    Ok(())
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
