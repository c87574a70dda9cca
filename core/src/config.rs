//! Desk configuration: principal identities and presentation constants.
//!
//! The original dashboard bakes these in as scattered literals. Holding
//! them in one explicit context value keeps the store's transition
//! functions free of globals and lets a deployment rename the desk's
//! principals without touching the core.

use crate::complaint::Team;
use crate::error::DeskResult;
use crate::types::PrincipalId;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Principal the resolver queue filters on ("assigned to me").
    pub resolver_id: PrincipalId,
    /// Author stamped onto resolver comments.
    pub resolver_author: String,
    /// Team a customer escalation routes to.
    pub escalation_team: Team,
    /// Days from escalation to the case deadline.
    pub escalation_sla_days: i64,
    /// Customer-facing text shown until real analysis exists.
    pub generated_solution_placeholder: String,
    /// Resolver-facing analysis placeholder.
    pub backend_solution_placeholder: String,
    /// Resolution summary stamped by a resolver-side resolve.
    pub resolver_resolution_text: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            resolver_id: "Current Resolver".to_string(),
            resolver_author: "Resolver".to_string(),
            escalation_team: Team::TechnicalSupport,
            escalation_sla_days: 5,
            generated_solution_placeholder: "Analyzing complaint and generating solution..."
                .to_string(),
            backend_solution_placeholder: "Initial analysis in progress. AI is processing \
                 complaint details and generating comprehensive solution."
                .to_string(),
            resolver_resolution_text: "Resolved by resolver team".to_string(),
        }
    }
}

impl DeskConfig {
    /// Load a config from a JSON file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> DeskResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: DeskConfig = serde_json::from_str(&raw)?;
        if config.escalation_sla_days <= 0 {
            return Err(anyhow::anyhow!(
                "escalation_sla_days must be positive, got {}",
                config.escalation_sla_days
            )
            .into());
        }
        Ok(config)
    }
}
