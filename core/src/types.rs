//! Shared primitive types used across the dashboard core.

/// A complaint's stable identifier, e.g. "C-2024-001".
pub type ComplaintId = String;

/// An acting identity: the filing customer or the working resolver.
pub type PrincipalId = String;
