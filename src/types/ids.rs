//! Deterministic UUIDv5 identifiers for plans and resource specs.
//!
//! The UUID namespace is derived from a stable tag (`NS_TAG`) so that
//! `plan_id` and `spec_id` are reproducible across runs for the same
//! resolved plan.
use std::fmt::Write;

use uuid::Uuid;

use super::plan::{Node, Plan};
use crate::constants::NS_TAG;

/// Internal: return the UUID namespace used for deterministic IDs.
fn namespace() -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, NS_TAG.as_bytes())
}

/// Compute a deterministic UUIDv5 for a plan by serializing its specs and
/// edges in order.
///
/// Two structurally identical plans have the same `plan_id`, independent of
/// when or where they were resolved.
#[must_use]
pub fn plan_id(plan: &Plan) -> Uuid {
    let ns = namespace();
    // Serde serialization is stable: struct field order and entry order are
    // both deterministic.
    let s = serde_json::to_string(plan).unwrap_or_default();
    Uuid::new_v5(&ns, s.as_bytes())
}

/// Compute a deterministic UUIDv5 for one plan resource as a function of the
/// plan ID, the resource's stable label, and its position.
#[must_use]
pub fn spec_id(plan_id: &Uuid, node: Node, idx: usize) -> Uuid {
    let mut s = node.label().to_string();
    let _ = write!(s, "#{idx}");
    Uuid::new_v5(plan_id, s.as_bytes())
}
