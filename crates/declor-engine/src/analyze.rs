//! Per-container analysis pipeline
//!
//! Classification and order verification run first; span resolution and
//! planning only happen for containers that actually deviate from the
//! canonical order. Containers are independent: the engine holds no state
//! across calls, and a host may analyze many containers in parallel.

use declor_core::Edit;

use crate::classify::{classify, OrderPolicy, Placement};
use crate::error::EngineError;
use crate::model::{Container, TokenSource};
use crate::plan::{is_ordered, plan_reorder, MovableMember};
use crate::spans::{resolve_body_start, resolve_spans, SpanResolution};

/// Terminal result of analyzing one container.
#[derive(Debug)]
pub enum Outcome {
    /// The movable members already follow the canonical order.
    AlreadyOrdered,
    /// A required position could not be determined (typically generated
    /// code); the container is skipped without a finding.
    Unresolvable,
    /// Planning produced no edits; nothing is surfaced.
    NoEdits,
    /// The container needs reordering; applying the edit script to the
    /// original source permutes its members in place.
    Finding(Vec<Edit>),
}

/// Analyzes one container against the given ordering policy.
///
/// Never emits a partial fix: the result is either a complete permutation
/// script or no finding at all. Invariant violations are returned as errors
/// rather than silently dropped, since acting on them could corrupt source.
pub fn analyze<T: TokenSource>(
    container: &Container,
    source: &str,
    tokens: &T,
    policy: &OrderPolicy,
) -> Result<Outcome, EngineError> {
    let placements: Vec<Placement> = container
        .members
        .iter()
        .map(|member| classify(member, policy))
        .collect();

    if is_ordered(&placements) {
        return Ok(Outcome::AlreadyOrdered);
    }

    let body_start = match resolve_body_start(container, tokens) {
        Some(offset) => offset,
        None => return Ok(Outcome::Unresolvable),
    };

    let spans = match resolve_spans(body_start, &container.members, &placements)? {
        SpanResolution::Resolved(spans) => spans,
        SpanResolution::Unresolvable => return Ok(Outcome::Unresolvable),
    };

    let movable: Vec<MovableMember> = placements
        .iter()
        .zip(&spans)
        .enumerate()
        .filter_map(|(index, (placement, span))| match (placement.ordinal(), span) {
            (Some(ordinal), Some(span)) => Some(MovableMember {
                index,
                span: *span,
                ordinal,
            }),
            _ => None,
        })
        .collect();

    let edits = plan_reorder(&movable, source);
    if edits.is_empty() {
        return Ok(Outcome::NoEdits);
    }
    Ok(Outcome::Finding(edits))
}
