//! Span resolution: which byte range each member owns
//!
//! Each movable member owns the range from the end of the previous owned or
//! skipped region up to its own end, so leading comments, docblocks and
//! annotations travel with the member they precede. Spans abut by
//! construction; concatenating them in source order reproduces the
//! reorderable region byte for byte.

use crate::classify::Placement;
use crate::error::EngineError;
use crate::model::{Container, ContainerKind, Member, MemberKind, TokenKind, TokenSource};

/// A half-open byte range of the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Result of resolving member spans for one container.
#[derive(Debug)]
pub enum SpanResolution {
    /// One entry per member; `None` for members that own no span.
    Resolved(Vec<Option<Span>>),
    /// A required position is unknown; the container cannot be analyzed.
    Unresolvable,
}

/// Resolves the offset at which the container's reorderable region begins.
///
/// That is the end of the first token at or after the opening delimiter,
/// i.e. the opening brace itself. Enum-like containers additionally skip to
/// the end of the first terminator after the brace, which closes the leading
/// enumerator list. Returns `None` when the container's bounds are unknown
/// or the expected tokens are absent.
pub fn resolve_body_start<T: TokenSource>(container: &Container, tokens: &T) -> Option<usize> {
    let (start, end) = match (container.start, container.end) {
        (Some(start), Some(end)) => (start, end),
        _ => return None,
    };

    let mut saw_brace = false;
    for token in tokens.tokens_in(start, end) {
        if !saw_brace {
            if token.kind == TokenKind::OpenBrace {
                if container.kind == ContainerKind::ClassLike {
                    return Some(token.end);
                }
                saw_brace = true;
            }
            continue;
        }
        if token.kind == TokenKind::Terminator {
            return Some(token.end);
        }
    }
    None
}

/// Computes the span each member owns, starting at `body_start`.
///
/// Members without source own nothing and do not interrupt ownership.
/// Unmovable members with source own nothing either, but the cursor advances
/// past them so their bytes are never captured by a neighbour. Enumerators
/// ending at or before the cursor sit inside the region already cleared by
/// the enum-like body-start rule and are skipped outright; an enumerator
/// ending past the cursor carries its own terminator and advances the cursor
/// like any other unmovable member.
pub fn resolve_spans(
    body_start: usize,
    members: &[Member],
    placements: &[Placement],
) -> Result<SpanResolution, EngineError> {
    debug_assert_eq!(members.len(), placements.len());

    let mut spans = Vec::with_capacity(members.len());
    let mut cursor = body_start;

    for (index, (member, placement)) in members.iter().zip(placements).enumerate() {
        if !member.has_source {
            spans.push(None);
            continue;
        }

        let end = match member.end {
            Some(end) => end,
            None => return Ok(SpanResolution::Unresolvable),
        };

        if member.kind == MemberKind::Enumerator {
            if end > cursor {
                cursor = end;
            }
            spans.push(None);
            continue;
        }

        if end <= cursor {
            return Err(EngineError::InvertedSpan {
                index,
                start: cursor,
                end,
            });
        }

        if matches!(placement, Placement::Ordinal(_)) {
            spans.push(Some(Span { start: cursor, end }));
        } else {
            spans.push(None);
        }
        cursor = end;
    }

    Ok(SpanResolution::Resolved(spans))
}
