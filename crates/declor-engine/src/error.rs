//! Engine error type

use thiserror::Error;

/// Internal invariant violations.
///
/// These are fatal for the affected container's analysis: surfacing them is
/// preferable to emitting an edit script computed from corrupt spans.
/// Recoverable conditions (unknown offsets, unrecognized member kinds) never
/// produce an error; they resolve to "no finding".
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("member {index} ends at {end}, before its span starts at {start}")]
    InvertedSpan {
        index: usize,
        start: usize,
        end: usize,
    },
}
