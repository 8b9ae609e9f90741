//! declor-engine: the declaration reordering engine
//!
//! Given a class-like container and its member declarations, this crate
//! classifies each member into a canonical position, decides whether the
//! existing order already satisfies it, and when it does not, computes a
//! text-faithful edit script that permutes the members in place, attached
//! comments and annotations included. No member's own text is ever
//! re-synthesized, and no member moves unless its position can be
//! determined precisely.
//!
//! Parsing, byte offsets, tokenization and suppression lookups are supplied
//! by a host frontend; the engine itself never touches a parser. See
//! [`analyze`] for the per-container entry point.

pub mod analyze;
pub mod classify;
mod error;
pub mod model;
pub mod plan;
pub mod spans;

pub use analyze::{analyze, Outcome};
pub use classify::{classify, Category, OrderPolicy, Placement};
pub use error::EngineError;
pub use model::{Container, ContainerKind, Member, MemberKind, Token, TokenKind, TokenSource};
pub use spans::{resolve_body_start, resolve_spans, Span, SpanResolution};
