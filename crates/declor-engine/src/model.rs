//! Input model for the reordering engine
//!
//! Frontends translate their AST into these records. Byte offsets are
//! expressed against the original, immutable source snapshot; `None` stands
//! for an unknown position (typically generated code), in which case the
//! whole container is skipped rather than partially reordered.

/// Syntactic category of a container member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    InitializerBlock,
    Constructor,
    Method,
    NestedType,
    /// An enumerator of an enumerated type; never reordered.
    Enumerator,
    /// Any member kind the engine does not recognize; never reordered.
    Other,
}

/// Kind of the enclosing container.
///
/// Enum-like containers open with an enumerator list whose terminator marks
/// where the reorderable region begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    ClassLike,
    EnumLike,
}

/// A single member declaration, in the container's source order.
#[derive(Debug, Clone)]
pub struct Member {
    pub kind: MemberKind,
    /// Meaningful for fields and initializer blocks.
    pub is_static: bool,
    /// `false` for compiler-synthesized members (e.g. a default constructor
    /// with no textual representation). Such members own no span and are
    /// invisible to the planner.
    pub has_source: bool,
    /// `true` when the host's suppression predicate opts this member out of
    /// reordering.
    pub suppressed: bool,
    /// End byte offset of the member's own text, exclusive.
    pub end: Option<usize>,
}

/// A container and its members.
#[derive(Debug, Clone)]
pub struct Container {
    pub kind: ContainerKind,
    /// Start byte offset of the container declaration.
    pub start: Option<usize>,
    /// End byte offset of the container declaration, exclusive.
    pub end: Option<usize>,
    pub members: Vec<Member>,
}

/// Token categories the engine inspects.
///
/// Hosts map their lexer's kinds onto these; anything that is neither an
/// opening delimiter nor a statement terminator is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    OpenBrace,
    Terminator,
    Other,
}

/// A token with its byte range in the original source.
#[derive(Debug, Clone, Copy)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

/// Host-provided tokenizer over the original source text.
pub trait TokenSource {
    /// Returns the tokens covering `[start, end)`, in source order.
    fn tokens_in(&self, start: usize, end: usize) -> Vec<Token>;
}
