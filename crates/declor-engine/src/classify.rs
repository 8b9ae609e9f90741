//! Canonical member classification
//!
//! Members are ranked as follows: static fields, instance fields, static
//! initializer blocks, instance initializer blocks, constructors, methods,
//! nested types. Everything else is unmovable, as are suppressed members,
//! enumerators, and members without source.

use crate::model::{Member, MemberKind};

/// Classification result: a rank in the canonical order, or unmovable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Ordinal(u8),
    Unmovable,
}

impl Placement {
    /// The rank, if the member is movable.
    pub fn ordinal(self) -> Option<u8> {
        match self {
            Placement::Ordinal(rank) => Some(rank),
            Placement::Unmovable => None,
        }
    }
}

/// A member category that participates in the canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    StaticField,
    InstanceField,
    StaticInitializer,
    InstanceInitializer,
    Constructor,
    Method,
    NestedType,
}

/// Immutable category-to-rank table.
///
/// The same policy value is consulted by the classifier and carried through
/// planning, so the two cannot drift apart.
#[derive(Debug, Clone, Copy)]
pub struct OrderPolicy {
    table: &'static [(Category, u8)],
}

impl OrderPolicy {
    /// The fixed canonical ordering. Not user-configurable.
    pub const fn canonical() -> Self {
        Self {
            table: &[
                (Category::StaticField, 1),
                (Category::InstanceField, 2),
                (Category::StaticInitializer, 3),
                (Category::InstanceInitializer, 4),
                (Category::Constructor, 5),
                (Category::Method, 6),
                (Category::NestedType, 7),
            ],
        }
    }

    /// The rank assigned to a category, if the policy orders it.
    pub fn rank(&self, category: Category) -> Option<u8> {
        self.table
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, rank)| *rank)
    }
}

fn category_of(member: &Member) -> Option<Category> {
    match member.kind {
        MemberKind::Field => Some(if member.is_static {
            Category::StaticField
        } else {
            Category::InstanceField
        }),
        MemberKind::InitializerBlock => Some(if member.is_static {
            Category::StaticInitializer
        } else {
            Category::InstanceInitializer
        }),
        MemberKind::Constructor => Some(Category::Constructor),
        MemberKind::Method => Some(Category::Method),
        MemberKind::NestedType => Some(Category::NestedType),
        MemberKind::Enumerator | MemberKind::Other => None,
    }
}

/// Returns the member's placement under the given policy.
pub fn classify(member: &Member, policy: &OrderPolicy) -> Placement {
    if member.suppressed || !member.has_source {
        return Placement::Unmovable;
    }
    match category_of(member).and_then(|category| policy.rank(category)) {
        Some(rank) => Placement::Ordinal(rank),
        None => Placement::Unmovable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(kind: MemberKind) -> Member {
        Member {
            kind,
            is_static: false,
            has_source: true,
            suppressed: false,
            end: Some(0),
        }
    }

    fn static_member(kind: MemberKind) -> Member {
        Member {
            is_static: true,
            ..member(kind)
        }
    }

    #[test]
    fn test_canonical_ranks() {
        let policy = OrderPolicy::canonical();
        assert_eq!(
            classify(&static_member(MemberKind::Field), &policy),
            Placement::Ordinal(1)
        );
        assert_eq!(
            classify(&member(MemberKind::Field), &policy),
            Placement::Ordinal(2)
        );
        assert_eq!(
            classify(&static_member(MemberKind::InitializerBlock), &policy),
            Placement::Ordinal(3)
        );
        assert_eq!(
            classify(&member(MemberKind::InitializerBlock), &policy),
            Placement::Ordinal(4)
        );
        assert_eq!(
            classify(&member(MemberKind::Constructor), &policy),
            Placement::Ordinal(5)
        );
        assert_eq!(
            classify(&member(MemberKind::Method), &policy),
            Placement::Ordinal(6)
        );
        assert_eq!(
            classify(&member(MemberKind::NestedType), &policy),
            Placement::Ordinal(7)
        );
    }

    #[test]
    fn test_unrecognized_kinds_are_unmovable() {
        let policy = OrderPolicy::canonical();
        assert_eq!(
            classify(&member(MemberKind::Enumerator), &policy),
            Placement::Unmovable
        );
        assert_eq!(
            classify(&member(MemberKind::Other), &policy),
            Placement::Unmovable
        );
    }

    #[test]
    fn test_suppressed_member_is_unmovable() {
        let policy = OrderPolicy::canonical();
        let suppressed = Member {
            suppressed: true,
            ..member(MemberKind::Method)
        };
        assert_eq!(classify(&suppressed, &policy), Placement::Unmovable);
    }

    #[test]
    fn test_sourceless_member_is_unmovable() {
        let policy = OrderPolicy::canonical();
        let synthesized = Member {
            has_source: false,
            end: None,
            ..member(MemberKind::Constructor)
        };
        assert_eq!(classify(&synthesized, &policy), Placement::Unmovable);
    }
}
