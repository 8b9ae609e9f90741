//! Order verification and reorder planning
//!
//! Planning is a positional zip: the movable members are stable-sorted by
//! ordinal, and position `i` in the original sequence keeps its own span
//! boundaries while receiving the bytes of the member ranked `i`. Every
//! edit's offsets stay valid against the original snapshot simultaneously,
//! so the script needs no insert/delete shifting.

use declor_core::Edit;

use crate::classify::Placement;
use crate::spans::Span;

/// A movable member: its stable position in the member list, its owned span
/// and its canonical ordinal.
#[derive(Debug, Clone, Copy)]
pub struct MovableMember {
    pub index: usize,
    pub span: Span,
    pub ordinal: u8,
}

/// True when the movable members' ordinal sequence is already non-decreasing.
///
/// Unmovable members are ignored entirely; their presence neither blocks nor
/// triggers a finding.
pub fn is_ordered(placements: &[Placement]) -> bool {
    let ordinals: Vec<u8> = placements.iter().filter_map(|p| p.ordinal()).collect();
    ordinals.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Computes the edit script that permutes the movable members into canonical
/// order.
///
/// The sort is stable: members sharing an ordinal keep their original
/// relative order. Self-pairings, positions whose member is already the one
/// ranked there, contribute no edit, which is the dominant case when only a
/// subset of members actually moves. Replacement bytes are always read from
/// the unmodified `source`.
pub fn plan_reorder(movable: &[MovableMember], source: &str) -> Vec<Edit> {
    let mut ranked: Vec<&MovableMember> = movable.iter().collect();
    ranked.sort_by_key(|member| member.ordinal);

    movable
        .iter()
        .zip(ranked)
        .filter(|(original, replacement)| original.index != replacement.index)
        .map(|(original, replacement)| {
            Edit::new(
                original.span.start,
                original.span.end,
                &source[replacement.span.start..replacement.span.end],
                format!(
                    "Move member {} into position {}",
                    replacement.index + 1,
                    original.index + 1
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movable(index: usize, start: usize, end: usize, ordinal: u8) -> MovableMember {
        MovableMember {
            index,
            span: Span { start, end },
            ordinal,
        }
    }

    #[test]
    fn test_is_ordered_ignores_unmovable_members() {
        let placements = vec![
            Placement::Unmovable,
            Placement::Ordinal(1),
            Placement::Unmovable,
            Placement::Ordinal(6),
        ];
        assert!(is_ordered(&placements));
    }

    #[test]
    fn test_is_ordered_allows_ties() {
        let placements = vec![
            Placement::Ordinal(1),
            Placement::Ordinal(1),
            Placement::Ordinal(2),
        ];
        assert!(is_ordered(&placements));
    }

    #[test]
    fn test_is_ordered_detects_inversion() {
        let placements = vec![Placement::Ordinal(2), Placement::Ordinal(1)];
        assert!(!is_ordered(&placements));
    }

    #[test]
    fn test_swap_produces_two_edits() {
        let source = "..BB..AAAA";
        let members = vec![movable(0, 0, 4, 6), movable(1, 4, 10, 1)];
        let edits = plan_reorder(&members, source);
        assert_eq!(edits.len(), 2);
        assert_eq!(edits[0].replacement, "..AAAA");
        assert_eq!(edits[1].replacement, "..BB");
    }

    #[test]
    fn test_self_pairing_emits_no_edit() {
        // First member is already in place; only the trailing two swap.
        let source = "AABBBCCC..";
        let members = vec![
            movable(0, 0, 2, 1),
            movable(1, 2, 5, 6),
            movable(2, 5, 10, 5),
        ];
        let edits = plan_reorder(&members, source);
        assert_eq!(edits.len(), 2);
        assert_eq!(edits[0].start, 2);
        assert_eq!(edits[0].replacement, "CCC..");
        assert_eq!(edits[1].start, 5);
        assert_eq!(edits[1].replacement, "BBB");
    }

    #[test]
    fn test_stable_sort_keeps_tied_members_in_source_order() {
        let source = "MMMaaabbb.";
        let members = vec![
            movable(0, 0, 3, 6),
            movable(1, 3, 6, 1),
            movable(2, 6, 10, 1),
        ];
        let edits = plan_reorder(&members, source);
        // Target order is a, b, M: all three positions change.
        assert_eq!(edits.len(), 3);
        assert_eq!(edits[0].replacement, "aaa");
        assert_eq!(edits[1].replacement, "bbb.");
        assert_eq!(edits[2].replacement, "MMM");
    }

    #[test]
    fn test_already_sorted_sequence_plans_nothing() {
        let source = "aaabbbccc.";
        let members = vec![
            movable(0, 0, 3, 1),
            movable(1, 3, 6, 2),
            movable(2, 6, 10, 6),
        ];
        assert!(plan_reorder(&members, source).is_empty());
    }
}
