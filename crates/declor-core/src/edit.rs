//! Span-based source code editing
//!
//! Edits are byte-faithful: a replacement is spliced in exactly as given,
//! with no whitespace or indentation adjustment. Reordering fixes rely on
//! this to guarantee that applying a script permutes the original bytes
//! rather than rewriting them.

use thiserror::Error;

/// Errors that can occur during edit application
#[derive(Error, Debug)]
pub enum EditError {
    #[error("Overlapping edits detected at offset {0}")]
    OverlappingEdits(usize),

    #[error("Edit span {start}..{end} out of bounds for source length {len}")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },

    #[error("Edit span {start}..{end} ends before it starts")]
    InvertedSpan { start: usize, end: usize },
}

/// Represents a single code edit operation
#[derive(Debug, Clone)]
pub struct Edit {
    /// Start byte offset of the replaced range (inclusive)
    pub start: usize,
    /// End byte offset of the replaced range (exclusive)
    pub end: usize,
    /// The replacement text
    pub replacement: String,
    /// Human-readable description of the edit
    pub message: String,
}

impl Edit {
    /// Create a new edit replacing `[start, end)` with `replacement`
    pub fn new(
        start: usize,
        end: usize,
        replacement: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            replacement: replacement.into(),
            message: message.into(),
        }
    }
}

/// Apply edits to source code.
///
/// Edits are applied in reverse order (from end to start) so that every
/// edit's offsets remain valid against the original snapshot.
///
/// # Arguments
/// * `source` - The original source code
/// * `edits` - Slice of edits to apply
///
/// # Returns
/// * `Ok(String)` - The modified source code
/// * `Err(EditError)` - If edits overlap, invert, or are out of bounds
pub fn apply_edits(source: &str, edits: &[Edit]) -> Result<String, EditError> {
    if edits.is_empty() {
        return Ok(source.to_string());
    }

    // Sort edits by start position (descending) for safe replacement
    let mut sorted_edits: Vec<&Edit> = edits.iter().collect();
    sorted_edits.sort_by(|a, b| b.start.cmp(&a.start));

    // Validate: check for overlapping edits and bounds
    let source_len = source.len();
    let mut prev_start: Option<usize> = None;

    for edit in &sorted_edits {
        if edit.end < edit.start {
            return Err(EditError::InvertedSpan {
                start: edit.start,
                end: edit.end,
            });
        }

        if edit.end > source_len {
            return Err(EditError::SpanOutOfBounds {
                start: edit.start,
                end: edit.end,
                len: source_len,
            });
        }

        // Check for overlap with the edit that follows in the text
        if let Some(prev) = prev_start {
            if edit.end > prev {
                return Err(EditError::OverlappingEdits(edit.start));
            }
        }

        prev_start = Some(edit.start);
    }

    // Apply edits from end to start
    let mut result = source.to_string();

    for edit in sorted_edits {
        result.replace_range(edit.start..edit.end, &edit.replacement);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_replacement() {
        let source = "class A { int b; }";
        let edit = Edit::new(10, 16, "int c;", "swap member");

        let result = apply_edits(source, &[edit]).unwrap();
        assert_eq!(result, "class A { int c; }");
    }

    #[test]
    fn test_multiple_edits() {
        let source = "one two three";
        let edits = vec![
            Edit::new(0, 3, "three", "first"),
            Edit::new(8, 13, "one", "second"),
        ];

        let result = apply_edits(source, &edits).unwrap();
        assert_eq!(result, "three two one");
    }

    #[test]
    fn test_replacement_is_byte_faithful() {
        // Leading whitespace in the replacement must survive untouched.
        let source = "a;X";
        let edit = Edit::new(2, 3, "\n    b;", "verbatim splice");

        let result = apply_edits(source, &[edit]).unwrap();
        assert_eq!(result, "a;\n    b;");
    }

    #[test]
    fn test_empty_edits() {
        let source = "unchanged";
        let result = apply_edits(source, &[]).unwrap();
        assert_eq!(result, "unchanged");
    }

    #[test]
    fn test_out_of_bounds() {
        let source = "short";
        let edit = Edit::new(0, 100, "replacement", "oob");

        let result = apply_edits(source, &[edit]);
        assert!(matches!(result, Err(EditError::SpanOutOfBounds { .. })));
    }

    #[test]
    fn test_inverted_span() {
        let source = "abcdef";
        let edit = Edit::new(4, 2, "x", "inverted");

        let result = apply_edits(source, &[edit]);
        assert!(matches!(result, Err(EditError::InvertedSpan { .. })));
    }

    #[test]
    fn test_overlapping_edits() {
        let source = "abcdef";
        let edits = vec![
            Edit::new(0, 4, "x", "first"),
            Edit::new(2, 6, "y", "second"),
        ];

        let result = apply_edits(source, &edits);
        assert!(matches!(result, Err(EditError::OverlappingEdits(_))));
    }

    #[test]
    fn test_adjacent_edits_do_not_overlap() {
        let source = "abcdef";
        let edits = vec![
            Edit::new(0, 3, "def", "first"),
            Edit::new(3, 6, "abc", "second"),
        ];

        let result = apply_edits(source, &edits).unwrap();
        assert_eq!(result, "defabc");
    }
}
