//! Inline suppression pragmas
//!
//! Two comment directives opt a declaration out of reordering:
//! - `// declor-ignore` on the line directly above the declaration
//! - `// declor-ignore-line` trailing on the declaration's first line
//!
//! `#` and `/* ... */` comment forms are recognized as well. A pragma above
//! a class-like declaration suppresses the whole container.

use std::collections::HashSet;

/// Parsed suppression directives, by 1-based line number.
#[derive(Debug, Default)]
pub struct IgnoreDirectives {
    lines: HashSet<usize>,
}

impl IgnoreDirectives {
    /// Parse directives from PHP source code.
    pub fn parse(source: &str) -> Self {
        let mut lines = HashSet::new();

        for (idx, line) in source.lines().enumerate() {
            let line_num = idx + 1;
            if contains_directive(line, "declor-ignore-line") {
                lines.insert(line_num);
            } else if contains_directive(line, "declor-ignore") {
                lines.insert(line_num + 1);
            }
        }

        Self { lines }
    }

    /// True when a declaration starting on `line` is suppressed.
    pub fn is_ignored_at(&self, line: usize) -> bool {
        self.lines.contains(&line)
    }
}

/// The directive must appear inside a comment on the line and not be a
/// prefix of a longer directive name.
fn contains_directive(line: &str, directive: &str) -> bool {
    let Some(comment) = comment_start(line) else {
        return false;
    };
    let Some(pos) = line[comment..].find(directive) else {
        return false;
    };
    !line[comment + pos + directive.len()..].starts_with('-')
}

/// Byte offset where a comment begins on the line, skipping markers that
/// sit inside string literals. `#[` opens an attribute, not a comment.
fn comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        match quote {
            Some(q) => {
                if bytes[i] == b'\\' {
                    i += 1;
                } else if bytes[i] == q {
                    quote = None;
                }
            }
            None => match bytes[i] {
                b'\'' | b'"' => quote = Some(bytes[i]),
                b'#' if !(i + 1 < bytes.len() && bytes[i + 1] == b'[') => return Some(i),
                b'/' if i + 1 < bytes.len() && (bytes[i + 1] == b'/' || bytes[i + 1] == b'*') => {
                    return Some(i)
                }
                _ => {}
            },
        }
        i += 1;
    }

    None
}

/// 1-based line number of a byte offset.
pub fn line_of(source: &str, offset: usize) -> usize {
    source[..offset.min(source.len())].matches('\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pragma_marks_next_line() {
        let directives = IgnoreDirectives::parse("<?php\n// declor-ignore\n$x = 1;\n");
        assert!(directives.is_ignored_at(3));
        assert!(!directives.is_ignored_at(2));
    }

    #[test]
    fn test_line_pragma_marks_its_own_line() {
        let directives = IgnoreDirectives::parse("<?php\n$x = 1; // declor-ignore-line\n");
        assert!(directives.is_ignored_at(2));
        assert!(!directives.is_ignored_at(3));
    }

    #[test]
    fn test_block_comment_form() {
        let directives = IgnoreDirectives::parse("<?php\n/* declor-ignore */\n$x = 1;\n");
        assert!(directives.is_ignored_at(3));
    }

    #[test]
    fn test_hash_comment_form() {
        let directives = IgnoreDirectives::parse("<?php\n# declor-ignore\n$x = 1;\n");
        assert!(directives.is_ignored_at(3));
    }

    #[test]
    fn test_bare_mention_is_not_a_directive() {
        let directives = IgnoreDirectives::parse("<?php\n$s = 1; $declorignore = 2;\ndeclor-ignore\n$y);\n");
        assert!(!directives.is_ignored_at(2));
        assert!(!directives.is_ignored_at(4));
    }

    #[test]
    fn test_directive_inside_string_literal_is_ignored() {
        let directives =
            IgnoreDirectives::parse("<?php\n$x = \"#\"; $y = \"declor-ignore\";\n$z = 1;\n");
        assert!(!directives.is_ignored_at(3));

        let directives = IgnoreDirectives::parse("<?php\n$x = '// declor-ignore';\n$z = 1;\n");
        assert!(!directives.is_ignored_at(3));
    }

    #[test]
    fn test_directive_after_string_literal_still_applies() {
        let directives =
            IgnoreDirectives::parse("<?php\n$x = \"text\"; // declor-ignore\n$z = 1;\n");
        assert!(directives.is_ignored_at(3));
    }

    #[test]
    fn test_line_of() {
        let source = "a\nbb\nccc";
        assert_eq!(line_of(source, 0), 1);
        assert_eq!(line_of(source, 2), 2);
        assert_eq!(line_of(source, 5), 3);
    }
}
