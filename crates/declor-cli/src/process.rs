//! File processing logic for declor

use anyhow::{Context, Result};
use bumpalo::Bump;
use mago_database::file::FileId;
use std::collections::HashSet;
use std::path::Path;

use declor_core::{apply_edits, Edit};
use declor_php::RuleRegistry;

use crate::output::EditInfo;

/// Result of processing a single file
pub struct ProcessResult {
    /// Edits that were found/applied
    pub edits: Vec<EditInfo>,
    /// Original source code
    pub old_source: String,
    /// New source code after edits (only if edits were found)
    pub new_source: Option<String>,
}

/// Process a single PHP file and return the edits found
pub fn process_file(
    path: &Path,
    enabled_rules: &HashSet<String>,
) -> Result<Option<ProcessResult>> {
    let source_code = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    // Create arena allocator and file ID for mago
    let arena = Bump::new();
    let file_id = FileId::new(path.to_string_lossy().as_ref());

    // Parse the PHP file
    let (program, parse_error) =
        mago_syntax::parser::parse_file_content(&arena, file_id, &source_code);

    // Files that do not parse are skipped rather than half-reordered
    if parse_error.is_some() {
        return Ok(None);
    }

    // Run each enabled rule and tag its edits with the rule name
    let registry = RuleRegistry::new();
    let mut tagged: Vec<(&'static str, Edit)> = Vec::new();
    for rule in registry.get_enabled(enabled_rules) {
        let found = rule
            .check(program, &source_code)
            .with_context(|| format!("Rule '{}' failed on {}", rule.name(), path.display()))?;
        tagged.extend(found.into_iter().map(|edit| (rule.name(), edit)));
    }

    if tagged.is_empty() {
        return Ok(Some(ProcessResult {
            edits: vec![],
            old_source: source_code,
            new_source: None,
        }));
    }

    let edit_infos: Vec<EditInfo> = tagged
        .iter()
        .map(|(rule, edit)| {
            let (line, column) = offset_to_line_column(&source_code, edit.start);
            EditInfo {
                rule: rule.to_string(),
                line,
                column,
                message: edit.message.clone(),
            }
        })
        .collect();

    let edits: Vec<Edit> = tagged.into_iter().map(|(_, edit)| edit).collect();
    let new_source = apply_edits(&source_code, &edits)
        .with_context(|| format!("Failed to apply edits to {}", path.display()))?;

    Ok(Some(ProcessResult {
        edits: edit_infos,
        old_source: source_code,
        new_source: Some(new_source),
    }))
}

/// Write the processed result to the file
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Convert byte offset to line and column numbers (1-based)
fn offset_to_line_column(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;

    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn enabled() -> HashSet<String> {
        ["member_order".to_string()].into_iter().collect()
    }

    #[test]
    fn test_offset_to_line_column() {
        let source = "line1\nline2\nline3";
        assert_eq!(offset_to_line_column(source, 0), (1, 1));
        assert_eq!(offset_to_line_column(source, 5), (1, 6)); // newline
        assert_eq!(offset_to_line_column(source, 6), (2, 1)); // start of line2
        assert_eq!(offset_to_line_column(source, 12), (3, 1)); // start of line3
    }

    #[test]
    fn test_process_file_with_unordered_members() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.php");
        fs::write(
            &path,
            "<?php\nclass A {\n    private $b = 2;\n    private static $a = 1;\n}\n",
        )
        .unwrap();

        let result = process_file(&path, &enabled()).unwrap().unwrap();
        assert_eq!(result.edits.len(), 2);
        assert_eq!(result.edits[0].rule, "member_order");
        assert_eq!(
            result.new_source.unwrap(),
            "<?php\nclass A {\n    private static $a = 1;\n    private $b = 2;\n}\n"
        );
    }

    #[test]
    fn test_process_file_already_ordered() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.php");
        fs::write(
            &path,
            "<?php\nclass A {\n    private static $a = 1;\n    private $b = 2;\n}\n",
        )
        .unwrap();

        let result = process_file(&path, &enabled()).unwrap().unwrap();
        assert!(result.edits.is_empty());
        assert!(result.new_source.is_none());
    }

    #[test]
    fn test_process_file_with_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.php");
        fs::write(&path, "<?php class A {").unwrap();

        let result = process_file(&path, &enabled()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_process_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.php");
        assert!(process_file(&path, &enabled()).is_err());
    }
}
