//! Rule trait and registry

use declor_core::Edit;
use declor_engine::EngineError;
use mago_syntax::ast::Program;
use std::collections::HashSet;

/// A lint rule that can detect and suggest code transformations.
///
/// Checks return a `Result` so that internal invariant violations surface to
/// the caller instead of being dropped; recoverable conditions simply yield
/// no edits.
pub trait Rule: Send + Sync {
    /// The unique identifier for this rule (e.g. "member_order")
    fn name(&self) -> &'static str;

    /// A short description of what this rule does
    fn description(&self) -> &'static str;

    /// Check a PHP program and return suggested edits
    fn check<'a>(&self, program: &Program<'a>, source: &str) -> Result<Vec<Edit>, EngineError>;
}

/// Registry of all available rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        let mut registry = Self { rules: Vec::new() };

        registry.register(Box::new(super::order::MemberOrderRule));

        registry
    }

    /// Register a new rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get all rule names
    pub fn all_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Get rules filtered by enabled names
    pub fn get_enabled(&self, enabled: &HashSet<String>) -> Vec<&dyn Rule> {
        self.rules
            .iter()
            .filter(|r| enabled.contains(r.name()))
            .map(|r| r.as_ref())
            .collect()
    }

    /// Get all rules with their descriptions (for --list-rules)
    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules
            .iter()
            .map(|r| (r.name(), r.description()))
            .collect()
    }

    /// Run all enabled rules on a program
    pub fn check_all<'a>(
        &self,
        program: &Program<'a>,
        source: &str,
        enabled: &HashSet<String>,
    ) -> Result<Vec<Edit>, EngineError> {
        let mut edits = Vec::new();
        for rule in self.get_enabled(enabled) {
            edits.extend(rule.check(program, source)?);
        }
        Ok(edits)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
