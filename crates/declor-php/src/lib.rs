//! declor-php: PHP frontend for the member reordering engine
//!
//! Maps mago's PHP AST onto the engine's container model and turns findings
//! into span-based edits:
//! - classes, interfaces, traits and enums become containers
//! - properties, methods, `__construct`, enum cases map to member kinds
//! - `declor-ignore` comment pragmas suppress individual members or whole
//!   containers

pub mod order;
pub mod registry;
pub mod scanner;
pub mod suppress;

pub use order::{check_member_order, MemberOrderRule};
pub use registry::{Rule, RuleRegistry};
pub use scanner::PhpTokenSource;
pub use suppress::IgnoreDirectives;
