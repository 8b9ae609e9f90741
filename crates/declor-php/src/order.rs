//! Rule: reorder class-like members into the canonical order
//!
//! Members should appear as: static properties, instance properties, the
//! constructor, then other methods. A member moves together with the
//! comments and docblocks physically preceding it. Constants, trait `use`
//! statements and enum cases never move, and members (or whole containers)
//! carrying a `declor-ignore` pragma are left alone. Containers whose
//! positions cannot be determined are skipped entirely; no partial
//! reordering is ever suggested.

use declor_core::Edit;
use declor_engine::{
    analyze, Container, ContainerKind, EngineError, Member, MemberKind, OrderPolicy, Outcome,
};
use mago_span::HasSpan;
use mago_syntax::ast::*;

use crate::scanner::PhpTokenSource;
use crate::suppress::{line_of, IgnoreDirectives};

/// Check a parsed PHP program for class-like containers whose members
/// deviate from the canonical order.
pub fn check_member_order<'a>(
    program: &Program<'a>,
    source: &str,
) -> Result<Vec<Edit>, EngineError> {
    let ignores = IgnoreDirectives::parse(source);
    let mut edits = Vec::new();

    for stmt in program.statements.iter() {
        check_statement(stmt, source, &ignores, &mut edits)?;
    }

    Ok(edits)
}

fn check_statement<'a>(
    stmt: &Statement<'a>,
    source: &str,
    ignores: &IgnoreDirectives,
    edits: &mut Vec<Edit>,
) -> Result<(), EngineError> {
    match stmt {
        Statement::Class(class) => {
            let members: Vec<_> = class.members.iter().collect();
            check_container(class.span(), &members, false, source, ignores, edits)?;
        }
        Statement::Interface(iface) => {
            let members: Vec<_> = iface.members.iter().collect();
            check_container(iface.span(), &members, false, source, ignores, edits)?;
        }
        Statement::Trait(trait_def) => {
            let members: Vec<_> = trait_def.members.iter().collect();
            check_container(trait_def.span(), &members, false, source, ignores, edits)?;
        }
        Statement::Enum(enum_def) => {
            let members: Vec<_> = enum_def.members.iter().collect();
            check_container(enum_def.span(), &members, true, source, ignores, edits)?;
        }
        Statement::Namespace(ns) => {
            let statements = match &ns.body {
                NamespaceBody::Implicit(body) => &body.statements,
                NamespaceBody::BraceDelimited(body) => &body.statements,
            };
            for inner in statements.iter() {
                check_statement(inner, source, ignores, edits)?;
            }
        }
        Statement::Block(block) => {
            for inner in block.statements.iter() {
                check_statement(inner, source, ignores, edits)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn check_container<'a>(
    container_span: mago_span::Span,
    members: &[&ClassLikeMember<'a>],
    is_enum: bool,
    source: &str,
    ignores: &IgnoreDirectives,
    edits: &mut Vec<Edit>,
) -> Result<(), EngineError> {
    let container_start = container_span.start.offset as usize;
    if ignores.is_ignored_at(line_of(source, container_start)) {
        return Ok(());
    }

    // A PHP enum opens with an enumerator list only when its cases actually
    // lead the body; interleaved cases are handled by span ownership alone.
    let kind = if is_enum && matches!(members.first(), Some(ClassLikeMember::EnumCase(_))) {
        ContainerKind::EnumLike
    } else {
        ContainerKind::ClassLike
    };

    let container = Container {
        kind,
        start: Some(container_start),
        end: Some(container_span.end.offset as usize),
        members: members
            .iter()
            .map(|member| member_record(member, source, ignores))
            .collect(),
    };

    let tokens = PhpTokenSource::new(source);
    match analyze(&container, source, &tokens, &OrderPolicy::canonical())? {
        Outcome::Finding(container_edits) => edits.extend(container_edits),
        Outcome::AlreadyOrdered | Outcome::Unresolvable | Outcome::NoEdits => {}
    }
    Ok(())
}

fn member_record(
    member: &ClassLikeMember<'_>,
    source: &str,
    ignores: &IgnoreDirectives,
) -> Member {
    let span = member.span();
    let start = span.start.offset as usize;

    let (kind, is_static) = match member {
        ClassLikeMember::Property(property) => (MemberKind::Field, property_is_static(property)),
        ClassLikeMember::Method(method) => {
            if method.name.value.eq_ignore_ascii_case("__construct") {
                (MemberKind::Constructor, false)
            } else {
                (MemberKind::Method, false)
            }
        }
        ClassLikeMember::EnumCase(_) => (MemberKind::Enumerator, false),
        // Constants and trait `use` statements keep their position.
        _ => (MemberKind::Other, false),
    };

    Member {
        kind,
        is_static,
        has_source: true,
        suppressed: ignores.is_ignored_at(line_of(source, start)),
        end: Some(span.end.offset as usize),
    }
}

fn property_is_static(property: &Property<'_>) -> bool {
    match property {
        Property::Plain(prop) => prop
            .modifiers
            .iter()
            .any(|modifier| matches!(modifier, Modifier::Static(_))),
        _ => false,
    }
}

/// Reorders class-like members into the canonical order.
pub struct MemberOrderRule;

impl crate::registry::Rule for MemberOrderRule {
    fn name(&self) -> &'static str {
        "member_order"
    }

    fn description(&self) -> &'static str {
        "Reorder class members (static properties, properties, constructor, methods)"
    }

    fn check<'a>(&self, program: &Program<'a>, source: &str) -> Result<Vec<Edit>, EngineError> {
        check_member_order(program, source)
    }
}
