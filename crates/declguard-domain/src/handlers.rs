//! Per-node-kind entry points for a host traversal.
//!
//! The host owns the syntax tree. For every interface or type-alias node it finds, it looks up
//! the handler registered for that node kind and calls it with the identifier name and whether
//! the node sits directly under an export.

use crate::engine::FileScope;
use crate::error::DeclarationError;
use crate::model::{DeclarationKind, DeclarationRecord};
use crate::verdict::Verdict;

pub type NodeHandler = fn(&FileScope<'_>, &str, bool) -> Result<Verdict, DeclarationError>;

static HANDLERS: &[(DeclarationKind, NodeHandler)] = &[
    (
        DeclarationKind::Interface,
        on_interface_declaration as NodeHandler,
    ),
    (
        DeclarationKind::TypeAlias,
        on_type_alias_declaration as NodeHandler,
    ),
];

/// Every registered `(node kind, handler)` pair.
pub fn handlers() -> &'static [(DeclarationKind, NodeHandler)] {
    HANDLERS
}

pub fn handler_for(kind: DeclarationKind) -> NodeHandler {
    match kind {
        DeclarationKind::Interface => on_interface_declaration,
        DeclarationKind::TypeAlias => on_type_alias_declaration,
    }
}

pub fn on_interface_declaration(
    scope: &FileScope<'_>,
    name: &str,
    exported: bool,
) -> Result<Verdict, DeclarationError> {
    let record = DeclarationRecord::new(DeclarationKind::Interface, name, exported)?;
    Ok(scope.evaluate(&record))
}

pub fn on_type_alias_declaration(
    scope: &FileScope<'_>,
    name: &str,
    exported: bool,
) -> Result<Verdict, DeclarationError> {
    let record = DeclarationRecord::new(DeclarationKind::TypeAlias, name, exported)?;
    Ok(scope.evaluate(&record))
}
