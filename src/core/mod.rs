pub mod ordering;

use serde::{Deserialize, Serialize};

/// Location of a declaration in its source file.
///
/// `start` and `end` are byte offsets widened to whole lines: `start` points
/// at the first byte of the line the declaration begins on, `end` just past
/// the last byte of the line it ends on (excluding the newline). `line` is
/// the 1-based line of the declaration itself, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize) -> Self {
        Self { start, end, line }
    }
}

/// Discriminates the members of a contract-like scope. Only `Function`
/// participates in ordering; everything else is carried through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclarationKind {
    Function,
    StateVariable,
    Event,
    Modifier,
    Struct,
    Enum,
    Error,
    Using,
    Other,
}

/// One top-level item of a contract-like scope.
///
/// `visibility` and `mutability` hold the raw parsed tokens; validating them
/// against the recognized sets is the classifier's job, so that an
/// unrecognized value surfaces as a typed error instead of disappearing at
/// extraction time. At most one role flag is set for nodes built from parsed
/// source; if several are set the classifier resolves constructor first,
/// then receive, then fallback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: Option<String>,
    pub kind: DeclarationKind,
    pub visibility: Option<String>,
    pub mutability: Option<String>,
    pub is_constructor: bool,
    pub is_receive: bool,
    pub is_fallback: bool,
    pub span: Span,
}

impl Declaration {
    pub fn is_function(&self) -> bool {
        self.kind == DeclarationKind::Function
    }

    /// Name for diagnostics; role declarations have no identifier of their own.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) => name,
            None if self.is_constructor => "constructor",
            None if self.is_receive => "receive",
            None if self.is_fallback => "fallback",
            None => "<anonymous>",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeKind {
    Contract,
    Interface,
    Library,
}

/// A contract-like scope and its members, in source order.
///
/// `body_span` covers the bytes strictly between the scope's braces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractScope {
    pub name: String,
    pub kind: ScopeKind,
    pub body_span: Span,
    pub members: Vec<Declaration>,
}

impl ContractScope {
    pub fn functions(&self) -> impl Iterator<Item = &Declaration> {
        self.members.iter().filter(|m| m.is_function())
    }
}
