//! Solidity source analyzer.
//!
//! Parses Solidity source with tree-sitter and extracts the members of every
//! contract-like scope (contract, interface, library) as
//! [`Declaration`] records, in source order. Visibility and mutability are
//! carried as the raw parsed tokens; the ordering core validates them.

use std::path::PathBuf;

use tree_sitter::{Node, Parser};

use crate::core::{ContractScope, Declaration, DeclarationKind, ScopeKind, Span};
use crate::errors::SortError;

pub struct SolidityAnalyzer {
    parser: Parser,
}

impl SolidityAnalyzer {
    pub fn new() -> Result<Self, SortError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_solidity::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, content: &str, path: PathBuf) -> Result<SolidityAst, SortError> {
        let tree = self.parser.parse(content, None).ok_or_else(|| SortError::Parse {
            file: path.clone(),
            message: "parser returned no tree".to_string(),
        })?;
        // refuse to reorder source the grammar could not fully recognize
        if tree.root_node().has_error() {
            return Err(SortError::Parse {
                file: path,
                message: "source contains syntax errors".to_string(),
            });
        }
        Ok(SolidityAst {
            tree,
            source: content.to_string(),
            path,
        })
    }
}

pub struct SolidityAst {
    pub tree: tree_sitter::Tree,
    pub source: String,
    pub path: PathBuf,
}

impl SolidityAst {
    /// All contract-like scopes in the file, in source order.
    pub fn contracts(&self) -> Vec<ContractScope> {
        let root = self.tree.root_node();
        let mut scopes = Vec::new();
        let mut cursor = root.walk();

        for child in root.children(&mut cursor) {
            let kind = match child.kind() {
                "contract_declaration" => ScopeKind::Contract,
                "interface_declaration" => ScopeKind::Interface,
                "library_declaration" => ScopeKind::Library,
                _ => continue,
            };
            let name = child
                .child_by_field_name("name")
                .and_then(|n| node_text(n, &self.source))
                .unwrap_or_default()
                .to_string();
            let Some(body) = find_child(child, "contract_body") else {
                continue;
            };
            scopes.push(ContractScope {
                name,
                kind,
                // bytes strictly between the braces
                body_span: Span::new(
                    body.start_byte() + 1,
                    body.end_byte().saturating_sub(1),
                    body.start_position().row + 1,
                ),
                members: extract_members(body, &self.source),
            });
        }

        log::debug!(
            "{}: {} contract-like scope(s)",
            self.path.display(),
            scopes.len()
        );
        scopes
    }
}

fn extract_members(body: Node<'_>, source: &str) -> Vec<Declaration> {
    let mut members = Vec::new();
    let mut cursor = body.walk();

    for child in body.children(&mut cursor) {
        let declaration = match child.kind() {
            "{" | "}" | "comment" => continue,
            "function_definition" => function_declaration(child, source),
            "constructor_definition" => role_declaration(child, source, Role::Constructor),
            "fallback_receive_definition" => {
                // the leading keyword token tells receive and fallback apart
                let role = if find_child(child, "receive").is_some() {
                    Role::Receive
                } else {
                    Role::Fallback
                };
                role_declaration(child, source, role)
            }
            other => Declaration {
                name: child
                    .child_by_field_name("name")
                    .and_then(|n| node_text(n, source))
                    .map(str::to_string),
                kind: non_function_kind(other),
                visibility: None,
                mutability: None,
                is_constructor: false,
                is_receive: false,
                is_fallback: false,
                span: member_span(child, source),
            },
        };
        members.push(declaration);
    }

    members
}

enum Role {
    Constructor,
    Receive,
    Fallback,
}

fn function_declaration(node: Node<'_>, source: &str) -> Declaration {
    Declaration {
        name: node
            .child_by_field_name("name")
            .and_then(|n| node_text(n, source))
            .map(str::to_string),
        kind: DeclarationKind::Function,
        visibility: token_text(node, "visibility", source),
        mutability: token_text(node, "state_mutability", source),
        is_constructor: false,
        is_receive: false,
        is_fallback: false,
        span: member_span(node, source),
    }
}

fn role_declaration(node: Node<'_>, source: &str, role: Role) -> Declaration {
    Declaration {
        name: None,
        kind: DeclarationKind::Function,
        visibility: token_text(node, "visibility", source),
        mutability: token_text(node, "state_mutability", source),
        is_constructor: matches!(role, Role::Constructor),
        is_receive: matches!(role, Role::Receive),
        is_fallback: matches!(role, Role::Fallback),
        span: member_span(node, source),
    }
}

fn non_function_kind(kind: &str) -> DeclarationKind {
    match kind {
        "state_variable_declaration" => DeclarationKind::StateVariable,
        "event_definition" => DeclarationKind::Event,
        "modifier_definition" => DeclarationKind::Modifier,
        "struct_declaration" => DeclarationKind::Struct,
        "enum_declaration" => DeclarationKind::Enum,
        "error_declaration" => DeclarationKind::Error,
        "using_directive" => DeclarationKind::Using,
        _ => DeclarationKind::Other,
    }
}

/// Get the text of a node.
fn node_text<'a>(node: Node<'a>, source: &'a str) -> Option<&'a str> {
    source.get(node.start_byte()..node.end_byte())
}

/// First direct child of the given kind.
fn find_child<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    let result = node.children(&mut cursor).find(|c| c.kind() == kind);
    result
}

/// Text of the first direct child of the given kind, if any.
fn token_text(node: Node<'_>, kind: &str, source: &str) -> Option<String> {
    find_child(node, kind)
        .and_then(|c| node_text(c, source))
        .map(str::to_string)
}

/// Byte span of the member widened to whole lines, so that slicing it keeps
/// indentation and any trailing same-line text.
fn member_span(node: Node<'_>, source: &str) -> Span {
    let start = source[..node.start_byte()]
        .rfind('\n')
        .map_or(0, |offset| offset + 1);
    let end = source[node.end_byte()..]
        .find('\n')
        .map_or(source.len(), |offset| node.end_byte() + offset);
    Span::new(start, end, node.start_position().row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> SolidityAst {
        let mut analyzer = SolidityAnalyzer::new().unwrap();
        analyzer.parse(source, PathBuf::from("test.sol")).unwrap()
    }

    const CONTRACT: &str = r#"
pragma solidity ^0.8.19;

contract Token {
    uint256 public totalSupply;

    event Transfer(address indexed from, address indexed to, uint256 amount);

    modifier onlyOwner() {
        _;
    }

    constructor(uint256 supply) {
        totalSupply = supply;
    }

    receive() external payable {}

    fallback() external {}

    function transfer(address to, uint256 amount) external {
        emit Transfer(msg.sender, to, amount);
    }

    function balanceOf(address account) public view returns (uint256) {
        return uint256(uint160(account));
    }

    function scale(uint256 amount) internal pure returns (uint256) {
        return amount * 2;
    }
}
"#;

    #[test]
    fn extracts_one_scope_with_all_members() {
        let ast = parse(CONTRACT);
        let scopes = ast.contracts();
        assert_eq!(scopes.len(), 1);

        let scope = &scopes[0];
        assert_eq!(scope.name, "Token");
        assert_eq!(scope.kind, ScopeKind::Contract);
        assert_eq!(scope.members.len(), 9);
        assert_eq!(scope.functions().count(), 6);
    }

    #[test]
    fn extracts_visibility_and_mutability_tokens() {
        let ast = parse(CONTRACT);
        let scopes = ast.contracts();
        let members = &scopes[0].members;

        let transfer = members
            .iter()
            .find(|m| m.name.as_deref() == Some("transfer"))
            .unwrap();
        assert_eq!(transfer.visibility.as_deref(), Some("external"));
        assert_eq!(transfer.mutability, None);

        let balance_of = members
            .iter()
            .find(|m| m.name.as_deref() == Some("balanceOf"))
            .unwrap();
        assert_eq!(balance_of.visibility.as_deref(), Some("public"));
        assert_eq!(balance_of.mutability.as_deref(), Some("view"));

        let scale = members
            .iter()
            .find(|m| m.name.as_deref() == Some("scale"))
            .unwrap();
        assert_eq!(scale.visibility.as_deref(), Some("internal"));
        assert_eq!(scale.mutability.as_deref(), Some("pure"));
    }

    #[test]
    fn extracts_role_flags_from_node_kinds() {
        let ast = parse(CONTRACT);
        let scopes = ast.contracts();
        let members = &scopes[0].members;

        let constructors: Vec<_> = members.iter().filter(|m| m.is_constructor).collect();
        assert_eq!(constructors.len(), 1);
        assert!(constructors[0].name.is_none());

        assert_eq!(members.iter().filter(|m| m.is_receive).count(), 1);
        assert_eq!(members.iter().filter(|m| m.is_fallback).count(), 1);

        let receive = members.iter().find(|m| m.is_receive).unwrap();
        assert_eq!(receive.visibility.as_deref(), Some("external"));
        assert_eq!(receive.mutability.as_deref(), Some("payable"));
        assert!(!receive.is_fallback);
    }

    #[test]
    fn classifies_non_function_members() {
        let ast = parse(CONTRACT);
        let scopes = ast.contracts();
        let members = &scopes[0].members;

        assert_eq!(members[0].kind, DeclarationKind::StateVariable);
        assert_eq!(members[1].kind, DeclarationKind::Event);
        assert_eq!(members[1].name.as_deref(), Some("Transfer"));
        assert_eq!(members[2].kind, DeclarationKind::Modifier);
    }

    #[test]
    fn member_spans_cover_whole_lines() {
        let ast = parse(CONTRACT);
        let scopes = ast.contracts();
        let first = &scopes[0].members[0];

        let text = &ast.source[first.span.start..first.span.end];
        assert_eq!(text, "    uint256 public totalSupply;");
    }

    #[test]
    fn extracts_interfaces_and_libraries() {
        let source = r#"
interface IThing {
    function poke() external;
}

library Math {
    function add(uint256 a, uint256 b) internal pure returns (uint256) {
        return a + b;
    }
}
"#;
        let ast = parse(source);
        let scopes = ast.contracts();
        assert_eq!(scopes.len(), 2);
        assert_eq!(scopes[0].kind, ScopeKind::Interface);
        assert_eq!(scopes[0].name, "IThing");
        assert_eq!(scopes[1].kind, ScopeKind::Library);
        assert_eq!(scopes[1].name, "Math");
    }

    #[test]
    fn empty_source_has_no_scopes() {
        let ast = parse("");
        assert!(ast.contracts().is_empty());
    }

    #[test]
    fn syntax_errors_are_rejected() {
        let mut analyzer = SolidityAnalyzer::new().unwrap();
        let result = analyzer.parse("contract {{{", PathBuf::from("broken.sol"));
        assert!(matches!(result, Err(SortError::Parse { .. })));
    }
}
