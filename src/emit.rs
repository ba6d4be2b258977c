//! Reassembly of reordered source text.
//!
//! Works by splicing: each member's text is sliced out of the original file
//! by byte span and the slices are written back in the new order. The text is
//! never regenerated from the syntax tree, so bodies, comments, and
//! formatting inside a declaration survive untouched.
//!
//! A member's slice starts where the previous member's ended, so comments and
//! blank lines between declarations travel with the declaration that follows
//! them and nothing in the body can be dropped. Scopes whose functions are
//! already in canonical order are left byte-identical.

use crate::core::ordering::{is_canonically_ordered, order_indices};
use crate::core::ContractScope;
use crate::errors::SortError;

/// Rewrite `source` with every scope's functions in canonical order.
///
/// Non-function members keep their original relative order ahead of the
/// functions. Returns the input verbatim when nothing needs to move.
pub fn reorder_source(source: &str, scopes: &[ContractScope]) -> Result<String, SortError> {
    let mut output = source.to_string();

    // back to front, so earlier byte offsets stay valid after each splice
    for scope in scopes.iter().rev() {
        if scope.members.is_empty() || is_canonically_ordered(&scope.members)? {
            continue;
        }
        log::debug!("reordering functions of '{}'", scope.name);
        let body = render_body(source, scope)?;
        output.replace_range(scope.body_span.start..scope.body_span.end, &body);
    }

    Ok(output)
}

fn render_body(source: &str, scope: &ContractScope) -> Result<String, SortError> {
    let (slices, last_end) = member_slices(source, scope);

    let mut pieces: Vec<&str> = Vec::with_capacity(scope.members.len() + 1);
    for (index, member) in scope.members.iter().enumerate() {
        if !member.is_function() {
            pieces.push(clean(slices[index]));
        }
    }
    for index in order_indices(&scope.members)? {
        pieces.push(clean(slices[index]));
    }

    // comments after the last member stay at the end of the body
    pieces.push(clean(&source[last_end..scope.body_span.end]));
    pieces.retain(|piece| !piece.is_empty());

    let mut body = String::from("\n");
    body.push_str(&pieces.join("\n\n"));
    body.push('\n');
    Ok(body)
}

/// One slice per member, covering the body text from the end of the previous
/// member (or the opening brace) through the end of this member's last line.
/// Also returns where the last slice ended.
fn member_slices<'a>(source: &'a str, scope: &ContractScope) -> (Vec<&'a str>, usize) {
    let mut slices = Vec::with_capacity(scope.members.len());
    let mut previous_end = scope.body_span.start;

    for member in &scope.members {
        let end = member.span.end.clamp(previous_end, scope.body_span.end);
        slices.push(&source[previous_end..end]);
        previous_end = end;
    }

    (slices, previous_end)
}

/// Strip the blank lines around a slice, keeping the indentation of the first
/// content line and any comment lines attached above the declaration.
fn clean(piece: &str) -> &str {
    let piece = piece.trim_end();
    let mut start = 0;
    for line in piece.split_inclusive('\n') {
        if line.trim().is_empty() {
            start += line.len();
        } else {
            break;
        }
    }
    &piece[start..]
}
