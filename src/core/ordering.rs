//! Canonical ordering of contract functions.
//!
//! Functions are grouped by role, visibility, and mutability, then emitted in
//! a fixed priority order:
//! 1. constructor
//! 2. receive
//! 3. fallback
//! 4. external, external view, external pure
//! 5. public, public view, public pure
//! 6. internal, internal view, internal pure
//! 7. private, private view, private pure
//!
//! Ordering is stable: functions that land in the same category keep their
//! relative source order. The routine is pure: it never mutates the input
//! declarations and performs no I/O.

use std::collections::BTreeMap;

use crate::core::Declaration;
use crate::errors::SortError;

/// Classification of a function for ordering.
/// The order of variants determines sort priority (lower = earlier in file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Constructor,
    Receive,
    Fallback,
    External,
    ExternalView,
    ExternalPure,
    Public,
    PublicView,
    PublicPure,
    Internal,
    InternalView,
    InternalPure,
    Private,
    PrivateView,
    PrivatePure,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Constructor => "constructor",
            Category::Receive => "receive",
            Category::Fallback => "fallback",
            Category::External => "external",
            Category::ExternalView => "external view",
            Category::ExternalPure => "external pure",
            Category::Public => "public",
            Category::PublicView => "public view",
            Category::PublicPure => "public pure",
            Category::Internal => "internal",
            Category::InternalView => "internal view",
            Category::InternalPure => "internal pure",
            Category::Private => "private",
            Category::PrivateView => "private view",
            Category::PrivatePure => "private pure",
        }
    }
}

/// Assign a function-like declaration to exactly one category.
///
/// Role flags win over visibility, in fixed priority: constructor, then
/// receive, then fallback. Otherwise the category derives from the
/// visibility token, refined by `view`/`pure` mutability (`payable` and
/// absent mutability collapse into the plain bucket). A visibility outside
/// the recognized set fails with [`SortError::UnrecognizedVisibility`]
/// naming the declaration, never a silent drop or misfile.
pub fn classify(decl: &Declaration) -> Result<Category, SortError> {
    if !decl.is_function() {
        return Err(SortError::MalformedDeclaration {
            line: decl.span.line,
            message: format!("'{}' is not a function-like declaration", decl.display_name()),
        });
    }

    if decl.is_constructor {
        return Ok(Category::Constructor);
    }
    if decl.is_receive {
        return Ok(Category::Receive);
    }
    if decl.is_fallback {
        return Ok(Category::Fallback);
    }

    if decl.name.is_none() {
        return Err(SortError::MalformedDeclaration {
            line: decl.span.line,
            message: "function-like declaration has neither a name nor a \
                      constructor/receive/fallback role"
                .to_string(),
        });
    }

    let refined = |plain, view, pure| match decl.mutability.as_deref() {
        Some("view") => view,
        Some("pure") => pure,
        _ => plain,
    };

    match decl.visibility.as_deref() {
        Some("external") => Ok(refined(
            Category::External,
            Category::ExternalView,
            Category::ExternalPure,
        )),
        Some("public") => Ok(refined(
            Category::Public,
            Category::PublicView,
            Category::PublicPure,
        )),
        Some("internal") => Ok(refined(
            Category::Internal,
            Category::InternalView,
            Category::InternalPure,
        )),
        Some("private") => Ok(refined(
            Category::Private,
            Category::PrivateView,
            Category::PrivatePure,
        )),
        other => Err(SortError::UnrecognizedVisibility {
            name: decl.display_name().to_string(),
            value: other.map(str::to_string),
            line: decl.span.line,
        }),
    }
}

/// Indices of the function-like declarations in `decls`, reordered into
/// canonical category order. Within a category the original order is kept.
///
/// The category assignment lives in a side table built fresh per call; the
/// declarations themselves are only read.
pub fn order_indices(decls: &[Declaration]) -> Result<Vec<usize>, SortError> {
    let mut buckets: BTreeMap<Category, Vec<usize>> = BTreeMap::new();
    for (index, decl) in decls.iter().enumerate() {
        if !decl.is_function() {
            continue;
        }
        buckets.entry(classify(decl)?).or_default().push(index);
    }
    Ok(buckets.into_values().flatten().collect())
}

/// Reorder the function-like subset of `decls` into canonical order.
///
/// The result borrows from the input: a permutation of the function-like
/// declarations, with non-function members excluded. Nothing is duplicated,
/// dropped, or mutated.
pub fn classify_and_order(decls: &[Declaration]) -> Result<Vec<&Declaration>, SortError> {
    Ok(order_indices(decls)?
        .into_iter()
        .map(|index| &decls[index])
        .collect())
}

/// Whether the function-like declarations already appear in canonical order.
pub fn is_canonically_ordered(decls: &[Declaration]) -> Result<bool, SortError> {
    Ok(order_indices(decls)?.windows(2).all(|pair| pair[0] < pair[1]))
}
