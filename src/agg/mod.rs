// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! MongoDB aggregation pipeline builders.
//!
//! Each builder returns a document with exactly one top-level key, the stage
//! or operator name. Nothing is validated: a wrong-shaped argument produces a
//! well-formed document that the server rejects later.
//!
//! ```text
//! stage::*     $addFields $count $group $match $project $sort $unset $unwind
//! operator::*  $abs $bottom(N) $cond $divide $eq $ne $filter $in $map
//!              $max $min $mergeObjects $or $reduce $sum $top(N)
//! helpers      field()  sort_ascending()  sort_descending()  sort_expr()
//! ```
//!
//! # Example
//!
//! ```
//! use evergreen_test::agg::{field, operator, sort_descending, stage, Stage};
//!
//! let pipeline: Vec<Stage> = vec![
//!     stage::match_(evergreen_test::doc! { "status" => "failed" }),
//!     stage::group("$test", [field("failures", operator::sum(1))]),
//!     stage::sort([sort_descending("failures")]),
//! ];
//! assert_eq!(pipeline.len(), 3);
//! ```

pub mod document;
pub mod operator;
pub mod stage;

#[cfg(test)]
mod tests;

pub use document::{Document, Expr};
pub use operator::Operator;
pub use stage::Stage;

/// Build a [`Document`] literal, keeping key order.
///
/// ```
/// use evergreen_test::doc;
///
/// let d = doc! { "a" => 1, "b" => "$b" };
/// assert_eq!(d.keys().collect::<Vec<_>>(), ["a", "b"]);
/// ```
#[macro_export]
macro_rules! doc {
    () => {
        $crate::agg::Document::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut doc = $crate::agg::Document::new();
        $( doc.insert($key, $value); )+
        doc
    }};
}

/// A single `name: expression` entry, used by `$addFields`, `$group` and
/// `$project`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldExpr {
    pub name: String,
    pub expr: Expr,
}

pub fn field(name: impl Into<String>, expr: impl Into<Expr>) -> FieldExpr {
    FieldExpr {
        name: name.into(),
        expr: expr.into(),
    }
}

/// A single sort key, used by `$sort`, `$top` and `$bottom`.
#[derive(Debug, Clone, PartialEq)]
pub struct SortBy {
    pub field: String,
    pub order: Expr,
}

pub fn sort_ascending(field_name: impl Into<String>) -> SortBy {
    sort_expr(field_name, 1)
}

pub fn sort_descending(field_name: impl Into<String>) -> SortBy {
    sort_expr(field_name, -1)
}

/// Sort by an arbitrary expression, e.g. `{ $meta: "textScore" }`.
pub fn sort_expr(field_name: impl Into<String>, expr: impl Into<Expr>) -> SortBy {
    SortBy {
        field: field_name.into(),
        order: expr.into(),
    }
}

fn fields_to_doc(fields: impl IntoIterator<Item = FieldExpr>) -> Document {
    fields.into_iter().map(|f| (f.name, f.expr)).collect()
}

fn sort_bys_to_doc(sort_bys: impl IntoIterator<Item = SortBy>) -> Document {
    sort_bys.into_iter().map(|s| (s.field, s.order)).collect()
}
