// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Expression operators.
//!
//! `max`, `min` and `merge_objects` emit the bare value when given exactly one
//! argument and an array otherwise, matching the two operand forms the
//! server accepts (`{ $max: "$a" }` vs `{ $max: ["$a", "$b"] }`).

use serde::{Deserialize, Serialize};

use super::{Document, Expr, SortBy, sort_bys_to_doc};

/// An expression operator: a document with a single `$name` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operator(Document);

impl Operator {
    pub(crate) fn new(name: &str, body: impl Into<Expr>) -> Self {
        let mut doc = Document::with_capacity(1);
        doc.insert(name, body);
        Self(doc)
    }
}

impl From<Operator> for Expr {
    fn from(op: Operator) -> Self {
        Self::Document(op.0)
    }
}

impl From<Operator> for Document {
    fn from(op: Operator) -> Self {
        op.0
    }
}

fn pair(a: impl Into<Expr>, b: impl Into<Expr>) -> Expr {
    Expr::Array(vec![a.into(), b.into()])
}

fn array<E: Into<Expr>>(exprs: impl IntoIterator<Item = E>) -> Expr {
    Expr::Array(exprs.into_iter().map(Into::into).collect())
}

/// One argument stays bare, anything else becomes an array.
fn single_or_array<E: Into<Expr>>(exprs: impl IntoIterator<Item = E>) -> Expr {
    let mut items: Vec<Expr> = exprs.into_iter().map(Into::into).collect();
    if items.len() == 1 {
        items.remove(0)
    } else {
        Expr::Array(items)
    }
}

/// `{ n, sortBy, output }`, shared by the `N` variants of `$top`/`$bottom`.
fn ranked_n_body(
    output_expr: impl Into<Expr>,
    n_expr: impl Into<Expr>,
    sort_bys: impl IntoIterator<Item = SortBy>,
) -> Document {
    let mut body = Document::with_capacity(3);
    body.insert("n", n_expr);
    body.insert("sortBy", sort_bys_to_doc(sort_bys));
    body.insert("output", output_expr);
    body
}

fn ranked_body(
    output_expr: impl Into<Expr>,
    sort_bys: impl IntoIterator<Item = SortBy>,
) -> Document {
    let mut body = Document::with_capacity(2);
    body.insert("sortBy", sort_bys_to_doc(sort_bys));
    body.insert("output", output_expr);
    body
}

pub fn abs(num_expr: impl Into<Expr>) -> Operator {
    Operator::new("$abs", num_expr)
}

pub fn bottom(
    output_expr: impl Into<Expr>,
    sort_bys: impl IntoIterator<Item = SortBy>,
) -> Operator {
    Operator::new("$bottom", ranked_body(output_expr, sort_bys))
}

pub fn bottom_n(
    output_expr: impl Into<Expr>,
    n: i64,
    sort_bys: impl IntoIterator<Item = SortBy>,
) -> Operator {
    bottom_n_expr(output_expr, n, sort_bys)
}

/// Like [`bottom_n`] with `n` given as an expression.
pub fn bottom_n_expr(
    output_expr: impl Into<Expr>,
    n_expr: impl Into<Expr>,
    sort_bys: impl IntoIterator<Item = SortBy>,
) -> Operator {
    Operator::new("$bottomN", ranked_n_body(output_expr, n_expr, sort_bys))
}

/// `{ $cond: { if, then, else } }`
pub fn cond(
    if_expr: impl Into<Expr>,
    then_expr: impl Into<Expr>,
    else_expr: impl Into<Expr>,
) -> Operator {
    let mut body = Document::with_capacity(3);
    body.insert("if", if_expr);
    body.insert("then", then_expr);
    body.insert("else", else_expr);
    Operator::new("$cond", body)
}

pub fn divide(numerator_expr: impl Into<Expr>, denom_expr: impl Into<Expr>) -> Operator {
    Operator::new("$divide", pair(numerator_expr, denom_expr))
}

pub fn eq(expr1: impl Into<Expr>, expr2: impl Into<Expr>) -> Operator {
    Operator::new("$eq", pair(expr1, expr2))
}

pub fn ne(expr1: impl Into<Expr>, expr2: impl Into<Expr>) -> Operator {
    Operator::new("$ne", pair(expr1, expr2))
}

/// `{ $filter: { input, cond, as?, limit? } }`
///
/// `as_name` is omitted when `None` or empty, `limit_expr` when `None`.
pub fn filter(
    input_expr: impl Into<Expr>,
    as_name: Option<&str>,
    cond_expr: impl Into<Expr>,
    limit_expr: Option<Expr>,
) -> Operator {
    let mut body = Document::with_capacity(4);
    body.insert("input", input_expr);
    body.insert("cond", cond_expr);
    if let Some(name) = as_name.filter(|n| !n.is_empty()) {
        body.insert("as", name);
    }
    if let Some(limit) = limit_expr {
        body.insert("limit", limit);
    }
    Operator::new("$filter", body)
}

/// `{ $in: [<target>, <array>] }`
pub fn in_(target_expr: impl Into<Expr>, arr_expr: impl Into<Expr>) -> Operator {
    Operator::new("$in", pair(target_expr, arr_expr))
}

/// `{ $map: { input, as?, in } }`
pub fn map(
    input_expr: impl Into<Expr>,
    as_name: Option<&str>,
    in_expr: impl Into<Expr>,
) -> Operator {
    let mut body = Document::with_capacity(3);
    body.insert("input", input_expr);
    if let Some(name) = as_name.filter(|n| !n.is_empty()) {
        body.insert("as", name);
    }
    body.insert("in", in_expr);
    Operator::new("$map", body)
}

pub fn max<E: Into<Expr>>(exprs: impl IntoIterator<Item = E>) -> Operator {
    Operator::new("$max", single_or_array(exprs))
}

pub fn min<E: Into<Expr>>(exprs: impl IntoIterator<Item = E>) -> Operator {
    Operator::new("$min", single_or_array(exprs))
}

pub fn merge_objects<E: Into<Expr>>(document_exprs: impl IntoIterator<Item = E>) -> Operator {
    Operator::new("$mergeObjects", single_or_array(document_exprs))
}

/// `{ $or: [...] }`, always an array.
pub fn or<E: Into<Expr>>(exprs: impl IntoIterator<Item = E>) -> Operator {
    Operator::new("$or", array(exprs))
}

/// `{ $reduce: { input, initialValue, in } }`
pub fn reduce(
    input_expr: impl Into<Expr>,
    initial_value_expr: impl Into<Expr>,
    in_expr: impl Into<Expr>,
) -> Operator {
    let mut body = Document::with_capacity(3);
    body.insert("input", input_expr);
    body.insert("initialValue", initial_value_expr);
    body.insert("in", in_expr);
    Operator::new("$reduce", body)
}

pub fn sum(num_expr: impl Into<Expr>) -> Operator {
    Operator::new("$sum", num_expr)
}

pub fn top(output_expr: impl Into<Expr>, sort_bys: impl IntoIterator<Item = SortBy>) -> Operator {
    Operator::new("$top", ranked_body(output_expr, sort_bys))
}

pub fn top_n(
    output_expr: impl Into<Expr>,
    n: i64,
    sort_bys: impl IntoIterator<Item = SortBy>,
) -> Operator {
    top_n_expr(output_expr, n, sort_bys)
}

/// Like [`top_n`] with `n` given as an expression.
pub fn top_n_expr(
    output_expr: impl Into<Expr>,
    n_expr: impl Into<Expr>,
    sort_bys: impl IntoIterator<Item = SortBy>,
) -> Operator {
    Operator::new("$topN", ranked_n_body(output_expr, n_expr, sort_bys))
}
