// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pipeline stages.

use super::{Document, Expr, FieldExpr, Operator, SortBy, fields_to_doc, sort_bys_to_doc};

/// One pipeline stage. A pipeline is a `Vec<Stage>`.
pub type Stage = Document;

fn stage(name: &str, body: impl Into<Expr>) -> Stage {
    let mut doc = Document::with_capacity(1);
    doc.insert(name, body);
    doc
}

pub fn add_fields(fields: impl IntoIterator<Item = FieldExpr>) -> Stage {
    stage("$addFields", fields_to_doc(fields))
}

/// `{ $count: <field_name> }`
pub fn count(field_name: impl Into<String>) -> Stage {
    stage("$count", field_name.into())
}

/// The `$count` accumulator, `{ $count: {} }`, for use inside `$group`.
pub fn count_accumulator() -> Operator {
    Operator::new("$count", Document::new())
}

/// `{ $group: { _id: <key>, <accumulators>... } }`
pub fn group(key: impl Into<Expr>, accumulators: impl IntoIterator<Item = FieldExpr>) -> Stage {
    let mut body = Document::new();
    body.insert("_id", key);
    for acc in accumulators {
        body.insert(acc.name, acc.expr);
    }
    stage("$group", body)
}

/// `{ $match: <query> }`
pub fn match_(query: impl Into<Expr>) -> Stage {
    stage("$match", query)
}

pub fn project(specifications: impl IntoIterator<Item = FieldExpr>) -> Stage {
    stage("$project", fields_to_doc(specifications))
}

pub fn sort(sort_bys: impl IntoIterator<Item = SortBy>) -> Stage {
    stage("$sort", sort_bys_to_doc(sort_bys))
}

/// `{ $unset: [<field>...] }`
pub fn unset<S: Into<String>>(fields: impl IntoIterator<Item = S>) -> Stage {
    let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
    stage("$unset", fields)
}

/// `{ $unwind: { path: <field_path> } }`
pub fn unwind(field_path: impl Into<String>) -> Stage {
    let mut body = Document::with_capacity(1);
    body.insert("path", field_path.into());
    stage("$unwind", body)
}
