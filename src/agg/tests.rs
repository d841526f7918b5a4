// evergreen-test: Evergreen CI test-failure reports
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::operator::{self, Operator};
use super::stage::{self, Stage};
use super::{Document, Expr, field, sort_ascending, sort_descending, sort_expr};
use crate::doc;

fn json(value: &impl serde::Serialize) -> String {
    serde_json::to_string(value).expect("document serializes")
}

fn top_level_keys(doc: &Document) -> Vec<&str> {
    doc.keys().collect()
}

// =============================================================================
// Document model
// =============================================================================

#[test]
fn test_doc_macro_keeps_order() {
    let d = doc! { "z" => 1, "a" => "two", "m" => true };
    assert_eq!(top_level_keys(&d), ["z", "a", "m"]);
    insta::assert_snapshot!(json(&d), @r#"{"z":1,"a":"two","m":true}"#);
}

#[test]
fn test_insert_replaces_in_place() {
    let mut d = doc! { "a" => 1, "b" => 2 };
    d.insert("a", 3);
    assert_eq!(top_level_keys(&d), ["a", "b"]);
    assert_eq!(d.get("a"), Some(&Expr::Int(3)));
    assert_eq!(d.len(), 2);
}

#[test]
fn test_expr_conversions() {
    assert_eq!(Expr::from(None::<i32>), Expr::Null);
    assert_eq!(Expr::from(Some("x")), Expr::String("x".to_string()));
    assert_eq!(
        Expr::from(vec![1, 2]),
        Expr::Array(vec![Expr::Int(1), Expr::Int(2)])
    );
    assert_eq!(Expr::from(2.5), Expr::Double(2.5));
}

#[test]
fn test_document_json_round_trip_preserves_order() {
    let original = doc! {
        "b" => doc! { "y" => 1, "x" => vec![Expr::Null, Expr::from(1.5)] },
        "a" => "$field",
    };
    let text = json(&original);
    let parsed: Document = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, original);
    assert_eq!(top_level_keys(&parsed), ["b", "a"]);
}

#[test]
fn test_document_rejects_non_object_json() {
    assert!(serde_json::from_str::<Document>("[1, 2]").is_err());
}

// =============================================================================
// Single-argument collapsing
// =============================================================================

#[test]
fn test_max_single_argument_is_bare() {
    assert_eq!(Document::from(operator::max(["$a"])), doc! { "$max" => "$a" });
    assert_eq!(
        Document::from(operator::max(["$a", "$b"])),
        doc! { "$max" => vec!["$a", "$b"] }
    );
}

#[test]
fn test_min_single_argument_is_bare() {
    assert_eq!(Document::from(operator::min([7])), doc! { "$min" => 7 });
    assert_eq!(Document::from(operator::min([7, 8])), doc! { "$min" => vec![7, 8] });
}

#[test]
fn test_merge_objects_single_argument_is_bare() {
    let single = operator::merge_objects(["$$ROOT"]);
    let many = operator::merge_objects([Expr::from("$$ROOT"), Expr::from(doc! { "x" => 1 })]);
    insta::assert_snapshot!(json(&single), @r#"{"$mergeObjects":"$$ROOT"}"#);
    insta::assert_snapshot!(json(&many), @r#"{"$mergeObjects":["$$ROOT",{"x":1}]}"#);
}

#[test]
fn test_or_is_always_an_array() {
    let single = operator::or([operator::eq("$a", 1)]);
    insta::assert_snapshot!(json(&single), @r#"{"$or":[{"$eq":["$a",1]}]}"#);
}

// =============================================================================
// Stages
// =============================================================================

#[test]
fn test_group_puts_id_first() {
    let s = stage::group(
        doc! { "test" => "$test" },
        [
            field("count", stage::count_accumulator()),
            field("total", operator::sum("$failures")),
        ],
    );
    insta::assert_snapshot!(
        json(&s),
        @r#"{"$group":{"_id":{"test":"$test"},"count":{"$count":{}},"total":{"$sum":"$failures"}}}"#
    );
}

#[test]
fn test_sort_stage_orders_keys() {
    let s = stage::sort([
        sort_descending("count"),
        sort_ascending("_id"),
        sort_expr("score", doc! { "$meta" => "textScore" }),
    ]);
    insta::assert_snapshot!(
        json(&s),
        @r#"{"$sort":{"count":-1,"_id":1,"score":{"$meta":"textScore"}}}"#
    );
}

#[test]
fn test_simple_stages() {
    let stages: Vec<String> = [
        stage::count("n"),
        stage::match_(doc! { "status" => "failed" }),
        stage::unset(["a", "b"]),
        stage::unwind("$tests"),
        stage::add_fields([field("ratio", operator::divide("$failed", "$total"))]),
        stage::project([field("_id", 0), field("name", 1)]),
    ]
    .iter()
    .map(json)
    .collect();

    insta::assert_snapshot!(stages.join("\n"), @r#"
    {"$count":"n"}
    {"$match":{"status":"failed"}}
    {"$unset":["a","b"]}
    {"$unwind":{"path":"$tests"}}
    {"$addFields":{"ratio":{"$divide":["$failed","$total"]}}}
    {"$project":{"_id":0,"name":1}}
    "#);
}

// =============================================================================
// Operators
// =============================================================================

#[test]
fn test_filter_optional_fields() {
    let bare = operator::filter("$items", None, operator::ne("$$this", Expr::Null), None);
    let full = operator::filter(
        "$items",
        Some("item"),
        operator::eq("$$item.ok", false),
        Some(Expr::from(5)),
    );
    let empty_as = operator::filter("$items", Some(""), true, None);

    insta::assert_snapshot!(
        json(&bare),
        @r#"{"$filter":{"input":"$items","cond":{"$ne":["$$this",null]}}}"#
    );
    insta::assert_snapshot!(
        json(&full),
        @r#"{"$filter":{"input":"$items","cond":{"$eq":["$$item.ok",false]},"as":"item","limit":5}}"#
    );
    insta::assert_snapshot!(json(&empty_as), @r#"{"$filter":{"input":"$items","cond":true}}"#);
}

#[test]
fn test_map_puts_as_before_in() {
    let m = operator::map("$xs", Some("x"), operator::abs("$$x"));
    insta::assert_snapshot!(json(&m), @r#"{"$map":{"input":"$xs","as":"x","in":{"$abs":"$$x"}}}"#);
}

#[test]
fn test_cond_and_reduce_bodies() {
    let c = operator::cond(operator::in_("$s", vec!["failed", "aborted"]), 1, 0);
    let r = operator::reduce("$xs", 0, doc! { "$add" => vec!["$$value", "$$this"] });
    insta::assert_snapshot!(
        json(&c),
        @r#"{"$cond":{"if":{"$in":["$s",["failed","aborted"]]},"then":1,"else":0}}"#
    );
    insta::assert_snapshot!(
        json(&r),
        @r#"{"$reduce":{"input":"$xs","initialValue":0,"in":{"$add":["$$value","$$this"]}}}"#
    );
}

#[test]
fn test_top_and_bottom_bodies() {
    let t = operator::top("$name", [sort_descending("score")]);
    let b = operator::bottom_n("$name", 3, [sort_ascending("score")]);
    let tn = operator::top_n_expr("$name", "$limit", [sort_ascending("score")]);
    insta::assert_snapshot!(json(&t), @r#"{"$top":{"sortBy":{"score":-1},"output":"$name"}}"#);
    insta::assert_snapshot!(
        json(&b),
        @r#"{"$bottomN":{"n":3,"sortBy":{"score":1},"output":"$name"}}"#
    );
    insta::assert_snapshot!(
        json(&tn),
        @r#"{"$topN":{"n":"$limit","sortBy":{"score":1},"output":"$name"}}"#
    );
}

// =============================================================================
// Every builder: one top-level key, survives a JSON round trip
// =============================================================================

#[test]
fn test_every_builder_has_one_top_level_key() {
    let stages: Vec<(&str, Stage)> = vec![
        ("$addFields", stage::add_fields([field("a", 1)])),
        ("$count", stage::count("n")),
        ("$group", stage::group(Expr::Null, [])),
        ("$match", stage::match_(doc! {})),
        ("$project", stage::project([field("a", 1)])),
        ("$sort", stage::sort([sort_ascending("a")])),
        ("$unset", stage::unset(["a"])),
        ("$unwind", stage::unwind("$a")),
    ];
    let operators: Vec<(&str, Operator)> = vec![
        ("$abs", operator::abs(-1)),
        ("$bottom", operator::bottom("$a", [sort_ascending("a")])),
        ("$bottomN", operator::bottom_n("$a", 2, [sort_ascending("a")])),
        ("$cond", operator::cond(true, 1, 0)),
        ("$count", stage::count_accumulator()),
        ("$divide", operator::divide(1, 2)),
        ("$eq", operator::eq(1, 1)),
        ("$filter", operator::filter("$a", None, true, None)),
        ("$in", operator::in_(1, vec![1])),
        ("$map", operator::map("$a", None, "$$this")),
        ("$max", operator::max([1, 2])),
        ("$mergeObjects", operator::merge_objects(["$a"])),
        ("$min", operator::min([1])),
        ("$ne", operator::ne(1, 2)),
        ("$or", operator::or([true])),
        ("$reduce", operator::reduce("$a", 0, "$$this")),
        ("$sum", operator::sum(1)),
        ("$top", operator::top("$a", [sort_descending("a")])),
        ("$topN", operator::top_n("$a", 2, [sort_descending("a")])),
    ];

    let docs = stages
        .into_iter()
        .chain(operators.into_iter().map(|(k, op)| (k, Document::from(op))));

    for (name, doc) in docs {
        assert_eq!(top_level_keys(&doc), [name], "builder for {name}");
        let parsed: Document = serde_json::from_str(&json(&doc)).unwrap();
        assert_eq!(parsed, doc, "round trip for {name}");
    }
}
