#![cfg(all(feature = "serde", feature = "control", feature = "collection"))]

//! Integration tests for serde support.

use fpkit::collection::{List, TraversableList};
use fpkit::control::Outcome;
use fpkit::typeclass::{Product, Sum};
use rstest::rstest;

#[rstest]
#[case(Outcome::Ok(42), r#"{"Ok":42}"#)]
#[case(Outcome::Err("boom".to_string()), r#"{"Err":"boom"}"#)]
fn outcome_uses_externally_tagged_variants(#[case] outcome: Outcome<i32, String>, #[case] json: &str) {
    assert_eq!(serde_json::to_string(&outcome).unwrap(), json);
    let restored: Outcome<i32, String> = serde_json::from_str(json).unwrap();
    assert_eq!(restored, outcome);
}

#[rstest]
fn list_serializes_as_sequence() {
    let list = List::new(vec![1, 2, 3]);
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,2,3]");

    let restored: List<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, list);
}

#[rstest]
fn traversable_list_inside_outcome() {
    let traversed = TraversableList::new(vec!["a", "b"])
        .traverse(|text| Outcome::<String, String>::Ok(text.to_uppercase()));
    let json = serde_json::to_string(&traversed).unwrap();
    assert_eq!(json, r#"{"Ok":["A","B"]}"#);

    let restored: Outcome<TraversableList<String>, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, traversed);
}

#[rstest]
fn wrappers_are_transparent() {
    assert_eq!(serde_json::to_string(&Sum(5)).unwrap(), "5");
    let product: Product<f64> = serde_json::from_str("2.5").unwrap();
    assert_eq!(product, Product(2.5));
}

#[rstest]
fn list_rejects_non_sequence() {
    let result: Result<List<i32>, _> = serde_json::from_str(r#"{"not":"a list"}"#);
    assert!(result.is_err());
}
