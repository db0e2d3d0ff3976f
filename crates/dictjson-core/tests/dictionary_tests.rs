//! Value-tree contract tests: replace-or-insert, typed lookup, removal and
//! deep-copy independence of every accessor.

use dictjson_core::{Array, Dictionary, ElementKind, Value};

fn sample_nested() -> Dictionary {
    let mut inner = Dictionary::new();
    inner.set_text("city", "Portland");
    inner.set_number("zip", 97201.0);
    inner
}

// ============================================================================
// Creation
// ============================================================================

#[test]
fn new_dictionary_is_empty() {
    let d = Dictionary::new();
    assert!(d.is_empty());
    assert_eq!(d.len(), 0);
    assert_eq!(d, Dictionary::default());
}

// ============================================================================
// Scalar set/get
// ============================================================================

#[test]
fn set_and_get_number() {
    let mut d = Dictionary::new();
    assert!(d.set_number("n", 42.5));
    assert_eq!(d.get_number("n"), Some(42.5));
}

#[test]
fn set_and_get_boolean() {
    let mut d = Dictionary::new();
    assert!(d.set_boolean("t", true));
    assert!(d.set_boolean("f", false));
    assert_eq!(d.get_boolean("t"), Some(true));
    assert_eq!(d.get_boolean("f"), Some(false));
}

#[test]
fn set_and_get_text() {
    let mut d = Dictionary::new();
    assert!(d.set_text("name", "Alice"));
    assert_eq!(d.get_text("name").as_deref(), Some("Alice"));
}

#[test]
fn set_and_get_nested() {
    let mut d = Dictionary::new();
    let inner = sample_nested();
    assert!(d.set_nested("address", &inner));
    assert_eq!(d.get_nested("address"), Some(inner));
}

#[test]
fn missing_key_is_none() {
    let d = Dictionary::new();
    assert_eq!(d.get_number("nope"), None);
    assert_eq!(d.get_text("nope"), None);
    assert_eq!(d.get_nested("nope"), None);
    assert_eq!(d.get_boolean_array("nope"), None);
}

#[test]
fn keys_are_case_sensitive() {
    let mut d = Dictionary::new();
    d.set_number("Key", 1.0);
    d.set_number("key", 2.0);
    assert_eq!(d.len(), 2);
    assert_eq!(d.get_number("Key"), Some(1.0));
    assert_eq!(d.get_number("key"), Some(2.0));
}

#[test]
fn long_keys_are_not_truncated() {
    let key = "k".repeat(500);
    let mut d = Dictionary::new();
    d.set_boolean(&key, true);
    assert_eq!(d.get_boolean(&key), Some(true));
    assert_eq!(d.keys().next().map(str::len), Some(500));
}

#[test]
fn empty_key_is_rejected_without_mutation() {
    let mut d = Dictionary::new();
    d.set_number("a", 1.0);
    assert!(!d.set_text("", "x"));
    assert!(!d.set_number_array("", &[1.0]));
    assert_eq!(d.len(), 1);
    assert!(!d.contains_key(""));
}

// ============================================================================
// Type mismatch behaves like a missing key
// ============================================================================

#[test]
fn wrong_type_is_none() {
    let mut d = Dictionary::new();
    d.set_number("n", 1.0);
    assert_eq!(d.get_boolean("n"), None);
    assert_eq!(d.get_text("n"), None);
    assert_eq!(d.get_nested("n"), None);
    assert_eq!(d.get_number_array("n"), None);
}

#[test]
fn array_element_kind_must_match_accessor() {
    let mut d = Dictionary::new();
    d.set_number_array("a", &[1.0, 2.0]);
    assert_eq!(d.get_number_array("a"), Some(vec![1.0, 2.0]));
    assert_eq!(d.get_boolean_array("a"), None);
    assert_eq!(d.get_text_array("a"), None);
    assert_eq!(d.get_nested_array("a"), None);
    assert_eq!(d.get_number("a"), None);
}

// ============================================================================
// Replace-or-insert
// ============================================================================

#[test]
fn set_replaces_across_types() {
    let mut d = Dictionary::new();
    d.set_number("k", 1.0);
    d.set_text("k", "x");
    assert_eq!(d.get_number("k"), None);
    assert_eq!(d.get_text("k").as_deref(), Some("x"));
    assert_eq!(d.len(), 1);
}

#[test]
fn replaced_key_moves_to_end() {
    let mut d = Dictionary::new();
    d.set_number("a", 1.0);
    d.set_number("b", 2.0);
    d.set_number("a", 3.0);
    let keys: Vec<&str> = d.keys().collect();
    assert_eq!(keys, vec!["b", "a"]);
    assert_eq!(d.get_number("a"), Some(3.0));
}

#[test]
fn insertion_order_is_preserved() {
    let mut d = Dictionary::new();
    d.set_text("z", "1");
    d.set_text("a", "2");
    d.set_text("m", "3");
    let keys: Vec<&str> = d.keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn boolean_array_roundtrips_through_accessors() {
    let mut d = Dictionary::new();
    d.set_boolean_array("flags", &[true, false, true]);
    assert_eq!(d.get_boolean_array("flags"), Some(vec![true, false, true]));
}

#[test]
fn text_array_accepts_str_and_string_slices() {
    let mut d = Dictionary::new();
    d.set_text_array("a", &["x", "y"]);
    d.set_text_array("b", &[String::from("z")]);
    assert_eq!(d.get_text_array("a"), Some(vec!["x".to_string(), "y".to_string()]));
    assert_eq!(d.get_text_array("b"), Some(vec!["z".to_string()]));
}

#[test]
fn nested_array_holds_independent_copies() {
    let mut d = Dictionary::new();
    let mut items = vec![sample_nested(), Dictionary::new()];
    d.set_nested_array("items", &items);
    items[0].set_text("city", "Seattle");

    let stored = d.get_nested_array("items").unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].get_text("city").as_deref(), Some("Portland"));
    assert!(stored[1].is_empty());
}

#[test]
fn empty_array_keeps_its_kind() {
    let mut d = Dictionary::new();
    d.set_text_array::<&str>("empty", &[]);
    assert_eq!(d.get_text_array("empty"), Some(vec![]));
    assert_eq!(d.get_number_array("empty"), None);
    match d.get("empty") {
        Some(Value::Array(arr)) => {
            assert_eq!(arr.kind(), ElementKind::Text);
            assert!(arr.is_empty());
        }
        other => panic!("expected array, got {other:?}"),
    }
}

#[test]
fn generic_set_accepts_any_value() {
    let mut d = Dictionary::new();
    assert!(d.set("n", Value::from(2.0)));
    assert!(d.set("a", Value::Array(Array::Boolean(vec![true]))));
    assert_eq!(d.get("n"), Some(&Value::Number(2.0)));
    assert_eq!(d.get("a").map(Value::type_name), Some("array"));
}

// ============================================================================
// Remove
// ============================================================================

#[test]
fn remove_reports_whether_entry_existed() {
    let mut d = Dictionary::new();
    d.set_number("a", 1.0);
    d.set_number("b", 2.0);
    assert!(d.remove("a"));
    assert!(!d.remove("a"));
    assert!(!d.remove("missing"));
    assert_eq!(d.keys().collect::<Vec<_>>(), vec!["b"]);
}

// ============================================================================
// Deep-copy semantics
// ============================================================================

#[test]
fn set_nested_copies_in() {
    let mut d = Dictionary::new();
    let mut inner = sample_nested();
    d.set_nested("addr", &inner);
    inner.set_text("city", "Seattle");
    inner.remove("zip");

    let stored = d.get_nested("addr").unwrap();
    assert_eq!(stored.get_text("city").as_deref(), Some("Portland"));
    assert_eq!(stored.get_number("zip"), Some(97201.0));
}

#[test]
fn get_nested_copies_out() {
    let mut d = Dictionary::new();
    d.set_nested("addr", &sample_nested());
    let mut copy = d.get_nested("addr").unwrap();
    copy.set_text("city", "Seattle");

    assert_eq!(
        d.get_nested("addr").unwrap().get_text("city").as_deref(),
        Some("Portland")
    );
}

#[test]
fn copy_is_independent_in_both_directions() {
    let mut original = Dictionary::new();
    original.set_nested("addr", &sample_nested());
    original.set_number_array("nums", &[1.0, 2.0]);

    let mut copy = original.copy();
    assert_eq!(copy, original);

    copy.set_text("extra", "x");
    copy.remove("nums");
    assert!(original.contains_key("nums"));
    assert!(!original.contains_key("extra"));

    original.set_boolean("flag", true);
    assert!(!copy.contains_key("flag"));
}

#[test]
fn copy_of_deep_tree_is_equal() {
    let mut level3 = Dictionary::new();
    level3.set_boolean("deep", true);
    let mut level2 = Dictionary::new();
    level2.set_nested("l3", &level3);
    level2.set_nested_array("list", &[level3.clone(), level3.clone()]);
    let mut root = Dictionary::new();
    root.set_nested("l2", &level2);

    let copy = root.copy();
    assert_eq!(copy, root);
    let got = copy.get_nested("l2").unwrap().get_nested("l3").unwrap();
    assert_eq!(got.get_boolean("deep"), Some(true));
}

// ============================================================================
// Iteration
// ============================================================================

#[test]
fn iter_yields_entries_in_order() {
    let mut d = Dictionary::new();
    d.set_number("a", 1.0);
    d.set_text("b", "x");
    let entries: Vec<(&str, &Value)> = d.iter().collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], ("a", &Value::Number(1.0)));
    assert_eq!(entries[1], ("b", &Value::Text("x".to_string())));
}
