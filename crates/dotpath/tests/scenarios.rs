#![allow(missing_docs)]

mod common;

use common::{arr, nested, num, obj, sparse};
use dotpath::{
    Array, Object, PathError, PathOptions, Value, get_path_in, has_path_value, path,
    path_exists_in, set_path_in, update_path_in,
};
use rstest::rstest;

#[test]
fn reads_negative_index_through_nested_objects() {
    assert_eq!(get_path_in(&nested(), "a.b.-1", None), Ok(Some(num(6.0))));
}

#[test]
fn set_creates_missing_intermediate_objects() {
    let root = obj([("a", num(2.0))]);
    let out = set_path_in(&root, "b.c", num(99.0), None).unwrap();
    assert_eq!(out, obj([("a", num(2.0)), ("b", obj([("c", num(99.0))]))]));
    assert_eq!(root, obj([("a", num(2.0))]));
}

#[rstest]
#[case::string_index("1", 2.0)]
#[case::string_negative("-1", 3.0)]
#[case::negative_first("-3", 1.0)]
fn reads_array_roots_by_string(#[case] path: &str, #[case] expected: f64) {
    let root = arr([num(1.0), num(2.0), num(3.0)]);
    assert_eq!(get_path_in(&root, path, None), Ok(Some(num(expected))));
}

#[test]
fn fractional_segments_truncate() {
    let root = arr([num(1.0), num(2.0), num(3.0)]);
    assert_eq!(get_path_in(&root, ["1.9"], None), Ok(Some(num(2.0))));
    assert_eq!(get_path_in(&root, "1.9", Some("/")), Ok(Some(num(2.0))));
    assert_eq!(get_path_in(&root, "-1.9", Some("/")), Ok(Some(num(3.0))));
    // Split on the default separator this is "1" then "9", and a number has
    // no slot "9".
    assert_eq!(get_path_in(&root, "1.9", None), Ok(None));
}

#[test]
fn reads_array_roots_by_integer() {
    let root = arr([num(1.0), num(2.0), num(3.0)]);
    assert_eq!(get_path_in(&root, 1, None), Ok(Some(num(2.0))));
    assert_eq!(get_path_in(&root, -1, None), Ok(Some(num(3.0))));
    assert_eq!(get_path_in(&root, 3, None), Ok(None));
    assert_eq!(get_path_in(&root, -4, None), Ok(None));
}

#[test]
fn existence_ignores_the_stored_value() {
    let root = obj([("a", obj([("b", Value::Undefined)]))]);
    assert_eq!(path_exists_in(&root, "a.b", None), Ok(true));
    assert_eq!(get_path_in(&root, "a.b", None), Ok(Some(Value::Undefined)));
    assert_eq!(path_exists_in(&root, "a.c", None), Ok(false));
    assert_eq!(get_path_in(&root, "a.c", None), Ok(None));
}

#[test]
fn has_value_uses_same_value_zero() {
    let root = obj([("a", obj([("b", num(f64::NAN))]))]);
    assert_eq!(has_path_value(&root, "a.b", &num(f64::NAN), None), Ok(true));

    let root = obj([("a", num(0.0))]);
    assert_eq!(has_path_value(&root, "a", &num(-0.0), None), Ok(true));
    assert_eq!(has_path_value(&root, "a", &num(1.0), None), Ok(false));
    assert_eq!(has_path_value(&root, "missing", &Value::Undefined, None), Ok(false));
}

#[test]
fn has_value_compares_containers_by_identity() {
    let root = nested();
    let look_alike = obj([("y", Value::from("z"))]);
    assert_eq!(get_path_in(&root, "x", None), Ok(Some(look_alike.clone())));
    assert_eq!(has_path_value(&root, "x", &look_alike, None), Ok(false));

    let same = get_path_in(&root, "x", None).unwrap().unwrap();
    assert_eq!(has_path_value(&root, "x", &same, None), Ok(true));
}

#[test]
fn set_into_hole_yields_dense_array() {
    let root = sparse([Some(num(1.0)), None, Some(num(3.0))]);
    let out = set_path_in(&root, "1", num(99.0), None).unwrap();
    assert_eq!(out, arr([num(1.0), num(99.0), num(3.0)]));
    assert!(out.as_array().unwrap().is_dense());
}

#[test]
fn set_elsewhere_materializes_other_holes() {
    let root = sparse([Some(num(1.0)), None, Some(num(3.0))]);
    let out = set_path_in(&root, "0", num(0.0), None).unwrap();
    assert_eq!(out, arr([num(0.0), Value::Undefined, num(3.0)]));
    assert!(root.as_array().unwrap().is_hole(1));
}

#[test]
fn own_keys_beat_negative_indices() {
    let mut a = Array::from(vec![num(1.0), num(2.0), num(3.0)]);
    a.insert_property("-1", Value::from("foo")).unwrap();
    let root = obj([("a", a.into())]);

    assert_eq!(get_path_in(&root, "a.-1", None), Ok(Some(Value::from("foo"))));
    assert_eq!(get_path_in(&root, "a.-2", None), Ok(Some(num(2.0))));
}

#[test]
fn update_applies_to_existing_slot() {
    let out = update_path_in(
        &nested(),
        "a.b.0",
        |v| num(v.as_f64().unwrap() * 10.0),
        None,
    )
    .unwrap();
    assert_eq!(get_path_in(&out, "a.b", None), Ok(Some(arr([num(40.0), num(5.0), num(6.0)]))));
}

#[test]
fn update_of_missing_path_returns_same_shape() {
    let root = nested();
    let out = update_path_in(
        &root,
        "nonexistent.path",
        |_| panic!("updater must not run"),
        None,
    )
    .unwrap();
    assert_eq!(out, root);
}

#[test]
fn writes_share_untouched_branches() {
    let root = nested();
    let out = set_path_in(&root, "a.b.1", num(0.0), None).unwrap();
    let branch = |v: &Value, p: &str| get_path_in(v, p, None).unwrap().unwrap();

    assert!(branch(&out, "x").ptr_eq(&branch(&root, "x")));
    assert!(!branch(&out, "a").ptr_eq(&branch(&root, "a")));
    assert_eq!(branch(&root, "a.b.1"), num(5.0));
}

#[rstest]
#[case::null(Value::Null)]
#[case::undefined(Value::Undefined)]
fn nil_containers_are_rejected(#[case] root: Value) {
    assert_eq!(get_path_in(&root, "a", None), Err(PathError::NilContainer));
    assert_eq!(
        set_path_in(&root, "a", num(1.0), None),
        Err(PathError::NilContainer)
    );
    assert_eq!(
        update_path_in(&root, "a", |v| v, None),
        Err(PathError::NilContainer)
    );
    assert_eq!(path_exists_in(&root, "a", None), Err(PathError::NilContainer));
    assert_eq!(
        has_path_value(&root, "a", &Value::Undefined, None),
        Err(PathError::NilContainer)
    );
}

#[test]
fn nil_leaves_are_not_errors() {
    let root = obj([("a", Value::Null)]);
    assert_eq!(get_path_in(&root, "a.b", None), Ok(None));
    assert_eq!(
        set_path_in(&root, "a.b", num(1.0), None),
        Ok(obj([("a", obj([("b", num(1.0))]))]))
    );
}

#[test]
fn custom_separator() {
    assert_eq!(get_path_in(&nested(), "a/b/0", Some("/")), Ok(Some(num(4.0))));
    assert_eq!(get_path_in(&nested(), "a/b/0", None), Ok(None));
    let out = set_path_in(&nested(), "x->y", num(1.0), Some("->")).unwrap();
    assert_eq!(get_path_in(&out, "x.y", None), Ok(Some(num(1.0))));
}

#[test]
fn explicit_segments_bypass_the_separator() {
    let root = obj([("a.b", num(1.0))]);
    assert_eq!(get_path_in(&root, ["a.b"], None), Ok(Some(num(1.0))));
    assert_eq!(get_path_in(&root, path![], None), Ok(Some(root.clone())));
}

#[test]
fn reads_see_non_enumerable_properties_and_writes_drop_them() {
    let mut inner = Object::new();
    inner.insert_non_enumerable("hidden", num(1.0));
    let root = obj([("a", inner.into())]);

    assert_eq!(get_path_in(&root, "a.hidden", None), Ok(Some(num(1.0))));
    assert_eq!(path_exists_in(&root, "a.hidden", None), Ok(true));
    assert_eq!(has_path_value(&root, "a.hidden", &num(1.0), None), Ok(true));
    assert_eq!(get_path_in(&root, "a.b.length", None), Ok(None));

    let enumerable_only = PathOptions::default().include_non_enumerable(false);
    assert_eq!(enumerable_only.get(&root, "a.hidden"), Ok(None));
    assert_eq!(enumerable_only.exists(&root, "a.hidden"), Ok(false));

    let out = set_path_in(&root, "a.other", num(2.0), None).unwrap();
    assert_eq!(get_path_in(&out, "a.hidden", None), Ok(None));
}

#[test]
fn length_reads_as_array_and_string_length() {
    assert_eq!(get_path_in(&arr([num(1.0), num(2.0), num(3.0)]), "length", None), Ok(Some(num(3.0))));
    assert_eq!(get_path_in(&nested(), "a.b.length", None), Ok(Some(num(3.0))));
    assert_eq!(
        get_path_in(&obj([("s", Value::from("héllo"))]), "s.length", None),
        Ok(Some(num(5.0)))
    );
    assert_eq!(path_exists_in(&nested(), "a.b.length", None), Ok(true));
}

#[test]
fn update_of_hidden_or_length_follows_write_visibility() {
    let mut inner = Object::new();
    inner.insert_non_enumerable("hidden", num(1.0));
    let root = obj([("a", inner.into())]);
    let out = update_path_in(&root, "a.hidden", |_| panic!("updater must not run"), None).unwrap();
    assert_eq!(get_path_in(&out, "a.hidden", None), Ok(Some(num(1.0))));
    assert_eq!(out.to_string(), r#"{"a":{}}"#);

    let root = obj([("a", arr([num(1.0), num(2.0), num(3.0)]))]);
    let out = update_path_in(&root, "a.length", |v| num(v.as_f64().unwrap() + 10.0), None).unwrap();
    assert_eq!(out, obj([("a", arr([num(11.0), num(2.0), num(3.0)]))]));
}

#[test]
fn update_of_missing_path_densifies_sparse_root() {
    let root = sparse([Some(num(1.0)), None]);
    let out = update_path_in(&root, "x.y", |v| v, None).unwrap();
    assert_eq!(out, arr([num(1.0), Value::Undefined]));
    assert!(out.as_array().unwrap().is_dense());
    assert!(root.as_array().unwrap().is_hole(1));
}
