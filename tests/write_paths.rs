use revpath::{InversePath, RevPathError, WriteError, write_path};
use serde_json::{Map, Value, json};

/// Applies every `(path, value)` pair to a fresh document, in order.
fn build(writes: &[(&str, Value)]) -> Value {
    let mut doc = Value::Null;
    for (path, value) in writes {
        write_path(&mut doc, path, value.clone()).unwrap();
    }
    doc
}

#[test]
fn test_written_value_reads_back_at_pointer() {
    let cases = [
        ("$.a", "/a"),
        ("$.a.b[2].c", "/a/b/2/c"),
        ("$[1].x", "/1/x"),
        ("$.list[0].inner[3].leaf", "/list/0/inner/3/leaf"),
    ];
    for (path, pointer) in cases {
        let doc = build(&[(path, json!("v"))]);
        assert_eq!(doc.pointer(pointer), Some(&json!("v")), "path {}", path);
    }
}

#[test]
fn test_rewrite_is_idempotent() {
    let once = build(&[("$.a[2].b", json!({"deep": [1, 2]}))]);
    let twice = build(&[
        ("$.a[2].b", json!({"deep": [1, 2]})),
        ("$.a[2].b", json!({"deep": [1, 2]})),
    ]);
    assert_eq!(once, twice);
}

#[test]
fn test_array_grows_to_index() {
    let doc = build(&[("$.arr[5]", json!(42))]);
    let arr = doc["arr"].as_array().unwrap();
    assert_eq!(arr.len(), 6);
    assert!(arr[..5].iter().all(Value::is_null));
    assert_eq!(arr[5], json!(42));

    // Traversing past the index upgrades the padding to objects instead.
    let doc = build(&[("$.arr[2].x", json!(1))]);
    assert_eq!(doc, json!({"arr": [{}, {}, {"x": 1}]}));
}

#[test]
fn test_root_path_replaces_any_destination() {
    for prior in [json!(null), json!("s"), json!([1]), json!({"a": {"b": 1}})] {
        let mut doc = prior;
        write_path(&mut doc, "$", json!({"new": 1})).unwrap();
        assert_eq!(doc, json!({"new": 1}));
    }
}

#[test]
fn test_anonymous_root_array() {
    assert_eq!(build(&[("$[0]", json!("v"))]), json!(["v"]));
    assert_eq!(build(&[("$[0].x", json!("v"))]), json!([{"x": "v"}]));
    assert_eq!(
        build(&[("$[1].x", json!(1)), ("$[0].y", json!(2))]),
        json!([{"y": 2}, {"x": 1}])
    );
}

#[test]
fn test_write_below_scalar_fails_and_keeps_scalar() {
    let mut doc = build(&[("$.a", json!(1))]);
    let err = write_path(&mut doc, "$.a.b", json!(2)).unwrap_err();
    assert!(matches!(
        err,
        RevPathError::Write(WriteError::TypeMismatch { ref segment, .. }) if segment == "a"
    ));
    assert_eq!(doc, json!({"a": 1}));
}

#[test]
fn test_index_order_does_not_matter() {
    let forward = build(&[("$.a[0]", json!(0)), ("$.a[1]", json!(1))]);
    let backward = build(&[("$.a[1]", json!(1)), ("$.a[0]", json!(0))]);
    assert_eq!(forward, backward);
    assert_eq!(forward["a"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_scattered_writes_assemble_one_document() {
    let paths = [
        ("$.invoice.id", json!("INV-1")),
        ("$.invoice.lines[1].sku", json!("B-2")),
        ("$.invoice.lines[0].sku", json!("A-1")),
        ("$.invoice.lines[0].qty", json!(3)),
        ("$.invoice.customer.address.city", json!("Oslo")),
    ];
    let mut doc = Value::Null;
    let compiled: Vec<(InversePath, Value)> = paths
        .iter()
        .map(|(p, v)| (InversePath::strict(p).unwrap(), v.clone()))
        .collect();
    for (path, value) in compiled {
        path.set(&mut doc, value).unwrap();
    }
    assert_eq!(
        doc,
        json!({
            "invoice": {
                "id": "INV-1",
                "lines": [{"sku": "A-1", "qty": 3}, {"sku": "B-2"}],
                "customer": {"address": {"city": "Oslo"}}
            }
        })
    );
}

#[test]
fn test_borrowed_object_destination() {
    let mut map = Map::new();
    write_path(&mut map, "$.meta.tags[0]", json!("x")).unwrap();
    assert_eq!(Value::Object(map.clone()), json!({"meta": {"tags": ["x"]}}));

    let err = write_path(&mut map, "$", json!(1)).unwrap_err();
    assert!(matches!(err, RevPathError::Write(WriteError::RootHandle(_))));
}

#[test]
fn test_syntax_errors_surface_from_compile() {
    let mut doc = Value::Null;
    assert!(matches!(
        write_path(&mut doc, "$.a[one]", json!(1)),
        Err(RevPathError::Path(_))
    ));
    assert_eq!(doc, Value::Null);
}

#[test]
fn test_index_too_large_to_address_is_an_error() {
    for path in ["$.a[18446744073709551615]", "$[18446744073709551615]"] {
        let mut doc = Value::Null;
        let err = write_path(&mut doc, path, json!(1)).unwrap_err();
        assert!(
            matches!(err, RevPathError::Write(WriteError::IndexOutOfRange { .. })),
            "path {}: {:?}",
            path,
            err
        );
    }
}
