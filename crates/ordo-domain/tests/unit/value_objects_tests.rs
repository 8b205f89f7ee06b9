//! Value object tests

use std::sync::Arc;

use ordo_domain::{OrderValue, Tagged};

#[test]
fn test_sorting_mixed_numeric_keys() {
    let mut keys: Vec<OrderValue> = vec![
        OrderValue::from(2),
        OrderValue::from(1.5),
        OrderValue::from(u64::MAX),
        OrderValue::from(-7),
        OrderValue::from(2.0),
    ];
    keys.sort();

    let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["-7", "1.5", "2", "2", "18446744073709551615"]
    );
    assert_eq!(keys[2].as_int(), Some(2));
    assert_eq!(keys[3].as_float(), Some(2.0));
}

#[test]
fn test_sorting_across_kinds() {
    let mut keys: Vec<OrderValue> = vec![
        OrderValue::from((0, "a")),
        OrderValue::from("b"),
        OrderValue::from(0.5),
        OrderValue::from(10),
    ];
    keys.sort();

    assert_eq!(keys[0], OrderValue::from(0.5));
    assert_eq!(keys[1], OrderValue::from(10));
    assert_eq!(keys[2].as_text(), Some("b"));
    assert_eq!(keys[3], OrderValue::from((0, "a")));
}

#[test]
fn test_tagged_debug_names_instance_type() {
    let tagged: Tagged<str, u8> = Tagged::new(Arc::from("x"), 1);
    let debug = format!("{tagged:?}");
    assert!(debug.contains("metadata: 1"));
    assert!(debug.contains("str"));
}
