use hcl_tokens::{hcl, to_string, Number, Value, ValueMap};

#[test]
fn test_hcl_macro_null() {
    let value = hcl!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_hcl_macro_booleans() {
    assert_eq!(hcl!(true), Value::Bool(true));
    assert_eq!(hcl!(false), Value::Bool(false));
}

#[test]
fn test_hcl_macro_numbers() {
    assert_eq!(hcl!(42), Value::Number(Number::from(42)));
    assert_eq!(hcl!(3.5), Value::Number(Number::parse("3.5").unwrap()));
    assert_eq!(hcl!(-123), Value::Number(Number::from(-123)));
    assert_eq!(hcl!([1, (-1)]), Value::List(vec![Value::from(1), Value::from(-1)]));
}

#[test]
fn test_hcl_macro_strings() {
    assert_eq!(hcl!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(hcl!(""), Value::String(String::new()));

    let name = String::from("FOO");
    assert_eq!(hcl!(name), Value::from("FOO"));
}

#[test]
fn test_hcl_macro_lists() {
    assert_eq!(hcl!([]), Value::List(vec![]));

    let mixed = hcl!([1, "hello", true, null]);
    assert_eq!(
        mixed,
        Value::List(vec![
            Value::from(1),
            Value::from("hello"),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_hcl_macro_maps() {
    assert_eq!(hcl!({}), Value::Map(ValueMap::new()));

    let env = hcl!({
        "name" => "FOO",
        "value" => "bar",
    });

    match env {
        Value::Map(ref map) => {
            assert_eq!(map.len(), 2);
            assert_eq!(map.get("name"), Some(&Value::from("FOO")));
            assert_eq!(map.get("value"), Some(&Value::from("bar")));
            let keys: Vec<_> = map.keys().filter_map(Value::as_str).collect();
            assert_eq!(keys, vec!["name", "value"]);
        }
        _ => panic!("Expected map"),
    }
}

#[test]
fn test_hcl_macro_nested() {
    let nested = hcl!({
        "container" => {
            "name" => "app",
            "essential" => true
        },
        "ports" => [80, 443],
        "replicas" => 2
    });

    let map = nested.as_map().unwrap();
    assert_eq!(map.len(), 3);

    let container = map.get("container").and_then(Value::as_map).unwrap();
    assert_eq!(container.get("essential"), Some(&Value::Bool(true)));

    let ports = map.get("ports").and_then(Value::as_list).unwrap();
    assert_eq!(ports, &[Value::from(80), Value::from(443)]);
}

#[test]
fn test_hcl_macro_unconvertible_is_unknown() {
    let value = hcl!([1, (f64::INFINITY)]);
    assert!(value.contains_unknown());
    assert!(to_string(&value).is_err());
}

#[test]
fn test_value_methods() {
    let null_val = hcl!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_list());
    assert!(!null_val.is_map());
    assert!(!null_val.is_unknown());

    let bool_val = hcl!(true);
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = hcl!("hello");
    assert_eq!(str_val.as_str(), Some("hello"));

    let number_val = hcl!(7);
    assert_eq!(number_val.as_number().and_then(Number::as_i64), Some(7));

    let list_val = hcl!([1, 2, 3]);
    assert_eq!(list_val.as_list().map(<[Value]>::len), Some(3));

    assert!(Value::Unknown.is_unknown());
}
