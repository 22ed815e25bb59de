/// Builds a [`Value`](crate::Value) from literal-looking syntax.
///
/// Map pairs use `=>` and keep the order they are written in. Any other
/// expression goes through [`to_value`](crate::to_value); expressions that
/// cannot be converted (a NaN float, say) become [`Value::Unknown`](crate::Value::Unknown)
/// and are rejected later by the serializer. Negative numbers nested inside a
/// list or map need parentheses: `hcl!([1, (-1)])`.
///
/// ```rust
/// use hcl_tokens::{hcl, Value};
///
/// let env = hcl!([
///     { "name" => "FOO", "value" => "bar" },
///     { "name" => "BAZ", "value" => null }
/// ]);
/// assert_eq!(env.as_list().map(|l| l.len()), Some(2));
/// ```
#[macro_export]
macro_rules! hcl {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::List(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::hcl!($elem)),*])
    };

    ({}) => {
        $crate::Value::Map($crate::ValueMap::new())
    };

    ({ $($key:tt => $value:tt),* $(,)? }) => {{
        let mut map = $crate::ValueMap::new();
        $(
            map.push($crate::hcl!($key), $crate::hcl!($value));
        )*
        $crate::Value::Map(map)
    }};

    ($e:expr) => {
        $crate::to_value(&$e).unwrap_or($crate::Value::Unknown)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, Value, ValueMap};

    #[test]
    fn test_hcl_macro_primitives() {
        assert_eq!(hcl!(null), Value::Null);
        assert_eq!(hcl!(true), Value::Bool(true));
        assert_eq!(hcl!(42), Value::Number(Number::from(42)));
        assert_eq!(hcl!("hello"), Value::String("hello".to_string()));
        assert_eq!(hcl!(f64::NAN), Value::Unknown);
    }

    #[test]
    fn test_hcl_macro_maps_keep_order() {
        let map = hcl!({ "zeta" => 1, "alpha" => 2, 3 => "three" });
        let mut expected = ValueMap::new();
        expected.push("zeta", 1);
        expected.push("alpha", 2);
        expected.push(3, "three");
        assert_eq!(map, Value::Map(expected));
    }
}
