use hcl_tokens::ident::is_unicode_identifier;
use hcl_tokens::{
    hcl, to_string, to_string_with_options, to_tokens, to_tokens_with_options, to_value, Error,
    FormatOptions, Serializer, SerializerOptions, TokenKind, Tokens, Value, ValueMap,
};
use serde::Serialize;

use TokenKind::*;

fn kinds(tokens: &Tokens) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn raw(value: &Value) -> String {
    to_tokens(value).unwrap().to_string()
}

#[derive(Serialize)]
struct KeyValuePair {
    name: String,
    value: String,
}

#[derive(Serialize)]
struct PortMapping {
    container_port: u16,
    host_port: Option<u16>,
    protocol: Protocol,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Protocol {
    Tcp,
}

#[test]
fn test_scalar_tokens() {
    let null = to_tokens(&Value::Null).unwrap();
    assert_eq!(kinds(&null), vec![Identifier]);
    assert_eq!(null[0].bytes, b"null");

    let flag = to_tokens(&hcl!(false)).unwrap();
    assert_eq!(flag[0].bytes, b"false");

    let number = to_tokens(&hcl!(-12.5)).unwrap();
    assert_eq!(kinds(&number), vec![NumberLiteral]);
    assert_eq!(number[0].bytes, b"-12.5");
}

#[test]
fn test_empty_string_has_no_literal() {
    let tokens = to_tokens(&hcl!("")).unwrap();
    assert_eq!(kinds(&tokens), vec![QuoteOpen, QuoteClose]);
}

#[test]
fn test_string_literal_is_escaped() {
    let tokens = to_tokens(&hcl!("line\n${var}")).unwrap();
    assert_eq!(kinds(&tokens), vec![QuoteOpen, QuotedLiteral, QuoteClose]);
    assert_eq!(tokens[1].bytes, b"line\\n$${var}");
}

#[test]
fn test_empty_collections() {
    assert_eq!(kinds(&to_tokens(&hcl!([])).unwrap()), vec![BracketOpen, BracketClose]);
    assert_eq!(
        kinds(&to_tokens(&hcl!({})).unwrap()),
        vec![BraceOpen, Newline, Newline, BraceClose]
    );
}

#[test]
fn test_list_separators() {
    let tokens = to_tokens(&hcl!([1, true, "x"])).unwrap();
    assert_eq!(
        kinds(&tokens),
        vec![
            BracketOpen,
            NumberLiteral,
            Comma,
            Newline,
            Identifier,
            Comma,
            Newline,
            QuoteOpen,
            QuotedLiteral,
            QuoteClose,
            BracketClose,
        ]
    );
    assert_eq!(tokens.to_string(), "[1,\ntrue,\n\"x\"]");
}

#[test]
fn test_identifier_and_quoted_keys() {
    assert_eq!(raw(&hcl!({ "name" => "FOO" })), "{\nname=\"FOO\"\n}");
    assert_eq!(raw(&hcl!({ "not ident" => 1 })), "{\n\"not ident\"=1\n}");
    assert_eq!(raw(&hcl!({ "9lives" => 1 })), "{\n\"9lives\"=1\n}");
    assert_eq!(raw(&hcl!({ "kebab-case" => 1 })), "{\nkebab-case=1\n}");
}

#[test]
fn test_non_string_keys() {
    assert_eq!(raw(&hcl!({ 1 => "one" })), "{\n1=\"one\"\n}");
    assert_eq!(raw(&hcl!({ null => true })), "{\nnull=true\n}");
    assert_eq!(raw(&hcl!({ [1] => 2 })), "{\n[1]=2\n}");
}

#[test]
fn test_map_order_and_duplicates_preserved() {
    let mut map = ValueMap::new();
    map.push("b", 1);
    map.push("a", 2);
    map.push("b", 3);
    assert_eq!(raw(&Value::Map(map)), "{\nb=1,\na=2,\nb=3\n}");
}

#[test]
fn test_serialization_is_deterministic() {
    let value = hcl!({ "env" => [{ "name" => "A", "value" => "1" }], "count" => 3 });
    assert_eq!(to_tokens(&value).unwrap(), to_tokens(&value).unwrap());
    assert_eq!(to_string(&value).unwrap(), to_string(&value).unwrap());
}

#[test]
fn test_serializer_appends_streams() {
    let mut serializer = Serializer::new(SerializerOptions::new());
    serializer.serialize(&hcl!(1)).unwrap();
    assert!(serializer.serialize(&hcl!([2, (f64::NAN)])).is_err());
    serializer.serialize(&hcl!("x")).unwrap();
    assert_eq!(serializer.into_inner().to_string(), "1\"x\"");
}

#[test]
fn test_unknown_error_names_its_path() {
    let mut inner = ValueMap::new();
    inner.push("not ident", Value::Unknown);
    let mut outer = ValueMap::new();
    outer.push("spec", Value::List(vec![Value::Map(inner)]));

    let err = to_tokens(&Value::Map(outer)).unwrap_err();
    assert_eq!(
        err,
        Error::UnrepresentableValue(
            "unknown value at spec[0][\"not ident\"]".to_string()
        )
    );
}

#[test]
fn test_unknown_at_root() {
    assert_eq!(
        to_tokens(&Value::Unknown),
        Err(Error::UnrepresentableValue("unknown value".to_string()))
    );
}

#[test]
fn test_depth_limit() {
    let mut value = hcl!(1);
    for _ in 0..4 {
        value = Value::List(vec![value]);
    }

    let exact = SerializerOptions::new().with_max_depth(4);
    assert!(to_tokens_with_options(&value, &exact).is_ok());

    let short = SerializerOptions::new().with_max_depth(3);
    assert_eq!(
        to_tokens_with_options(&value, &short),
        Err(Error::MaxDepthExceeded { limit: 3 })
    );
}

#[test]
fn test_default_depth_limit_stops_runaway_nesting() {
    let mut value = Value::Null;
    for _ in 0..1000 {
        let mut map = ValueMap::new();
        map.push("next", value);
        value = Value::Map(map);
    }
    assert_eq!(
        to_tokens(&value),
        Err(Error::MaxDepthExceeded { limit: 128 })
    );
}

#[test]
fn test_custom_identifier_rule() {
    let value = hcl!({ "région" => 1 });
    assert_eq!(raw(&value), "{\n\"région\"=1\n}");

    let options = SerializerOptions::new().with_identifier(is_unicode_identifier);
    let tokens = to_tokens_with_options(&value, &options).unwrap();
    assert_eq!(tokens.to_string(), "{\nrégion=1\n}");
}

#[test]
fn test_structs_render_as_env_list() {
    let env = vec![
        KeyValuePair {
            name: "LOG_LEVEL".to_string(),
            value: "debug".to_string(),
        },
        KeyValuePair {
            name: "GREETING".to_string(),
            value: "hello \"world\"".to_string(),
        },
    ];
    let text = to_string(&to_value(&env).unwrap()).unwrap();
    let expected = "[{\n  name  = \"LOG_LEVEL\",\n  value = \"debug\"\n},\n{\n  name  = \"GREETING\",\n  value = \"hello \\\"world\\\"\"\n}]\n";
    assert_eq!(text, expected);
}

#[test]
fn test_option_and_unit_enum() {
    let port = PortMapping {
        container_port: 8080,
        host_port: None,
        protocol: Protocol::Tcp,
    };
    let value = to_value(&port).unwrap();
    assert_eq!(
        value,
        hcl!({ "container_port" => 8080, "host_port" => null, "protocol" => "tcp" })
    );
    assert_eq!(
        to_string(&value).unwrap(),
        "{\n  container_port = 8080,\n  host_port      = null,\n  protocol       = \"tcp\"\n}\n"
    );
}

#[test]
fn test_format_options_flow_through() {
    let options = SerializerOptions::new().with_format(
        FormatOptions::new()
            .with_indent(4)
            .with_align_equals(false),
    );
    let text = to_string_with_options(&hcl!({ "a" => 1, "long" => [true] }), &options).unwrap();
    assert_eq!(text, "{\n    a = 1,\n    long = [true]\n}\n");
}
