//! Working with Value trees, tokens and errors directly.
//!
//! Run with: cargo run --example dynamic_values

use hcl_tokens::{hcl, to_string, to_tokens, to_value, Error, Value, ValueMap};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct PortMapping {
    container_port: u16,
    protocol: String,
}

fn main() -> Result<(), Error> {
    // Build a value with the hcl! macro
    let config = hcl!({
        "region" => "eu-west-1",
        "desired_count" => 3,
        "subnets" => ["subnet-a", "subnet-b"],
        "not an identifier" => true
    });
    println!("Config:\n{}", to_string(&config)?);

    // Inspect the tokens
    for token in to_tokens(&hcl!([1, "two"]))?.iter() {
        println!("  {:?} {:?}", token.kind, token.text());
    }

    // Convert existing structs
    let ports = vec![
        PortMapping {
            container_port: 80,
            protocol: "tcp".to_string(),
        },
        PortMapping {
            container_port: 443,
            protocol: "tcp".to_string(),
        },
    ];
    println!("\nPorts:\n{}", to_string(&to_value(&ports)?)?);

    // Unresolved placeholders are refused with their location
    let mut pending = ValueMap::new();
    pending.push("image", Value::Unknown);
    let containers = Value::List(vec![Value::Map(pending)]);
    match to_string(&containers) {
        Ok(text) => println!("unexpected output: {}", text),
        Err(err) => println!("\nRefused: {}", err),
    }

    Ok(())
}
