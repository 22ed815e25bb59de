//! Build a Terraform `locals` block from an ECS task definition.
//!
//! Run with: cargo run --example locals

use hcl_tokens::taskdef::{locals_body, TaskDefinition};
use hcl_tokens::{FormatOptions, SerializerOptions};
use std::error::Error;

const TASK_DEFINITION: &str = r#"{
    "taskDefinition": {
        "family": "web",
        "containerDefinitions": [{
            "name": "app",
            "image": "nginx:1.25",
            "environment": [
                {"name": "LOG_LEVEL", "value": "debug"},
                {"name": "TEMPLATE", "value": "Hello ${user}"}
            ],
            "secrets": [
                {"name": "DB-PASSWORD", "valueFrom": "arn:aws:ssm:eu-west-1:123456789012:parameter/db"}
            ]
        }]
    },
    "tags": []
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    let task = TaskDefinition::from_json(TASK_DEFINITION)?;
    let options = SerializerOptions::new();

    let body = locals_body(&task, None, &options)?;
    println!("Default layout:\n{}", body.render(&options.format));

    // Wider indentation, no `=` alignment
    let compact = FormatOptions::new().with_indent(4).with_align_equals(false);
    println!("Custom layout:\n{}", body.render(&compact));

    // The raw token stream behind an attribute
    if let Some(tokens) = body.blocks().next().and_then(|b| b.body().attribute("env_vars")) {
        println!("env_vars is {} tokens", tokens.len());
    }

    Ok(())
}
