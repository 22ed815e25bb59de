//! `taskdef-hcl`: print a Terraform `locals` block for an ECS task definition.
//!
//! ## Usage
//!
//! ```sh
//! # Environment and secrets of the first container
//! taskdef-hcl task-definition.json
//!
//! # A specific container, written to a file
//! taskdef-hcl task-definition.json --container app -o locals.tf
//!
//! # Straight from the AWS CLI
//! aws ecs describe-task-definition --task-definition web | taskdef-hcl -
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::WarnLevel;
use hcl_tokens::taskdef::{locals_body, TaskDefinition};
use hcl_tokens::{options::DEFAULT_MAX_DEPTH, FormatOptions, SerializerOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "taskdef-hcl",
    version,
    about = "Convert an ECS task definition's environment and secrets into Terraform locals"
)]
struct Cli {
    /// Task definition JSON file ("-" reads stdin)
    file: PathBuf,

    /// Container to read (defaults to the first one)
    #[arg(short, long, value_name = "NAME")]
    container: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Maximum nesting depth accepted by the serializer
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Spaces per indentation level
    #[arg(long, value_name = "N", default_value_t = 2)]
    indent: usize,

    /// Do not align `=` across consecutive attributes
    #[arg(long)]
    no_align: bool,

    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_writer(io::stderr)
        .init();

    let json = read_input(&cli.file)?;
    let task = TaskDefinition::from_json(&json)
        .with_context(|| format!("Failed to decode task definition {}", cli.file.display()))?;
    debug!(containers = task.container_definitions.len(), "decoded task definition");

    let options = SerializerOptions::new()
        .with_max_depth(cli.max_depth)
        .with_format(
            FormatOptions::new()
                .with_indent(cli.indent)
                .with_align_equals(!cli.no_align),
        );

    let body = locals_body(&task, cli.container.as_deref(), &options)
        .context("Failed to build locals")?;
    let text = body.render(&options.format);

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "wrote locals");
        }
        None => print!("{}", text),
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }
}
