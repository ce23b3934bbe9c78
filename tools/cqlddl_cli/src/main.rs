use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cqlddl::{build_script, parser, SchemaAction};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "cqlddl")]
#[command(about = "Generate CQL schema scripts from YAML schema documents")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the statements for a schema action, one per line
    Generate {
        /// Schema document (YAML)
        schema: PathBuf,

        /// Schema action: create, recreate, drop or none
        #[arg(long, default_value = "create")]
        action: SchemaAction,

        /// Write the script to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate every specification in a schema document
    Check {
        /// Schema document (YAML)
        schema: PathBuf,
    },
}

fn main() -> Result<()> {
    // logs go to stderr so the script on stdout stays pipeable
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(env).with_writer(std::io::stderr).init();

    let args = Args::parse();

    match args.command {
        Commands::Generate { schema, action, output } => handle_generate(schema, action, output),
        Commands::Check { schema } => handle_check(schema),
    }
}

fn handle_generate(schema_path: PathBuf, action: SchemaAction, output: Option<PathBuf>) -> Result<()> {
    let schema = parser::parse_file(&schema_path)?;
    let script = build_script(&schema, action)
        .with_context(|| format!("Failed to generate {} script for {}", action, schema_path.display()))?;

    let mut text = script.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }

    match output {
        Some(path) => {
            std::fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), statements = script.len(), "wrote schema script");
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn handle_check(schema_path: PathBuf) -> Result<()> {
    let schema = parser::parse_file(&schema_path)?;
    let script = build_script(&schema, SchemaAction::Create)
        .with_context(|| format!("Invalid schema {}", schema_path.display()))?;
    println!(
        "{}: {} keyspace(s), {} table(s), {} index(es), {} statement(s) OK",
        schema_path.display(),
        schema.keyspaces.len(),
        schema.tables.len(),
        schema.indexes.len(),
        script.len()
    );
    Ok(())
}
