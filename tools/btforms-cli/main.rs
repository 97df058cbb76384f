use btforms::prelude::*;
use clap::{Parser, Subcommand};
use std::fs;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validate custom datatypes and node models the way the editor forms do
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log form events at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Print verdicts as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the canonical rendering of a comma-separated value list
    Normalize {
        /// Raw value text, e.g. "a , b\n, c"
        text: String,
    },
    /// Validate the datatypes of a catalog file
    Datatypes {
        /// Path to the catalog JSON file
        catalog_path: String,
    },
    /// Validate a node model JSON file against a catalog
    Node {
        /// Path to the catalog JSON file
        catalog_path: String,
        /// Path to the node model JSON file
        node_path: String,
        /// Treat the node as an edit of the catalog entry with the same name
        #[arg(short, long)]
        edit: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command, cli.json) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs a command and reports whether its input was valid.
fn run(command: Command, json: bool) -> Result<bool> {
    match command {
        Command::Normalize { text } => {
            println!("{}", normalize_text(&text));
            Ok(true)
        }
        Command::Datatypes { catalog_path } => {
            let catalog = Catalog::from_file(&catalog_path)?;
            info!(path = %catalog_path, count = catalog.datatypes.len(), "Loaded catalog");

            let form = DataTypeForm::new(&catalog.datatypes);
            for (row, issue) in form.report().issues.iter().enumerate() {
                println!("  issue {}: {}", row + 1, issue);
            }
            let verdict = form.verdict();
            print_verdict(&verdict, json)?;
            Ok(verdict.valid)
        }
        Command::Node {
            catalog_path,
            node_path,
            edit,
        } => {
            let catalog = Catalog::from_file(&catalog_path)?;
            let node: NodeModel = serde_json::from_str(&fs::read_to_string(&node_path)?)?;
            info!(path = %node_path, id = %node.id, "Loaded node model");

            let mut builder = NodeForm::builder(&catalog.models, &catalog.datatypes);
            if edit {
                builder = builder.editing(&node.id);
            }
            let mut form = builder.build();
            form.enter_model(&node)?;

            let verdict = form.verdict();
            print_verdict(&verdict, json)?;
            if let Ok(model) = form.accept() {
                println!("{}", serde_json::to_string_pretty(&model)?);
            }
            Ok(verdict.valid)
        }
    }
}

fn print_verdict(verdict: &Verdict, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(verdict)?);
    } else {
        println!("-> {}", verdict);
    }
    Ok(())
}
