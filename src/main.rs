use clap::{Parser, Subcommand};
use revpath::{InversePath, RevPathError, RuleSet, is_writable, tokenize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Build or patch JSON documents by writing values at path expressions.
#[derive(Parser)]
#[command(name = "revpath")]
#[command(about = "Write values into JSON documents at path expressions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one value at one path
    Set {
        /// Target path, e.g. `$.orders[1].id`
        path: String,

        /// Value to write, as JSON. Anything that is not valid JSON is written as a string.
        value: String,

        /// Document to write into (defaults to an empty document)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Pretty-print the result
        #[arg(long)]
        pretty: bool,
    },

    /// Apply every rule in a rule file, in order
    Apply {
        /// JSON file holding `{ "strict": bool, "rules": [{ "path", "value" }] }`
        rules: PathBuf,

        /// Document to write into (defaults to an empty document)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Pretty-print the result
        #[arg(long)]
        pretty: bool,
    },

    /// Show how paths tokenize and whether they are writable
    Check {
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<(), RevPathError> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Set {
            path,
            value,
            input,
            pretty,
        } => {
            let doc = run_set(&path, value, input.as_deref())?;
            print_document(&doc, pretty)?;
        }
        Commands::Apply {
            rules,
            input,
            pretty,
        } => {
            let doc = run_apply(&rules, input.as_deref())?;
            print_document(&doc, pretty)?;
        }
        Commands::Check { paths } => {
            for line in check_report(&paths) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// Writes one value into the input document (or an empty one).
fn run_set(path: &str, raw_value: String, input: Option<&Path>) -> Result<Value, RevPathError> {
    let path = InversePath::new(path)?;
    let mut doc = load_document(input)?;
    path.set(&mut doc, parse_value(raw_value))?;
    Ok(doc)
}

/// Applies a rule file to the input document (or an empty one).
fn run_apply(rules: &Path, input: Option<&Path>) -> Result<Value, RevPathError> {
    let rules = RuleSet::from_file(rules)?;
    log::info!("applying {} rules", rules.len());
    rules.assemble(load_document(input)?)
}

/// One line per path: verdict, path, then its tokens or the tokenizer error.
fn check_report(paths: &[String]) -> Vec<String> {
    paths
        .iter()
        .map(|path| {
            let verdict = if is_writable(path) { "writable" } else { "read-only" };
            match tokenize(path) {
                Ok(tokens) => format!("{:<10} {} {:?}", verdict, path, tokens),
                Err(e) => format!("{:<10} {} ({})", verdict, path, e),
            }
        })
        .collect()
}

/// Command-line values are JSON when they parse as JSON, plain strings otherwise.
fn parse_value(raw: String) -> Value {
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(_) => {
            log::debug!("'{}' is not JSON, writing it as a string", raw);
            Value::String(raw)
        }
    }
}

fn load_document(input: Option<&Path>) -> Result<Value, RevPathError> {
    match input {
        Some(path) => {
            log::debug!("reading document from {}", path.display());
            let json = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&json)?)
        }
        None => Ok(Value::Null),
    }
}

fn print_document(doc: &Value, pretty: bool) -> Result<(), RevPathError> {
    let out = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    println!("{}", out);
    Ok(())
}
