use std::path::PathBuf;
use std::process;

use arrowconf_core::source::FileSystemProvider;
use arrowconf_core::{
    compile_with, serialize, CompileError, ParseOptions, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT,
};
use clap::{Parser, ValueEnum};

/// Output format for error reports on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ErrorFormat {
    Text,
    Json,
}

/// Compile an arrowconf constant file to JSON.
#[derive(Parser)]
#[command(name = "arrowconf", version, about = "Compile arrowconf constant declarations to JSON")]
struct Cli {
    /// Path to the source document
    #[arg(long)]
    input: PathBuf,

    /// Path of the JSON file to write
    #[arg(long)]
    output: PathBuf,

    /// Format of error reports (text or json)
    #[arg(long, default_value = "text", value_enum)]
    error_format: ErrorFormat,

    /// Deepest list nesting accepted in a value
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_DEPTH as u64,
        value_parser = clap::value_parser!(u64).range(1..=MAX_DEPTH_LIMIT as u64)
    )]
    max_depth: u64,

    /// Suppress all diagnostics on stderr
    #[arg(long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print a summary after a successful compile
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let options = ParseOptions {
        max_depth: cli.max_depth as usize,
    };
    if let Err(code) = run(&cli, options) {
        process::exit(code);
    }
}

fn run(cli: &Cli, options: ParseOptions) -> Result<(), i32> {
    let table = match compile_with(&FileSystemProvider, &cli.input, options) {
        Ok(table) => table,
        Err(CompileError::Config(e)) => {
            report(&e.to_string(), Some(e.to_json_value()), cli);
            return Err(1);
        }
        Err(e) => {
            report(&e.to_string(), None, cli);
            return Err(1);
        }
    };

    let rendered = match serialize::to_json_string(&table) {
        Ok(s) => s,
        Err(e) => {
            report(&format!("serialization error: {}", e), None, cli);
            return Err(1);
        }
    };

    if let Err(e) = std::fs::write(&cli.output, rendered) {
        report(
            &format!("cannot write {}: {}", cli.output.display(), e),
            None,
            cli,
        );
        return Err(1);
    }

    if cli.verbose {
        eprintln!(
            "compiled {} constant(s) from {} to {}",
            table.len(),
            cli.input.display(),
            cli.output.display()
        );
    }
    Ok(())
}

/// Write an error to stderr in the requested format. Parse errors carry
/// their structured JSON form; other failures are reported by message only.
fn report(msg: &str, detail: Option<serde_json::Value>, cli: &Cli) {
    if cli.quiet {
        return;
    }
    match cli.error_format {
        ErrorFormat::Text => eprintln!("Error: {}", msg),
        ErrorFormat::Json => {
            let body = detail.unwrap_or_else(|| serde_json::json!({ "message": msg }));
            let json = serde_json::json!({ "error": body });
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_else(|_| format!("{:?}", msg))
            );
        }
    }
}
