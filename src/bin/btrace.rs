//! Command-line interface for btrace
//! This binary parses probe scripts and prints their tokens or parsed probes.
//!
//! Usage:
//!   btrace process `<path>` [`<format>`]   - Process a script and output to stdout (explicit)
//!   btrace `<path>` [`<format>`]           - Same as process (default command)
//!   btrace check `<path>`                - Parse only, report the number of probes
//!   btrace formats                       - List all available formats
//!
//! A `btrace.toml` in the working directory is picked up automatically; `--config` layers
//! another file on top of it. `--format` and `--log-level` override both, and a positional
//! format overrides `--format`.
//!
//! The token-* formats show the structural tokenizer only: signature, predicate and action
//! text come out as identifiers and specials, not as the raw text the parser captures.

use btrace::btrace::config::{BtraceConfig, CliSettings};
use btrace::btrace::parser::parse_program;
use btrace::btrace::processor::{available_formats, process_file, ProcessingSpec};
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const FORMAT_HELP: &str =
    "Output format (e.g., program-simple, token-json); token-* formats show structural tokens only";

fn main() {
    let matches = Command::new("btrace")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and inspecting btrace probe scripts")
        .subcommand_required(false)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("output-format")
                .long("format")
                .short('f')
                .global(true)
                .help("Default output format, overriding configuration files"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log filter used when RUST_LOG is unset (e.g., debug, btrace=trace)"),
        )
        // Default command args
        .arg(
            Arg::new("path")
                .help("Path to the probe script to process")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .help(FORMAT_HELP)
                .index(2),
        )
        // Subcommands
        .subcommand(
            Command::new("process")
                .about("Process a script and output to stdout (default command)")
                .arg(
                    Arg::new("path")
                        .help("Path to the probe script to process")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .help(FORMAT_HELP)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Parse a script and report whether it is valid")
                .arg(
                    Arg::new("path")
                        .help("Path to the probe script to check")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("formats").about("List all available output formats"))
        .get_matches();

    let sub_matches = matches.subcommand().map(|(_, sub)| sub);
    let config = load_config(&matches, sub_matches);
    init_logging(&config.logging.level);

    match matches.subcommand() {
        Some(("process", process_matches)) => {
            let path = process_matches.get_one::<String>("path").unwrap();
            handle_process_command(path, &config);
        }
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            handle_check_command(path);
        }
        Some(("formats", _)) => {
            handle_formats_command();
        }
        None => match matches.get_one::<String>("path") {
            Some(path) => handle_process_command(path, &config),
            None => std::process::exit(1),
        },
        _ => unreachable!(),
    }
}

/// Resolve configuration files and command-line overrides
fn load_config(matches: &ArgMatches, sub_matches: Option<&ArgMatches>) -> BtraceConfig {
    // Global flags may appear on either side of the subcommand name
    let lookup = |id: &str| {
        sub_matches
            .and_then(|sub| sub.get_one::<String>(id))
            .or_else(|| matches.get_one::<String>(id))
            .cloned()
    };

    let positional_format = match sub_matches {
        Some(sub) => sub
            .try_get_one::<String>("format")
            .ok()
            .flatten()
            .cloned(),
        None => matches.get_one::<String>("format").cloned(),
    };

    let settings = CliSettings {
        config_file: lookup("config").map(PathBuf::from),
        format: positional_format.or_else(|| lookup("output-format")),
        log_level: lookup("log-level"),
    };

    BtraceConfig::load(&settings).unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

/// `RUST_LOG` wins over the configured level
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the process command
fn handle_process_command(path: &str, config: &BtraceConfig) {
    let spec = ProcessingSpec::from_string(&config.output.format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for format in available_formats() {
            eprintln!("  {}", format);
        }
        std::process::exit(1);
    });

    match process_file(path, &spec) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the check command
fn handle_check_command(path: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    match parse_program(&source) {
        Ok(program) => println!("{}: ok, {} probe(s)", path, program.len()),
        Err(e) => {
            eprintln!("{}: {}", path, e);
            std::process::exit(1);
        }
    }
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:");
    for format in available_formats() {
        println!("  {}", format);
    }
    println!("\ntoken-* formats show structural tokens only; raw text is captured by the parser.");
}
