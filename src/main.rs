//! Trie Hash Generator - Main entrypoint.
//!
//! Loads configuration, initializes logging and runs one of the subcommands:
//! generating a matcher, validating the configuration, or writing a default
//! configuration file.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

use trie_hash_gen_lib::config::{ConfigLoader, LogConfig, TrieHashConfig, Validate, ENV_PREFIX};
use trie_hash_gen_lib::error::{report_error, ErrorContext, TrieHashError, TrieHashResult};
use trie_hash_gen_lib::generator::{GeneratorOptions, TrieHashGen};
use trie_hash_gen_lib::input::load_keywords;

/// Command line arguments for the trie hash generator.
#[derive(Parser, Debug)]
#[clap(name = "trie_hash_gen", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a keyword matcher function
    Generate(GenerateArgs),

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Arguments of the `generate` subcommand. Flags override configuration values.
#[derive(clap::Args, Debug)]
struct GenerateArgs {
    /// Keywords, in index order (appended after those read from --input)
    keywords: Vec<String>,

    /// File with keywords: a JSON array for .json, otherwise one per line
    #[clap(short, long, value_parser)]
    input: Option<PathBuf>,

    /// Write the generated code here instead of standard output
    #[clap(short, long, value_parser)]
    output: Option<PathBuf>,

    /// Spaces per nesting level
    #[clap(long)]
    indentation: Option<usize>,

    /// Name of the generated function
    #[clap(long)]
    function_name: Option<String>,

    /// Value returned when nothing matches
    #[clap(long, allow_negative_numbers = true)]
    no_match_value: Option<i32>,

    /// Emit default branches returning the no-match value
    #[clap(long)]
    default_branches: bool,

    /// Match ASCII letters regardless of case
    #[clap(long)]
    case_insensitive: bool,
}

impl GenerateArgs {
    /// Applies command-line overrides on top of the configured options.
    fn apply(&self, mut options: GeneratorOptions) -> GeneratorOptions {
        if let Some(indentation) = self.indentation {
            options.indentation = indentation;
        }
        if let Some(name) = &self.function_name {
            options.function_name = name.clone();
        }
        if let Some(value) = self.no_match_value {
            options.no_match_value = value;
        }
        options.default_branches |= self.default_branches;
        options.case_insensitive |= self.case_insensitive;
        options
    }
}

/// Initialize the logging system. Logs go to stderr so stdout carries only generated code.
fn init_logging(log: &LogConfig) -> TrieHashResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| TrieHashError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Generates the matcher and writes it out.
fn generate(args: &GenerateArgs, config: &TrieHashConfig) -> TrieHashResult<()> {
    let options = args.apply(config.generator.clone());
    options.validate()?;

    let mut keywords = match &args.input {
        Some(path) => load_keywords(path)?,
        None => Vec::new(),
    };
    keywords.extend(args.keywords.iter().cloned());

    let generator = TrieHashGen::with_options(keywords, options)?;
    let code = generator.generate();

    info!(
        keys = generator.trie().keys().len(),
        nodes = generator.trie().node_count(),
        max_depth = generator.trie().max_depth(),
        "Generated matcher {}",
        generator.options().function_name
    );

    match &args.output {
        Some(path) => write_file(path, &code)?,
        None => std::io::stdout().write_all(code.as_bytes())?,
    }
    Ok(())
}

/// Writes `contents` to `path`, creating parent directories.
fn write_file(path: &Path, contents: &str) -> TrieHashResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    info!("Wrote {:?}", path);
    Ok(())
}

/// Runs the selected subcommand.
fn run(command: &Command, config: TrieHashConfig) -> TrieHashResult<()> {
    match command {
        Command::Generate(args) => generate(args, &config),
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let toml = TrieHashConfig::default().to_toml()?;
            write_file(output, &toml)
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = <Args as clap::Parser>::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();

    // Logging settings come from the configuration when it loaded
    let log = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log) {
        eprintln!("{e}");
        process::exit(1);
    }
    trie_hash_gen_lib::init();

    let component = match &args.command {
        Command::Generate(_) => "generate",
        Command::Validate => "validate",
        Command::GenConfig { .. } => "gen-config",
    };

    let result = loaded
        .map_err(TrieHashError::from)
        .and_then(|config| run(&args.command, config));

    if let Err(error) = result {
        let mut context = ErrorContext::new(error, component);
        if let Some(path) = &args.config {
            context = context.with_details(format!("config file: {}", path.display()));
        }
        report_error(context);
        process::exit(1);
    }
}
