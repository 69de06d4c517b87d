use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use memmap2::Mmap;
use rayon::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use sufx::config::{AppConfig, get_config_path};
use sufx::output::{self, OutputOptions, Printable};
use sufx::utils::construction_bar;
use sufx::{SuffixTreeBuilder, TreeError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sufx")]
#[command(about = "Build suffix trees over files and query them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Terminal symbol appended to the input, as a byte value
    #[arg(long, global = true)]
    sentinel: Option<u8>,

    /// Index Unicode scalar values instead of raw bytes
    #[arg(long, global = true)]
    chars: bool,

    /// Log construction details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the tree and show its statistics
    Stats {
        /// Input file
        file: PathBuf,
    },
    /// Check whether each pattern occurs in the file
    Contains {
        /// Input file
        file: PathBuf,

        /// Patterns to look up (evaluated in parallel)
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// List the start position of every occurrence of a pattern
    Occurrences {
        /// Input file
        file: PathBuf,

        /// Pattern to locate
        pattern: String,
    },
    /// Enumerate suffixes in ascending order
    Suffixes {
        /// Input file
        file: PathBuf,

        /// Stop after this many suffixes
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Check the tree's structural invariants
    Validate {
        /// Input file
        file: PathBuf,
    },
    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    fn input(&self) -> Option<&Path> {
        match self {
            Commands::Stats { file }
            | Commands::Contains { file, .. }
            | Commands::Occurrences { file, .. }
            | Commands::Suffixes { file, .. }
            | Commands::Validate { file } => Some(file),
            Commands::InitConfig { .. } => None,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("sufx: {:#}", err);
            if err.chain().any(|cause| cause.is::<TreeError>()) {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config_path = cli.config.clone().or_else(get_config_path);

    if let Commands::InitConfig { force } = &cli.command {
        return init_config(config_path.as_deref(), *force);
    }

    let config = match &config_path {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::default(),
    };

    let options = OutputOptions {
        json: cli.json,
        color: config.color && !cli.no_color,
    };

    let Some(path) = cli.command.input() else {
        return Ok(ExitCode::SUCCESS);
    };

    let input = map_input(path, &config)?;
    let show_progress = !cli.json && input.len() as u64 >= config.progress_threshold;
    let sentinel = cli.sentinel.unwrap_or(config.sentinel_byte);

    if cli.chars {
        let text = std::str::from_utf8(&input)
            .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
        let symbols: Vec<char> = text.chars().collect();
        execute(&symbols, char::from(sentinel), &cli.command, options, show_progress)
    } else {
        execute(&input[..], sentinel, &cli.command, options, show_progress)
    }
}

/// Memory-map the input; the tree borrows these bytes for its lifetime
fn map_input(path: &Path, config: &AppConfig) -> Result<Mmap> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let size = file.metadata()?.len();

    // Zero-length files cannot be mapped
    if size == 0 {
        return Err(TreeError::EmptyInput)
            .with_context(|| format!("Failed to build suffix tree for {}", path.display()));
    }

    if size > config.max_input_size {
        anyhow::bail!(
            "{} is {} bytes, above the max_input_size limit of {} bytes",
            path.display(),
            size,
            config.max_input_size
        );
    }

    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to map {}", path.display()))?;
    Ok(mmap)
}

fn execute<T: Printable>(
    symbols: &[T],
    sentinel: T,
    command: &Commands,
    options: OutputOptions,
    show_progress: bool,
) -> Result<ExitCode> {
    let bar = construction_bar(symbols.len() as u64 + 1, show_progress);
    let tree = SuffixTreeBuilder::new(symbols)
        .sentinel(sentinel)
        .on_progress(|done, _| bar.set_position(done as u64))
        .build()
        .context("Failed to build suffix tree")?;
    bar.finish_and_clear();

    match command {
        Commands::Stats { .. } => {
            output::print_stats(&tree.stats(), options)?;
        }
        Commands::Contains { patterns, .. } => {
            let results: Vec<(String, bool)> = patterns
                .par_iter()
                .map(|pattern| (pattern.clone(), tree.contains(&T::encode(pattern))))
                .collect();
            output::print_contains(&results, options)?;

            if results.iter().any(|(_, found)| !found) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Occurrences { pattern, .. } => {
            let positions = tree.occurrences(&T::encode(pattern));
            output::print_occurrences(pattern, &positions, options)?;
        }
        Commands::Suffixes { limit, .. } => {
            let rendered = tree
                .enumerate_suffixes()
                .take(limit.unwrap_or(usize::MAX))
                .map(|entry| (entry.start, T::render(&entry.symbols, sentinel)));
            output::print_suffixes(rendered, options)?;
        }
        Commands::Validate { .. } => {
            let result = tree.check();
            output::print_validation(&result, options)?;

            if result.is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::InitConfig { .. } => {}
    }

    Ok(ExitCode::SUCCESS)
}

fn init_config(path: Option<&Path>, force: bool) -> Result<ExitCode> {
    let path = path.context("Could not determine config directory")?;

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    AppConfig::default().save_to(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(ExitCode::SUCCESS)
}
