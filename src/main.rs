//! Lau Radix - Main entrypoint.
//!
//! This is the main entry point for the Lau Radix command line tool.
//! It loads configuration, initializes the logging system, and runs the
//! requested command against a word list.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use lau_radix_lib::config::{LauConfig, LogConfig};
use lau_radix_lib::corpus::{build_trie, load_word_list, uncovered};
use lau_radix_lib::data_structures::LauTrie;
use lau_radix_lib::error::{get_error_reporting, ErrorContext, LauError, LauResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lau Radix.
#[derive(Parser, Debug)]
#[clap(name = "Lau Radix", version, author, about)]
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
    /// Reduce a word list to a bounded set of wildcard patterns
    Reduce {
        /// Word list, one word per line
        #[clap(short, long, value_parser)]
        input: PathBuf,

        /// Maximum number of patterns to keep
        #[clap(short, long)]
        target: Option<usize>,

        /// Wildcard marker appended to collapsed prefixes
        #[clap(short, long)]
        replacement: Option<char>,

        /// Maximum number of reduction steps
        #[clap(long)]
        max_attempts: Option<usize>,

        /// Write the patterns here instead of stdout
        #[clap(short, long, value_parser)]
        output: Option<PathBuf>,

        /// Fail if any input word is left without a covering pattern
        #[clap(long)]
        verify: bool,
    },

    /// Look words and prefixes up in a word list
    Query {
        /// Word list, one word per line
        #[clap(short, long, value_parser)]
        input: PathBuf,

        /// Words to look up
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// Print statistics about the trie built from a word list
    Stats {
        /// Word list, one word per line
        #[clap(short, long, value_parser)]
        input: PathBuf,
    },

    /// Print the trie built from a word list
    Dump {
        /// Word list, one word per line
        #[clap(short, long, value_parser)]
        input: PathBuf,
    },

    /// Validate the configuration file
    ValidateConfig,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so command output can be piped.
fn init_logging(log: &LogConfig) -> LauResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
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

    result.map_err(|e| LauError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn load_trie(input: &Path, config: &LauConfig) -> LauResult<(Vec<String>, LauTrie)> {
    let words = load_word_list(input)?;
    let trie = build_trie(&words, config.trie_config())?;
    Ok((words, trie))
}

fn write_output(output: Option<&Path>, contents: &str) -> LauResult<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, contents)?;
            info!("Output written to {:?}", path);
        }
        None => print!("{contents}"),
    }
    Ok(())
}

fn run(command: Command, config: &LauConfig) -> LauResult<()> {
    match command {
        Command::Reduce {
            input,
            target,
            replacement,
            max_attempts,
            output,
            verify,
        } => {
            let (words, mut trie) = load_trie(&input, config)?;

            let mut options = config.reduction.to_options()?;
            if let Some(target) = target {
                options.target = target;
            }
            if let Some(replacement) = replacement {
                options.replacement = replacement;
            }
            if max_attempts.is_some() {
                options.max_attempts = max_attempts;
            }

            let report = trie.reduce(&options)?;
            let patterns = trie.get_words();
            info!(
                before = report.words_before,
                after = report.words_after,
                collapsed = report.subtrees_collapsed,
                removed = report.roots_removed,
                "Reduced {:?}",
                input
            );

            if verify {
                let missing = uncovered(&words, &patterns, options.replacement);
                if !missing.is_empty() {
                    return Err(LauError::Custom(format!(
                        "{} words are not covered by the reduced list, first: {:?}",
                        missing.len(),
                        missing[0]
                    )));
                }
                info!("Every input word is covered");
            }

            let mut contents = patterns.join("\n");
            if !contents.is_empty() {
                contents.push('\n');
            }
            write_output(output.as_deref(), &contents)
        }
        Command::Query { input, words } => {
            let (_, trie) = load_trie(&input, config)?;
            for word in words {
                println!(
                    "{word}\texists={}\tsub_exists={}\tcount={}",
                    trie.exists(&word),
                    trie.sub_exists(&word),
                    trie.multiplicity(&word)
                );
            }
            Ok(())
        }
        Command::Stats { input } => {
            let (words, trie) = load_trie(&input, config)?;
            println!("words read:      {}", words.len());
            println!("distinct words:  {}", trie.unique_word_count());
            println!("nodes:           {}", trie.node_count());
            println!("leaves:          {}", trie.get_leaves().len());
            println!("longest string:  {:?}", trie.get_longest_string());
            println!("valid:           {}", trie.validate());
            Ok(())
        }
        Command::Dump { input } => {
            let (_, trie) = load_trie(&input, config)?;
            print!("{trie}");
            Ok(())
        }
        Command::ValidateConfig => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let toml = toml::to_string_pretty(&LauConfig::default())?;
            write_output(Some(&output), &toml)
        }
    }
}

fn fail(error: LauError, component: &str) -> ! {
    get_error_reporting().report(ErrorContext::new(error, component));
    process::exit(1);
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    // Configuration drives the log setup, so a load failure is logged with defaults
    let initialized = lau_radix_lib::init(args.config.as_deref());
    let log = initialized
        .as_ref()
        .map(|global| global.get().log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log) {
        eprintln!("{e}");
        process::exit(1);
    }

    let global = match initialized {
        Ok(global) => global,
        Err(e) => fail(e, "config"),
    };

    if let Err(e) = run(args.command, global.get()) {
        fail(e, "lau_radix");
    }
}
