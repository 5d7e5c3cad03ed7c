//! Command implementations for the Shabda CLI.

use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::interactive::run_interactive;
use crate::cli::output::*;
use crate::config::IndexConfig;
use crate::error::Result;
use crate::index::IndexEngine;
use crate::source::FolderSource;

/// Execute a CLI command.
pub fn execute_command(args: ShabdaArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Search(search_args) => search_word(search_args, &config, &args),
        Command::Autocomplete(autocomplete_args) => {
            autocomplete(autocomplete_args, &config, &args)
        }
        Command::Interactive(interactive_args) => {
            interactive(interactive_args, &config, &args)
        }
        Command::Tree(tree_args) => show_tree(tree_args, &config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &config, &args),
    }
}

/// Load the index configuration, falling back to the defaults.
fn load_config(args: &ShabdaArgs) -> Result<IndexConfig> {
    match &args.config {
        Some(path) => {
            debug!("Loading configuration from: {}", path.display());
            IndexConfig::from_file(path)
        }
        None => Ok(IndexConfig::default()),
    }
}

/// Index every accepted file of `folder` into a fresh engine.
pub fn build_engine(folder: &Path, config: &IndexConfig) -> Result<IndexEngine> {
    let mut engine = IndexEngine::new(config)?;
    let source = FolderSource::new(folder, config);
    let words = engine.index_source(&source)?;
    info!(
        "Index ready: {} documents, {} words from {}",
        engine.document_count(),
        words,
        folder.display()
    );
    Ok(engine)
}

/// Run an exact word search and collect the results.
pub fn search_report(engine: &IndexEngine, query: &str) -> SearchReport {
    let start = Instant::now();
    let occurrences = engine.search_word(query).to_vec();

    SearchReport {
        query: query.to_string(),
        total_matches: occurrences.len(),
        duration_ms: start.elapsed().as_secs_f64() * 1000.0,
        occurrences,
    }
}

/// Run an autocomplete and collect the results.
///
/// When `dump_path` is given and at least one word matches, the full node
/// dump of every suggestion is written there.
pub fn autocomplete_report(
    engine: &IndexEngine,
    prefix: &str,
    dump_path: Option<&Path>,
) -> Result<AutocompleteReport> {
    let start = Instant::now();
    let matches = engine.autocomplete(prefix);
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    let suggestions: Vec<CompactMatch> = matches.iter().map(CompactMatch::from_match).collect();

    let full_output = match dump_path {
        Some(path) if !matches.is_empty() => {
            let dumps: Vec<NodeDump> = matches.iter().map(NodeDump::from_match).collect();
            write_full_dump(path, &dumps)?;
            info!("Wrote {} node dumps to {}", dumps.len(), path.display());
            Some(path.display().to_string())
        }
        _ => None,
    };

    Ok(AutocompleteReport {
        prefix: prefix.to_string(),
        total_matches: suggestions.len(),
        duration_ms,
        suggestions,
        full_output,
    })
}

fn search_word(args: &SearchArgs, config: &IndexConfig, cli_args: &ShabdaArgs) -> Result<()> {
    let engine = build_engine(&args.folder, config)?;
    let report = search_report(&engine, &args.word);

    output_result(
        &mut io::stdout().lock(),
        "Search completed",
        &report,
        cli_args,
    )
}

fn autocomplete(
    args: &AutocompleteArgs,
    config: &IndexConfig,
    cli_args: &ShabdaArgs,
) -> Result<()> {
    let engine = build_engine(&args.folder, config)?;
    let report = autocomplete_report(&engine, &args.prefix, Some(args.output.as_path()))?;

    output_result(
        &mut io::stdout().lock(),
        "Autocomplete completed",
        &report,
        cli_args,
    )
}

fn interactive(args: &InteractiveArgs, config: &IndexConfig, cli_args: &ShabdaArgs) -> Result<()> {
    let engine = build_engine(&args.folder, config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    run_interactive(&engine, stdin.lock(), &mut stdout, &args.output, cli_args)?;
    stdout.flush()?;
    Ok(())
}

fn show_tree(args: &TreeArgs, config: &IndexConfig, cli_args: &ShabdaArgs) -> Result<()> {
    let engine = build_engine(&args.folder, config)?;
    let report = TreeReport {
        nodes: engine.trie().node_count(),
        outline: engine.trie().to_string().lines().map(String::from).collect(),
    };

    output_result(&mut io::stdout().lock(), "Trie outline", &report, cli_args)
}

fn show_stats(args: &StatsArgs, config: &IndexConfig, cli_args: &ShabdaArgs) -> Result<()> {
    let engine = build_engine(&args.folder, config)?;

    output_result(
        &mut io::stdout().lock(),
        "Index statistics",
        &engine.stats(),
        cli_args,
    )
}
