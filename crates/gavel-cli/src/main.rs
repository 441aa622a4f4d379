//! Gavel CLI - Inspect relevance judgments and resolve benchmark datasets.
//!
//! # Usage
//!
//! ```bash
//! # Where does a dataset live on disk?
//! gavel path robust04
//! gavel path miracl-v1.0-en-dev
//!
//! # Summarize a qrels file or dataset
//! gavel stats msmarco-passage.dev-subset
//! gavel stats path/to/qrels.txt --json
//!
//! # Look up a single judgment
//! gavel grade robust04 301 FBIS3-10082
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use gavel_core::registry;
use gavel_core::RelevanceJudgments;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Inspect relevance judgments (qrels) for IR evaluation benchmarks.
#[derive(Parser)]
#[command(name = "gavel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the resolved path for a dataset name or symbolic string
    Path {
        /// Dataset name, e.g. "robust04" or "miracl-v1.0-en-dev"
        dataset: String,
    },
    /// Load qrels and print query and judgment counts
    Stats {
        /// Dataset name or qrels file path
        source: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the relevance grade for one (query, document) pair
    Grade {
        /// Dataset name or qrels file path
        source: String,
        /// Query identifier
        query_id: String,
        /// Document identifier
        doc_id: String,
    },
}

#[derive(Serialize)]
struct Stats<'a> {
    source: &'a str,
    queries: usize,
    judgments: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Command::Path { dataset } => {
            let path = registry::symbol_path(&dataset);
            println!("{}", path.display());
            if let Ok(len) = registry::resource_len(&path) {
                println!("{} bytes on disk", len);
            }
        }
        Command::Stats { source, json } => {
            let qrels = RelevanceJudgments::from_symbol(&source)?;
            let stats = Stats {
                source: &source,
                queries: qrels.num_queries(),
                judgments: qrels.num_judgments(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{}: {} queries, {} judgments", stats.source, stats.queries, stats.judgments);
            }
        }
        Command::Grade {
            source,
            query_id,
            doc_id,
        } => {
            let qrels = RelevanceJudgments::from_symbol(&source)?;
            if qrels.is_doc_judged(&query_id, &doc_id) {
                println!("{}", qrels.relevance_grade(&query_id, &doc_id));
            } else {
                println!("not judged");
            }
        }
    }

    Ok(())
}
