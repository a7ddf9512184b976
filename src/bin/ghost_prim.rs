//! `ghost-prim` - print the minimum spanning tree cost of an edge-list file.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ghost_prim::EdgeList;

#[derive(Parser)]
#[command(name = "ghost-prim")]
#[command(about = "Minimum spanning tree cost of an edge-list file", long_about = None)]
struct Cli {
    /// Edge list: a header line, then one `from to cost` triple per line
    file: PathBuf,

    /// Print the full run summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print the exact total instead of truncating it to an integer
    #[arg(long, default_value_t = false)]
    float: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let file = File::open(&cli.file)
        .with_context(|| format!("failed to open {}", cli.file.display()))?;
    let list = EdgeList::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", cli.file.display()))?;
    tracing::info!(edges = list.len(), path = %cli.file.display(), "edge list loaded");

    let summary = list.summarize().context("spanning tree computation failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if let Some(header) = &list.header {
        println!("{header}");
    }
    if cli.float {
        println!("{}", summary.total_cost);
    } else {
        // Saturating cast: an infinite total prints as i64::MAX.
        #[allow(clippy::cast_possible_truncation)]
        let truncated = summary.total_cost as i64;
        println!("{truncated}");
    }
    Ok(())
}
