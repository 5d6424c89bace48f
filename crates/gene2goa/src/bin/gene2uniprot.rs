//! Resolve a gene id to its UniProt accession

use clap::Parser;
use gene2goa::report::print_snapshot;
use gene2goa::{fetch_uniprot_id, logger, setup};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Resolve a gene id to its UniProt accession")]
struct Cli {
    /// Gene id, e.g. HBA1
    gene_id: String,

    /// Config file (defaults to .gene2goa.toml discovery)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = setup::load_config(cli.config.as_deref())?;
    logger::init(&loaded.config.log_level);
    loaded.log();
    let config = loaded.config;

    let store = setup::build_store();
    let client = setup::build_client(&config)?;

    print_snapshot("state before sending gene id", &store.state())?;
    fetch_uniprot_id(&store, &client, &cli.gene_id).await;
    print_snapshot("new state", &store.state())?;

    Ok(())
}
