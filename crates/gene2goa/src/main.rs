//! Resolve a gene id to UniProt, then fetch its GO annotations from QuickGO

use clap::Parser;
use gene2goa::report::print_snapshot;
use gene2goa::{fetch_annotations_for_gene, logger, setup};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Fetch GO annotations for a gene id")]
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

    log::info!("Starting gene2goa for {}", cli.gene_id);

    let store = setup::build_store();
    let client = setup::build_client(&config)?;

    print_snapshot("state before sending gene id", &store.state())?;
    fetch_annotations_for_gene(&store, &client, &cli.gene_id).await;
    print_snapshot("new state", &store.state())?;

    let state = store.state();
    log::info!(
        "Finished gene2goa for {}: {} annotations",
        cli.gene_id,
        state.goa.annotation_count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_gene_id_is_usage_error() {
        let err = Cli::try_parse_from(["gene2goa"]).unwrap_err();

        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_gene_id_and_config_are_parsed() {
        let cli = Cli::try_parse_from(["gene2goa", "HBA1", "--config", "local.toml"]).unwrap();

        assert_eq!(cli.gene_id, "HBA1");
        assert_eq!(cli.config, Some(PathBuf::from("local.toml")));
    }
}
