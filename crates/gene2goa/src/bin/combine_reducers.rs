//! Replay a few actions through the toy reducers and the save middleware

use clap::Parser;
use gene2goa::actions::{Action, HydrateAction, ItemsAction, UserAction};
use gene2goa::report::print_snapshot;
use gene2goa::{logger, setup};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Replay demo actions through the combined reducers")]
struct Cli {
    /// Config file (defaults to .gene2goa.toml discovery)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = setup::load_config(cli.config.as_deref())?;
    logger::init(&loaded.config.log_level);
    loaded.log();

    let store = setup::build_audited_store(&loaded.config);
    print_snapshot("store state after initialization", &store.state())?;

    let actions: Vec<Action> = vec![
        Action::other("AN_ACTION"),
        UserAction::set_name("bob").into(),
        HydrateAction::hydrate_name("tucker").into(),
        ItemsAction::add_item("apple").into(),
    ];

    for action in actions {
        let label = format!("store state after action {}", action.kind());
        store.dispatch(action);
        print_snapshot(&label, &store.state())?;
    }

    Ok(())
}
