use std::io;

use clap::Parser;
use mimalloc::MiMalloc;
use tracing::{info, warn};

use crate::{config::PlannerArgs, prompt::Prompt, session::Session};

mod config;
mod menu;
mod prompt;
mod session;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: PlannerArgs,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new(&cli.args);

    if let Some(path) = &cli.args.activities_file {
        match session.catalog.load_all(path, session.limits) {
            Ok(added) => info!("Starting with {} activities", added),
            Err(error) => warn!("{:#}", anyhow::Error::from(error)),
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompt = Prompt::new(stdin.lock(), stdout.lock());

    menu::run(&mut session, &mut prompt)
}
