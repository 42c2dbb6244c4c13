//! songwriter: command-line driver for editing song chord timelines

mod command;
mod config;

use std::process;

use command::{Command, Invocation, Target};
use songwriter_core::{Song, VariationId};
use songwriter_services::{EditSession, ProjectStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CliConfig;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("songwriter=debug")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match command::parse(&args) {
        Ok(inv) => inv,
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(1);
        }
    };

    let config = config::load_config();
    if let Err(e) = run(invocation, &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(invocation: Invocation, config: &CliConfig) -> songwriter_services::Result<()> {
    let dir = invocation.dir.unwrap_or_else(|| config.project.directory.clone());
    let store = ProjectStore::new(dir);

    let (id, command) = match invocation.target {
        Target::List => {
            for id in store.list()? {
                println!("{}", id);
            }
            return Ok(());
        }
        Target::Song { id, command } => (id, command),
    };

    let mut session = EditSession::with_store(store);
    match command {
        Command::Show => {
            let song = session.open(&id)?;
            print_song(song);
            return Ok(());
        }
        Command::New => {
            let defaults = &config.defaults;
            let song = session.new_song(&id);
            song.set_bpm(defaults.bpm);
            song.set_time_signature(&defaults.time_signature);
            if let Some(first) = song.variation_mut(VariationId(0)) {
                first.set_bars(defaults.bars);
            }
        }
        Command::AddVariation => {
            let bars = config.defaults.bars;
            let variation = session.open(&id)?.add_variation(bars);
            println!("Added variation {}", variation.0);
        }
        Command::Edit(action) => {
            session.open(&id)?;
            let outcome = session.apply(&id, action)?;
            tracing::debug!("{:?}", outcome);
        }
    }

    session.save(&id)?;
    if let Some(song) = session.song(&id) {
        print_song(song);
    }
    Ok(())
}

fn print_song(song: &Song) {
    println!(
        "{} ({}) {} {} {} bpm {}",
        song.name,
        song.id(),
        song.root(),
        song.mode,
        song.bpm(),
        song.time_signature()
    );
    let root = song.root_key();
    for variation in song.variations() {
        println!("variation {} ({} bars)", variation.id().0, variation.bars());
        for chord in variation.ordered() {
            println!(
                "  [{}] {:<8} {:>6.3} .. {:<6.3}",
                chord.id().0,
                chord.label(root, false),
                chord.start(),
                chord.end()
            );
        }
    }
}
