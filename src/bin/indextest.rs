use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use page_index::index::InvertedIndex;

mod common;

#[derive(Parser)]
#[command(name = "indextest")]
#[command(about = "Loads an index file and saves it again (round-trip check)")]
#[command(version)]
struct Cli {
    /// Index file to read
    old_index_filename: PathBuf,

    /// Index file to write
    new_index_filename: PathBuf,
}

fn run(cli: Cli) -> Result<()> {
    let index = InvertedIndex::load(&cli.old_index_filename).with_context(|| {
        format!(
            "failed to load index from '{}'",
            cli.old_index_filename.display()
        )
    })?;
    index.save(&cli.new_index_filename).with_context(|| {
        format!(
            "failed to save index to '{}'",
            cli.new_index_filename.display()
        )
    })
}

fn main() -> ExitCode {
    common::init_logger();
    match common::parse_args::<Cli>() {
        Ok(cli) => common::report(run(cli)),
        Err(code) => code,
    }
}
