use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use page_index::{
    base::DEFAULT_SLOTS,
    builder::{build_index, BuilderOptions},
    documents::PageDirectory,
};

mod common;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Builds an inverted index from a directory of crawled pages")]
#[command(version)]
struct Cli {
    /// Page directory produced by the crawler
    page_directory: PathBuf,

    /// File where the index is written
    index_filename: PathBuf,

    /// Number of slots of the word table
    #[arg(long, default_value_t = DEFAULT_SLOTS)]
    slots: usize,

    /// Show a spinner while indexing
    #[arg(long)]
    progress: bool,
}

fn run(cli: Cli) -> Result<()> {
    let pages = PageDirectory::open(&cli.page_directory)?;

    // Fail early if the index cannot be written
    File::create(&cli.index_filename)
        .with_context(|| format!("cannot write to '{}'", cli.index_filename.display()))?;

    let options = BuilderOptions {
        slots: cli.slots,
        progress: cli.progress,
        ..Default::default()
    };
    let index = build_index(&pages, &options).with_context(|| {
        format!(
            "failed to build index from '{}'",
            cli.page_directory.display()
        )
    })?;

    index.save(&cli.index_filename)?;
    info!("Index written to {}", cli.index_filename.display());
    Ok(())
}

fn main() -> ExitCode {
    common::init_logger();
    match common::parse_args::<Cli>() {
        Ok(cli) => common::report(run(cli)),
        Err(code) => code,
    }
}
