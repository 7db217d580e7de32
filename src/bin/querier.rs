use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use page_index::{
    documents::PageDirectory,
    index::InvertedIndex,
    search::{search, SearchResults},
};

mod common;

#[derive(Parser)]
#[command(name = "querier")]
#[command(about = "Answers queries read from the standard input, one per line")]
#[command(version)]
struct Cli {
    /// Page directory produced by the crawler
    page_directory: PathBuf,

    /// Index file produced by the indexer
    index_filename: PathBuf,

    /// Maximum number of documents per query
    #[arg(long)]
    limit: Option<usize>,

    /// Print each answer as a JSON object
    #[arg(long)]
    json: bool,
}

fn print_results<W: Write>(out: &mut W, results: &SearchResults, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, results)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Query: {}", results.normalized)?;
    if !results.matched {
        writeln!(out, "No documents match.")?;
    }
    for document in results.documents.iter() {
        writeln!(out, "{}", document)?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let pages = PageDirectory::open(&cli.page_directory)?;
    let index = InvertedIndex::load(&cli.index_filename).with_context(|| {
        format!(
            "cannot load index from '{}'",
            cli.index_filename.display()
        )
    })?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout().lock();

    loop {
        if interactive {
            write!(stdout, "Query? ")?;
            stdout.flush()?;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                eprintln!("Error: {}", e);
                continue;
            }
            Some(Err(e)) => return Err(e).context("cannot read query"),
            None => break,
        };

        match search(&index, &pages, &line, cli.limit) {
            Ok(results) => {
                debug!("{} documents for '{}'", results.documents.len(), results.normalized);
                print_results(&mut stdout, &results, cli.json)?;
            }
            Err(e) => eprintln!("Error: {}", e),
        }
        stdout.flush()?;
    }

    Ok(())
}

fn main() -> ExitCode {
    common::init_logger();
    match common::parse_args::<Cli>() {
        Ok(cli) => common::report(run(cli)),
        Err(code) => code,
    }
}
