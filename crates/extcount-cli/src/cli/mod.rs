//! CLI for extcount.

use anyhow::Result;
use clap::Parser;
use extcount_core::{config, process_lines, write_report};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

/// Reads URLs from stdin, one per line, and prints how often each allow-listed
/// file extension occurs, most frequent first.
#[derive(Debug, Parser)]
#[command(name = "extcount")]
#[command(about = "Count allow-listed file extensions in URLs read from stdin", long_about = None)]
pub struct Cli {
    /// Newline-delimited allow-list file to use instead of the bundled one.
    #[arg(long, value_name = "PATH")]
    pub allowlist: Option<PathBuf>,

    /// Config file to read instead of ~/.config/extcount/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let stdin = io::stdin();
        let stdout = io::stdout();
        cli.run(stdin.lock(), BufWriter::new(stdout.lock()))
    }

    /// Resolve config, load the allow-list, tally `input` and write the report
    /// to `output`. Nothing is written if loading or reading fails.
    pub fn run<R: BufRead, W: Write>(self, input: R, output: W) -> Result<()> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load()?,
        };
        if let Some(path) = self.allowlist {
            cfg.allowlist = Some(path);
        }

        let allowed = cfg.load_allowlist()?;
        let (tally, stats) = process_lines(input, &allowed)?;
        tracing::info!(
            lines_read = stats.lines_read,
            lines_matched = stats.lines_matched,
            distinct = tally.len(),
            "input processed"
        );

        let report = tally.into_report();
        write_report(output, &report)?;
        Ok(())
    }
}
