//! get-sliders - extract avatar shape sliders from exported appearance XML.
//!
//! Export the avatar appearance from the viewer (Developer -> Avatar ->
//! Character Tests -> Appearance To XML), then run this on the dump to get
//! only the sliders of the body, head, hair or eyes. The XML output can be
//! imported on top of an existing or a new shape; `--text` prints the values
//! as the appearance editor shows them.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, ArgGroup, Parser};
use tracing::{debug, error};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use shape_sliders::prelude::*;

/// Extract avatar shape sliders from an exported appearance XML file
#[derive(Debug, Parser)]
#[command(name = "get-sliders")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .args(["body", "eyes", "hair", "head", "shape"])
        .multiple(false)
))]
struct Cli {
    /// Include body sliders
    #[arg(long)]
    body: bool,

    /// Include eye sliders
    #[arg(long)]
    eyes: bool,

    /// Include hair sliders
    #[arg(long)]
    hair: bool,

    /// Include head sliders
    #[arg(long)]
    head: bool,

    /// Include shape sliders (head and body)
    #[arg(long)]
    shape: bool,

    /// Output text instead of XML
    #[arg(long)]
    text: bool,

    /// Increase verbosity of output. Can be repeated.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show full error causes and debug logging
    #[arg(long)]
    debug: bool,

    /// Exported appearance XML file
    #[arg(env = "SHAPE_XML")]
    input: PathBuf,
}

impl Cli {
    fn mode(&self) -> OutputMode {
        if self.body {
            OutputMode::Body
        } else if self.eyes {
            OutputMode::Eyes
        } else if self.hair {
            OutputMode::Hair
        } else if self.head {
            OutputMode::Head
        } else if self.shape {
            OutputMode::Shape
        } else {
            OutputMode::All
        }
    }

    fn log_level(&self) -> LevelFilter {
        if self.debug {
            return LevelFilter::DEBUG;
        }
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };

    // Setup logging
    let filter = EnvFilter::builder()
        .with_default_directive(cli.log_level().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    debug!(?cli, mode = %cli.mode(), "parsed arguments");

    match cmd_extract(&cli.input, cli.mode(), cli.text) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.debug {
                error!("{e:?}");
            } else {
                error!("{e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn cmd_extract(input: &Path, mode: OutputMode, text: bool) -> Result<()> {
    let document = ShapeDocument::open(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let filter = ShapeFilter::new(&document, mode);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if text {
        let lines = filter
            .text_lines(&document)
            .context("Failed to format slider values")?;
        for line in lines {
            writeln!(out, "{line}")?;
        }
    } else {
        filter
            .filter(&document)
            .write_xml(&mut out)
            .context("Failed to write XML")?;
    }

    out.flush()?;
    Ok(())
}
