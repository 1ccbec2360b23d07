// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::options::{Options, Settings, WhichMonths};
use crate::progress::Progress;
use crate::runner::{self, Session};

/// Diff the companies posted in Hacker News "Who is hiring?" threads.
#[derive(Debug, Parser)]
#[command(name = "hiring_scrape", version, about)]
pub struct Args {
    /// Report to produce: last-two, all or companies
    #[arg(short, long, default_value = "last-two", value_parser = parse_which)]
    pub which: WhichMonths,

    /// Print a table instead of writing a JSON file
    #[arg(long)]
    pub print: bool,

    /// Directory for the JSON output
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Pause after every network request, in milliseconds
    #[arg(long)]
    pub pause_ms: Option<u64>,

    /// Submissions listing to read the threads from
    #[arg(long)]
    pub listing: Option<String>,
}

fn parse_which(s: &str) -> Result<WhichMonths, String> {
    s.parse()
}

impl Args {
    pub fn options(&self) -> Options {
        Options { save_as_file: !self.print, which_months: self.which }
    }

    /// Defaults, overridden by whatever flags were given.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(dir) = &self.out {
            settings.out_dir = dir.clone();
        }
        if let Some(ms) = self.pause_ms {
            settings.request_pause = Duration::from_millis(ms);
        }
        if let Some(url) = &self.listing {
            settings.listing_url = url.clone();
        }
        settings
    }
}

/// Status lines on stderr so stdout stays clean for `--print`.
pub struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self { done: 0, total: 0 }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        eprintln!("Done {label} ({}/{})", self.done, self.total);
    }
    fn finish(&mut self) {
        if self.total == 0 {
            eprintln!("Scrape complete"); // no counts if we never began
        } else {
            eprintln!("Scrape complete ({}/{})", self.done, self.total);
        }
    }
}

pub fn run(args: Args) -> crate::Result<()> {
    let options = args.options();
    let settings = args.settings();

    let mut session = Session::new(settings)?;
    let mut progress = ConsoleProgress::new();
    let report = runner::run(&options, &mut session, Some(&mut progress))?;

    if let Some(path) = runner::emit(&report, &options, session.settings())? {
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}
