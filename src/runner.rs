// src/runner.rs
//
// Top-level pipeline: threads → pages → companies → diff / track → Report.
// Everything a run needs is owned by `Session`; nothing is global.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use crate::{
    config::options::{Options, Settings, WhichMonths},
    core::{Fetcher, HttpTransport, Transport},
    data::{Company, MonthDiff, MonthPair, Thread},
    diff::{diff, month_pairs},
    error::{Result, ScrapeError},
    progress::{NullProgress, Progress},
    report::{ConsoleSink, FileSink, OutputSink, Report},
    scrape::{companies_for_thread, list_threads, thread_url_for_month},
    specs::{HackerNews, SiteAdapter},
    track::track_companies,
};

/// One scrape run: settings, the page adapter, and the run's only fetcher
/// (and therefore its only cache).
pub struct Session {
    settings: Settings,
    site: Box<dyn SiteAdapter>,
    fetcher: Fetcher,
}

impl Session {
    /// Live session against the configured site over HTTP.
    pub fn new(settings: Settings) -> Result<Self> {
        let transport = HttpTransport::new(&settings.user_agent, settings.http_timeout)?;
        let site = HackerNews::new(&settings)?;
        Ok(Self::with_parts(settings, Box::new(site), Box::new(transport)))
    }

    pub fn with_parts(
        settings: Settings,
        site: Box<dyn SiteAdapter>,
        transport: Box<dyn Transport>,
    ) -> Self {
        let fetcher = Fetcher::new(transport, settings.request_pause);
        Self { settings, site, fetcher }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    pub fn threads(&mut self) -> Result<Vec<Thread>> {
        list_threads(&mut self.fetcher, self.site.as_ref())
    }

    pub fn companies_for_thread(&mut self, thread_url: &str) -> Result<Vec<Company>> {
        companies_for_thread(&mut self.fetcher, self.site.as_ref(), thread_url, self.settings.max_pages)
    }
}

/// Per-run memo of whole months, keyed by thread URL.
struct MonthCompanies<'s> {
    session: &'s mut Session,
    memo: HashMap<String, Vec<Company>>,
}

impl<'s> MonthCompanies<'s> {
    fn new(session: &'s mut Session) -> Self {
        Self { session, memo: HashMap::new() }
    }

    fn get(&mut self, thread_url: &str) -> Result<Vec<Company>> {
        if let Some(hit) = self.memo.get(thread_url) {
            return Ok(hit.clone());
        }
        let companies = self.session.companies_for_thread(thread_url)?;
        self.memo.insert(s!(thread_url), companies.clone());
        Ok(companies)
    }
}

/// Run the pipeline selected by `options.which_months`.
pub fn run(
    options: &Options,
    session: &mut Session,
    progress: Option<&mut dyn Progress>,
) -> Result<Report> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    progress.log("Fetching thread listing…");
    let threads = session.threads()?;

    let report = match options.which_months {
        WhichMonths::LastTwo => last_two(session, &threads, progress),
        WhichMonths::All => all_months(session, &threads, progress),
        WhichMonths::Companies => all_companies(session, &threads, progress),
    };
    progress.finish();
    let report = report?;
    logf!(
        "{} run done, {} network request(s)",
        options.which_months.as_str(),
        session.fetcher().network_requests()
    );
    Ok(report)
}

/// Hand a finished report to the sink the options ask for.
pub fn emit(report: &Report, options: &Options, settings: &Settings) -> Result<Option<PathBuf>> {
    if options.save_as_file {
        FileSink::new(&settings.out_dir).emit(report)
    } else {
        ConsoleSink::new(io::stdout().lock()).emit(report)
    }
}

/* ---------------- Modes ---------------- */

fn require(threads: &[Thread], needed: usize) -> Result<()> {
    if threads.len() < needed {
        return Err(ScrapeError::NotEnoughThreads { needed, found: threads.len() });
    }
    Ok(())
}

fn month_diff(
    months: &mut MonthCompanies<'_>,
    threads: &[Thread],
    pair: MonthPair,
) -> Result<MonthDiff> {
    let url1 = thread_url_for_month(threads, &pair.month1)?;
    let url2 = thread_url_for_month(threads, &pair.month2)?;

    let companies1 = months.get(url1)?;
    let companies2 = months.get(url2)?;
    let result = diff(&companies1, &companies2);

    logf!(
        "{} → {}: {} new, {} recurring",
        pair.month1,
        pair.month2,
        result.new_companies.len(),
        result.old_companies.len()
    );
    Ok(MonthDiff { months: pair, diff: result })
}

fn last_two(
    session: &mut Session,
    threads: &[Thread],
    progress: &mut dyn Progress,
) -> Result<Report> {
    require(threads, 2)?;
    let pair = month_pairs(&threads[..2]).remove(0);

    progress.begin(1);
    let mut months = MonthCompanies::new(session);
    let label = join!(&pair.month1, " → ", &pair.month2);
    let result = month_diff(&mut months, threads, pair)?;

    progress.item_done(&label);
    Ok(Report::LastTwo { result })
}

fn all_months(
    session: &mut Session,
    threads: &[Thread],
    progress: &mut dyn Progress,
) -> Result<Report> {
    require(threads, 2)?;
    let pairs = month_pairs(threads);

    progress.begin(pairs.len());
    let mut months = MonthCompanies::new(session);
    let mut all_results = Vec::with_capacity(pairs.len());

    for pair in pairs {
        let label = join!(&pair.month1, " → ", &pair.month2);
        all_results.push(month_diff(&mut months, threads, pair)?);
        progress.item_done(&label);
    }

    Ok(Report::AllMonths {
        all_months: threads.iter().map(|t| t.month.clone()).collect(),
        all_results,
    })
}

fn all_companies(
    session: &mut Session,
    threads: &[Thread],
    progress: &mut dyn Progress,
) -> Result<Report> {
    require(threads, 1)?;
    let all: Vec<String> = threads.iter().map(|t| t.month.clone()).collect();

    let mut months = MonthCompanies::new(session);
    let latest = months.get(&threads[0].link)?;

    progress.begin(latest.len());
    progress.log(&format!("Tracking {} companies over {} months…", latest.len(), all.len()));

    let all_companies = track_companies(
        &latest,
        &all,
        |month| thread_url_for_month(threads, month).map(String::from),
        |url| months.get(url),
    )?;

    for t in &all_companies {
        progress.item_done(&t.company.name);
    }
    Ok(Report::AllCompanies { all_companies })
}
