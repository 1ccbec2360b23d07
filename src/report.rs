// src/report.rs
//
// The output side of a run: one `Report`, handed to one `OutputSink`.
// - FileSink: pretty JSON into the output directory, fixed file names.
// - ConsoleSink: fixed-width tables for a terminal.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::consts::{FILE_ALL_COMPANIES, FILE_ALL_MONTHS, FILE_LAST_TWO};
use crate::core::sanitize::clip;
use crate::data::{MonthDiff, TrackedCompany};
use crate::error::{Result, ScrapeError};

const NAME_WIDTH: usize = 40;

/// Serializes to exactly one of
/// `{ allMonths, allResults }`, `{ result }`, `{ allCompanies }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    AllMonths {
        #[serde(rename = "allMonths")]
        all_months: Vec<String>,
        #[serde(rename = "allResults")]
        all_results: Vec<MonthDiff>,
    },
    LastTwo {
        result: MonthDiff,
    },
    AllCompanies {
        #[serde(rename = "allCompanies")]
        all_companies: Vec<TrackedCompany>,
    },
}

impl Report {
    pub fn file_name(&self) -> &'static str {
        match self {
            Report::AllMonths { .. } => FILE_ALL_MONTHS,
            Report::LastTwo { .. } => FILE_LAST_TWO,
            Report::AllCompanies { .. } => FILE_ALL_COMPANIES,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub trait OutputSink {
    /// Deliver the report. Returns the written path for file sinks.
    fn emit(&mut self, report: &Report) -> Result<Option<PathBuf>>;
}

/* ---------------- File ---------------- */

pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl OutputSink for FileSink {
    fn emit(&mut self, report: &Report) -> Result<Option<PathBuf>> {
        ensure_directory(&self.dir)?;
        let path = self.dir.join(report.file_name());
        fs::write(&path, report.to_json()?)?;
        logf!("wrote {}", path.display());
        Ok(Some(path))
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/* ---------------- Console ---------------- */

pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn month_diff(&mut self, d: &MonthDiff) -> std::io::Result<()> {
        writeln!(
            self.out,
            "{} → {}: {} new, {} recurring",
            d.months.month1,
            d.months.month2,
            d.diff.new_companies.len(),
            d.diff.old_companies.len()
        )?;
        let rows: Vec<[String; 2]> = d.diff.new_companies.iter().map(|c| ("new", c))
            .chain(d.diff.old_companies.iter().map(|c| ("old", c)))
            .map(|(status, c)| [s!(status), clip(&c.name, NAME_WIDTH)])
            .collect();
        let links = d.diff.new_companies.iter().chain(&d.diff.old_companies).map(|c| c.link.as_str());
        self.table(&["Status", "Company", "Link"], rows, links)?;
        writeln!(self.out)
    }

    fn tracked(&mut self, all: &[TrackedCompany]) -> std::io::Result<()> {
        let rows: Vec<[String; 2]> = all
            .iter()
            .map(|t| [t.months_count.to_string(), clip(&t.company.name, NAME_WIDTH)])
            .collect();
        let months: Vec<String> = all.iter().map(|t| t.months.join(", ")).collect();
        self.table(&["Months", "Company", "Seen in"], rows, months.iter().map(String::as_str))
    }

    /// Two fixed columns plus a free trailing one.
    fn table<'a>(
        &mut self,
        headers: &[&str; 3],
        rows: Vec<[String; 2]>,
        last: impl Iterator<Item = &'a str>,
    ) -> std::io::Result<()> {
        let w0 = rows.iter().map(|r| r[0].chars().count()).chain([headers[0].len()]).max().unwrap_or(0);
        let w1 = rows.iter().map(|r| r[1].chars().count()).chain([headers[1].len()]).max().unwrap_or(0);

        writeln!(self.out, "{:<w0$}  {:<w1$}  {}", headers[0], headers[1], headers[2])?;
        writeln!(self.out, "{}  {}  {}", "-".repeat(w0), "-".repeat(w1), "-".repeat(headers[2].len()))?;
        for (row, tail) in rows.iter().zip(last) {
            writeln!(self.out, "{:<w0$}  {:<w1$}  {}", row[0], row[1], tail)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit(&mut self, report: &Report) -> Result<Option<PathBuf>> {
        match report {
            Report::AllMonths { all_months, all_results } => {
                writeln!(self.out, "Months: {}\n", all_months.join(", "))?;
                for d in all_results {
                    self.month_diff(d)?;
                }
            }
            Report::LastTwo { result } => self.month_diff(result)?,
            Report::AllCompanies { all_companies } => self.tracked(all_companies)?,
        }
        self.out.flush()?;
        Ok(None)
    }
}
