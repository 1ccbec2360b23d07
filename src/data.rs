// src/data.rs
//
// Plain records that flow through the pipeline.
//
// - Thread: one monthly hiring thread found on the listing page.
// - Company: one normalized posting (name + permalink).
// - MonthPair / DiffResult / MonthDiff: inputs and outputs of the diff step.
// - TrackedCompany / Ad: output of longitudinal tracking.
//
// Everything here is serialized with camelCase keys so the JSON output keeps
// the field names downstream consumers already expect.

use serde::{Deserialize, Serialize};

/// A hiring thread. `month` is the bare month token from the title ("March"),
/// never a full date; threads from different years share the same label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub month: String,
    pub link: String,
}

/// One company posting. Two companies are "the same" when their names match
/// exactly (case-sensitive); the link is only carried along.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub link: String,
}

impl Company {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self { name: name.into(), link: link.into() }
    }

    #[inline]
    pub fn same_name(&self, other: &Company) -> bool {
        self.name == other.name
    }
}

/// Two chronologically adjacent months; `month1` is the earlier one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthPair {
    pub month1: String,
    pub month2: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub new_companies: Vec<Company>,
    pub old_companies: Vec<Company>,
}

/// Diff of one month pair, as written to the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDiff {
    #[serde(flatten)]
    pub months: MonthPair,
    #[serde(flatten)]
    pub diff: DiffResult,
}

/// A posting snapshot tagged with the month it was found in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    #[serde(flatten)]
    pub company: Company,
    pub month: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedCompany {
    #[serde(flatten)]
    pub company: Company,
    pub months: Vec<String>,
    pub months_count: usize,
    pub ads: Vec<Ad>,
}

impl TrackedCompany {
    pub fn new(company: Company) -> Self {
        Self { company, months: Vec::new(), months_count: 0, ads: Vec::new() }
    }

    pub fn record(&mut self, month: &str, ad: Company) {
        self.months.push(s!(month));
        self.months_count += 1;
        self.ads.push(Ad { company: ad, month: s!(month) });
    }
}
