// src/track.rs
//
// Longitudinal tracking: in which known months does each of the latest
// month's companies show up?
//
// Cost is companies × months lookups of a month's company list. The fetch
// cache keeps that to one network pass per page; the runner additionally
// memoizes whole months so repeated lookups skip the re-parse too.

use crate::data::{Company, TrackedCompany};
use crate::error::Result;

/// For every company in `latest`, walk `all_months` in the given order,
/// resolve each month's thread, load its companies and record name matches.
///
/// Result is sorted by `months_count`, highest first; the sort is stable so
/// ties keep `latest`'s order. Resolve and fetch errors abort the run.
pub fn track_companies<R, F>(
    latest: &[Company],
    all_months: &[String],
    mut resolve_thread: R,
    mut fetch_companies: F,
) -> Result<Vec<TrackedCompany>>
where
    R: FnMut(&str) -> Result<String>,
    F: FnMut(&str) -> Result<Vec<Company>>,
{
    let mut tracked = Vec::with_capacity(latest.len());

    for company in latest {
        let mut entry = TrackedCompany::new(company.clone());

        for month in all_months {
            let thread_url = resolve_thread(month)?;
            let companies = fetch_companies(&thread_url)?;

            if let Some(ad) = companies.iter().find(|c| c.same_name(company)) {
                entry.record(month, ad.clone());
            }
        }
        logd!("{}: {} month(s)", company.name, entry.months_count);
        tracked.push(entry);
    }

    tracked.sort_by(|a, b| b.months_count.cmp(&a.months_count));
    Ok(tracked)
}
