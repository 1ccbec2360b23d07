// src/diff.rs
//
// Month-over-month comparison. Names are compared exactly; no fuzzy matching.

use crate::data::{Company, DiffResult, MonthPair, Thread};

/// Split `companies2` into companies absent from `companies1` (new) and
/// companies present in it (old). Both halves keep `companies2`'s order.
pub fn diff(companies1: &[Company], companies2: &[Company]) -> DiffResult {
    let mut out = DiffResult::default();

    for company in companies2 {
        let seen_before = companies1.iter().any(|c| c.same_name(company));
        if seen_before {
            out.old_companies.push(company.clone());
        } else {
            out.new_companies.push(company.clone());
        }
    }
    out
}

/// Pair every thread with the one listed after it (its predecessor, since
/// the listing is newest first). Three threads give two pairs.
pub fn month_pairs(threads: &[Thread]) -> Vec<MonthPair> {
    threads
        .windows(2)
        .map(|w| MonthPair { month1: w[1].month.clone(), month2: w[0].month.clone() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> Vec<Company> {
        names.iter().map(|n| Company::new(*n, format!("https://x.test/{n}"))).collect()
    }

    fn names(cs: &[Company]) -> Vec<&str> {
        cs.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn globex_recurs_initech_is_new() {
        let r = diff(&named(&["Acme", "Globex"]), &named(&["Globex", "Initech"]));
        assert_eq!(names(&r.new_companies), ["Initech"]);
        assert_eq!(names(&r.old_companies), ["Globex"]);
    }

    #[test]
    fn partitions_cover_the_second_list_exactly() {
        let a = named(&["Acme", "Globex", "Globex", "Hooli"]);
        let b = named(&["Zeta", "Hooli", "Acme", "Umbrella", "acme", "Hooli"]);
        let r = diff(&a, &b);

        assert_eq!(r.new_companies.len() + r.old_companies.len(), b.len());
        for c in &r.new_companies {
            assert!(!r.old_companies.iter().any(|o| o.same_name(c)));
            assert!(!a.iter().any(|x| x.same_name(c)));
        }
        for c in &r.old_companies {
            assert!(a.iter().any(|x| x.same_name(c)));
        }
        // case-sensitive: "acme" is not "Acme"
        assert_eq!(names(&r.new_companies), ["Zeta", "Umbrella", "acme"]);
        assert_eq!(names(&r.old_companies), ["Hooli", "Acme", "Hooli"]);
    }

    #[test]
    fn empty_sides() {
        let b = named(&["Acme"]);
        assert_eq!(names(&diff(&[], &b).new_companies), ["Acme"]);
        assert_eq!(diff(&b, &[]), DiffResult::default());
    }

    #[test]
    fn pairs_run_newest_to_oldest() {
        let threads: Vec<Thread> = ["April", "March", "February"]
            .iter()
            .map(|m| Thread { month: s!(*m), link: s!() })
            .collect();
        let pairs = month_pairs(&threads);
        assert_eq!(pairs.len(), 2);
        assert_eq!((pairs[0].month1.as_str(), pairs[0].month2.as_str()), ("March", "April"));
        assert_eq!((pairs[1].month1.as_str(), pairs[1].month2.as_str()), ("February", "March"));
        assert!(month_pairs(&threads[..1]).is_empty());
    }
}
