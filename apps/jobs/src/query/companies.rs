use std::collections::BTreeSet;

use crate::models::Job;

/// Distinct company names in ascending lexicographic order.
pub fn distinct_companies_sorted(jobs: &[Job]) -> Vec<&str> {
    jobs.iter()
        .map(|job| job.company.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn companies_starting_with<'a>(jobs: &'a [Job], prefix: &str) -> Vec<&'a str> {
    distinct_companies_sorted(jobs)
        .into_iter()
        .filter(|company| company.starts_with(prefix))
        .collect()
}

/// A company name of maximal length, counted in chars.
/// Which one wins among equally long names is unspecified.
pub fn longest_company_name(jobs: &[Job]) -> Option<&str> {
    jobs.iter()
        .map(|job| job.company.as_str())
        .max_by_key(|company| company.chars().count())
}

/// Mean company name length over every record, duplicates included.
pub fn average_company_name_length(jobs: &[Job]) -> Option<f64> {
    if jobs.is_empty() {
        return None;
    }
    let total: usize = jobs.iter().map(|job| job.company.chars().count()).sum();
    Some(total as f64 / jobs.len() as f64)
}
