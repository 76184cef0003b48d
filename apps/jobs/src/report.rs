//! Plain-text rendering of query results for the command-line driver.

use std::collections::HashMap;

use crate::models::Job;
use crate::query::paginate;

/// One page of a numbered company menu. Numbering is 1-based and continues
/// across pages, e.g. page 2 of size 20 starts at `21.`.
pub fn company_menu(companies: &[&str], page_number: usize, page_size: usize) -> Vec<String> {
    let page = paginate(companies, page_number, page_size);
    if page.is_empty() {
        return Vec::new();
    }
    let first_number = (page_number - 1) * page_size + 1;
    page.iter()
        .enumerate()
        .map(|(i, company)| format!("{:02}. {company}", first_number + i))
        .collect()
}

/// `"{word} occurs {n} times"`, most frequent first, ties alphabetical.
pub fn word_count_lines(counts: &HashMap<String, usize>) -> Vec<String> {
    let mut entries: Vec<(&String, &usize)> = counts.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .into_iter()
        .map(|(word, n)| format!("{word} occurs {n} times"))
        .collect()
}

pub fn job_line(job: &Job) -> String {
    format!(
        "{} at {} ({}, {})",
        job.title, job.company, job.city, job.state
    )
}
