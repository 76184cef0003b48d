use crate::models::Job;

/// Records whose state code equals `state_code` exactly.
pub fn filter_by_state<'a>(jobs: &'a [Job], state_code: &str) -> Vec<&'a Job> {
    jobs.iter().filter(|job| job.state == state_code).collect()
}

/// Records located in `city`, `state_code`. Both comparisons are exact.
pub fn filter_by_city_and_state<'a>(
    jobs: &'a [Job],
    city: &str,
    state_code: &str,
) -> Vec<&'a Job> {
    jobs.iter()
        .filter(|job| job.state == state_code && job.city == city)
        .collect()
}

/// A reusable predicate matching records in `state_code`.
pub fn in_state(state_code: &str) -> impl Fn(&Job) -> bool + '_ {
    move |job: &Job| job.state == state_code
}

/// Conjunction of two predicates. `second` is only evaluated when `first` holds.
pub fn both<A, B>(first: A, second: B) -> impl Fn(&Job) -> bool
where
    A: Fn(&Job) -> bool,
    B: Fn(&Job) -> bool,
{
    move |job: &Job| first(job) && second(job)
}

pub fn matches<P>(job: &Job, predicate: P) -> bool
where
    P: Fn(&Job) -> bool,
{
    predicate(job)
}

/// First record satisfying `predicate`. Stops scanning at the first hit.
pub fn first_matching<P>(jobs: &[Job], predicate: P) -> Option<&Job>
where
    P: Fn(&Job) -> bool,
{
    jobs.iter().find(|job| predicate(job))
}

/// First record whose title contains `search_term` (case-sensitive).
pub fn first_job_matching_title_substring<'a>(
    jobs: &'a [Job],
    search_term: &str,
) -> Option<&'a Job> {
    first_matching(jobs, |job| job.title.contains(search_term))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::query::fixtures::sample_jobs;
    use crate::query::juniors::is_junior_job;

    #[test]
    fn test_filter_by_state_keeps_order_and_only_matches() {
        let jobs = sample_jobs();
        let oregon = filter_by_state(&jobs, "OR");
        let titles: Vec<&str> = oregon.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Junior Developer",
                "Jr. Project Manager",
                "Data Analyst",
                "JUNIOR Designer"
            ]
        );
        assert!(oregon.iter().all(|j| j.state == "OR"));
        assert!(oregon.len() <= jobs.len());
    }

    #[test]
    fn test_filter_by_state_is_case_sensitive() {
        let jobs = sample_jobs();
        assert!(filter_by_state(&jobs, "or").is_empty());
    }

    #[test]
    fn test_filter_by_city_and_state_requires_both() {
        let jobs = sample_jobs();
        let portland = filter_by_city_and_state(&jobs, "Portland", "OR");
        assert_eq!(portland.len(), 3);
        assert!(portland
            .iter()
            .all(|j| j.city == "Portland" && j.state == "OR"));
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_by_state(&[], "OR").is_empty());
        assert!(filter_by_city_and_state(&[], "Portland", "OR").is_empty());
        assert!(first_job_matching_title_substring(&[], "Developer").is_none());
    }

    #[test]
    fn test_composed_predicate() {
        let jobs = sample_jobs();
        let california_junior = both(in_state("CA"), is_junior_job);
        let hit = first_matching(&jobs, &california_junior).unwrap();
        assert_eq!(hit.title, "Junior QA Tester");
        assert!(matches(hit, &california_junior));
        assert!(!matches(&jobs[1], &california_junior));
    }

    #[test]
    fn test_title_search_first_hit() {
        let jobs = sample_jobs();
        let hit = first_job_matching_title_substring(&jobs, "Engineer").unwrap();
        assert_eq!(hit.company, "Globex");
        assert!(first_job_matching_title_substring(&jobs, "engineer").is_none());
    }

    #[test]
    fn test_first_matching_short_circuits() {
        let jobs = sample_jobs();
        let inspected = Cell::new(0);
        let hit = first_matching(&jobs, |job| {
            inspected.set(inspected.get() + 1);
            job.company == "Initech"
        });
        assert!(hit.is_some());
        assert_eq!(inspected.get(), 3);
    }
}
