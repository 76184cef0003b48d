use crate::models::Job;

/// Loose title heuristic: the lowercased title contains `junior` or `jr`.
///
/// This is a plain substring test, so `jr` also matches inside unrelated words.
pub fn is_junior_job(job: &Job) -> bool {
    let title = job.title.to_lowercase();
    title.contains("junior") || title.contains("jr")
}

/// The first `n` records satisfying `predicate`, in original order.
/// Scanning stops after the n-th hit.
pub fn first_n_matching<P>(jobs: &[Job], n: usize, predicate: P) -> Vec<&Job>
where
    P: Fn(&Job) -> bool,
{
    if n == 0 {
        return Vec::new();
    }
    let mut selected = Vec::new();
    for job in jobs {
        if predicate(job) {
            selected.push(job);
            if selected.len() == n {
                break;
            }
        }
    }
    selected
}

/// The first `n` junior jobs in original order.
pub fn first_n_junior_jobs(jobs: &[Job], n: usize) -> Vec<&Job> {
    first_n_matching(jobs, n, is_junior_job)
}

/// Captions of the records selected by [`first_n_junior_jobs`].
pub fn captions_of_first_n_junior_jobs(jobs: &[Job], n: usize) -> Vec<&str> {
    first_n_junior_jobs(jobs, n)
        .into_iter()
        .map(|job| job.caption.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::query::fixtures::{job, sample_jobs};

    #[test]
    fn test_is_junior_job_examples() {
        assert!(!is_junior_job(&job("Senior Major Engineer", "A", "B", "CA")));
        assert!(is_junior_job(&job("Jr. Project Manager", "A", "B", "CA")));
        assert!(is_junior_job(&job("JUNIOR Designer", "A", "B", "CA")));
    }

    #[test]
    fn test_jr_matches_inside_words() {
        // Unanchored substring match: "Dijkstra" has no "jr", "Bjrn" does.
        assert!(!is_junior_job(&job("Dijkstra Fan", "A", "B", "CA")));
        assert!(is_junior_job(&job("Bjrn Systems Admin", "A", "B", "CA")));
    }

    #[test]
    fn test_first_three_junior_jobs() {
        let jobs = sample_jobs();
        let juniors = first_n_junior_jobs(&jobs, 3);
        let titles: Vec<&str> = juniors.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Junior Developer", "Jr. Project Manager", "Junior QA Tester"]
        );
        assert!(juniors.iter().all(|j| is_junior_job(j)));
    }

    #[test]
    fn test_selection_stops_after_nth_hit() {
        let jobs = sample_jobs();
        let inspected = Cell::new(0);
        let juniors = first_n_matching(&jobs, 2, |job| {
            inspected.set(inspected.get() + 1);
            is_junior_job(job)
        });
        assert_eq!(juniors.len(), 2);
        // Hits at positions 0 and 2; nothing after the second is examined.
        assert_eq!(inspected.get(), 3);
    }

    #[test]
    fn test_zero_requested_examines_nothing() {
        let jobs = sample_jobs();
        let inspected = Cell::new(0);
        let none = first_n_matching(&jobs, 0, |_| {
            inspected.set(inspected.get() + 1);
            true
        });
        assert!(none.is_empty());
        assert_eq!(inspected.get(), 0);
    }

    #[test]
    fn test_fewer_matches_than_requested() {
        let jobs = sample_jobs();
        assert_eq!(first_n_junior_jobs(&jobs, 10).len(), 4);
        assert!(first_n_junior_jobs(&jobs, 0).is_empty());
        assert!(first_n_junior_jobs(&[], 3).is_empty());
    }

    #[test]
    fn test_captions_follow_selection() {
        let jobs = sample_jobs();
        let captions = captions_of_first_n_junior_jobs(&jobs, 2);
        assert_eq!(
            captions,
            vec![
                "Acme is looking for a Junior Developer in Portland, OR",
                "Initech is looking for a Jr. Project Manager in Portland, OR",
            ]
        );
    }
}
