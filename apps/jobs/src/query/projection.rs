use crate::dates::DateConverter;
use crate::errors::ParseError;
use crate::models::Job;

/// Posting dates of the first `limit` records, rewritten through `converter`.
/// The first unparseable date aborts the whole projection.
pub fn converted_dates(
    jobs: &[Job],
    converter: &DateConverter,
    limit: usize,
) -> Result<Vec<String>, ParseError> {
    jobs.iter()
        .take(limit)
        .map(|job| converter.convert(&job.date_time_string))
        .collect()
}
