//! Read-only queries over an ordered slice of job records.
//!
//! Everything here borrows its input and returns either references into it
//! (in original order) or freshly computed aggregates. Nothing logs, nothing
//! mutates, nothing fails on well-formed input.

pub mod companies;
pub mod filters;
pub mod juniors;
pub mod paging;
pub mod projection;
pub mod snippets;

pub use companies::{
    average_company_name_length, companies_starting_with, distinct_companies_sorted,
    longest_company_name,
};
pub use filters::{
    both, filter_by_city_and_state, filter_by_state, first_job_matching_title_substring,
    first_matching, in_state, matches,
};
pub use juniors::{
    captions_of_first_n_junior_jobs, first_n_junior_jobs, first_n_matching, is_junior_job,
};
pub use paging::paginate;
pub use projection::converted_dates;
pub use snippets::snippet_word_counts;
