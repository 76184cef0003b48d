use anyhow::Result;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobs::config::Config;
use jobs::dates::{DateConverter, DateFormat};
use jobs::errors::AppError;
use jobs::query;
use jobs::report;
use jobs::repository::{JobRepository, JsonFileRepository};

const JUNIOR_SAMPLE: usize = 3;
const DATE_SAMPLE: usize = 5;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job explorer v{}", env!("CARGO_PKG_VERSION"));

    let repository = JsonFileRepository::new(&config.data_path);
    if let Err(e) = explore(&repository, &config) {
        error!(code = e.code(), "{e}");
        std::process::exit(1);
    }

    Ok(())
}

fn explore(repository: &impl JobRepository, config: &Config) -> Result<(), AppError> {
    let jobs = repository.load_all()?;
    println!("Total jobs: {}\n", jobs.len());

    heading("Portland, OR");
    for job in query::filter_by_city_and_state(&jobs, "Portland", "OR") {
        println!("{}", report::job_line(job));
    }

    heading("Junior jobs");
    for caption in query::captions_of_first_n_junior_jobs(&jobs, JUNIOR_SAMPLE) {
        println!("{caption}");
    }
    let california_junior = query::both(query::in_state("CA"), query::is_junior_job);
    if let Some(job) = query::first_matching(&jobs, &california_junior) {
        println!("Would notify about {}", report::job_line(job));
    }

    heading(&format!("Companies starting with '{}'", config.company_prefix));
    for company in query::companies_starting_with(&jobs, &config.company_prefix) {
        println!("{company}");
    }

    heading("Company menu");
    let companies = query::distinct_companies_sorted(&jobs);
    for line in report::company_menu(&companies, 1, config.page_size) {
        println!("{line}");
    }

    heading("Company names");
    match (
        query::longest_company_name(&jobs),
        query::average_company_name_length(&jobs),
    ) {
        (Some(longest), Some(average)) => {
            println!("Longest: {longest}");
            println!("Average length: {average:.2}");
        }
        _ => warn!("No jobs loaded; skipping company name statistics"),
    }

    heading(&format!("Lucky search for '{}'", config.search_term));
    match query::first_job_matching_title_substring(&jobs, &config.search_term) {
        Some(job) => println!("{}", job.title),
        None => println!("No job found"),
    }

    heading("Snippet words");
    for line in report::word_count_lines(&query::snippet_word_counts(&jobs)) {
        println!("{line}");
    }

    heading("Posting dates");
    let to_iso = DateConverter::new(DateFormat::Rfc1123, DateFormat::IsoLocalDateTime);
    let to_site = DateConverter::new(DateFormat::Rfc1123, DateFormat::pattern("%-m/%-d/%y"));
    let iso = query::converted_dates(&jobs, &to_iso, DATE_SAMPLE)?;
    let site = query::converted_dates(&jobs, &to_site, DATE_SAMPLE)?;
    for (iso, site) in iso.iter().zip(&site) {
        println!("{iso}  {site}");
    }

    Ok(())
}

fn heading(title: &str) {
    println!("\n== {title} ==");
}
