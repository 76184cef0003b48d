//! Queries over a static collection of job listings, plus date-format conversion.

pub mod config;
pub mod dates;
pub mod errors;
pub mod models;
pub mod query;
pub mod report;
pub mod repository;
