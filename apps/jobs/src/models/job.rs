use serde::{Deserialize, Serialize};

/// A single job listing as loaded from the listing feed.
///
/// Records are plain values: built once at load time and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "jobtitle")]
    pub title: String,
    pub company: String,
    pub city: String,
    /// Two-letter state code, e.g. `OR`.
    pub state: String,
    pub snippet: String,
    /// Posting date in the feed's RFC 1123 form.
    #[serde(rename = "date")]
    pub date_time_string: String,
    #[serde(default)]
    pub caption: String,
}

impl Job {
    /// Builds a record and derives its caption from the other fields.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        snippet: impl Into<String>,
        date_time_string: impl Into<String>,
    ) -> Self {
        let job = Job {
            title: title.into(),
            company: company.into(),
            city: city.into(),
            state: state.into(),
            snippet: snippet.into(),
            date_time_string: date_time_string.into(),
            caption: String::new(),
        };
        job.with_derived_caption()
    }

    /// Fills an empty caption with `"{company} is looking for a {title} in {city}, {state}"`.
    /// A caption supplied by the feed is left untouched.
    pub fn with_derived_caption(mut self) -> Self {
        if self.caption.is_empty() {
            self.caption = format!(
                "{} is looking for a {} in {}, {}",
                self.company, self.title, self.city, self.state
            );
        }
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }
}
