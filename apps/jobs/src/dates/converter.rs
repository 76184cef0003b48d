use std::fmt;

use crate::dates::format::{DateFormat, Timestamp};
use crate::errors::ParseError;

type ParseFn = Box<dyn Fn(&str) -> Result<Timestamp, ParseError> + Send + Sync>;
type RenderFn = Box<dyn Fn(&Timestamp) -> Result<String, ParseError> + Send + Sync>;

/// A reusable string-to-string date conversion: a parse step followed by a render step.
pub struct DateConverter {
    parse: ParseFn,
    render: RenderFn,
    formats: Option<(DateFormat, DateFormat)>,
}

impl DateConverter {
    /// Converter from text in `input` to text in `output`.
    pub fn new(input: DateFormat, output: DateFormat) -> Self {
        let (reader, writer) = (input.clone(), output.clone());
        DateConverter {
            parse: Box::new(move |s: &str| reader.parse(s)),
            render: Box::new(move |ts: &Timestamp| writer.render(ts)),
            formats: Some((input, output)),
        }
    }

    /// Composes an arbitrary parse function with an arbitrary render function.
    pub fn from_parts<P, R>(parse: P, render: R) -> Self
    where
        P: Fn(&str) -> Result<Timestamp, ParseError> + Send + Sync + 'static,
        R: Fn(&Timestamp) -> Result<String, ParseError> + Send + Sync + 'static,
    {
        DateConverter {
            parse: Box::new(parse),
            render: Box::new(render),
            formats: None,
        }
    }

    pub fn convert(&self, date_string: &str) -> Result<String, ParseError> {
        let ts = (self.parse)(date_string)?;
        (self.render)(&ts)
    }

    /// The opposite-direction converter. Only available for converters
    /// built from two `DateFormat`s.
    pub fn reversed(&self) -> Option<Self> {
        self.formats
            .as_ref()
            .map(|(input, output)| DateConverter::new(output.clone(), input.clone()))
    }
}

impl fmt::Debug for DateConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.formats {
            Some((input, output)) => f
                .debug_struct("DateConverter")
                .field("input", input)
                .field("output", output)
                .finish(),
            None => f.debug_struct("DateConverter").finish_non_exhaustive(),
        }
    }
}

/// One-shot conversion of `date_string` from `input` to `output`.
pub fn convert(
    date_string: &str,
    input: &DateFormat,
    output: &DateFormat,
) -> Result<String, ParseError> {
    output.render(&input.parse(date_string)?)
}
