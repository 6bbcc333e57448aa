use std::fmt;

use crate::parser::error::ParseError;

#[derive(Debug)]
pub enum FormatterError {
    Parse(ParseError),
    InvalidFormat(String),
}

impl fmt::Display for FormatterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatterError::Parse(err) => write!(f, "{}", err),
            FormatterError::InvalidFormat(spec) => write!(f, "Invalid format string: {spec}"),
        }
    }
}

impl std::error::Error for FormatterError {}

impl From<ParseError> for FormatterError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}
