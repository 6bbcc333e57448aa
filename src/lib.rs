pub mod constants;
pub mod duration;
pub mod formatter;
pub mod parser;

pub use duration::Duration;
pub use formatter::{
    Completeness, FormatLiterals, FormatterError, FormatterOptions, format, format_custom,
    format_standard, format_with_options,
};
pub use parser::tokenize;
