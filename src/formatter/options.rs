#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatterOptions {
    /// Locale tag resolving the canonical patterns for the general layouts;
    /// empty means the invariant default.
    pub locale: String,
}

impl FormatterOptions {
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}
