#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `d` run: day count, leading zeros only for repeat counts >= 2.
    Days,
    /// `h` run: zero-padded hours.
    Hours,
    /// `m` run: zero-padded minutes.
    Minutes,
    /// `s` run: zero-padded seconds.
    Seconds,
    /// `f` run: fraction truncated to the repeat count, zero-padded.
    Fraction,
    /// `F` run: like `Fraction` but trailing zeros are dropped.
    FractionOpt,
    /// Quoted or escaped text copied verbatim into the output.
    Literal,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TokenValue {
    #[default]
    None,
    Text(String),
    Count(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: String,
    pub value: TokenValue,
}

impl Token {
    pub fn new(kind: TokenKind, raw: impl Into<String>, value: TokenValue) -> Self {
        Self {
            kind,
            raw: raw.into(),
            value,
        }
    }

    /// Repeat count of a field run, `None` for literal tokens.
    pub fn repeat(&self) -> Option<usize> {
        match self.value {
            TokenValue::Count(count) => Some(count),
            _ => None,
        }
    }

    /// Verbatim text of a literal token, `None` for field runs.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }
}
