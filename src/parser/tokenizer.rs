use winnow::combinator::alt;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::constants::MAX_FRACTION_DIGITS;

use super::error::ParseError;
use super::model::{Token, TokenKind, TokenValue};

/// Scans a custom duration pattern into tokens.
///
/// `%` expands the single following character as a one-token pattern of its
/// own; the expansion cannot itself contain `%`, so the recursion is bounded
/// to depth one.
pub fn tokenize(pattern: &str) -> Result<Vec<Token>, ParseError> {
    let mut input = pattern;
    let mut tokens: Vec<Token> = Vec::new();

    while let Some(ch) = input.chars().next() {
        if ch == '%' {
            let rest = &input[1..];
            match rest.chars().next() {
                None => return Err(ParseError::new("'%' at end of pattern")),
                Some('%') => {
                    return Err(ParseError::new("'%' must be followed by a format token"));
                }
                Some(next) => {
                    let expanded = tokenize(&rest[..next.len_utf8()])?;
                    tokens.extend(expanded);
                    input = &rest[next.len_utf8()..];
                    continue;
                }
            }
        }

        let token = next_token
            .parse_next(&mut input)
            .map_err(|_err: ErrMode<ContextError>| match ch {
                '\'' | '"' => ParseError::new("Unterminated quote in pattern"),
                '\\' => ParseError::new("Escape character at end of pattern"),
                _ => ParseError::new(format!("Unrecognized token '{ch}' in pattern")),
            })?;

        if let TokenValue::Count(count) = token.value {
            let limit = repeat_limit(token.kind);
            if count > limit {
                return Err(ParseError::new(format!(
                    "Too many repeats of '{ch}' in pattern ({count} > {limit})"
                )));
            }
        }

        tokens.push(token);
    }

    Ok(tokens)
}

type PResult<T> = Result<T, ErrMode<ContextError>>;

fn repeat_limit(kind: TokenKind) -> usize {
    match kind {
        TokenKind::Hours | TokenKind::Minutes | TokenKind::Seconds => 2,
        TokenKind::Fraction | TokenKind::FractionOpt => MAX_FRACTION_DIGITS,
        TokenKind::Days => 8,
        TokenKind::Literal => usize::MAX,
    }
}

// Parsers using winnow combinators

fn next_token(input: &mut &str) -> PResult<Token> {
    alt((field_run_parser, quoted_parser, escaped_parser)).parse_next(input)
}

fn field_run_parser(input: &mut &str) -> PResult<Token> {
    let start = *input;
    let first = any
        .verify(|c: &char| matches!(c, 'd' | 'h' | 'm' | 's' | 'f' | 'F'))
        .parse_next(input)?;
    let additional = take_while(0.., move |c: char| c == first).parse_next(input)?;
    let count = 1 + additional.len();
    let raw = &start[..count];

    let kind = match first {
        'd' => TokenKind::Days,
        'h' => TokenKind::Hours,
        'm' => TokenKind::Minutes,
        's' => TokenKind::Seconds,
        'f' => TokenKind::Fraction,
        _ => TokenKind::FractionOpt,
    };
    Ok(Token::new(kind, raw, TokenValue::Count(count)))
}

fn quoted_parser(input: &mut &str) -> PResult<Token> {
    let start = *input;
    let quote = any.verify(|&c| c == '\'' || c == '"').parse_next(input)?;

    let mut close = None;
    for (idx, ch) in input.char_indices() {
        if ch == quote {
            close = Some(idx);
            break;
        }
    }
    let len = close.ok_or_else(|| ErrMode::Backtrack(ContextError::new()))?;

    let value = &input[..len];
    *input = &input[len + quote.len_utf8()..];

    let total_len = quote.len_utf8() * 2 + len;
    let raw = &start[..total_len];
    Ok(Token::new(
        TokenKind::Literal,
        raw,
        TokenValue::Text(value.to_string()),
    ))
}

fn escaped_parser(input: &mut &str) -> PResult<Token> {
    let start = *input;
    '\\'.parse_next(input)?;
    let next = any.parse_next(input)?;
    let len = 1 + next.len_utf8();
    let raw = &start[..len];
    Ok(Token::new(
        TokenKind::Literal,
        raw,
        TokenValue::Text(next.to_string()),
    ))
}
