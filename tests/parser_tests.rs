use spanfmt_rs::parser::{TokenKind, tokenize};

#[test]
fn tokenize_field_runs() {
    let tokens = tokenize("hhmmss").expect("tokenize");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Hours);
    assert_eq!(tokens[1].kind, TokenKind::Minutes);
    assert_eq!(tokens[2].kind, TokenKind::Seconds);
    assert!(tokens.iter().all(|t| t.repeat() == Some(2)));
}

#[test]
fn tokenize_distinguishes_fraction_kinds() {
    let tokens = tokenize("fffFFFF").expect("tokenize");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Fraction);
    assert_eq!(tokens[0].repeat(), Some(3));
    assert_eq!(tokens[1].kind, TokenKind::FractionOpt);
    assert_eq!(tokens[1].repeat(), Some(4));
}

#[test]
fn tokenize_percent_expands_to_single_width_token() {
    let tokens = tokenize("%h").expect("tokenize");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Hours);
    assert_eq!(tokens[0].repeat(), Some(1));

    // The expansion consumes one character; the second `h` scans on its own.
    let tokens = tokenize("%hh").expect("tokenize");
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.repeat() == Some(1)));
}

#[test]
fn tokenize_quoted_literal() {
    let tokens = tokenize("'abc'").expect("tokenize");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Literal);
    assert_eq!(tokens[0].text(), Some("abc"));
    assert_eq!(tokens[0].raw, "'abc'");

    let tokens = tokenize("\"x\"").expect("tokenize");
    assert_eq!(tokens[0].text(), Some("x"));
}

#[test]
fn tokenize_escaped_character() {
    let tokens = tokenize("\\:").expect("tokenize");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Literal);
    assert_eq!(tokens[0].text(), Some(":"));
}

#[test]
fn tokenize_accepts_runs_at_repeat_limits() {
    assert!(tokenize("hh").is_ok());
    assert!(tokenize("mm").is_ok());
    assert!(tokenize("ss").is_ok());
    assert!(tokenize("fffffff").is_ok());
    assert!(tokenize("FFFFFFF").is_ok());
    assert!(tokenize("dddddddd").is_ok());
}

#[test]
fn tokenize_rejects_excessive_repeats() {
    assert!(tokenize("hhh").is_err());
    assert!(tokenize("mmm").is_err());
    assert!(tokenize("sss").is_err());
    assert!(tokenize("ffffffff").is_err());
    assert!(tokenize("FFFFFFFF").is_err());
    assert!(tokenize("ddddddddd").is_err());
}

#[test]
fn tokenize_rejects_dangling_tokens() {
    assert!(tokenize("%").is_err());
    assert!(tokenize("hh%").is_err());
    assert!(tokenize("%%").is_err());
    assert!(tokenize("\\").is_err());
    assert!(tokenize("'open").is_err());
}

#[test]
fn tokenize_rejects_unrecognized_characters() {
    assert!(tokenize(":").is_err());
    assert!(tokenize("x").is_err());
    assert!(tokenize("hh:mm").is_err());
}
