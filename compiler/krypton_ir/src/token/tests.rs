use super::*;
use pretty_assertions::assert_eq;

// === Band layout ===

#[test]
fn all_is_in_discriminant_order() {
    for pair in TokenKind::ALL.windows(2) {
        assert!(
            (pair[0] as u8) < (pair[1] as u8),
            "{:?} must come before {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn every_kind_is_in_at_most_one_band() {
    for kind in TokenKind::ALL {
        let bands = [kind.is_literal(), kind.is_operator(), kind.is_keyword()]
            .iter()
            .filter(|&&b| b)
            .count();
        assert!(bands <= 1, "{kind:?} is in {bands} bands");
    }
}

#[test]
fn special_kinds_are_in_no_band() {
    for kind in [TokenKind::Eof, TokenKind::Illegal, TokenKind::Comment] {
        assert!(!kind.is_literal());
        assert!(!kind.is_operator());
        assert!(!kind.is_keyword());
    }
}

#[test]
fn band_sizes() {
    let count = |f: fn(TokenKind) -> bool| TokenKind::ALL.iter().filter(|&&k| f(k)).count();
    assert_eq!(count(TokenKind::is_literal), 4);
    assert_eq!(count(TokenKind::is_operator), 39);
    assert_eq!(count(TokenKind::is_keyword), 16);
}

#[test]
fn band_edges() {
    assert!(TokenKind::Ident.is_literal());
    assert!(TokenKind::String.is_literal());
    assert!(TokenKind::Plus.is_operator());
    assert!(TokenKind::Colon.is_operator());
    assert!(TokenKind::Underscore.is_keyword());
    assert!(TokenKind::Namespace.is_keyword());
}

// === Tables ===

#[test]
fn literals_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for kind in TokenKind::ALL {
        assert!(seen.insert(kind.literal()), "duplicate literal {:?}", kind.literal());
    }
}

#[test]
fn names_are_uppercase_and_unique() {
    let mut seen = std::collections::HashSet::new();
    for kind in TokenKind::ALL {
        let name = kind.name();
        assert!(
            name.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
            "{name} is not an uppercase symbol"
        );
        assert!(seen.insert(name), "duplicate name {name}");
    }
}

#[test]
fn literal_round_trips_through_lookup() {
    for kind in TokenKind::ALL {
        assert_eq!(TokenKind::from_literal(kind.literal()), Some(kind));
    }
}

#[test]
fn display_uses_name() {
    assert_eq!(TokenKind::LessLessEqual.to_string(), "LESS_LESS_EQUAL");
    assert_eq!(TokenKind::Amp.to_string(), "AMPERSAND");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
}

#[test]
fn operator_lookup() {
    assert_eq!(TokenKind::operator("<<=").unwrap(), TokenKind::LessLessEqual);
    assert_eq!(TokenKind::operator(":"), Some(TokenKind::Colon));
    assert_eq!(TokenKind::operator("for"), None);
    assert_eq!(TokenKind::operator(":EOF:"), None);
    assert_eq!(TokenKind::operator("=>"), None);
    assert!(TokenKind::is_operator_literal("!="));
    assert!(!TokenKind::is_operator_literal(""));
    assert!(!TokenKind::is_operator_literal("#"));
}

#[test]
fn every_operator_prefix_is_an_operator() {
    for kind in TokenKind::ALL.into_iter().filter(|k| k.is_operator()) {
        let literal = kind.literal();
        for (end, _) in literal.char_indices().skip(1) {
            assert!(
                TokenKind::is_operator_literal(&literal[..end]),
                "prefix {:?} of {literal:?} is not an operator",
                &literal[..end]
            );
        }
    }
}

#[test]
fn every_operator_starts_with_a_single_rune_operator() {
    for kind in TokenKind::ALL.into_iter().filter(|k| k.is_operator()) {
        let first = kind.literal().chars().next().unwrap();
        assert!(TokenKind::is_operator_literal(first.encode_utf8(&mut [0; 4])));
    }
}

#[test]
fn keyword_lookup() {
    assert_eq!(TokenKind::keyword_or_ident("for"), TokenKind::For);
    assert_eq!(TokenKind::keyword_or_ident("fallthrough"), TokenKind::Fallthrough);
    assert_eq!(TokenKind::keyword_or_ident("namespace"), TokenKind::Namespace);
    assert_eq!(TokenKind::keyword_or_ident("_"), TokenKind::Underscore);
    assert_eq!(TokenKind::keyword_or_ident("forx"), TokenKind::Ident);
    assert_eq!(TokenKind::keyword_or_ident("For"), TokenKind::Ident);
    // Operators and markers never resolve as keywords.
    assert_eq!(TokenKind::keyword_or_ident("+"), TokenKind::Ident);
    assert_eq!(TokenKind::keyword_or_ident(":IDENT:"), TokenKind::Ident);
}

// === Semicolon insertion ===

#[test]
fn semicolon_inserted_after_literals() {
    for kind in [
        TokenKind::Ident,
        TokenKind::Number,
        TokenKind::Char,
        TokenKind::String,
    ] {
        assert!(kind.inserts_semicolon(), "{kind:?}");
    }
}

#[test]
fn semicolon_inserted_after_closers_and_jumps() {
    let expected = [
        TokenKind::RightParen,
        TokenKind::RightBrack,
        TokenKind::RightBrace,
        TokenKind::Break,
        TokenKind::Continue,
        TokenKind::Return,
    ];
    for kind in TokenKind::ALL {
        let want = kind.is_literal() || expected.contains(&kind);
        assert_eq!(kind.inserts_semicolon(), want, "{kind:?}");
    }
}

// === Digits ===

#[test]
fn digits_by_base() {
    assert!(is_digit('0', 2) && is_digit('1', 2));
    assert!(!is_digit('2', 2));
    assert!(is_digit('7', 8) && !is_digit('8', 8));
    assert!(is_digit('9', 10) && !is_digit('a', 10));
    assert!(is_digit('f', 16) && is_digit('F', 16));
    assert!(!is_digit('g', 16));
    assert!(!is_digit('_', 16));
    assert!(!is_digit('٣', 10));
}

// === Token ===

#[test]
fn eof_token_has_empty_literal() {
    let tok = Token::eof(Position::new(3, 9));
    assert!(tok.is_eof());
    assert_eq!(tok.literal, "");
    assert_eq!(tok.pos, Position::new(3, 9));
}

#[test]
fn token_display() {
    let tok = Token::new(TokenKind::Ident, "main", Position::new(2, 5));
    assert_eq!(tok.to_string(), r#"2:5: IDENT "main""#);
    assert_eq!(format!("{tok:?}"), r#"IDENT "main" @ 2:5"#);
}

#[cfg(feature = "serde")]
#[test]
fn token_wire_shape() {
    let tok = Token::new(TokenKind::LessLessEqual, "<<=", Position::new(1, 4));
    let json = serde_json::to_value(&tok).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "LESS_LESS_EQUAL",
            "literal": "<<=",
            "line": 1,
            "column": 4,
        })
    );
}
