#![allow(clippy::unwrap_used, reason = "Test code")]

use css_backgrounds_borders::{ImageFunction, TokenKind, parse_background_image, tokenize};

/// Balanced argument lists the way a computed-style serializer writes them.
const ARGUMENTS: [&str; 5] = [
    "rgb(0, 0, 0), transparent",
    "45deg, rgba(10, 20, 30, 0.5) 10%, rgb(1, 2, 3) 40px",
    "to top left, rgb(255, 255, 255), rgb(0, 0, 0) 100%",
    "\"https://example.com/grid.png\"",
    "#angle-range",
];

/// Build a synthetic multi-layer value from every function/argument pairing.
fn synthetic_layers() -> Vec<String> {
    ImageFunction::PRIORITY
        .iter()
        .zip(ARGUMENTS.iter().cycle())
        .map(|(function, arguments)| format!("{}({arguments})", function.name()))
        .collect()
}

#[test]
fn layers_rebuild_the_source() {
    let _ = env_logger::builder().is_test(true).try_init();
    let layers = synthetic_layers();
    let source = layers.join(", ");

    let images = parse_background_image(&source).unwrap();
    let rebuilt: Vec<&str> = images.iter().map(|image| image.raw_value.as_str()).collect();
    assert_eq!(rebuilt.join(", "), source);
}

#[test]
fn token_values_rebuild_the_source() {
    let _ = env_logger::builder().is_test(true).try_init();
    let source = synthetic_layers().join(", ");

    let tokens = tokenize(&source).unwrap();
    let rebuilt: String = tokens
        .iter()
        .map(|token| {
            if token.kind == TokenKind::Comma {
                // The serializer's single space after a separator is not a token.
                &source[token.start..token.end + 1]
            } else {
                token.value
            }
        })
        .collect();
    assert_eq!(rebuilt, source);
}

#[test]
fn tokens_follow_the_fixed_cycle() {
    let _ = env_logger::builder().is_test(true).try_init();
    let source = synthetic_layers().join(", ");
    let tokens = tokenize(&source).unwrap();

    let expected_cycle = [
        TokenKind::Function,
        TokenKind::OpenParen,
        TokenKind::Value,
        TokenKind::CloseParen,
        TokenKind::Comma,
    ];
    for (index, token) in tokens.iter().enumerate() {
        assert_eq!(token.kind, expected_cycle[index % expected_cycle.len()]);
    }
    let mut previous_end = 0;
    for token in &tokens {
        assert!(token.start >= previous_end);
        previous_end = token.end;
    }
}
