//! Whole-domain checks for the color minifier: idempotence, never growing,
//! and never changing the decoded RGBA value.

use crate::color::canonicalize_color;
use crate::color_names::{SHORT_COLOR_HEX, SHORT_COLOR_NAMES};
use stylegate_ast::{Token, TokenKind};

const HEX: &[u8; 16] = b"0123456789abcdef";

fn decode_hex(text: &str) -> Option<[u8; 4]> {
    let digits = text
        .strip_prefix('#')?
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()?;

    match *digits.as_slice() {
        [r, g, b] => Some([r * 17, g * 17, b * 17, 255]),
        [r, g, b, a] => Some([r * 17, g * 17, b * 17, a * 17]),
        [r1, r2, g1, g2, b1, b2] => Some([r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2, 255]),
        [r1, r2, g1, g2, b1, b2, a1, a2] => Some([
            r1 * 16 + r2,
            g1 * 16 + g2,
            b1 * 16 + b2,
            a1 * 16 + a2,
        ]),
        _ => None,
    }
}

fn decode(token: &Token) -> Option<[u8; 4]> {
    match token.kind {
        TokenKind::Hash => decode_hex(&token.text),
        TokenKind::Ident => {
            let lower = token.text.to_ascii_lowercase();
            if let Some((value, _)) = SHORT_COLOR_NAMES.iter().find(|(_, name)| *name == lower) {
                let [_, r, g, b] = value.to_be_bytes();
                return Some([r, g, b, 255]);
            }
            SHORT_COLOR_HEX
                .iter()
                .find(|(name, _)| *name == lower)
                .and_then(|(_, hex)| decode_hex(hex))
        }
        _ => None,
    }
}

fn check(token: Token) {
    let once = canonicalize_color(&token);
    let twice = canonicalize_color(&once);

    assert_eq!(once, twice, "not idempotent for {}", token);
    assert!(
        once.text.len() <= token.text.len(),
        "{} grew into {}",
        token,
        once
    );
    assert_eq!(decode(&once), decode(&token), "{} changed value as {}", token, once);
}

fn hex_token(digits: &[u8]) -> Token {
    let mut text = String::from("#");
    text.extend(digits.iter().map(|&d| HEX[d as usize] as char));
    Token::hash(text)
}

/// Deterministic xorshift so failures are reproducible
struct Rng(u64);

impl Rng {
    fn next_digit(&mut self) -> u8 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 % 16) as u8
    }
}

#[test]
fn test_every_three_digit_color() {
    for r in 0..16 {
        for g in 0..16 {
            for b in 0..16 {
                check(hex_token(&[r, g, b]));
            }
        }
    }
}

#[test]
fn test_every_four_digit_color() {
    for r in 0..16 {
        for g in 0..16 {
            for b in 0..16 {
                for a in 0..16 {
                    check(hex_token(&[r, g, b, a]));
                }
            }
        }
    }
}

#[test]
fn test_doubled_long_forms() {
    for r in 0..16 {
        for g in 0..16 {
            for b in 0..16 {
                check(hex_token(&[r, r, g, g, b, b]));
                for a in [0, 8, 15] {
                    check(hex_token(&[r, r, g, g, b, b, a, a]));
                }
            }
        }
    }
}

#[test]
fn test_sampled_long_forms() {
    let mut rng = Rng(0x9e37_79b9_7f4a_7c15);
    for _ in 0..5000 {
        let six: Vec<u8> = (0..6).map(|_| rng.next_digit()).collect();
        check(hex_token(&six));

        let eight: Vec<u8> = (0..8).map(|_| rng.next_digit()).collect();
        check(hex_token(&eight));

        let mut opaque = six.clone();
        opaque.extend([15, 15]);
        check(hex_token(&opaque));
    }
}

#[test]
fn test_uppercase_long_forms() {
    for text in ["#FF0000", "#AABBCC", "#AABBCCFF", "#ABCDEF", "#000080FF", "#FFFFFF00"] {
        check(Token::hash(text));
    }
}

#[test]
fn test_every_named_color() {
    for (value, name) in SHORT_COLOR_NAMES {
        check(Token::ident(*name));
        check(Token::hash(format!("#{:06x}", value)));
        check(Token::hash(format!("#{:06x}ff", value)));
    }
    for (name, hex) in SHORT_COLOR_HEX {
        check(Token::ident(*name));
        check(Token::ident(name.to_ascii_uppercase()));
        check(Token::hash(*hex));
    }
}
