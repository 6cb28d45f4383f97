//! Color literal minification - rewrite a color token to its shortest form
//!
//! Transparent colors keep their RGB channels: Safari interpolates gradients
//! and transitions through the underlying color of `transparent`-like values,
//! so `#f000` and `#0000` are not interchangeable.

use crate::color_names::{short_hex, short_name};
use stylegate_ast::{Token, TokenKind};

/// Rewrite a color token to the shortest text with the same RGBA value
///
/// Never lengthens the token, and applying it twice gives the same result as
/// applying it once. Tokens that are not colors, or hash literals that are not
/// valid hex, come back unchanged.
pub fn canonicalize_color(token: &Token) -> Token {
    match token.kind {
        TokenKind::Ident => match short_hex(&token.text.to_ascii_lowercase()) {
            // Some table entries still have doubled channels ("#663399")
            Some(hex) => canonicalize_hash(hex).unwrap_or_else(|| Token::hash(hex)),
            None => token.clone(),
        },
        TokenKind::Hash => canonicalize_hash(&token.text).unwrap_or_else(|| token.clone()),
        _ => token.clone(),
    }
}

/// `None` means the literal is already as short as it gets
fn canonicalize_hash(text: &str) -> Option<Token> {
    let digits = text
        .strip_prefix('#')?
        .bytes()
        .map(to_lower_hex)
        .collect::<Option<Vec<u8>>>()?;

    match *digits.as_slice() {
        // "#f00" => "red"
        [r, g, b] => named(hex3(r, g, b), text.len()),

        // "#123f" => "#123"
        [r, g, b, a] => {
            if a != b'f' {
                return None;
            }
            Some(shortest_rgb3(r, g, b))
        }

        // "#112233" => "#123"
        [r1, r2, g1, g2, b1, b2] => shorten_rgb6([r1, r2, g1, g2, b1, b2], text.len()),

        // "#11223344" => "#1234"
        [r1, r2, g1, g2, b1, b2, a1, a2] => {
            if a1 != a2 {
                return None;
            }
            let rgb = [r1, r2, g1, g2, b1, b2];
            if a1 == b'f' {
                return Some(
                    shorten_rgb6(rgb, text.len())
                        .unwrap_or_else(|| Token::hash(hex_text(&rgb))),
                );
            }
            if r1 == r2 && g1 == g2 && b1 == b2 {
                return Some(Token::hash(hex_text(&[r1, g1, b1, a1])));
            }
            None
        }

        _ => None,
    }
}

fn shorten_rgb6(rgb: [u8; 6], len: usize) -> Option<Token> {
    let [r1, r2, g1, g2, b1, b2] = rgb;
    if r1 == r2 && g1 == g2 && b1 == b2 {
        return Some(shortest_rgb3(r1, g1, b1));
    }
    named(hex6(rgb), len)
}

/// Name or `#rgb`, whichever is shorter
fn shortest_rgb3(r: u8, g: u8, b: u8) -> Token {
    let short = hex_text(&[r, g, b]);
    named(hex3(r, g, b), short.len()).unwrap_or_else(|| Token::hash(short))
}

/// The short name for `value`, if it fits in `max_len` characters
fn named(value: u32, max_len: usize) -> Option<Token> {
    short_name(value)
        .filter(|name| name.len() <= max_len)
        .map(Token::ident)
}

fn hex_text(digits: &[u8]) -> String {
    let mut text = String::with_capacity(digits.len() + 1);
    text.push('#');
    text.extend(digits.iter().map(|&digit| digit as char));
    text
}

/// Lowercase hex digit, or `None` for anything else
fn to_lower_hex(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' | b'a'..=b'f' => Some(c),
        b'A'..=b'F' => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

/// Value of a digit already normalized by `to_lower_hex`
fn hex1(c: u8) -> u32 {
    if c >= b'a' {
        u32::from(c - b'a' + 10)
    } else {
        u32::from(c - b'0')
    }
}

fn hex3(r: u8, g: u8, b: u8) -> u32 {
    hex6([r, r, g, g, b, b])
}

fn hex6(digits: [u8; 6]) -> u32 {
    digits.iter().fold(0, |acc, &digit| (acc << 4) | hex1(digit))
}
