//! Numeric token extraction
//!
//! A token is a run of non-whitespace bytes. Conversion takes the longest
//! prefix that reads as a float, so `1.5abc` yields 1.5 while `abc` or a lone
//! `-` yields nothing. Only bytes that can start a number open a token.

use std::io::{self, BufRead};

use super::stream::CharStream;

/// Longest token read in one go; longer runs continue as fresh input
pub const MAX_TOKEN_LEN: usize = 256;

/// Whitespace as the C locale defines it (includes vertical tab)
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Whether a byte may open a numeric token: a digit, `.` or `-`
///
/// A standalone `+` is deliberately not a starter.
pub fn starts_number(b: u8) -> bool {
    b.is_ascii_digit() || b == b'.' || b == b'-'
}

/// Consume one token and try to convert it
///
/// The byte that ended the token (whitespace, or the first byte past
/// [`MAX_TOKEN_LEN`]) is pushed back onto the stream.
pub fn read_token<R: BufRead>(stream: &mut CharStream<R>) -> io::Result<Option<f32>> {
    let mut token = Vec::with_capacity(16);

    while let Some(b) = stream.next_byte()? {
        if !is_space(b) && token.len() < MAX_TOKEN_LEN {
            token.push(b);
        } else {
            stream.unread(b);
            break;
        }
    }

    Ok(parse_prefix(&token))
}

/// Parse the longest numeric prefix of `bytes`
pub fn parse_prefix(bytes: &[u8]) -> Option<f32> {
    let len = numeric_prefix_len(bytes);
    if len == 0 {
        return None;
    }
    // The prefix is pure ASCII by construction.
    std::str::from_utf8(&bytes[..len]).ok()?.parse().ok()
}

fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        i = 1;
    }

    if let Some(len) = special_value_len(&bytes[i..]) {
        return i + len;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'-' | b'+')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    i
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn special_value_len(bytes: &[u8]) -> Option<usize> {
    ["infinity", "inf", "nan"].iter().find_map(|word| {
        let n = word.len();
        (bytes.len() >= n && bytes[..n].eq_ignore_ascii_case(word.as_bytes())).then_some(n)
    })
}
