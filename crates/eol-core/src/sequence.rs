// crates/eol-core/src/sequence.rs
//
// Terminator compiler: turns a user-supplied pattern of literal characters
// and escape sequences into the output EOL byte sequence.
//
// Escape grammar:
// - \a \b \f \n \r \t \v \\  (letter case-insensitive)
// - \0    single NUL byte; digits after it are literal
// - \xhh  one or two hex digits, maximal munch
//
// Every token yields exactly one byte, so the compiled sequence is never
// longer than the pattern.

use crate::error::{EolError, Result};

// Direct letter -> byte table (lowercase keys; input is case-folded first).
const NAMED_ESCAPES: &[(u8, u8)] = &[
    (b'a', 0x07),
    (b'b', 0x08),
    (b'f', 0x0C),
    (b'n', b'\n'),
    (b'r', b'\r'),
    (b't', b'\t'),
    (b'v', 0x0B),
    (b'\\', b'\\'),
    (b'0', 0x00),
];

fn named_escape(c: u8) -> Option<u8> {
    let folded = c.to_ascii_lowercase();
    NAMED_ESCAPES
        .iter()
        .find(|(k, _)| *k == folded)
        .map(|(_, v)| *v)
}

/// Compiles one pattern string. An empty pattern compiles to an empty
/// sequence; rejecting that is the caller's job (see [`compile_args`]).
pub fn compile_pattern(pattern: &str) -> Result<Vec<u8>> {
    let bytes = pattern.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        // Escape: the backslash must be followed by at least one byte.
        i += 1;
        let Some(&c) = bytes.get(i) else {
            return Err(EolError::TrailingBackslash);
        };

        if c == b'x' {
            i += 1;
            out.push(parse_hex(bytes, &mut i)?);
        } else if let Some(v) = named_escape(c) {
            out.push(v);
            i += 1;
        } else {
            return Err(EolError::UnrecognizedEscape(char::from(c)));
        }
    }

    Ok(out)
}

// One or two hex digits after \x, maximal munch. `i` points at the first
// candidate digit and is left one past the last digit consumed.
fn parse_hex(bytes: &[u8], i: &mut usize) -> Result<u8> {
    let digit = |b: u8| char::from(b).to_digit(16);

    let Some(first) = bytes.get(*i).copied().and_then(digit) else {
        // Report the offending fragment: "x" plus whatever followed it.
        let mut frag = String::from("x");
        if let Some(&b) = bytes.get(*i) {
            frag.push(char::from(b));
        }
        return Err(EolError::InvalidHexEscape(frag));
    };
    *i += 1;

    let mut val = first;
    if let Some(second) = bytes.get(*i).copied().and_then(digit) {
        val = 16 * val + second;
        *i += 1;
    }

    Ok(val as u8)
}

/// Compiles a pattern that may span several command-line arguments,
/// concatenated in order. An empty final sequence is a usage error.
pub fn compile_args<I, S>(pieces: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    for piece in pieces {
        out.extend_from_slice(&compile_pattern(piece.as_ref())?);
    }
    if out.is_empty() {
        return Err(EolError::EmptySequence);
    }
    Ok(out)
}
