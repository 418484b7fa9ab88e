//! RUT scanner — converts free-form text into a normalized character run
//!
//! Accepts the three usual layouts: `12.345.678-5`, `12345678-5` and
//! `123456785`. Periods and hyphens are skipped wherever they appear,
//! lowercase `k` is normalized to `K`.
//!
//! Guarantees:
//! - Bounded: never buffers more than `CAPACITY` characters, whatever the input length
//! - Deterministic: same input always produces the same `Rut` or the same `Error`

use crate::{Error, Result, Rut};

/// Minimum meaningful characters (body digits plus check character)
pub const MIN_LEN: usize = 5;

/// Maximum meaningful characters (body digits plus check character)
pub const MAX_LEN: usize = 10;

/// Smallest number whose rendering meets `MIN_LEN`
pub const MIN_NUMBER: u32 = 1_000;

/// Largest number whose rendering meets `MAX_LEN`
pub const MAX_NUMBER: u32 = 999_999_999;

/// Scan buffer size. Input that overflows it is rejected as `TooLong`
/// before the rest of the alphabet is checked.
const CAPACITY: usize = 12;

/// Parse a RUT string into its number and check character.
///
/// # Errors
/// Checked in this order:
/// - `EmptyInput` for `""`
/// - `TooLong` as soon as the scan buffer overflows
/// - `InvalidFormat` for a character outside `0-9`, `k`, `K`, `.`, `-`
/// - `TooShort` / `TooLong` for fewer than 5 or more than 10 meaningful characters
/// - `InvalidFormat` for a `K` anywhere but the last position
///
/// A wrong check character is *not* an error; see [`Rut::is_valid`].
///
/// # Example
/// ```
/// let rut = rut_core::parse("1.009-k").unwrap();
/// assert_eq!(rut.number, 1009);
/// assert_eq!(rut.dv, 'K');
/// ```
pub fn parse(text: &str) -> Result<Rut> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut scanner = Scanner::new(text);
    let chars = scanner.scan()?;

    if chars.len() < MIN_LEN {
        return Err(Error::TooShort);
    }
    if chars.len() > MAX_LEN {
        return Err(Error::TooLong);
    }

    let (body, dv) = chars.split_at(chars.len() - 1);

    // K is only legal as the check character
    if body.contains(&b'K') {
        return Err(Error::InvalidFormat);
    }

    let number = std::str::from_utf8(body)
        .ok()
        .and_then(|digits| digits.parse::<u32>().ok())
        .ok_or(Error::InvalidFormat)?;

    Ok(Rut {
        number,
        dv: char::from(dv[0]),
    })
}

/// Normalize a single input byte.
///
/// Returns the byte to keep (`0-9` unchanged, `k`/`K` as `K`),
/// or `None` if it does not belong in a RUT.
pub fn normalize_char(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte),
        b'k' | b'K' => Some(b'K'),
        _ => None,
    }
}

/// Separators are dropped silently, in any position and any number
pub fn is_separator(byte: u8) -> bool {
    byte == b'.' || byte == b'-'
}

/// Single-pass scanner over the raw input bytes
pub struct Scanner<'a> {
    input: &'a [u8],
    position: usize,
    buf: [u8; CAPACITY],
    len: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input text
    pub fn new(text: &'a str) -> Self {
        Scanner {
            input: text.as_bytes(),
            position: 0,
            buf: [0; CAPACITY],
            len: 0,
        }
    }

    /// Consume the input and return the normalized characters,
    /// separators removed.
    ///
    /// Only the alphabet and the buffer bound are enforced here;
    /// length limits and `K` placement are left to [`parse`].
    pub fn scan(&mut self) -> Result<&[u8]> {
        while let Some(byte) = self.advance() {
            if is_separator(byte) {
                continue;
            }
            if self.len >= CAPACITY {
                return Err(Error::TooLong);
            }

            let normalized = normalize_char(byte).ok_or(Error::InvalidFormat)?;
            self.buf[self.len] = normalized;
            self.len += 1;
        }

        Ok(&self.buf[..self.len])
    }

    fn advance(&mut self) -> Option<u8> {
        let byte = self.input.get(self.position).copied();
        if byte.is_some() {
            self.position += 1;
        }
        byte
    }
}
