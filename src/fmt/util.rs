use crate::{error::fmt::iso8601::Error as E, fmt::Parsed, Error};

/// A formatted decimal number that can be converted to a sequence of bytes.
///
/// This avoids going through the formatting machinery for the common case
/// of printing a duration component. Components are never negative, so
/// there is no support for a sign.
#[derive(Debug)]
pub(crate) struct Decimal {
    buf: [u8; Self::MAX_U32_LEN as usize],
    start: u8,
}

impl Decimal {
    /// Discovered via `u32::MAX.to_string().len()`.
    const MAX_U32_LEN: u8 = 10;

    /// Turn the value given into a decimal representation using ASCII
    /// bytes.
    pub(crate) const fn new(mut value: u32) -> Decimal {
        let mut decimal = Decimal {
            buf: [0; Self::MAX_U32_LEN as usize],
            start: Self::MAX_U32_LEN,
        };
        loop {
            decimal.start -= 1;

            let digit = (value % 10) as u8;
            value /= 10;
            decimal.buf[decimal.start as usize] = b'0' + digit;
            if value == 0 {
                break;
            }
        }
        decimal
    }

    /// Returns the ASCII representation of this decimal as a byte slice.
    ///
    /// The slice returned is guaranteed to be valid ASCII.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[usize::from(self.start)..]
    }

    /// Returns the ASCII representation of this decimal as a string slice.
    pub(crate) fn as_str(&self) -> &str {
        // OK because every byte written to `buf` at or after `start` is an
        // ASCII digit.
        core::str::from_utf8(self.as_bytes()).unwrap()
    }
}

/// Parses a run of ASCII digits at the start of `input` into a `u32`.
///
/// If `input` does not begin with a digit, then `None` is returned along
/// with the input unchanged. Leading zeros are permitted. If the digits
/// represent a number that doesn't fit into a `u32`, then an error is
/// returned.
pub(crate) fn parse_u32_prefix<'i>(
    input: &'i [u8],
) -> Result<Parsed<'i, Option<u32>>, Error> {
    let digits = input.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return Ok(Parsed { value: None, input });
    }
    let (digits, input) = input.split_at(digits);
    let mut n: u32 = 0;
    for &byte in digits {
        let digit = u32::from(byte - b'0');
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit))
            .ok_or(E::ValueTooBig)?;
    }
    Ok(Parsed { value: Some(n), input })
}
