//! The standard Base45 encoding of [RFC 9285](https://datatracker.ietf.org/doc/html/rfc9285).
//!
//! Every two bytes `a, b` form the number `n = a * 256 + b`, which is written
//! as the three digits `c, d, e` with `n = c + d * 45 + e * 45²`, least
//! significant digit first. A trailing odd byte is written as two digits.
//!
//! ```
//! use base45_qr::standard::{decode, encode};
//! assert_eq!(encode(b"AB").unwrap(), "BB8");
//! assert_eq!(encode(b"Hello!!").unwrap(), "%69 VD92EX0");
//! assert_eq!(decode("QED8WEX0").unwrap(), b"ietf!");
//! ```

use alloc::{string::String, vec::Vec};

use crate::alphabet::{char_to_digit, digit_to_char, BASE};
use crate::Error;

/// Number of bytes in a full group.
pub const BYTES_PER_GROUP: usize = 2;
/// Number of digits a full group is written as.
pub const DIGITS_PER_GROUP: usize = 3;

const BASE_SQUARED: u32 = BASE * BASE;

/// Number of characters [`encode`] produces for `len` bytes.
///
/// ```
/// assert_eq!(base45_qr::standard::encoded_len(7), 11);
/// ```
#[must_use]
pub fn encoded_len(len: usize) -> usize {
    len / BYTES_PER_GROUP * DIGITS_PER_GROUP + (len % BYTES_PER_GROUP) * 2
}

/// Encodes a byte payload.
///
/// # Errors
///
/// Returns [`Error::InvalidDigitValue`] if the group arithmetic produced a
/// digit outside of the alphabet, which can't happen for any input.
pub fn encode(data: &[u8]) -> Result<String, Error> {
    let mut out = String::with_capacity(encoded_len(data.len()));
    encode_into(data, 0, &mut out)?;
    Ok(out)
}

/// Decodes a Base45 string back into its byte payload.
///
/// # Errors
///
/// Fails if `encoded` contains characters outside of the alphabet, ends in a
/// single dangling character or contains a triplet whose value exceeds
/// `u16::MAX`. No partial output is returned.
pub fn decode(encoded: &str) -> Result<Vec<u8>, Error> {
    let mut out = Vec::with_capacity(encoded.len() / DIGITS_PER_GROUP * BYTES_PER_GROUP + 1);
    decode_into(encoded.chars(), 0, &mut out).map_err(|e| {
        tracing::debug!(scheme = "standard", error = %e, "rejected encoded input");
        e
    })?;
    Ok(out)
}

/// Appends the encoding of `data` to `out`. `offset` is the input index of
/// `data[0]` and only serves error reports.
pub(crate) fn encode_into(data: &[u8], offset: usize, out: &mut String) -> Result<(), Error> {
    for (i, group) in data.chunks(BYTES_PER_GROUP).enumerate() {
        let position = offset + i * BYTES_PER_GROUP;
        match *group {
            [a, b] => {
                let n = u32::from(a) * 256 + u32::from(b);
                let e = n / BASE_SQUARED;
                let remainder = n % BASE_SQUARED;
                let d = remainder / BASE;
                let c = remainder % BASE;
                out.push(digit_to_char(c, position)?);
                out.push(digit_to_char(d, position)?);
                out.push(digit_to_char(e, position)?);
            }
            [a] => {
                let a = u32::from(a);
                out.push(digit_to_char(a % BASE, position)?);
                out.push(digit_to_char(a / BASE, position)?);
            }
            _ => unreachable!("chunks yields one or two bytes"),
        }
    }
    Ok(())
}

/// Appends the bytes encoded by `chars` to `out`. `offset` is the input index
/// of the first character and only serves error reports.
///
/// A group is three characters, unless fewer remain, in which case it must be
/// exactly two. Each group is validated completely before any of its bytes
/// are written. A final pair keeps only the low byte of its value.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn decode_into<I>(chars: I, offset: usize, out: &mut Vec<u8>) -> Result<(), Error>
where
    I: IntoIterator<Item = char>,
{
    let mut chars = chars.into_iter();
    let mut position = offset;
    while let Some(first) = chars.next() {
        let c = char_to_digit(first, position)?;
        let d = match chars.next() {
            Some(second) => char_to_digit(second, position + 1)?,
            None => return Err(Error::TruncatedInput { position: position + 1 }),
        };
        match chars.next() {
            Some(third) => {
                let e = char_to_digit(third, position + 2)?;
                let n = c + d * BASE + e * BASE_SQUARED;
                let [a, b] = group_bytes(n, position)?;
                out.extend_from_slice(&[a, b]);
                position += DIGITS_PER_GROUP;
            }
            None => {
                let n = c + d * BASE;
                out.push((n % 256) as u8);
                position += 2;
            }
        }
    }
    Ok(())
}

fn group_bytes(n: u32, position: usize) -> Result<[u8; 2], Error> {
    u16::try_from(n)
        .map(u16::to_be_bytes)
        .map_err(|_| Error::AccumulatorOverflow {
            value: u64::from(n),
            position,
        })
}
