//! The 45-symbol alphabet shared by both codecs.
//!
//! The symbols are exactly the characters a QR code encoder accepts in
//! alphanumeric mode, in the order of their alphanumeric code values, so a
//! digit's value equals the value the QR encoder packs for its character.
//! The table is the one ZXing declares as `Encoder.ALPHANUMERIC_TABLE`,
//! restricted to its non-negative entries.
//!
//! Lookups are checked against the bounds of their tables before indexing and
//! report an [`Error`] instead of panicking.
//!
//! ```
//! use base45_qr::alphabet::{char_to_digit, digit_to_char};
//! assert_eq!(digit_to_char(36, 0).unwrap(), ' ');
//! assert_eq!(char_to_digit('Z', 0).unwrap(), 35);
//! assert!(char_to_digit('z', 0).is_err());
//! ```

use crate::Error;

/// Number of distinct digit values.
pub const BASE: u32 = 45;

/// The alphabet, indexed by digit value.
pub const ALPHABET: &[u8; BASE as usize] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

const UNMAPPED: u8 = u8::MAX;

/// Digit values indexed by character code; [`UNMAPPED`] marks characters
/// outside of the alphabet.
const REVERSE: [u8; 256] = reverse_table();

#[allow(clippy::cast_possible_truncation)]
const fn reverse_table() -> [u8; 256] {
    let mut table = [UNMAPPED; 256];
    let mut digit = 0;
    while digit < ALPHABET.len() {
        table[ALPHABET[digit] as usize] = digit as u8;
        digit += 1;
    }
    table
}

/// Translates a digit value to its character.
///
/// `position` is the index of the input byte being encoded and only serves
/// the error report.
///
/// # Errors
///
/// Returns [`Error::InvalidDigitValue`] if `digit` is not in `0..=44`.
pub fn digit_to_char(digit: u32, position: usize) -> Result<char, Error> {
    if digit >= BASE {
        return Err(Error::InvalidDigitValue { digit, position });
    }
    Ok(char::from(ALPHABET[digit as usize]))
}

/// Translates a character to its digit value.
///
/// `position` is the index of the character in the encoded input and only
/// serves the error report.
///
/// # Errors
///
/// Returns [`Error::InvalidCharacter`] if `character` is not part of the
/// alphabet.
pub fn char_to_digit(character: char, position: usize) -> Result<u32, Error> {
    let code = character as usize;
    if code >= REVERSE.len() {
        return Err(Error::InvalidCharacter {
            character,
            position,
        });
    }
    match REVERSE[code] {
        UNMAPPED => Err(Error::InvalidCharacter {
            character,
            position,
        }),
        digit => Ok(u32::from(digit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_bijection() {
        for digit in 0..BASE {
            let c = digit_to_char(digit, 0).unwrap();
            assert_eq!(char_to_digit(c, 0).unwrap(), digit);
        }
        let mapped = (0..=255_u8)
            .filter(|&b| char_to_digit(char::from(b), 0).is_ok())
            .count();
        assert_eq!(mapped, BASE as usize);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(digit_to_char(0, 0).unwrap(), '0');
        assert_eq!(digit_to_char(10, 0).unwrap(), 'A');
        let symbols: Vec<char> = (36..BASE).map(|d| digit_to_char(d, 0).unwrap()).collect();
        assert_eq!(symbols, [' ', '$', '%', '*', '+', '-', '.', '/', ':']);
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(
            digit_to_char(45, 7),
            Err(Error::InvalidDigitValue {
                digit: 45,
                position: 7
            })
        );
        assert!(digit_to_char(u32::MAX, 0).is_err());
    }

    #[test]
    fn test_invalid_character() {
        for c in ['a', 'z', '#', '=', '\0', '\u{ff}', '\u{100}', '€'] {
            assert_eq!(
                char_to_digit(c, 3),
                Err(Error::InvalidCharacter {
                    character: c,
                    position: 3
                })
            );
        }
    }

    #[test]
    fn test_reverse_table_is_stable() {
        assert_eq!(reverse_table(), REVERSE);
        assert_eq!(reverse_table(), reverse_table());
    }
}
