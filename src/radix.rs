//! Byte count to digit count correspondence of the chunked codec.
//!
//! A chunk of `n` bytes is written as the fewest base-45 digits `d` with
//! `45^d >= 256^n`. The values were determined by repeatedly dividing an
//! all-ones accumulator by 45 until it reached zero; the table is the
//! contract, a logarithm based formula is off by one at some boundaries.
//!
//! ```
//! use base45_qr::radix::{bytes_for_digits, digits_for_bytes};
//! assert_eq!(digits_for_bytes(7), Some(11));
//! assert_eq!(bytes_for_digits(11), Some(7));
//! assert_eq!(bytes_for_digits(4), None);
//! ```

/// Digit count for every byte count up to a full 64-bit accumulator.
pub const BYTES_TO_DIGITS: [usize; 9] = [0, 2, 3, 5, 6, 8, 9, 11, 12];

/// Largest digit count in [`BYTES_TO_DIGITS`].
pub const MAX_DIGITS: usize = BYTES_TO_DIGITS[BYTES_TO_DIGITS.len() - 1];

/// Byte count for every digit count, `None` where no byte count produces it.
pub const DIGITS_TO_BYTES: [Option<usize>; MAX_DIGITS + 1] = invert(&BYTES_TO_DIGITS);

const fn invert(table: &[usize; 9]) -> [Option<usize>; MAX_DIGITS + 1] {
    let mut inverse = [None; MAX_DIGITS + 1];
    let mut bytes = 0;
    while bytes < table.len() {
        inverse[table[bytes]] = Some(bytes);
        bytes += 1;
    }
    inverse
}

/// Number of digits a chunk of `bytes` bytes is written as.
#[must_use]
pub fn digits_for_bytes(bytes: usize) -> Option<usize> {
    BYTES_TO_DIGITS.get(bytes).copied()
}

/// Number of bytes a chunk of `digits` digits stands for.
#[must_use]
pub fn bytes_for_digits(digits: usize) -> Option<usize> {
    DIGITS_TO_BYTES.get(digits).copied().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_minimal_digit_counts() {
        for (bytes, &digits) in BYTES_TO_DIGITS.iter().enumerate() {
            let capacity = 256_u128.pow(bytes as u32);
            assert!(45_u128.pow(digits as u32) >= capacity);
            if digits > 0 {
                assert!(45_u128.pow(digits as u32 - 1) < capacity);
            }
        }
    }

    #[test]
    fn test_inverse_is_exact() {
        for (bytes, &digits) in BYTES_TO_DIGITS.iter().enumerate() {
            assert_eq!(bytes_for_digits(digits), Some(bytes));
            assert_eq!(digits_for_bytes(bytes), Some(digits));
        }
        let holes: Vec<usize> = (0..=MAX_DIGITS)
            .filter(|&d| bytes_for_digits(d).is_none())
            .collect();
        assert_eq!(holes, [1, 4, 7, 10]);
        assert_eq!(bytes_for_digits(MAX_DIGITS + 1), None);
        assert_eq!(digits_for_bytes(9), None);
    }

    #[test]
    fn test_tables_are_stable() {
        assert_eq!(invert(&BYTES_TO_DIGITS), DIGITS_TO_BYTES);
        assert_eq!(invert(&BYTES_TO_DIGITS), invert(&BYTES_TO_DIGITS));
    }
}
