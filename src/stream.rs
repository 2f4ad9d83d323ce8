//! Encoding and decoding between [`std::io`] streams.
//!
//! Data is processed in fixed-size blocks that hold a whole number of groups
//! (or chunks) of the selected [`Scheme`], so memory use does not depend on
//! the payload length. Encoded input is read as single-byte characters.
//!
//! ```
//! use base45_qr::{stream, Scheme};
//! let mut encoded = Vec::new();
//! stream::encode_stream(Scheme::Standard, &b"ietf!"[..], &mut encoded).unwrap();
//! assert_eq!(encoded, b"QED8WEX0");
//!
//! let mut decoded = Vec::new();
//! stream::decode_stream(Scheme::Standard, &encoded[..], &mut decoded).unwrap();
//! assert_eq!(decoded, b"ietf!");
//! ```
//!
//! A decode error leaves the blocks preceding the offending one written to
//! the output.

use std::io::{self, Read, Write};

use crate::{qr, standard, Error, Scheme};

const GROUPS_PER_BLOCK: usize = 1024;

/// Reads from `reader` until `buf` is full or the stream ends.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Encodes everything `reader` yields and writes the result to `writer`.
///
/// Returns the number of characters written.
///
/// # Errors
///
/// Fails with [`Error::Io`] if reading or writing fails.
pub fn encode_stream<R: Read, W: Write>(
    scheme: Scheme,
    mut reader: R,
    mut writer: W,
) -> Result<u64, Error> {
    let mut block = vec![0; scheme.bytes_per_group() * GROUPS_PER_BLOCK];
    let mut out = String::new();
    let mut offset = 0;
    let mut written = 0;
    loop {
        let len = fill(&mut reader, &mut block)?;
        if len == 0 {
            break;
        }
        out.clear();
        match scheme {
            Scheme::Standard => standard::encode_into(&block[..len], offset, &mut out)?,
            Scheme::Qr => qr::encode_into(&block[..len], offset, &mut out)?,
        }
        writer.write_all(out.as_bytes())?;
        tracing::trace!(%scheme, offset, len, "encoded block");
        offset += len;
        written += out.len() as u64;
        if len < block.len() {
            break;
        }
    }
    writer.flush()?;
    Ok(written)
}

/// Decodes everything `reader` yields and writes the bytes to `writer`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Fails with the same errors as [`crate::decode`], or with [`Error::Io`] if
/// reading or writing fails. Unlike [`crate::decode`], a failure leaves the
/// blocks decoded before the offending one written to `writer`.
pub fn decode_stream<R: Read, W: Write>(
    scheme: Scheme,
    mut reader: R,
    mut writer: W,
) -> Result<u64, Error> {
    let mut block = vec![0; scheme.digits_per_group() * GROUPS_PER_BLOCK];
    let mut out = Vec::new();
    let mut offset = 0;
    let mut written = 0;
    loop {
        let len = fill(&mut reader, &mut block)?;
        if len == 0 {
            break;
        }
        out.clear();
        let chars = block[..len].iter().copied().map(char::from);
        let decoded = match scheme {
            Scheme::Standard => standard::decode_into(chars, offset, &mut out),
            Scheme::Qr => qr::decode_into(chars, offset, &mut out),
        };
        if let Err(e) = decoded {
            tracing::debug!(%scheme, error = %e, "rejected encoded input");
            return Err(e);
        }
        writer.write_all(&out)?;
        tracing::trace!(%scheme, offset, len, "decoded block");
        offset += len;
        written += out.len() as u64;
        if len < block.len() {
            break;
        }
    }
    writer.flush()?;
    Ok(written)
}
