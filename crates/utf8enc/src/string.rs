//! Encoding of a code-point string into one owned byte buffer.

use alloc::vec::Vec;

use crate::{codepoint::encode_codepoint, error::EncodeError};

/// An encoded code-point string: UTF-8 octets followed by one terminating
/// zero byte.
///
/// Produced by [`encode_string`]. [`len`](Self::len) and
/// [`as_bytes`](Self::as_bytes) exclude the terminator;
/// [`as_bytes_with_nul`](Self::as_bytes_with_nul) includes it for callers
/// handing the buffer to C-string consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedString {
    // Invariant: non-empty, last byte is the zero terminator.
    bytes: Vec<u8>,
}

impl EncodedString {
    /// Number of encoded bytes, excluding the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// `true` if no code points were encoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The encoded bytes without the terminating zero byte.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// The encoded bytes including the terminating zero byte.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the buffer, returning the bytes including the terminator.
    #[must_use]
    pub fn into_bytes_with_nul(self) -> Vec<u8> {
        self.bytes
    }
}

impl core::ops::Deref for EncodedString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for EncodedString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Encodes a sequence of code points as one zero-terminated UTF-8 buffer.
///
/// The input is consumed from its start up to (but not including) the first
/// zero element; a slice without an embedded zero is consumed in full. Each
/// code point's octets are appended in order, and a single zero byte follows
/// the last of them. The input terminator itself is never UTF-8 encoded.
///
/// The output buffer is reserved up front at four bytes per code point plus
/// the terminator, so a single allocation covers the worst case.
///
/// # Errors
///
/// [`EncodeError::InvalidCodepoint`] on the first code point above
/// `U+10FFFF`. The failure is immediate; no partial buffer is returned.
///
/// ```rust
/// use utf8enc::encode_string;
///
/// let s = encode_string(&[0x20AC, 0x0, 0x41])?;
/// assert_eq!(s.as_bytes_with_nul(), [0xE2, 0x82, 0xAC, 0x00]);
/// assert_eq!(s.len(), 3);
/// # Ok::<(), utf8enc::EncodeError>(())
/// ```
pub fn encode_string(codepoints: &[u32]) -> Result<EncodedString, EncodeError> {
    let end = codepoints
        .iter()
        .position(|&cp| cp == 0)
        .unwrap_or(codepoints.len());
    let logical = &codepoints[..end];

    let mut bytes = Vec::with_capacity(4 * logical.len() + 1);
    for &cp in logical {
        let encoded = encode_codepoint(cp)?;
        bytes.extend_from_slice(encoded.as_bytes());
    }
    bytes.push(0);
    Ok(EncodedString { bytes })
}
