//! Encoding of a single code point.
//!
//! The byte count is selected by testing the four range ceilings in ascending
//! order with `<=`; the first range a value fits in wins, which yields the
//! minimal (never overlong) encoding by construction. Anything above
//! [`MAX_CODEPOINT`] fails.

use crate::error::EncodeError;

/// Highest code point UTF-8 can represent, `U+10FFFF`.
pub const MAX_CODEPOINT: u32 = 0x0010_FFFF;

/// Marker bits of a continuation byte (`10xxxxxx`).
const CONTINUATION: u8 = 0x80;
/// Payload mask of a continuation byte: the low six bits.
const PAYLOAD: u32 = 0x3F;

/// The UTF-8 encoding of a single code point: one to four octets held inline.
///
/// Produced by [`encode_codepoint`]. Dereferences to `[u8]`, so slice methods
/// apply directly:
///
/// ```rust
/// use utf8enc::encode_codepoint;
///
/// let grin = encode_codepoint(0x1F600)?;
/// assert_eq!(grin.len(), 4);
/// assert_eq!(grin.as_bytes(), [0xF0, 0x9F, 0x98, 0x80]);
/// # Ok::<(), utf8enc::EncodeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedCodepoint {
    octets: [u8; 4],
    len: u8,
}

#[allow(clippy::len_without_is_empty)] // at least one octet, never empty
impl EncodedCodepoint {
    /// Number of octets the encoded code point occupies: 1, 2, 3, or 4.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// The encoded octets, exactly [`len`](Self::len) of them. No terminator
    /// or padding is included.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.octets[..self.len()]
    }
}

impl core::ops::Deref for EncodedCodepoint {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for EncodedCodepoint {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Encodes a single Unicode code point as UTF-8.
///
/// | Code point (inclusive) | Octets |
/// |------------------------|--------|
/// | `U+0000..=U+007F`      | 1      |
/// | `U+0080..=U+07FF`      | 2      |
/// | `U+0800..=U+FFFF`      | 3      |
/// | `U+10000..=U+10FFFF`   | 4      |
///
/// Surrogate values (`U+D800..=U+DFFF`) are accepted and encoded with the
/// three-byte rule; see the crate-level note on strict UTF-8 validity.
///
/// # Errors
///
/// [`EncodeError::InvalidCodepoint`] if `codepoint` exceeds [`MAX_CODEPOINT`].
#[allow(clippy::cast_possible_truncation)] // every cast is range-guarded or masked
pub fn encode_codepoint(codepoint: u32) -> Result<EncodedCodepoint, EncodeError> {
    let mut octets = [0_u8; 4];
    if codepoint <= 0x0000_007F {
        octets[0] = codepoint as u8;
        return Ok(EncodedCodepoint { octets, len: 1 });
    }
    if codepoint <= 0x0000_07FF {
        octets[0] = 0xC0 | (codepoint >> 6) as u8;
        octets[1] = CONTINUATION | (codepoint & PAYLOAD) as u8;
        return Ok(EncodedCodepoint { octets, len: 2 });
    }
    if codepoint <= 0x0000_FFFF {
        octets[0] = 0xE0 | (codepoint >> 12) as u8;
        octets[1] = CONTINUATION | ((codepoint >> 6) & PAYLOAD) as u8;
        octets[2] = CONTINUATION | (codepoint & PAYLOAD) as u8;
        return Ok(EncodedCodepoint { octets, len: 3 });
    }
    if codepoint <= MAX_CODEPOINT {
        octets[0] = 0xF0 | (codepoint >> 18) as u8;
        octets[1] = CONTINUATION | ((codepoint >> 12) & PAYLOAD) as u8;
        octets[2] = CONTINUATION | ((codepoint >> 6) & PAYLOAD) as u8;
        octets[3] = CONTINUATION | (codepoint & PAYLOAD) as u8;
        return Ok(EncodedCodepoint { octets, len: 4 });
    }
    Err(EncodeError::InvalidCodepoint(codepoint))
}
