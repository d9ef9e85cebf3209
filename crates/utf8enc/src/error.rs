use thiserror::Error;

/// Failure produced by [`encode_codepoint`](crate::encode_codepoint) and
/// [`encode_string`](crate::encode_string).
///
/// There is exactly one error condition; it carries the offending value so
/// callers can surface it when reporting the failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The code point exceeds `U+10FFFF`, the highest value UTF-8 can
    /// represent.
    #[error("invalid code point U+{0:X}: exceeds U+10FFFF")]
    InvalidCodepoint(u32),
}
