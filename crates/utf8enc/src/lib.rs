//! Primitives for encoding Unicode code points as UTF-8.
//!
//! Two entry points make up the entire surface:
//!
//! - [`encode_codepoint`] turns a single `u32` code point into its one to
//!   four UTF-8 octets, held inline in an [`EncodedCodepoint`].
//! - [`encode_string`] turns a sequence of code points into a single owned,
//!   zero-terminated byte buffer, an [`EncodedString`].
//!
//! Both are pure functions: no global state, no I/O, safe to call from any
//! number of threads. The only failure mode is [`EncodeError::InvalidCodepoint`],
//! raised for values above `U+10FFFF`.
//!
//! # Surrogates
//!
//! Code points in the UTF-16 surrogate range (`U+D800..=U+DFFF`) are
//! *accepted* and encoded with the ordinary three-byte rule, even though they
//! are not valid Unicode scalar values and strict UTF-8 forbids them. Output
//! containing encoded surrogates is WTF-8, not conformant UTF-8. Callers that
//! need strict validity must reject surrogates before encoding.
//!
//! # Examples
//!
//! ```rust
//! use utf8enc::{encode_codepoint, encode_string};
//!
//! let euro = encode_codepoint(0x20AC)?;
//! assert_eq!(euro.as_bytes(), [0xE2, 0x82, 0xAC]);
//!
//! let hello = encode_string(&[0x48, 0x65, 0x6C, 0x6C, 0x6F])?;
//! assert_eq!(hello.as_bytes(), b"Hello");
//! assert_eq!(hello.as_bytes_with_nul(), b"Hello\0");
//! # Ok::<(), utf8enc::EncodeError>(())
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod codepoint;
mod error;
mod string;


pub use codepoint::{EncodedCodepoint, MAX_CODEPOINT, encode_codepoint};
pub use error::EncodeError;
pub use string::{EncodedString, encode_string};
