//! Fixed encoding vectors exercised through the public API.

use rstest::rstest;
use utf8enc::{EncodeError, encode_codepoint, encode_string};

#[rstest]
#[case(0x0000, &[0x00])]
#[case(0x0024, &[0x24])]
#[case(0x007F, &[0x7F])]
#[case(0x0080, &[0xC2, 0x80])]
#[case(0x00A3, &[0xC2, 0xA3])]
#[case(0x07FF, &[0xDF, 0xBF])]
#[case(0x0800, &[0xE0, 0xA0, 0x80])]
#[case(0x20AC, &[0xE2, 0x82, 0xAC])]
#[case(0xFFFF, &[0xEF, 0xBF, 0xBF])]
#[case(0x1_0000, &[0xF0, 0x90, 0x80, 0x80])]
#[case(0x1_F600, &[0xF0, 0x9F, 0x98, 0x80])]
#[case(0x10_FFFF, &[0xF4, 0x8F, 0xBF, 0xBF])]
fn codepoint_vectors(#[case] codepoint: u32, #[case] expected: &[u8]) {
    let encoded = encode_codepoint(codepoint).unwrap();
    assert_eq!(encoded.as_bytes(), expected);
    assert_eq!(encoded.len(), expected.len());
}

#[rstest]
#[case(0x11_0000)]
#[case(0x7FFF_FFFF)]
#[case(u32::MAX)]
fn codepoint_rejections(#[case] codepoint: u32) {
    assert_eq!(
        encode_codepoint(codepoint),
        Err(EncodeError::InvalidCodepoint(codepoint))
    );
}

#[rstest]
#[case(&[], &[0x00])]
#[case(&[0x48, 0x65, 0x6C, 0x6C, 0x6F], b"Hello\0")]
#[case(&[0x20AC], &[0xE2, 0x82, 0xAC, 0x00])]
#[case(&[0x1_F600], &[0xF0, 0x9F, 0x98, 0x80, 0x00])]
#[case(&[0x41, 0x00, 0x42], &[0x41, 0x00])]
fn string_vectors(#[case] codepoints: &[u32], #[case] expected: &[u8]) {
    let encoded = encode_string(codepoints).unwrap();
    assert_eq!(encoded.as_bytes_with_nul(), expected);
    assert_eq!(encoded.len(), expected.len() - 1);
}

#[test]
fn string_propagates_first_failure() {
    assert_eq!(
        encode_string(&[0x41, 0x11_0000]),
        Err(EncodeError::InvalidCodepoint(0x11_0000))
    );
}
