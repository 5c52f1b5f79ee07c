//! UTF-8 code-unit classification.
//!
//! The gap boundary may only rest on a byte that starts a scalar: an ASCII
//! byte or a lead byte. These predicates are how the buffer tells the two
//! apart while shifting bytes across the gap.

/// Return true if the byte is a UTF-8 continuation byte (top two bits `10`).
/// A continuation byte never starts a scalar, so the gap boundary must not
/// stop on one.
pub fn is_continuation(byte: u8) -> bool {
    return byte & 0b1100_0000 == 0b1000_0000;
}

/// Return true if the byte may sit at the gap boundary: an ASCII byte or
/// the lead byte of a multi-byte sequence.
pub fn is_boundary(byte: u8) -> bool {
    return !is_continuation(byte);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_not_continuation() {
        for byte in 0x00..=0x7f {
            assert!(!is_continuation(byte));
            assert!(is_boundary(byte));
        }
    }

    #[test]
    fn continuation_range_is_continuation() {
        for byte in 0x80..=0xbf {
            assert!(is_continuation(byte));
            assert!(!is_boundary(byte));
        }
    }

    #[test]
    fn lead_bytes_are_boundaries() {
        for byte in 0xc0..=0xff {
            assert!(!is_continuation(byte));
            assert!(is_boundary(byte));
        }
    }

    #[test]
    fn classifies_real_encodings() {
        // U+1F600 encodes as f0 9f 98 80: one lead, three continuations
        let emoji = "😀".as_bytes();
        assert!(is_boundary(emoji[0]));
        assert!(is_continuation(emoji[1]));
        assert!(is_continuation(emoji[2]));
        assert!(is_continuation(emoji[3]));
    }
}
