//! Tier boundaries for the SQLite4 varuint encoding

use serde::Serialize;

/// Longest possible encoding: tag byte plus 8 payload bytes
pub const MAX_VARINT_LEN: usize = 9;

/// Largest value stored directly in the tag byte
pub const ONE_BYTE_MAX: u64 = 240;
/// Largest value of the 0xF1..=0xF8 two-byte tier
pub const TWO_BYTE_MAX: u64 = 2287;
/// Largest value of the 0xF9 three-byte tier
pub const THREE_BYTE_MAX: u64 = 67823;

/// Offset subtracted before splitting a two-byte payload
pub const TWO_BYTE_BASE: u64 = 240;
/// Offset subtracted before splitting a three-byte payload
pub const THREE_BYTE_BASE: u64 = 2288;

/// Tag bytes
pub const TAG_TWO_BYTE_FIRST: u8 = 0xF1;
pub const TAG_TWO_BYTE_LAST: u8 = 0xF8;
pub const TAG_THREE_BYTE: u8 = 0xF9;
/// First big-endian tag (3-byte payload); 0xFB..=0xFF follow with one more byte each
pub const TAG_BIG_ENDIAN_FIRST: u8 = 0xFA;

/// One row of the tier table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tier {
    pub len: usize,
    pub first_tag: u8,
    pub last_tag: u8,
    pub min: u64,
    pub max: u64,
}

/// The nine tiers in ascending value order
pub const TIERS: [Tier; 9] = [
    Tier { len: 1, first_tag: 0x00, last_tag: 0xF0, min: 0, max: ONE_BYTE_MAX },
    Tier { len: 2, first_tag: 0xF1, last_tag: 0xF8, min: 241, max: TWO_BYTE_MAX },
    Tier { len: 3, first_tag: 0xF9, last_tag: 0xF9, min: 2288, max: THREE_BYTE_MAX },
    Tier { len: 4, first_tag: 0xFA, last_tag: 0xFA, min: 67824, max: (1 << 24) - 1 },
    Tier { len: 5, first_tag: 0xFB, last_tag: 0xFB, min: 1 << 24, max: (1 << 32) - 1 },
    Tier { len: 6, first_tag: 0xFC, last_tag: 0xFC, min: 1 << 32, max: (1 << 40) - 1 },
    Tier { len: 7, first_tag: 0xFD, last_tag: 0xFD, min: 1 << 40, max: (1 << 48) - 1 },
    Tier { len: 8, first_tag: 0xFE, last_tag: 0xFE, min: 1 << 48, max: (1 << 56) - 1 },
    Tier { len: 9, first_tag: 0xFF, last_tag: 0xFF, min: 1 << 56, max: u64::MAX },
];

impl Tier {
    /// Tier whose tag range contains `tag`
    pub fn for_tag(tag: u8) -> &'static Tier {
        let mut i = 0;
        while TIERS[i].last_tag < tag {
            i += 1;
        }
        &TIERS[i]
    }

    /// Smallest tier whose value range covers `value`
    pub fn for_value(value: u64) -> &'static Tier {
        let mut i = 0;
        while TIERS[i].max < value {
            i += 1;
        }
        &TIERS[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_contiguous() {
        for pair in TIERS.windows(2) {
            assert_eq!(pair[0].max + 1, pair[1].min);
            assert_eq!(pair[0].last_tag.wrapping_add(1), pair[1].first_tag);
            assert_eq!(pair[0].len + 1, pair[1].len);
        }
        assert_eq!(TIERS[0].min, 0);
        assert_eq!(TIERS[8].max, u64::MAX);
        assert_eq!(TIERS[8].len, MAX_VARINT_LEN);
    }

    #[test]
    fn lookup_by_tag_and_value() {
        assert_eq!(Tier::for_tag(0xF0).len, 1);
        assert_eq!(Tier::for_tag(0xF5).len, 2);
        assert_eq!(Tier::for_tag(0xFF).len, 9);
        assert_eq!(Tier::for_value(240).len, 1);
        assert_eq!(Tier::for_value(241).len, 2);
        assert_eq!(Tier::for_value(u64::MAX).len, 9);
    }
}
