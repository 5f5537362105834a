//! ARX round network: quarter-rounds applied as double-rounds.

use crate::block::STATE_WORDS;

/// Quarter-round index patterns for the column pass of a double-round.
pub const COLUMN_PATTERN: [[usize; 4]; 4] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
];

/// Quarter-round index patterns for the diagonal pass of a double-round.
pub const DIAGONAL_PATTERN: [[usize; 4]; 4] = [
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];

/// Applies the ARX quarter-round to four words.
///
/// The operation order and the rotation amounts 16, 12, 8, 7 define the
/// cipher; changing either produces an incompatible permutation.
#[inline]
pub fn quarter_round(mut a: u32, mut b: u32, mut c: u32, mut d: u32) -> (u32, u32, u32, u32) {
    a = a.wrapping_add(b);
    d ^= a;
    d = d.rotate_left(16);
    c = c.wrapping_add(d);
    b ^= c;
    b = b.rotate_left(12);
    a = a.wrapping_add(b);
    d ^= a;
    d = d.rotate_left(8);
    c = c.wrapping_add(d);
    b ^= c;
    b = b.rotate_left(7);
    (a, b, c, d)
}

/// Applies one quarter-round to the state words selected by `pattern`.
#[inline]
pub fn quarter_round_at(x: &mut [u32; STATE_WORDS], pattern: [usize; 4]) {
    let [ai, bi, ci, di] = pattern;
    let (a, b, c, d) = quarter_round(x[ai], x[bi], x[ci], x[di]);
    x[ai] = a;
    x[bi] = b;
    x[ci] = c;
    x[di] = d;
}

/// One column pass followed by one diagonal pass over the full state.
///
/// The four quarter-rounds within each pass touch disjoint index sets, so
/// their order is immaterial; the pass pairing is not.
pub fn double_round(x: &mut [u32; STATE_WORDS]) {
    for pattern in COLUMN_PATTERN {
        quarter_round_at(x, pattern);
    }
    for pattern in DIAGONAL_PATTERN {
        quarter_round_at(x, pattern);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8439, section 2.1.1.
    #[test]
    fn quarter_round_matches_rfc_vector() {
        let (a, b, c, d) = quarter_round(0x1111_1111, 0x0102_0304, 0x9b8d_6f43, 0x0123_4567);
        assert_eq!(a, 0xea2a_92f4);
        assert_eq!(b, 0xcb1c_f8ce);
        assert_eq!(c, 0x4581_472e);
        assert_eq!(d, 0x5881_c4bb);
    }

    // RFC 8439, section 2.2.1: a quarter-round applied to one state diagonal.
    #[test]
    fn quarter_round_at_matches_rfc_state_vector() {
        let mut x: [u32; STATE_WORDS] = [
            0x879531e0, 0xc5ecf37d, 0x516461b1, 0xc9a62f8a,
            0x44c20ef3, 0x3390af7f, 0xd9fc690b, 0x2a5f714c,
            0x53372767, 0xb00a5631, 0x974c541a, 0x359e9963,
            0x5c971061, 0x3d631689, 0x2098d9d6, 0x91dbd320,
        ];
        quarter_round_at(&mut x, [2, 7, 8, 13]);
        let expected: [u32; STATE_WORDS] = [
            0x879531e0, 0xc5ecf37d, 0xbdb886dc, 0xc9a62f8a,
            0x44c20ef3, 0x3390af7f, 0xd9fc690b, 0xcfacafd2,
            0xe46bea80, 0xb00a5631, 0x974c541a, 0x359e9963,
            0x5c971061, 0xccc07c79, 0x2098d9d6, 0x91dbd320,
        ];
        assert_eq!(x, expected);
    }

    #[test]
    fn column_and_diagonal_patterns_cover_every_slot() {
        for pass in [COLUMN_PATTERN, DIAGONAL_PATTERN] {
            let mut seen = [false; STATE_WORDS];
            for pattern in pass {
                for idx in pattern {
                    assert!(!seen[idx], "slot {idx} touched twice in one pass");
                    seen[idx] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn double_round_permutes_the_state() {
        let mut x = [0u32; STATE_WORDS];
        x[0] = 1;
        let before = x;
        double_round(&mut x);
        assert_ne!(x, before);
    }
}
