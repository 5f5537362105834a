//! Block representation and word/byte conversion helpers.
//!
//! Every conversion between 32-bit words and bytes in this model is
//! little-endian: `word = b0 | b1 << 8 | b2 << 16 | b3 << 24`. The same
//! convention covers key packing, IV packing, the block counter, and
//! keystream serialization; test vectors only match if it is applied
//! uniformly.

/// Cipher block of 64 bytes.
pub type Block = [u8; 64];

/// Number of bytes consumed and produced per block.
pub const BLOCK_BYTES: usize = 64;

/// Number of 32-bit words in the cipher state.
pub const STATE_WORDS: usize = 16;

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Packs four bytes into a little-endian 32-bit word.
#[inline]
pub fn word_from_le(bytes: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*bytes)
}

/// Unpacks a 32-bit word into its four little-endian bytes.
#[inline]
pub fn le_from_word(word: u32) -> [u8; 4] {
    word.to_le_bytes()
}

/// Serializes sixteen state words into a 64-byte block, little-endian.
pub fn block_from_words(words: &[u32; STATE_WORDS]) -> Block {
    let mut out = [0u8; BLOCK_BYTES];
    for (chunk, word) in out.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&le_from_word(*word));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_packing_is_little_endian() {
        assert_eq!(word_from_le(&[0x01, 0x02, 0x03, 0x04]), 0x0403_0201);
        assert_eq!(le_from_word(0x0403_0201), [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn word_round_trip() {
        for word in [0, 1, 0xffff_ffff, 0x6170_7865, 0xdead_beef] {
            assert_eq!(word_from_le(&le_from_word(word)), word);
        }
    }

    #[test]
    fn block_serialization_keeps_word_order() {
        let mut words = [0u32; STATE_WORDS];
        words[0] = 0x0403_0201;
        words[15] = 0x8070_6050;
        let block = block_from_words(&words);
        assert_eq!(&block[0..4], &[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(&block[60..64], &[0x50, 0x60, 0x70, 0x80]);
    }

    #[test]
    fn xor_is_self_inverse() {
        let mut data = [0xa5u8; BLOCK_BYTES];
        let mask = {
            let mut m = [0u8; BLOCK_BYTES];
            for (i, b) in m.iter_mut().enumerate() {
                *b = i as u8;
            }
            m
        };
        let original = data;
        xor_in_place(&mut data, &mask);
        assert_ne!(data, original);
        xor_in_place(&mut data, &mask);
        assert_eq!(data, original);
    }
}
