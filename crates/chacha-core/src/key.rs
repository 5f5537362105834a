//! Key and IV types.

use crate::block::word_from_le;
use crate::error::CipherError;

/// Constant words selected for 128-bit keys (`"expand 16-byte k"`).
pub const TAU: [u32; 4] = [0x6170_7865, 0x3120_646e, 0x7962_2d36, 0x6b20_6574];

/// Constant words selected for 256-bit keys (`"expand 32-byte k"`).
pub const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Cipher key of either 128 or 256 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// 128-bit key. Selects the [`TAU`] constants; the four key words fill
    /// both halves of the key slots.
    Key128([u8; 16]),
    /// 256-bit key. Selects the [`SIGMA`] constants.
    Key256([u8; 32]),
}

impl Key {
    /// Validates `bytes` and wraps it as a key.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CipherError> {
        match bytes.len() {
            16 => {
                let mut key = [0u8; 16];
                key.copy_from_slice(bytes);
                Ok(Key::Key128(key))
            }
            32 => {
                let mut key = [0u8; 32];
                key.copy_from_slice(bytes);
                Ok(Key::Key256(key))
            }
            len => Err(CipherError::InvalidKeyLength(len)),
        }
    }

    /// Returns the constant words selected by the key length.
    pub fn constants(&self) -> [u32; 4] {
        match self {
            Key::Key128(_) => TAU,
            Key::Key256(_) => SIGMA,
        }
    }

    /// Packs the key into the eight key slots of the state, little-endian.
    /// A 128-bit key is repeated across both halves.
    pub(crate) fn words(&self) -> [u32; 8] {
        let mut words = [0u32; 8];
        match self {
            Key::Key128(key) => {
                for (i, chunk) in key.chunks_exact(4).enumerate() {
                    let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
                    let word = word_from_le(&bytes);
                    words[i] = word;
                    words[i + 4] = word;
                }
            }
            Key::Key256(key) => {
                for (i, chunk) in key.chunks_exact(4).enumerate() {
                    let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
                    words[i] = word_from_le(&bytes);
                }
            }
        }
        words
    }
}

impl From<[u8; 16]> for Key {
    fn from(value: [u8; 16]) -> Self {
        Key::Key128(value)
    }
}

impl From<[u8; 32]> for Key {
    fn from(value: [u8; 32]) -> Self {
        Key::Key256(value)
    }
}

/// 64-bit IV (nonce) occupying the last two state slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Iv(pub [u8; 8]);

impl Iv {
    /// Validates `bytes` and wraps it as an IV.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CipherError> {
        match bytes.len() {
            8 => {
                let mut iv = [0u8; 8];
                iv.copy_from_slice(bytes);
                Ok(Iv(iv))
            }
            len => Err(CipherError::InvalidIvLength(len)),
        }
    }

    /// Packs the IV into its two state words, little-endian.
    pub(crate) fn words(&self) -> [u32; 2] {
        let lo: [u8; 4] = self.0[..4].try_into().expect("chunk length is four");
        let hi: [u8; 4] = self.0[4..].try_into().expect("chunk length is four");
        [word_from_le(&lo), word_from_le(&hi)]
    }
}

impl From<[u8; 8]> for Iv {
    fn from(value: [u8; 8]) -> Self {
        Iv(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_length_selects_constant_set() {
        assert_eq!(Key::from([0u8; 16]).constants(), TAU);
        assert_eq!(Key::from([0u8; 32]).constants(), SIGMA);
    }

    #[test]
    fn constants_spell_expand_n_byte_k() {
        let text: Vec<u8> = SIGMA.iter().flat_map(|w| w.to_le_bytes()).collect();
        assert_eq!(&text, b"expand 32-byte k");
        let text: Vec<u8> = TAU.iter().flat_map(|w| w.to_le_bytes()).collect();
        assert_eq!(&text, b"expand 16-byte k");
    }

    #[test]
    fn short_key_is_repeated_across_key_slots() {
        let mut bytes = [0u8; 16];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let words = Key::from(bytes).words();
        assert_eq!(words[0], 0x0302_0100);
        assert_eq!(words[3], 0x0f0e_0d0c);
        assert_eq!(&words[..4], &words[4..]);
    }

    #[test]
    fn long_key_fills_key_slots_once() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let words = Key::from(bytes).words();
        assert_eq!(words[0], 0x0302_0100);
        assert_eq!(words[7], 0x1f1e_1d1c);
    }

    #[test]
    fn rejects_off_by_one_key_lengths() {
        assert_eq!(
            Key::from_slice(&[0u8; 15]),
            Err(CipherError::InvalidKeyLength(15))
        );
        assert_eq!(
            Key::from_slice(&[0u8; 17]),
            Err(CipherError::InvalidKeyLength(17))
        );
        assert!(Key::from_slice(&[0u8; 16]).is_ok());
        assert!(Key::from_slice(&[0u8; 32]).is_ok());
    }

    #[test]
    fn rejects_off_by_one_iv_lengths() {
        assert_eq!(
            Iv::from_slice(&[0u8; 7]),
            Err(CipherError::InvalidIvLength(7))
        );
        assert_eq!(
            Iv::from_slice(&[0u8; 9]),
            Err(CipherError::InvalidIvLength(9))
        );
        assert!(Iv::from_slice(&[0u8; 8]).is_ok());
    }

    #[test]
    fn iv_packs_little_endian() {
        let iv = Iv::from([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(iv.words(), [0x0403_0201, 0x0807_0605]);
    }
}
