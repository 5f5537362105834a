//! Known-answer fixtures and comparison reporting for the ChaCha model.
//!
//! The fixture table pins the cipher down bit-for-bit: each entry names a
//! key/IV/round-count tuple and the exact keystream it must produce. The
//! reduced-round entries come from the eSTREAM/ECRYPT verified test
//! vectors; the 20-round entries come from RFC 8439 appendix A.1, whose
//! zero-key blocks carry over to the 64-bit IV construction because an
//! all-zero IV fills the same state slots either way.
//!
//! The fixtures are immutable data owned by the test harness; the engine
//! crate never depends on them except in its own tests.

use std::fmt;

/// A fixed key/IV/round tuple with its expected keystream prefix.
#[derive(Clone, Copy, Debug)]
pub struct KnownAnswer {
    /// Label used in reports.
    pub name: &'static str,
    /// Round count the engine must be configured with.
    pub rounds: u32,
    /// Key, hex encoded (16 or 32 bytes).
    pub key_hex: &'static str,
    /// IV, hex encoded (8 bytes).
    pub iv_hex: &'static str,
    /// Block counter value the expected keystream starts at.
    pub counter: u64,
    /// Expected keystream, hex encoded, a whole number of 64-byte blocks.
    pub keystream_hex: &'static str,
}

impl KnownAnswer {
    /// Decoded key bytes.
    pub fn key(&self) -> Vec<u8> {
        hex::decode(self.key_hex).expect("fixture key hex")
    }

    /// Decoded IV bytes.
    pub fn iv(&self) -> Vec<u8> {
        hex::decode(self.iv_hex).expect("fixture iv hex")
    }

    /// Decoded expected keystream bytes.
    pub fn keystream(&self) -> Vec<u8> {
        hex::decode(self.keystream_hex).expect("fixture keystream hex")
    }
}

/// The full known-answer table.
pub const ALL: &[KnownAnswer] = &[
    KnownAnswer {
        name: "chacha8 256-bit zero key",
        rounds: 8,
        key_hex: "0000000000000000000000000000000000000000000000000000000000000000",
        iv_hex: "0000000000000000",
        counter: 0,
        keystream_hex: "3e00ef2f895f40d67f5bb8e81f09a5a12c840ec3ce9a7f3b181be188ef711a1e\
                        984ce172b9216f419f445367456d5619314a42a3da86b001387bfdb80e0cfe42",
    },
    KnownAnswer {
        name: "chacha8 128-bit zero key",
        rounds: 8,
        key_hex: "00000000000000000000000000000000",
        iv_hex: "0000000000000000",
        counter: 0,
        keystream_hex: "e28a5fa4a67f8c5defed3e6fb7303486aa8427d31419a729572d777953491120\
                        b64ab8e72b8deb85cd6aea7cb6089a101824beeb08814a428aab1fa2c816081b",
    },
    KnownAnswer {
        name: "chacha12 256-bit zero key",
        rounds: 12,
        key_hex: "0000000000000000000000000000000000000000000000000000000000000000",
        iv_hex: "0000000000000000",
        counter: 0,
        keystream_hex: "9bf49a6a0755f953811fce125f2683d50429c3bb49e074147e0089a52eae155f\
                        0564f879d27ae3c02ce82834acfa8c793a629f2ca0de6919610be82f411326be",
    },
    KnownAnswer {
        name: "chacha20 256-bit zero key, blocks 0-1",
        rounds: 20,
        key_hex: "0000000000000000000000000000000000000000000000000000000000000000",
        iv_hex: "0000000000000000",
        counter: 0,
        keystream_hex: "76b8e0ada0f13d90405d6ae55386bd28bdd219b8a08ded1aa836efcc8b770dc7\
                        da41597c5157488d7724e03fb8d84a376a43b8f41518a11cc387b669b2ee6586\
                        9f07e7be5551387a98ba977c732d080dcb0f29a048e3656912c6533e32ee7aed\
                        29b721769ce64e43d57133b074d839d531ed1f28510afb45ace10a1f4b794d6f",
    },
    KnownAnswer {
        name: "chacha20 256-bit zero key, seek to block 1",
        rounds: 20,
        key_hex: "0000000000000000000000000000000000000000000000000000000000000000",
        iv_hex: "0000000000000000",
        counter: 1,
        keystream_hex: "9f07e7be5551387a98ba977c732d080dcb0f29a048e3656912c6533e32ee7aed\
                        29b721769ce64e43d57133b074d839d531ed1f28510afb45ace10a1f4b794d6f",
    },
];

/// Byte-for-byte mismatch report for one test case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Label of the failing case.
    pub case: String,
    /// The expected bytes.
    pub expected: Vec<u8>,
    /// The bytes the engine produced.
    pub actual: Vec<u8>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ERROR: {} was not correct.", self.case)?;
        writeln!(f, "Expected:")?;
        writeln!(f, "{}", format_block(&self.expected))?;
        writeln!(f, "Result:")?;
        write!(f, "{}", format_block(&self.actual))
    }
}

impl std::error::Error for Mismatch {}

/// Formats a block as rows of eight bytes for human inspection.
pub fn format_block(block: &[u8]) -> String {
    let mut out = String::new();
    for (i, row) in block.chunks(8).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for (j, byte) in row.iter().enumerate() {
            if j > 0 {
                out.push(' ');
            }
            out.push_str(&format!("0x{byte:02x}"));
        }
    }
    out
}

/// Compares a result against the expected bytes for the named case.
pub fn check_block(actual: &[u8], expected: &[u8], case: &str) -> Result<(), Mismatch> {
    if actual == expected {
        Ok(())
    } else {
        Err(Mismatch {
            case: case.to_string(),
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_decode_to_whole_blocks() {
        for vector in ALL {
            let key = vector.key();
            assert!(key.len() == 16 || key.len() == 32, "{}", vector.name);
            assert_eq!(vector.iv().len(), 8, "{}", vector.name);
            let keystream = vector.keystream();
            assert!(!keystream.is_empty(), "{}", vector.name);
            assert_eq!(keystream.len() % 64, 0, "{}", vector.name);
        }
    }

    #[test]
    fn format_block_prints_rows_of_eight() {
        let block: Vec<u8> = (0u8..16).collect();
        let formatted = format_block(&block);
        assert_eq!(
            formatted,
            "0x00 0x01 0x02 0x03 0x04 0x05 0x06 0x07\n\
             0x08 0x09 0x0a 0x0b 0x0c 0x0d 0x0e 0x0f"
        );
    }

    #[test]
    fn check_block_reports_both_sides() {
        assert!(check_block(&[1, 2], &[1, 2], "ok case").is_ok());
        let err = check_block(&[1, 2], &[1, 3], "bad case").unwrap_err();
        assert_eq!(err.case, "bad case");
        assert_eq!(err.expected, vec![1, 3]);
        assert_eq!(err.actual, vec![1, 2]);
        let report = err.to_string();
        assert!(report.contains("bad case"));
        assert!(report.contains("Expected:"));
    }
}
