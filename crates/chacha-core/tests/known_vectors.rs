//! Drives the engine against the full known-answer table.

use chacha_core::{CipherEngine, BLOCK_BYTES};
use chacha_vectors::{check_block, ALL};

#[test]
fn every_known_answer_is_reproduced() {
    for vector in ALL {
        let mut engine = CipherEngine::with_rounds(&vector.key(), &vector.iv(), vector.rounds)
            .unwrap_or_else(|err| panic!("{}: {err}", vector.name));
        engine.set_counter(vector.counter);

        let expected = vector.keystream();
        let mut actual = Vec::with_capacity(expected.len());
        for _ in 0..expected.len() / BLOCK_BYTES {
            actual.extend_from_slice(&engine.keystream_block());
        }

        if let Err(mismatch) = check_block(&actual, &expected, vector.name) {
            panic!("{mismatch}");
        }
    }
}

#[test]
fn keystream_equals_encryption_of_zero_blocks() {
    for vector in ALL {
        let mut direct = CipherEngine::with_rounds(&vector.key(), &vector.iv(), vector.rounds)
            .unwrap_or_else(|err| panic!("{}: {err}", vector.name));
        let mut xored = direct.clone();
        assert_eq!(
            direct.keystream_block(),
            xored.process_block(&[0u8; BLOCK_BYTES]).unwrap(),
            "{}",
            vector.name
        );
    }
}
