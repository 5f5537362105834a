//! Demonstrates encrypting one 64-byte block and decrypting it back.

use chacha_core::CipherEngine;

fn main() {
    let key = [7u8; 32];
    let iv = [1, 2, 3, 4, 5, 6, 7, 8];

    let mut block = [0u8; 64];
    block[..26].copy_from_slice(b"attack at dawn, 64 bytes..");

    let mut enc = CipherEngine::new(&key, &iv).expect("valid parameters");
    let ciphertext = enc.process_block(&block).expect("block is 64 bytes");

    // Decryption is the same XOR with a freshly initialized engine.
    let mut dec = CipherEngine::new(&key, &iv).expect("valid parameters");
    let plaintext = dec.process_block(&ciphertext).expect("block is 64 bytes");

    println!("ciphertext: {}", hex::encode(ciphertext));
    assert_eq!(plaintext, block);
    println!("round trip ok");
}
