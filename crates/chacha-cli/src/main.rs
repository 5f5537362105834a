//! Command-line interface for the ChaCha reference model.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chacha_core::{CipherEngine, StateObserver, BLOCK_BYTES, STATE_WORDS};
use chacha_vectors::{check_block, format_block, ALL};
use clap::{Parser, Subcommand};

/// ChaCha reference model CLI.
#[derive(Parser)]
#[command(
    name = "chacha-ref",
    version,
    author,
    about = "Bit-exact ChaCha stream cipher reference model"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print keystream blocks for a key/IV.
    Keystream {
        /// Key as 32 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// IV as 16 hex characters.
        #[arg(long, value_name = "HEX")]
        iv_hex: String,
        /// Number of rounds (even, at least 2).
        #[arg(long, default_value_t = CipherEngine::DEFAULT_ROUNDS)]
        rounds: u32,
        /// Number of 64-byte blocks to print.
        #[arg(long, default_value_t = 1)]
        blocks: u64,
        /// Block counter value to start from.
        #[arg(long, default_value_t = 0)]
        counter: u64,
    },
    /// Encrypt 64-byte blocks from a file.
    Enc {
        /// Key as 32 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// IV as 16 hex characters.
        #[arg(long, value_name = "HEX")]
        iv_hex: String,
        /// Number of rounds (even, at least 2).
        #[arg(long, default_value_t = CipherEngine::DEFAULT_ROUNDS)]
        rounds: u32,
        /// Input file (must be a multiple of 64 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output file.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt 64-byte blocks from a file (the same XOR operation as enc).
    Dec {
        /// Key as 32 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// IV as 16 hex characters.
        #[arg(long, value_name = "HEX")]
        iv_hex: String,
        /// Number of rounds (even, at least 2).
        #[arg(long, default_value_t = CipherEngine::DEFAULT_ROUNDS)]
        rounds: u32,
        /// Input file (must be a multiple of 64 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output file.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Run the built-in known-answer vectors.
    Check,
    /// Print the working state after every quarter-round of one block.
    Trace {
        /// Key as 32 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// IV as 16 hex characters.
        #[arg(long, value_name = "HEX")]
        iv_hex: String,
        /// Number of rounds (even, at least 2).
        #[arg(long, default_value_t = CipherEngine::DEFAULT_ROUNDS)]
        rounds: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Keystream {
            key_hex,
            iv_hex,
            rounds,
            blocks,
            counter,
        } => cmd_keystream(&key_hex, &iv_hex, rounds, blocks, counter),
        Commands::Enc {
            key_hex,
            iv_hex,
            rounds,
            input,
            output,
        } => cmd_xcrypt(&key_hex, &iv_hex, rounds, &input, &output),
        Commands::Dec {
            key_hex,
            iv_hex,
            rounds,
            input,
            output,
        } => cmd_xcrypt(&key_hex, &iv_hex, rounds, &input, &output),
        Commands::Check => cmd_check(),
        Commands::Trace {
            key_hex,
            iv_hex,
            rounds,
        } => cmd_trace(&key_hex, &iv_hex, rounds),
    }
}

fn cmd_keystream(key_hex: &str, iv_hex: &str, rounds: u32, blocks: u64, counter: u64) -> Result<()> {
    let mut engine = build_engine(key_hex, iv_hex, rounds)?;
    engine.set_counter(counter);
    for i in 0..blocks {
        println!("Block {}:", counter.wrapping_add(i));
        println!("{}", format_block(&engine.keystream_block()));
        println!();
    }
    Ok(())
}

fn cmd_xcrypt(
    key_hex: &str,
    iv_hex: &str,
    rounds: u32,
    input_path: &PathBuf,
    output_path: &PathBuf,
) -> Result<()> {
    let mut engine = build_engine(key_hex, iv_hex, rounds)?;
    let mut data =
        fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    if data.len() % BLOCK_BYTES != 0 {
        bail!("input length must be a multiple of {BLOCK_BYTES} bytes");
    }
    for chunk in data.chunks_mut(BLOCK_BYTES) {
        let block = engine.process_block(chunk)?;
        chunk.copy_from_slice(&block);
    }
    fs::write(output_path, data).with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_check() -> Result<()> {
    let mut failures = 0usize;
    for vector in ALL {
        let mut engine = CipherEngine::with_rounds(&vector.key(), &vector.iv(), vector.rounds)
            .with_context(|| format!("construct engine for {}", vector.name))?;
        engine.set_counter(vector.counter);

        let expected = vector.keystream();
        let mut actual = Vec::with_capacity(expected.len());
        for _ in 0..expected.len() / BLOCK_BYTES {
            actual.extend_from_slice(&engine.keystream_block());
        }

        match check_block(&actual, &expected, vector.name) {
            Ok(()) => println!("SUCCESS: {} was correct.", vector.name),
            Err(mismatch) => {
                println!("{mismatch}");
                failures += 1;
            }
        }
        println!();
    }
    if failures > 0 {
        bail!("{failures} test case(s) failed");
    }
    Ok(())
}

fn cmd_trace(key_hex: &str, iv_hex: &str, rounds: u32) -> Result<()> {
    let mut engine = build_engine(key_hex, iv_hex, rounds)?;
    println!("State before round processing:");
    println!("{}", format_state(&engine.state()));
    println!();

    let mut printer = TracePrinter;
    let keystream = engine.keystream_block_observed(&mut printer);

    println!("Keystream block:");
    println!("{}", format_block(&keystream));
    Ok(())
}

fn build_engine(key_hex: &str, iv_hex: &str, rounds: u32) -> Result<CipherEngine> {
    let key = hex::decode(key_hex.trim()).context("decode key hex")?;
    let iv = hex::decode(iv_hex.trim()).context("decode IV hex")?;
    let engine = CipherEngine::with_rounds(&key, &iv, rounds).context("construct engine")?;
    Ok(engine)
}

/// Prints the working state in four rows of four words.
fn format_state(x: &[u32; STATE_WORDS]) -> String {
    let mut out = String::new();
    for (i, row) in x.chunks(4).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for (j, word) in row.iter().enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            out.push_str(&format!("{:2}: 0x{word:08x}", i * 4 + j));
        }
    }
    out
}

struct TracePrinter;

impl StateObserver for TracePrinter {
    fn after_quarter_round(&mut self, index: usize, x: &[u32; STATE_WORDS]) {
        println!("X after QR {index}:");
        println!("{}", format_state(x));
        println!();
    }

    fn after_double_round(&mut self, index: usize, x: &[u32; STATE_WORDS]) {
        println!("X after doubleround 0x{index:02x}:");
        println!("{}", format_state(x));
        println!();
    }
}
