//! Command-line front end for the SCHA hash.
//!
//! Hashes a text argument (or standard input) and prints the result. With
//! `--verbose` it also reports the hash length, the plaintext, the entropy
//! estimate and how long hashing took.

use std::io::{self, Read};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use scha::{SpinHasher, Variant, DEFAULT_HASH_LENGTH};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "scha", version, about = "Spinning Cat Hashing Algorithm")]
struct Args {
    /// Text to hash. Read from standard input when omitted or with `--stdin`.
    text: Option<String>,

    /// Read the text from standard input.
    #[arg(long, conflicts_with = "text")]
    stdin: bool,

    /// Number of output units (bytes, 16-bit words or characters).
    #[arg(short, long, default_value_t = DEFAULT_HASH_LENGTH)]
    length: usize,

    /// Output variant: byte-hex, wide-hex or small-alphabet.
    #[arg(short = 'V', long, default_value_t = Variant::ByteHex)]
    variant: Variant,

    /// Print hash length, plaintext, entropy and timing alongside the hash.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let hasher = SpinHasher::new(args.variant, args.length).context("invalid hash configuration")?;

    let text = match (args.stdin, args.text) {
        (false, Some(text)) => text,
        _ => read_stdin()?,
    };

    let started = Instant::now();
    let digest = hasher.hash(&text);
    let elapsed = started.elapsed();
    info!(
        variant = %hasher.variant(),
        length = hasher.length(),
        elapsed_us = elapsed.as_micros() as u64,
        "hashing speed"
    );

    if args.verbose {
        println!("Variant: {}", hasher.variant());
        println!("Hash Length: {}", hasher.length());
        println!(
            "Entropy: ~{:.2} bits",
            hasher.variant().entropy_bits(hasher.length())
        );
        println!("Hashing Speed: {:.3}ms", elapsed.as_secs_f64() * 1000.0);
        println!("Plaintext: \"{}\"", text);
        println!("Hash Output: \"{}\"", digest);
    } else {
        println!("{}", digest);
    }
    Ok(())
}

/// Reads all of standard input, dropping one trailing newline.
fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read text from standard input")?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
