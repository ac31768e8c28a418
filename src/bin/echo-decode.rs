use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use echo_rs::protocol::{DEFAULT_DELAY0, DEFAULT_DELAY1, DEFAULT_SEGMENTS};
use echo_rs::{segment, wav, DecoderConfig};

#[derive(Debug, Parser)]
#[command(name = "echo-decode")]
#[command(about = "Recover a message hidden in a WAV file by echo hiding", long_about = None)]
struct Args {
    /// Path to a WAV file.
    audio: PathBuf,

    /// Number of equal segments the signal is cut into (one bit each).
    #[arg(long, default_value_t = DEFAULT_SEGMENTS)]
    segments: usize,

    /// Samples per bit; overrides --segments.
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Echo delay in samples for a 0 bit.
    #[arg(long, default_value_t = DEFAULT_DELAY0)]
    delay0: usize,

    /// Echo delay in samples for a 1 bit.
    #[arg(long, default_value_t = DEFAULT_DELAY1)]
    delay1: usize,

    /// Print the decoded bytes as hex instead of text.
    #[arg(long, default_value_t = false)]
    bytes: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let signal = wav::load(&args.audio)
        .with_context(|| format!("failed to load {}", args.audio.display()))?;
    log::info!(
        "loaded {} samples at {} Hz ({:.2}s)",
        signal.samples.len(),
        signal.sample_rate,
        signal.duration_secs()
    );

    let chunk_size = match args.chunk_size {
        Some(n) => n,
        None => segment::chunk_size_for_segments(signal.samples.len(), args.segments)?,
    };
    let config = DecoderConfig::new(chunk_size, args.delay0, args.delay1);

    if args.bytes {
        let bytes = echo_rs::decode_bytes(&signal.samples, &config)?;
        let hex: Vec<String> = bytes.iter().map(|b| format!("{b:02x}")).collect();
        println!("{}", hex.join(" "));
    } else {
        let message = echo_rs::decode_with(&signal.samples, &config)?;
        println!("{message}");
    }
    Ok(())
}
