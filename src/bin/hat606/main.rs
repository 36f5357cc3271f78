//! hat606 - 606-style hi-hat renderer
//!
//! Run with: cargo run -- 0.2 0.5 1.0 0.0 -o hat.wav
//!
//! Renders a single hi-hat hit from the four knob values and writes a mono
//! 24-bit WAV, either to the file given with `-o` or to stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use color_eyre::eyre::WrapErr;
use hat606::io::wav;
use hat606::voices::hihat::{synthesize, HatParams};

/// Output sample rate (Hz).
const SAMPLE_RATE: f32 = 48_000.0;
/// Rendered length in seconds. Long enough for a fully open hat to ring out.
const DURATION: f32 = 2.0;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cluster tuning (0 = -20%, 0.5 = neutral, 1 = +20%)
    #[arg(value_parser = knob)]
    tune: f32,

    /// Base decay time (0 = 40 ms, 1 = 400 ms)
    #[arg(value_parser = knob)]
    decay: f32,

    /// Output level (0 = silent, 1 = full scale)
    #[arg(value_parser = knob)]
    level: f32,

    /// Openness (0 = closed, 1 = decay stretched to 2.5x)
    #[arg(value_parser = knob)]
    open: f32,

    /// Output file; the WAV streams to stdout when omitted
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

/// Knob values parse like C's atof: anything malformed degrades to 0.0.
fn knob(raw: &str) -> Result<f32, std::convert::Infallible> {
    Ok(raw.trim().parse().unwrap_or(0.0))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Missing arguments must exit with code 1, not clap's default 2.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    };

    let params = HatParams::new(args.tune, args.decay, args.level, args.open);
    let num_samples = (SAMPLE_RATE * DURATION) as usize;
    let buffer = synthesize(&params, SAMPLE_RATE, num_samples);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("cannot open output file {}", path.display()))?;
            let mut sink = BufWriter::new(file);
            wav::write_wav_24bit_mono(&mut sink, &buffer, SAMPLE_RATE as u32)
                .wrap_err_with(|| format!("failed writing {}", path.display()))?;
            sink.flush()?;
            eprintln!("wrote {} ({} samples)", path.display(), buffer.len());
        }
        None => {
            // stdout carries the WAV bytes; diagnostics stay on stderr.
            let stdout = io::stdout();
            let mut sink = stdout.lock();
            wav::write_wav_24bit_mono(&mut sink, &buffer, SAMPLE_RATE as u32)
                .wrap_err("failed writing wav to stdout")?;
            sink.flush()?;
        }
    }

    Ok(())
}
