use std::io;

use anyhow::Context;
use clap::Parser;
use hdp_codec::{
    decoder::native::decode_hex,
    utils::{reader::read_to_nonempty_string, writer::write_json_pretty},
};

/// Decodes ABI encoded job outputs back into packed records.
#[derive(Parser, Debug)]
pub struct Cli {
    /// Hex encoded job outputs. Read from stdin if omitted.
    pub encoded: Option<String>,
    /// Print the 128-bit limbs each packed field was merged from
    #[arg(long)]
    pub unpack: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::try_init()?;
    let cli = Cli::parse();
    let encoded = match cli.encoded {
        Some(encoded) => encoded,
        None => read_to_nonempty_string(io::stdin().lock(), "encoded job outputs")?,
    };
    let packed = decode_hex(&encoded).context("Failed to decode job outputs")?;
    log::info!("Decoded {} job outputs", packed.len());
    let stdout = io::stdout().lock();
    if cli.unpack {
        let raws: Vec<_> = packed.iter().map(|record| record.unpack()).collect();
        write_json_pretty(stdout, &raws)?;
    } else {
        write_json_pretty(stdout, &packed)?;
    }
    Ok(())
}
