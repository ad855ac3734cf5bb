use std::{fs::File, io, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use hdp_codec::{
    encoder::native::{encode_hex, pack_records},
    utils::{reader::read_raw_outputs, writer::write_json_pretty},
};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// ABI encoded `tuple(uint256,bytes32,...,uint256)[]`, for the verifier test harness
    #[default]
    Abi,
    /// Packed records as JSON
    Json,
}

/// Packs the raw outputs of HDP proving jobs and prints them ABI encoded.
#[derive(Parser, Debug)]
pub struct Cli {
    /// JSON array of raw job outputs
    pub outputs_file: PathBuf,
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    env_logger::try_init()?;
    let cli = Cli::parse();
    let file = File::open(&cli.outputs_file)
        .with_context(|| format!("Failed to open file {}", cli.outputs_file.display()))?;
    let raws = read_raw_outputs(file)
        .with_context(|| format!("Failed to parse job outputs in {}", cli.outputs_file.display()))?;
    log::info!("Read {} job outputs from {}", raws.len(), cli.outputs_file.display());
    let packed = pack_records(&raws);
    match cli.format {
        OutputFormat::Abi => println!("{}", encode_hex(&packed)),
        OutputFormat::Json => write_json_pretty(io::stdout().lock(), &packed)?,
    }
    Ok(())
}
