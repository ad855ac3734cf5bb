use std::io;

use anyhow::Context;
use clap::Parser;
use hdp_codec::{
    encoder::program_input::transform_program_output,
    utils::{
        reader::{read_program_output, read_to_nonempty_string},
        writer::write_json_pretty,
    },
};

/// Reads a Cairo program output list (`[[felt, ...]]`) on stdin and writes it as public
/// program input on stdout.
#[derive(Parser, Debug)]
pub struct Cli {}

fn main() -> anyhow::Result<()> {
    env_logger::try_init()?;
    Cli::parse();
    let input = read_to_nonempty_string(io::stdin().lock(), "program output")?;
    let values = read_program_output(input.as_bytes()).context("Failed to parse program output")?;
    log::debug!("Transforming {} program output values", values.len());
    write_json_pretty(io::stdout().lock(), &transform_program_output(&values))?;
    Ok(())
}
