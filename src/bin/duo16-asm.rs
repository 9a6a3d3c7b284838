use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use duo16_rs::{mif, parser, Instruction};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble duo16 source into a memory-initialization file"
)]
struct Opts {
    /// Input assembly file (one instruction or directive per line)
    #[arg(value_name = "ASMFILE")]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let source = std::fs::read_to_string(&opts.input)
        .with_context(|| format!("file not found or not readable: {}", opts.input.display()))?;

    let lines = parser::parse_program(&source);
    let mut errors = 0;
    for line in &lines {
        if let Instruction::ErrorLine { message } = &line.instruction {
            eprintln!("line {}: {}", line.number, message);
            errors += 1;
        }
    }
    if errors > 0 {
        bail!("{errors} line(s) failed to parse");
    }

    print!("{}", mif::write_to_string(&lines)?);
    Ok(())
}
