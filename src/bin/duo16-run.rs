use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use duo16_rs::codec;
use duo16_rs::exec::Interp;
use duo16_rs::{parser, Bus, Cpu, Instruction, LinearMemory};

#[derive(Parser, Debug)]
#[command(author, version, about = "Assemble and run a duo16 program")]
struct Opts {
    /// Entry point (byte address)
    #[arg(short, long, default_value_t = 0)]
    entry: u32,
    /// Maximum number of instructions to execute
    #[arg(short, long, default_value_t = 10_000)]
    steps: u64,
    /// Write the final CPU state as JSON
    #[arg(long, value_name = "FILE")]
    dump_state: Option<PathBuf>,
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

    let mut mem = LinearMemory::new(64 * 1024);

    // Lay the program out at consecutive even addresses, one word per cell.
    let mut address = 0u32;
    for line in &lines {
        match &line.instruction {
            Instruction::ErrorLine { message } => bail!("line {}: {}", line.number, message),
            Instruction::Asciiz { value } => {
                for ascii in value.chars().map(|c| c as u32).chain(std::iter::once(0)) {
                    mem.write_int(address, ascii)?;
                    address += 2;
                }
            }
            instruction => {
                mem.write_int(address, codec::encode(instruction)? as u32)?;
                address += 2;
            }
        }
    }

    let mut cpu = Cpu::new();
    cpu.reset(opts.entry);
    let exec = Interp;
    for _ in 0..opts.steps {
        if let Err(trap) = cpu.step(&mut mem, &exec) {
            eprintln!("TRAP: {trap}");
            break;
        }
    }

    for (i, value) in cpu.gpr.iter().enumerate() {
        println!("$r{i:<2} = {value:#010x}");
    }
    if let Some(path) = &opts.dump_state {
        std::fs::write(path, serde_json::to_string_pretty(&cpu)?)?;
    }
    Ok(())
}
