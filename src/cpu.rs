use anyhow::Error;

use crate::codec::{self, DecodeError};
use crate::disasm;
use crate::exec::Executor;
use crate::memory::Bus;
use serde::{Deserialize, Serialize};

/// PC bits a jump preserves. The program counter is assumed 17 bits wide:
/// J replaces the low 9 bits with its immediate and keeps bits 9..=16.
pub const PC_KEEP_MASK: u32 = 0xFF << 9;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cpu {
    pub pc: u32,
    pub gpr: [u32; 16],
}

#[derive(thiserror::Error, Debug)]
pub enum Trap {
    #[error("invalid instruction at {pc:#06x}: {source}")]
    InvalidInstruction {
        pc: u32,
        #[source]
        source: DecodeError,
    },
    #[error("not executable at {pc:#06x}")]
    NotExecutable { pc: u32 },
    #[error("bus error at {addr:#06x}: {source}")]
    Bus {
        addr: u32,
        #[source]
        source: Error,
    },
}

impl Cpu {
    pub fn new() -> Self {
        Self { pc: 0, gpr: [0; 16] }
    }

    pub fn reset(&mut self, reset_pc: u32) {
        self.pc = reset_pc;
    }

    /// Fetch, decode and execute one instruction. The PC advances by 2 before
    /// execution, so jumps see the address of the next instruction.
    pub fn step<B: Bus, X: Executor>(&mut self, bus: &mut B, exec: &X) -> Result<(), Trap> {
        let pc = self.pc;
        let word = bus
            .read_int(pc)
            .map_err(|source| Trap::Bus { addr: pc, source })? as u16;
        let instruction =
            codec::decode(word).map_err(|source| Trap::InvalidInstruction { pc, source })?;
        tracing::trace!(pc, "{}", disasm::fmt_instruction(&instruction));
        self.pc = pc.wrapping_add(2);
        exec.exec(self, bus, &instruction)
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
