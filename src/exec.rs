use crate::cpu::{Cpu, Trap, PC_KEEP_MASK};
use crate::instruction::Instruction;
use crate::memory::Bus;

pub trait Executor {
    fn exec<B: Bus>(&self, cpu: &mut Cpu, bus: &mut B, instruction: &Instruction)
        -> Result<(), Trap>;
}

/// Straight interpreter over the instruction set. `exec` runs with the PC
/// already advanced past the current instruction.
pub struct Interp;

impl Executor for Interp {
    fn exec<B: Bus>(
        &self,
        cpu: &mut Cpu,
        bus: &mut B,
        instruction: &Instruction,
    ) -> Result<(), Trap> {
        match instruction {
            Instruction::And { r1, r2 } => {
                cpu.gpr[*r1 as usize] &= cpu.gpr[*r2 as usize];
            }
            Instruction::AddImmediate { r1, immediate } => {
                let r = *r1 as usize;
                cpu.gpr[r] = cpu.gpr[r].wrapping_add(*immediate as u32);
            }
            Instruction::OrImmediate { r1, immediate } => {
                cpu.gpr[*r1 as usize] |= *immediate as u32;
            }
            Instruction::LoadWord { r1, r2 } => {
                let addr = cpu.gpr[*r2 as usize];
                let value = bus
                    .read_int(addr)
                    .map_err(|source| Trap::Bus { addr, source })?;
                cpu.gpr[*r1 as usize] = value;
            }
            Instruction::StoreWord { r1, r2 } => {
                let addr = cpu.gpr[*r2 as usize];
                bus.write_int(addr, cpu.gpr[*r1 as usize])
                    .map_err(|source| Trap::Bus { addr, source })?;
            }
            Instruction::JumpImmediate { immediate } => {
                // The immediate is already a byte address.
                cpu.pc = (cpu.pc & PC_KEEP_MASK) | *immediate as u32;
            }
            Instruction::Asciiz { .. } | Instruction::ErrorLine { .. } => {
                return Err(Trap::NotExecutable {
                    pc: cpu.pc.wrapping_sub(2),
                });
            }
        }
        Ok(())
    }
}
