pub mod codec;
pub mod cpu;
pub mod disasm;
pub mod exec;
pub mod instruction;
pub mod memory;
pub mod mif;
pub mod parser;

pub use cpu::{Cpu, Trap};
pub use instruction::{Instruction, Opcode, SourceLine};
pub use memory::{Bus, LinearMemory};
