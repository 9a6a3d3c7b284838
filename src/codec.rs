use crate::instruction::{func, Instruction, Opcode};

/// Mask for a register field once shifted into place.
const REGISTER_MASK: u16 = 0xF;

const IMMEDIATE_MASK: u16 = 0xFF;

#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("cannot encode error line: {0}")]
    ErrorLine(String),
    #[error("cannot encode a data directive")]
    Directive,
}

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("undefined opcode {0:#x}")]
    UndefinedOpcode(u16),
    #[error("undefined ALU function code {0:#x}")]
    UndefinedFunc(u16),
}

/// Encodes a machine instruction into its 16-bit word.
///
/// Layout, MSB to LSB: opcode in 15..12; ALU puts r1 in 11..8, r2 in 7..4 and
/// the function code in 3..0; SW/LW use the same register fields with a zero
/// low nibble; ORI/ADDI put r1 in 11..8 and the immediate in 7..0; J packs
/// the word address (stored immediate shifted right by 1) into 11..0.
///
/// `ErrorLine` and `Asciiz` have no encoding; asking for one is a caller bug
/// and reported as an error value.
pub fn encode(instruction: &Instruction) -> Result<u16, EncodeError> {
    match instruction {
        Instruction::And { r1, r2 } => Ok(Opcode::Alu.value() << 12
            | (*r1 as u16) << 8
            | (*r2 as u16) << 4
            | func::AND as u16),
        Instruction::AddImmediate { r1, immediate } => {
            Ok(Opcode::Addi.value() << 12 | (*r1 as u16) << 8 | immediate)
        }
        Instruction::OrImmediate { r1, immediate } => {
            Ok(Opcode::Ori.value() << 12 | (*r1 as u16) << 8 | immediate)
        }
        Instruction::LoadWord { r1, r2 } => {
            Ok(Opcode::Lw.value() << 12 | (*r1 as u16) << 8 | (*r2 as u16) << 4)
        }
        Instruction::StoreWord { r1, r2 } => {
            Ok(Opcode::Sw.value() << 12 | (*r1 as u16) << 8 | (*r2 as u16) << 4)
        }
        Instruction::JumpImmediate { immediate } => Ok(Opcode::J.value() << 12 | immediate >> 1),
        Instruction::Asciiz { .. } => Err(EncodeError::Directive),
        Instruction::ErrorLine { message } => Err(EncodeError::ErrorLine(message.clone())),
    }
}

/// Decodes a 16-bit word; exact inverse of [`encode`] for every word it
/// produces. The opcode in 15..12 determines how the remaining bits are laid
/// out, so it is extracted first and dispatched on. Words with an undefined
/// opcode or ALU function code never come from `encode` and are an error.
pub fn decode(word: u16) -> Result<Instruction, DecodeError> {
    let opcode =
        Opcode::from_encoded(word >> 12).ok_or(DecodeError::UndefinedOpcode(word >> 12))?;
    let r1 = ((word >> 8) & REGISTER_MASK) as u8;
    let r2 = ((word >> 4) & REGISTER_MASK) as u8;
    match opcode {
        Opcode::Alu => {
            // The function code sits in the low two bits.
            let code = word & 0x3;
            if code as u8 == func::AND {
                Ok(Instruction::And { r1, r2 })
            } else {
                Err(DecodeError::UndefinedFunc(code))
            }
        }
        Opcode::Sw => Ok(Instruction::StoreWord { r1, r2 }),
        Opcode::Lw => Ok(Instruction::LoadWord { r1, r2 }),
        Opcode::Addi => Ok(Instruction::AddImmediate {
            r1,
            immediate: word & IMMEDIATE_MASK,
        }),
        Opcode::Ori => Ok(Instruction::OrImmediate {
            r1,
            immediate: word & IMMEDIATE_MASK,
        }),
        // Recover the byte-addressed immediate the parser stored.
        Opcode::J => Ok(Instruction::JumpImmediate {
            immediate: (word & 0xFFF) << 1,
        }),
    }
}
