use crate::instruction::Instruction;

/// Renders an instruction back into source form, mainly for execution traces.
pub fn fmt_instruction(instruction: &Instruction) -> String {
    match instruction {
        Instruction::And { r1, r2 } => format!("AND $r{r1}, $r{r2}"),
        Instruction::AddImmediate { r1, immediate } => format!("ADDI $r{r1}, {immediate:#x}"),
        Instruction::OrImmediate { r1, immediate } => format!("ORI $r{r1}, {immediate:#x}"),
        Instruction::LoadWord { r1, r2 } => format!("LW $r{r1}, $r{r2}"),
        Instruction::StoreWord { r1, r2 } => format!("SW $r{r1}, $r{r2}"),
        // Show the word address, as written in the source.
        Instruction::JumpImmediate { immediate } => format!("J {:#x}", immediate >> 1),
        Instruction::Asciiz { value } => format!(".asciiz \"{value}\""),
        Instruction::ErrorLine { message } => format!("<error: {message}>"),
    }
}
