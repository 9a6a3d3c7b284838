use std::sync::LazyLock;

use regex::Regex;

use crate::instruction::{Instruction, SourceLine};

// One anchored pattern per grammar. Mnemonics are distinct, so match order
// cannot change the result, but the probe order below is fixed anyway.
static ASCIIZ: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"^\.asciiz *"([^"]+)"\s*$"#).unwrap());
static AND: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^AND \$r([0-9]+), \$r([0-9]+)\s*$").unwrap());
static ADDI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ADDI \$r([0-9]+), (0x[0-9a-f]+|[0-9]+)\s*$").unwrap());
static SW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^SW \$r([0-9]+), \$r([0-9]+)\s*$").unwrap());
static LW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^LW \$r([0-9]+), \$r([0-9]+)\s*$").unwrap());
static JUMP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^J (0x[0-9a-f]+|[0-9]+)\s*$").unwrap());
static ORI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ORI \$r([0-9]+), (0x[0-9a-f]+|[0-9]+)\s*$").unwrap());

/// Widest byte address a jump can carry: the encoder packs the word address
/// into 12 bits.
const JUMP_TARGET_MAX: u32 = 0xFFF;

/// Parses one line of assembly. Never fails: anything unparseable comes back
/// as [`Instruction::ErrorLine`], so a whole program can be checked in one
/// pass. Text after a `--` delimiter is treated as a comment and stripped
/// before matching.
pub fn parse(raw_line: &str) -> Instruction {
    let line = raw_line.split("--").next().unwrap_or("");
    match try_parse(line) {
        Ok(Some(instruction)) => instruction,
        Ok(None) => Instruction::ErrorLine {
            message: format!("Unknown instruction: {line}"),
        },
        Err(message) => Instruction::ErrorLine { message },
    }
}

/// Parses a whole program. Lines beginning with `#` are comments and are
/// skipped entirely; every other line yields an instruction (possibly an
/// error line) tagged with its 1-based line number and original text.
pub fn parse_program(source: &str) -> Vec<SourceLine> {
    let mut lines = Vec::new();
    for (index, text) in source.lines().enumerate() {
        if text.starts_with('#') {
            continue;
        }
        lines.push(SourceLine {
            instruction: parse(text),
            number: index + 1,
            text: text.to_string(),
        });
    }
    lines
}

fn try_parse(line: &str) -> Result<Option<Instruction>, String> {
    if let Some(c) = ASCIIZ.captures(line) {
        return Ok(Some(Instruction::Asciiz {
            value: c[1].to_string(),
        }));
    }
    if let Some(c) = AND.captures(line) {
        return Ok(Some(Instruction::And {
            r1: register(&c[1])?,
            r2: register(&c[2])?,
        }));
    }
    if let Some(c) = ADDI.captures(line) {
        return Ok(Some(Instruction::AddImmediate {
            r1: register(&c[1])?,
            immediate: immediate8(&c[2])?,
        }));
    }
    if let Some(c) = SW.captures(line) {
        return Ok(Some(Instruction::StoreWord {
            r1: register(&c[1])?,
            r2: register(&c[2])?,
        }));
    }
    if let Some(c) = LW.captures(line) {
        return Ok(Some(Instruction::LoadWord {
            r1: register(&c[1])?,
            r2: register(&c[2])?,
        }));
    }
    if let Some(c) = JUMP.captures(line) {
        let target = immediate(&c[1])?;
        if target > JUMP_TARGET_MAX {
            return Err(format!("Jump target out of range: {}", &c[1]));
        }
        // Stored as a byte address; the encoder shifts it back down.
        return Ok(Some(Instruction::JumpImmediate {
            immediate: (target << 1) as u16,
        }));
    }
    if let Some(c) = ORI.captures(line) {
        return Ok(Some(Instruction::OrImmediate {
            r1: register(&c[1])?,
            immediate: immediate8(&c[2])?,
        }));
    }
    Ok(None)
}

/// The grammar guarantees digits only; out-of-range values (the register file
/// has 16 slots) are rejected here rather than truncated at encode time.
fn register(text: &str) -> Result<u8, String> {
    match text.parse::<u8>() {
        Ok(value) if value <= 0xF => Ok(value),
        _ => Err(format!("Invalid register {text}")),
    }
}

fn immediate(text: &str) -> Result<u32, String> {
    let parsed = if let Some(hex) = text.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else {
        text.parse()
    };
    parsed.map_err(|_| format!("Invalid immediate {text}"))
}

/// ALU immediates occupy 8 bits of the encoded word.
fn immediate8(text: &str) -> Result<u16, String> {
    match immediate(text)? {
        value if value <= 0xFF => Ok(value as u16),
        _ => Err(format!("Immediate out of range: {text}")),
    }
}
