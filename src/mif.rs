use crate::codec::{self, EncodeError};
use crate::instruction::{Instruction, SourceLine};

const HEADER: &str = "DEPTH = 65536;\n\
WIDTH = 16;\n\
ADDRESS_RADIX = HEX;\n\
DATA_RADIX = HEX;\n\
CONTENT\n\
BEGIN\n";

const FOOTER: &str = "END;\n";

/// Writes a parsed program in memory-initialization text form: one
/// `addr : value;` line per emitted word, each word consuming its own
/// address. Machine instructions echo their source line as a trailing
/// comment; `.asciiz` emits one word per character plus a terminating zero,
/// each commented with the character it holds.
///
/// Callers are expected to have rejected error lines already; hitting one
/// here surfaces as [`EncodeError::ErrorLine`].
pub fn write_to_string(lines: &[SourceLine]) -> Result<String, EncodeError> {
    let mut out = String::from(HEADER);
    let mut address: u32 = 0;
    for line in lines {
        match &line.instruction {
            Instruction::Asciiz { value } => {
                for ascii in value.chars().map(|c| c as u32).chain(std::iter::once(0)) {
                    out.push_str(&format!(
                        "{address:04x} : {ascii:04x};{}\n",
                        as_character(ascii)
                    ));
                    address += 1;
                }
            }
            instruction => {
                let encoded = codec::encode(instruction)?;
                let comment = if line.text.is_empty() {
                    String::new()
                } else {
                    format!(" -- {}", line.text)
                };
                out.push_str(&format!("{address:04x} : {encoded:04x};{comment}\n"));
                address += 1;
            }
        }
    }
    out.push_str(FOOTER);
    Ok(out)
}

fn as_character(ascii: u32) -> String {
    match ascii {
        0 => " -- <null>".to_string(),
        0x20 => " -- <space>".to_string(),
        _ => format!(" -- {}", char::from_u32(ascii).unwrap_or('?')),
    }
}
