use pretty_assertions::assert_eq;

use duo16_rs::codec::encode;
use duo16_rs::exec::Interp;
use duo16_rs::{parser, Bus, Cpu, LinearMemory};

/// The counting loop from the instruction-set handout: r6 holds the address
/// 0x64, r5 is incremented, stored there and loaded back, and the jump
/// returns to the ADDI at word 3. Ten steps run the loop body twice.
#[test]
fn counting_loop_runs_twice_in_ten_steps() {
    let program = [
        "AND $r5, $r0",
        "AND $r6, $r0",
        "ORI $r6, 0x64",
        "ADDI $r5, 0x1",
        "SW $r5, $r6",
        "LW $r5, $r6",
        "J 0x03",
    ];

    let mut mem = LinearMemory::new(1024);
    let mut address = 0u32;
    for line in &program {
        let instruction = parser::parse(line);
        mem.write_int(address, encode(&instruction).unwrap() as u32)
            .unwrap();
        address += 2;
    }

    let mut cpu = Cpu::new();
    cpu.reset(0);
    for _ in 0..10 {
        cpu.step(&mut mem, &Interp).unwrap();
    }

    assert_eq!(cpu.gpr[5], 2);
    assert_eq!(mem.read_int(0x64).unwrap(), 2);
}

#[test]
fn program_parse_flags_bad_lines_without_stopping() {
    let source = "AND $r5, $r0\nAND $r99, $r0\nORI $r6, 0x64";
    let lines = parser::parse_program(source);
    assert_eq!(lines.len(), 3);
    assert!(!lines[0].instruction.is_error());
    assert!(lines[1].instruction.is_error());
    assert!(!lines[2].instruction.is_error());
}
