use pretty_assertions::assert_eq;

use duo16_rs::codec::encode;
use duo16_rs::exec::{Executor, Interp};
use duo16_rs::{Bus, Cpu, Instruction, LinearMemory};

fn load(mem: &mut LinearMemory, addr: u32, instruction: &Instruction) {
    mem.write_int(addr, encode(instruction).unwrap() as u32)
        .unwrap();
}

#[test]
fn and_is_bitwise_on_registers() {
    let mut mem = LinearMemory::new(64);
    let mut cpu = Cpu::new();
    cpu.gpr[1] = 0xF0F0;
    cpu.gpr[2] = 0x0FF0;
    load(&mut mem, 0, &Instruction::And { r1: 1, r2: 2 });

    cpu.step(&mut mem, &Interp).unwrap();
    assert_eq!(cpu.gpr[1], 0x00F0);
    assert_eq!(cpu.pc, 2);
}

#[test]
fn add_immediate_wraps_silently() {
    let mut mem = LinearMemory::new(64);
    let mut cpu = Cpu::new();
    cpu.gpr[4] = u32::MAX;
    load(&mut mem, 0, &Instruction::AddImmediate { r1: 4, immediate: 1 });

    cpu.step(&mut mem, &Interp).unwrap();
    assert_eq!(cpu.gpr[4], 0);
    assert_eq!(cpu.pc, 2);
}

#[test]
fn or_immediate_sets_bits() {
    let mut mem = LinearMemory::new(64);
    let mut cpu = Cpu::new();
    cpu.gpr[6] = 0x40;
    load(&mut mem, 0, &Instruction::OrImmediate { r1: 6, immediate: 0x24 });

    cpu.step(&mut mem, &Interp).unwrap();
    assert_eq!(cpu.gpr[6], 0x64);
}

#[test]
fn load_word_reads_through_r2() {
    let mut mem = LinearMemory::new(64);
    let mut cpu = Cpu::new();
    mem.write_int(0x20, 0xCAFE).unwrap();
    cpu.gpr[2] = 0x20;
    load(&mut mem, 0, &Instruction::LoadWord { r1: 1, r2: 2 });

    cpu.step(&mut mem, &Interp).unwrap();
    assert_eq!(cpu.gpr[1], 0xCAFE);
}

#[test]
fn store_word_writes_through_r2() {
    let mut mem = LinearMemory::new(64);
    let mut cpu = Cpu::new();
    cpu.gpr[1] = 0xBEEF;
    cpu.gpr[2] = 0x20;
    load(&mut mem, 0, &Instruction::StoreWord { r1: 1, r2: 2 });

    cpu.step(&mut mem, &Interp).unwrap();
    assert_eq!(mem.read_int(0x20).unwrap(), 0xBEEF);
}

#[test]
fn jump_replaces_low_pc_bits_and_keeps_the_rest() {
    let mut mem = LinearMemory::new(0x800);
    let mut cpu = Cpu::new();
    cpu.reset(0x400);
    // J 0x10 — stored immediate is the byte address 0x20.
    load(&mut mem, 0x400, &Instruction::JumpImmediate { immediate: 0x20 });

    cpu.step(&mut mem, &Interp).unwrap();
    assert_eq!(cpu.pc, 0x420);
}

#[test]
fn load_propagates_out_of_bounds_as_a_bus_trap() {
    let mut mem = LinearMemory::new(64);
    let mut cpu = Cpu::new();
    cpu.gpr[2] = 0x10000;
    load(&mut mem, 0, &Instruction::LoadWord { r1: 1, r2: 2 });

    assert!(cpu.step(&mut mem, &Interp).is_err());
}

#[test]
fn directives_and_error_lines_are_not_executable() {
    let mut mem = LinearMemory::new(64);
    let mut cpu = Cpu::new();
    let asciiz = Instruction::Asciiz {
        value: "hi".to_string(),
    };
    let error = Instruction::ErrorLine {
        message: "nope".to_string(),
    };
    assert!(Interp.exec(&mut cpu, &mut mem, &asciiz).is_err());
    assert!(Interp.exec(&mut cpu, &mut mem, &error).is_err());
}

#[test]
fn fetching_an_undefined_word_traps() {
    let mut mem = LinearMemory::new(64);
    let mut cpu = Cpu::new();
    mem.write_int(0, 0xF000).unwrap();

    assert!(cpu.step(&mut mem, &Interp).is_err());
}
