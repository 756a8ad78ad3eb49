//! Tests for the shift and rotate instructions (ASL, LSR, ROL, ROR).
//!
//! Tests cover:
//! - Accumulator and memory (read-modify-write) forms
//! - Carry in/out
//! - Fixed cycle counts for indexed forms (no page penalty)

use sim6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu();

    // ASL A
    cpu.memory_mut().write(0x8000, 0x0A);
    cpu.set_a(0xC1);

    assert_eq!(cpu.tick(), 2);

    assert_eq!(cpu.a(), 0x82);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_asl_absolute() {
    let mut cpu = setup_cpu();

    // ASL $1234
    cpu.memory_mut().load(0x8000, &[0x0E, 0x34, 0x12]);
    cpu.memory_mut().write(0x1234, 0x80);

    assert_eq!(cpu.tick(), 6);

    assert_eq!(cpu.memory().read(0x1234), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert_eq!(cpu.a(), 0x00, "accumulator untouched");
}

#[test]
fn test_asl_absolute_x_has_no_page_penalty() {
    let mut cpu = setup_cpu();

    // ASL $12FF,X with X = 1
    cpu.memory_mut().load(0x8000, &[0x1E, 0xFF, 0x12]);
    cpu.memory_mut().write(0x1300, 0x01);
    cpu.set_x(0x01);

    assert_eq!(cpu.tick(), 7);
    assert_eq!(cpu.memory().read(0x1300), 0x02);
}

#[test]
fn test_lsr_accumulator() {
    let mut cpu = setup_cpu();

    // LSR A
    cpu.memory_mut().write(0x8000, 0x4A);
    cpu.set_a(0x03);
    cpu.set_flag_n(true);

    cpu.tick();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lsr_zero_page_to_zero() {
    let mut cpu = setup_cpu();

    // LSR $10
    cpu.memory_mut().load(0x8000, &[0x46, 0x10]);
    cpu.memory_mut().write(0x0010, 0x01);

    assert_eq!(cpu.tick(), 5);

    assert_eq!(cpu.memory().read(0x0010), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_rol_shifts_carry_in() {
    let mut cpu = setup_cpu();

    // ROL A
    cpu.memory_mut().write(0x8000, 0x2A);
    cpu.set_a(0x40);
    cpu.set_flag_c(true);

    cpu.tick();

    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_shifts_carry_into_bit_seven() {
    let mut cpu = setup_cpu();

    // ROR $20,X with X = 2
    cpu.memory_mut().load(0x8000, &[0x76, 0x20]);
    cpu.memory_mut().write(0x0022, 0x01);
    cpu.set_x(0x02);
    cpu.set_flag_c(true);

    assert_eq!(cpu.tick(), 6);

    assert_eq!(cpu.memory().read(0x0022), 0x80);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}
