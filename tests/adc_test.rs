//! Tests for the ADC (Add with Carry) instruction.
//!
//! Tests cover:
//! - Flag updates (C, Z, V, N)
//! - Carry-in
//! - Binary arithmetic regardless of the decimal flag
//! - Cycle counts including page crossing penalties

use sim6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_adc_immediate_basic() {
    let mut cpu = setup_cpu();

    // ADC #$05
    cpu.memory_mut().load(0x8000, &[0x69, 0x05]);
    cpu.set_a(0x10);
    cpu.set_flag_c(false);

    assert_eq!(cpu.tick(), 2);

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_adc_signed_overflow() {
    let mut cpu = setup_cpu();

    // ADC #$50 with A = $50: two positives give a negative
    cpu.memory_mut().load(0x8000, &[0x69, 0x50]);
    cpu.set_a(0x50);
    cpu.set_flag_c(false);

    cpu.tick();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_adc_unsigned_carry_out() {
    let mut cpu = setup_cpu();

    // $FF + $01 = $100
    cpu.memory_mut().load(0x8000, &[0x69, 0x01]);
    cpu.set_a(0xFF);
    cpu.set_flag_c(false);

    cpu.tick();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_carry_in() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().load(0x8000, &[0x69, 0x01]);
    cpu.set_a(0x01);
    cpu.set_flag_c(true);

    cpu.tick();

    assert_eq!(cpu.a(), 0x03);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_ignores_decimal_flag() {
    let mut cpu = setup_cpu();

    // $09 + $01 would be $10 in BCD; binary gives $0A
    cpu.memory_mut().load(0x8000, &[0x69, 0x01]);
    cpu.set_a(0x09);
    cpu.set_flag_d(true);

    cpu.tick();

    assert_eq!(cpu.a(), 0x0A);
    assert!(cpu.flag_d());
}

#[test]
fn test_adc_zero_page() {
    let mut cpu = setup_cpu();

    // ADC $42
    cpu.memory_mut().load(0x8000, &[0x65, 0x42]);
    cpu.memory_mut().write(0x0042, 0x20);
    cpu.set_a(0x22);

    assert_eq!(cpu.tick(), 3);
    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.ea(), 0x0042);
}

#[test]
fn test_adc_absolute_y_page_cross() {
    let mut cpu = setup_cpu();

    // ADC $12FF,Y with Y = 1 -> $1300
    cpu.memory_mut().load(0x8000, &[0x79, 0xFF, 0x12]);
    cpu.memory_mut().write(0x1300, 0x05);
    cpu.set_y(0x01);
    cpu.set_a(0x01);

    assert_eq!(cpu.tick(), 5);
    assert_eq!(cpu.a(), 0x06);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_adc_indirect_y_no_page_cross() {
    let mut cpu = setup_cpu();

    // ADC ($10),Y with pointer $2000, Y = 4
    cpu.memory_mut().load(0x8000, &[0x71, 0x10]);
    cpu.memory_mut().load(0x0010, &[0x00, 0x20]);
    cpu.memory_mut().write(0x2004, 0x07);
    cpu.set_y(0x04);

    assert_eq!(cpu.tick(), 5);
    assert_eq!(cpu.a(), 0x07);
    assert_eq!(cpu.ea(), 0x2004);
}
