//! Tests for loads and stores (LDA/LDX/LDY, STA/STX/STY).

use sim6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_lda_immediate_flags() {
    let mut cpu = setup_cpu();

    // LDA #$00; LDA #$80
    cpu.memory_mut().load(0x8000, &[0xA9, 0x00, 0xA9, 0x80]);

    cpu.tick();
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());

    cpu.tick();
    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_lda_absolute_x_page_cross() {
    let mut cpu = setup_cpu();

    // LDA $12FF,X with X = 1
    cpu.memory_mut().load(0x8000, &[0xBD, 0xFF, 0x12]);
    cpu.memory_mut().write(0x1300, 0x77);
    cpu.set_x(0x01);

    assert_eq!(cpu.tick(), 5);
    assert_eq!(cpu.ea(), 0x1300);
    assert_eq!(cpu.a(), 0x77);
}

#[test]
fn test_lda_absolute_x_same_page() {
    let mut cpu = setup_cpu();

    // LDA $1200,X with X = 1
    cpu.memory_mut().load(0x8000, &[0xBD, 0x00, 0x12]);
    cpu.set_x(0x01);

    assert_eq!(cpu.tick(), 4);
    assert_eq!(cpu.ea(), 0x1201);
}

#[test]
fn test_lda_indirect_y_page_cross() {
    let mut cpu = setup_cpu();

    // LDA ($FF),Y: pointer bytes at $FF and $00 (wraps), base $20F0, Y = $10
    cpu.memory_mut().load(0x8000, &[0xB1, 0xFF]);
    cpu.memory_mut().write(0x00FF, 0xF0);
    cpu.memory_mut().write(0x0000, 0x20);
    cpu.memory_mut().write(0x2100, 0x99);
    cpu.set_y(0x10);

    assert_eq!(cpu.tick(), 6);
    assert_eq!(cpu.ea(), 0x2100);
    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_ldx_zero_page_y_wraps() {
    let mut cpu = setup_cpu();

    // LDX $F0,Y with Y = $20 -> $10
    cpu.memory_mut().load(0x8000, &[0xB6, 0xF0]);
    cpu.memory_mut().write(0x0010, 0x42);
    cpu.set_y(0x20);

    assert_eq!(cpu.tick(), 4);
    assert_eq!(cpu.x(), 0x42);
    assert_eq!(cpu.ea(), 0x0010);
}

#[test]
fn test_ldy_absolute() {
    let mut cpu = setup_cpu();

    // LDY $4000
    cpu.memory_mut().load(0x8000, &[0xAC, 0x00, 0x40]);
    cpu.memory_mut().write(0x4000, 0xFE);

    assert_eq!(cpu.tick(), 4);
    assert_eq!(cpu.y(), 0xFE);
    assert!(cpu.flag_n());
}

#[test]
fn test_sta_absolute_x_fixed_cycles() {
    let mut cpu = setup_cpu();

    // STA $12FF,X crosses a page but stores never take the penalty
    cpu.memory_mut().load(0x8000, &[0x9D, 0xFF, 0x12]);
    cpu.set_x(0x01);
    cpu.set_a(0x55);

    assert_eq!(cpu.tick(), 5);
    assert_eq!(cpu.memory().read(0x1300), 0x55);
}

#[test]
fn test_sta_indirect_y_fixed_cycles() {
    let mut cpu = setup_cpu();

    // STA ($10),Y
    cpu.memory_mut().load(0x8000, &[0x91, 0x10]);
    cpu.memory_mut().load(0x0010, &[0x00, 0x30]);
    cpu.set_y(0x05);
    cpu.set_a(0xAB);

    assert_eq!(cpu.tick(), 6);
    assert_eq!(cpu.memory().read(0x3005), 0xAB);
}

#[test]
fn test_stores_do_not_touch_flags() {
    let mut cpu = setup_cpu();

    // STX $20; STY $21
    cpu.memory_mut().load(0x8000, &[0x86, 0x20, 0x84, 0x21]);
    cpu.set_x(0x00);
    cpu.set_y(0x80);
    let status = cpu.status();

    cpu.tick();
    cpu.tick();

    assert_eq!(cpu.memory().read(0x0020), 0x00);
    assert_eq!(cpu.memory().read(0x0021), 0x80);
    assert_eq!(cpu.status(), status);
}

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup_cpu();

    // STX $80,Y with Y = $90 -> $10
    cpu.memory_mut().load(0x8000, &[0x96, 0x80]);
    cpu.set_y(0x90);
    cpu.set_x(0x3C);

    assert_eq!(cpu.tick(), 4);
    assert_eq!(cpu.memory().read(0x0010), 0x3C);
}
