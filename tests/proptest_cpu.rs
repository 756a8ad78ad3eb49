//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that CPU operations maintain
//! fundamental invariants across all possible input combinations.

use proptest::prelude::*;
use sim6502::{FlatMemory, MemoryBus, Operation, Status, CPU, OPCODE_TABLE};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Opcodes that don't modify PC in special ways (excludes branches, jumps, calls, returns)
fn non_branching_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            !matches!(
                m.operation,
                Operation::Bcc
                    | Operation::Bcs
                    | Operation::Beq
                    | Operation::Bmi
                    | Operation::Bne
                    | Operation::Bpl
                    | Operation::Bvc
                    | Operation::Bvs
                    | Operation::Jmp
                    | Operation::Jsr
                    | Operation::Rts
                    | Operation::Rti
                    | Operation::Brk
            )
        })
        .map(|(i, _)| i as u8)
        .collect()
}

/// Undocumented opcodes
fn illegal_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is_illegal())
        .map(|(i, _)| i as u8)
        .collect()
}

// ========== Flag Primitive Properties ==========

proptest! {
    /// Property: Z is set iff the low byte is zero
    #[test]
    fn prop_update_zero(value in any::<u16>(), initial in any::<u8>()) {
        let mut status = Status::from_byte(initial);
        status.update_zero(value);
        prop_assert_eq!(status.zero(), value & 0xFF == 0);
    }

    /// Property: N mirrors bit 7
    #[test]
    fn prop_update_negative(value in any::<u16>(), initial in any::<u8>()) {
        let mut status = Status::from_byte(initial);
        status.update_negative(value);
        prop_assert_eq!(status.negative(), value & 0x80 != 0);
    }

    /// Property: the reserved bit can never be observed clear
    #[test]
    fn prop_reserved_bit_always_reads_one(byte in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_status(byte);
        prop_assert_eq!(cpu.status() & 0x20, 0x20);
        prop_assert_eq!(cpu.status() | 0x20, byte | 0x20);
    }
}

// ========== Stack Properties ==========

proptest! {
    /// Property: push16 then pull16 returns the value and restores SP
    #[test]
    fn prop_push16_pull16_round_trip(value in any::<u16>(), sp in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_sp(sp);

        cpu.push16(value);
        prop_assert_eq!(cpu.sp(), sp.wrapping_sub(2));
        prop_assert_eq!(cpu.pull16(), value);
        prop_assert_eq!(cpu.sp(), sp);
    }

    /// Property: stack traffic never leaves page 1
    #[test]
    fn prop_push8_writes_stack_page(value in any::<u8>(), sp in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_sp(sp);

        cpu.push8(value);
        prop_assert_eq!(cpu.memory().read(0x0100 | sp as u16), value);
    }
}

// ========== Execution Properties ==========

proptest! {
    /// Property: for non-branching instructions, PC advances by exactly size_bytes
    #[test]
    fn prop_pc_advances_by_instruction_size(
        opcode in prop::sample::select(non_branching_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        let metadata = &OPCODE_TABLE[opcode as usize];
        cpu.memory_mut().load(0x8000, &[opcode, operand1, operand2]);

        cpu.tick();

        prop_assert_eq!(
            cpu.pc(),
            0x8000 + metadata.size_bytes() as u16,
            "opcode 0x{:02X} ({})",
            opcode,
            metadata.mnemonic()
        );
    }

    /// Property: every instruction takes 2-7 cycles and bumps both counters
    #[test]
    fn prop_counters_advance(
        opcode in any::<u8>(),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
        status in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, operand1, operand2]);
        cpu.set_status(status);

        let cycles = cpu.tick();

        prop_assert!((2..=7).contains(&cycles), "opcode 0x{:02X}: {} cycles", opcode, cycles);
        prop_assert_eq!(cpu.cycles(), cycles as u64);
        prop_assert_eq!(cpu.instructions(), 1);
        prop_assert!(cycles >= OPCODE_TABLE[opcode as usize].base_cycles);
    }

    /// Property: illegal opcodes change only PC and the counters
    #[test]
    fn prop_illegal_opcodes_are_nops(
        opcode in prop::sample::select(illegal_opcodes()),
        a in any::<u8>(),
        x in any::<u8>(),
        y in any::<u8>(),
        sp in any::<u8>(),
        status in any::<u8>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, opcode);
        cpu.set_a(a);
        cpu.set_x(x);
        cpu.set_y(y);
        cpu.set_sp(sp);
        cpu.set_status(status);
        let before = cpu.registers();

        prop_assert_eq!(cpu.tick(), 2);

        let mut expected = before;
        expected.pc = 0x8001;
        prop_assert_eq!(cpu.registers(), expected);
    }

    /// Property: ADC in binary mode matches wide integer addition
    #[test]
    fn prop_adc_matches_integer_addition(a in any::<u8>(), m in any::<u8>(), carry in any::<bool>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0x69, m]);
        cpu.set_a(a);
        cpu.set_flag_c(carry);

        cpu.tick();

        let sum = a as u16 + m as u16 + carry as u16;
        let signed = a as i8 as i16 + m as i8 as i16 + carry as i16;
        prop_assert_eq!(cpu.a(), sum as u8);
        prop_assert_eq!(cpu.flag_c(), sum > 0xFF);
        prop_assert_eq!(cpu.flag_v(), !(-128..=127).contains(&signed));
        prop_assert_eq!(cpu.flag_z(), sum as u8 == 0);
        prop_assert_eq!(cpu.flag_n(), sum & 0x80 != 0);
    }

    /// Property: SBC with carry set matches wide integer subtraction
    #[test]
    fn prop_sbc_matches_integer_subtraction(a in any::<u8>(), m in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xE9, m]);
        cpu.set_a(a);
        cpu.set_flag_c(true);

        cpu.tick();

        let signed = a as i8 as i16 - m as i8 as i16;
        prop_assert_eq!(cpu.a(), a.wrapping_sub(m));
        prop_assert_eq!(cpu.flag_c(), a >= m);
        prop_assert_eq!(cpu.flag_v(), !(-128..=127).contains(&signed));
    }

    /// Property: CMP sets C iff A >= M and Z iff A == M, leaving A intact
    #[test]
    fn prop_cmp_ordering(a in any::<u8>(), m in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xC9, m]);
        cpu.set_a(a);

        cpu.tick();

        prop_assert_eq!(cpu.flag_c(), a >= m);
        prop_assert_eq!(cpu.flag_z(), a == m);
        prop_assert_eq!(cpu.flag_n(), a.wrapping_sub(m) & 0x80 != 0);
        prop_assert_eq!(cpu.a(), a);
    }
}
