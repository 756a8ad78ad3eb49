//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - CMP, CPX, CPY: Register comparison
//! - BIT: Bit test
//!
//! Arithmetic is always binary. The decimal flag is stored and pushed like any
//! other flag but never changes how ADC/SBC compute.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Adds `value` and the carry flag to the accumulator, updating C, V, Z and N.
///
/// Shared by ADC and SBC (which adds the one's complement of its operand).
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let carry_in = cpu.regs.p.carry() as u16;

    let result16 = a as u16 + value as u16 + carry_in;

    cpu.regs.p.update_carry(result16);
    cpu.regs.p.update_overflow(result16, a, value);
    cpu.regs.p.update_zero(result16);
    cpu.regs.p.update_negative(result16);

    cpu.regs.a = result16 as u8;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// `A = A + M + C`
///
/// Flags affected:
/// - C: Set if the unsigned sum exceeds 0xFF
/// - V: Set if both operands share a sign the result does not
/// - Z, N: From the result
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    add_with_carry(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// `A = A - M - (1 - C)`, computed as `A + !M + C`. Carry acts as an inverted
/// borrow: it is set after the subtraction when no borrow occurred.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    add_with_carry(cpu, !value);
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.regs.a & cpu.read_operand(operand);
    cpu.regs.a = result;
    cpu.regs.p.update_zero_negative(result);
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.regs.a | cpu.read_operand(operand);
    cpu.regs.a = result;
    cpu.regs.p.update_zero_negative(result);
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.regs.a ^ cpu.read_operand(operand);
    cpu.regs.a = result;
    cpu.regs.p.update_zero_negative(result);
}

/// Executes CMP, CPX or CPY against `register`.
///
/// Computes `register - M` without storing it.
///
/// Flags affected:
/// - C: Set if register >= M
/// - Z: Set if register == M
/// - N: Bit 7 of the difference
pub(crate) fn execute_compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, operand: Operand) {
    let value = cpu.read_operand(operand);
    let difference = register.wrapping_sub(value);

    cpu.regs.p.set_carry(register >= value);
    cpu.regs.p.update_zero_negative(difference);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Flags affected:
/// - Z: Set if A & M is zero
/// - N: Bit 7 of M
/// - V: Bit 6 of M
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);

    cpu.regs.p.update_zero((cpu.regs.a & value) as u16);
    cpu.regs.p.update_negative(value as u16);
    cpu.regs.p.set_overflow(value & 0x40 != 0);
}
