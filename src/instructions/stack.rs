//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit offset into this page; pushes and pulls wrap
//! silently at either end.

use crate::status::Status;
use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.regs.a;
    cpu.push8(value);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy always has the break (bit 4) and reserved (bit 5) bits set.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.regs.p.to_pushed_byte(true);
    cpu.push8(status);
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull8();
    cpu.regs.a = value;
    cpu.regs.p.update_zero_negative(value);
}

/// Executes the PLP (Pull Processor Status) instruction.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull8();
    restore_status(cpu, value);
}

/// Installs a status byte pulled by PLP or RTI.
///
/// The break bit has no storage in the live register, so it is dropped; the
/// reserved bit is forced on.
pub(crate) fn restore_status<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let mut status = Status::from_byte(value);
    status.set_brk(false);
    cpu.regs.p = status;
}
