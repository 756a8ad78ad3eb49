//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump to address
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - RTI: Return from Interrupt
//!
//! BRK is a software interrupt that:
//! 1. Pushes PC+2 to the stack (high byte first, then low byte)
//! 2. Pushes processor status to stack with B flag set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F

use crate::addressing::Operand;
use crate::instructions::stack::restore_status;
use crate::interrupts::IRQ_VECTOR;
use crate::{MemoryBus, CPU};

/// Executes the BRK (Force Interrupt) instruction.
///
/// On entry PC already points past the opcode, so PC+1 is the address of the BRK
/// plus two. The pushed status carries B set; the live register does not.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    let return_address = cpu.regs.pc.wrapping_add(1);
    cpu.push16(return_address);

    let status = cpu.regs.p.to_pushed_byte(true);
    cpu.push8(status);

    cpu.regs.p.set_interrupt_disable(true);
    cpu.regs.pc = cpu.memory.read_u16(IRQ_VECTOR);
}

/// Executes the JMP instruction in absolute or indirect mode.
///
/// The resolver has already applied the indirect page-wrap quirk.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Memory(target) = operand {
        cpu.regs.pc = target;
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR (PC - 1), high byte first.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Memory(target) = operand {
        let return_address = cpu.regs.pc.wrapping_sub(1);
        cpu.push16(return_address);
        cpu.regs.pc = target;
    }
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.pc = cpu.pull16().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls status (B dropped, reserved forced on), then PC. Unlike RTS there is no
/// +1 adjustment.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull8();
    restore_status(cpu, status);
    cpu.regs.pc = cpu.pull16();
}
