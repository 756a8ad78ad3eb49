//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC / SEC: Carry
//! - CLI / SEI: Interrupt Disable
//! - CLD / SED: Decimal Mode (stored only; arithmetic stays binary)
//! - CLV: Overflow
//!
//! These instructions use implied addressing mode and execute in 2 cycles.

use crate::{MemoryBus, CPU};

pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.p.set_carry(false);
}

pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.p.set_carry(true);
}

pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.p.set_interrupt_disable(false);
}

pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.p.set_interrupt_disable(true);
}

pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.p.set_decimal(false);
}

pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.p.set_decimal(true);
}

pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.p.set_overflow(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_clear_is_not_a_toggle() {
        // Clearing an already clear flag must leave it clear
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.set_flag_c(false);
        execute_clc(&mut cpu);
        assert!(!cpu.flag_c());

        cpu.set_flag_v(false);
        execute_clv(&mut cpu);
        assert!(!cpu.flag_v());
    }

    #[test]
    fn test_set_and_clear_pairs() {
        let mut cpu = CPU::new(FlatMemory::new());

        execute_sec(&mut cpu);
        execute_sed(&mut cpu);
        execute_cli(&mut cpu);
        assert!(cpu.flag_c());
        assert!(cpu.flag_d());
        assert!(!cpu.flag_i());

        execute_clc(&mut cpu);
        execute_cld(&mut cpu);
        execute_sei(&mut cpu);
        assert!(!cpu.flag_c());
        assert!(!cpu.flag_d());
        assert!(cpu.flag_i());
    }
}
