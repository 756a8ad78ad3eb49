//! # Reset and Interrupt Sequences
//!
//! Hardware entry points that are not instructions:
//!
//! | Sequence | Vector        | Pushes PC/P | B in pushed P | Masked by I |
//! |----------|---------------|-------------|---------------|-------------|
//! | Reset    | $FFFC/$FFFD   | no          | n/a           | no          |
//! | IRQ      | $FFFE/$FFFF   | yes         | clear         | yes         |
//! | NMI      | $FFFA/$FFFB   | yes         | clear         | no          |
//!
//! Each sequence costs 7 cycles. BRK shares the IRQ vector but pushes B set; see
//! the control-flow instructions.

use log::debug;

use crate::status::{Flags, Status};
use crate::{MemoryBus, CPU};

/// Address of the little-endian NMI handler pointer.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Address of the little-endian reset handler pointer.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the little-endian IRQ/BRK handler pointer.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles consumed by reset, IRQ and NMI entry.
pub const INTERRUPT_CYCLES: u64 = 7;

impl<M: MemoryBus> CPU<M> {
    /// Performs a reset.
    ///
    /// SP is reloaded from the configuration, status becomes I plus the reserved bit
    /// and PC is read from the reset vector. A, X and Y keep their values. Nothing is
    /// pushed.
    ///
    /// ```
    /// use sim6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.memory_mut().write(0xFFFC, 0x00);
    /// cpu.memory_mut().write(0xFFFD, 0xC0);
    /// cpu.set_a(0x55);
    ///
    /// cpu.reset();
    /// assert_eq!(cpu.pc(), 0xC000);
    /// assert_eq!(cpu.a(), 0x55);
    /// assert_eq!(cpu.status(), 0x24);
    /// ```
    pub fn reset(&mut self) {
        self.regs.sp = self.config.reset_stack_pointer;
        self.regs.p = Status::with_flags(Flags::INTERRUPT_DISABLE);
        self.regs.pc = self.memory.read_u16(RESET_VECTOR);
        self.cycles += INTERRUPT_CYCLES;

        debug!(
            "cpu#{} reset; PC=${:04X}",
            self.config.instance_id, self.regs.pc
        );
    }

    /// Requests a maskable interrupt.
    ///
    /// Returns `false` without touching any state when the interrupt disable flag is
    /// set. Otherwise pushes PC and status (B clear), sets I and jumps through
    /// $FFFE.
    pub fn irq(&mut self) -> bool {
        if self.regs.p.interrupt_disable() {
            debug!("cpu#{} IRQ masked", self.config.instance_id);
            return false;
        }

        self.enter_interrupt(IRQ_VECTOR);
        debug!(
            "cpu#{} IRQ taken; PC=${:04X}",
            self.config.instance_id, self.regs.pc
        );
        true
    }

    /// Triggers a non-maskable interrupt through $FFFA. Always taken.
    pub fn nmi(&mut self) {
        self.enter_interrupt(NMI_VECTOR);
        debug!(
            "cpu#{} NMI taken; PC=${:04X}",
            self.config.instance_id, self.regs.pc
        );
    }

    fn enter_interrupt(&mut self, vector: u16) {
        let pc = self.regs.pc;
        self.push16(pc);

        let status = self.regs.p.to_pushed_byte(false);
        self.push8(status);

        self.regs.p.set_interrupt_disable(true);
        self.regs.pc = self.memory.read_u16(vector);
        self.cycles += INTERRUPT_CYCLES;
    }
}
