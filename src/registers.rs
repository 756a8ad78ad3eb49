//! 6502 CPU registers.

use crate::status::{Flags, Status};

/// Base address of the fixed stack page.
pub const STACK_BASE: u16 = 0x0100;

/// 6502 CPU register set.
///
/// The 6502 has minimal registers:
/// - A: 8-bit accumulator
/// - X, Y: 8-bit index registers
/// - SP: 8-bit stack pointer (stack is at $0100-$01FF)
/// - PC: 16-bit program counter
/// - P: 8-bit processor status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Stack pointer (points to next free location).
    pub sp: u8,
    /// Program counter.
    pub pc: u16,
    /// Processor status flags.
    pub p: Status,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Create registers in power-up state.
    ///
    /// A, X and Y are undefined on hardware; we use 0. SP starts at $FD and only the
    /// interrupt disable (and reserved) bits are set.
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0,
            p: Status::with_flags(Flags::INTERRUPT_DISABLE),
        }
    }

    /// Address the next push writes to, then moves SP down.
    pub fn push(&mut self) -> u16 {
        let addr = STACK_BASE | u16::from(self.sp);
        self.sp = self.sp.wrapping_sub(1);
        addr
    }

    /// Moves SP up, then returns the address to pull from.
    pub fn pull(&mut self) -> u16 {
        self.sp = self.sp.wrapping_add(1);
        STACK_BASE | u16::from(self.sp)
    }

    /// Current stack address without modifying SP.
    pub fn stack_addr(&self) -> u16 {
        STACK_BASE | u16::from(self.sp)
    }
}
