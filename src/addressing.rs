//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver that turns
//! a mode plus the operand bytes following an opcode into an effective address (EA).
//!
//! Resolution consumes zero, one or two operand bytes through PC-relative fetches
//! (each fetch increments PC) and reports whether index arithmetic or a relative
//! branch target crossed a 256-byte page.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction. EA is the address of the operand byte.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset from the address of the next instruction.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// True for modes that carry no memory operand.
    pub const fn is_register_implied(self) -> bool {
        matches!(self, AddressingMode::Implicit | AddressingMode::Accumulator)
    }
}

/// Location of an instruction's operand after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (CLC, TAX, RTS, ...).
    Implied,
    /// The accumulator register.
    Accumulator,
    /// A memory location at the effective address.
    Memory(u16),
}

/// Outcome of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub operand: Operand,

    /// True when index arithmetic changed the high byte of the address, or when a
    /// relative target lies on a different page than the next instruction.
    pub page_crossed: bool,
}

impl Resolved {
    const fn register(operand: Operand) -> Self {
        Self {
            operand,
            page_crossed: false,
        }
    }

    const fn memory(addr: u16, page_crossed: bool) -> Self {
        Self {
            operand: Operand::Memory(addr),
            page_crossed,
        }
    }

    /// The effective address, if the operand lives in memory.
    pub fn address(&self) -> Option<u16> {
        match self.operand {
            Operand::Memory(addr) => Some(addr),
            _ => None,
        }
    }
}

fn pages_differ(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves `mode` against the operand bytes at PC.
    ///
    /// Consumes the mode's operand bytes (advancing PC), records the effective address
    /// in EA for memory modes and reports page crossings. Implicit and Accumulator
    /// modes consume nothing and leave EA untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim6502::{AddressingMode, FlatMemory, MemoryBus, CPU};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.memory_mut().load(0x0200, &[0xFF, 0x12]); // $12FF
    /// cpu.set_pc(0x0200);
    /// cpu.set_x(1);
    ///
    /// let resolved = cpu.resolve_operand(AddressingMode::AbsoluteX);
    /// assert_eq!(resolved.address(), Some(0x1300));
    /// assert!(resolved.page_crossed);
    /// assert_eq!(cpu.pc(), 0x0202);
    /// ```
    pub fn resolve_operand(&mut self, mode: AddressingMode) -> Resolved {
        let resolved = match mode {
            AddressingMode::Implicit => Resolved::register(Operand::Implied),
            AddressingMode::Accumulator => Resolved::register(Operand::Accumulator),

            AddressingMode::Immediate => {
                let addr = self.regs.pc;
                self.regs.pc = self.regs.pc.wrapping_add(1);
                Resolved::memory(addr, false)
            }

            AddressingMode::ZeroPage => {
                let zp = self.fetch_byte();
                Resolved::memory(zp as u16, false)
            }

            AddressingMode::ZeroPageX => {
                let zp = self.fetch_byte().wrapping_add(self.regs.x);
                Resolved::memory(zp as u16, false)
            }

            AddressingMode::ZeroPageY => {
                let zp = self.fetch_byte().wrapping_add(self.regs.y);
                Resolved::memory(zp as u16, false)
            }

            AddressingMode::IndirectX => {
                let ptr = self.fetch_byte().wrapping_add(self.regs.x);
                Resolved::memory(self.read_zero_page_word(ptr), false)
            }

            AddressingMode::IndirectY => {
                let ptr = self.fetch_byte();
                let base = self.read_zero_page_word(ptr);
                let addr = base.wrapping_add(self.regs.y as u16);
                Resolved::memory(addr, pages_differ(base, addr))
            }

            AddressingMode::Relative => {
                let offset = self.fetch_byte() as i8;
                let next = self.regs.pc;
                let target = next.wrapping_add_signed(offset as i16);
                Resolved::memory(target, pages_differ(next, target))
            }

            AddressingMode::Absolute => {
                let addr = self.fetch_word();
                Resolved::memory(addr, false)
            }

            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.regs.x as u16);
                Resolved::memory(addr, pages_differ(base, addr))
            }

            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                let addr = base.wrapping_add(self.regs.y as u16);
                Resolved::memory(addr, pages_differ(base, addr))
            }

            AddressingMode::Indirect => {
                let ptr = self.fetch_word();

                // NMOS quirk: the high byte never carries into the next page,
                // so JMP ($10FF) reads $10FF and $1000.
                let lo = self.memory.read(ptr) as u16;
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let hi = self.memory.read(hi_addr) as u16;
                Resolved::memory((hi << 8) | lo, false)
            }
        };

        if let Some(addr) = resolved.address() {
            self.ea = addr;
        }

        resolved
    }

    /// Reads a pointer from the zero page; the high byte wraps from $FF to $00.
    fn read_zero_page_word(&self, ptr: u8) -> u16 {
        let lo = self.memory.read(ptr as u16) as u16;
        let hi = self.memory.read(ptr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }
}
