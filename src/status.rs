//! # Processor Status Register
//!
//! The 6502 keeps its condition bits in a single packed byte (NV-BDIZC). The packed
//! form is what PHP/BRK/IRQ push and what PLP/RTI pull, so it must round-trip bit-exact.
//!
//! Callers never touch the raw bits: every flag has a named getter and setter, and the
//! four update primitives (`update_zero`, `update_negative`, `update_carry`,
//! `update_overflow`) cover the derived updates applied after ALU, load and transfer
//! instructions.

use bitflags::bitflags;

bitflags! {
    /// Individual status register bits.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (reserved, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Flags: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const RESERVED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

/// Packed 6502 status register.
///
/// The reserved bit (bit 5) is always set.
///
/// # Examples
///
/// ```
/// use sim6502::Status;
///
/// let mut p = Status::new();
/// p.update_zero(0x100);
/// p.update_negative(0x80);
///
/// assert!(p.zero());
/// assert!(p.negative());
/// assert_eq!(p.to_byte(), 0b1010_0010);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status(Flags);

impl Default for Status {
    fn default() -> Self {
        Self::new()
    }
}

impl Status {
    /// Creates a status register with only the reserved bit set.
    pub const fn new() -> Self {
        Self(Flags::RESERVED)
    }

    /// Creates a status register holding exactly the given flags (plus reserved).
    pub fn with_flags(flags: Flags) -> Self {
        Self(flags | Flags::RESERVED)
    }

    /// Restores the register from a packed byte, forcing the reserved bit.
    pub fn from_byte(value: u8) -> Self {
        Self(Flags::from_bits_retain(value) | Flags::RESERVED)
    }

    /// Returns the packed byte. Bit 5 is always set.
    pub fn to_byte(self) -> u8 {
        (self.0 | Flags::RESERVED).bits()
    }

    /// Returns the byte image pushed to the stack by PHP, BRK, IRQ and NMI.
    ///
    /// The break bit only exists on the stack: it is set for PHP/BRK and clear for
    /// hardware interrupts.
    pub fn to_pushed_byte(self, brk: bool) -> u8 {
        let mut pushed = self.0 | Flags::RESERVED;
        pushed.set(Flags::BREAK, brk);
        pushed.bits()
    }

    /// Returns true if every flag in `flags` is set.
    pub fn contains(self, flags: Flags) -> bool {
        self.0.contains(flags)
    }

    /// Sets or clears the given flags. The reserved bit cannot be cleared.
    pub fn set(&mut self, flags: Flags, value: bool) {
        self.0.set(flags, value);
        self.0.insert(Flags::RESERVED);
    }

    // ========== Named Accessors ==========

    pub fn carry(self) -> bool {
        self.contains(Flags::CARRY)
    }

    pub fn set_carry(&mut self, value: bool) {
        self.set(Flags::CARRY, value);
    }

    pub fn zero(self) -> bool {
        self.contains(Flags::ZERO)
    }

    pub fn set_zero(&mut self, value: bool) {
        self.set(Flags::ZERO, value);
    }

    pub fn interrupt_disable(self) -> bool {
        self.contains(Flags::INTERRUPT_DISABLE)
    }

    pub fn set_interrupt_disable(&mut self, value: bool) {
        self.set(Flags::INTERRUPT_DISABLE, value);
    }

    pub fn decimal(self) -> bool {
        self.contains(Flags::DECIMAL)
    }

    pub fn set_decimal(&mut self, value: bool) {
        self.set(Flags::DECIMAL, value);
    }

    pub fn brk(self) -> bool {
        self.contains(Flags::BREAK)
    }

    pub fn set_brk(&mut self, value: bool) {
        self.set(Flags::BREAK, value);
    }

    pub fn overflow(self) -> bool {
        self.contains(Flags::OVERFLOW)
    }

    pub fn set_overflow(&mut self, value: bool) {
        self.set(Flags::OVERFLOW, value);
    }

    pub fn negative(self) -> bool {
        self.contains(Flags::NEGATIVE)
    }

    pub fn set_negative(&mut self, value: bool) {
        self.set(Flags::NEGATIVE, value);
    }

    // ========== Update Primitives ==========

    /// Sets Zero iff the low 8 bits of `result` are 0.
    pub fn update_zero(&mut self, result: u16) {
        self.set_zero(result & 0xFF == 0);
    }

    /// Sets Negative iff bit 7 of the low byte of `result` is set.
    pub fn update_negative(&mut self, result: u16) {
        self.set_negative(result & 0x80 != 0);
    }

    /// Sets Carry iff the 16-bit intermediate exceeds 0xFF.
    pub fn update_carry(&mut self, result: u16) {
        self.set_carry(result > 0xFF);
    }

    /// Sets Overflow iff both inputs share a sign that the result does not.
    ///
    /// `V = (a ^ result) & (b ^ result) & 0x80`
    pub fn update_overflow(&mut self, result: u16, a: u8, b: u8) {
        let result = result as u8;
        self.set_overflow((a ^ result) & (b ^ result) & 0x80 != 0);
    }

    /// Applies `update_zero` and `update_negative` to an 8-bit result.
    pub fn update_zero_negative(&mut self, value: u8) {
        self.update_zero(value as u16);
        self.update_negative(value as u16);
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> u8 {
        status.to_byte()
    }
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Status::from_byte(value)
    }
}
