//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations, plus `FlatMemory`, a uniform 64KB RAM.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Every 16-bit address is valid; multi-byte accesses wrap at 0xFFFF
//! - Simple signatures for WASM compatibility

use crate::{Error, Result};

/// Size of the 6502 address space in bytes.
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Memory bus trait for CPU to read/write bytes.
///
/// The CPU accesses all memory through this abstraction.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use sim6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use sim6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: Vec<u8>, // 0x0000-0x7FFF
///     rom: Vec<u8>, // 0x8000-0xFFFF
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Implementations may ignore writes to
    /// read-only regions.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word. The high byte address wraps at 0xFFFF.
    ///
    /// ```
    /// use sim6502::{MemoryBus, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// assert_eq!(mem.read_u16(0xFFFC), 0x8000);
    /// ```
    fn read_u16(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Copies a program image into memory starting at `start`.
    ///
    /// Bytes past 0xFFFF wrap around to 0x0000.
    fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use sim6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
/// memory.write(0x8000, 0xEA); // NOP
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    ///
    /// Aborts the process if the allocation fails; use [`FlatMemory::try_new`] to
    /// handle that case.
    pub fn new() -> Self {
        Self {
            data: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// Creates a zeroed FlatMemory, reporting allocation failure as an error.
    ///
    /// ```
    /// use sim6502::{FlatMemory, MemoryBus};
    ///
    /// let mem = FlatMemory::try_new().unwrap();
    /// assert_eq!(mem.read(0xFFFF), 0x00);
    /// ```
    pub fn try_new() -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(MEMORY_SIZE)
            .map_err(|source| Error::Allocation {
                bytes: MEMORY_SIZE,
                source,
            })?;
        data.resize(MEMORY_SIZE, 0);

        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Returns the whole address space as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
