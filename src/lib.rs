//! # 6502 Instruction-Set Simulator
//!
//! An instruction-level NMOS 6502 CPU simulator designed for modularity, clarity, and
//! WebAssembly portability.
//!
//! This crate reproduces the processor's registers, flag semantics, addressing modes,
//! stack discipline and documented opcode behavior against a flat 64 KiB memory.
//!
//! ## Quick Start
//!
//! ```rust
//! use sim6502::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$42
//! memory.load(0x8000, &[0xA9, 0x42]);
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//!
//! let cycles = cpu.tick();
//! assert_eq!(cycles, 2);
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(cpu.pc(), 0x8002);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory implementation via the `MemoryBus` trait
//! - **WebAssembly Portability**: No OS dependencies, deterministic execution
//! - **Instruction-Level Timing**: Base cycles plus page-cross and branch penalties
//! - **Table-Driven Design**: All opcode metadata in a single source of truth
//!
//! ## Modules
//!
//! - `cpu` - CPU state, stack helpers and the fetch-decode-execute loop
//! - `status` - Packed status register and flag update primitives
//! - `registers` - Register file snapshot
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and effective address resolution
//! - `interrupts` - Reset, IRQ and NMI sequences
//! - `config` - Per-instance configuration
//! - `wasm` - JavaScript bindings (with the `wasm` feature)
//!
//! ## Features
//!
//! - `serde`: Serialize/Deserialize for [`CpuConfig`], [`Registers`] and [`Status`]
//! - `wasm`: wasm-bindgen facade in [`wasm`](crate::wasm)

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod status;

#[cfg(feature = "wasm")]
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand, Resolved};
pub use config::CpuConfig;
pub use cpu::CPU;
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};
pub use registers::Registers;
pub use status::{Flags, Status};

use thiserror::Error;

/// Errors surfaced by the simulator.
///
/// Instruction execution never fails; the only failure point is building the
/// memory backing store.
#[derive(Debug, Error)]
pub enum Error {
    /// The 64KB memory array could not be allocated.
    #[error("failed to allocate {bytes} bytes of emulated memory")]
    Allocation {
        bytes: usize,
        #[source]
        source: std::collections::TryReserveError,
    },
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
