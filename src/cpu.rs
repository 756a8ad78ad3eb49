//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next byte to fetch
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register** (P): packed NV-BDIZC byte
//! - **Effective address** (EA): last address computed by the resolver
//! - **Counters**: u64 cycle and instruction counters
//!
//! ## Execution Model
//!
//! `tick()` executes exactly one instruction:
//! 1. Fetch the opcode at PC (PC += 1)
//! 2. Decode it through [`OPCODE_TABLE`]
//! 3. Resolve the operand unless the mode is implied/accumulator
//! 4. Execute the operation
//! 5. Retire: count the instruction and add base + penalty cycles
//!
//! Execution never fails. Illegal opcodes are one-byte no-ops.

use log::{debug, trace, warn};

use crate::addressing::{Operand, Resolved};
use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::registers::Registers;
use crate::status::Status;
use crate::{CpuConfig, FlatMemory, MemoryBus, OpcodeMetadata, Operation, Result, OPCODE_TABLE};

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait. Each CPU owns
/// its memory exclusively.
///
/// # Examples
///
/// ```
/// use sim6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i()); // Interrupt disable set at power-up
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus = FlatMemory> {
    /// A, X, Y, SP, PC and status
    pub(crate) regs: Registers,

    /// Effective address of the most recent memory operand
    pub(crate) ea: u16,

    /// Opcode of the instruction being executed
    pub(crate) opcode: u8,

    /// Extra cycles accrued by the current instruction
    pub(crate) penalty: u8,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Total instructions retired
    pub(crate) instructions: u64,

    pub(crate) config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl CPU<FlatMemory> {
    /// Creates a CPU backed by a freshly allocated 64KB [`FlatMemory`].
    ///
    /// Returns [`crate::Error::Allocation`] if the memory cannot be allocated.
    ///
    /// ```
    /// use sim6502::{CpuConfig, CPU};
    ///
    /// let cpu = CPU::try_with_flat_memory(CpuConfig::default()).unwrap();
    /// assert_eq!(cpu.pc(), 0x0000); // Zeroed reset vector
    /// ```
    pub fn try_with_flat_memory(config: CpuConfig) -> Result<Self> {
        let memory = FlatMemory::try_new()?;
        Ok(Self::with_config(memory, config))
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and the default configuration.
    ///
    /// The CPU is initialized to the power-up state:
    /// - A, X, Y are zeroed
    /// - SP is set to 0xFD
    /// - Status has Interrupt Disable (and the reserved bit) set
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - Counters start at 0
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU with an explicit configuration.
    ///
    /// When `config.reset_on_power_up` is false, PC starts at 0x0000 and the caller
    /// is expected to set it (or call [`CPU::reset`]).
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut regs = Registers::new();
        regs.sp = config.reset_stack_pointer;
        if config.reset_on_power_up {
            regs.pc = memory.read_u16(0xFFFC);
        }

        debug!(
            "initialised 6502 CPU #{}; PC=${:04X}",
            config.instance_id, regs.pc
        );

        Self {
            regs,
            ea: 0,
            opcode: 0,
            penalty: 0,
            cycles: 0,
            instructions: 0,
            config,
            memory,
        }
    }

    /// Executes one instruction and returns the cycles it took.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.load(0x8000, &[0xBD, 0xFF, 0x12]); // LDA $12FF,X
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.set_x(1);
    ///
    /// // 4 base cycles + 1 for crossing into page $13
    /// assert_eq!(cpu.tick(), 5);
    /// assert_eq!(cpu.ea(), 0x1300);
    /// ```
    pub fn tick(&mut self) -> u8 {
        let start_pc = self.regs.pc;

        // Fetch
        self.opcode = self.fetch_byte();
        if self.config.trace {
            trace!(
                "cpu#{} fetched ${:02X} from ${:04X}",
                self.config.instance_id,
                self.opcode,
                start_pc
            );
        }

        // Decode
        let metadata = OPCODE_TABLE[self.opcode as usize];
        if self.config.trace {
            trace!(
                "cpu#{} decoded {} {:?}",
                self.config.instance_id,
                metadata.operation,
                metadata.addressing_mode
            );
        }

        // Resolve
        self.penalty = 0;
        let resolved = self.resolve_operand(metadata.addressing_mode);
        if resolved.page_crossed && metadata.page_penalty {
            self.penalty += 1;
        }

        // Execute
        self.execute(&metadata, resolved, start_pc);
        if self.config.trace {
            trace!(
                "cpu#{} executed {} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} EA:{:04X}",
                self.config.instance_id,
                metadata.operation,
                self.regs.a,
                self.regs.x,
                self.regs.y,
                self.regs.p.to_byte(),
                self.regs.sp,
                self.ea
            );
        }

        // Retire
        let cycles = metadata.base_cycles + self.penalty;
        self.instructions += 1;
        self.cycles += cycles as u64;
        cycles
    }

    fn execute(&mut self, metadata: &OpcodeMetadata, resolved: Resolved, start_pc: u16) {
        let operand = resolved.operand;
        let Registers { a, x, y, p, .. } = self.regs;

        match metadata.operation {
            Operation::Adc => alu::execute_adc(self, operand),
            Operation::Sbc => alu::execute_sbc(self, operand),
            Operation::And => alu::execute_and(self, operand),
            Operation::Ora => alu::execute_ora(self, operand),
            Operation::Eor => alu::execute_eor(self, operand),
            Operation::Bit => alu::execute_bit(self, operand),
            Operation::Cmp => alu::execute_compare(self, a, operand),
            Operation::Cpx => alu::execute_compare(self, x, operand),
            Operation::Cpy => alu::execute_compare(self, y, operand),

            Operation::Asl => shifts::execute_asl(self, operand),
            Operation::Lsr => shifts::execute_lsr(self, operand),
            Operation::Rol => shifts::execute_rol(self, operand),
            Operation::Ror => shifts::execute_ror(self, operand),

            Operation::Lda => load_store::execute_lda(self, operand),
            Operation::Ldx => load_store::execute_ldx(self, operand),
            Operation::Ldy => load_store::execute_ldy(self, operand),
            Operation::Sta => load_store::execute_sta(self, operand),
            Operation::Stx => load_store::execute_stx(self, operand),
            Operation::Sty => load_store::execute_sty(self, operand),

            Operation::Inc => inc_dec::execute_inc(self, operand),
            Operation::Dec => inc_dec::execute_dec(self, operand),
            Operation::Inx => inc_dec::execute_inx(self),
            Operation::Iny => inc_dec::execute_iny(self),
            Operation::Dex => inc_dec::execute_dex(self),
            Operation::Dey => inc_dec::execute_dey(self),

            Operation::Tax => transfer::execute_tax(self),
            Operation::Tay => transfer::execute_tay(self),
            Operation::Txa => transfer::execute_txa(self),
            Operation::Tya => transfer::execute_tya(self),
            Operation::Tsx => transfer::execute_tsx(self),
            Operation::Txs => transfer::execute_txs(self),

            Operation::Pha => stack::execute_pha(self),
            Operation::Php => stack::execute_php(self),
            Operation::Pla => stack::execute_pla(self),
            Operation::Plp => stack::execute_plp(self),

            Operation::Clc => flags::execute_clc(self),
            Operation::Sec => flags::execute_sec(self),
            Operation::Cli => flags::execute_cli(self),
            Operation::Sei => flags::execute_sei(self),
            Operation::Cld => flags::execute_cld(self),
            Operation::Sed => flags::execute_sed(self),
            Operation::Clv => flags::execute_clv(self),

            Operation::Bcc => branches::execute_branch(self, resolved, !p.carry()),
            Operation::Bcs => branches::execute_branch(self, resolved, p.carry()),
            Operation::Bne => branches::execute_branch(self, resolved, !p.zero()),
            Operation::Beq => branches::execute_branch(self, resolved, p.zero()),
            Operation::Bpl => branches::execute_branch(self, resolved, !p.negative()),
            Operation::Bmi => branches::execute_branch(self, resolved, p.negative()),
            Operation::Bvc => branches::execute_branch(self, resolved, !p.overflow()),
            Operation::Bvs => branches::execute_branch(self, resolved, p.overflow()),

            Operation::Jmp => control::execute_jmp(self, operand),
            Operation::Jsr => control::execute_jsr(self, operand),
            Operation::Rts => control::execute_rts(self),
            Operation::Rti => control::execute_rti(self),
            Operation::Brk => control::execute_brk(self),
            Operation::Nop => {}

            Operation::Illegal => {
                warn!(
                    "cpu#{}: illegal opcode ${:02X} at ${:04X} treated as NOP",
                    self.config.instance_id, self.opcode, start_pc
                );
            }
        }
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes whole instructions until at least `cycle_budget` cycles have elapsed
    /// and returns the cycles actually consumed (may overshoot by part of an
    /// instruction).
    ///
    /// ```
    /// use sim6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.load(0x8000, &[0xEA; 16]); // NOPs, 2 cycles each
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.run_for_cycles(10), 10);
    /// assert_eq!(cpu.instructions(), 5);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.tick();
        }

        self.cycles - start_cycles
    }

    // ========== Instruction Stream ==========

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads the operand value: the accumulator or the byte at EA.
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Accumulator => self.regs.a,
            Operand::Memory(addr) => self.memory.read(addr),
            Operand::Implied => 0,
        }
    }

    /// Writes the operand value back to the accumulator or to EA.
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.regs.a = value,
            Operand::Memory(addr) => self.memory.write(addr, value),
            Operand::Implied => {}
        }
    }

    // ========== Stack ==========

    /// Pushes a byte to 0x0100 | SP, then decrements SP (wrapping).
    pub fn push8(&mut self, value: u8) {
        let addr = self.regs.push();
        self.memory.write(addr, value);
    }

    /// Increments SP (wrapping), then reads 0x0100 | SP.
    pub fn pull8(&mut self) -> u8 {
        let addr = self.regs.pull();
        self.memory.read(addr)
    }

    /// Pushes a word, high byte first.
    ///
    /// ```
    /// use sim6502::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// let sp = cpu.sp();
    ///
    /// cpu.push16(0xBEEF);
    /// assert_eq!(cpu.sp(), sp.wrapping_sub(2));
    /// assert_eq!(cpu.pull16(), 0xBEEF);
    /// assert_eq!(cpu.sp(), sp);
    /// ```
    pub fn push16(&mut self, value: u16) {
        self.push8((value >> 8) as u8);
        self.push8(value as u8);
    }

    /// Pulls a word pushed by [`CPU::push16`]: low byte first, then high byte.
    pub fn pull16(&mut self) -> u16 {
        let lo = self.pull8() as u16;
        let hi = self.pull8() as u16;
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (bit 5 always 1).
    pub fn status(&self) -> u8 {
        self.regs.p.to_byte()
    }

    /// Returns the status register.
    pub fn flags(&self) -> Status {
        self.regs.p
    }

    /// Returns a copy of the whole register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Returns the effective address computed by the most recent memory operand.
    pub fn ea(&self) -> u16 {
        self.ea
    }

    /// Returns the opcode of the most recently fetched instruction.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Returns the total number of CPU cycles executed since initialization.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the total number of instructions retired since initialization.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Returns this instance's configuration.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.p.negative()
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.p.overflow()
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.regs.p.brk()
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.p.decimal()
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.p.interrupt_disable()
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.p.zero()
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.p.carry()
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Replaces the status register from a packed byte (bit 5 is forced on).
    pub fn set_status(&mut self, value: u8) {
        self.regs.p = Status::from_byte(value);
    }

    /// Replaces the whole register file.
    pub fn set_registers(&mut self, regs: Registers) {
        self.regs = regs;
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.p.set_negative(value);
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.regs.p.set_overflow(value);
    }

    pub fn set_flag_b(&mut self, value: bool) {
        self.regs.p.set_brk(value);
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.p.set_decimal(value);
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.regs.p.set_interrupt_disable(value);
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.p.set_zero(value);
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.p.set_carry(value);
    }
}

impl<M: MemoryBus> std::fmt::Debug for CPU<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CPU")
            .field("regs", &self.regs)
            .field("ea", &self.ea)
            .field("cycles", &self.cycles)
            .field("instructions", &self.instructions)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
