//! WASM API for the 6502 simulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, interrupt lines, memory
//! access and state inspection.

use crate::{CpuConfig, FlatMemory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<crate::Error> for JsError {
    fn from(err: crate::Error) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Main simulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
    on_step: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create a simulator with zeroed 64KB memory.
    ///
    /// `instance_id` tags this CPU's log lines.
    #[wasm_bindgen(constructor)]
    pub fn new(instance_id: u32) -> Result<Emulator6502, JsError> {
        let config = CpuConfig {
            instance_id,
            ..CpuConfig::default()
        };
        let cpu = CPU::try_with_flat_memory(config)?;

        Ok(Emulator6502 { cpu, on_step: None })
    }

    /// Register a callback invoked after every instruction as `(pc, opcode)`.
    pub fn set_on_step(&mut self, callback: js_sys::Function) {
        self.on_step = Some(callback);
    }

    /// Remove the step callback.
    pub fn clear_on_step(&mut self) {
        self.on_step = None;
    }

    /// Execute a single instruction and return the cycles it took
    pub fn tick(&mut self) -> u8 {
        let cycles = self.cpu.tick();
        self.notify_step();
        cycles
    }

    /// Execute whole instructions until at least `cycles` have elapsed
    pub fn run_for_cycles(&mut self, cycles: u32) -> u32 {
        let target = self.cpu.cycles() + cycles as u64;
        let start = self.cpu.cycles();

        while self.cpu.cycles() < target {
            self.tick();
        }

        (self.cpu.cycles() - start) as u32
    }

    /// Reset the CPU through the reset vector. Memory is preserved.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Raise a maskable interrupt; returns whether it was taken
    pub fn irq(&mut self) -> bool {
        self.cpu.irq()
    }

    /// Raise a non-maskable interrupt
    pub fn nmi(&mut self) {
        self.cpu.nmi();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    #[wasm_bindgen(getter)]
    pub fn instructions(&self) -> f64 {
        self.cpu.instructions() as f64
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256).map(|i| self.cpu.memory().read(start + i)).collect()
    }

    /// Load a program into memory and set PC
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        self.cpu.memory_mut().load(start_addr, program);
        self.cpu.set_pc(start_addr);
    }

    fn notify_step(&self) {
        if let Some(callback) = &self.on_step {
            let pc = JsValue::from(self.cpu.pc());
            let opcode = JsValue::from(self.cpu.opcode());
            // A throwing observer must not stop the simulation
            let _ = callback.call2(&JsValue::NULL, &pc, &opcode);
        }
    }
}
