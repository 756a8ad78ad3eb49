//! Per-instance CPU configuration.

/// Configuration applied when a CPU is constructed.
///
/// # Examples
///
/// ```
/// use sim6502::{CpuConfig, FlatMemory, CPU};
///
/// let config = CpuConfig {
///     instance_id: 2,
///     trace: true,
///     ..CpuConfig::default()
/// };
///
/// let cpu = CPU::with_config(FlatMemory::new(), config);
/// assert_eq!(cpu.config().instance_id, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CpuConfig {
    /// Diagnostic identifier carried in log output.
    pub instance_id: u32,

    /// Emit fetch/decode/execute events at `trace` level.
    pub trace: bool,

    /// Load PC from the reset vector (0xFFFC/0xFFFD) at construction.
    pub reset_on_power_up: bool,

    /// Stack pointer value installed by power-up and `reset()`.
    pub reset_stack_pointer: u8,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            instance_id: 0,
            trace: false,
            reset_on_power_up: true,
            reset_stack_pointer: 0xFD,
        }
    }
}
