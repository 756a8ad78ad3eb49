//! # Branch Instructions
//!
//! This module implements the eight conditional branches (BCC, BCS, BEQ, BNE, BMI,
//! BPL, BVC, BVS). The resolver has already read the signed offset and computed the
//! target relative to the next instruction.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page

use crate::addressing::Resolved;
use crate::{MemoryBus, CPU};

/// Jumps to the resolved target when `condition` holds, charging the taken and
/// page-cross penalties.
pub(crate) fn execute_branch<M: MemoryBus>(cpu: &mut CPU<M>, resolved: Resolved, condition: bool) {
    if !condition {
        return;
    }

    if let Some(target) = resolved.address() {
        cpu.penalty += 1;
        if resolved.page_crossed {
            cpu.penalty += 1;
        }
        cpu.regs.pc = target;
    }
}
