//! The fetch-decode-execute cycle.

use crate::emulator::instruction::*;
use crate::emulator::state::MachineState;
use crate::error::ExecutionError;

/// Whether execution should go on after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Continue,
    Halt,
}

/// Perform a single step: fetch the instruction at the program counter,
/// decode it, execute it, then advance the program counter.
///
/// A failed step leaves the state untouched.
pub fn step(state: &mut MachineState) -> Result<StepResult, ExecutionError> {
    let pc = state.program_counter;

    let byte = state.fetch().ok_or_else(|| {
        log::error!("Program counter {} is past the end of memory", pc);
        ExecutionError::ProgramCounterOutOfBounds { pc }
    })?;

    let instruction = Instruction::decode(byte).map_err(|opcode| {
        log::error!("Unknown opcode {:#x} at {}", opcode, pc);
        ExecutionError::UnknownInstruction { opcode, pc }
    })?;

    log::trace!("{:>3}: {:?}", pc, instruction);

    let result = execute_single(state, instruction);
    state.program_counter = state.program_counter.wrapping_add(1);

    if result == StepResult::Halt {
        log::info!("Halted at {}", pc);
    }

    Ok(result)
}

/// Execute a single instruction, without touching the program counter.
pub fn execute_single(state: &mut MachineState, instruction: Instruction) -> StepResult {
    match instruction {

        // Add A to B, wrapping on overflow
        Instruction::Add => {
            state.register_b = state.register_a.wrapping_add(state.register_b);
        }

        Instruction::LoadA(Const(n)) => {
            state.register_a = n;
        }

        Instruction::LoadB(Const(n)) => {
            state.register_b = n;
        }

        Instruction::Halt => return StepResult::Halt,
    };

    StepResult::Continue
}

/// Execute instructions until one of them halts. Returns the index of the halting one.
pub fn execute_many(state: &mut MachineState, instructions: &[Instruction]) -> Option<usize> {
    instructions
        .iter()
        .position(|&instruction| execute_single(state, instruction) == StepResult::Halt)
}
