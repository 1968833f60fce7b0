//! The driver that runs a program step by step, showing the state as it goes.

use crate::emulator::engine::{self, StepResult};
use crate::emulator::input::{DummyInput, EmulatorInput, Pacing};
use crate::emulator::output::{DummyOutput, EmulatorOutput, Status};
use crate::emulator::state::MachineState;
use crate::error::{ExecutionError, LoadError};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub steps: usize,
    pub status: Status,
}

pub struct Emulator<I: EmulatorInput, O: EmulatorOutput> {
    state: MachineState,
    input: I,
    output: O,
}

impl Emulator<DummyInput, DummyOutput> {

    /// Create a new emulator that never waits and only records what it shows
    pub fn new() -> Emulator<DummyInput, DummyOutput> {
        Emulator::with_io(DummyInput, DummyOutput::new())
    }
}

impl<I: EmulatorInput, O: EmulatorOutput> Emulator<I, O> {

    /// Create a new emulator with input and output
    pub fn with_io(input: I, output: O) -> Emulator<I, O> {
        Emulator {
            state: MachineState::new(),
            input,
            output,
        }
    }

    /// Copy a program into memory at address 0.
    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        self.state.load(program)
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Perform a single step, without any rendering or waiting.
    pub fn step(&mut self) -> Result<StepResult, ExecutionError> {
        engine::step(&mut self.state)
    }

    /// Run until the program halts, the input asks to quit, or a fault occurs.
    pub fn run(&mut self) -> Result<Summary, ExecutionError> {
        self.run_bounded(usize::MAX)
    }

    /// Like `run`, but quit after at most `max_steps` steps.
    pub fn run_bounded(&mut self, max_steps: usize) -> Result<Summary, ExecutionError> {
        let mut steps = 0;
        loop {
            self.output.render(&self.state, Status::Running);

            if steps >= max_steps || self.input.wait() == Pacing::Quit {
                log::info!("Quit after {} steps", steps);
                return Ok(self.finish(steps, Status::Quit));
            }

            match self.step() {
                Ok(StepResult::Continue) => steps += 1,
                Ok(StepResult::Halt) => return Ok(self.finish(steps + 1, Status::Halted)),
                Err(error) => {
                    self.output.report(&error);
                    return Err(error);
                }
            }
        }
    }

    fn finish(&mut self, steps: usize, status: Status) -> Summary {
        self.output.render(&self.state, status);
        Summary { steps, status }
    }
}
