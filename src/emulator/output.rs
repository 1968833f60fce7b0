use crate::emulator::state::MachineState;
use crate::error::ExecutionError;

/// Why the state is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Halted,
    Quit,
}

/// Represents somewhere the machine state can be shown.
pub trait EmulatorOutput {
    fn render(&mut self, state: &MachineState, status: Status);
    fn report(&mut self, error: &ExecutionError);
}

/// A simple output device that keeps track of everything it was given.
pub struct DummyOutput {
    pub rendered: Vec<(MachineState, Status)>,
    pub errors: Vec<ExecutionError>,
}

impl DummyOutput {
    pub fn new() -> DummyOutput {
        DummyOutput {
            rendered: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl Default for DummyOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl EmulatorOutput for DummyOutput {
    fn render(&mut self, state: &MachineState, status: Status) {
        self.rendered.push((state.clone(), status));
    }
    fn report(&mut self, error: &ExecutionError) {
        self.errors.push(*error);
    }
}
