/// What to do after waiting for the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    Step,
    Quit,
}

/// Represents something that decides when the next step happens,
/// such as a person pressing enter or a clock.
pub trait EmulatorInput {
    fn wait(&mut self) -> Pacing;
}

/// An input device that never waits
pub struct DummyInput;

impl EmulatorInput for DummyInput {
    fn wait(&mut self) -> Pacing {
        Pacing::Step
    }
}
