//! Errors produced by the machine and the code that feeds it programs.

use thiserror::Error;

/// A textual byte could not be turned into an instruction byte.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid byte {input:?}: {reason}")]
pub struct EncodingError {
    pub input: String,
    pub reason: &'static str,
}

/// A fault while executing a program. Execution cannot continue after one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("unknown instruction with opcode {opcode:#x} at address {pc}")]
    UnknownInstruction { opcode: u8, pc: u8 },

    #[error("program counter {pc} is past the end of memory")]
    ProgramCounterOutOfBounds { pc: u8 },
}

/// A program image could not be loaded.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read program: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Encoding { line: usize, source: EncodingError },

    #[error("program is {len} bytes long, but memory only holds {}", crate::emulator::state::MEM_SIZE)]
    TooLarge { len: usize },
}

/// Anything that can stop one of the frontends.
#[derive(Error, Debug)]
pub enum FrontendError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),
}
