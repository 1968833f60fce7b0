//! The machine state: two registers, a program counter and memory.

use crate::emulator::instruction::Instruction;
use crate::error::LoadError;
use crate::util::binary::format_byte;
use std::fmt;

/// Number of addressable memory cells, 0 to 254.
pub const MEM_SIZE: usize = 255;

#[derive(Clone, PartialEq, Eq)]
pub struct MachineState {
    pub(crate) register_a: u8,
    pub(crate) register_b: u8,
    pub(crate) program_counter: u8,
    pub(crate) memory: [u8; MEM_SIZE],
}

impl MachineState {

    /// Create a machine with zeroed registers and memory.
    pub fn new() -> MachineState {
        MachineState {
            register_a: 0,
            register_b: 0,
            program_counter: 0,
            memory: [0; MEM_SIZE],
        }
    }

    /// Create a machine with `program` copied to address 0.
    pub fn with_program(program: &[u8]) -> Result<MachineState, LoadError> {
        let mut state = MachineState::new();
        state.load(program)?;
        Ok(state)
    }

    /// Create a machine with the given register values, for experimenting with instructions.
    pub fn with_registers(register_a: u8, register_b: u8) -> MachineState {
        MachineState {
            register_a,
            register_b,
            ..MachineState::new()
        }
    }

    /// Copy a program into memory at address 0.
    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        if program.len() > MEM_SIZE {
            return Err(LoadError::TooLarge { len: program.len() });
        }
        self.memory[..program.len()].copy_from_slice(program);
        log::debug!("Loaded {} bytes", program.len());
        Ok(())
    }

    pub fn register_a(&self) -> u8 {
        self.register_a
    }

    pub fn register_b(&self) -> u8 {
        self.register_b
    }

    pub fn program_counter(&self) -> u8 {
        self.program_counter
    }

    pub fn memory(&self) -> &[u8] {
        &self.memory
    }

    /// The byte at the program counter, if the counter points into memory.
    pub fn fetch(&self) -> Option<u8> {
        self.memory.get(self.program_counter as usize).copied()
    }

    /// The instruction the program counter points to, if there is a valid one.
    pub fn current_instruction(&self) -> Option<Instruction> {
        self.fetch().and_then(|byte| Instruction::decode(byte).ok())
    }

    /// Addresses and contents of memory at most `radius` cells away from the program counter.
    pub fn memory_window(&self, radius: usize) -> Vec<(u8, u8)> {
        let pc = self.program_counter as usize;
        let start = pc.saturating_sub(radius);
        let end = std::cmp::min(pc + radius + 1, MEM_SIZE);
        (start..end)
            .map(|addr| (addr as u8, self.memory[addr]))
            .collect()
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineState")
            .field("register_a", &self.register_a)
            .field("register_b", &self.register_b)
            .field("program_counter", &self.program_counter)
            .finish()
    }
}

/// Registers and program counter as binary, decimal and hex, one per line.
impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("Register A:", self.register_a),
            ("Register B:", self.register_b),
            ("PC:", self.program_counter),
        ];
        for (label, value) in rows.iter() {
            writeln!(f, "{:<12}{} ({:>3}) {:#04x}", label, format_byte(*value), value, value)?;
        }
        Ok(())
    }
}
