//! The machine itself, along with the traits a frontend implements to drive it.

pub mod emulator;
pub mod engine;
pub mod input;
pub mod instruction;
pub mod output;
pub mod state;
