use std::path::PathBuf;

use structopt::StructOpt;

use nibble_vm::emulator::emulator::Emulator;
use nibble_vm::emulator::input::DummyInput;
use nibble_vm::emulator::output::{EmulatorOutput, Status};
use nibble_vm::emulator::state::MachineState;
use nibble_vm::error::{ExecutionError, FrontendError};
use nibble_vm::program::{Format, Program};

/// The program options.
#[derive(StructOpt)]
struct Opt {
    /// How the program is stored: auto, binary or text
    #[structopt(short, long, default_value = "auto")]
    format: Format,

    /// Give up after this many steps
    #[structopt(long, default_value = "10000")]
    max_steps: usize,

    /// The program to execute, or the built-in demo if left out
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,
}

/// Writes every state to the log.
struct LogOutput;

impl EmulatorOutput for LogOutput {
    fn render(&mut self, state: &MachineState, status: Status) {
        log::info!(
            "{:?}: pc={} a={} b={}",
            status,
            state.program_counter(),
            state.register_a(),
            state.register_b()
        );
    }

    fn report(&mut self, error: &ExecutionError) {
        log::error!("{}", error);
    }
}

fn main() -> Result<(), FrontendError> {
    env_logger::init();

    // Get configuration and read input file
    let opt = Opt::from_args();
    let program = match &opt.input {
        Some(path) => {
            log::info!("Executing {:?}", path);
            Program::read(path, opt.format)?
        }
        None => Program::demo(),
    };

    // Load instructions into emulator memory
    let mut emulator = Emulator::with_io(DummyInput, LogOutput);
    emulator.load(program.bytes())?;

    // Start execution
    let summary = emulator.run_bounded(opt.max_steps)?;
    println!("Program ended after {} steps ({:?}). End state:", summary.steps, summary.status);
    print!("{}", emulator.state());

    Ok(())
}
