use std::path::PathBuf;
use std::time::Duration;

use structopt::StructOpt;

use nibble_vm::emulator::emulator::Emulator;
use nibble_vm::error::FrontendError;
use nibble_vm::program::{Format, Program};

mod crossterm_io;
use crossterm_io::{CrosstermInput, CrosstermOutput};

/// Step through a program, one instruction at a time.
#[derive(StructOpt)]
struct Opt {
    /// How the program is stored: auto, binary or text
    #[structopt(short, long, default_value = "auto")]
    format: Format,

    /// Step automatically every this many milliseconds instead of waiting for enter
    #[structopt(short, long)]
    clock: Option<u64>,

    /// The program to execute, or the built-in demo if left out
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,
}

fn main() -> Result<(), FrontendError> {

    pretty_env_logger::init();

    // Get configuration and read input file
    let opt = Opt::from_args();
    let program = match &opt.input {
        Some(path) => {
            log::info!("Executing {:?}", path);
            Program::read(path, opt.format)?
        }
        None => Program::demo(),
    };

    let input = CrosstermInput::new(opt.clock.map(Duration::from_millis));
    let mut emulator = Emulator::with_io(input, CrosstermOutput::new(opt.clock.is_none())?);
    emulator.load(program.bytes())?;

    // Start execution
    let result = emulator.run();

    // Leave the alternate screen before printing anything
    let end_state = emulator.state().clone();
    drop(emulator);

    let summary = match result {
        Ok(summary) => summary,
        Err(error) => {
            println!("Program faulted: {}. End state:", error);
            print!("{}", end_state);
            return Err(error.into());
        }
    };
    println!("Program ended after {} steps ({:?}). End state:", summary.steps, summary.status);
    print!("{}", end_state);

    Ok(())
}
