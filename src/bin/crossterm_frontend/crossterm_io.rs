use nibble_vm::emulator::input::{EmulatorInput, Pacing};
use nibble_vm::emulator::output::{EmulatorOutput, Status};
use nibble_vm::emulator::state::MachineState;
use nibble_vm::error::ExecutionError;
use nibble_vm::util::binary::format_byte;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{stdout, Write};
use std::time::Duration;

/// How many memory cells to show on each side of the program counter.
const MEMORY_RADIUS: usize = 3;

/// Waits for enter, or for a clock tick if one is set. `q` quits either way.
pub struct CrosstermInput {
    clock: Option<Duration>,
}

impl CrosstermInput {
    pub fn new(clock: Option<Duration>) -> CrosstermInput {
        CrosstermInput { clock }
    }

    fn wait_for_key(&self) -> crossterm::Result<Pacing> {
        loop {
            if let Event::Key(key_event) = event::read()? {
                log::debug!("Got key {:?}", key_event);
                if is_quit(&key_event) {
                    return Ok(Pacing::Quit);
                }
                if key_event.code == KeyCode::Enter {
                    return Ok(Pacing::Step);
                }
            }
        }
    }

    fn wait_for_tick(&self, clock: Duration) -> crossterm::Result<Pacing> {
        if event::poll(clock)? {
            if let Event::Key(key_event) = event::read()? {
                if is_quit(&key_event) {
                    return Ok(Pacing::Quit);
                }
            }
        }
        Ok(Pacing::Step)
    }
}

impl EmulatorInput for CrosstermInput {
    fn wait(&mut self) -> Pacing {
        let pacing = match self.clock {
            Some(clock) => self.wait_for_tick(clock),
            None => self.wait_for_key(),
        };
        pacing.unwrap_or_else(|error| {
            log::error!("Could not read input: {}", error);
            Pacing::Quit
        })
    }
}

fn is_quit(key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key_event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Draws the machine state on an alternate screen.
pub struct CrosstermOutput {
    stepping_by_hand: bool,
}

impl CrosstermOutput {
    pub fn new(stepping_by_hand: bool) -> crossterm::Result<CrosstermOutput> {
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        terminal::enable_raw_mode()?;
        Ok(CrosstermOutput { stepping_by_hand })
    }

    fn draw(&mut self, lines: &[String]) -> crossterm::Result<()> {
        let mut stdout = stdout();
        queue!(stdout, Clear(ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            queue!(stdout, cursor::MoveTo(0, row as u16), Print(line))?;
        }
        stdout.flush()?;
        Ok(())
    }
}

impl Drop for CrosstermOutput {
    fn drop(&mut self) {
        // Nothing sensible to do if restoring the terminal fails
        let _ = terminal::disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

impl EmulatorOutput for CrosstermOutput {
    fn render(&mut self, state: &MachineState, status: Status) {
        let mut lines = vec![match status {
            Status::Running => "Current state:".to_string(),
            Status::Halted => "Program ended. End state:".to_string(),
            Status::Quit => "Stopped. End state:".to_string(),
        }];
        lines.extend(state.to_string().lines().map(String::from));

        let next = match state.current_instruction() {
            Some(instruction) => instruction.to_string(),
            None => "???".to_string(),
        };
        lines.push(format!("Next:       {}", next));

        lines.push(String::new());
        lines.push("Memory:".to_string());
        for (addr, byte) in state.memory_window(MEMORY_RADIUS) {
            let marker = if addr == state.program_counter() { ">" } else { " " };
            lines.push(format!("{} {:>3}: {}", marker, addr, format_byte(byte)));
        }

        if status == Status::Running {
            lines.push(String::new());
            lines.push(if self.stepping_by_hand {
                "Press enter to advance program, q to quit.".to_string()
            } else {
                "Running, press q to quit.".to_string()
            });
        }

        if let Err(error) = self.draw(&lines) {
            log::error!("Could not draw: {}", error);
        }
    }

    fn report(&mut self, error: &ExecutionError) {
        log::error!("{}", error);
    }
}
