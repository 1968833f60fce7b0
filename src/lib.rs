/*!

A tiny 8-bit virtual machine with two registers, A and B, a program counter,
and 255 bytes of memory.

Every instruction is a single byte. The upper four bits are the opcode,
and the lower four bits are the operand.

| Opcode | Instruction | Effect             |
|--------|-------------|--------------------|
| `0000` | ADD         | B = A + B          |
| `0001` | LOAD A N    | A = N              |
| `0010` | LOAD B N    | B = N              |
| `0011` | HALT        | Stop the program   |

# Crossterm Frontend

If you want to step through a program yourself, there is a ready-to-use implementation
you can run by using `cargo run --bin crossterm_frontend -- <program>`.
Press enter to execute the next instruction, or `q` to quit.
Without a program, a small demo that adds up to 8 is run.

Programs are either raw bytes, or text files with one byte per line written as binary digits.

# Library

The main way of running a program is to load instructions as bytes, then step through them.

```rust
use nibble_vm::emulator::engine::{step, StepResult};
use nibble_vm::emulator::state::MachineState;

let program = [
    0b0001_0011, // LOAD A 3
    0b0010_0100, // LOAD B 4
    0b0000_0000, // ADD
    0b0011_0000, // HALT
];
let mut state = MachineState::with_program(&program).unwrap();

while step(&mut state).unwrap() == StepResult::Continue {}
assert_eq!(state.register_b(), 7);
```

Alternatively, you can experiment by executing instructions manually.

```rust
use nibble_vm::emulator::engine::{execute_single, execute_many};
use nibble_vm::emulator::instruction::{Instruction, Const};
use nibble_vm::emulator::state::MachineState;

let mut state = MachineState::new();

// Execute instructions manually
execute_single(&mut state, Instruction::LoadA(Const(2)));

// Or many sequentially
execute_many(&mut state, &[
    Instruction::LoadB(Const(5)),
    Instruction::Add,
]);
assert_eq!(state.register_b(), 7);
```

Bytes can also be written as strings of binary digits.

```rust
use nibble_vm::util::binary::parse_byte;

assert_eq!(parse_byte("00110000"), Ok(0x30));
assert!(parse_byte("0011").is_err());
```

## Custom input and output

To show the machine somewhere, or decide when the next step happens, you must implement
`EmulatorInput` and `EmulatorOutput`. Take a look at `src/emulator/input.rs` and
`src/emulator/output.rs` to see how to implement this, then do the following.

```ignore
use nibble_vm::emulator::emulator::Emulator;

let mut emulator = Emulator::with_io(MyInput::new(), MyOutput::new());
emulator.load(&program)?;
emulator.run()?;
```

You can then implement the emulator using your own custom frontend, as done with crossterm in crossterm_frontend.
*/

pub mod emulator;
pub mod error;
pub mod program;
pub mod util;
