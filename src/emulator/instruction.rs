use crate::util::nibbles;
use std::fmt;

/// A wrapper for 4-bit immediate constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Const(pub u8);

/// A single instruction. Each one is one byte, with the opcode in the
/// upper nibble and the operand in the lower nibble:
/// - N: 4-bit constant
/// - _: ignored
/// - A and B: the two registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Add, // 0_, B = A + B
    LoadA(Const), // 1N
    LoadB(Const), // 2N
    Halt, // 3_
}

impl Instruction {

    /// Decode an instruction byte, or return the opcode if it is unknown.
    pub fn decode(byte: u8) -> Result<Instruction, u8> {
        match (nibbles::opcode(byte), nibbles::operand(byte)) {
            (0, _) => Ok(Instruction::Add),
            (1, n) => Ok(Instruction::LoadA(Const(n))),
            (2, n) => Ok(Instruction::LoadB(Const(n))),
            (3, _) => Ok(Instruction::Halt),
            (opcode, _) => Err(opcode),
        }
    }

    /// Encode the instruction as a byte. Ignored operands are zero.
    pub fn encode(&self) -> u8 {
        match *self {
            Instruction::Add => nibbles::join(0, 0),
            Instruction::LoadA(Const(n)) => nibbles::join(1, n),
            Instruction::LoadB(Const(n)) => nibbles::join(2, n),
            Instruction::Halt => nibbles::join(3, 0),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Add => write!(f, "ADD"),
            Instruction::LoadA(Const(n)) => write!(f, "LOAD A {}", n),
            Instruction::LoadB(Const(n)) => write!(f, "LOAD B {}", n),
            Instruction::Halt => write!(f, "HALT"),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use test_case::test_case;

    #[test]
    fn opcodes_are_parsed_correctly() {
        assert_eq!(Ok(Instruction::Add), Instruction::decode(0b0000_0000));
        assert_eq!(Ok(Instruction::LoadA(Const(3))), Instruction::decode(0b0001_0011));
        assert_eq!(Ok(Instruction::LoadB(Const(4))), Instruction::decode(0b0010_0100));
        assert_eq!(Ok(Instruction::Halt), Instruction::decode(0b0011_0000));
    }

    #[test]
    fn ignored_operands_are_ignored() {
        assert_eq!(Ok(Instruction::Add), Instruction::decode(0x0F));
        assert_eq!(Ok(Instruction::Halt), Instruction::decode(0x3A));
    }

    #[test]
    fn unknown_opcodes_are_reported() {
        for opcode in 4..=0xF {
            for operand in 0..=0xF {
                assert_eq!(Err(opcode), Instruction::decode(opcode << 4 | operand));
            }
        }
    }

    #[test]
    fn encode_is_inverse_of_decode() {
        for byte in 0..=0x3F {
            let instruction = Instruction::decode(byte).unwrap();
            assert_eq!(Ok(instruction), Instruction::decode(instruction.encode()));
        }
    }

    #[test_case(Instruction::Add => "ADD" ; "add")]
    #[test_case(Instruction::LoadA(Const(3)) => "LOAD A 3" ; "load a")]
    #[test_case(Instruction::LoadB(Const(15)) => "LOAD B 15" ; "load b")]
    #[test_case(Instruction::Halt => "HALT" ; "halt")]
    fn displays_as_mnemonic(instruction: Instruction) -> String {
        instruction.to_string()
    }
}
