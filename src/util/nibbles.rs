//! Splitting instruction bytes into opcode and operand nibbles.

const LOW_NIBBLE_MASK: u8 = 0x0F;

/// The opcode, found in the upper four bits of an instruction.
pub fn opcode(instruction: u8) -> u8 {
    instruction >> 4
}

/// The operand, found in the lower four bits of an instruction.
pub fn operand(instruction: u8) -> u8 {
    instruction & LOW_NIBBLE_MASK
}

/// Put an opcode and an operand back together into one byte.
/// Only the lower four bits of each are kept.
pub fn join(opcode: u8, operand: u8) -> u8 {
    (opcode & LOW_NIBBLE_MASK) << 4 | (operand & LOW_NIBBLE_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(0b0001_0011, 0x1, 0x3 ; "load a three")]
    #[test_case(0b0010_0100, 0x2, 0x4 ; "load b four")]
    #[test_case(0b0000_0000, 0x0, 0x0 ; "add")]
    #[test_case(0b0011_0000, 0x3, 0x0 ; "halt")]
    #[test_case(0xFF, 0xF, 0xF ; "all bits set")]
    fn splits_into_nibbles(instruction: u8, expected_opcode: u8, expected_operand: u8) {
        assert_eq!(opcode(instruction), expected_opcode);
        assert_eq!(operand(instruction), expected_operand);
    }

    #[test]
    fn join_drops_upper_bits() {
        assert_eq!(join(0x13, 0xF4), 0x34);
    }

    proptest! {
        #[test]
        fn join_undoes_split(instruction in any::<u8>()) {
            prop_assert_eq!(join(opcode(instruction), operand(instruction)), instruction);
        }

        #[test]
        fn nibbles_fit_in_four_bits(instruction in any::<u8>()) {
            prop_assert!(opcode(instruction) <= 0xF);
            prop_assert!(operand(instruction) <= 0xF);
        }
    }
}
