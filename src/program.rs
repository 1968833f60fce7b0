//! Program images, either raw bytes or text with one binary byte per line.

use crate::emulator::state::MEM_SIZE;
use crate::error::LoadError;
use crate::util::binary;
use std::path::Path;
use std::str::FromStr;

/// How a program is stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Pick by file extension: `.bin` and `.rom` are binary, anything else is text.
    Auto,
    Binary,
    Text,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Format::Auto),
            "binary" => Ok(Format::Binary),
            "text" => Ok(Format::Text),
            other => Err(format!("unknown format {:?}, expected auto, binary or text", other)),
        }
    }
}

impl Format {
    fn resolve(self, path: &Path) -> Format {
        match self {
            Format::Auto => match path.extension().and_then(|ext| ext.to_str()) {
                Some("bin") | Some("rom") => Format::Binary,
                _ => Format::Text,
            },
            format => format,
        }
    }
}

/// A program image that fits in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program(Vec<u8>);

impl Program {

    /// Use raw bytes as a program.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Program, LoadError> {
        if bytes.len() > MEM_SIZE {
            return Err(LoadError::TooLarge { len: bytes.len() });
        }
        Ok(Program(bytes))
    }

    /// Parse a program written as one 8-digit binary byte per line.
    /// Blank lines are skipped, and `;` or `#` starts a comment.
    pub fn parse_text(text: &str) -> Result<Program, LoadError> {
        let mut bytes = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let code = line.split(|c: char| c == ';' || c == '#').next().unwrap_or("").trim();
            if code.is_empty() {
                continue;
            }
            let byte = binary::parse_byte(code)
                .map_err(|source| LoadError::Encoding { line: i + 1, source })?;
            bytes.push(byte);
        }
        Program::from_bytes(bytes)
    }

    /// Read a program from a file.
    pub fn read(path: &Path, format: Format) -> Result<Program, LoadError> {
        match format.resolve(path) {
            Format::Text => Program::parse_text(&std::fs::read_to_string(path)?),
            _ => Program::from_bytes(std::fs::read(path)?),
        }
    }

    /// Loads 3 and 4, adds them, loads 1, adds again and halts with 8 in register B.
    pub fn demo() -> Program {
        Program(vec![
            0b0001_0011, // LOAD A 3
            0b0010_0100, // LOAD B 4
            0b0000_0000, // ADD
            0b0001_0001, // LOAD A 1
            0b0000_0000, // ADD
            0b0011_0000, // HALT
        ])
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::path::PathBuf;
    use test_case::test_case;

    #[test]
    fn demo_matches_its_text_form() {
        let text = "\
            00010011 ; LOAD A 3
            00100100 ; LOAD B 4
            00000000 ; ADD

            00010001 ; LOAD A 1
            00000000 # ADD, should be 8
            00110000 ; HALT
        ";
        assert_eq!(Program::parse_text(text).unwrap(), Program::demo());
    }

    #[test]
    fn bad_lines_are_reported_by_number() {
        let text = "00010011\n; comment\n0010010\n";
        match Program::parse_text(text) {
            Err(LoadError::Encoding { line, source }) => {
                assert_eq!(line, 3);
                assert_eq!(source.input, "0010010");
            }
            other => panic!("expected an encoding error, got {:?}", other),
        }
    }

    #[test]
    fn too_large_programs_are_rejected() {
        let text = "00110000\n".repeat(MEM_SIZE + 1);
        match Program::parse_text(&text) {
            Err(LoadError::TooLarge { len }) => assert_eq!(len, MEM_SIZE + 1),
            other => panic!("expected TooLarge, got {:?}", other),
        }
        assert!(Program::from_bytes(vec![0; MEM_SIZE]).is_ok());
    }

    #[test_case("auto", "demo.bin" => Format::Binary ; "bin extension")]
    #[test_case("auto", "demo.rom" => Format::Binary ; "rom extension")]
    #[test_case("auto", "demo.txt" => Format::Text ; "txt extension")]
    #[test_case("auto", "demo" => Format::Text ; "no extension")]
    #[test_case("binary", "demo.txt" => Format::Binary ; "explicit binary")]
    #[test_case("text", "demo.bin" => Format::Text ; "explicit text")]
    fn format_is_resolved(format: &str, path: &str) -> Format {
        format.parse::<Format>().unwrap().resolve(&PathBuf::from(path))
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!("hex".parse::<Format>().is_err());
    }

    #[test]
    fn reads_both_formats_from_disk() {
        let dir = std::env::temp_dir().join(format!("nibble-vm-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let text_path = dir.join("demo.txt");
        std::fs::write(&text_path, "00010011\n00110000\n").unwrap();
        assert_eq!(Program::read(&text_path, Format::Auto).unwrap().bytes(), &[0x13, 0x30]);

        let binary_path = dir.join("demo.bin");
        std::fs::write(&binary_path, [0x13u8, 0x30]).unwrap();
        assert_eq!(Program::read(&binary_path, Format::Auto).unwrap().bytes(), &[0x13, 0x30]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Program::read(Path::new("/definitely/not/here.txt"), Format::Auto);
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
