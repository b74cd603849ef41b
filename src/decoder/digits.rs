use std::path::Path;

use crate::error::{PisciiError, Result};

/// Decimal digits used as glyphs, consumed in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitStream {
    digits: Vec<u8>,
}

impl DigitStream {
    /// Strips whitespace and '.' from `raw`; anything else must be a decimal digit.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut digits = Vec::with_capacity(raw.len());
        for found in raw.chars().filter(|c| !c.is_whitespace() && *c != '.') {
            match found.to_digit(10) {
                Some(d) => digits.push(d as u8),
                None => {
                    return Err(PisciiError::MalformedDigitStream {
                        position: digits.len(),
                        found,
                    })
                }
            }
        }
        Ok(Self { digits })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| PisciiError::DigitFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let stream = Self::parse(&raw)?;
        crate::utils::logger::debug(&format!(
            "loaded {} digits from {}",
            stream.len(),
            path.display()
        ));
        Ok(stream)
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit value (0-9) at `index`.
    #[allow(dead_code)]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.digits.get(index).copied()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_whitespace_and_dots() {
        let stream = DigitStream::parse("3.14159\n26535 8979\t3\r\n").unwrap();
        assert_eq!(stream.len(), 15);
        assert_eq!(&stream.as_slice()[..5], &[3, 1, 4, 1, 5]);
        assert_eq!(stream.get(14), Some(3));
        assert_eq!(stream.get(15), None);
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        match DigitStream::parse("3.14x15") {
            Err(PisciiError::MalformedDigitStream { position, found }) => {
                assert_eq!(position, 3);
                assert_eq!(found, 'x');
            }
            other => panic!("expected MalformedDigitStream, got {:?}", other),
        }
        assert!(DigitStream::parse("12,34").is_err());
    }

    #[test]
    fn test_parse_empty_input() {
        let stream = DigitStream::parse(" . \n").unwrap();
        assert!(stream.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("piscii_missing_digits_file.txt");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            DigitStream::load(&path),
            Err(PisciiError::DigitFileRead { .. })
        ));
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join("piscii_digits_load_test.txt");
        std::fs::write(&path, "2.71828\n18284\n").unwrap();
        let stream = DigitStream::load(&path).unwrap();
        assert_eq!(stream.len(), 11);
        let _ = std::fs::remove_file(&path);
    }
}
