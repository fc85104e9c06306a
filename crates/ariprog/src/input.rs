//! Problem input: two whitespace-separated integers `N M`.

use std::io::Read;

use crate::bisquare::BisquareTable;
use crate::error::{AriprogError, Result};

/// Parameters of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    /// Progression length N
    pub length: usize,
    /// Largest p and q considered, M
    pub bound: usize,
}

impl Problem {
    /// Validate `length` and `bound` without parsing.
    pub fn new(length: usize, bound: usize) -> Result<Self> {
        if length == 0 {
            return Err(AriprogError::ZeroLength);
        }
        if BisquareTable::checked_len(bound).is_none() {
            return Err(AriprogError::BoundTooLarge { bound });
        }
        Ok(Self { length, bound })
    }

    /// Parse `N M` from text. Tokens after the second are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();
        let length = next_value(&mut tokens, "N")?;
        let bound = next_value(&mut tokens, "M")?;
        Self::new(length, bound)
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;
        Self::parse(&buffer)
    }
}

fn next_value<'a, I>(tokens: &mut I, name: &'static str) -> Result<usize>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or(AriprogError::MissingValue { name })?;
    token.parse().map_err(|_| AriprogError::InvalidValue {
        name,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(
            Problem::parse("5\n7\n").unwrap(),
            Problem { length: 5, bound: 7 }
        );
        assert_eq!(
            Problem::parse("  3 0  trailing").unwrap(),
            Problem { length: 3, bound: 0 }
        );
    }

    #[test]
    fn test_read_from_reader() {
        let problem = Problem::read_from("25 250".as_bytes()).unwrap();
        assert_eq!(problem.length, 25);
        assert_eq!(problem.bound, 250);
    }

    #[test]
    fn test_missing_values() {
        assert!(matches!(
            Problem::parse(""),
            Err(AriprogError::MissingValue { name: "N" })
        ));
        assert!(matches!(
            Problem::parse("5"),
            Err(AriprogError::MissingValue { name: "M" })
        ));
    }

    #[test]
    fn test_invalid_values() {
        match Problem::parse("5 -7") {
            Err(AriprogError::InvalidValue { name, token }) => {
                assert_eq!(name, "M");
                assert_eq!(token, "-7");
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(matches!(
            Problem::parse("five 7"),
            Err(AriprogError::InvalidValue { name: "N", .. })
        ));
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(Problem::parse("0 7"), Err(AriprogError::ZeroLength)));
    }

    #[test]
    fn test_bound_too_large_rejected() {
        let text = format!("5 {}", usize::MAX);
        assert!(matches!(
            Problem::parse(&text),
            Err(AriprogError::BoundTooLarge { .. })
        ));
    }

    #[test]
    fn test_bound_past_vec_capacity_rejected() {
        // 2M² + 1 does not overflow a 64-bit usize here, but exceeds isize::MAX
        let bound = 1usize << 31;
        assert!(matches!(
            Problem::new(5, bound),
            Err(AriprogError::BoundTooLarge { bound: b }) if b == bound
        ));
        assert!(Problem::parse("5 2147483648").is_err());
    }
}
