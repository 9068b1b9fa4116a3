//! Input text parsing
//!
//! Converts the two raw text inputs into validated integers:
//! - [`parse_array`]: comma-separated list → `Vec<i64>`
//! - [`parse_target`]: single integer token → `i64`
//! - [`is_sorted`]: ascending-order check used by the initialization gate
//!
//! Parsing reports *which* token failed; it does not check sortedness or
//! emptiness. Those gates belong to [`crate::search::engine::initialize`].

use std::fmt;

/// An input token that could not be read as a base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    fn new(message: String) -> Self {
        ParseError { message }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse comma-separated integers, trimming whitespace around each token.
///
/// Every token between commas must parse, including the empty token that an
/// empty input or a stray comma produces. Order and duplicates are preserved
/// exactly as written.
pub fn parse_array(text: &str) -> Result<Vec<i64>, ParseError> {
    text.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i64>()
                .map_err(|_| ParseError::new(format!("'{}' is not a valid integer", token)))
        })
        .collect()
}

/// Parse a single integer, trimming surrounding whitespace.
pub fn parse_target(text: &str) -> Result<i64, ParseError> {
    let token = text.trim();
    token
        .parse::<i64>()
        .map_err(|_| ParseError::new(format!("'{}' is not a valid integer", token)))
}

/// True iff every adjacent pair satisfies `a <= b` (duplicates permitted).
pub fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array_basic() {
        let values = parse_array("2, 5, 8, 12").unwrap();
        assert_eq!(values, vec![2, 5, 8, 12]);
    }

    #[test]
    fn test_parse_array_whitespace() {
        let values = parse_array("  1 ,2,   3  ").unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_array_negative_values() {
        let values = parse_array("-10, -3, 0, 7").unwrap();
        assert_eq!(values, vec![-10, -3, 0, 7]);
    }

    #[test]
    fn test_parse_array_single_element() {
        assert_eq!(parse_array("42").unwrap(), vec![42]);
    }

    #[test]
    fn test_parse_array_invalid_token() {
        let err = parse_array("a, b").unwrap_err();
        assert!(err.message.contains("'a'"), "message was: {}", err.message);
    }

    #[test]
    fn test_parse_array_trailing_comma() {
        // "5," yields an empty second token, which is not an integer
        let err = parse_array("5,").unwrap_err();
        assert!(err.message.contains("''"), "message was: {}", err.message);
    }

    #[test]
    fn test_parse_array_empty_input() {
        assert!(parse_array("").is_err());
        assert!(parse_array("   ").is_err());
    }

    #[test]
    fn test_parse_array_float_rejected() {
        assert!(parse_array("1, 2.5, 3").is_err());
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(" 23 ").unwrap(), 23);
        assert_eq!(parse_target("-7").unwrap(), -7);
        assert!(parse_target("x").is_err());
        assert!(parse_target("").is_err());
        assert!(parse_target("1 2").is_err());
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[1, 2, 3]));
        assert!(is_sorted(&[1, 1, 2])); // non-strict: duplicates pass
        assert!(is_sorted(&[5]));
        assert!(is_sorted(&[]));
        assert!(!is_sorted(&[3, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}
