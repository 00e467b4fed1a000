//! Conversion of raw variable values into typed values
//!
//! These functions are strict: every malformed input is an error. The
//! "fall back to the default" behaviour of the standalone accessors lives in
//! [`crate::Env`], and the "empty means zero" behaviour of struct fields lives
//! in [`crate::Slot`].

use crate::error::ParseError;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// Integer widths the parsers accept: `i32` and `i64`.
pub trait Integer:
    sealed::Sealed + FromStr<Err = ParseIntError> + Copy + Default + fmt::Debug + fmt::Display
{
}

impl Integer for i32 {}
impl Integer for i64 {}

/// Parse a boolean.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(raw: &str) -> Result<bool, ParseError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseError::Bool {
            value: raw.to_owned(),
        }),
    }
}

/// Parse a base-10 signed integer of the target width.
pub fn parse_int<T: Integer>(raw: &str) -> Result<T, ParseError> {
    Ok(raw.parse::<T>()?)
}

/// Parse a comma-separated list of integers.
///
/// An empty input yields an empty list. Tokens are trimmed and an empty token
/// stands for `0`, so `"1,,3"` parses as `[1, 0, 3]`.
pub fn parse_list<T: Integer>(raw: &str) -> Result<Vec<T>, ParseError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .enumerate()
        .map(|(index, token)| parse_element(index, token))
        .collect()
}

/// Parse a comma-separated list into a fixed-size slice, in place.
///
/// An empty input zeroes the whole target. Otherwise the token count must
/// equal `target.len()`. The target is only written once every token has
/// parsed.
pub fn fill_array<T: Integer>(raw: &str, target: &mut [T]) -> Result<(), ParseError> {
    if raw.is_empty() {
        target.fill(T::default());
        return Ok(());
    }

    let tokens: Vec<&str> = raw.split(',').collect();
    if tokens.len() != target.len() {
        return Err(ParseError::LengthMismatch {
            actual: tokens.len(),
            expected: target.len(),
        });
    }

    let values = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| parse_element(index, token))
        .collect::<Result<Vec<T>, _>>()?;
    target.copy_from_slice(&values);

    Ok(())
}

/// Parse a comma-separated list into a new array of length `N`.
pub fn parse_array<T: Integer, const N: usize>(raw: &str) -> Result<[T; N], ParseError> {
    let mut out = [T::default(); N];
    fill_array(raw, &mut out)?;
    Ok(out)
}

/// Split `value` on `separator` without trimming.
///
/// An empty `value` yields a single empty element; an empty `separator`
/// splits into individual characters.
pub fn to_list(value: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return value.chars().map(String::from).collect();
    }
    value.split(separator).map(str::to_owned).collect()
}

fn parse_element<T: Integer>(index: usize, token: &str) -> Result<T, ParseError> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(T::default());
    }
    token
        .parse::<T>()
        .map_err(|source| ParseError::Element { index, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_token_set() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(raw), Ok(true), "{raw}");
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(raw), Ok(false), "{raw}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_other_tokens() {
        for raw in ["yes", "no", "tRUE", " true", "2", ""] {
            assert!(
                matches!(parse_bool(raw), Err(ParseError::Bool { .. })),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_int_widths() {
        assert_eq!(parse_int::<i32>("-42"), Ok(-42));
        assert_eq!(parse_int::<i32>("+7"), Ok(7));
        assert_eq!(parse_int::<i64>("9223372036854775807"), Ok(i64::MAX));
        assert!(matches!(
            parse_int::<i32>("2147483648"),
            Err(ParseError::Int(_))
        ));
        assert!(matches!(
            parse_int::<i64>("not_a_number"),
            Err(ParseError::Int(_))
        ));
        assert!(parse_int::<i32>(" 1").is_err());
    }

    #[test]
    fn test_parse_list_basic() {
        assert_eq!(parse_list::<i32>("8080,8081,8082"), Ok(vec![8080, 8081, 8082]));
        assert_eq!(parse_list::<i64>("-1"), Ok(vec![-1]));
    }

    #[test]
    fn test_parse_list_empty_input() {
        assert_eq!(parse_list::<i32>(""), Ok(vec![]));
    }

    #[test]
    fn test_parse_list_empty_elements_are_zero() {
        assert_eq!(parse_list::<i32>("1,,3"), Ok(vec![1, 0, 3]));
        assert_eq!(parse_list::<i64>(","), Ok(vec![0, 0]));
        assert_eq!(parse_list::<i32>(" "), Ok(vec![0]));
    }

    #[test]
    fn test_parse_list_trims_whitespace() {
        assert_eq!(parse_list::<i32>(" 1 , 2 , 3 "), Ok(vec![1, 2, 3]));
        assert_eq!(parse_list::<i64>("\t10,\n20"), Ok(vec![10, 20]));
    }

    #[test]
    fn test_parse_list_reports_failing_index() {
        match parse_list::<i32>("8080,not_a_number,8082") {
            Err(ParseError::Element { index, .. }) => assert_eq!(index, 1),
            other => panic!("Expected Element error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_respects_width() {
        assert!(parse_list::<i32>("1,4294967296").is_err());
        assert_eq!(parse_list::<i64>("1,4294967296"), Ok(vec![1, 4_294_967_296]));
    }

    #[test]
    fn test_parse_list_joined_sequence_round_trips() {
        let values: Vec<i64> = vec![i64::MIN, -5, 0, 17, i64::MAX];
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(parse_list::<i64>(&joined), Ok(values));
    }

    #[test]
    fn test_fill_array_exact_length() {
        let mut target = [0i32; 3];
        fill_array("1,2,3", &mut target).unwrap();
        assert_eq!(target, [1, 2, 3]);
    }

    #[test]
    fn test_fill_array_length_mismatch() {
        let mut target = [9i32; 3];
        let err = fill_array("1,2", &mut target).unwrap_err();
        assert_eq!(
            err,
            ParseError::LengthMismatch {
                actual: 2,
                expected: 3
            }
        );
        assert_eq!(target, [9, 9, 9]);
    }

    #[test]
    fn test_fill_array_empty_input_zeroes() {
        let mut target = [5i64; 4];
        fill_array("", &mut target).unwrap();
        assert_eq!(target, [0; 4]);
    }

    #[test]
    fn test_fill_array_bad_token_leaves_target() {
        let mut target = [7i32; 2];
        assert!(fill_array("1,x", &mut target).is_err());
        assert_eq!(target, [7, 7]);
    }

    #[test]
    fn test_parse_array() {
        let parsed: [i64; 2] = parse_array("10, ").unwrap();
        assert_eq!(parsed, [10, 0]);
        assert!(parse_array::<i32, 2>("1,2,3").is_err());
    }

    #[test]
    fn test_to_list() {
        assert_eq!(to_list("a,b,c", ","), vec!["a", "b", "c"]);
        assert_eq!(to_list("a;b;c", ";"), vec!["a", "b", "c"]);
        assert_eq!(to_list("single", ","), vec!["single"]);
        assert_eq!(to_list("", ","), vec![""]);
        assert_eq!(to_list("a b c", " "), vec!["a", "b", "c"]);
        assert_eq!(to_list(" a , b ", ","), vec![" a ", " b "]);
    }

    #[test]
    fn test_to_list_empty_separator_splits_chars() {
        assert_eq!(to_list("abc", ""), vec!["a", "b", "c"]);
        assert!(to_list("", "").is_empty());
    }
}
