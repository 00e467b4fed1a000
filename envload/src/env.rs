//! Typed accessors over a [`Source`]

use crate::error::{EnvError, ParseError};
use crate::field::{self, EnvStruct};
use crate::parse::{parse_bool, parse_int, parse_list};
use crate::source::{resolve, ProcessEnv, Source};

/// Typed view of an environment source.
///
/// The `get*` accessors never fail: an unset, empty or unparsable value yields
/// the caller's default. [`Env::populate`] is the strict counterpart.
///
/// ```rust
/// use std::collections::HashMap;
/// use envload::Env;
///
/// let vars = HashMap::from([
///     ("PORT".to_string(), "9090".to_string()),
///     ("DEBUG".to_string(), "yes".to_string()),
/// ]);
/// let env = Env::new(vars);
///
/// assert_eq!(env.get_int("PORT", 8080), 9090);
/// // "yes" is not a boolean token, so the default wins
/// assert!(!env.get_bool("DEBUG", false));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Env<S = ProcessEnv> {
    source: S,
}

impl Env<ProcessEnv> {
    /// Accessors over the real process environment.
    pub fn process() -> Self {
        Self { source: ProcessEnv }
    }
}

impl<S: Source> Env<S> {
    /// Accessors over `source`, e.g. a `HashMap<String, String>` in tests.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Value of `name` if set and non-empty, otherwise `fallback`.
    pub fn resolve(&self, name: &str, fallback: &str) -> String {
        resolve(&self.source, name, fallback)
    }

    /// String value of `key`, or `default` if unset or empty.
    pub fn get(&self, key: &str, default: &str) -> String {
        self.resolve(key, default)
    }

    /// Boolean value of `key`.
    ///
    /// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`; anything
    /// else returns `default`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.parse_or(key, default, parse_bool)
    }

    /// Integer value of `key`, or `default` if unset, empty or invalid.
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.parse_or(key, default, parse_int)
    }

    /// 64-bit integer value of `key`, or `default` if unset, empty or invalid.
    pub fn get_int64(&self, key: &str, default: i64) -> i64 {
        self.parse_or(key, default, parse_int)
    }

    /// Comma-separated integers, e.g. `PORTS=8080, 8081`.
    ///
    /// Empty elements read as `0`. Returns `default` if the variable is unset,
    /// empty or any element is invalid.
    pub fn get_int_slice(&self, key: &str, default: Vec<i32>) -> Vec<i32> {
        self.parse_or(key, default, parse_list)
    }

    /// 64-bit version of [`Env::get_int_slice`].
    pub fn get_int64_slice(&self, key: &str, default: Vec<i64>) -> Vec<i64> {
        self.parse_or(key, default, parse_list)
    }

    /// Fill every annotated field of `target` from this source.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Field`] naming the variable of the first field that
    /// fails to parse. Fields before it have already been written; fields after
    /// it are untouched.
    pub fn populate<T: EnvStruct + ?Sized>(&self, target: &mut T) -> Result<(), EnvError> {
        field::populate(&self.source, target)
    }

    fn parse_or<T>(
        &self,
        key: &str,
        default: T,
        parse: impl FnOnce(&str) -> Result<T, ParseError>,
    ) -> T {
        let value = self.resolve(key, "");
        if value.is_empty() {
            return default;
        }

        match parse(&value) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(
                    key,
                    value = %value,
                    error = %e,
                    "invalid environment value, using default"
                );
                default
            }
        }
    }
}
