//! Typed configuration from environment variables and `.env` files
//!
//! `envload` reads process environment variables, optionally seeded from a
//! `.env` file, and offers two ways to consume them:
//!
//! - **Standalone accessors** ([`get`], [`get_bool`], [`get_int`], ...) that
//!   never fail. An unset, empty or unparsable value yields the default you
//!   pass in.
//! - **Struct population** through `#[derive(EnvStruct)]` and [`load_struct`],
//!   which is strict: the first value that does not parse aborts with an
//!   [`EnvError`] naming the variable.
//!
//! # Value Parsing
//!
//! - Strings: taken as-is, `HOST=localhost`
//! - Booleans: `1 t T TRUE true True` / `0 f F FALSE false False`
//! - Integers (`i32`, `i64`): base 10, `PORT=8080`
//! - Integer lists (`Vec<i32>`, `Vec<i64>`, `[i32; N]`, `[i64; N]`):
//!   comma-separated, `PORTS=8080, 8081,,8083`. Whitespace around elements is
//!   trimmed and an empty element reads as `0`. Arrays require exactly `N`
//!   elements.
//!
//! A variable that is set to the empty string is treated exactly like an unset
//! one.
//!
//! # Example
//!
//! ```rust
//! use envload::EnvStruct;
//!
//! #[derive(Debug, Default, EnvStruct)]
//! struct Config {
//!     #[env(name = "DATABASE_URL")]
//!     pub database_url: String,
//!
//!     #[env(name = "MAX_CONNECTIONS", default = "10")]
//!     pub max_connections: i32,
//!
//!     #[env(name = "WORKER_PORTS", default = "9000,9001")]
//!     pub worker_ports: Vec<i32>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("DATABASE_URL", "postgres://localhost/db");
//! #     std::env::remove_var("MAX_CONNECTIONS");
//! #     std::env::remove_var("WORKER_PORTS");
//! let mut config = Config::default();
//! envload::load_struct(&mut config)?;
//! assert_eq!(config.database_url, "postgres://localhost/db");
//! assert_eq!(config.max_connections, 10);
//! assert_eq!(config.worker_ports, vec![9000, 9001]);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env(name = "VAR")]`
//!
//! The environment variable a field is read from. Fields without it are left
//! untouched.
//!
//! ## `#[env(default = "raw")]`
//!
//! Raw value used when the variable is unset or empty, written in the same
//! format as the variable itself (`default = "3000,3001"` for a list).
//!
//! ## `#[env(prefix = "APP_")]` (struct-level)
//!
//! Prepended to every field's variable name.
//!
//! ```rust
//! # use envload::EnvStruct;
//! #[derive(Default, EnvStruct)]
//! #[env(prefix = "APP_")]
//! struct Config {
//!     // Read from APP_PORT
//!     #[env(name = "PORT", default = "8080")]
//!     port: i32,
//! }
//! ```
//!
//! # `.env` files
//!
//! [`load`] installs the variables of `.env` (or the file named by
//! `ENV_FILE`) into the process environment without overriding variables that
//! are already set.
//!
//! # Testing
//!
//! Every accessor is also available on [`Env`], which reads from any
//! [`Source`], such as a `HashMap<String, String>`, instead of the process
//! environment.

mod env;
mod error;
mod field;
mod file;
pub mod parse;
mod source;

pub use env::Env;
pub use envload_derive::EnvStruct;
pub use error::{EnvError, ParseError};
pub use field::{EnvStruct, Field, Slot};
pub use file::{load, load_from, DEFAULT_ENV_FILE, ENV_FILE_KEY};
pub use parse::to_list;
pub use source::{resolve, ProcessEnv, Source};

/// Fill every annotated field of `target` from the process environment.
///
/// # Errors
///
/// Returns [`EnvError::Field`] for the first field whose value cannot be
/// parsed or whose type is unsupported.
pub fn load_struct<T: EnvStruct + ?Sized>(target: &mut T) -> Result<(), EnvError> {
    field::populate(&ProcessEnv, target)
}

/// String value of `key`, or `default` if unset or empty.
pub fn get(key: &str, default: &str) -> String {
    Env::process().get(key, default)
}

/// Boolean value of `key`, or `default` if unset, empty or not a boolean.
pub fn get_bool(key: &str, default: bool) -> bool {
    Env::process().get_bool(key, default)
}

/// Integer value of `key`, or `default` if unset, empty or invalid.
pub fn get_int(key: &str, default: i32) -> i32 {
    Env::process().get_int(key, default)
}

/// 64-bit integer value of `key`, or `default` if unset, empty or invalid.
pub fn get_int64(key: &str, default: i64) -> i64 {
    Env::process().get_int64(key, default)
}

/// Comma-separated integers from `key`, or `default` if unset, empty or any
/// element is invalid.
///
/// ```rust
/// std::env::set_var("PORTS", "8080, 8081, 8082");
/// assert_eq!(envload::get_int_slice("PORTS", vec![3000]), vec![8080, 8081, 8082]);
/// # std::env::remove_var("PORTS");
/// ```
pub fn get_int_slice(key: &str, default: Vec<i32>) -> Vec<i32> {
    Env::process().get_int_slice(key, default)
}

/// 64-bit version of [`get_int_slice`].
pub fn get_int64_slice(key: &str, default: Vec<i64>) -> Vec<i64> {
    Env::process().get_int64_slice(key, default)
}
