//! Field descriptors and the struct populator

use crate::error::{EnvError, ParseError};
use crate::parse::{fill_array, parse_bool, parse_int, parse_list};
use crate::source::{lookup, Source};

/// Mutable view of one struct field, tagged with its kind.
///
/// Built by `#[derive(EnvStruct)]`; the populator writes parsed values through
/// it.
#[derive(Debug)]
pub enum Slot<'a> {
    Text(&'a mut String),
    Bool(&'a mut bool),
    Int(&'a mut i32),
    Int64(&'a mut i64),
    IntArray(&'a mut [i32]),
    Int64Array(&'a mut [i64]),
    IntVec(&'a mut Vec<i32>),
    Int64Vec(&'a mut Vec<i64>),
    /// A field type with no parser. Carries the type as written in the source.
    Unsupported(&'static str),
}

impl Slot<'_> {
    /// Short name of the field kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Slot::Text(_) => "String",
            Slot::Bool(_) => "bool",
            Slot::Int(_) => "i32",
            Slot::Int64(_) => "i64",
            Slot::IntArray(_) => "[i32; N]",
            Slot::Int64Array(_) => "[i64; N]",
            Slot::IntVec(_) => "Vec<i32>",
            Slot::Int64Vec(_) => "Vec<i64>",
            Slot::Unsupported(name) => *name,
        }
    }

    /// Parse `raw` and store it in the field.
    ///
    /// Empty input means `false` / `0` / empty list / all-zero array, whatever
    /// the field's default annotation said.
    pub fn assign(self, raw: &str) -> Result<(), ParseError> {
        match self {
            Slot::Text(field) => *field = raw.to_owned(),
            Slot::Bool(field) => *field = !raw.is_empty() && parse_bool(raw)?,
            Slot::Int(field) => *field = parse_or_zero(raw)?,
            Slot::Int64(field) => *field = parse_or_zero(raw)?,
            Slot::IntArray(field) => fill_array(raw, field)?,
            Slot::Int64Array(field) => fill_array(raw, field)?,
            Slot::IntVec(field) => *field = parse_list(raw)?,
            Slot::Int64Vec(field) => *field = parse_list(raw)?,
            Slot::Unsupported(name) => return Err(ParseError::UnsupportedKind(name)),
        }
        Ok(())
    }
}

fn parse_or_zero<T: crate::parse::Integer>(raw: &str) -> Result<T, ParseError> {
    if raw.is_empty() {
        return Ok(T::default());
    }
    parse_int(raw)
}

/// Descriptor of one struct field: where its value comes from and where it goes.
#[derive(Debug)]
pub struct Field<'a> {
    /// Rust field name
    pub ident: &'static str,
    /// Environment variable name. `None` makes the field inert.
    pub var: Option<&'static str>,
    /// Raw default value, used when the variable is unset or empty
    pub default: &'static str,
    /// Target of the parsed value
    pub slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Create a field descriptor (used by macro-generated code)
    #[doc(hidden)]
    pub fn new(
        ident: &'static str,
        var: Option<&'static str>,
        default: &'static str,
        slot: Slot<'a>,
    ) -> Self {
        Self {
            ident,
            var,
            default,
            slot,
        }
    }
}

/// A struct whose fields can be filled from environment variables.
///
/// Usually derived with `#[derive(EnvStruct)]`:
///
/// ```rust
/// use envload::EnvStruct;
///
/// #[derive(Debug, Default, EnvStruct)]
/// struct Config {
///     #[env(name = "HOST", default = "localhost")]
///     host: String,
///
///     #[env(name = "PORT", default = "8080")]
///     port: i32,
///
///     // Not annotated: never touched
///     label: String,
/// }
/// ```
pub trait EnvStruct {
    /// Descriptors for every field, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;

    /// Fill this struct from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Field`] for the first field whose value cannot be
    /// parsed.
    fn load_env(&mut self) -> Result<(), EnvError> {
        populate(&crate::ProcessEnv, self)
    }
}

/// Fill `target` from `source`, stopping at the first field that fails.
pub(crate) fn populate<S, T>(source: &S, target: &mut T) -> Result<(), EnvError>
where
    S: Source + ?Sized,
    T: EnvStruct + ?Sized,
{
    for field in target.fields() {
        let Some(var) = field.var.filter(|var| !var.is_empty()) else {
            tracing::trace!(field = field.ident, "no variable name, skipping field");
            continue;
        };

        let value = lookup(source, var);
        let defaulted = value.is_none();
        let raw = value.unwrap_or_else(|| field.default.to_owned());
        let kind = field.slot.kind();
        field
            .slot
            .assign(&raw)
            .map_err(|e| EnvError::field(var, e))?;

        tracing::debug!(var, field = field.ident, kind, defaulted, "populated field");
    }

    Ok(())
}
