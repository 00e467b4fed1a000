//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates the variable-name, default and prefix
//! attributes during macro expansion.

use syn::{Attribute, Field, LitStr};

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Environment variable name.
    ///
    /// `None` (or an empty string) leaves the field inert.
    pub name: Option<String>,

    /// Raw default value, in the same format as the variable itself.
    pub default: Option<String>,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    ///
    /// Unknown keys and non-string values are reported as errors.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in env_attrs(&field.attrs) {
            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    let s: LitStr = meta.value()?.parse()?;
                    attrs.name = Some(s.value());
                    return Ok(());
                }

                // default = "..."
                if meta.path.is_ident("default") {
                    let s: LitStr = meta.value()?.parse()?;
                    attrs.default = Some(s.value());
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute, expected `name` or `default`"))
            })?;
        }

        Ok(attrs)
    }

    /// Full variable name with `prefix` applied, or `None` for inert fields.
    pub fn var_name(&self, prefix: &str) -> Option<String> {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| format!("{}{}", prefix, name))
    }
}

/// Parsed `#[env(...)]` attributes from the struct itself.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prepended to every field's variable name.
    pub prefix: String,
}

impl StructAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in env_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    let s: LitStr = meta.value()?.parse()?;
                    parsed.prefix = s.value();
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute, expected `prefix`"))
            })?;
        }

        Ok(parsed)
    }
}

fn env_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("env"))
}
