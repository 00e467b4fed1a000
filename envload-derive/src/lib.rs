//! Derive macro implementation for envload

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{parse_macro_input, Data, DeriveInput, Fields, GenericArgument, PathArguments, Type};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// Field kinds the runtime knows how to fill.
#[derive(Debug, PartialEq, Eq)]
enum Kind {
    Text,
    Bool,
    Int,
    Int64,
    IntArray,
    Int64Array,
    IntVec,
    Int64Vec,
    Unsupported(String),
}

impl Kind {
    /// Classify a field type by its spelling.
    ///
    /// Type aliases are not resolved; they classify as unsupported.
    fn of(ty: &Type) -> Self {
        match ty {
            Type::Paren(inner) => Self::of(&inner.elem),
            Type::Group(inner) => Self::of(&inner.elem),
            Type::Array(array) => match integer_width(&array.elem) {
                Some(32) => Self::IntArray,
                Some(64) => Self::Int64Array,
                _ => Self::unsupported(ty),
            },
            Type::Path(path) if path.qself.is_none() => {
                let Some(seg) = path.path.segments.last() else {
                    return Self::unsupported(ty);
                };
                match (seg.ident.to_string().as_str(), &seg.arguments) {
                    ("String", PathArguments::None) => Self::Text,
                    ("bool", PathArguments::None) => Self::Bool,
                    ("i32", PathArguments::None) => Self::Int,
                    ("i64", PathArguments::None) => Self::Int64,
                    ("Vec", PathArguments::AngleBracketed(args)) if args.args.len() == 1 => {
                        match args.args.first() {
                            Some(GenericArgument::Type(elem)) => match integer_width(elem) {
                                Some(32) => Self::IntVec,
                                Some(64) => Self::Int64Vec,
                                _ => Self::unsupported(ty),
                            },
                            _ => Self::unsupported(ty),
                        }
                    }
                    _ => Self::unsupported(ty),
                }
            }
            _ => Self::unsupported(ty),
        }
    }

    fn unsupported(ty: &Type) -> Self {
        let spelled: String = ty
            .to_token_stream()
            .to_string()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        Self::Unsupported(spelled)
    }

    /// `::envload::Slot` expression borrowing `access`.
    fn slot(&self, access: TokenStream2) -> TokenStream2 {
        match self {
            Self::Text => quote!(::envload::Slot::Text(&mut #access)),
            Self::Bool => quote!(::envload::Slot::Bool(&mut #access)),
            Self::Int => quote!(::envload::Slot::Int(&mut #access)),
            Self::Int64 => quote!(::envload::Slot::Int64(&mut #access)),
            Self::IntArray => quote!(::envload::Slot::IntArray(&mut #access)),
            Self::Int64Array => quote!(::envload::Slot::Int64Array(&mut #access)),
            Self::IntVec => quote!(::envload::Slot::IntVec(&mut #access)),
            Self::Int64Vec => quote!(::envload::Slot::Int64Vec(&mut #access)),
            Self::Unsupported(name) => quote!(::envload::Slot::Unsupported(#name)),
        }
    }
}

/// 32 or 64 for `i32` / `i64`, `None` for anything else.
fn integer_width(ty: &Type) -> Option<u8> {
    match ty {
        Type::Paren(inner) => integer_width(&inner.elem),
        Type::Group(inner) => integer_width(&inner.elem),
        Type::Path(path) if path.qself.is_none() => {
            let seg = path.path.segments.last()?;
            if !matches!(seg.arguments, PathArguments::None) {
                return None;
            }
            if seg.ident == "i32" {
                Some(32)
            } else if seg.ident == "i64" {
                Some(64)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// `EnvStruct` derive macro
///
/// Implements `envload::EnvStruct` by listing every named field with its
/// variable name, raw default and a typed slot.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Add prefix to all env var names
///
/// **Field-level**:
/// - `#[env(name = "VAR")]`: Environment variable to read. Fields without it
///   are never touched.
/// - `#[env(default = "raw")]`: Raw value used when the variable is unset or
///   empty
///
/// Supported field types are `String`, `bool`, `i32`, `i64`, `Vec<i32>`,
/// `Vec<i64>`, `[i32; N]` and `[i64; N]`. Annotated fields of any other type
/// make population fail with an "unsupported kind" error when they are reached.
///
/// # Example
///
/// See the `envload` crate documentation for usage examples.
#[proc_macro_derive(EnvStruct, attributes(env))]
pub fn derive_env_struct(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let StructAttrs { prefix } = StructAttrs::from_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "EnvStruct only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "EnvStruct only supports structs",
            ));
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let attrs = FieldAttrs::from_field(field)?;

        let ident = field_name.to_string();
        let var = match attrs.var_name(&prefix) {
            Some(name) => quote!(::std::option::Option::Some(#name)),
            None => quote!(::std::option::Option::None),
        };
        let default = attrs.default.unwrap_or_default();
        let slot = Kind::of(&field.ty).slot(quote!(self.#field_name));

        descriptors.push(quote! {
            ::envload::Field::new(#ident, #var, #default, #slot)
        });
    }

    Ok(quote! {
        impl #impl_generics ::envload::EnvStruct for #struct_name #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<::envload::Field<'_>> {
                ::std::vec![
                    #(#descriptors),*
                ]
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_classify_scalars() {
        assert_eq!(Kind::of(&parse_quote!(String)), Kind::Text);
        assert_eq!(Kind::of(&parse_quote!(std::string::String)), Kind::Text);
        assert_eq!(Kind::of(&parse_quote!(bool)), Kind::Bool);
        assert_eq!(Kind::of(&parse_quote!(i32)), Kind::Int);
        assert_eq!(Kind::of(&parse_quote!(i64)), Kind::Int64);
    }

    #[test]
    fn test_classify_collections() {
        assert_eq!(Kind::of(&parse_quote!([i32; 3])), Kind::IntArray);
        assert_eq!(Kind::of(&parse_quote!([i64; 8])), Kind::Int64Array);
        assert_eq!(Kind::of(&parse_quote!(Vec<i32>)), Kind::IntVec);
        assert_eq!(Kind::of(&parse_quote!(std::vec::Vec<i64>)), Kind::Int64Vec);
    }

    #[test]
    fn test_classify_collections_with_qualified_elements() {
        assert_eq!(
            Kind::of(&parse_quote!([std::primitive::i32; 2])),
            Kind::IntArray
        );
        assert_eq!(
            Kind::of(&parse_quote!(Vec<core::primitive::i64>)),
            Kind::Int64Vec
        );
        assert_eq!(Kind::of(&parse_quote!(std::primitive::i32)), Kind::Int);
    }

    #[test]
    fn test_classify_unsupported() {
        assert_eq!(
            Kind::of(&parse_quote!(f64)),
            Kind::Unsupported("f64".to_string())
        );
        assert_eq!(
            Kind::of(&parse_quote!(Vec<String>)),
            Kind::Unsupported("Vec<String>".to_string())
        );
        assert_eq!(
            Kind::of(&parse_quote!([u8; 4])),
            Kind::Unsupported("[u8;4]".to_string())
        );
        assert_eq!(
            Kind::of(&parse_quote!(Option<i32>)),
            Kind::Unsupported("Option<i32>".to_string())
        );
    }

    #[test]
    fn test_expand_rejects_enums() {
        let input: DeriveInput = parse_quote! {
            enum Config { A, B }
        };
        let err = expand(&input).unwrap_err();
        assert_eq!(err.to_string(), "EnvStruct only supports structs");
    }

    #[test]
    fn test_expand_rejects_tuple_structs() {
        let input: DeriveInput = parse_quote! {
            struct Config(String, i32);
        };
        let err = expand(&input).unwrap_err();
        assert_eq!(err.to_string(), "EnvStruct only supports structs with named fields");
    }

    #[test]
    fn test_expand_rejects_unit_structs() {
        let input: DeriveInput = parse_quote! {
            struct Config;
        };
        assert!(expand(&input).is_err());
    }

    #[test]
    fn test_expand_applies_prefix_and_default() {
        let input: DeriveInput = parse_quote! {
            #[env(prefix = "APP_")]
            struct Config {
                #[env(name = "PORT", default = "8080")]
                port: i32,
                label: String,
            }
        };
        let expanded = expand(&input).unwrap().to_string();
        assert!(expanded.contains("\"APP_PORT\""));
        assert!(expanded.contains("\"8080\""));
        assert!(expanded.contains("Slot :: Int"));
        assert!(expanded.contains(":: std :: option :: Option :: None"));
    }
}
