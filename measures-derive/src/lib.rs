//! Derive macro implementation used by `measures-core`.
//!
//! `measures-derive` is an implementation detail of this workspace. The `Dimension` derive expands in terms of
//! `crate::Dimension`, so it is intended to be used by `measures-core` (or by crates that expose an identical
//! crate-root API).
//!
//! # Generated impls
//!
//! For a dimension tag `LengthDim`, the derive implements `crate::Dimension for LengthDim`.
//!
//! # Attributes
//!
//! The derive reads a required `#[dimension(...)]` attribute:
//!
//! - `name = "Length"`: human readable quantity name
//! - `symbol = "m"`: base unit symbol used when rendering SI prefixes
//! - `field = "kilometers"`: field name under which the canonical magnitude is persisted

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Ident, LitStr, Token,
};

/// Derive `crate::Dimension` for a dimension tag type.
///
/// The derive must be paired with a `#[dimension(...)]` attribute providing `name`, `symbol`, and `field`.
///
/// This macro is intended for use by `measures-core`.
#[proc_macro_derive(Dimension, attributes(dimension))]
pub fn derive_dimension(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_dimension_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_dimension_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let attr = parse_dimension_attribute(&input.attrs)?;

    let name = &attr.name;
    let symbol = &attr.symbol;
    let field = &attr.field;

    let expanded = quote! {
        impl #impl_generics crate::Dimension for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            const SYMBOL: &'static str = #symbol;
            const FIELD: &'static str = #field;
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[dimension(...)]` attribute.
struct DimensionAttribute {
    name: LitStr,
    symbol: LitStr,
    field: LitStr,
}

impl Parse for DimensionAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut symbol: Option<LitStr> = None;
        let mut field: Option<LitStr> = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match key.to_string().as_str() {
                "name" => name = Some(input.parse()?),
                "symbol" => symbol = Some(input.parse()?),
                "field" => field = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let name =
            name.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;
        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let field =
            field.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `field`"))?;

        if field.value().is_empty() {
            return Err(syn::Error::new(field.span(), "`field` must not be empty"));
        }

        Ok(DimensionAttribute {
            name,
            symbol,
            field,
        })
    }
}

fn parse_dimension_attribute(attrs: &[Attribute]) -> syn::Result<DimensionAttribute> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident("dimension"))
        .map(|attr| attr.parse_args::<DimensionAttribute>())
        .unwrap_or_else(|| {
            Err(syn::Error::new(
                proc_macro2::Span::call_site(),
                "missing #[dimension(...)] attribute",
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn parses_complete_attribute() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Length", symbol = "m", field = "kilometers")]
            pub enum LengthDim {}
        };

        let attr = parse_dimension_attribute(&input.attrs).unwrap();
        assert_eq!(attr.name.value(), "Length");
        assert_eq!(attr.symbol.value(), "m");
        assert_eq!(attr.field.value(), "kilometers");
    }

    #[test]
    fn missing_attribute_is_reported() {
        let input: DeriveInput = parse_quote! {
            pub enum LengthDim {}
        };

        let err = parse_dimension_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing #[dimension(...)] attribute"));
    }

    #[test]
    fn missing_field_is_reported() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Length", symbol = "m")]
            pub enum LengthDim {}
        };

        let err = parse_dimension_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `field`"));
    }

    #[test]
    fn missing_symbol_is_reported() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Length", field = "kilometers")]
            pub enum LengthDim {}
        };

        let err = parse_dimension_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `symbol`"));
    }

    #[test]
    fn empty_field_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Length", symbol = "m", field = "")]
            pub enum LengthDim {}
        };

        let err = parse_dimension_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Length", symbol = "m", field = "kilometers", ratio = 1.0)]
            pub enum LengthDim {}
        };

        let err = parse_dimension_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("unknown attribute `ratio`"));
    }

    #[test]
    fn trailing_comma_is_accepted() {
        let tokens = quote! {
            name = "Mass", symbol = "g", field = "kilograms",
        };
        let attr: DimensionAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.field.value(), "kilograms");
    }

    #[test]
    fn expands_to_dimension_impl() {
        let input: DeriveInput = parse_quote! {
            #[dimension(name = "Area", symbol = "km²", field = "kmSquared")]
            pub enum AreaDim {}
        };

        let code = derive_dimension_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Dimension for AreaDim"));
        assert!(code.contains("const NAME : & 'static str = \"Area\""));
        assert!(code.contains("const FIELD : & 'static str = \"kmSquared\""));
    }

    #[test]
    fn expansion_error_becomes_compile_error() {
        let input: DeriveInput = parse_quote! {
            pub enum AreaDim {}
        };

        let err = derive_dimension_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
