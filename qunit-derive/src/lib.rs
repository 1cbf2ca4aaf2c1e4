//! Derive macro implementation used by `qunit-core`.
//!
//! `qunit-derive` is an implementation detail of this workspace. By default the `Unit` derive expands in terms of
//! `crate::Unit`, `crate::UnitDef` and `crate::base_unit`, so it is intended to be used by `qunit-core`. Other crates
//! point it at the unit API with `path = qunit` (or `path = qunit_core`).
//!
//! Most users should depend on `qunit` instead and use the predefined units.
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements `Unit for MyUnit` with a compile-time `DEF` and the given
//! `SYMBOL`. Display of quantities is generic and needs no per-unit impl.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed unit symbol (required)
//! - `base = 0`: declares a new base unit with this index, or
//! - `def = make_unit![ratio(3048, 10000), Meter]`: defines the unit from others (exactly one of `base` / `def`)
//! - `path = qunit`: crate exposing the unit API, `crate` by default

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Path, Token,
};

/// Derive `Unit` for a zero-sized marker type.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol` and one of `base` / `def`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let krate = unit_attr
        .path
        .as_ref()
        .map(|path| quote!(#path))
        .unwrap_or_else(|| quote!(crate));
    let def = match &unit_attr.definition {
        Definition::Base(index) => quote!(#krate::base_unit(#index)),
        Definition::Def(expr) => quote!(#expr),
    };

    let expanded = quote! {
        impl #impl_generics #krate::Unit for #name #ty_generics #where_clause {
            const DEF: #krate::UnitDef = #def;
            const SYMBOL: &'static str = #symbol;
        }
    };

    Ok(expanded)
}

/// How the unit is defined.
enum Definition {
    /// A fresh base unit with the given index.
    Base(Expr),
    /// An expression evaluating to a `UnitDef`.
    Def(Expr),
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    definition: Definition,
    path: Option<Path>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut base: Option<Expr> = None;
        let mut def: Option<Expr> = None;
        let mut path: Option<Path> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "base" => {
                    base = Some(input.parse()?);
                }
                "def" => {
                    def = Some(input.parse()?);
                }
                "path" => {
                    path = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let definition = match (base, def) {
            (Some(index), None) => Definition::Base(index),
            (None, Some(expr)) => Definition::Def(expr),
            (None, None) => {
                return Err(syn::Error::new(
                    input.span(),
                    "missing required attribute `base` or `def`",
                ))
            }
            (Some(_), Some(_)) => {
                return Err(syn::Error::new(
                    input.span(),
                    "attributes `base` and `def` are mutually exclusive",
                ))
            }
        };

        Ok(UnitAttribute {
            symbol,
            definition,
            path,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}
