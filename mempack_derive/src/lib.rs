//! The derive macros for the mempack serialization engine.
//!
//! The real work happens in `mempack_derive_impl`; this crate only crosses
//! the proc-macro boundary.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive `mempack::serialize::Serialize` for a struct or enum.
///
/// Fields are serialized in declaration order; annotate a field with
/// `#[mempack(skip)]` to leave it out of the wire format.
#[proc_macro_derive(Serialize, attributes(mempack))]
pub fn derive_serialize(tokens: TokenStream) -> TokenStream {
    let input = parse_macro_input!(tokens as DeriveInput);
    mempack_derive_impl::derive_serialize(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive `mempack::serialize::Deserialize` for a struct or enum.
///
/// Fields are read in declaration order; `#[mempack(skip)]` fields are left
/// untouched.
#[proc_macro_derive(Deserialize, attributes(mempack))]
pub fn derive_deserialize(tokens: TokenStream) -> TokenStream {
    let input = parse_macro_input!(tokens as DeriveInput);
    mempack_derive_impl::derive_deserialize(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
