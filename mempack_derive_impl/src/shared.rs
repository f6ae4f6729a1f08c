use proc_macro2::TokenStream;
use syn::Generics;

/// Clone `generics` with `bounds` added to every type parameter's where
/// clause, for use on the generated impl block.
pub fn with_bounds(generics: &Generics, bounds: &TokenStream) -> Generics {
    let predicates: Vec<syn::WherePredicate> = generics
        .type_params()
        .map(|param| {
            let ident = &param.ident;
            syn::parse_quote!(#ident: #bounds)
        })
        .collect();
    let mut bounded = generics.clone();
    if !predicates.is_empty() {
        bounded.make_where_clause().predicates.extend(predicates);
    }
    bounded
}
