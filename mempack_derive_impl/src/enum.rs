use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, Generics, Ident};
use syn::spanned::Spanned;

use crate::attribute::FieldAttribute;
use crate::shared::with_bounds;

pub struct Enum {
    name: Ident,
    generics: Generics,
    variants: Vec<Variant>,
}

struct Variant {
    ident: Ident,
    fields: VariantFields,
}

enum VariantFields {
    Unit,
    /// Number of fields of a tuple variant.
    Unnamed(usize),
    Named(Vec<Ident>),
}

impl Enum {
    pub fn parse(input: DeriveInput) -> Result<Self, syn::Error> {
        let syn::Data::Enum(data) = &input.data else {
            return Err(syn::Error::new(input.span(), "expected an enum"));
        };
        if data.variants.is_empty() {
            return Err(syn::Error::new(input.span(), "cannot derive for enums with no variants"));
        }

        let mut variants = Vec::new();
        for variant in &data.variants {
            if let Some((_, discriminant)) = &variant.discriminant {
                return Err(syn::Error::new(
                    discriminant.span(),
                    "explicit discriminants are not supported; alternatives are numbered by position",
                ));
            }
            for field in &variant.fields {
                if FieldAttribute::parse(field.attrs.iter())?.skip {
                    return Err(syn::Error::new(field.span(), "`skip` is not supported on enum variant fields"));
                }
            }
            let fields = match &variant.fields {
                syn::Fields::Unit => VariantFields::Unit,
                syn::Fields::Unnamed(fields) => VariantFields::Unnamed(fields.unnamed.len()),
                syn::Fields::Named(fields) => VariantFields::Named(
                    fields.named.iter().map(|field| field.ident.clone().expect("named fields have idents")).collect(),
                ),
            };
            variants.push(Variant { ident: variant.ident.clone(), fields });
        }

        Ok(Self { name: input.ident, generics: input.generics, variants })
    }

    pub fn derive_serialize(&self) -> TokenStream {
        let name = &self.name;
        let generics = with_bounds(&self.generics, &quote!(::mempack::serialize::Serialize));
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let arms = self.variants.iter().enumerate().map(|(index, variant)| {
            let ident = &variant.ident;
            let index = index as u64;
            let write_index = quote! {
                ::mempack::serialize::Serialize::serialize(&#index, serializer)?;
            };
            match &variant.fields {
                VariantFields::Unit => quote! {
                    Self::#ident => {
                        #write_index
                    }
                },
                VariantFields::Unnamed(count) => {
                    let bindings = member_bindings(*count);
                    let labels = (0..*count).map(|position| position.to_string());
                    quote! {
                        Self::#ident(#(#bindings),*) => {
                            #write_index
                            #(::mempack::serialize::Serialize::serialize(#bindings, serializer)
                                .map_err(|err| err.enclose(#labels))?;)*
                        }
                    }
                }
                VariantFields::Named(idents) => {
                    let labels = idents.iter().map(|ident| ident.to_string());
                    quote! {
                        Self::#ident { #(#idents),* } => {
                            #write_index
                            #(::mempack::serialize::Serialize::serialize(#idents, serializer)
                                .map_err(|err| err.enclose(#labels))?;)*
                        }
                    }
                }
            }
        });

        quote! {
            #[automatically_derived]
            impl #impl_generics ::mempack::serialize::Serialize for #name #ty_generics #where_clause {
                fn serialize<MempackP: ::mempack::packer::Packer>(
                    &self,
                    serializer: &mut ::mempack::serialize::Serializer<'_, MempackP>,
                ) -> ::core::result::Result<(), ::mempack::error::Error> {
                    match self {
                        #(#arms)*
                    }
                    ::core::result::Result::Ok(())
                }
            }
        }
    }

    pub fn derive_deserialize(&self) -> TokenStream {
        let name = &self.name;
        let generics = with_bounds(
            &self.generics,
            &quote!(::mempack::serialize::Deserialize + ::core::default::Default),
        );
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        // The index in the stream selects which alternative to rebuild; the
        // alternative starts out with default payloads and its fields are
        // then read in place.
        let construct_arms = self.variants.iter().enumerate().map(|(index, variant)| {
            let ident = &variant.ident;
            let index = index as u64;
            match &variant.fields {
                VariantFields::Unit => quote! {
                    #index => Self::#ident,
                },
                VariantFields::Unnamed(count) => {
                    let defaults =
                        (0..*count).map(|_| quote!(::core::default::Default::default()));
                    quote! {
                        #index => Self::#ident(#(#defaults),*),
                    }
                }
                VariantFields::Named(idents) => quote! {
                    #index => Self::#ident { #(#idents: ::core::default::Default::default()),* },
                },
            }
        });

        let read_arms = self.variants.iter().map(|variant| {
            let ident = &variant.ident;
            match &variant.fields {
                VariantFields::Unit => quote! {
                    Self::#ident => {}
                },
                VariantFields::Unnamed(count) => {
                    let bindings = member_bindings(*count);
                    let labels = (0..*count).map(|position| position.to_string());
                    quote! {
                        Self::#ident(#(#bindings),*) => {
                            #(::mempack::serialize::Deserialize::deserialize(#bindings, serializer)
                                .map_err(|err| err.enclose(#labels))?;)*
                        }
                    }
                }
                VariantFields::Named(idents) => {
                    let labels = idents.iter().map(|ident| ident.to_string());
                    quote! {
                        Self::#ident { #(#idents),* } => {
                            #(::mempack::serialize::Deserialize::deserialize(#idents, serializer)
                                .map_err(|err| err.enclose(#labels))?;)*
                        }
                    }
                }
            }
        });

        quote! {
            #[automatically_derived]
            impl #impl_generics ::mempack::serialize::Deserialize for #name #ty_generics #where_clause {
                fn deserialize<MempackP: ::mempack::packer::Packer>(
                    &mut self,
                    serializer: &mut ::mempack::serialize::Serializer<'_, MempackP>,
                ) -> ::core::result::Result<(), ::mempack::error::Error> {
                    let mut index = 0u64;
                    ::mempack::serialize::Deserialize::deserialize(&mut index, serializer)?;
                    *self = match index {
                        #(#construct_arms)*
                        _ => {
                            return ::core::result::Result::Err(::core::convert::From::from(
                                ::mempack::error::ErrorKind::InvalidVariant,
                            ));
                        }
                    };
                    match self {
                        #(#read_arms)*
                    }
                    ::core::result::Result::Ok(())
                }
            }
        }
    }
}

fn member_bindings(count: usize) -> Vec<Ident> {
    (0..count).map(|position| format_ident!("member{}", position)).collect()
}
