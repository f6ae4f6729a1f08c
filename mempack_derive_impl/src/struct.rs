use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Generics, Ident};
use syn::spanned::Spanned;

use crate::attribute::FieldAttribute;
use crate::shared::with_bounds;

pub struct Struct {
    name: Ident,
    generics: Generics,
    fields: Vec<Field>,
}

struct Field {
    member: syn::Member,
    label: String,
}

impl Struct {
    pub fn parse(input: DeriveInput) -> Result<Self, syn::Error> {
        let syn::Data::Struct(data) = &input.data else {
            return Err(syn::Error::new(input.span(), "expected a struct"));
        };

        let mut fields = Vec::new();
        for (index, field) in data.fields.iter().enumerate() {
            let attribute = FieldAttribute::parse(field.attrs.iter())?;
            if attribute.skip {
                continue;
            }
            let (member, label) = match &field.ident {
                Some(ident) => (syn::Member::Named(ident.clone()), ident.to_string()),
                None => (syn::Member::Unnamed(syn::Index::from(index)), index.to_string()),
            };
            fields.push(Field { member, label });
        }

        Ok(Self { name: input.ident, generics: input.generics, fields })
    }

    pub fn derive_serialize(&self) -> TokenStream {
        let name = &self.name;
        let generics = with_bounds(&self.generics, &quote!(::mempack::serialize::Serialize));
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let steps = self.fields.iter().map(|Field { member, label }| {
            quote! {
                ::mempack::serialize::Serialize::serialize(&self.#member, serializer)
                    .map_err(|err| err.enclose(#label))?;
            }
        });

        quote! {
            #[automatically_derived]
            impl #impl_generics ::mempack::serialize::Serialize for #name #ty_generics #where_clause {
                fn serialize<MempackP: ::mempack::packer::Packer>(
                    &self,
                    serializer: &mut ::mempack::serialize::Serializer<'_, MempackP>,
                ) -> ::core::result::Result<(), ::mempack::error::Error> {
                    #(#steps)*
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

        let steps = self.fields.iter().map(|Field { member, label }| {
            quote! {
                ::mempack::serialize::Deserialize::deserialize(&mut self.#member, serializer)
                    .map_err(|err| err.enclose(#label))?;
            }
        });

        quote! {
            #[automatically_derived]
            impl #impl_generics ::mempack::serialize::Deserialize for #name #ty_generics #where_clause {
                fn deserialize<MempackP: ::mempack::packer::Packer>(
                    &mut self,
                    serializer: &mut ::mempack::serialize::Serializer<'_, MempackP>,
                ) -> ::core::result::Result<(), ::mempack::error::Error> {
                    #(#steps)*
                    ::core::result::Result::Ok(())
                }
            }
        }
    }
}
