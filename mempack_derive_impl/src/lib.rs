mod attribute;
mod r#enum;
mod shared;
mod r#struct;

use proc_macro2::TokenStream;
use syn::DeriveInput;
use syn::spanned::Spanned;

use r#enum::Enum;
use r#struct::Struct;

pub enum DeriveObject {
    Struct(Struct),
    Enum(Enum),
}

impl DeriveObject {
    pub fn parse(input: DeriveInput) -> Result<Self, syn::Error> {
        match &input.data {
            syn::Data::Struct(_) => Ok(Self::Struct(Struct::parse(input)?)),
            syn::Data::Enum(_) => Ok(Self::Enum(Enum::parse(input)?)),
            syn::Data::Union(_) => Err(syn::Error::new(input.span(), "unions are not supported")),
        }
    }

    pub fn derive_serialize(&self) -> TokenStream {
        match self {
            DeriveObject::Struct(item) => item.derive_serialize(),
            DeriveObject::Enum(item) => item.derive_serialize(),
        }
    }

    pub fn derive_deserialize(&self) -> TokenStream {
        match self {
            DeriveObject::Struct(item) => item.derive_deserialize(),
            DeriveObject::Enum(item) => item.derive_deserialize(),
        }
    }
}

pub fn derive_serialize(input: DeriveInput) -> Result<TokenStream, syn::Error> {
    Ok(DeriveObject::parse(input)?.derive_serialize())
}

pub fn derive_deserialize(input: DeriveInput) -> Result<TokenStream, syn::Error> {
    Ok(DeriveObject::parse(input)?.derive_deserialize())
}
