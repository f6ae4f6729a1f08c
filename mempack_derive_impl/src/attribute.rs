use syn::Attribute;

/// The parsed `#[mempack(...)]` options of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldAttribute {
    /// Leave the field out of the wire format.
    pub skip: bool,
}

impl FieldAttribute {
    pub fn parse<'a>(attrs: impl Iterator<Item = &'a Attribute>) -> Result<Self, syn::Error> {
        let mut attribute = Self::default();
        for attr in attrs.filter(|attr| attr.path().is_ident("mempack")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    attribute.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unrecognized parameter"))
                }
            })?;
        }
        Ok(attribute)
    }
}
