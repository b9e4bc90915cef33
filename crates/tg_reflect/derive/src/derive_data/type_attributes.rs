use proc_macro2::Span;
use syn::Attribute;
use syn::spanned::Spanned;

use crate::TAGGED_ATTRIBUTE_NAME;

/// Type level attributes, `#[tagged(...)]`.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[tagged(auto_register)]`
    #[cfg_attr(not(feature = "auto_register"), allow(dead_code))]
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(TAGGED_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("auto_register") {
                    if this.auto_register.is_some() {
                        return Err(meta.error("duplicate `auto_register`"));
                    }
                    this.auto_register = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error("unsupported attribute, expected `auto_register`"))
                }
            })?;
        }

        Ok(this)
    }
}
