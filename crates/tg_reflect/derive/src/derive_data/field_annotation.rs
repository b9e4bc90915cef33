use syn::ext::IdentExt;
use syn::{Attribute, LitStr, Token};

use crate::TAG_ATTRIBUTE_NAME;

/// The `#[tag(...)]` entries of one field, in declaration order.
#[derive(Default, Debug)]
pub(crate) struct FieldAnnotation {
    pub entries: Vec<(String, String)>,
}

impl FieldAnnotation {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(TAG_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                let Some(ident) = meta.path.get_ident() else {
                    return Err(meta.error("expected a tag name"));
                };
                let name = ident.unraw().to_string();

                let text = if meta.input.peek(Token![=]) {
                    meta.value()?.parse::<LitStr>()?.value()
                } else {
                    String::new()
                };

                if this.entries.iter().any(|(key, _)| *key == name) {
                    return Err(meta.error(format!("duplicate tag `{name}`")));
                }
                this.entries.push((name, text));
                Ok(())
            })?;
        }

        Ok(this)
    }

    /// Renders the entries in struct-tag syntax: `name:"text" name2:"text2"`.
    pub fn render(&self) -> String {
        let mut raw = String::new();
        for (name, text) in &self.entries {
            if !raw.is_empty() {
                raw.push(' ');
            }
            raw.push_str(name);
            raw.push(':');
            raw.push_str(&format!("{text:?}"));
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::FieldAnnotation;

    fn parse(field: syn::Field) -> syn::Result<FieldAnnotation> {
        FieldAnnotation::parse_attrs(&field.attrs)
    }

    #[test]
    fn entries_and_rendering() {
        let field: syn::Field = syn::parse_quote! {
            #[tag(my_json = "email", r#type = "a \"b\"")]
            #[tag(marker)]
            email: String
        };
        let annotation = parse(field).unwrap();
        assert_eq!(annotation.entries.len(), 3);
        assert_eq!(annotation.entries[1].0, "type");
        assert_eq!(annotation.render(), r#"my_json:"email" type:"a \"b\"" marker:"""#);
    }

    #[test]
    fn duplicate_name() {
        let field: syn::Field = syn::parse_quote! {
            #[tag(my_json = "a", my_json = "b")]
            email: String
        };
        assert!(parse(field).is_err());
    }

    #[test]
    fn unannotated() {
        let field: syn::Field = syn::parse_quote! {
            #[doc = "no tag"]
            id: u64
        };
        let annotation = parse(field).unwrap();
        assert!(annotation.entries.is_empty());
        assert_eq!(annotation.render(), "");
    }
}
