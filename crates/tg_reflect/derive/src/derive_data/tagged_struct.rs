use syn::{Data, DeriveInput, Fields, Ident, Type};

use crate::derive_data::{FieldAnnotation, TypeAttributes};

/// One named field of a tagged structure.
pub(crate) struct TaggedField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub index: usize,
    pub annotation: FieldAnnotation,
}

/// The parsed derive input.
pub(crate) struct TaggedStruct<'a> {
    pub ident: &'a Ident,
    pub attrs: TypeAttributes,
    pub fields: Vec<TaggedField<'a>>,
    pub tg_reflect_path: syn::Path,
}

impl<'a> TaggedStruct<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() || ast.generics.where_clause.is_some() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "`Tagged` cannot be derived for generic types",
            ));
        }

        let data = match &ast.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Tagged` can only be derived for structures",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Tagged` can only be derived for structures",
                ));
            }
        };

        let fields = match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .enumerate()
                .map(|(index, field)| {
                    Ok(TaggedField {
                        // Named fields always carry an ident.
                        ident: field.ident.as_ref().ok_or_else(|| {
                            syn::Error::new_spanned(field, "expected a named field")
                        })?,
                        ty: &field.ty,
                        index,
                        annotation: FieldAnnotation::parse_attrs(&field.attrs)?,
                    })
                })
                .collect::<syn::Result<Vec<_>>>()?,
            Fields::Unit => Vec::new(),
            Fields::Unnamed(unnamed) => {
                return Err(syn::Error::new_spanned(
                    unnamed,
                    "`Tagged` cannot be derived for tuple structures",
                ));
            }
        };

        Ok(Self {
            ident: &ast.ident,
            attrs: TypeAttributes::parse_attrs(&ast.attrs)?,
            fields,
            tg_reflect_path: crate::path::tg_reflect(),
        })
    }

    /// The name used in schema paths, without the `r#` prefix.
    pub fn type_name(&self) -> String {
        syn::ext::IdentExt::unraw(self.ident).to_string()
    }
}
