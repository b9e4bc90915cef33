use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::TaggedStruct;
use crate::impls::type_path_expr;
use crate::path;

/// Generate the `Typed` implementation holding the static schema.
pub(crate) fn impl_trait_typed(tagged: &TaggedStruct) -> TokenStream {
    let tg_reflect_path = &tagged.tg_reflect_path;
    let typed_ = path::typed_(tg_reflect_path);
    let schema_ = path::schema_(tg_reflect_path);
    let field_info_ = path::field_info_(tg_reflect_path);
    let annotation_ = path::annotation_(tg_reflect_path);
    let field_value_ = path::field_value_(tg_reflect_path);

    let ident = tagged.ident;
    let type_name = tagged.type_name();
    let type_path = type_path_expr(tagged);

    let fields = tagged.fields.iter().map(|field| {
        let name = syn::ext::IdentExt::unraw(field.ident).to_string();
        let index = field.index;
        let ty = field.ty;

        let info = quote! {
            #field_info_::new(#name, #index, <#ty as #field_value_>::TYPE)
        };

        if field.annotation.entries.is_empty() {
            info
        } else {
            let raw = field.annotation.render();
            let entries = field
                .annotation
                .entries
                .iter()
                .map(|(key, text)| quote! { (#key, #text) });
            quote! {
                #info.with_annotation(#annotation_::new(#raw, &[#(#entries),*]))
            }
        }
    });

    quote! {
        impl #typed_ for #ident {
            fn schema() -> &'static #schema_ {
                static SCHEMA: #schema_ = #schema_::new(
                    #type_path,
                    #type_name,
                    &[#(#fields),*],
                );
                &SCHEMA
            }
        }
    }
}
