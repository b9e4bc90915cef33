use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::TaggedStruct;
use crate::impls::type_path_expr;
use crate::path::{self, fp};

/// Generate the `FieldValue` implementation, so the structure can be
/// nested in another tagged structure.
pub(crate) fn impl_trait_field_value(tagged: &TaggedStruct) -> TokenStream {
    use fp::{CloneFP, OptionFP, ResultFP};

    let tg_reflect_path = &tagged.tg_reflect_path;
    let tagged_ = path::tagged_(tg_reflect_path);
    let field_value_ = path::field_value_(tg_reflect_path);
    let value_ = path::value_(tg_reflect_path);
    let type_ = path::type_(tg_reflect_path);
    let macro_exports_ = path::macro_exports_(tg_reflect_path);

    let ident = tagged.ident;
    let type_path = type_path_expr(tagged);

    quote! {
        impl #field_value_ for #ident {
            const TYPE: #type_ = #type_::Struct(#type_path);

            #[inline]
            fn to_value(&self) -> #value_ {
                #value_::Struct(#macro_exports_::Box::new(<Self as #CloneFP>::clone(self)))
            }

            #[inline]
            fn into_value(self) -> #value_ {
                #value_::Struct(#macro_exports_::Box::new(self))
            }

            fn from_value(value: #value_) -> #ResultFP<Self, #value_> {
                match value {
                    #value_::Struct(inner) => match <dyn #tagged_>::downcast::<Self>(inner) {
                        #ResultFP::Ok(this) => #ResultFP::Ok(*this),
                        #ResultFP::Err(inner) => #ResultFP::Err(#value_::Struct(inner)),
                    },
                    other => #ResultFP::Err(other),
                }
            }

            #[inline]
            fn as_tagged(&self) -> #OptionFP<&dyn #tagged_> {
                #OptionFP::Some(self)
            }

            #[inline]
            fn as_tagged_mut(&mut self) -> #OptionFP<&mut dyn #tagged_> {
                #OptionFP::Some(self)
            }
        }
    }
}
