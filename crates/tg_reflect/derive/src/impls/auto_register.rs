use crate::derive_data::TaggedStruct;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(tagged: &TaggedStruct) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    if let Some(span) = tagged.attrs.auto_register {
        let auto_register_ = crate::path::auto_register_(&tagged.tg_reflect_path);
        let typed_ = crate::path::typed_(&tagged.tg_reflect_path);
        let ident = tagged.ident;

        quote_spanned! { span =>
            #auto_register_::inventory::submit!{
                #auto_register_::__AutoRegistration(
                    <#ident as #typed_>::schema
                )
            }
        }
    } else {
        crate::utils::empty()
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &TaggedStruct) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
