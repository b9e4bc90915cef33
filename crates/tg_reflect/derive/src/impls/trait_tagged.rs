use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use crate::derive_data::TaggedStruct;
use crate::path::{self, fp};

/// Generate the `Tagged` implementation, fields are matched by index.
pub(crate) fn impl_trait_tagged(tagged: &TaggedStruct) -> TokenStream {
    use fp::{AnyFP, CloneFP, OptionFP, ResultFP};

    let tg_reflect_path = &tagged.tg_reflect_path;
    let tagged_ = path::tagged_(tg_reflect_path);
    let typed_ = path::typed_(tg_reflect_path);
    let field_value_ = path::field_value_(tg_reflect_path);
    let value_ = path::value_(tg_reflect_path);
    let schema_ = path::schema_(tg_reflect_path);
    let macro_exports_ = path::macro_exports_(tg_reflect_path);

    // Unit structs cannot be interpolated inside repetitions.
    let option_ = OptionFP.to_token_stream();
    let result_ = ResultFP.to_token_stream();

    let ident = tagged.ident;

    let indices: Vec<_> = tagged.fields.iter().map(|field| field.index).collect();
    let members: Vec<_> = tagged.fields.iter().map(|field| field.ident).collect();
    let types: Vec<_> = tagged.fields.iter().map(|field| field.ty).collect();

    quote! {
        impl #tagged_ for #ident {
            #[inline]
            fn reflect_schema(&self) -> &'static #schema_ {
                <Self as #typed_>::schema()
            }

            fn reflect_get(&self, index: usize) -> #option_<#value_> {
                match index {
                    #(#indices => #option_::Some(
                        <#types as #field_value_>::to_value(&self.#members)
                    ),)*
                    _ => #option_::None,
                }
            }

            fn reflect_set(&mut self, index: usize, value: #value_) -> #result_<(), #value_> {
                match index {
                    #(#indices => {
                        self.#members = <#types as #field_value_>::from_value(value)?;
                        #result_::Ok(())
                    })*
                    _ => #result_::Err(value),
                }
            }

            fn reflect_nested(&self, index: usize) -> #option_<&dyn #tagged_> {
                match index {
                    #(#indices => <#types as #field_value_>::as_tagged(&self.#members),)*
                    _ => #option_::None,
                }
            }

            fn reflect_nested_mut(&mut self, index: usize) -> #option_<&mut dyn #tagged_> {
                match index {
                    #(#indices => <#types as #field_value_>::as_tagged_mut(&mut self.#members),)*
                    _ => #option_::None,
                }
            }

            fn reflect_materialize(&mut self, index: usize) -> bool {
                match index {
                    #(#indices => <#types as #field_value_>::materialize(&mut self.#members),)*
                    _ => false,
                }
            }

            #[inline]
            fn reflect_clone(&self) -> #macro_exports_::Box<dyn #tagged_> {
                #macro_exports_::Box::new(<Self as #CloneFP>::clone(self))
            }

            #[inline]
            fn as_any(&self) -> &dyn #AnyFP {
                self
            }

            #[inline]
            fn as_any_mut(&mut self) -> &mut dyn #AnyFP {
                self
            }

            #[inline]
            fn into_any(self: #macro_exports_::Box<Self>) -> #macro_exports_::Box<dyn #AnyFP> {
                self
            }
        }
    }
}
