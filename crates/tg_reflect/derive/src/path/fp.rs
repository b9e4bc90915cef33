//! Fully qualified paths of prelude items, so generated code does not
//! depend on what the caller has in scope.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! fully_qualified {
    ($($name:ident => $path:path;)*) => {$(
        pub(crate) struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                quote!($path).to_tokens(tokens);
            }
        }
    )*};
}

fully_qualified! {
    AnyFP => ::core::any::Any;
    CloneFP => ::core::clone::Clone;
    OptionFP => ::core::option::Option;
    ResultFP => ::core::result::Result;
}
