//! This independent module is used to provide the required path.
//! So as to minimize changes when the `tg_reflect` structure is modified.
//!
//! The only special feature is the path of tg_reflect itself,
//! See [`tg_reflect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `tg_reflect` crate.
///
/// 1. For crates that depend on `tg_reflect`, `::tg_reflect` is returned here.
/// 2. For crates that depend on `tagger`, `::tagger::reflect` is returned here.
/// 3. For other situations, `::tg_reflect` is returned here, but this may be incorrect.
///
/// This reads the caller's manifest, so the path is obtained once per
/// derive and passed around.
pub(crate) fn tg_reflect() -> syn::Path {
    tg_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("tg_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

#[inline(always)]
pub(crate) fn macro_exports_(tg_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tg_reflect_path::__macro_exports
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(tg_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tg_reflect_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn tagged_(tg_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tg_reflect_path::Tagged
    }
}

#[inline(always)]
pub(crate) fn typed_(tg_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tg_reflect_path::Typed
    }
}

#[inline(always)]
pub(crate) fn field_value_(tg_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tg_reflect_path::FieldValue
    }
}

#[inline(always)]
pub(crate) fn value_(tg_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tg_reflect_path::Value
    }
}

#[inline(always)]
pub(crate) fn type_(tg_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tg_reflect_path::info::Type
    }
}

#[inline(always)]
pub(crate) fn schema_(tg_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tg_reflect_path::info::Schema
    }
}

#[inline(always)]
pub(crate) fn field_info_(tg_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tg_reflect_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn annotation_(tg_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #tg_reflect_path::info::Annotation
    }
}
