//! Items referenced by code generated with `#[derive(Tagged)]`.

pub use alloc::boxed::Box;

#[cfg(feature = "auto_register")]
pub mod auto_register {
    use crate::info::Schema;

    pub use inventory;

    /// One schema submitted by `#[tagged(auto_register)]`.
    pub struct __AutoRegistration(pub fn() -> &'static Schema);

    inventory::collect!(__AutoRegistration);

    pub(crate) fn __schemas() -> impl Iterator<Item = &'static Schema> {
        inventory::iter::<__AutoRegistration>
            .into_iter()
            .map(|registration| (registration.0)())
    }
}
