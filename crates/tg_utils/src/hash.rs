//! Provide hash containers with a fixed hash state.
//!
//! `FixedHashState` is based on `foldhash` with a fixed seed, so lookups
//! and iteration do not depend on a per-process random state.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

/// A fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x5A17_C0DE_9E37_79B9);

/// A hasher whose results only depend on the input.
///
/// A type alias for [`foldhash::fast::FoldHasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Fixed hash state based upon a random but fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use tg_utils::hash::FixedHashState;
///
/// let mut a = FixedHashState.build_hasher();
/// let mut b = FixedHashState.build_hasher();
/// "my_json".hash(&mut a);
/// "my_json".hash(&mut b);
///
/// assert_eq!(a.finish(), b.finish());
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// Containers

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;

#[cfg(test)]
mod tests {
    use super::{FixedHashState, HashMap, HashSet};

    #[test]
    fn map_with_fixed_state() {
        let mut map: HashMap<&str, usize> = HashMap::with_hasher(FixedHashState);
        map.insert("json", 0);
        map.insert("logger", 1);
        assert_eq!(map.get("json"), Some(&0));
        assert_eq!(map.insert("json", 2), Some(0));
        assert_eq!(map.len(), 2);

        let mut set: HashSet<&str> = HashSet::with_hasher(FixedHashState);
        assert!(set.insert("a"));
        assert!(!set.insert("a"));
    }
}
