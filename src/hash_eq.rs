//! Pluggable hashing and equality for map keys.

use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;

/// Hashing and equality as one injected policy, chosen at map
/// construction.
///
/// Contract: `hash` must be deterministic and return the same value for
/// any two keys `eq` considers equal; `eq` must be reflexive, symmetric
/// and transitive. A policy that violates this breaks probing silently
/// (entries become unreachable); it is not detected at runtime.
///
/// The trait is deliberately object-free: the map stores the policy by
/// value and probing calls stay monomorphized.
pub trait HashEq<K: ?Sized> {
    fn hash(&self, key: &K) -> u64;
    fn eq(&self, a: &K, b: &K) -> bool;
}

/// Policy deriving both sides from the standard `Hash`/`Eq` traits via a
/// `BuildHasher`. This is the default policy; with `RandomState` it
/// behaves like `std::collections::HashMap` hashing.
#[derive(Clone, Debug, Default)]
pub struct StdHashEq<S = RandomState> {
    hasher: S,
}

impl<S: BuildHasher> StdHashEq<S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self { hasher }
    }
}

impl<K, S> HashEq<K> for StdHashEq<S>
where
    K: ?Sized + Hash + Eq,
    S: BuildHasher,
{
    fn hash(&self, key: &K) -> u64 {
        self.hasher.hash_one(key)
    }

    fn eq(&self, a: &K, b: &K) -> bool {
        a == b
    }
}

/// Policy built from two plain functions, for callers that inject hash
/// and equality separately instead of going through `Hash`/`Eq`.
#[derive(Clone, Copy, Debug)]
pub struct FnHashEq<H, E> {
    hash: H,
    eq: E,
}

impl<H, E> FnHashEq<H, E> {
    pub fn new(hash: H, eq: E) -> Self {
        Self { hash, eq }
    }
}

impl<K, H, E> HashEq<K> for FnHashEq<H, E>
where
    K: ?Sized,
    H: Fn(&K) -> u64,
    E: Fn(&K, &K) -> bool,
{
    fn hash(&self, key: &K) -> u64 {
        (self.hash)(key)
    }

    fn eq(&self, a: &K, b: &K) -> bool {
        (self.eq)(a, b)
    }
}

/// The djb2 string hash (`hash * 33 + byte`, seed 5381) with byte-wise
/// equality, usable for any key that exposes its bytes. Provided as one
/// example plug-in policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Djb2;

impl Djb2 {
    /// Hash a byte string with djb2. Exposed so the same function can be
    /// fed to `FnHashEq` directly.
    pub fn hash_bytes(bytes: &[u8]) -> u64 {
        let mut hash: u64 = 5381;
        for &byte in bytes {
            hash = (hash << 5)
                .wrapping_add(hash)
                .wrapping_add(u64::from(byte));
        }
        hash
    }
}

impl<K> HashEq<K> for Djb2
where
    K: ?Sized + AsRef<[u8]>,
{
    fn hash(&self, key: &K) -> u64 {
        Self::hash_bytes(key.as_ref())
    }

    fn eq(&self, a: &K, b: &K) -> bool {
        a.as_ref() == b.as_ref()
    }
}
