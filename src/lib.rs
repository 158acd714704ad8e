//! probe-hashmap: A single-threaded open-addressing hash map with
//! linear probing, pluggable hashing/equality, tombstone deletion and
//! automatic capacity doubling.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: build OpenHashMap in small, verifiable layers so the probe
//!   loops and the growth policy can be reasoned about independently.
//! - Layers:
//!   - RawTable<K, V, P>: fixed-capacity slot array with the probing
//!     engine. Lookup probes skip tombstones; insertion probes reuse
//!     them. Never grows itself.
//!   - OpenHashMap<K, V, P>: public API owning exactly one RawTable;
//!     doubles capacity (rebuilding the table and dropping tombstones)
//!     once lifetime inserts reach half the capacity; includes a
//!     debug-only busy flag to catch reentrant plug-in calls.
//!   - HashEq<K>: the injected hash/equality policy, with provided
//!     implementations for `Hash`/`Eq` types, plain function pairs and
//!     the djb2 string hash.
//!
//! Constraints
//! - Single-threaded: `!Send`/`!Sync` by design (no atomics, no locks).
//! - Capacity is caller-chosen at construction (>= 1) and only ever
//!   doubles; there is no shrinking and no incremental tombstone
//!   compaction. Tombstones are reclaimed solely by the growth rebuild.
//! - The growth trigger counts lifetime inserts, replacements included,
//!   and never goes down on removal. `len` tracks live occupancy
//!   separately and accurately.
//! - Probe-loop termination relies on at least one never-used slot
//!   existing, which the growth policy maintains.
//!
//! Plug-in contract
//! - `HashEq::hash` must be deterministic and agree with `HashEq::eq`
//!   (equal keys hash equal); `eq` must be an equivalence relation.
//!   Violations are not detected and make entries silently
//!   unreachable.
//! - Policies run during probing and during the growth rebuild. They
//!   must not call back into the map they serve; debug builds panic on
//!   such reentrancy.
//!
//! Observability
//! - Growth is reported per map through an injected observer
//!   (`observe_growth`); `logged_growth()` adapts the observer to the
//!   `log` facade. There is no process-wide logging switch.
//!
//! Notes and non-goals
//! - No iteration-order guarantees; order changes across growth.
//! - No entry API, no shrink-on-delete, no alternative probing
//!   strategies (quadratic, chaining).
//! - Public API surface is `OpenHashMap` plus the policy types;
//!   `raw_table` is structural and exposed mainly for benchmarks.

mod debug_guard;
pub mod hash_eq;
pub mod open_hash_map;
mod open_hash_map_proptest;
pub mod raw_table;

// Public surface
pub use hash_eq::{Djb2, FnHashEq, HashEq, StdHashEq};
pub use open_hash_map::{logged_growth, Growth, InsertError, OpenHashMap, RemoveResult};
pub use raw_table::{Iter, IterMut};
