//! Debug-only busy flag catching reentrant plug-in calls.
//!
//! Probing runs user code (the hash/equality policy) and a growth
//! rebuild runs it while the map is mid-swap. A policy that re-enters
//! the same map through a smuggled pointer would observe a half-built
//! table. In debug builds the flag panics on such nested entry; release
//! builds compile it down to the `!Send`/`!Sync` marker alone.

use core::cell::Cell;
use core::marker::PhantomData;

pub(crate) struct BusyFlag {
    #[cfg(debug_assertions)]
    busy: Cell<bool>,
    // Keeps the owning map !Send + !Sync in every build profile, so auto
    // traits do not depend on debug_assertions.
    _nosend: PhantomData<*mut ()>,
}

impl BusyFlag {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            busy: Cell::new(false),
            _nosend: PhantomData,
        }
    }

    /// Mark the map busy for the duration of the returned token's life.
    /// Panics in debug builds if the map is already busy.
    #[inline]
    pub(crate) fn set(&self) -> BusyToken<'_> {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.busy.replace(true),
                "map re-entered from its hash/equality policy"
            );
            return BusyToken { flag: self };
        }

        #[cfg(not(debug_assertions))]
        {
            return BusyToken { _lt: PhantomData };
        }
    }
}

pub(crate) struct BusyToken<'a> {
    #[cfg(debug_assertions)]
    flag: &'a BusyFlag,
    #[cfg(not(debug_assertions))]
    _lt: PhantomData<&'a ()>,
}

impl Drop for BusyToken<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.flag.busy.set(false);
    }
}
