//! Transparent trait impls.
//!
//! Every impl forwards to `T` and places no bound on `L` beyond `Label`, so
//! labels never need to implement anything themselves. `derive` is not used
//! because it would add `L: Trait` bounds.
//!
//! Deliberately absent: `From<T>`, `Default` and `DerefMut`. Each would let a
//! plain `T` become (or overwrite) a branded value without a named conversion.

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

use super::Brand;
use crate::label::Label;

impl<T: ?Sized, L: Label> Deref for Brand<T, L> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        self.as_inner()
    }
}

impl<T: ?Sized, L: Label> AsRef<T> for Brand<T, L> {
    #[inline(always)]
    fn as_ref(&self) -> &T {
        self.as_inner()
    }
}

impl<T: ?Sized, L: Label> Borrow<T> for Brand<T, L> {
    #[inline(always)]
    fn borrow(&self) -> &T {
        self.as_inner()
    }
}

impl<T: Clone, L: Label> Clone for Brand<T, L> {
    #[inline]
    fn clone(&self) -> Self {
        Self::assume(self.as_inner().clone())
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.value.clone_from(&source.value);
    }
}

impl<T: Copy, L: Label> Copy for Brand<T, L> {}

impl<T: ?Sized + PartialEq, L: Label> PartialEq for Brand<T, L> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_inner() == other.as_inner()
    }
}

impl<T: ?Sized + Eq, L: Label> Eq for Brand<T, L> {}

impl<T: ?Sized + PartialOrd, L: Label> PartialOrd for Brand<T, L> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_inner().partial_cmp(other.as_inner())
    }
}

impl<T: ?Sized + Ord, L: Label> Ord for Brand<T, L> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_inner().cmp(other.as_inner())
    }
}

impl<T: ?Sized + Hash, L: Label> Hash for Brand<T, L> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_inner().hash(state);
    }
}

impl<T: ?Sized + fmt::Debug, L: Label> fmt::Debug for Brand<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_inner(), f)
    }
}

impl<T: ?Sized + fmt::Display, L: Label> fmt::Display for Brand<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_inner(), f)
    }
}
