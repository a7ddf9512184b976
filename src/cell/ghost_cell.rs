//! `GhostCell` - safe interior mutability via branded tokens.

use core::cell::UnsafeCell;
use core::fmt;

use crate::token::InvariantLifetime;
use crate::GhostToken;

/// A branded cell that can only be accessed using a token of the same brand.
#[repr(transparent)]
pub struct GhostCell<'brand, T: ?Sized> {
    _brand: InvariantLifetime<'brand>,
    value: UnsafeCell<T>,
}

impl<'brand, T> GhostCell<'brand, T> {
    /// Creates a new `GhostCell`.
    pub const fn new(value: T) -> Self {
        Self {
            _brand: InvariantLifetime::new(),
            value: UnsafeCell::new(value),
        }
    }
}

impl<'brand, T: ?Sized> GhostCell<'brand, T> {
    /// Borrows the cell immutably.
    #[inline(always)]
    pub fn borrow<'a>(&'a self, _token: &'a GhostToken<'brand>) -> &'a T {
        // SAFETY: a shared token borrow excludes any `&mut GhostToken<'brand>`,
        // which is the only way to obtain `&mut T` from this cell.
        unsafe { &*self.value.get() }
    }

    /// Borrows the cell mutably.
    #[inline(always)]
    pub fn borrow_mut<'a>(&'a self, _token: &'a mut GhostToken<'brand>) -> &'a mut T {
        // SAFETY: the token is linear; holding `&mut` to it for `'a` rules out
        // every other borrow of any cell of this brand for `'a`.
        unsafe { &mut *self.value.get() }
    }
}

impl<'brand, T: Copy> GhostCell<'brand, T> {
    /// Returns a copy of the contained value.
    #[inline(always)]
    pub fn get(&self, token: &GhostToken<'brand>) -> T {
        *self.borrow(token)
    }

    /// Overwrites the contained value.
    #[inline(always)]
    pub fn set(&self, token: &mut GhostToken<'brand>, value: T) {
        *self.borrow_mut(token) = value;
    }
}

impl<'brand, T: ?Sized> fmt::Debug for GhostCell<'brand, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Contents are token-gated; never peek without one.
        f.write_str("GhostCell { .. }")
    }
}

// SAFETY: safe access is token-gated. Sending the cell moves `T`; sharing it
// lets threads read `&T` only while they share `&GhostToken<'brand>`.
unsafe impl<'brand, T: ?Sized + Send> Send for GhostCell<'brand, T> {}
unsafe impl<'brand, T: ?Sized + Send + Sync> Sync for GhostCell<'brand, T> {}
