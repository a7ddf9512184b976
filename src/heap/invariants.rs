//! Debug-only heap assertions.
//!
//! Release builds skip them; debug builds re-validate the whole heap after
//! every mutation, so keep debug test inputs small.

use crate::heap::GhostIndexedMinHeap;
use crate::GhostToken;

/// Debug-asserts that `heap` satisfies heap order and slot lockstep.
#[inline(always)]
pub(crate) fn heap_assert<'brand, K>(heap: &GhostIndexedMinHeap<'_, 'brand, K>, token: &GhostToken<'brand>) {
    if cfg!(debug_assertions) {
        if let Err(err) = heap.validate(token) {
            panic!("Heap invariant violated: {err}");
        }
    }
}
