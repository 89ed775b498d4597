//! Scoped ownership for foreign clipboard allocations.
//!
//! The native service hands out buffers the receiver must free.
//! [`NativeBuf`] pairs each allocation with its deallocator so release
//! happens exactly once, when the wrapper drops. Isolates the crate's
//! raw-pointer code.

use std::fmt;
use std::ptr::NonNull;
use std::slice;

/// Deallocator invoked with the buffer's pointer and length.
pub type FreeFn = unsafe fn(ptr: *mut u8, len: usize);

/// An owned buffer received from the native clipboard service.
///
/// Holds the allocation until dropped, then releases it through the
/// deallocator it was created with. Deliberately neither `Send` nor
/// `Sync`: release happens on the thread that made the native call.
pub struct NativeBuf {
    ptr: NonNull<u8>,
    len: usize,
    free: FreeFn,
}

/// Deallocator for buffers created by [`NativeBuf::from_vec`].
unsafe fn free_boxed(ptr: *mut u8, len: usize) {
    drop(unsafe { Box::from_raw(std::ptr::slice_from_raw_parts_mut(ptr, len)) });
}

impl NativeBuf {
    /// Wrap an in-process allocation. Used by services that are
    /// themselves written in Rust.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        let boxed = bytes.into_boxed_slice();
        let len = boxed.len();
        let ptr = Box::into_raw(boxed).cast::<u8>();
        // Box::into_raw never returns null.
        let ptr = unsafe { NonNull::new_unchecked(ptr) };
        Self {
            ptr,
            len,
            free: free_boxed,
        }
    }

    /// Wrap a foreign allocation of `len` bytes at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must point to `len` initialized, readable bytes that stay
    /// valid until `free` runs, and `free(ptr, len)` must be the
    /// allocation's sole and correct release. Nothing else may free or
    /// mutate the buffer after this call.
    pub unsafe fn from_raw(ptr: NonNull<u8>, len: usize, free: FreeFn) -> Self {
        Self { ptr, len, free }
    }

    /// The transferred bytes. Length is authoritative; the slice may
    /// contain NUL bytes.
    pub fn as_bytes(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Drop for NativeBuf {
    fn drop(&mut self) {
        unsafe { (self.free)(self.ptr.as_ptr(), self.len) }
    }
}

impl fmt::Debug for NativeBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeBuf").field("len", &self.len).finish()
    }
}
