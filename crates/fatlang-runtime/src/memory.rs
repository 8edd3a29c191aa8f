//! Raw heap memory and address reinterpretation.
//!
//! Allocation goes straight to the C allocator so buffers can be released by
//! either side of the boundary. There is no bookkeeping: double frees and
//! foreign pointers are undefined behaviour, exactly as for `free(3)`.

use core::ffi::c_void;

use crate::exports::export_symbols;

unsafe extern "C" {
    fn malloc(size: usize) -> *mut c_void;
    fn free(ptr: *mut c_void);
}

/// Allocates `s` bytes. Returns null on failure.
#[unsafe(no_mangle)]
pub extern "C" fn __ext_malloc(s: usize) -> *mut c_void {
    // SAFETY: `malloc` accepts any size and reports failure as null.
    let ptr = unsafe { malloc(s) };
    if ptr.is_null() {
        tracing::debug!(size = s, "allocation failed");
    }
    #[cfg(feature = "debug_runtime")]
    tracing::trace!(size = s, ?ptr, "malloc");
    ptr
}

/// Releases a buffer obtained from [`__ext_malloc`] or `__ext_input_string`.
/// A null address is ignored.
///
/// # Safety
/// `ptr` must be null or a live allocation from the C allocator, and must
/// not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn __ext_free(ptr: *mut c_void) {
    #[cfg(feature = "debug_runtime")]
    tracing::trace!(?ptr, "free");
    // SAFETY: upheld by the caller.
    unsafe { free(ptr) }
}

#[unsafe(no_mangle)]
pub extern "C" fn __ext_cast_voidptr_usize(p: *mut c_void) -> usize {
    p.expose_provenance()
}

#[unsafe(no_mangle)]
pub extern "C" fn __ext_cast_usize_voidptr(addr: usize) -> *mut c_void {
    core::ptr::with_exposed_provenance_mut(addr)
}

pub(crate) fn register_memory(table: &mut Vec<crate::Export>) {
    export_symbols!(table;
        __ext_malloc,
        __ext_free,
        __ext_cast_voidptr_usize,
        __ext_cast_usize_voidptr,
    );
}
