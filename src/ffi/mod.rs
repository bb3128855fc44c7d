//! C-compatible boundary.
//!
//! Every exported function returns one of four flat `#[repr(C)]` result
//! shapes ([`ByteArray`], [`RsaKeyPair`], [`StringResult`], [`BoolResult`]).
//! Success and failure are encoded positionally: on failure the data fields
//! are null/zero and `error` points to a NUL-terminated message of the form
//! `"<CODE>: <detail>"`; on success `error` is null.
//!
//! ## Ownership
//!
//! Every returned result owns all heap data inside it, and that ownership
//! passes to the caller. The caller hands each result back exactly once to
//! the matching `Free*_C` function and must not touch its pointers
//! afterwards. Releasing an error-only or empty result is a no-op. Releasing
//! the same result twice, or releasing memory that did not come from this
//! library, is undefined behavior.
//!
//! ## Safety
//!
//! All `extern "C"` functions taking pointers are unsafe. The caller must
//! ensure that:
//! * every `(ptr, len)` pair describes `len` readable bytes (a null `ptr`
//!   is accepted for payloads only when `len == 0`),
//! * every `char*` argument is NUL-terminated (string payloads are taken as
//!   raw bytes, base64 and key text must be UTF-8),
//! * input buffers stay valid and unmodified for the duration of the call.
//!
//! Panics are caught at the boundary and reported as `INTERNAL` errors.

mod exports;
#[cfg(feature = "legacy-api")]
mod legacy;
mod types;

use std::ffi::{c_char, c_int, CStr};
use std::panic::{catch_unwind, UnwindSafe};
use std::sync::atomic::{compiler_fence, Ordering};

use log::debug;

use crate::error::Error;

pub use exports::*;
#[cfg(feature = "legacy-api")]
pub use legacy::*;
pub use types::{BoolResult, ByteArray, CText, RsaKeyPair, StringResult};

/// Executes a boundary call with panic catching, then flattens the outcome
/// into the caller-facing result shape `R`.
///
/// Unwinding across an `extern "C"` frame is undefined behavior, so a panic
/// becomes an `INTERNAL` error result.
pub(crate) fn abi_boundary<T, R, F>(f: F) -> R
where
    F: FnOnce() -> Result<T, Error> + UnwindSafe,
    R: From<Result<T, Error>>,
{
    let result = match catch_unwind(f) {
        Ok(result) => result,
        Err(_) => Err(Error::Internal("panic caught at the ABI boundary".to_string())),
    };

    if let Err(err) = &result {
        debug!("boundary call failed: {}", err);
    }

    R::from(result)
}

/// Borrow a payload buffer. A null pointer is only accepted as an empty
/// payload.
///
/// # Safety
/// If `ptr` is non-null it must point to `len` readable bytes that outlive
/// `'a`.
pub(crate) unsafe fn data_arg<'a>(ptr: *const u8, len: c_int) -> Result<&'a [u8], Error> {
    let len = usize::try_from(len)
        .map_err(|_| Error::InvalidArgument(format!("negative buffer length {}", len)))?;

    if ptr.is_null() {
        if len == 0 {
            return Ok(&[]);
        }
        return Err(Error::InvalidArgument(
            "null buffer with non-zero length".to_string(),
        ));
    }

    // SAFETY: non-null, caller guarantees `len` readable bytes
    Ok(unsafe { std::slice::from_raw_parts(ptr, len) })
}

/// Borrow key material. Unlike payloads, a null key is always an error.
///
/// # Safety
/// Same contract as [`data_arg`].
pub(crate) unsafe fn key_arg<'a>(ptr: *const u8, len: c_int) -> Result<&'a [u8], Error> {
    if ptr.is_null() {
        return Err(Error::InvalidArgument("null key".to_string()));
    }
    // SAFETY: forwarded caller contract
    unsafe { data_arg(ptr, len) }
}

/// Borrow a NUL-terminated UTF-8 string.
///
/// # Safety
/// If `ptr` is non-null it must point to a NUL-terminated string that
/// outlives `'a`.
pub(crate) unsafe fn str_arg<'a>(ptr: *const c_char) -> Result<&'a str, Error> {
    if ptr.is_null() {
        return Err(Error::InvalidArgument("null string".to_string()));
    }

    // SAFETY: non-null, caller guarantees NUL termination
    let s = unsafe { CStr::from_ptr(ptr) };
    s.to_str()
        .map_err(|_| Error::InvalidEncoding("string is not valid UTF-8".to_string()))
}

/// Borrow the bytes of a NUL-terminated string used as a payload. Unlike
/// [`str_arg`], any byte sequence is accepted.
///
/// # Safety
/// Same contract as [`str_arg`].
pub(crate) unsafe fn text_arg<'a>(ptr: *const c_char) -> Result<&'a [u8], Error> {
    if ptr.is_null() {
        return Err(Error::InvalidArgument("null string".to_string()));
    }

    // SAFETY: non-null, caller guarantees NUL termination
    Ok(unsafe { CStr::from_ptr(ptr) }.to_bytes())
}

/// Convert a boundary key size. Negative sizes are an `InvalidParameter`,
/// like any other unusable size.
pub(crate) fn bits_arg(bits: c_int) -> Result<usize, Error> {
    usize::try_from(bits)
        .map_err(|_| Error::InvalidParameter(format!("key size {} is negative", bits)))
}

/// Liveness pin for hosts that pair this library with a tracing collector.
///
/// Results are leaked into raw pointers when they cross the boundary and
/// stay allocated until released, so nothing here can be collected early.
/// The fence keeps the call from being optimized into nothing.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn KeepAlive() {
    compiler_fence(Ordering::SeqCst);
}
