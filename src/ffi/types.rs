use std::ffi::{c_char, c_int, CStr, CString};
use std::ptr;

use crate::core::KeyPair;
use crate::error::Error;

/// Owned, NUL-terminated C string, or null when absent.
///
/// Freed on drop. Its layout is a single `char*`.
#[repr(transparent)]
#[derive(Debug)]
pub struct CText(*mut c_char);

impl CText {
    pub fn null() -> Self {
        CText(ptr::null_mut())
    }

    /// Copy `s` into a fresh C allocation. Interior NULs cannot be
    /// represented and are stripped.
    pub(crate) fn new(s: &str) -> Self {
        let c = CString::new(s).unwrap_or_else(|_| {
            CString::new(s.replace('\0', "")).unwrap_or_default()
        });
        CText(c.into_raw())
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn as_ptr(&self) -> *const c_char {
        self.0
    }

    /// Borrow the text, if present and valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        if self.0.is_null() {
            return None;
        }
        // SAFETY: non-null pointers only ever come from `CString::into_raw`
        let s = unsafe { CStr::from_ptr(self.0) };
        s.to_str().ok()
    }
}

impl Default for CText {
    fn default() -> Self {
        CText::null()
    }
}

impl Drop for CText {
    fn drop(&mut self) {
        if !self.0.is_null() {
            // SAFETY: `self.0` came from `CString::into_raw` and is reclaimed once
            drop(unsafe { CString::from_raw(self.0) });
            self.0 = ptr::null_mut();
        }
    }
}

/// Byte buffer result.
///
/// On success `data` is non-null (a zero-length payload still gets a
/// non-null, non-dereferenceable pointer) and `error` is null. On failure
/// `data` is null, `length` is 0 and `error` is set.
#[repr(C)]
#[derive(Debug)]
pub struct ByteArray {
    pub data: *mut u8,
    pub length: c_int,
    pub error: CText,
}

impl ByteArray {
    pub(crate) fn from_error(err: &Error) -> Self {
        ByteArray {
            data: ptr::null_mut(),
            length: 0,
            error: CText::new(&err.to_string()),
        }
    }

    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        let Ok(length) = c_int::try_from(bytes.len()) else {
            return Self::from_error(&Error::Internal(format!(
                "result of {} bytes does not fit the boundary length type",
                bytes.len()
            )));
        };

        let data = Box::into_raw(bytes.into_boxed_slice()) as *mut u8;
        ByteArray {
            data,
            length,
            error: CText::null(),
        }
    }

    /// Borrow the payload, if this is a success result.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        if self.data.is_null() {
            return None;
        }
        // SAFETY: `data` came from a boxed slice of exactly `length` bytes
        let bytes = unsafe { std::slice::from_raw_parts(self.data, self.length as usize) };
        Some(bytes)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_str()
    }
}

impl Default for ByteArray {
    fn default() -> Self {
        ByteArray {
            data: ptr::null_mut(),
            length: 0,
            error: CText::null(),
        }
    }
}

impl Drop for ByteArray {
    fn drop(&mut self) {
        if !self.data.is_null() {
            let len = self.length.max(0) as usize;
            // SAFETY: `data` came from `Box::<[u8]>::into_raw` with this length
            drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(self.data, len)) });
            self.data = ptr::null_mut();
            self.length = 0;
        }
    }
}

impl From<Result<Vec<u8>, Error>> for ByteArray {
    fn from(result: Result<Vec<u8>, Error>) -> Self {
        match result {
            Ok(bytes) => ByteArray::from_vec(bytes),
            Err(err) => ByteArray::from_error(&err),
        }
    }
}

/// Key pair result. On failure both nested buffers are empty and only the
/// top-level `error` is set.
#[repr(C)]
#[derive(Debug, Default)]
pub struct RsaKeyPair {
    pub public_key: ByteArray,
    pub private_key: ByteArray,
    pub error: CText,
}

impl RsaKeyPair {
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_str()
    }
}

impl From<Result<KeyPair, Error>> for RsaKeyPair {
    fn from(result: Result<KeyPair, Error>) -> Self {
        let kp = match result {
            Ok(kp) => kp,
            Err(err) => {
                return RsaKeyPair {
                    error: CText::new(&err.to_string()),
                    ..Default::default()
                }
            }
        };

        let public_key = ByteArray::from_vec(kp.public_key);
        let private_key = ByteArray::from_vec(kp.private_key);

        // Hoist a nested failure so the pair never half-succeeds.
        if let Some(msg) = public_key
            .error_message()
            .or_else(|| private_key.error_message())
        {
            return RsaKeyPair {
                error: CText::new(msg),
                ..Default::default()
            };
        }

        RsaKeyPair {
            public_key,
            private_key,
            error: CText::null(),
        }
    }
}

/// Text result. `data` is NUL-terminated on success.
#[repr(C)]
#[derive(Debug, Default)]
pub struct StringResult {
    pub data: CText,
    pub error: CText,
}

impl StringResult {
    pub fn as_str(&self) -> Option<&str> {
        self.data.as_str()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_str()
    }
}

impl From<Result<String, Error>> for StringResult {
    fn from(result: Result<String, Error>) -> Self {
        match result {
            Ok(s) => StringResult {
                data: CText::new(&s),
                error: CText::null(),
            },
            Err(err) => StringResult {
                data: CText::null(),
                error: CText::new(&err.to_string()),
            },
        }
    }
}

/// Boolean result. `success` is 1 or 0. A set `error` always comes with
/// `success == 0`, but `success == 0` alone is a legitimate negative answer.
#[repr(C)]
#[derive(Debug, Default)]
pub struct BoolResult {
    pub success: c_int,
    pub error: CText,
}

impl BoolResult {
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_str()
    }
}

impl From<Result<bool, Error>> for BoolResult {
    fn from(result: Result<bool, Error>) -> Self {
        match result {
            Ok(success) => BoolResult {
                success: c_int::from(success),
                error: CText::null(),
            },
            Err(err) => BoolResult {
                success: 0,
                error: CText::new(&err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_array_success() {
        let ba = ByteArray::from(Ok::<_, Error>(vec![1u8, 2, 3]));
        assert!(!ba.data.is_null());
        assert_eq!(ba.length, 3);
        assert!(ba.error.is_null());
        assert_eq!(ba.as_bytes().unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn test_byte_array_empty_success_is_not_null() {
        let ba = ByteArray::from(Ok::<_, Error>(Vec::new()));
        assert!(!ba.data.is_null());
        assert_eq!(ba.length, 0);
        assert!(ba.error.is_null());
        assert_eq!(ba.as_bytes().unwrap(), &[] as &[u8]);
    }

    #[test]
    fn test_byte_array_error() {
        let ba = ByteArray::from(Err::<Vec<u8>, _>(Error::DecryptionFailed));
        assert!(ba.data.is_null());
        assert_eq!(ba.length, 0);
        assert!(ba.as_bytes().is_none());
        assert_eq!(
            ba.error_message().unwrap(),
            "DECRYPTION_FAILED: decryption failed"
        );
    }

    #[test]
    fn test_key_pair_error_leaves_buffers_empty() {
        let kp = RsaKeyPair::from(Err::<KeyPair, _>(Error::InvalidParameter("too small".to_string())));
        assert!(kp.public_key.data.is_null());
        assert!(kp.public_key.error.is_null());
        assert!(kp.private_key.data.is_null());
        assert!(kp.private_key.error.is_null());
        assert_eq!(kp.error_message().unwrap(), "INVALID_PARAMETER: too small");
    }

    #[test]
    fn test_key_pair_success() {
        let kp = RsaKeyPair::from(Ok::<_, Error>(KeyPair {
            public_key: vec![0x30, 0x01],
            private_key: vec![0x30, 0x02, 0x03],
        }));
        assert!(kp.error.is_null());
        assert!(kp.public_key.error.is_null());
        assert!(kp.private_key.error.is_null());
        assert_eq!(kp.public_key.as_bytes().unwrap(), &[0x30, 0x01]);
        assert_eq!(kp.private_key.length, 3);
    }

    #[test]
    fn test_string_result() {
        let ok = StringResult::from(Ok::<_, Error>("aGVsbG8=".to_string()));
        assert_eq!(ok.as_str(), Some("aGVsbG8="));
        assert!(ok.error.is_null());

        let err = StringResult::from(Err::<String, _>(Error::InvalidArgument("null key".to_string())));
        assert!(err.data.is_null());
        assert_eq!(err.error_message(), Some("INVALID_ARGUMENT: null key"));
    }

    #[test]
    fn test_bool_result() {
        let yes = BoolResult::from(Ok::<_, Error>(true));
        assert_eq!(yes.success, 1);
        assert!(yes.error.is_null());

        let no = BoolResult::from(Ok::<_, Error>(false));
        assert_eq!(no.success, 0);
        assert!(no.error.is_null());

        let err = BoolResult::from(Err::<bool, _>(Error::SignatureMalformed("short".to_string())));
        assert_eq!(err.success, 0);
        assert!(err.error_message().unwrap().starts_with("SIGNATURE_MALFORMED"));
    }

    #[test]
    fn test_ctext_strips_interior_nul() {
        let t = CText::new("a\0b");
        assert_eq!(t.as_str(), Some("ab"));
    }

    #[test]
    fn test_default_results_drop_cleanly() {
        drop(ByteArray::default());
        drop(RsaKeyPair::default());
        drop(StringResult::default());
        drop(BoolResult::default());
    }
}
