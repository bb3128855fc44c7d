//! Exported C entry points. Every function here is a thin shim: validate
//! and borrow the raw arguments, call the safe API, flatten the outcome.

#![allow(non_snake_case)]

use std::ffi::{c_char, c_int};

use super::{abi_boundary, bits_arg, data_arg, key_arg, str_arg, text_arg};
use super::{BoolResult, ByteArray, RsaKeyPair, StringResult};
use crate::types::digest::DigestPolicy;
use crate::{encryption, keys, signature};

// ---------------------------------------------------------------------------
// Key management
// ---------------------------------------------------------------------------

/// Generate an RSA key pair of `bits` bits.
///
/// The public key is SPKI DER, the private key PKCS#1 DER. Sizes below 512
/// (including negative values) fail with `INVALID_PARAMETER`.
#[no_mangle]
pub extern "C" fn RsaGenKeyPair_C(bits: c_int) -> RsaKeyPair {
    abi_boundary(|| keys::generate_key_pair(bits_arg(bits)?))
}

/// Derive the SPKI DER public key from a private key.
///
/// # Safety
/// `private_key` must point to `private_key_len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn RsaExtractPublicKey_C(
    private_key: *const u8,
    private_key_len: c_int,
) -> ByteArray {
    abi_boundary(|| {
        // SAFETY: caller contract
        let private_key = unsafe { key_arg(private_key, private_key_len) }?;
        keys::extract_public_key(private_key)
    })
}

/// Base64 of a public key.
///
/// # Safety
/// `public_key` must point to `public_key_len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn RsaGetPublicKeyBase64_C(
    public_key: *const u8,
    public_key_len: c_int,
) -> StringResult {
    abi_boundary(|| {
        // SAFETY: caller contract
        let public_key = unsafe { key_arg(public_key, public_key_len) }?;
        Ok(keys::encode_key_base64(public_key))
    })
}

/// Base64 of a private key.
///
/// # Safety
/// `private_key` must point to `private_key_len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn RsaGetPrivateKeyBase64_C(
    private_key: *const u8,
    private_key_len: c_int,
) -> StringResult {
    abi_boundary(|| {
        // SAFETY: caller contract
        let private_key = unsafe { key_arg(private_key, private_key_len) }?;
        Ok(keys::encode_key_base64(private_key))
    })
}

/// Decode base64 key text back to key bytes.
///
/// # Safety
/// `key_base64` must be a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn RsaDecodeKeyBase64_C(key_base64: *const c_char) -> ByteArray {
    abi_boundary(|| {
        // SAFETY: caller contract
        let key_base64 = unsafe { str_arg(key_base64) }?;
        keys::decode_key_base64(key_base64)
    })
}

/// Re-encode a PKCS#8 private key as PKCS#1.
///
/// # Safety
/// `private_key` must point to `private_key_len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn RsaConvertPkcs8ToPkcs1_C(
    private_key: *const u8,
    private_key_len: c_int,
) -> ByteArray {
    abi_boundary(|| {
        // SAFETY: caller contract
        let private_key = unsafe { key_arg(private_key, private_key_len) }?;
        keys::convert_pkcs8_to_pkcs1(private_key)
    })
}

/// Re-encode a PKCS#1 private key as PKCS#8.
///
/// # Safety
/// `private_key` must point to `private_key_len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn RsaConvertPkcs1ToPkcs8_C(
    private_key: *const u8,
    private_key_len: c_int,
) -> ByteArray {
    abi_boundary(|| {
        // SAFETY: caller contract
        let private_key = unsafe { key_arg(private_key, private_key_len) }?;
        keys::convert_pkcs1_to_pkcs8(private_key)
    })
}

/// `sha256:<hex>` fingerprint of a public key.
///
/// # Safety
/// `public_key` must point to `public_key_len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn RsaKeyFingerprint_C(
    public_key: *const u8,
    public_key_len: c_int,
) -> StringResult {
    abi_boundary(|| {
        // SAFETY: caller contract
        let public_key = unsafe { key_arg(public_key, public_key_len) }?;
        keys::key_fingerprint(public_key)
    })
}

// ---------------------------------------------------------------------------
// Encryption
// ---------------------------------------------------------------------------

/// OAEP-SHA-256 encrypt `data` under `public_key`.
///
/// # Safety
/// Each `(ptr, len)` pair must describe readable memory.
#[no_mangle]
pub unsafe extern "C" fn RsaEncrypt_C(
    data: *const u8,
    data_len: c_int,
    public_key: *const u8,
    public_key_len: c_int,
) -> ByteArray {
    abi_boundary(|| {
        // SAFETY: caller contract
        let data = unsafe { data_arg(data, data_len) }?;
        let public_key = unsafe { key_arg(public_key, public_key_len) }?;
        encryption::encrypt(data, public_key)
    })
}

/// Like [`RsaEncrypt_C`], returning base64 ciphertext.
///
/// # Safety
/// Each `(ptr, len)` pair must describe readable memory.
#[no_mangle]
pub unsafe extern "C" fn RsaEncryptBase64_C(
    data: *const u8,
    data_len: c_int,
    public_key: *const u8,
    public_key_len: c_int,
) -> StringResult {
    abi_boundary(|| {
        // SAFETY: caller contract
        let data = unsafe { data_arg(data, data_len) }?;
        let public_key = unsafe { key_arg(public_key, public_key_len) }?;
        encryption::encrypt_base64(data, public_key)
    })
}

/// Decrypt an OAEP-SHA-256 ciphertext.
///
/// # Safety
/// Each `(ptr, len)` pair must describe readable memory.
#[no_mangle]
pub unsafe extern "C" fn RsaDecrypt_C(
    ciphertext: *const u8,
    ciphertext_len: c_int,
    private_key: *const u8,
    private_key_len: c_int,
) -> ByteArray {
    abi_boundary(|| {
        // SAFETY: caller contract
        let ciphertext = unsafe { data_arg(ciphertext, ciphertext_len) }?;
        let private_key = unsafe { key_arg(private_key, private_key_len) }?;
        encryption::decrypt(ciphertext, private_key)
    })
}

/// Decrypt a base64 ciphertext.
///
/// # Safety
/// `ciphertext_base64` must be NUL-terminated and `private_key` must point
/// to `private_key_len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn RsaDecryptFromBase64_C(
    ciphertext_base64: *const c_char,
    private_key: *const u8,
    private_key_len: c_int,
) -> ByteArray {
    abi_boundary(|| {
        // SAFETY: caller contract
        let ciphertext_base64 = unsafe { str_arg(ciphertext_base64) }?;
        let private_key = unsafe { key_arg(private_key, private_key_len) }?;
        encryption::decrypt_from_base64(ciphertext_base64, private_key)
    })
}

// ---------------------------------------------------------------------------
// Signatures
//
// `RsaSign_C`, `RsaSignBase64_C`, `RsaVerify_C` and `RsaVerifyFromBase64_C`
// keep their long-standing argument lists and always use SHA-256. The
// `*WithDigest_C` forms take the digest policy explicitly.
// ---------------------------------------------------------------------------

/// Sign `data` with SHA-256.
///
/// # Safety
/// Each `(ptr, len)` pair must describe readable memory.
#[no_mangle]
pub unsafe extern "C" fn RsaSign_C(
    data: *const u8,
    data_len: c_int,
    private_key: *const u8,
    private_key_len: c_int,
) -> ByteArray {
    // SAFETY: forwarded caller contract
    unsafe {
        RsaSignWithDigest_C(
            data,
            data_len,
            private_key,
            private_key_len,
            DigestPolicy::Standard.into(),
        )
    }
}

/// Sign `data`. `digest` is `0` (SHA-256) or `1` (legacy SHA-1).
///
/// # Safety
/// Each `(ptr, len)` pair must describe readable memory.
#[no_mangle]
pub unsafe extern "C" fn RsaSignWithDigest_C(
    data: *const u8,
    data_len: c_int,
    private_key: *const u8,
    private_key_len: c_int,
    digest: u32,
) -> ByteArray {
    abi_boundary(|| {
        let policy = DigestPolicy::try_from(digest)?;
        // SAFETY: caller contract
        let data = unsafe { data_arg(data, data_len) }?;
        let private_key = unsafe { key_arg(private_key, private_key_len) }?;
        signature::sign(data, private_key, policy)
    })
}

/// Sign the bytes of the NUL-terminated string `data` with SHA-256,
/// returning a base64 signature.
///
/// # Safety
/// `data` must be NUL-terminated and `private_key` must point to
/// `private_key_len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn RsaSignBase64_C(
    data: *const c_char,
    private_key: *const u8,
    private_key_len: c_int,
) -> StringResult {
    abi_boundary(|| {
        // SAFETY: caller contract
        let data = unsafe { text_arg(data) }?;
        let private_key = unsafe { key_arg(private_key, private_key_len) }?;
        signature::sign_base64(data, private_key, DigestPolicy::Standard)
    })
}

/// Like [`RsaSignWithDigest_C`], returning a base64 signature.
///
/// # Safety
/// Each `(ptr, len)` pair must describe readable memory.
#[no_mangle]
pub unsafe extern "C" fn RsaSignBase64WithDigest_C(
    data: *const u8,
    data_len: c_int,
    private_key: *const u8,
    private_key_len: c_int,
    digest: u32,
) -> StringResult {
    abi_boundary(|| {
        let policy = DigestPolicy::try_from(digest)?;
        // SAFETY: caller contract
        let data = unsafe { data_arg(data, data_len) }?;
        let private_key = unsafe { key_arg(private_key, private_key_len) }?;
        signature::sign_base64(data, private_key, policy)
    })
}

/// Sign `data` with the legacy SHA-1 digest.
///
/// # Safety
/// Each `(ptr, len)` pair must describe readable memory.
#[no_mangle]
pub unsafe extern "C" fn RsaSignSha1_C(
    data: *const u8,
    data_len: c_int,
    private_key: *const u8,
    private_key_len: c_int,
) -> ByteArray {
    // SAFETY: forwarded caller contract
    unsafe {
        RsaSignWithDigest_C(
            data,
            data_len,
            private_key,
            private_key_len,
            DigestPolicy::Legacy.into(),
        )
    }
}

/// Verify a SHA-256 `signature` over `data`.
///
/// `success == 1` means the signature matches. `success == 0` with a null
/// `error` means it does not; an `error` is only set for unusable input.
///
/// # Safety
/// Each `(ptr, len)` pair must describe readable memory.
#[no_mangle]
pub unsafe extern "C" fn RsaVerify_C(
    data: *const u8,
    data_len: c_int,
    public_key: *const u8,
    public_key_len: c_int,
    signature: *const u8,
    signature_len: c_int,
) -> BoolResult {
    // SAFETY: forwarded caller contract
    unsafe {
        RsaVerifyWithDigest_C(
            data,
            data_len,
            public_key,
            public_key_len,
            signature,
            signature_len,
            DigestPolicy::Standard.into(),
        )
    }
}

/// [`RsaVerify_C`] under an explicit digest policy.
///
/// # Safety
/// Each `(ptr, len)` pair must describe readable memory.
#[no_mangle]
pub unsafe extern "C" fn RsaVerifyWithDigest_C(
    data: *const u8,
    data_len: c_int,
    public_key: *const u8,
    public_key_len: c_int,
    signature: *const u8,
    signature_len: c_int,
    digest: u32,
) -> BoolResult {
    abi_boundary(|| {
        let policy = DigestPolicy::try_from(digest)?;
        // SAFETY: caller contract
        let data = unsafe { data_arg(data, data_len) }?;
        let public_key = unsafe { key_arg(public_key, public_key_len) }?;
        let signature = unsafe { data_arg(signature, signature_len) }?;
        signature::verify(data, public_key, signature, policy)
    })
}

/// Verify a base64 SHA-256 signature over the bytes of the NUL-terminated
/// string `data`.
///
/// # Safety
/// `data` and `signature_base64` must be NUL-terminated and `public_key`
/// must point to `public_key_len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn RsaVerifyFromBase64_C(
    data: *const c_char,
    public_key: *const u8,
    public_key_len: c_int,
    signature_base64: *const c_char,
) -> BoolResult {
    abi_boundary(|| {
        // SAFETY: caller contract
        let data = unsafe { text_arg(data) }?;
        let public_key = unsafe { key_arg(public_key, public_key_len) }?;
        let signature_base64 = unsafe { str_arg(signature_base64) }?;
        signature::verify_from_base64(data, public_key, signature_base64, DigestPolicy::Standard)
    })
}

/// Verify a base64 signature over `data` under an explicit digest policy.
///
/// # Safety
/// Each `(ptr, len)` pair must describe readable memory and
/// `signature_base64` must be NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn RsaVerifyFromBase64WithDigest_C(
    data: *const u8,
    data_len: c_int,
    public_key: *const u8,
    public_key_len: c_int,
    signature_base64: *const c_char,
    digest: u32,
) -> BoolResult {
    abi_boundary(|| {
        let policy = DigestPolicy::try_from(digest)?;
        // SAFETY: caller contract
        let data = unsafe { data_arg(data, data_len) }?;
        let public_key = unsafe { key_arg(public_key, public_key_len) }?;
        let signature_base64 = unsafe { str_arg(signature_base64) }?;
        signature::verify_from_base64(data, public_key, signature_base64, policy)
    })
}

/// Verify a legacy SHA-1 signature over `data`.
///
/// # Safety
/// Each `(ptr, len)` pair must describe readable memory.
#[no_mangle]
pub unsafe extern "C" fn RsaVerifySha1_C(
    data: *const u8,
    data_len: c_int,
    public_key: *const u8,
    public_key_len: c_int,
    signature: *const u8,
    signature_len: c_int,
) -> BoolResult {
    // SAFETY: forwarded caller contract
    unsafe {
        RsaVerifyWithDigest_C(
            data,
            data_len,
            public_key,
            public_key_len,
            signature,
            signature_len,
            DigestPolicy::Legacy.into(),
        )
    }
}

// ---------------------------------------------------------------------------
// Release
// ---------------------------------------------------------------------------

/// Release a [`ByteArray`]. Call exactly once per result.
#[no_mangle]
pub extern "C" fn FreeByteArray_C(result: ByteArray) {
    drop(result);
}

/// Release an [`RsaKeyPair`], including both nested buffers.
#[no_mangle]
pub extern "C" fn FreeRsaKeyPair_C(result: RsaKeyPair) {
    drop(result);
}

/// Release a [`StringResult`].
#[no_mangle]
pub extern "C" fn FreeStringResult_C(result: StringResult) {
    drop(result);
}

/// Release a [`BoolResult`]. Only the error message, if any, is heap data.
#[no_mangle]
pub extern "C" fn FreeBoolResult_C(result: BoolResult) {
    drop(result);
}
