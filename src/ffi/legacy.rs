//! Entry points under the original naming scheme. Each one forwards to its
//! current counterpart; there is no separate implementation.

#![allow(non_snake_case)]

use std::ffi::c_int;

use super::{abi_boundary, bits_arg, ByteArray};
use super::{RsaDecrypt_C, RsaEncrypt_C};
use crate::keys;

/// Generate a key pair and return only the PKCS#1 private key.
///
/// The public key can be recovered with `RsaExtractPublicKey_C`.
#[no_mangle]
pub extern "C" fn GenerateRSAKeyPair_C(bits: c_int) -> ByteArray {
    abi_boundary(|| keys::generate_key_pair(bits_arg(bits)?).map(|kp| kp.private_key))
}

/// `RsaEncrypt_C` with the key first.
///
/// # Safety
/// Each `(ptr, len)` pair must describe readable memory.
#[no_mangle]
pub unsafe extern "C" fn RSAEncrypt_C(
    public_key: *const u8,
    public_key_len: c_int,
    data: *const u8,
    data_len: c_int,
) -> ByteArray {
    // SAFETY: forwarded caller contract
    unsafe { RsaEncrypt_C(data, data_len, public_key, public_key_len) }
}

/// `RsaDecrypt_C` with the key first.
///
/// # Safety
/// Each `(ptr, len)` pair must describe readable memory.
#[no_mangle]
pub unsafe extern "C" fn RSADecrypt_C(
    private_key: *const u8,
    private_key_len: c_int,
    ciphertext: *const u8,
    ciphertext_len: c_int,
) -> ByteArray {
    // SAFETY: forwarded caller contract
    unsafe { RsaDecrypt_C(ciphertext, ciphertext_len, private_key, private_key_len) }
}
