//! RSAES-OAEP encryption with SHA-256 (and MGF1-SHA-256).

use rand::rngs::OsRng;
use rsa::{traits::PublicKeyParts, Oaep};
use sha2::{Digest, Sha256};

use crate::encoding;
use crate::error::Error;
use crate::keys::{parse_private_key, parse_public_key};

/// Largest plaintext OAEP-SHA-256 can carry under a modulus of
/// `modulus_len` bytes: `k - 2 * hLen - 2`.
///
/// `None` when the modulus is too short for the padding itself, so not even
/// an empty message fits.
pub fn oaep_capacity(modulus_len: usize) -> Option<usize> {
    modulus_len.checked_sub(2 * <Sha256 as Digest>::output_size() + 2)
}

/// Maximum plaintext length for the given public key (SPKI DER). Zero for
/// keys too short to encrypt anything.
pub fn max_plaintext_len(public_key_der: &[u8]) -> Result<usize, Error> {
    let public_key = parse_public_key(public_key_der)?;
    Ok(oaep_capacity(public_key.size()).unwrap_or(0))
}

/// Encrypt `plaintext` for the holder of the private half of `public_key_der`.
///
/// # Errors
///
/// `InvalidKeyEncoding` if the key does not parse, `PlaintextTooLarge` if
/// `plaintext` exceeds [`max_plaintext_len`] or the modulus cannot hold the
/// OAEP padding at all.
pub fn encrypt(plaintext: &[u8], public_key_der: &[u8]) -> Result<Vec<u8>, Error> {
    let public_key = parse_public_key(public_key_der)?;

    match oaep_capacity(public_key.size()) {
        Some(max) if plaintext.len() <= max => {}
        capacity => {
            return Err(Error::PlaintextTooLarge {
                len: plaintext.len(),
                max: capacity.unwrap_or(0),
            })
        }
    }

    let mut rng = OsRng;
    public_key
        .encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext)
        .map_err(|e| Error::Internal(format!("encryption failed: {}", e)))
}

/// [`encrypt`], with the ciphertext returned as base64.
pub fn encrypt_base64(plaintext: &[u8], public_key_der: &[u8]) -> Result<String, Error> {
    let ciphertext = encrypt(plaintext, public_key_der)?;
    Ok(encoding::encode(&ciphertext))
}

/// Decrypt an OAEP ciphertext.
///
/// Wrong key, corrupted ciphertext, bad padding and wrong length all yield
/// the same `DecryptionFailed`.
pub fn decrypt(ciphertext: &[u8], private_key_der: &[u8]) -> Result<Vec<u8>, Error> {
    let private_key = parse_private_key(private_key_der)?;

    if ciphertext.len() != private_key.size() {
        return Err(Error::DecryptionFailed);
    }

    let mut rng = OsRng;
    private_key
        .decrypt_blinded(&mut rng, Oaep::new::<Sha256>(), ciphertext)
        .map_err(|_| Error::DecryptionFailed)
}

/// Decode base64 ciphertext, then [`decrypt`]. Malformed base64 is reported
/// as `InvalidEncoding` before the key is even looked at.
pub fn decrypt_from_base64(
    ciphertext_base64: &str,
    private_key_der: &[u8],
) -> Result<Vec<u8>, Error> {
    let ciphertext = encoding::decode(ciphertext_base64)?;
    decrypt(&ciphertext, private_key_der)
}
