//! RSASSA-PKCS1-v1_5 signatures over a SHA-256 or SHA-1 digest.

use log::warn;
use rand::rngs::OsRng;
use rsa::{traits::PublicKeyParts, Pkcs1v15Sign};
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::encoding;
use crate::error::Error;
use crate::keys::{parse_private_key, parse_public_key};
use crate::types::digest::DigestPolicy;

/// Hash `data` under `policy` and return the digest together with the
/// matching PKCS#1 v1.5 padding (which embeds the DigestInfo OID).
fn digest_and_scheme(data: &[u8], policy: DigestPolicy) -> (Vec<u8>, Pkcs1v15Sign) {
    match policy {
        DigestPolicy::Standard => (Sha256::digest(data).to_vec(), Pkcs1v15Sign::new::<Sha256>()),
        DigestPolicy::Legacy => (Sha1::digest(data).to_vec(), Pkcs1v15Sign::new::<Sha1>()),
    }
}

/// Sign `data` with a private key (PKCS#1 or PKCS#8 DER).
///
/// The signature is deterministic for a given key, data and policy; the RNG
/// only blinds the private-key operation.
pub fn sign(data: &[u8], private_key_der: &[u8], policy: DigestPolicy) -> Result<Vec<u8>, Error> {
    let private_key = parse_private_key(private_key_der)?;

    if policy == DigestPolicy::Legacy {
        warn!("signing with legacy {} digest", policy.algorithm_name());
    }

    let (hashed, scheme) = digest_and_scheme(data, policy);
    let mut rng = OsRng;
    private_key
        .sign_with_rng(&mut rng, scheme, &hashed)
        .map_err(|e| Error::Internal(format!("signing failed: {}", e)))
}

/// [`sign`], with the signature returned as base64.
pub fn sign_base64(
    data: &[u8],
    private_key_der: &[u8],
    policy: DigestPolicy,
) -> Result<String, Error> {
    let signature = sign(data, private_key_der, policy)?;
    Ok(encoding::encode(&signature))
}

/// Check `signature` over `data`.
///
/// Returns `Ok(false)` when the signature is well formed but does not match
/// (other data, other key, other digest policy). Only structurally invalid
/// input is an error.
///
/// # Errors
///
/// `InvalidKeyEncoding` if the public key does not parse,
/// `SignatureMalformed` if the signature length differs from the modulus
/// length.
pub fn verify(
    data: &[u8],
    public_key_der: &[u8],
    signature: &[u8],
    policy: DigestPolicy,
) -> Result<bool, Error> {
    let public_key = parse_public_key(public_key_der)?;

    if signature.len() != public_key.size() {
        return Err(Error::SignatureMalformed(format!(
            "signature is {} bytes, expected {}",
            signature.len(),
            public_key.size()
        )));
    }

    let (hashed, scheme) = digest_and_scheme(data, policy);
    match public_key.verify(scheme, &hashed, signature) {
        Ok(()) => Ok(true),
        Err(_) => Ok(false),
    }
}

/// Decode a base64 signature, then [`verify`]. Malformed base64 is an
/// `InvalidEncoding` error, not a failed verification.
pub fn verify_from_base64(
    data: &[u8],
    public_key_der: &[u8],
    signature_base64: &str,
    policy: DigestPolicy,
) -> Result<bool, Error> {
    let signature = encoding::decode(signature_base64)?;
    verify(data, public_key_der, &signature, policy)
}
