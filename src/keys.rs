//! RSA key generation, parsing and re-encoding.
//!
//! Private keys travel as PKCS#1 `RSAPrivateKey` DER and public keys as
//! X.509 `SubjectPublicKeyInfo` DER. On input, PKCS#8 private keys and
//! PKCS#1 public keys are accepted as well.

use log::warn;
use rand::rngs::OsRng;
use rsa::{
    pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey},
    pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding},
    RsaPrivateKey, RsaPublicKey,
};
use sha2::{Digest, Sha256};

use crate::core::KeyPair;
use crate::encoding;
use crate::error::Error;

/// Smallest modulus accepted by [`generate_key_pair`].
pub const MIN_KEY_BITS: usize = 512;

/// Anything below this is generated, but logged as unsafe.
pub const RECOMMENDED_KEY_BITS: usize = 2048;

/// Largest modulus accepted by [`generate_key_pair`].
pub const MAX_KEY_BITS: usize = 16384;

/// Generate a new RSA key pair with a modulus of `bits` bits.
///
/// # Errors
///
/// `InvalidParameter` if `bits` is outside `MIN_KEY_BITS..=MAX_KEY_BITS` or
/// the key generator fails (for example when the OS entropy source errors).
pub fn generate_key_pair(bits: usize) -> Result<KeyPair, Error> {
    if bits < MIN_KEY_BITS {
        return Err(Error::InvalidParameter(format!(
            "key size {} is below the minimum of {} bits",
            bits, MIN_KEY_BITS
        )));
    }
    if bits > MAX_KEY_BITS {
        return Err(Error::InvalidParameter(format!(
            "key size {} exceeds the maximum of {} bits",
            bits, MAX_KEY_BITS
        )));
    }
    if bits < RECOMMENDED_KEY_BITS {
        warn!(
            "generating a {}-bit RSA key; use at least {} bits in production",
            bits, RECOMMENDED_KEY_BITS
        );
    }

    let mut rng = OsRng;
    let private_key = RsaPrivateKey::new(&mut rng, bits)
        .map_err(|e| Error::InvalidParameter(format!("key generation failed: {}", e)))?;

    Ok(KeyPair {
        public_key: encode_public_key(&private_key.to_public_key())?,
        private_key: encode_private_key(&private_key)?,
    })
}

/// Derive the public key from a private key and return it as SPKI DER.
pub fn extract_public_key(private_key_der: &[u8]) -> Result<Vec<u8>, Error> {
    let private_key = parse_private_key(private_key_der)?;
    encode_public_key(&private_key.to_public_key())
}

/// Base64 of raw key bytes. Works for either half of a pair.
pub fn encode_key_base64(key: &[u8]) -> String {
    encoding::encode(key)
}

/// Inverse of [`encode_key_base64`].
pub fn decode_key_base64(key_base64: &str) -> Result<Vec<u8>, Error> {
    encoding::decode(key_base64)
}

/// Re-encode a PKCS#8 `PrivateKeyInfo` as PKCS#1 `RSAPrivateKey`.
pub fn convert_pkcs8_to_pkcs1(pkcs8_der: &[u8]) -> Result<Vec<u8>, Error> {
    let private_key = RsaPrivateKey::from_pkcs8_der(pkcs8_der).map_err(|e| {
        Error::InvalidKeyEncoding(format!("failed to parse PKCS#8 private key: {}", e))
    })?;
    encode_private_key(&private_key)
}

/// Re-encode a PKCS#1 `RSAPrivateKey` as PKCS#8 `PrivateKeyInfo`.
pub fn convert_pkcs1_to_pkcs8(pkcs1_der: &[u8]) -> Result<Vec<u8>, Error> {
    let private_key = RsaPrivateKey::from_pkcs1_der(pkcs1_der).map_err(|e| {
        Error::InvalidKeyEncoding(format!("failed to parse PKCS#1 private key: {}", e))
    })?;
    let doc = private_key
        .to_pkcs8_der()
        .map_err(|e| Error::Internal(format!("failed to encode PKCS#8 private key: {}", e)))?;
    Ok(doc.as_bytes().to_vec())
}

/// PEM (`RSA PRIVATE KEY`) of a private key given in DER.
pub fn private_key_to_pem(private_key_der: &[u8]) -> Result<String, Error> {
    let private_key = parse_private_key(private_key_der)?;
    let pem = private_key
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| Error::Internal(format!("failed to encode private key PEM: {}", e)))?;
    Ok(pem.to_string())
}

/// PEM (`PUBLIC KEY`) of a public key given in DER.
pub fn public_key_to_pem(public_key_der: &[u8]) -> Result<String, Error> {
    let public_key = parse_public_key(public_key_der)?;
    public_key
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| Error::Internal(format!("failed to encode public key PEM: {}", e)))
}

/// PKCS#1 DER of a private key given in PEM (`RSA PRIVATE KEY` or `PRIVATE KEY`).
pub fn private_key_from_pem(pem: &str) -> Result<Vec<u8>, Error> {
    let private_key = RsaPrivateKey::from_pkcs1_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
        .map_err(|e| {
            Error::InvalidKeyEncoding(format!("failed to parse private key PEM: {}", e))
        })?;
    encode_private_key(&private_key)
}

/// SPKI DER of a public key given in PEM (`PUBLIC KEY` or `RSA PUBLIC KEY`).
pub fn public_key_from_pem(pem: &str) -> Result<Vec<u8>, Error> {
    let public_key = RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|e| {
            Error::InvalidKeyEncoding(format!("failed to parse public key PEM: {}", e))
        })?;
    encode_public_key(&public_key)
}

/// SHA-256 fingerprint of a public key, as `"sha256:<hex>"`.
///
/// The hash is taken over the SPKI DER, so a PKCS#1 encoding of the same key
/// yields the same fingerprint.
pub fn key_fingerprint(public_key_der: &[u8]) -> Result<String, Error> {
    let public_key = parse_public_key(public_key_der)?;
    let der = encode_public_key(&public_key)?;

    let mut hasher = Sha256::new();
    hasher.update(&der);
    let hash = hasher.finalize();

    Ok(format!("sha256:{}", hex::encode(hash)))
}

pub(crate) fn parse_private_key(der: &[u8]) -> Result<RsaPrivateKey, Error> {
    RsaPrivateKey::from_pkcs1_der(der)
        .or_else(|_| RsaPrivateKey::from_pkcs8_der(der))
        .map_err(|_| Error::InvalidKeyEncoding("failed to parse private key".to_string()))
}

pub(crate) fn parse_public_key(der: &[u8]) -> Result<RsaPublicKey, Error> {
    RsaPublicKey::from_public_key_der(der)
        .or_else(|_| RsaPublicKey::from_pkcs1_der(der))
        .map_err(|_| Error::InvalidKeyEncoding("failed to parse public key".to_string()))
}

fn encode_private_key(private_key: &RsaPrivateKey) -> Result<Vec<u8>, Error> {
    let doc = private_key
        .to_pkcs1_der()
        .map_err(|e| Error::Internal(format!("failed to encode private key: {}", e)))?;
    Ok(doc.as_bytes().to_vec())
}

fn encode_public_key(public_key: &RsaPublicKey) -> Result<Vec<u8>, Error> {
    let doc = public_key
        .to_public_key_der()
        .map_err(|e| Error::Internal(format!("failed to encode public key: {}", e)))?;
    Ok(doc.as_bytes().to_vec())
}
