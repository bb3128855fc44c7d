use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

/// A freshly generated RSA key pair in transport encoding.
///
/// The two halves are independent byte buffers. Nothing ties them together
/// after generation other than the mathematics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    /// X.509 SubjectPublicKeyInfo, DER encoded
    pub public_key: Vec<u8>,
    /// PKCS#1 RSAPrivateKey, DER encoded
    pub private_key: Vec<u8>,
}

impl KeyPair {
    /// Base64 of the public key DER.
    pub fn public_key_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.public_key)
    }

    /// Base64 of the private key DER.
    pub fn private_key_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.private_key)
    }

    /// Both keys as base64 text, for callers that move keys around as strings.
    pub fn to_base64(&self) -> EncodedKeyPair {
        EncodedKeyPair {
            public_key: self.public_key_base64(),
            private_key: self.private_key_base64(),
        }
    }
}

/// A key pair where both keys are standard padded base64 of their DER.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EncodedKeyPair {
    /// Base64 SubjectPublicKeyInfo
    pub public_key: String,
    /// Base64 PKCS#1 RSAPrivateKey
    pub private_key: String,
}
