//! # rsaboundary
//!
//! RSA key generation, encryption and signatures, exposed both as a safe Rust
//! API and as a C ABI with explicit ownership transfer.
//!
//! ## Features
//!
//! - **Key Generation**: RSA key pairs of 512 to 16384 bits (2048+ recommended)
//! - **Encryption**: RSAES-OAEP with SHA-256
//! - **Signatures**: RSASSA-PKCS1-v1_5 over SHA-256, or SHA-1 for legacy peers
//! - **Key Formats**: PKCS#1 and PKCS#8 private keys, SPKI public keys, DER,
//!   PEM and base64
//! - **C Boundary**: flat `#[repr(C)]` results with an out-of-band error
//!   message and one release function per result shape (see [`ffi`])
//!
//! ## Quick Start
//!
//! ```rust
//! use rsaboundary::{encryption, keys, signature, DigestPolicy};
//!
//! let key_pair = keys::generate_key_pair(2048).unwrap();
//!
//! let ciphertext = encryption::encrypt(b"hello", &key_pair.public_key).unwrap();
//! let plaintext = encryption::decrypt(&ciphertext, &key_pair.private_key).unwrap();
//! assert_eq!(plaintext, b"hello");
//!
//! let sig = signature::sign(b"hello", &key_pair.private_key, DigestPolicy::Standard).unwrap();
//! assert!(signature::verify(b"hello", &key_pair.public_key, &sig, DigestPolicy::Standard).unwrap());
//! assert!(!signature::verify(b"hullo", &key_pair.public_key, &sig, DigestPolicy::Standard).unwrap());
//! ```
//!
//! ## Error Handling
//!
//! The Rust API returns `Result<T, Error>`; [`Error::code`] gives the
//! [`ErrorCode`]. A signature that does not match is `Ok(false)`, never an
//! error. At the C boundary the same error is flattened to a
//! `"<CODE>: <detail>"` message.
//!
//! ## Concurrency
//!
//! Every operation is a pure function of its inputs. The only shared
//! resource is the operating system RNG behind [`rand::rngs::OsRng`].

pub mod core;
pub mod encoding;
pub mod encryption;
pub mod error;
pub mod ffi;
pub mod keys;
pub mod signature;
pub mod types;

#[cfg(test)]
mod testing;

pub use crate::core::{EncodedKeyPair, KeyPair};
pub use crate::error::{Error, ErrorCode};
pub use crate::types::digest::DigestPolicy;
