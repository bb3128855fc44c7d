//! Shared fixtures for unit tests. Key generation is the slow part of the
//! suite, so each size is generated once per test binary.

use std::sync::OnceLock;

use crate::core::KeyPair;
use crate::keys::generate_key_pair;

pub(crate) fn key_pair_1024() -> &'static KeyPair {
    static KP: OnceLock<KeyPair> = OnceLock::new();
    KP.get_or_init(|| generate_key_pair(1024).unwrap())
}

pub(crate) fn key_pair_2048() -> &'static KeyPair {
    static KP: OnceLock<KeyPair> = OnceLock::new();
    KP.get_or_init(|| generate_key_pair(2048).unwrap())
}

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fixed material signed by an earlier release of this library. The
/// signatures must keep verifying, and re-signing must reproduce them.
pub(crate) mod vectors {
    /// SPKI public key paired with [`PKCS8_PRIVATE_KEY`].
    pub(crate) const PKCS8_PUBLIC_KEY: &str = concat!(
        "MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQCLjXCd0y8wucMlQDd9S9cFeCA0H/l/prno",
        "uwWgGOEzoaS1gBK4IK0AAiNd7mz8EP+4m9DqeaGW63ei3aws43qV1lDpsVepfJ2PPe/5VBx7",
        "uAKKGqPU+IlNP6EBWUWMMsrCS/oh6LHucCyLah5YhyXOju1cZTfqQ1VFWsbZupmUaQIDAQAB",
    );

    /// 1024-bit private key, PKCS#8 DER.
    pub(crate) const PKCS8_PRIVATE_KEY: &str = concat!(
        "MIICdwIBADANBgkqhkiG9w0BAQEFAASCAmEwggJdAgEAAoGBAIuNcJ3TLzC5wyVAN31L1wV4",
        "IDQf+X+muei7BaAY4TOhpLWAErggrQACI13ubPwQ/7ib0Op5oZbrd6LdrCzjepXWUOmxV6l8",
        "nY897/lUHHu4Aooao9T4iU0/oQFZRYwyysJL+iHose5wLItqHliHJc6O7VxlN+pDVUVaxtm6",
        "mZRpAgMBAAECgYAKHDkodgBZO1wT+s8KWNA/KTDMFfTxdpbJcaM6shK+tttD+v9gL53Y/k6p",
        "o3hp2qFsMn20PxOh53VHa1/p8KEU1j+DwLbNC5eIp7/5ZNWwftQTSHBCqSyr+7rE0i6Gcst1",
        "qT0ioKUS1fOHIZSt0gfBOf1eEzhpLDT1o0QgY98cAQJBANrWFNml89xHZQAUmXvrcC/vzmbf",
        "ktWuHpTP4gRoURp4Uh7j07xD7dVN/gbk42K70VWCTWTRSARApA9IfjACuqECQQCjQH4hh/2H",
        "70b23h3OUfiGUSnhupoNUz93xTsaBYbwiTGYH81Sno5aQbO3j8H9gi8qZanSHRG24MUVeyQd",
        "RYzJAkBHJ0aeQgxZeklHzmrdVP8kRwfIgTdgDP5aioFFx5lfTvH8oz1MQJYLPhGzsiaRCtqU",
        "wApkFnwhDdeKNJr7B1ghAkEAm/knSTQbp/+VxpGK2q/4iaQMJs3ZF7gc4HrBL+ht92ysxJJF",
        "4pT4nwU9BrlD98ik9ZXyPXxmi1qPEin35Dup+QJBAMQsiQwjjTGoVJpNrXoxHbSwgrHhJrgP",
        "4HUX2XKmbjCfem8dWdU93G4/VDFUDcNJyd33xDOHispMoe+rHwgG0xQ=",
    );

    pub(crate) const PKCS1_PUBLIC_KEY: &str = concat!(
        "MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQCCjpncvOtMHIp4Bv9sX3JMoSlYKCWsaHdD",
        "Z5Oi+QybEDQQlk+MS0wDv+CodsbBFkFwkYcScJzXO/2tM7zVLJR71H761u/woIC5WiBivEMf",
        "F6paD0oUM/M440N6ek9ZVONd+W29tnsA+pRVPhN8JhIJaWpuB//UoROXp0PWMjfiZwIDAQAB",
    );

    /// 1024-bit private key, PKCS#1 DER.
    pub(crate) const PKCS1_PRIVATE_KEY: &str = concat!(
        "MIICXAIBAAKBgQCCjpncvOtMHIp4Bv9sX3JMoSlYKCWsaHdDZ5Oi+QybEDQQlk+MS0wDv+Co",
        "dsbBFkFwkYcScJzXO/2tM7zVLJR71H761u/woIC5WiBivEMfF6paD0oUM/M440N6ek9ZVONd",
        "+W29tnsA+pRVPhN8JhIJaWpuB//UoROXp0PWMjfiZwIDAQABAoGAd/oYBzRNfzpTPY4guDTW",
        "UvlfhzYNuOyffP/4OrJoFS/EyOF45NJlXqS8DdRpPhP3uzzhRd7bIyhsLPj4tWYsZGuyA+Gy",
        "OjF9Zj/rOWPU1rP4qWSFQ1p9pHvugoi3yt9I1bIqggvUcXk3hdnuVdfSjQE1fY5lpXZvGKB6",
        "zNpqZVECQQDuWimYnFgc/1BJtSfCwtKiN0eFMw8S4gTyzWttwOtFxBsHo7Q1l5Xvk564kwZX",
        "r2CuOXahrJaDjYm7vNzfoy6bAkEAjDk9QynP8YXQsISPB/X/PxYYpZbAti85sk3JPVO2jb3t",
        "AkxCYmIxUg1xgpogaOupqKxeQe83gD8742+5xSXSJQJASuFegghUEkAPjChyZlhobffp6ynA",
        "SZFiNplcb62U/GUAjOTcH54Qx6Rbz+a4rmF1gSaiY2ZiHtAffjB2P3f3kwJASBx7k9mh1Zwy",
        "eUSCZd6tOB096ZJAYrCgpEB6eC5f2D7O7vqWvQ+wO3ksYbSvbCWdZ1/VTWUfDrX2L31adLeB",
        "fQJBALGYWVO6Ksv72k1vbSywhLYOKVe3JLZiZgFUNvKLh0g1Tfm1pK29veSSGey8HIkGtI04",
        "E6tgQVLx3adZSxjdnFI=",
    );

    pub(crate) const MESSAGE: &str = "kolOt/LYqkhf/RZu6aJcIA==";

    /// Signature over [`MESSAGE`] by [`PKCS8_PRIVATE_KEY`], SHA-256.
    pub(crate) const SHA256_SIGNATURE: &str = concat!(
        "VnEka0wYeYmaG45qW7+RTPH+prTO9ryxrtqyAwpoZOymeQGJTPfkmm+Ti16UJPZetYR1LF+E",
        "TQ++XAkuTQIqhu4sgXyuhw4/TIYyMDzaEuEDOciwvJLiyC73E0Q4jXQx6kT8o+65Ki9h4LPx",
        "jjr8tOc+/r3U1uhute8/QWWYiuA=",
    );

    /// Signature over [`MESSAGE`] by [`PKCS1_PRIVATE_KEY`], SHA-1.
    pub(crate) const SHA1_SIGNATURE: &str = concat!(
        "RvxmCkUxhtSPLss712C2vH7jpXaV82QXDe/e9EaclgWuVPEliDPmUkwg20PfG5d/xM0l3LAE",
        "exHAUWD3svg6HTWo9zw7/l+fYxtkbv59i8Uz7r5Y+j3HVaHKevFEw2Z34PHbiPXVNYBRE/4Q",
        "zl8wLT2ZSLzo50yBBFziD4LgvtU=",
    );
}
