use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Hash applied to the message before signing or verifying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestPolicy {
    /// SHA-256. Use this for anything new.
    #[default]
    Standard,
    /// SHA-1, only for checking or producing signatures old callers expect.
    Legacy,
}

impl DigestPolicy {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            DigestPolicy::Standard => "SHA-256",
            DigestPolicy::Legacy => "SHA-1",
        }
    }
}

/// Boundary encoding: `0` is `Standard`, `1` is `Legacy`.
impl TryFrom<u32> for DigestPolicy {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DigestPolicy::Standard),
            1 => Ok(DigestPolicy::Legacy),
            other => Err(Error::InvalidParameter(format!(
                "unknown digest policy {}",
                other
            ))),
        }
    }
}

impl From<DigestPolicy> for u32 {
    fn from(policy: DigestPolicy) -> Self {
        match policy {
            DigestPolicy::Standard => 0,
            DigestPolicy::Legacy => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_default_is_standard() {
        assert_eq!(DigestPolicy::default(), DigestPolicy::Standard);
    }

    #[test]
    fn test_try_from_u32() {
        assert_eq!(DigestPolicy::try_from(0).unwrap(), DigestPolicy::Standard);
        assert_eq!(DigestPolicy::try_from(1).unwrap(), DigestPolicy::Legacy);
        let err = DigestPolicy::try_from(7).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidParameter);
    }

    #[test]
    fn test_digest_policy_serde() {
        assert_eq!(
            serde_json::to_string(&DigestPolicy::Standard).unwrap(),
            "\"standard\""
        );
        assert_eq!(
            serde_json::to_string(&DigestPolicy::Legacy).unwrap(),
            "\"legacy\""
        );
    }
}
