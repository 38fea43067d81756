//! Scrypt parameters for NEP-2 key derivation.

use crate::error::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scrypt cost parameters as carried in a NEP-6 wallet file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScryptParams {
    /// CPU/memory cost parameter. Must be a power of two greater than one.
    pub n: u32,

    /// Block size parameter.
    pub r: u32,

    /// Parallelization parameter.
    pub p: u32,
}

/// Length of the scrypt-derived key stream used by NEP-2.
pub(crate) const DKLEN: usize = 64;

impl ScryptParams {
    /// Creates validated scrypt parameters.
    pub fn new(n: u32, r: u32, p: u32) -> WalletResult<Self> {
        let params = Self { n, r, p };
        params.validate()?;
        Ok(params)
    }

    /// Lightweight parameters for tests; far too weak for real wallets.
    pub fn light() -> Self {
        Self { n: 256, r: 1, p: 1 }
    }

    /// Checks the structural constraints on the parameters.
    pub fn validate(&self) -> WalletResult<()> {
        if self.n <= 1 || !self.n.is_power_of_two() {
            return Err(WalletError::Scrypt(
                "n must be a power of 2 greater than 1".to_string(),
            ));
        }
        if self.r == 0 {
            return Err(WalletError::Scrypt("r must be greater than 0".to_string()));
        }
        if self.p == 0 {
            return Err(WalletError::Scrypt("p must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// The log2 of the cost parameter.
    pub fn log_n(&self) -> u8 {
        self.n.trailing_zeros() as u8
    }

    /// Converts to the parameter type of the scrypt implementation.
    pub(crate) fn to_params(self) -> WalletResult<scrypt::Params> {
        self.validate()?;
        scrypt::Params::new(self.log_n(), self.r, self.p, DKLEN)
            .map_err(|e| WalletError::Scrypt(e.to_string()))
    }
}

impl Default for ScryptParams {
    /// The NEP-2 standard parameters: n = 16384, r = 8, p = 8.
    fn default() -> Self {
        Self {
            n: 1 << 14,
            r: 8,
            p: 8,
        }
    }
}

impl fmt::Display for ScryptParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(n={}, r={}, p={})", self.n, self.r, self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nep2_standard() {
        let params = ScryptParams::default();
        assert_eq!(params.n, 16384);
        assert_eq!(params.r, 8);
        assert_eq!(params.p, 8);
        assert_eq!(params.log_n(), 14);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(ScryptParams::new(16384, 8, 8).is_ok());
        assert!(ScryptParams::new(1, 8, 8).is_err());
        assert!(ScryptParams::new(16383, 8, 8).is_err());
        assert!(ScryptParams::new(16384, 0, 8).is_err());
        assert!(ScryptParams::new(16384, 8, 0).is_err());
    }

    #[test]
    fn test_serde_shape() {
        let params = ScryptParams::default();
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, "{\"n\":16384,\"r\":8,\"p\":8}");
        let back: ScryptParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
