//! Coin amount value object.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A positive quantity of coins, as moved by a transfer or captured as a
/// purchase price.
///
/// Balances themselves are plain `i64` read models; `Coins` exists so the
/// ledger operations cannot be handed a zero or negative amount.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(i64);

impl Coins {
    pub fn new(amount: i64) -> DomainResult<Self> {
        if amount <= 0 {
            return Err(DomainError::validation(format!(
                "amount must be greater than zero, got {amount}"
            )));
        }
        Ok(Self(amount))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for Coins {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for Coins {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_amounts() {
        assert_eq!(Coins::new(1).unwrap().get(), 1);
        assert_eq!(Coins::new(1000).unwrap().get(), 1000);
    }

    #[test]
    fn rejects_zero_and_negative_amounts() {
        assert!(Coins::new(0).is_err());
        assert!(Coins::new(-50).is_err());
    }
}
