use crate::error::CoreError;
use crate::rules::change::solve_fewest_coins;
use serde::Serialize;

/// Validated coin denominations, sorted ascending with duplicates removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct CoinSet(Vec<i64>);

impl CoinSet {
    pub fn new(raw: &[i64]) -> Result<Self, CoreError> {
        if let Some(&bad) = raw.iter().find(|&&coin| coin <= 0) {
            return Err(CoreError::InvalidDenomination(bad));
        }

        let mut coins = raw.to_vec();
        coins.sort_unstable();
        coins.dedup();
        Ok(Self(coins))
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn smallest(&self) -> Option<i64> {
        self.0.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fewest_coins(&self, amount: i64) -> Result<Vec<i64>, CoreError> {
        solve_fewest_coins(self, amount)
    }
}
