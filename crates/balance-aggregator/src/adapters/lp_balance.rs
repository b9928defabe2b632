//! # LP Balance Adapter
//!
//! Reports a user's pro-rata claim on a liquidity pool's holding of an asset:
//!
//! ```text
//! reserve        = asset.balanceOf(pair)
//! total_shares   = pair.totalSupply()
//! account_shares = pair.balanceOf(account)
//! balance        = floor(reserve * account_shares / total_shares)
//! ```
//!
//! A pair with no issued shares is a division-by-zero error, not a zero
//! balance.

use crate::domain::services::pro_rata_share;
use crate::domain::value_objects::{Address, U256};
use crate::errors::AdapterError;
use crate::ports::outbound::{BalanceAdapter, TokenReader};
use serde::{Deserialize, Serialize};

/// Adapter bound to one liquidity pool pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpBalanceAdapter {
    pair: Address,
}

impl LpBalanceAdapter {
    /// Creates an adapter for the pair at `pair`.
    #[must_use]
    pub const fn new(pair: Address) -> Self {
        Self { pair }
    }

    /// The pair this adapter reads.
    #[must_use]
    pub const fn pair(&self) -> Address {
        self.pair
    }
}

impl BalanceAdapter for LpBalanceAdapter {
    fn get_balance(
        &self,
        tokens: &dyn TokenReader,
        asset: Address,
        account: Address,
    ) -> Result<U256, AdapterError> {
        let reserve = tokens.balance_of(asset, self.pair)?;
        let total_shares = tokens.total_supply(self.pair)?;
        let account_shares = tokens.balance_of(self.pair, account)?;
        Ok(pro_rata_share(reserve, account_shares, total_shares)?)
    }
}
