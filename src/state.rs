use cosmwasm_std::{Addr, OverflowError, Uint128};
use cw_storage_plus::Item;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const CONTRACT_NAME: &str = "crates.io:cw20-conversion-ledger";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed exchange rate: `numerator` destination units per `denominator` source units.
///
/// The product `amount * numerator` (or `amount * denominator` when
/// downgrading) is computed in `Uint128` before dividing, so an amount above
/// `Uint128::MAX / multiplier` overflows even when the quotient would fit.
/// With a 1e18/1e18 ratio that caps a single conversion at about 3.4e20 units.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub struct Ratio {
    pub numerator: Uint128,
    pub denominator: Uint128,
}

impl Ratio {
    /// Source amount to destination amount, truncating.
    pub fn upgrade_amount(&self, source_amount: Uint128) -> Result<Uint128, OverflowError> {
        scale(source_amount, self.numerator, self.denominator)
    }

    /// Destination amount to source amount, truncating.
    pub fn downgrade_amount(&self, destination_amount: Uint128) -> Result<Uint128, OverflowError> {
        scale(destination_amount, self.denominator, self.numerator)
    }
}

fn scale(amount: Uint128, mul: Uint128, div: Uint128) -> Result<Uint128, OverflowError> {
    // instantiate rejects a zero numerator or denominator
    Ok(amount.checked_mul(mul)? / div)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub owner: Addr,
    pub source_asset: Addr,
    pub destination_asset: Addr,
    pub ratio: Ratio,
    pub upgrade_enabled: bool,
    pub downgrade_enabled: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Source amount held in custody against destination tokens handed out.
pub const TOTAL_UPGRADED: Item<Uint128> = Item::new("total_upgraded");
