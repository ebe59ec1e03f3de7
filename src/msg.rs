use cosmwasm_std::{Addr, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::Ratio;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub source_asset: String,
    pub destination_asset: String,
    pub upgrade_enabled: bool,
    pub downgrade_enabled: bool,
    pub ratio_numerator: Uint128,
    pub ratio_denominator: Uint128,
    /// Defaults to the instantiating sender.
    pub owner: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Pulls `amount` source tokens from the sender (needs a cw20 allowance)
    /// and sends the converted destination tokens to `recipient`.
    Upgrade { recipient: String, amount: Uint128 },
    /// Pulls `amount` destination tokens from the sender and sends the
    /// converted source tokens to `recipient`.
    Downgrade { recipient: String, amount: Uint128 },
    SetUpgradeEnabled { enabled: bool },
    SetDowngradeEnabled { enabled: bool },
    UpdateOwner { new_owner: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetConfig {},
    GetRatio {},
    GetTotalUpgraded {},
    SimulateUpgrade { amount: Uint128 },
    SimulateDowngrade { amount: Uint128 },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub owner: Addr,
    pub source_asset: Addr,
    pub destination_asset: Addr,
    pub ratio: Ratio,
    pub upgrade_enabled: bool,
    pub downgrade_enabled: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RatioResponse {
    pub numerator: Uint128,
    pub denominator: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TotalUpgradedResponse {
    pub total_upgraded: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct SimulationResponse {
    pub amount_in: Uint128,
    pub amount_out: Uint128,
}
