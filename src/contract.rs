#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::asset::Cw20Asset;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg, RatioResponse, SimulationResponse,
    TotalUpgradedResponse,
};
use crate::state::{Config, Ratio, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, TOTAL_UPGRADED};
use crate::ContractError;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.source_asset == msg.destination_asset {
        return Err(ContractError::invalid_config(
            "source and destination addresses are the same",
        ));
    }
    if msg.source_asset.is_empty() {
        return Err(ContractError::invalid_config("source address cannot be empty"));
    }
    if msg.destination_asset.is_empty() {
        return Err(ContractError::invalid_config(
            "destination address cannot be empty",
        ));
    }
    if msg.ratio_numerator.is_zero() {
        return Err(ContractError::invalid_config("numerator of ratio cannot be zero"));
    }
    if msg.ratio_denominator.is_zero() {
        return Err(ContractError::invalid_config(
            "denominator of ratio cannot be zero",
        ));
    }

    let source_asset = deps.api.addr_validate(&msg.source_asset)?;
    let destination_asset = deps.api.addr_validate(&msg.destination_asset)?;
    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };

    let config = Config {
        owner,
        source_asset,
        destination_asset,
        ratio: Ratio {
            numerator: msg.ratio_numerator,
            denominator: msg.ratio_denominator,
        },
        upgrade_enabled: msg.upgrade_enabled,
        downgrade_enabled: msg.downgrade_enabled,
    };
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(deps.storage, &config)?;
    TOTAL_UPGRADED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner.to_string())
        .add_attribute("source_asset", config.source_asset.to_string())
        .add_attribute("destination_asset", config.destination_asset.to_string())
        .add_attribute("ratio_numerator", config.ratio.numerator.to_string())
        .add_attribute("ratio_denominator", config.ratio.denominator.to_string())
        .add_attribute("upgrade_enabled", config.upgrade_enabled.to_string())
        .add_attribute("downgrade_enabled", config.downgrade_enabled.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Upgrade { recipient, amount } => try_upgrade(deps, env, info, recipient, amount),
        ExecuteMsg::Downgrade { recipient, amount } => {
            try_downgrade(deps, env, info, recipient, amount)
        }
        ExecuteMsg::SetUpgradeEnabled { enabled } => try_set_upgrade_enabled(deps, info, enabled),
        ExecuteMsg::SetDowngradeEnabled { enabled } => {
            try_set_downgrade_enabled(deps, info, enabled)
        }
        ExecuteMsg::UpdateOwner { new_owner } => try_update_owner(deps, info, new_owner),
    }
}

// Both transfer legs are checked against live cw20 state before the response
// is built. The two messages then run in this transaction, so a failure in
// either one reverts the counter update as well.
fn try_upgrade(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.upgrade_enabled {
        return Err(ContractError::FeatureDisabled {
            feature: "upgrade".to_string(),
        });
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    let destination_amount = config.ratio.upgrade_amount(amount)?;

    let source = Cw20Asset(config.source_asset);
    let destination = Cw20Asset(config.destination_asset);
    let pull = source.pull(
        &deps.querier,
        &env.block,
        &info.sender,
        &env.contract.address,
        amount,
    )?;
    let push = destination.push(
        &deps.querier,
        &env.contract.address,
        &recipient,
        destination_amount,
    )?;

    let total_upgraded = TOTAL_UPGRADED.load(deps.storage)?.checked_add(amount)?;
    TOTAL_UPGRADED.save(deps.storage, &total_upgraded)?;

    Ok(Response::new()
        .add_message(pull)
        .add_message(push)
        .add_attribute("action", "upgrade")
        .add_attribute("caller", info.sender.to_string())
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("source_amount", amount.to_string())
        .add_attribute("destination_amount", destination_amount.to_string())
        .add_attribute("total_upgraded", total_upgraded.to_string()))
}

fn try_downgrade(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.downgrade_enabled {
        return Err(ContractError::FeatureDisabled {
            feature: "downgrade".to_string(),
        });
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    let source_amount = config.ratio.downgrade_amount(amount)?;

    let source = Cw20Asset(config.source_asset);
    let destination = Cw20Asset(config.destination_asset);
    let pull = destination.pull(
        &deps.querier,
        &env.block,
        &info.sender,
        &env.contract.address,
        amount,
    )?;
    let push = source.push(
        &deps.querier,
        &env.contract.address,
        &recipient,
        source_amount,
    )?;

    // never floors at zero: returning more than was upgraded is an error
    let total_upgraded = TOTAL_UPGRADED
        .load(deps.storage)?
        .checked_sub(source_amount)?;
    TOTAL_UPGRADED.save(deps.storage, &total_upgraded)?;

    Ok(Response::new()
        .add_message(pull)
        .add_message(push)
        .add_attribute("action", "downgrade")
        .add_attribute("caller", info.sender.to_string())
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("destination_amount", amount.to_string())
        .add_attribute("source_amount", source_amount.to_string())
        .add_attribute("total_upgraded", total_upgraded.to_string()))
}

fn try_set_upgrade_enabled(
    deps: DepsMut,
    info: MessageInfo,
    enabled: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    config.upgrade_enabled = enabled;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "set_upgrade_enabled")
        .add_attribute("enabled", enabled.to_string()))
}

fn try_set_downgrade_enabled(
    deps: DepsMut,
    info: MessageInfo,
    enabled: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    config.downgrade_enabled = enabled;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "set_downgrade_enabled")
        .add_attribute("enabled", enabled.to_string()))
}

fn try_update_owner(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }

    let new_owner = deps.api.addr_validate(&new_owner)?;
    let previous_owner = std::mem::replace(&mut config.owner, new_owner);
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("action", "update_owner")
        .add_attribute("previous_owner", previous_owner.to_string())
        .add_attribute("new_owner", config.owner.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetConfig {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                owner: config.owner,
                source_asset: config.source_asset,
                destination_asset: config.destination_asset,
                ratio: config.ratio,
                upgrade_enabled: config.upgrade_enabled,
                downgrade_enabled: config.downgrade_enabled,
            })
        }
        QueryMsg::GetRatio {} => {
            let ratio = CONFIG.load(deps.storage)?.ratio;
            to_json_binary(&RatioResponse {
                numerator: ratio.numerator,
                denominator: ratio.denominator,
            })
        }
        QueryMsg::GetTotalUpgraded {} => to_json_binary(&TotalUpgradedResponse {
            total_upgraded: TOTAL_UPGRADED.load(deps.storage)?,
        }),
        QueryMsg::SimulateUpgrade { amount } => {
            let ratio = CONFIG.load(deps.storage)?.ratio;
            to_json_binary(&SimulationResponse {
                amount_in: amount,
                amount_out: ratio.upgrade_amount(amount)?,
            })
        }
        QueryMsg::SimulateDowngrade { amount } => {
            let ratio = CONFIG.load(deps.storage)?.ratio;
            to_json_binary(&SimulationResponse {
                amount_in: amount,
                amount_out: ratio.downgrade_amount(amount)?,
            })
        }
    }
}
