//! Narrow view of a cw20 token contract: the only calls the ledger makes into
//! either asset. Nothing here lets token code call back into the ledger.

use cosmwasm_std::{
    to_json_binary, Addr, BlockInfo, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::ContractError;

#[derive(Clone, Debug, PartialEq)]
pub struct Cw20Asset(pub Addr);

impl Cw20Asset {
    pub fn balance_of(&self, querier: &QuerierWrapper, account: &Addr) -> StdResult<Uint128> {
        let res: BalanceResponse = querier.query_wasm_smart(
            self.0.to_string(),
            &Cw20QueryMsg::Balance {
                address: account.to_string(),
            },
        )?;
        Ok(res.balance)
    }

    /// Allowance granted by `owner` to `spender`, zero once expired.
    pub fn allowance(
        &self,
        querier: &QuerierWrapper,
        block: &BlockInfo,
        owner: &Addr,
        spender: &Addr,
    ) -> StdResult<Uint128> {
        let res: AllowanceResponse = querier.query_wasm_smart(
            self.0.to_string(),
            &Cw20QueryMsg::Allowance {
                owner: owner.to_string(),
                spender: spender.to_string(),
            },
        )?;
        if res.expires.is_expired(block) {
            return Ok(Uint128::zero());
        }
        Ok(res.allowance)
    }

    /// Checks that `custodian` can pull `amount` from `from` and builds the
    /// `TransferFrom` moving it into the custodian's balance.
    pub fn pull(
        &self,
        querier: &QuerierWrapper,
        block: &BlockInfo,
        from: &Addr,
        custodian: &Addr,
        amount: Uint128,
    ) -> Result<CosmosMsg, ContractError> {
        if amount.is_zero() {
            return Err(self.rejected("invalid zero amount"));
        }
        if self.allowance(querier, block, from, custodian)? < amount {
            return Err(self.rejected("insufficient allowance"));
        }
        if self.balance_of(querier, from)? < amount {
            return Err(self.rejected("transfer amount exceeds balance"));
        }
        self.execute_msg(Cw20ExecuteMsg::TransferFrom {
            owner: from.to_string(),
            recipient: custodian.to_string(),
            amount,
        })
    }

    /// Checks the custodian's own balance and builds the `Transfer` sending
    /// `amount` to `to`.
    pub fn push(
        &self,
        querier: &QuerierWrapper,
        custodian: &Addr,
        to: &Addr,
        amount: Uint128,
    ) -> Result<CosmosMsg, ContractError> {
        if amount.is_zero() {
            return Err(self.rejected("invalid zero amount"));
        }
        if self.balance_of(querier, custodian)? < amount {
            return Err(self.rejected("transfer amount exceeds balance"));
        }
        self.execute_msg(Cw20ExecuteMsg::Transfer {
            recipient: to.to_string(),
            amount,
        })
    }

    fn execute_msg(&self, msg: Cw20ExecuteMsg) -> Result<CosmosMsg, ContractError> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.0.to_string(),
            msg: to_json_binary(&msg)?,
            funds: vec![],
        }))
    }

    fn rejected(&self, reason: &str) -> ContractError {
        ContractError::TransferRejected {
            asset: self.0.to_string(),
            reason: reason.to_string(),
        }
    }
}
