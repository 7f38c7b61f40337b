//! Adapter over the token contract that holds the pooled balance

use soroban_sdk::{log, token, Address, Env};

use crate::error::WalletError;

/// Token balance currently held by this wallet
pub fn available_balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}

/// Pull `amount` from `from` into the wallet
pub fn receive(env: &Env, token: &Address, from: &Address, amount: i128) {
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), &amount);
}

/// Send `amount` from the wallet to `recipient`.
///
/// The token either moves the full amount or nothing; a rejected transfer
/// maps to `TransferFailed` and the caller's invocation rolls back.
pub fn release(
    env: &Env,
    token: &Address,
    recipient: &Address,
    amount: i128,
) -> Result<(), WalletError> {
    let client = token::Client::new(env, token);
    match client.try_transfer(&env.current_contract_address(), recipient, &amount) {
        Ok(Ok(())) => Ok(()),
        // Token returned an error, or a value we could not decode
        Err(Ok(_)) | Ok(Err(_)) => {
            log!(env, "token transfer rejected", recipient.clone(), amount);
            Err(WalletError::TransferFailed)
        }
        // Host aborted the token invocation
        Err(Err(_)) => {
            log!(env, "token transfer aborted", recipient.clone(), amount);
            Err(WalletError::TransferFailed)
        }
    }
}
