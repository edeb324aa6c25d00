use soroban_sdk::{token, Address, Env};

use crate::errors::FaucetError;
use crate::storage::*;

pub fn has_admin(env: &Env) -> bool {
    let key = DataKey::Admin;
    env.storage().persistent().has(&key)
}

pub fn get_admin(env: &Env) -> Result<Address, FaucetError> {
    let key = DataKey::Admin;
    let admin = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(FaucetError::Uninitialized)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, MONTH_LIFETIME_THRESHOLD, MONTH_BUMP_AMOUNT);
    Ok(admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    let key = DataKey::Admin;
    env.storage().persistent().set(&key, admin);
    env.storage()
        .persistent()
        .extend_ttl(&key, MONTH_LIFETIME_THRESHOLD, MONTH_BUMP_AMOUNT);
}

/// Loads the owner and requires its signature on the current invocation.
pub fn require_admin(env: &Env) -> Result<Address, FaucetError> {
    extend_contract_ttl(env);
    let admin = get_admin(env)?;
    admin.require_auth();
    Ok(admin)
}

pub fn get_token_address(env: &Env) -> Result<Address, FaucetError> {
    let key = DataKey::Token;
    let token = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(FaucetError::Uninitialized)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, MONTH_LIFETIME_THRESHOLD, MONTH_BUMP_AMOUNT);
    Ok(token)
}

pub fn set_token_address(env: &Env, token: &Address) {
    let key = DataKey::Token;
    env.storage().persistent().set(&key, token);
    env.storage()
        .persistent()
        .extend_ttl(&key, MONTH_LIFETIME_THRESHOLD, MONTH_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> Result<FaucetConfig, FaucetError> {
    let key = DataKey::Config;
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(FaucetError::Uninitialized)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, MONTH_LIFETIME_THRESHOLD, MONTH_BUMP_AMOUNT);
    Ok(config)
}

pub fn set_config(env: &Env, config: &FaucetConfig) {
    let key = DataKey::Config;
    env.storage().persistent().set(&key, config);
    env.storage()
        .persistent()
        .extend_ttl(&key, MONTH_LIFETIME_THRESHOLD, MONTH_BUMP_AMOUNT);
}

pub fn get_stats(env: &Env) -> FaucetStats {
    env.storage()
        .persistent()
        .get(&DataKey::Stats)
        .unwrap_or_default()
}

pub fn set_stats(env: &Env, stats: &FaucetStats) {
    let key = DataKey::Stats;
    env.storage().persistent().set(&key, stats);
    env.storage()
        .persistent()
        .extend_ttl(&key, MONTH_LIFETIME_THRESHOLD, MONTH_BUMP_AMOUNT);
}

// Entries are created lazily: an address never seen before reads as all zeroes.
pub fn get_user_ledger(env: &Env, user: &Address) -> AddressLedgerEntry {
    env.storage()
        .persistent()
        .get(&DataKey::UserLedger(user.clone()))
        .unwrap_or_default()
}

pub fn set_user_ledger(env: &Env, user: &Address, entry: &AddressLedgerEntry) {
    let key = DataKey::UserLedger(user.clone());
    env.storage().persistent().set(&key, entry);
    env.storage()
        .persistent()
        .extend_ttl(&key, MONTH_LIFETIME_THRESHOLD, MONTH_BUMP_AMOUNT);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    extend_contract_ttl(env);
}

/// Keeps the contract instance and the owner entry alive. Instance storage
/// (pause flag, lock) shares the instance TTL. Config and token entries are
/// extended whenever they are read.
pub fn extend_contract_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(MONTH_LIFETIME_THRESHOLD, MONTH_BUMP_AMOUNT);
    if has_admin(env) {
        env.storage().persistent().extend_ttl(
            &DataKey::Admin,
            MONTH_LIFETIME_THRESHOLD,
            MONTH_BUMP_AMOUNT,
        );
    }
}

/// Takes the execution lock, failing if a claim is already in flight.
pub fn acquire_lock(env: &Env) -> Result<(), FaucetError> {
    extend_contract_ttl(env);
    let locked: bool = env
        .storage()
        .instance()
        .get(&DataKey::Lock)
        .unwrap_or(false);
    if locked {
        return Err(FaucetError::ReentrantCall);
    }
    env.storage().instance().set(&DataKey::Lock, &true);
    Ok(())
}

pub fn release_lock(env: &Env) {
    env.storage().instance().remove(&DataKey::Lock);
}

pub fn pool_balance(env: &Env) -> Result<i128, FaucetError> {
    let token_client = token::Client::new(env, &get_token_address(env)?);
    Ok(token_client.balance(&env.current_contract_address()))
}

/// Sends `amount` from the pool. A rejected transfer surfaces as
/// `TransferFailed` so the caller can abort the whole invocation.
pub fn send_from_pool(env: &Env, to: &Address, amount: i128) -> Result<(), FaucetError> {
    let token_client = token::Client::new(env, &get_token_address(env)?);
    match token_client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(FaucetError::TransferFailed),
    }
}

/// Pulls `amount` from `from` into the pool against a prior allowance.
pub fn pull_into_pool(env: &Env, from: &Address, amount: i128) -> Result<(), FaucetError> {
    let token_client = token::Client::new(env, &get_token_address(env)?);
    let pool = env.current_contract_address();
    match token_client.try_transfer_from(&pool, from, &pool, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(FaucetError::TransferFailed),
    }
}
