use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use crate::errors::FaucetError;
use crate::events;
use crate::ledger::{self, Denial};
use crate::storage::*;
use crate::utilities::*;

#[contract]
pub struct FaucetContract;

#[contractimpl]
impl FaucetContract {
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        tokens_per_request: i128,
        cooldown_time: u64,
        max_tokens_per_day: i128,
    ) -> Result<(), FaucetError> {
        if has_admin(&env) {
            return Err(FaucetError::AlreadyInitialized);
        }

        let this = env.current_contract_address();
        if token == this || owner == this {
            return Err(FaucetError::InvalidAddress);
        }
        if tokens_per_request <= 0 || max_tokens_per_day < 0 {
            return Err(FaucetError::InvalidAmount);
        }

        set_admin(&env, &owner);
        set_token_address(&env, &token);
        set_config(
            &env,
            &FaucetConfig {
                tokens_per_request,
                cooldown_time,
                max_tokens_per_day,
                min_token_balance: tokens_per_request,
            },
        );
        set_stats(&env, &FaucetStats::default());
        set_paused(&env, false);

        log!(&env, "faucet initialized", owner, token, tokens_per_request);

        Ok(())
    }

    pub fn request_tokens(env: Env, user: Address) -> Result<(), FaucetError> {
        user.require_auth();

        acquire_lock(&env)?;
        let result = Self::claim(&env, &user);
        release_lock(&env);

        result
    }

    pub fn update_faucet_config(
        env: Env,
        tokens_per_request: i128,
        cooldown_time: u64,
        max_tokens_per_day: i128,
    ) -> Result<(), FaucetError> {
        require_admin(&env)?;

        if tokens_per_request <= 0 || max_tokens_per_day < 0 {
            return Err(FaucetError::InvalidAmount);
        }

        // A cap below tokens_per_request is accepted even though it blocks every claim.
        set_config(
            &env,
            &FaucetConfig {
                tokens_per_request,
                cooldown_time,
                max_tokens_per_day,
                min_token_balance: tokens_per_request,
            },
        );

        log!(&env, "config updated", tokens_per_request, cooldown_time, max_tokens_per_day);
        events::faucet_config_updated(&env, tokens_per_request, cooldown_time, max_tokens_per_day);

        Ok(())
    }

    pub fn withdraw_tokens(env: Env, mut amount: i128) -> Result<(), FaucetError> {
        let owner = require_admin(&env)?;

        if amount < 0 {
            return Err(FaucetError::InvalidAmount);
        }

        let balance = pool_balance(&env)?;
        if amount > balance {
            return Err(FaucetError::InsufficientBalance);
        }

        // Full withdrawal on 0
        if amount == 0 {
            amount = balance;
        }

        send_from_pool(&env, &owner, amount)?;

        log!(&env, "tokens withdrawn", owner, amount);
        events::tokens_withdrawn(&env, &owner, amount);

        Ok(())
    }

    pub fn emergency_withdraw(env: Env) -> Result<(), FaucetError> {
        let owner = require_admin(&env)?;

        let balance = pool_balance(&env)?;
        if balance > 0 {
            send_from_pool(&env, &owner, balance)?;
            log!(&env, "emergency withdrawal", owner, balance);
            events::tokens_withdrawn(&env, &owner, balance);
        }

        Ok(())
    }

    pub fn deposit_tokens(env: Env, depositor: Address, amount: i128) -> Result<(), FaucetError> {
        depositor.require_auth();
        extend_contract_ttl(&env);

        if amount <= 0 {
            return Err(FaucetError::InvalidAmount);
        }

        pull_into_pool(&env, &depositor, amount)?;

        log!(&env, "tokens deposited", depositor, amount);
        events::tokens_deposited(&env, &depositor, amount);

        Ok(())
    }

    pub fn pause(env: Env) -> Result<(), FaucetError> {
        let owner = require_admin(&env)?;
        set_paused(&env, true);
        events::paused(&env, &owner);
        Ok(())
    }

    pub fn unpause(env: Env) -> Result<(), FaucetError> {
        let owner = require_admin(&env)?;
        set_paused(&env, false);
        events::unpaused(&env, &owner);
        Ok(())
    }

    /// Clears the cooldown of `user` only. Daily usage is left untouched.
    pub fn reset_user_cooldown(env: Env, user: Address) -> Result<(), FaucetError> {
        require_admin(&env)?;

        let mut entry = get_user_ledger(&env, &user);
        entry.next_request_time = 0;
        set_user_ledger(&env, &user, &entry);

        events::cooldown_reset(&env, &user);

        Ok(())
    }

    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), FaucetError> {
        let owner = require_admin(&env)?;

        if new_owner == env.current_contract_address() {
            return Err(FaucetError::InvalidAddress);
        }

        set_admin(&env, &new_owner);
        events::ownership_transferred(&env, &owner, &new_owner);

        Ok(())
    }

    pub fn get_next_request_time(env: Env, user: Address) -> u64 {
        get_user_ledger(&env, &user).next_request_time
    }

    pub fn get_remaining_cooldown(env: Env, user: Address) -> u64 {
        let entry = get_user_ledger(&env, &user);
        ledger::remaining_cooldown(&entry, env.ledger().timestamp())
    }

    /// Returns `(requested, remaining)` for the current day bucket.
    pub fn get_daily_usage(env: Env, user: Address) -> Result<(i128, i128), FaucetError> {
        let config = get_config(&env)?;
        let entry = get_user_ledger(&env, &user);
        Ok(ledger::daily_usage(&config, &entry, env.ledger().timestamp()))
    }

    /// Whether `request_tokens` would succeed for `user` right now, with the
    /// first reason it would not. Pause is reported last.
    pub fn can_user_request(env: Env, user: Address) -> Result<(bool, String), FaucetError> {
        let config = get_config(&env)?;
        let entry = get_user_ledger(&env, &user);
        let balance = pool_balance(&env)?;

        let verdict = ledger::check_claim(&config, &entry, env.ledger().timestamp(), balance)
            .and_then(|_| {
                if is_paused(&env) {
                    Err(Denial::Paused)
                } else {
                    Ok(())
                }
            });

        Ok(match verdict {
            Ok(()) => (true, String::from_str(&env, "")),
            Err(denial) => (false, String::from_str(&env, denial.reason())),
        })
    }

    /// Returns `(pool_balance, total_requests, total_tokens_distributed, tokens_per_request)`.
    pub fn get_faucet_stats(env: Env) -> Result<(i128, u64, i128, i128), FaucetError> {
        let config = get_config(&env)?;
        let stats = get_stats(&env);
        Ok((
            pool_balance(&env)?,
            stats.total_requests,
            stats.total_tokens_distributed,
            config.tokens_per_request,
        ))
    }

    pub fn get_config(env: Env) -> Result<FaucetConfig, FaucetError> {
        get_config(&env)
    }

    pub fn get_user_info(env: Env, user: Address) -> AddressLedgerEntry {
        get_user_ledger(&env, &user)
    }

    pub fn owner(env: Env) -> Result<Address, FaucetError> {
        get_admin(&env)
    }

    pub fn token(env: Env) -> Result<Address, FaucetError> {
        get_token_address(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        is_paused(&env)
    }

    pub fn version(env: Env) -> String {
        String::from_str(&env, VERSION)
    }
}

impl FaucetContract {
    fn claim(env: &Env, user: &Address) -> Result<(), FaucetError> {
        if is_paused(env) {
            return Err(Denial::Paused.into());
        }

        let config = get_config(env)?;
        let entry = get_user_ledger(env, user);
        let now = env.ledger().timestamp();

        if let Err(denial) = ledger::check_claim(&config, &entry, now, pool_balance(env)?) {
            match denial {
                Denial::CooldownActive(remaining) => {
                    log!(env, "cooldown active, seconds remaining", user.clone(), remaining)
                }
                Denial::DailyLimitExceeded(remaining) => {
                    log!(env, "daily limit exceeded, quota remaining", user.clone(), remaining)
                }
                Denial::InsufficientBalance => {
                    log!(env, "pool balance below tokens_per_request", user.clone())
                }
                Denial::Paused => {}
            }
            return Err(denial.into());
        }

        set_user_ledger(env, user, &ledger::apply_claim(&config, &entry, now));

        let mut stats = get_stats(env);
        stats.total_requests += 1;
        stats.total_tokens_distributed += config.tokens_per_request;
        set_stats(env, &stats);

        send_from_pool(env, user, config.tokens_per_request)?;

        log!(env, "tokens requested", user.clone(), config.tokens_per_request);
        events::tokens_requested(env, user, config.tokens_per_request);

        Ok(())
    }
}
