use soroban_sdk::{symbol_short, Address, Env, Symbol};

// Events Topics
const REQUEST: Symbol = symbol_short!("request");
const CONFIG: Symbol = symbol_short!("config");
const WITHDRAW: Symbol = symbol_short!("withdraw");
const DEPOSIT: Symbol = symbol_short!("deposit");
const PAUSE: Symbol = symbol_short!("pause");
const UNPAUSE: Symbol = symbol_short!("unpause");
const RESET: Symbol = symbol_short!("reset");
const OWNER: Symbol = symbol_short!("owner");

pub(crate) fn tokens_requested(env: &Env, user: &Address, amount: i128) {
    let topics = (REQUEST, user.clone());
    env.events().publish(topics, amount);
}

pub(crate) fn faucet_config_updated(
    env: &Env,
    tokens_per_request: i128,
    cooldown_time: u64,
    max_tokens_per_day: i128,
) {
    let topics = (CONFIG, symbol_short!("update"));
    env.events()
        .publish(topics, (tokens_per_request, cooldown_time, max_tokens_per_day));
}

pub(crate) fn tokens_withdrawn(env: &Env, owner: &Address, amount: i128) {
    let topics = (WITHDRAW, owner.clone());
    env.events().publish(topics, amount);
}

pub(crate) fn tokens_deposited(env: &Env, depositor: &Address, amount: i128) {
    let topics = (DEPOSIT, depositor.clone());
    env.events().publish(topics, amount);
}

pub(crate) fn paused(env: &Env, owner: &Address) {
    env.events().publish((PAUSE,), owner.clone());
}

pub(crate) fn unpaused(env: &Env, owner: &Address) {
    env.events().publish((UNPAUSE,), owner.clone());
}

pub(crate) fn cooldown_reset(env: &Env, user: &Address) {
    let topics = (RESET, user.clone());
    env.events().publish(topics, ());
}

pub(crate) fn ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
    let topics = (OWNER, symbol_short!("transfer"));
    env.events()
        .publish(topics, (previous_owner.clone(), new_owner.clone()));
}
