use soroban_sdk::{contracttype, Address};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const MONTH_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const MONTH_LIFETIME_THRESHOLD: u32 = MONTH_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const SECONDS_PER_DAY: u64 = 86_400;

pub(crate) const VERSION: &str = "1.0.0";

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    // Address of the faucet owner
    Token,
    // Address of the token contract holding the pool
    Config,
    // FaucetConfig
    Stats,
    // FaucetStats
    UserLedger(Address),
    // AddressLedgerEntry per requester
    Paused,
    // bool, instance storage
    Lock,
    // bool, instance storage, held while a claim is executing
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FaucetConfig {
    /// Amount sent to the requester on every successful claim
    pub tokens_per_request: i128,
    /// Seconds one address must wait between two claims
    pub cooldown_time: u64,
    /// Per-address cap within one day bucket
    pub max_tokens_per_day: i128,
    /// Informational floor, always equal to `tokens_per_request`
    pub min_token_balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AddressLedgerEntry {
    pub next_request_time: u64,
    pub daily_requested: i128,
    pub last_request_day: u64,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FaucetStats {
    pub total_requests: u64,
    pub total_tokens_distributed: i128,
}
