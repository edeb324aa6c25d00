//! Rate-limit arithmetic for a single requester.
//!
//! Everything here is a pure function of the stored config, the requester's
//! ledger entry, the ledger timestamp and the pool balance. `request_tokens`
//! and the read-only views go through the same functions, so the eligibility
//! answered to a client is always the one a claim would get.

use crate::errors::FaucetError;
use crate::storage::{AddressLedgerEntry, FaucetConfig, SECONDS_PER_DAY};

/// Why a claim would be refused, with the quantity the requester is short of.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Denial {
    Paused,
    /// Seconds until the requester may claim again.
    CooldownActive(u64),
    /// Quota still available in the current day bucket.
    DailyLimitExceeded(i128),
    InsufficientBalance,
}

impl Denial {
    pub(crate) fn reason(&self) -> &'static str {
        match self {
            Denial::Paused => "Faucet is paused",
            Denial::CooldownActive(_) => "Cooldown active",
            Denial::DailyLimitExceeded(_) => "Daily limit exceeded",
            Denial::InsufficientBalance => "Insufficient faucet balance",
        }
    }
}

impl From<Denial> for FaucetError {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::Paused => FaucetError::Paused,
            Denial::CooldownActive(_) => FaucetError::CooldownActive,
            Denial::DailyLimitExceeded(_) => FaucetError::DailyLimitExceeded,
            Denial::InsufficientBalance => FaucetError::InsufficientBalance,
        }
    }
}

pub(crate) fn day_index(timestamp: u64) -> u64 {
    timestamp / SECONDS_PER_DAY
}

/// The stored daily counter is only rewritten by a claim, so an entry from an
/// earlier day bucket still holds that day's total and reads as zero here.
pub(crate) fn effective_daily_requested(entry: &AddressLedgerEntry, now: u64) -> i128 {
    if entry.last_request_day < day_index(now) {
        0
    } else {
        entry.daily_requested
    }
}

pub(crate) fn remaining_cooldown(entry: &AddressLedgerEntry, now: u64) -> u64 {
    entry.next_request_time.saturating_sub(now)
}

/// Returns `(requested, remaining)` for the current day bucket.
pub(crate) fn daily_usage(
    config: &FaucetConfig,
    entry: &AddressLedgerEntry,
    now: u64,
) -> (i128, i128) {
    let requested = effective_daily_requested(entry, now);
    let remaining = (config.max_tokens_per_day - requested).max(0);
    (requested, remaining)
}

/// Cooldown, daily cap and pool balance, in that order. The pause flag is
/// left to the caller because claims and the eligibility view rank it
/// differently.
pub(crate) fn check_claim(
    config: &FaucetConfig,
    entry: &AddressLedgerEntry,
    now: u64,
    pool_balance: i128,
) -> Result<(), Denial> {
    if now < entry.next_request_time {
        return Err(Denial::CooldownActive(remaining_cooldown(entry, now)));
    }

    let requested = effective_daily_requested(entry, now);
    if requested.saturating_add(config.tokens_per_request) > config.max_tokens_per_day {
        let remaining = (config.max_tokens_per_day - requested).max(0);
        return Err(Denial::DailyLimitExceeded(remaining));
    }

    if pool_balance < config.tokens_per_request {
        return Err(Denial::InsufficientBalance);
    }

    Ok(())
}

/// Entry as it must be stored after a successful claim at `now`.
pub(crate) fn apply_claim(
    config: &FaucetConfig,
    entry: &AddressLedgerEntry,
    now: u64,
) -> AddressLedgerEntry {
    let current_day = day_index(now);
    let mut updated = entry.clone();

    if updated.last_request_day < current_day {
        updated.daily_requested = 0;
        updated.last_request_day = current_day;
    }

    updated.next_request_time = now.saturating_add(config.cooldown_time);
    updated.daily_requested += config.tokens_per_request;
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(tokens_per_request: i128, cooldown_time: u64, max_tokens_per_day: i128) -> FaucetConfig {
        FaucetConfig {
            tokens_per_request,
            cooldown_time,
            max_tokens_per_day,
            min_token_balance: tokens_per_request,
        }
    }

    #[test]
    fn test_day_index_boundaries() {
        assert_eq!(day_index(0), 0);
        assert_eq!(day_index(86_399), 0);
        assert_eq!(day_index(86_400), 1);
        assert_eq!(day_index(3 * 86_400 + 5), 3);
    }

    #[test]
    fn test_cooldown_denial_carries_seconds_remaining() {
        let cfg = config(10, 86_400, 10);
        let entry = apply_claim(&cfg, &AddressLedgerEntry::default(), 0);

        assert_eq!(entry.next_request_time, 86_400);
        assert_eq!(
            check_claim(&cfg, &entry, 100, 90),
            Err(Denial::CooldownActive(86_300))
        );
        assert_eq!(check_claim(&cfg, &entry, 86_400, 90), Ok(()));
    }

    #[test]
    fn test_cap_below_request_amount_never_passes() {
        let cfg = config(10, 0, 5);
        let entry = AddressLedgerEntry::default();

        assert_eq!(
            check_claim(&cfg, &entry, 0, 1_000),
            Err(Denial::DailyLimitExceeded(5))
        );
        assert_eq!(
            check_claim(&cfg, &entry, 40 * 86_400, 1_000),
            Err(Denial::DailyLimitExceeded(5))
        );
    }

    #[test]
    fn test_stale_day_reads_as_zero_until_next_claim() {
        let cfg = config(10, 0, 20);
        let mut entry = AddressLedgerEntry::default();
        entry = apply_claim(&cfg, &entry, 10);
        entry = apply_claim(&cfg, &entry, 20);

        assert_eq!(entry.daily_requested, 20);
        assert_eq!(
            check_claim(&cfg, &entry, 30, 1_000),
            Err(Denial::DailyLimitExceeded(0))
        );

        let next_day = 86_400 + 1;
        // storage keeps yesterday's total, the views see a fresh bucket
        assert_eq!(entry.daily_requested, 20);
        assert_eq!(daily_usage(&cfg, &entry, next_day), (0, 20));
        assert_eq!(check_claim(&cfg, &entry, next_day, 1_000), Ok(()));

        let rolled = apply_claim(&cfg, &entry, next_day);
        assert_eq!(rolled.daily_requested, 10);
        assert_eq!(rolled.last_request_day, 1);
    }

    #[test]
    fn test_pool_checked_after_cooldown_and_cap() {
        let cfg = config(10, 60, 100);
        let entry = AddressLedgerEntry::default();

        assert_eq!(
            check_claim(&cfg, &entry, 0, 9),
            Err(Denial::InsufficientBalance)
        );
        assert_eq!(check_claim(&cfg, &entry, 0, 10), Ok(()));

        let claimed = apply_claim(&cfg, &entry, 0);
        // cooldown outranks an empty pool
        assert_eq!(
            check_claim(&cfg, &claimed, 1, 0),
            Err(Denial::CooldownActive(59))
        );
    }

    #[test]
    fn test_daily_usage_remaining_never_negative() {
        let cfg = config(10, 0, 30);
        let entry = AddressLedgerEntry {
            next_request_time: 0,
            daily_requested: 30,
            last_request_day: 0,
        };
        assert_eq!(daily_usage(&cfg, &entry, 5), (30, 0));

        let lowered = config(10, 0, 15);
        assert_eq!(daily_usage(&lowered, &entry, 5), (30, 0));
    }

    #[test]
    fn test_denial_maps_to_contract_error() {
        assert_eq!(FaucetError::from(Denial::Paused), FaucetError::Paused);
        assert_eq!(
            FaucetError::from(Denial::CooldownActive(1)),
            FaucetError::CooldownActive
        );
        assert_eq!(
            FaucetError::from(Denial::DailyLimitExceeded(0)),
            FaucetError::DailyLimitExceeded
        );
        assert_eq!(Denial::CooldownActive(5).reason(), "Cooldown active");
    }
}
